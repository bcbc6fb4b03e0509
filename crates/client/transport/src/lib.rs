//! Network implementations of the runtime's feed traits.
//!
//! - [`HttpSnapshotSource`] fetches the snapshot with a single HTTP `GET`
//! - [`WebSocketPushSource`] reads one push message per websocket text frame
//!
//! Scheme selection lives in `client-bootstrap`; these types take ready-made
//! URLs.
pub mod snapshot;
pub mod stream;

pub use snapshot::HttpSnapshotSource;
pub use stream::WebSocketPushSource;
