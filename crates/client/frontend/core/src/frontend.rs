//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runtime::RuntimeHandle;

/// Frontend abstraction for UI layers.
///
/// Frontends communicate with the runtime via RuntimeHandle:
/// - Subscribe to events (Standings, Feed)
/// - Read the ordered identities and records after each notification
///
/// Frontends do NOT own the Runtime and cannot write to the standings; the
/// update bridge is the only writer.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
///
/// # Example Implementation
///
/// ```no_run
/// use async_trait::async_trait;
/// use client_frontend_core::{Frontend, LeaderboardView};
/// use runtime::RuntimeHandle;
/// use anyhow::Result;
///
/// struct PrintFrontend;
///
/// #[async_trait]
/// impl Frontend for PrintFrontend {
///     async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
///         let mut events = handle.subscribe(runtime::Topic::Standings);
///
///         while events.recv().await.is_ok() {
///             for row in LeaderboardView::from_handle(&handle).rows {
///                 println!("{} {}", row.player_name, row.money);
///             }
///         }
///
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop.
    ///
    /// It should block until the user quits the application.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()>;
}
