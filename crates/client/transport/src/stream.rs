//! Websocket push source.
use async_trait::async_trait;
use futures::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use runtime::{PushSource, StreamDisconnected};

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Push source reading JSON payloads from websocket text frames.
///
/// Control frames are answered by tungstenite and skipped here. A close frame
/// or end of stream ends the feed cleanly; any protocol or I/O error is
/// reported as [`StreamDisconnected`].
pub struct WebSocketPushSource {
    url: String,
    socket: Socket,
}

impl WebSocketPushSource {
    /// Open a connection to `url` (`ws://` or `wss://`).
    pub async fn connect(url: &str) -> Result<Self, StreamDisconnected> {
        tracing::debug!(target: "client::transport", url, "Opening push stream");

        let (socket, response) = connect_async(url)
            .await
            .map_err(|e| StreamDisconnected::new(format!("connect to {url} failed: {e}")))?;

        tracing::info!(
            target: "client::transport",
            url,
            status = response.status().as_u16(),
            "Push stream connected"
        );

        Ok(Self {
            url: url.to_string(),
            socket,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PushSource for WebSocketPushSource {
    async fn next_message(&mut self) -> Result<Option<String>, StreamDisconnected> {
        while let Some(frame) = self.socket.next().await {
            match frame {
                Ok(Message::Text(text)) => return Ok(Some(text)),
                Ok(Message::Binary(bytes)) => match String::from_utf8(bytes) {
                    Ok(text) => return Ok(Some(text)),
                    Err(_) => {
                        tracing::warn!(
                            target: "client::transport",
                            "Ignoring non UTF-8 binary frame"
                        );
                    }
                },
                Ok(Message::Close(frame)) => {
                    tracing::debug!(target: "client::transport", ?frame, "Close frame received");
                    return Ok(None);
                }
                Ok(Message::Ping(_) | Message::Pong(_) | Message::Frame(_)) => {}
                Err(e) => return Err(StreamDisconnected::new(e.to_string())),
            }
        }

        Ok(None)
    }
}
