use futures_util::{SinkExt, StreamExt};
use series::SessionEvent;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tokio_util::sync::CancellationToken;

use crate::error::FeedError;
use crate::sample::parse_sample;

pub const DEFAULT_FEED_URL: &str = "ws://127.0.0.1:8080/ws/delivery";

/// A live feed connection scoped to this handle. `open` establishes exactly
/// one connection; `close` consumes the handle, so a double teardown is
/// unrepresentable. Dropping the handle without closing still cancels the
/// pump task.
pub struct FeedSubscription {
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl FeedSubscription {
    pub async fn open(
        url: &str,
        events: mpsc::Sender<SessionEvent>,
    ) -> Result<Self, FeedError> {
        let (stream, _response) = connect_async(url).await.map_err(FeedError::Connect)?;
        let cancel = CancellationToken::new();
        let task = tokio::spawn(pump(stream, events, cancel.clone()));

        Ok(Self {
            cancel,
            task: Some(task),
        })
    }

    /// Sends a close frame, stops the pump task, and waits for it to finish.
    pub async fn close(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for FeedSubscription {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn pump(
    mut stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
    events: mpsc::Sender<SessionEvent>,
    cancel: CancellationToken,
) {
    loop {
        let frame = tokio::select! {
            _ = cancel.cancelled() => {
                let _ = stream.send(Message::Close(None)).await;
                return;
            }
            frame = stream.next() => frame,
        };

        match frame {
            Some(Ok(Message::Text(payload))) => match parse_sample(&payload) {
                Ok(price) => {
                    if events.send(SessionEvent::FeedSample(price)).await.is_err() {
                        // Receiver side of the session is gone.
                        let _ = stream.send(Message::Close(None)).await;
                        return;
                    }
                }
                Err(err) => {
                    tracing::warn!(%err, "skipping malformed feed sample");
                }
            },
            Some(Ok(Message::Close(_))) | None => {
                let _ = events
                    .send(SessionEvent::FeedLost(
                        "feed endpoint closed the connection".to_string(),
                    ))
                    .await;
                return;
            }
            Some(Ok(_)) => {}
            Some(Err(err)) => {
                let _ = events.send(SessionEvent::FeedLost(err.to_string())).await;
                return;
            }
        }
    }
}
