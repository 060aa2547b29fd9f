use crate::{
    ConnectionConfig, ConnectionId, FeedError, Metrics, Result as FeedErrorResult, ShutdownGuard,
    UserBroadcaster,
};

use bm_core::{ChangeEvent, ChangeFilter};

use std::panic::Location;

use axum::extract::ws::{Message, WebSocket};
use error_location::ErrorLocation;
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::mpsc;
use tokio::time::Instant;

/// One change-feed WebSocket: pushes the user's `ChangeEvent`s as JSON
/// text frames until the client leaves, the heartbeat lapses or the
/// server shuts down.
pub struct WebSocketConnection {
    connection_id: ConnectionId,
    user_id: String,
    config: ConnectionConfig,
    metrics: Metrics,
    broadcaster: UserBroadcaster,
}

impl WebSocketConnection {
    pub fn new(
        connection_id: ConnectionId,
        user_id: String,
        config: ConnectionConfig,
        metrics: Metrics,
        broadcaster: UserBroadcaster,
    ) -> Self {
        Self {
            connection_id,
            user_id,
            config,
            metrics,
            broadcaster,
        }
    }

    pub async fn handle(
        self,
        socket: WebSocket,
        mut shutdown_guard: ShutdownGuard,
    ) -> FeedErrorResult<()> {
        log::info!(
            "Change feed connection {} established for user {}",
            self.connection_id,
            self.user_id
        );

        self.metrics.connection_established();

        let (mut ws_sender, mut ws_receiver) = socket.split();

        // Bounded so a slow client applies backpressure instead of growing memory
        let (tx, mut rx) = mpsc::channel::<Message>(self.config.send_buffer_size);

        let filter = ChangeFilter::for_user(self.user_id.clone());
        let mut feed_rx = self.broadcaster.subscribe(&self.user_id).await;

        let send_task = tokio::spawn(async move {
            while let Some(msg) = rx.recv().await {
                if ws_sender.send(msg).await.is_err() {
                    break;
                }
            }
        });

        let mut heartbeat = tokio::time::interval(self.config.heartbeat_interval());
        heartbeat.tick().await; // first tick fires immediately
        let mut last_pong = Instant::now();

        let result = loop {
            tokio::select! {
                msg = ws_receiver.next() => {
                    match msg {
                        Some(Ok(Message::Pong(_))) => {
                            last_pong = Instant::now();
                        }
                        Some(Ok(Message::Close(_))) => {
                            log::info!("Received close frame from connection {}", self.connection_id);
                            break Ok(());
                        }
                        Some(Ok(msg)) => {
                            if let Err(e) = self.handle_client_message(msg, &tx).await {
                                log::error!(
                                    "Error handling message from connection {}: {}",
                                    self.connection_id,
                                    e
                                );
                                self.metrics.error_occurred("message_handling");
                                break Err(e);
                            }
                        }
                        Some(Err(e)) => {
                            log::error!(
                                "WebSocket error on connection {}: {}",
                                self.connection_id,
                                e
                            );
                            break Err(FeedError::ConnectionClosed {
                                reason: format!("WebSocket error: {}", e),
                                location: ErrorLocation::from(Location::caller()),
                            });
                        }
                        None => {
                            log::info!("Connection {} closed by client", self.connection_id);
                            break Ok(());
                        }
                    }
                }

                event = feed_rx.recv() => {
                    match event {
                        Ok(event) => {
                            if !filter.matches(&event) {
                                continue;
                            }
                            if let Err(e) = self.forward_event(&event, &tx).await {
                                log::error!(
                                    "Error forwarding change to connection {}: {}",
                                    self.connection_id,
                                    e
                                );
                                self.metrics.error_occurred("forward");
                            }
                        }
                        Err(RecvError::Lagged(missed)) => {
                            log::warn!(
                                "Connection {} lagged, missed {} changes",
                                self.connection_id,
                                missed
                            );
                            self.metrics.error_occurred("broadcast_lagged");
                        }
                        Err(RecvError::Closed) => {
                            log::info!("Change feed closed for connection {}", self.connection_id);
                            break Ok(());
                        }
                    }
                }

                _ = heartbeat.tick() => {
                    if last_pong.elapsed() > self.config.heartbeat_timeout() {
                        log::warn!(
                            "Connection {} missed heartbeat for {}s",
                            self.connection_id,
                            self.config.heartbeat_timeout_secs
                        );
                        self.metrics.error_occurred("heartbeat_timeout");
                        break Err(FeedError::HeartbeatTimeout {
                            timeout_secs: self.config.heartbeat_timeout_secs,
                            location: ErrorLocation::from(Location::caller()),
                        });
                    }
                    if tx.send(Message::Ping(Default::default())).await.is_err() {
                        break Ok(());
                    }
                }

                _ = shutdown_guard.wait() => {
                    log::info!("Shutting down connection {} gracefully", self.connection_id);
                    let _ = tx.send(Message::Close(None)).await;
                    break Ok(());
                }
            }
        };

        // Cleanup
        drop(feed_rx);
        self.broadcaster.release(&self.user_id).await;
        drop(tx); // Close channel to terminate send task
        let _ = send_task.await;

        self.metrics
            .connection_closed(if result.is_ok() { "normal" } else { "error" });

        log::info!(
            "Change feed connection {} closed for user {}",
            self.connection_id,
            self.user_id
        );

        result
    }

    /// The feed is server-push only; client frames are acknowledged and dropped
    async fn handle_client_message(
        &self,
        msg: Message,
        tx: &mpsc::Sender<Message>,
    ) -> FeedErrorResult<()> {
        match msg {
            Message::Text(text) => {
                log::debug!(
                    "Ignoring text frame ({} bytes) from connection {}",
                    text.len(),
                    self.connection_id
                );
                self.metrics.message_received("text");
                Ok(())
            }
            Message::Binary(data) => {
                log::debug!(
                    "Ignoring binary frame ({} bytes) from connection {}",
                    data.len(),
                    self.connection_id
                );
                self.metrics.message_received("binary");
                Ok(())
            }
            Message::Ping(data) => {
                tx.send(Message::Pong(data))
                    .await
                    .map_err(|_| FeedError::SendBufferFull {
                        location: ErrorLocation::from(Location::caller()),
                    })
            }
            Message::Pong(_) | Message::Close(_) => Ok(()),
        }
    }

    async fn forward_event(
        &self,
        event: &ChangeEvent,
        tx: &mpsc::Sender<Message>,
    ) -> FeedErrorResult<()> {
        let json = serde_json::to_string(event)?;

        tx.send(Message::Text(json.into()))
            .await
            .map_err(|_| FeedError::SendBufferFull {
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.metrics.message_sent(event.kind().as_str());

        Ok(())
    }
}
