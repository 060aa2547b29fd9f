#![allow(dead_code)]

use crate::common::jwt_helper::create_test_token;

use bm_core::ChangeEvent;

use axum_test::{TestServer, TestWebSocket};
use tokio::time::{Duration, timeout};

/// Change-feed test client wrapper
pub struct FeedTestClient {
    ws: TestWebSocket,
    pub user_id: String,
}

impl FeedTestClient {
    /// Connect with a bearer token for `user_id`
    pub async fn connect(server: &TestServer, user_id: &str, jwt_secret: &[u8]) -> Self {
        let token = create_test_token(user_id, jwt_secret);

        let ws = server
            .get_websocket("/ws")
            .add_header("Authorization", format!("Bearer {}", token))
            .await
            .into_websocket()
            .await;

        Self {
            ws,
            user_id: user_id.to_string(),
        }
    }

    /// Connect passing the token as a query parameter, the way browsers do
    pub async fn connect_with_query_token(
        server: &TestServer,
        user_id: &str,
        jwt_secret: &[u8],
    ) -> Self {
        let token = create_test_token(user_id, jwt_secret);

        let ws = server
            .get_websocket(&format!("/ws?access_token={}", token))
            .await
            .into_websocket()
            .await;

        Self {
            ws,
            user_id: user_id.to_string(),
        }
    }

    /// Connect without credentials (auth-disabled servers)
    pub async fn connect_anonymous(server: &TestServer, user_id: &str) -> Self {
        let ws = server
            .get_websocket("/ws")
            .await
            .into_websocket()
            .await;

        Self {
            ws,
            user_id: user_id.to_string(),
        }
    }

    pub async fn receive_event(&mut self) -> ChangeEvent {
        let text = self.ws.receive_text().await;
        serde_json::from_str(&text).expect("feed frame should be a ChangeEvent")
    }

    /// `None` when nothing arrives within `wait`
    pub async fn try_receive_event(&mut self, wait: Duration) -> Option<ChangeEvent> {
        timeout(wait, self.receive_event()).await.ok()
    }

    pub async fn send_text(&mut self, text: impl std::fmt::Display) {
        self.ws.send_text(text).await;
    }

    pub async fn close(self) {
        self.ws.close().await;
    }
}
