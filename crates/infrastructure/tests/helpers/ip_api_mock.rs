#![allow(dead_code)]
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::{oneshot, RwLock};

/// Canned reply for one address
#[derive(Clone)]
pub enum MockReply {
    Json(String),
    Status(StatusCode),
    Delay(Duration),
}

#[derive(Clone, Default)]
struct MockState {
    replies: Arc<RwLock<HashMap<String, MockReply>>>,
    requests: Arc<AtomicU64>,
}

/// Local stand-in for ip-api.com, serving `GET /json/{address}`
pub struct MockIpApiServer {
    addr: SocketAddr,
    state: MockState,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockIpApiServer {
    pub async fn start() -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = MockState::default();

        let app = Router::new()
            .route("/json/{address}", get(lookup))
            .with_state(state.clone());

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Ok(Self {
            addr,
            state,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/json", self.addr)
    }

    pub fn request_count(&self) -> u64 {
        self.state.requests.load(Ordering::Relaxed)
    }

    pub async fn reply(&self, address: &str, reply: MockReply) {
        self.state
            .replies
            .write()
            .await
            .insert(address.to_string(), reply);
    }

    pub async fn reply_success(&self, address: &str, lat: f64, lon: f64) {
        let body = format!(
            r#"{{"query":"{address}","status":"success","country":"Canada","countryCode":"CA","region":"QC","regionName":"Quebec","zip":"H1K","lat":{lat},"lon":{lon},"isp":"Videotron","org":"Videotron Ltee"}}"#
        );
        self.reply(address, MockReply::Json(body)).await;
    }
}

impl Drop for MockIpApiServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn lookup(State(state): State<MockState>, Path(address): Path<String>) -> Response {
    state.requests.fetch_add(1, Ordering::Relaxed);
    let reply = state.replies.read().await.get(&address).cloned();

    match reply {
        Some(MockReply::Json(body)) => (
            StatusCode::OK,
            [("content-type", "application/json")],
            body,
        )
            .into_response(),
        Some(MockReply::Status(status)) => status.into_response(),
        Some(MockReply::Delay(delay)) => {
            tokio::time::sleep(delay).await;
            StatusCode::OK.into_response()
        }
        None => (
            StatusCode::OK,
            [("content-type", "application/json")],
            format!(r#"{{"query":"{address}","status":"fail","message":"invalid query"}}"#),
        )
            .into_response(),
    }
}
