//! Shared test fixtures: a stub storefront backend and recording ports

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use storefront_core::domain::Route;
use storefront_core::port::{Navigator, Notifier};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Canned reply for one request
#[derive(Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: String,
    pub delay: Option<Duration>,
}

impl StubResponse {
    pub fn json(value: serde_json::Value) -> Self {
        Self {
            status: 200,
            body: value.to_string(),
            delay: None,
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// Request as seen by the stub
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

type Responder = Arc<dyn Fn(&str, &str) -> StubResponse + Send + Sync>;

#[derive(Clone)]
struct Backend {
    responder: Responder,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Storefront backend on an ephemeral port, answering from a responder closure
pub struct StubServer {
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: JoinHandle<()>,
}

impl StubServer {
    pub async fn start<F>(responder: F) -> Self
    where
        F: Fn(&str, &str) -> StubResponse + Send + Sync + 'static,
    {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let backend = Backend {
            responder: Arc::new(responder),
            requests: requests.clone(),
        };

        let app = Router::new()
            .route("/api/product/getproducts", get(respond))
            .route("/api/cart/add", post(respond))
            .fallback(respond)
            .with_state(backend);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/", addr),
            requests,
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        self.base_url.clone()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn respond(
    State(backend): State<Backend>,
    method: Method,
    uri: Uri,
    body: String,
) -> Response {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    let reply = (backend.responder)(method.as_str(), &path);
    backend.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path,
        body,
    });

    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }

    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, "application/json")], reply.body).into_response()
}

/// Notifier that records every toast
#[derive(Default)]
pub struct RecordingNotifier {
    pub successes: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn notify_success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn notify_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

/// Navigator that records every route
#[derive(Default)]
pub struct RecordingNavigator {
    pub routes: Mutex<Vec<Route>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &Route) {
        self.routes.lock().unwrap().push(route.clone());
    }
}

/// Catalog used across tests (server order: p1, p2, p3)
pub fn catalog() -> serde_json::Value {
    serde_json::json!({
        "data": {
            "products": [
                {
                    "_id": "p1",
                    "productName": "Mug",
                    "price": 200,
                    "actualPrice": 150,
                    "discount": 25,
                    "technologies": ["ceramic"],
                    "images": ["a.jpg"],
                    "description": "d"
                },
                {
                    "_id": "p2",
                    "productName": "Notebook",
                    "price": 99,
                    "actualPrice": 99,
                    "discount": 0,
                    "technologies": ["paper", "a5"],
                    "images": ["nb.jpg", "nb-back.jpg"],
                    "description": "Dotted pages"
                },
                {
                    "_id": "p3",
                    "productName": "Sticker Pack",
                    "price": 49.5,
                    "actualPrice": 29.5,
                    "discount": 40,
                    "technologies": [],
                    "images": [],
                    "description": ""
                }
            ]
        }
    })
}
