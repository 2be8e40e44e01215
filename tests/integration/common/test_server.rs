use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const PETSTORE_YAML: &str = include_str!("../../fixtures/petstore.yaml");
pub const USERS_OPENAPI_JSON: &str = include_str!("../../fixtures/users-openapi.json");

/// Serves fixture documents over HTTP on a random local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub base_url: String,
    flaky_calls: Arc<AtomicUsize>,
}

impl TestServer {
    pub async fn new() -> Self {
        let flaky_calls = Arc::new(AtomicUsize::new(0));

        let app = Router::new()
            .route("/petstore.yaml", get(|| async { PETSTORE_YAML }))
            .route(
                "/users.json",
                get(|| async { ([(header::CONTENT_TYPE, "application/json")], USERS_OPENAPI_JSON) }),
            )
            .route("/broken", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
            .route("/flaky.yaml", get(flaky))
            .with_state(flaky_calls.clone());

        // Start server on random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        TestServer {
            addr,
            base_url,
            flaky_calls,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn flaky_calls(&self) -> usize {
        self.flaky_calls.load(Ordering::SeqCst)
    }
}

/// Fails with 503 on the first call, then serves the petstore.
async fn flaky(State(calls): State<Arc<AtomicUsize>>) -> impl IntoResponse {
    if calls.fetch_add(1, Ordering::SeqCst) == 0 {
        (StatusCode::SERVICE_UNAVAILABLE, "try again").into_response()
    } else {
        PETSTORE_YAML.into_response()
    }
}
