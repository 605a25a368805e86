//! Fake license/provisioning server for end-to-end tests.
//!
//! Routes (all `POST`):
//! - `/provision?...&signedRequest=<data>`: `200` with `certificate:<data>`,
//!   `400` when `signedRequest` is missing.
//! - `/license`: `200` with `license:` + request body, `403 denied` for an
//!   empty body.
//! - `/status/{code}`: responds with `code` and body `status <code>`.
//! - `/slow`: sleeps for [`SLOW_RESPONSE_DELAY`] before answering `200`.

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, Uri, header},
    response::IntoResponse,
    routing::post,
};
use bytes::Bytes;
use tokio::{net::TcpListener, sync::oneshot};
use url::Url;

pub const SLOW_RESPONSE_DELAY: Duration = Duration::from_millis(500);

/// One request as observed by the fake server.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub body: Bytes,
}

type Journal = Arc<Mutex<Vec<RecordedRequest>>>;

fn record(journal: &Journal, uri: &Uri, headers: &HeaderMap, body: &Bytes) {
    let entry = RecordedRequest {
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: body.clone(),
    };
    journal.lock().expect("journal lock").push(entry);
}

async fn provision_endpoint(
    State(journal): State<Journal>,
    Query(params): Query<HashMap<String, String>>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    record(&journal, &uri, &headers, &body);
    match params.get("signedRequest") {
        Some(signed) => (StatusCode::OK, format!("certificate:{signed}").into_bytes()),
        None => (
            StatusCode::BAD_REQUEST,
            b"missing signedRequest".to_vec(),
        ),
    }
}

async fn license_endpoint(
    State(journal): State<Journal>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    record(&journal, &uri, &headers, &body);
    if body.is_empty() {
        return (StatusCode::FORBIDDEN, b"denied".to_vec());
    }
    let mut license = b"license:".to_vec();
    license.extend_from_slice(&body);
    (StatusCode::OK, license)
}

async fn status_endpoint(
    State(journal): State<Journal>,
    Path(code): Path<u16>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    record(&journal, &uri, &headers, &body);
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, format!("status {code}"))
}

async fn slow_endpoint() -> impl IntoResponse {
    tokio::time::sleep(SLOW_RESPONSE_DELAY).await;
    (StatusCode::OK, "late")
}

/// Router serving the routes described in the module docs.
pub fn license_router() -> Router {
    license_router_with_journal(Journal::default())
}

fn license_router_with_journal(journal: Journal) -> Router {
    Router::new()
        .route("/provision", post(provision_endpoint))
        .route("/license", post(license_endpoint))
        .route("/status/{code}", post(status_endpoint))
        .route("/slow", post(slow_endpoint))
        .with_state(journal)
}

/// [`license_router`] bound to a random localhost port, with request capture.
///
/// The server stops accepting connections when this value is dropped.
pub struct LicenseServer {
    addr: SocketAddr,
    base_url: Url,
    journal: Journal,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl LicenseServer {
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind license server listener");
        let addr = listener.local_addr().expect("license server local addr");

        let journal = Journal::default();
        let router = license_router_with_journal(journal.clone());
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("run license server");
        });

        Self {
            addr,
            base_url: Url::parse(&format!("http://{addr}")).expect("license server base URL"),
            journal,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Socket the server listens on.
    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// # Panics
    ///
    /// Panics if `path` cannot be joined onto the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> Url {
        self.base_url.join(path).expect("join license server path")
    }

    /// Requests received so far, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if a handler panicked while holding the journal lock.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.journal.lock().expect("journal lock").clone()
    }
}

impl Drop for LicenseServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
