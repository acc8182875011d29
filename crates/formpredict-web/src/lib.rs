//! HTML form front-end and JSON API for FormPredict.
//!
//! [`router`] builds the axum [`Router`](axum::Router) over a shared
//! [`AppState`]; [`serve`] binds it with a permissive CORS layer.
//!
//! | route | |
//! |---|---|
//! | `GET /` | index of variants |
//! | `GET /{variant}` | input form |
//! | `POST /{variant}/predict` | form post, re-renders the page with the outcome |
//! | `POST /api/{variant}/predict` | JSON answers in, JSON prediction out |
//! | `GET /api/{variant}/schema` | the variant's schema as JSON |

pub mod api;
pub mod html;

use std::net::SocketAddr;
use std::sync::Arc;

use formpredict_core::VariantRegistry;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub use api::{router, ErrorResponse, PredictResponse};

/// State shared by every request. Read-only after startup.
#[derive(Debug)]
pub struct AppState {
    pub registry: VariantRegistry,
}

impl AppState {
    pub fn new(registry: VariantRegistry) -> Self {
        Self { registry }
    }
}

/// Binds `addr` and serves until the process is stopped.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> std::io::Result<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let variants = state.registry.len() as u64;
    let app = router(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    info!(
        event = "server_listening",
        addr = %local,
        variants,
        "Server listening"
    );
    axum::serve(listener, app).await
}
