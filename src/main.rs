#![allow(dead_code)]

use std::{env, net::SocketAddr, sync::Arc};

use axum::{
    http::header::CONTENT_TYPE,
    http::Method,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use crate::{
    app::envy::Envy,
    generations::{
        apis::{generation_client::GenerationClient, modal::service::ModalClient},
        util::poll_policy::PollPolicy,
        GENERATE_ROUTE,
    },
    lifecycle::transport::{http_relay::HttpRelay, local_relay::LocalRelay, RelayTransport},
};

mod app;
mod generations;
mod lifecycle;
mod presentation;

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn GenerationClient>,
    pub poll_policy: PollPolicy,
    pub relay: Arc<dyn RelayTransport>,
}

impl AppState {
    /// State whose server-rendered page reaches the relay in-process.
    pub fn new(client: Arc<dyn GenerationClient>, poll_policy: PollPolicy) -> Self {
        let relay = Arc::new(LocalRelay::new(client.clone(), poll_policy));

        Self {
            client,
            poll_policy,
            relay,
        }
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET]);

    Router::new()
        .route(
            "/",
            get(presentation::controller::get_page).post(presentation::controller::submit_page),
        )
        .route("/health", get(app::controller::get_health))
        // generations
        .route(GENERATE_ROUTE, post(generations::controller::generate_image))
        // layers
        .layer(cors)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("failed to read environment: {:#?}", e);
            return;
        }
    };
    let poll_policy = match envy.poll_policy() {
        Ok(policy) => policy,
        Err(e) => {
            tracing::error!("invalid poll policy: {}", e);
            return;
        }
    };

    // properties
    let port = envy.port.unwrap_or(3000);
    let client: Arc<dyn GenerationClient> = match ModalClient::new(envy.modal_url()) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            tracing::error!("failed to build generation client: {}", e);
            return;
        }
    };

    let mut state = AppState::new(client, poll_policy);
    if let Some(relay_url) = &envy.relay_url {
        tracing::info!("page requests relayed through {}", relay_url);
        state.relay = match HttpRelay::new(relay_url) {
            Ok(relay) => Arc::new(relay),
            Err(e) => {
                tracing::error!("failed to build relay client: {}", e);
                return;
            }
        };
    }

    tracing::info!(
        "polling {} up to {} times ({:?})",
        envy.modal_url(),
        poll_policy.max_attempts,
        poll_policy.backoff
    );

    // app
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    if let Err(e) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!(%e);
    }
}
