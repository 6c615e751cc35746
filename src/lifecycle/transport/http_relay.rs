use std::time::Duration;

use async_trait::async_trait;

use crate::{
    generations::{
        dtos::generate_image_dto::GenerateImageDto, models::generated_image::GeneratedImage,
        GENERATE_ROUTE,
    },
    lifecycle::models::relay_error_response::RelayErrorResponse,
};

use super::{RelayTransport, TransportError};

/// Talks to a relay over http, the way a browser would.
#[derive(Debug, Clone)]
pub struct HttpRelay {
    client: reqwest::Client,
    relay_url: String,
}

// Covers a full relay round trip, which itself polls for up to ~30s.
pub static RELAY_TIMEOUT: Duration = Duration::from_secs(120);

impl HttpRelay {
    pub fn new(relay_url: &str) -> Result<Self, TransportError> {
        Self::with_timeout(relay_url, RELAY_TIMEOUT)
    }

    pub fn with_timeout(relay_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            relay_url: relay_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl RelayTransport for HttpRelay {
    async fn generate(&self, dto: &GenerateImageDto) -> Result<GeneratedImage, TransportError> {
        let url = format!("{}{}", self.relay_url, GENERATE_ROUTE);
        let res = self.client.post(url).form(dto).send().await?;

        let status = res.status();
        if status.is_success() {
            return Ok(res.json::<GeneratedImage>().await?);
        }

        let message = match res.json::<RelayErrorResponse>().await {
            Ok(body) => Some(body.error),
            Err(e) => {
                tracing::warn!("relay error response was not json: {}", e);
                None
            }
        };

        Err(TransportError::Rejected { status, message })
    }
}

#[cfg(test)]
mod tests {
    use std::{
        net::{SocketAddr, TcpListener},
        sync::Arc,
    };

    use axum::{routing::post, Router};
    use bytes::Bytes;
    use reqwest::StatusCode;

    use super::*;
    use crate::{
        generations::{
            apis::generation_client::{ClientError, MockGenerationClient},
            enums::poll_outcome::PollOutcome,
            models::job_handle::JobHandle,
            util::{data_uri, poll_policy::PollPolicy},
        },
        router, AppState,
    };

    fn spawn_relay(client: MockGenerationClient) -> String {
        let policy = PollPolicy {
            interval_ms: 10,
            ..PollPolicy::default()
        };
        let app = router(AppState::new(Arc::new(client), policy));

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::Server::from_tcp(listener)
                .unwrap()
                .serve(app.into_make_service())
                .await
                .unwrap();
        });

        format!("http://{}", addr)
    }

    fn spawn_stalled_relay() -> String {
        let app = Router::new().route(
            GENERATE_ROUTE,
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                StatusCode::OK
            }),
        );

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::Server::from_tcp(listener)
                .unwrap()
                .serve(app.into_make_service())
                .await
                .unwrap();
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn receives_the_image_from_a_running_relay() {
        let mut client = MockGenerationClient::new();
        client
            .expect_submit()
            .returning(|_| Ok(JobHandle::new("fc-01")));
        client.expect_poll().returning(|_| PollOutcome::Ready {
            image: Bytes::from_static(b"png"),
            elapsed_time: Some("0.84 seconds".to_string()),
        });

        let relay = HttpRelay::new(&spawn_relay(client)).unwrap();

        let image = relay
            .generate(&GenerateImageDto::new("A koala chilling on a tree"))
            .await
            .unwrap();

        assert_eq!(image.elapsed_time.as_deref(), Some("0.84 seconds"));
        assert_eq!(
            data_uri::decode(&image.image).map(|(_, bytes)| bytes),
            Some(b"png".to_vec())
        );
    }

    #[tokio::test]
    async fn surfaces_the_relay_error_message() {
        let mut client = MockGenerationClient::new();
        client
            .expect_submit()
            .returning(|_| Err(ClientError::Status(StatusCode::SERVICE_UNAVAILABLE)));

        let relay = HttpRelay::new(&spawn_relay(client)).unwrap();

        let error = relay
            .generate(&GenerateImageDto::new("A koala chilling on a tree"))
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            TransportError::Rejected {
                status: StatusCode::BAD_GATEWAY,
                ..
            }
        ));
        assert_eq!(error.reason(), "Failed to generate image.");
    }

    #[tokio::test]
    async fn unreachable_relay_is_a_transport_error() {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let relay = HttpRelay::new(&format!("http://{}", addr)).unwrap();

        let error = relay
            .generate(&GenerateImageDto::new("A koala chilling on a tree"))
            .await
            .unwrap_err();

        assert!(matches!(error, TransportError::Request(_)));
        assert_eq!(error.reason(), "Failed to generate image.");
    }

    #[tokio::test]
    async fn stalled_relay_times_out_as_a_transport_error() {
        let relay =
            HttpRelay::with_timeout(&spawn_stalled_relay(), Duration::from_millis(50)).unwrap();

        let error = relay
            .generate(&GenerateImageDto::new("A koala chilling on a tree"))
            .await
            .unwrap_err();

        assert!(matches!(error, TransportError::Request(_)));
        assert_eq!(error.reason(), "Failed to generate image.");
    }
}
