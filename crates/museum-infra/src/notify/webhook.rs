use anyhow::{Context, Result};
use hmac::{Hmac, Mac};
use museum_core::models::ReviewEvent;
use reqwest::Client;
use sha2::Sha256;
use std::sync::Arc;
use std::time::Duration;

use super::EventNotifier;

type HmacSha256 = Hmac<Sha256>;

pub const SIGNATURE_HEADER: &str = "X-Museum-Signature";
const USER_AGENT: &str = "Museum-Review-Webhook/1.0";

/// Configuration for webhook delivery of review events
#[derive(Clone, Debug)]
pub struct WebhookNotifierConfig {
    pub url: String,
    pub signing_secret: Option<String>,
    pub timeout_seconds: u64,
}

/// Posts each review event as JSON to a single configured endpoint.
///
/// Delivery is fire-and-forget: failures are logged and never retried.
#[derive(Clone)]
pub struct WebhookNotifier {
    http_client: Client,
    config: Arc<WebhookNotifierConfig>,
}

impl WebhookNotifier {
    pub fn new(config: WebhookNotifierConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .context("Failed to create HTTP client for review webhooks")?;

        Ok(Self {
            http_client,
            config: Arc::new(config),
        })
    }

    /// Send one event and return the response status code.
    /// Non-2xx responses are reported as errors.
    #[tracing::instrument(skip(self, event), fields(event_type = %event.kind, md5 = %event.md5))]
    pub async fn deliver(&self, event: &ReviewEvent) -> Result<u16> {
        let body = serde_json::to_string(event).context("Failed to serialize review event")?;

        let mut request = self
            .http_client
            .post(&self.config.url)
            .header("Content-Type", "application/json")
            .header("User-Agent", USER_AGENT);

        if let Some(secret) = &self.config.signing_secret {
            let signature = sign_payload(&body, secret)?;
            request = request.header(SIGNATURE_HEADER, format!("v1={}", signature));
        }

        let response = request
            .body(body)
            .send()
            .await
            .context("Failed to send review webhook")?;

        let status = response.status();
        if status.is_success() {
            Ok(status.as_u16())
        } else {
            let response_body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Failed to read response body"));
            Err(anyhow::anyhow!(
                "Webhook endpoint returned {}: {}",
                status.as_u16(),
                response_body
            ))
        }
    }
}

impl EventNotifier for WebhookNotifier {
    fn notify(&self, event: ReviewEvent) {
        let notifier = self.clone();
        tokio::spawn(async move {
            match notifier.deliver(&event).await {
                Ok(status_code) => {
                    tracing::info!(
                        event_type = %event.kind,
                        md5 = %event.md5,
                        status_code,
                        "Review webhook delivered"
                    );
                }
                Err(e) => {
                    tracing::error!(
                        event_type = %event.kind,
                        md5 = %event.md5,
                        error = %e,
                        "Failed to deliver review webhook"
                    );
                }
            }
        });
    }
}

/// Hex encoded HMAC-SHA256 of `payload` keyed with `secret`
pub fn sign_payload(payload: &str, secret: &str) -> Result<String> {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).context("Failed to create HMAC")?;
    mac.update(payload.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Check a `v1=<hex>` signature header value against `payload`
pub fn verify_signature(payload: &str, secret: &str, header_value: &str) -> Result<bool> {
    let Some(hex_signature) = header_value.strip_prefix("v1=") else {
        return Ok(false);
    };
    let Ok(expected) = hex::decode(hex_signature) else {
        return Ok(false);
    };
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).context("Failed to create HMAC")?;
    mac.update(payload.as_bytes());
    Ok(mac.verify_slice(&expected).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use museum_core::models::ReviewEventKind;

    const MD5: &str = "48bbdbbeb03d347e59b1eebda4d352d0";

    fn notifier(url: String, secret: Option<&str>) -> WebhookNotifier {
        WebhookNotifier::new(WebhookNotifierConfig {
            url,
            signing_secret: secret.map(str::to_string),
            timeout_seconds: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_sign_and_verify() {
        let body = r#"{"type":"APPROVED_SKIN","md5":"abc"}"#;
        let signature = sign_payload(body, "secret").unwrap();
        assert_eq!(signature.len(), 64);
        assert!(verify_signature(body, "secret", &format!("v1={}", signature)).unwrap());
        assert!(!verify_signature(body, "other", &format!("v1={}", signature)).unwrap());
        assert!(!verify_signature(body, "secret", &signature).unwrap());
        assert!(!verify_signature(body, "secret", "v1=zz").unwrap());
    }

    #[tokio::test]
    async fn test_deliver_posts_signed_event() {
        let mut server = mockito::Server::new_async().await;
        let event = ReviewEvent::new(ReviewEventKind::RejectedSkin, MD5);
        let body = serde_json::to_string(&event).unwrap();
        let signature = format!("v1={}", sign_payload(&body, "hook-secret").unwrap());

        let mock = server
            .mock("POST", "/hooks/review")
            .match_header("content-type", "application/json")
            .match_header("x-museum-signature", signature.as_str())
            .match_body(Matcher::Json(serde_json::json!({
                "type": "REJECTED_SKIN",
                "md5": MD5,
            })))
            .with_status(204)
            .create_async()
            .await;

        let notifier = notifier(format!("{}/hooks/review", server.url()), Some("hook-secret"));
        let status = notifier.deliver(&event).await.unwrap();

        assert_eq!(status, 204);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_deliver_without_secret_sends_no_signature() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/hooks")
            .match_header("x-museum-signature", Matcher::Missing)
            .with_status(200)
            .create_async()
            .await;

        let notifier = notifier(format!("{}/hooks", server.url()), None);
        let event = ReviewEvent::new(ReviewEventKind::ApprovedSkin, MD5);
        assert_eq!(notifier.deliver(&event).await.unwrap(), 200);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_deliver_reports_non_success_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/hooks")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let notifier = notifier(format!("{}/hooks", server.url()), None);
        let event = ReviewEvent::new(ReviewEventKind::MarkedSkinNsfw, MD5);
        let err = notifier.deliver(&event).await.unwrap_err();
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_notify_delivers_in_background() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/hooks")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "type": "REVIEW_REQUESTED"
            })))
            .with_status(200)
            .create_async()
            .await;

        let notifier = notifier(format!("{}/hooks", server.url()), None);
        notifier.notify(ReviewEvent::new(ReviewEventKind::ReviewRequested, MD5));

        for _ in 0..50 {
            if mock.matched_async().await {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        mock.assert_async().await;
    }
}
