//! Direct-then-proxy request strategy.
//!
//! A fresh state machine per call. DIRECT is attempted at most once and only
//! when a credential is configured; PROXY is attempted at most once; the two
//! never overlap.

use tracing::{debug, info, warn};

use crate::client::transport::{CompletionOutcome, CompletionTransport};
use crate::error::RequestFailure;
use crate::models::{ChatCompletionRequest, ProxyRequest, RequestParams, CLIENT_PERSONA};

#[derive(Debug)]
enum AttemptState {
    NoCredential,
    AttemptDirect(String),
    AttemptProxy,
    Succeeded(String),
    Failed(RequestFailure),
}

/// Runs the strategy and returns the completion text, or the last failure cause.
pub async fn request_completion(
    transport: &dyn CompletionTransport,
    api_key: Option<String>,
    model: &str,
    prompt: &str,
    params: RequestParams,
) -> Result<String, RequestFailure> {
    let mut state = match api_key {
        Some(key) => AttemptState::AttemptDirect(key),
        None => AttemptState::NoCredential,
    };

    loop {
        state = match state {
            AttemptState::NoCredential => {
                debug!("no credential configured, using proxy");
                AttemptState::AttemptProxy
            }
            AttemptState::AttemptDirect(key) => {
                let request = ChatCompletionRequest::new(model, CLIENT_PERSONA, prompt, params);
                match transport.send_direct(&key, &request).await {
                    CompletionOutcome::Success { content } => AttemptState::Succeeded(content),
                    CompletionOutcome::MalformedResponse(reason) => {
                        warn!(%reason, "direct completion malformed, trying proxy");
                        AttemptState::AttemptProxy
                    }
                    CompletionOutcome::TransportFailure(reason) => {
                        warn!(%reason, "direct completion failed, trying proxy");
                        AttemptState::AttemptProxy
                    }
                }
            }
            AttemptState::AttemptProxy => {
                let request = ProxyRequest::new(prompt, params);
                match transport.send_proxy(&request).await.into_result() {
                    Ok(content) => AttemptState::Succeeded(content),
                    Err(cause) => AttemptState::Failed(cause),
                }
            }
            AttemptState::Succeeded(content) => {
                info!(chars = content.len(), "completion received");
                return Ok(content);
            }
            AttemptState::Failed(cause) => {
                warn!(error = %cause, "proxy completion failed");
                return Err(cause);
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Scripted transport recording which tier was hit.
    struct Scripted {
        direct: CompletionOutcome,
        proxy: CompletionOutcome,
        calls: Mutex<Vec<&'static str>>,
    }

    impl Scripted {
        fn new(direct: CompletionOutcome, proxy: CompletionOutcome) -> Self {
            Self {
                direct,
                proxy,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CompletionTransport for Scripted {
        async fn send_direct(&self, _: &str, _: &ChatCompletionRequest) -> CompletionOutcome {
            self.calls.lock().unwrap().push("direct");
            self.direct.clone()
        }

        async fn send_proxy(&self, _: &ProxyRequest) -> CompletionOutcome {
            self.calls.lock().unwrap().push("proxy");
            self.proxy.clone()
        }
    }

    fn ok(content: &str) -> CompletionOutcome {
        CompletionOutcome::Success {
            content: content.to_string(),
        }
    }

    fn params() -> RequestParams {
        RequestParams::new(0.7, 1500)
    }

    #[tokio::test]
    async fn test_no_credential_goes_straight_to_proxy() {
        let transport = Scripted::new(ok("direct"), ok("proxy"));
        let result = request_completion(&transport, None, "m", "p", params()).await;

        assert_eq!(result, Ok("proxy".to_string()));
        assert_eq!(transport.calls(), vec!["proxy"]);
    }

    #[tokio::test]
    async fn test_direct_success_skips_proxy() {
        let transport = Scripted::new(ok("direct"), ok("proxy"));
        let result = request_completion(&transport, Some("key".into()), "m", "p", params()).await;

        assert_eq!(result, Ok("direct".to_string()));
        assert_eq!(transport.calls(), vec!["direct"]);
    }

    #[tokio::test]
    async fn test_direct_transport_failure_retries_once_via_proxy() {
        let transport = Scripted::new(
            CompletionOutcome::TransportFailure("API error: 500".into()),
            ok("proxy"),
        );
        let result = request_completion(&transport, Some("key".into()), "m", "p", params()).await;

        assert_eq!(result, Ok("proxy".to_string()));
        assert_eq!(transport.calls(), vec!["direct", "proxy"]);
    }

    #[tokio::test]
    async fn test_direct_malformed_retries_via_proxy() {
        let transport = Scripted::new(
            CompletionOutcome::MalformedResponse("no choices".into()),
            ok("proxy"),
        );
        let result = request_completion(&transport, Some("key".into()), "m", "p", params()).await;

        assert_eq!(result, Ok("proxy".to_string()));
        assert_eq!(transport.calls(), vec!["direct", "proxy"]);
    }

    #[tokio::test]
    async fn test_both_tiers_fail_reports_proxy_cause() {
        let transport = Scripted::new(
            CompletionOutcome::TransportFailure("API error: 401".into()),
            CompletionOutcome::MalformedResponse("empty content".into()),
        );
        let result = request_completion(&transport, Some("key".into()), "m", "p", params()).await;

        assert_eq!(result, Err(RequestFailure::Validation("empty content".into())));
        assert_eq!(transport.calls(), vec!["direct", "proxy"]);
    }
}
