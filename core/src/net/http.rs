use crate::error::{CoreError, CoreResult};
use sha2::{Digest, Sha256};
use std::time::Duration;
use tracing::debug;

/// Status and raw body of a completed HTTP exchange, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub text: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The only way library code reaches the network.
///
/// Non-2xx statuses come back as `Ok`; only transport failures are errors.
pub trait HttpTransport {
    fn post_json(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &serde_json::Value,
    ) -> CoreResult<HttpResponse>;
}

pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(timeout).build(),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for UreqTransport {
    fn post_json(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &serde_json::Value,
    ) -> CoreResult<HttpResponse> {
        let bytes = serde_json::to_vec(body)?;
        debug!(
            url,
            request_hash_sha256 = %sha256_hex(&bytes),
            "POST"
        );

        let mut req = self.agent.post(url);
        for (name, value) in headers {
            req = req.set(name, value);
        }

        let resp = match req.send_bytes(&bytes) {
            Ok(resp) => resp,
            Err(ureq::Error::Status(_, resp)) => resp,
            Err(ureq::Error::Transport(t)) => {
                return Err(CoreError::Transport(format!("POST {} failed: {}", url, t)));
            }
        };
        let status = resp.status();
        let text = resp.into_string()?;
        debug!(url, status, "response");
        Ok(HttpResponse { status, text })
    }
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut h = Sha256::new();
    h.update(bytes);
    hex::encode(h.finalize())
}
