use crate::error::{CoreError, CoreResult};
use url::Url;

/// Parses a configured endpoint, accepting only absolute http(s) URLs with a host.
pub fn parse_http_endpoint(endpoint: &str) -> CoreResult<Url> {
    let url = Url::parse(endpoint)
        .map_err(|e| CoreError::InvalidInput(format!("invalid endpoint URL {}: {}", endpoint, e)))?;
    let scheme = url.scheme().to_ascii_lowercase();
    if scheme != "https" && scheme != "http" {
        return Err(CoreError::InvalidInput(format!(
            "endpoint scheme must be http or https, got {}",
            scheme
        )));
    }
    if url.host_str().map(str::is_empty).unwrap_or(true) {
        return Err(CoreError::InvalidInput(
            "endpoint URL is missing a host".to_string(),
        ));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(parse_http_endpoint("https://api.climatiq.io/estimate").is_ok());
        assert!(parse_http_endpoint("http://127.0.0.1:8080/classify").is_ok());
    }

    #[test]
    fn rejects_other_schemes_and_garbage() {
        assert!(parse_http_endpoint("ftp://example.com/x").is_err());
        assert!(parse_http_endpoint("file:///tmp/model").is_err());
        assert!(parse_http_endpoint("not a url").is_err());
        assert!(parse_http_endpoint("").is_err());
    }
}
