pub mod endpoint;
pub mod http;

pub use endpoint::parse_http_endpoint;
pub use http::{HttpResponse, HttpTransport, UreqTransport};
