//! API endpoint discovery.

use serde::Deserialize;

use super::client::{build_http_client, read_json, send};
use super::{ApiResult, EndpointInfo, EndpointRepository};

#[derive(Debug, Deserialize)]
struct InfoResponse {
    #[serde(default)]
    api_version: String,
    #[serde(default)]
    authorization_endpoint: String,
}

/// Reads `/v2/info` from the target endpoint.
pub struct HttpEndpointRepository;

impl EndpointRepository for HttpEndpointRepository {
    fn info(&self, endpoint: &str, skip_ssl_validation: bool) -> ApiResult<EndpointInfo> {
        let endpoint = endpoint.trim_end_matches('/');
        let url = format!("{}/v2/info", endpoint);
        tracing::debug!(%url, "fetching endpoint info");

        let client = build_http_client(skip_ssl_validation)?;
        let info: InfoResponse = read_json(send(client.get(&url), endpoint)?)?;

        Ok(EndpointInfo {
            api_version: info.api_version,
            authorization_endpoint: info.authorization_endpoint,
            logging_endpoint: logging_endpoint_for(endpoint),
        })
    }
}

/// Log cache lives beside the API host: `api.<domain>` becomes
/// `log-cache.<domain>`. Endpoints without an `api.` host are used as is.
pub fn logging_endpoint_for(endpoint: &str) -> String {
    if endpoint.contains("://api.") {
        endpoint.replacen("://api.", "://log-cache.", 1)
    } else {
        endpoint.to_string()
    }
}
