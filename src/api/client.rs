//! Cloud Controller HTTP client.
//!
//! Wraps a blocking reqwest client with the session's bearer token and maps
//! transport and status failures onto [`ApiError`].

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::error::Error as StdError;
use std::time::Duration;

use super::{ApiError, ApiResult};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Build a blocking client with the CLI's user agent.
pub fn build_http_client(skip_ssl_validation: bool) -> ApiResult<Client> {
    Client::builder()
        .user_agent(concat!("cumulus/", env!("CARGO_PKG_VERSION")))
        .timeout(DEFAULT_TIMEOUT)
        .danger_accept_invalid_certs(skip_ssl_validation)
        .build()
        .map_err(|e| ApiError::Transport(error_chain(&e)))
}

/// Send a request, mapping connection failures.
///
/// A failure anywhere in the TLS handshake that mentions the certificate is
/// reported as [`ApiError::InvalidSslCert`] for `url`.
pub fn send(request: RequestBuilder, url: &str) -> ApiResult<Response> {
    let response = request.send().map_err(|e| classify_send_error(url, &e))?;
    check_status(response)
}

fn classify_send_error(url: &str, err: &reqwest::Error) -> ApiError {
    let chain = error_chain(err);
    if chain.to_lowercase().contains("certificate") {
        ApiError::invalid_ssl_cert(url, chain)
    } else {
        ApiError::Transport(chain)
    }
}

/// Render an error and all of its sources on one line.
pub fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        parts.push(cause.to_string());
        source = cause.source();
    }
    parts.join(": ")
}

/// Error body returned by the Cloud Controller.
#[derive(Debug, Default, Deserialize)]
struct CloudControllerErrorBody {
    #[serde(default)]
    description: String,
    #[serde(default)]
    error_code: String,
}

fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    let parsed: CloudControllerErrorBody = serde_json::from_str(&body).unwrap_or_default();
    let description = if parsed.description.is_empty() {
        body.trim().to_string()
    } else {
        parsed.description
    };

    Err(ApiError::Http {
        status: status.as_u16(),
        code: parsed.error_code,
        description,
    })
}

/// Parse a JSON body.
pub fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let body = response
        .text()
        .map_err(|e| ApiError::Transport(error_chain(&e)))?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// One page of a Cloud Controller v2 listing.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub resources: Vec<Resource<T>>,
}

/// A listed resource: guid in `metadata`, fields in `entity`.
#[derive(Debug, Deserialize)]
pub struct Resource<T> {
    pub metadata: Metadata,
    pub entity: T,
}

#[derive(Debug, Deserialize)]
pub struct Metadata {
    pub guid: String,
}

/// Authenticated client for one API endpoint.
pub struct CloudControllerClient {
    http: Client,
    base_url: String,
    access_token: String,
}

impl CloudControllerClient {
    pub fn new(base_url: &str, access_token: &str, skip_ssl_validation: bool) -> ApiResult<Self> {
        Ok(Self {
            http: build_http_client(skip_ssl_validation)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        if self.access_token.is_empty() {
            request
        } else {
            request.header("Authorization", &self.access_token)
        }
    }

    /// GET a JSON document.
    pub fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> ApiResult<T> {
        let url = self.url(path);
        tracing::debug!(method = "GET", %url, "api request");
        let request = self.authorized(self.http.get(&url).query(query));
        read_json(send(request, &url)?)
    }

    /// PUT a JSON body, ignoring the response document.
    pub fn put(&self, path: &str, body: &serde_json::Value) -> ApiResult<()> {
        let url = self.url(path);
        tracing::debug!(method = "PUT", %url, "api request");
        let request = self.authorized(self.http.put(&url).json(body));
        send(request, &url).map(|_| ())
    }

    /// DELETE a resource.
    pub fn delete(&self, path: &str, query: &[(&str, &str)]) -> ApiResult<()> {
        let url = self.url(path);
        tracing::debug!(method = "DELETE", %url, "api request");
        let request = self.authorized(self.http.delete(&url).query(query));
        send(request, &url).map(|_| ())
    }

    /// First resource of a name search, or `None` when nothing matched.
    pub fn find_first<T: DeserializeOwned>(
        &self,
        path: &str,
        name: &str,
    ) -> ApiResult<Option<Resource<T>>> {
        let filter = format!("name:{}", name);
        let page: Page<T> = self.get(path, &[("q", filter.as_str())])?;
        Ok(page.resources.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Named {
        name: String,
    }

    #[test]
    fn base_url_is_trimmed() {
        let client = CloudControllerClient::new("https://api.example.com/", "", false).unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
    }

    #[test]
    fn get_sends_token_and_parses_json() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v2/things")
                .header("Authorization", "bearer my-token");
            then.status(200)
                .json_body(json!({"resources": [{"metadata": {"guid": "g1"}, "entity": {"name": "one"}}]}));
        });

        let client = CloudControllerClient::new(&server.base_url(), "bearer my-token", false).unwrap();
        let page: Page<Named> = client.get("/v2/things", &[]).unwrap();

        mock.assert();
        assert_eq!(page.resources[0].metadata.guid, "g1");
        assert_eq!(page.resources[0].entity.name, "one");
    }

    #[test]
    fn error_body_description_is_kept() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(PUT).path("/v2/things/g1");
            then.status(400).json_body(json!({
                "code": 30002,
                "description": "The organization name is taken: taken-name",
                "error_code": "CF-OrganizationNameTaken"
            }));
        });

        let client = CloudControllerClient::new(&server.base_url(), "", false).unwrap();
        let err = client
            .put("/v2/things/g1", &json!({"name": "taken-name"}))
            .unwrap_err();

        match err {
            ApiError::Http {
                status,
                code,
                description,
            } => {
                assert_eq!(status, 400);
                assert_eq!(code, "CF-OrganizationNameTaken");
                assert!(description.contains("taken-name"));
            }
            other => panic!("Expected Http error, got {:?}", other),
        }
    }

    #[test]
    fn plain_error_body_is_passed_through() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(DELETE).path("/v2/things/g1");
            then.status(500).body("Internal Server Error");
        });

        let client = CloudControllerClient::new(&server.base_url(), "", false).unwrap();
        let err = client.delete("/v2/things/g1", &[]).unwrap_err();
        assert!(err.to_string().contains("Internal Server Error"));
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn find_first_returns_none_for_empty_page() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/v2/things")
                .query_param("q", "name:missing");
            then.status(200).json_body(json!({"resources": []}));
        });

        let client = CloudControllerClient::new(&server.base_url(), "", false).unwrap();
        let found: Option<Resource<Named>> = client.find_first("/v2/things", "missing").unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn malformed_json_is_decode_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v2/things");
            then.status(200).body("not json");
        });

        let client = CloudControllerClient::new(&server.base_url(), "", false).unwrap();
        let err = client.get::<Page<Named>>("/v2/things", &[]).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn unreachable_host_is_transport_error() {
        let client = CloudControllerClient::new("http://127.0.0.1:1", "", false).unwrap();
        let err = client.get::<Page<Named>>("/v2/things", &[]).unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
