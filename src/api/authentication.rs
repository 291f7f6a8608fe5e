//! Password grant against the authorization server.

use serde::Deserialize;

use super::client::{build_http_client, read_json, send};
use super::{ApiError, ApiResult, AuthenticationRepository, TokenPair};

/// OAuth client id used by command line clients.
const CLIENT_ID: &str = "cf";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: String,
    #[serde(default = "default_token_type")]
    token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[derive(Debug, Deserialize)]
struct AuthErrorBody {
    error: String,
    #[serde(default)]
    error_description: String,
}

pub struct HttpAuthenticationRepository;

impl AuthenticationRepository for HttpAuthenticationRepository {
    fn authenticate(
        &self,
        authorization_endpoint: &str,
        username: &str,
        password: &str,
        skip_ssl_validation: bool,
    ) -> ApiResult<TokenPair> {
        let url = format!(
            "{}/oauth/token",
            authorization_endpoint.trim_end_matches('/')
        );
        tracing::debug!(%url, %username, "requesting token");

        let client = build_http_client(skip_ssl_validation)?;
        let request = client
            .post(&url)
            .basic_auth(CLIENT_ID, Some(""))
            .header("Accept", "application/json")
            .form(&[
                ("grant_type", "password"),
                ("username", username),
                ("password", password),
            ]);

        let response = send(request, authorization_endpoint).map_err(map_auth_error)?;
        let token: TokenResponse = read_json(response)?;

        Ok(TokenPair {
            access_token: format!("{} {}", token.token_type, token.access_token),
            refresh_token: token.refresh_token,
        })
    }
}

fn map_auth_error(err: ApiError) -> ApiError {
    match err {
        ApiError::Http { status: 401, .. } => ApiError::Http {
            status: 401,
            code: "unauthorized".to_string(),
            description: "Credentials were rejected, please try again.".to_string(),
        },
        ApiError::Http {
            status,
            code,
            description,
        } => match serde_json::from_str::<AuthErrorBody>(&description) {
            Ok(body) => ApiError::Http {
                status,
                code: body.error,
                description: body.error_description,
            },
            Err(_) => ApiError::Http {
                status,
                code,
                description,
            },
        },
        other => other,
    }
}
