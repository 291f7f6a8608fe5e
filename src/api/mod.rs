//! Repositories for the platform API.
//!
//! Each entity kind has a narrow repository trait. Commands and requirement
//! resolvers only ever see these traits; the HTTP implementations live in
//! their own modules and the in-memory fakes in [`fake`].
//!
//! # Modules
//!
//! - [`client`] - Shared Cloud Controller HTTP client and error mapping
//! - [`organizations`], [`spaces`], [`applications`], [`service_brokers`] - Entity repositories
//! - [`logs`] - Recent and streaming application logs
//! - [`endpoint`], [`authentication`] - Endpoint discovery and login
//! - [`fake`] - Recording fakes for tests

pub mod applications;
pub mod authentication;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod fake;
pub mod logs;
pub mod organizations;
pub mod service_brokers;
pub mod spaces;

pub use error::{ApiError, ApiResult};

use std::rc::Rc;
use std::sync::mpsc::Receiver;

use crate::config::Configuration;
use crate::models::{Application, LogMessage, Organization, ServiceBroker, Space};

pub trait OrganizationRepository {
    fn find_by_name(&self, name: &str) -> ApiResult<Organization>;
    fn rename(&self, guid: &str, new_name: &str) -> ApiResult<()>;
    fn delete(&self, guid: &str) -> ApiResult<()>;
}

pub trait SpaceRepository {
    /// Find a space by name within an organization.
    fn find_by_name(&self, organization_guid: &str, name: &str) -> ApiResult<Space>;
    fn rename(&self, guid: &str, new_name: &str) -> ApiResult<()>;
    fn delete(&self, guid: &str) -> ApiResult<()>;
}

pub trait ApplicationRepository {
    /// Find an application by name within a space, including its environment.
    fn find_by_name(&self, space_guid: &str, name: &str) -> ApiResult<Application>;
}

pub trait ServiceBrokerRepository {
    fn find_by_name(&self, name: &str) -> ApiResult<ServiceBroker>;
    fn delete(&self, guid: &str) -> ApiResult<()>;
}

pub trait LogsRepository {
    /// Most recent buffered log lines, oldest first.
    fn recent(&self, app_guid: &str) -> ApiResult<Vec<LogMessage>>;

    /// Open a live stream of log lines.
    ///
    /// Returns once the connection is established; connection failures,
    /// including certificate errors, are returned here rather than through
    /// the stream.
    fn tail(&self, app_guid: &str) -> ApiResult<LogStream>;
}

/// What an API endpoint reports about itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointInfo {
    pub api_version: String,
    pub authorization_endpoint: String,
    pub logging_endpoint: String,
}

pub trait EndpointRepository {
    fn info(&self, endpoint: &str, skip_ssl_validation: bool) -> ApiResult<EndpointInfo>;
}

/// Tokens granted by the authorization server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenPair {
    /// Full header value, e.g. `bearer eyJ...`.
    pub access_token: String,
    pub refresh_token: String,
}

pub trait AuthenticationRepository {
    fn authenticate(
        &self,
        authorization_endpoint: &str,
        username: &str,
        password: &str,
        skip_ssl_validation: bool,
    ) -> ApiResult<TokenPair>;
}

/// Live log lines.
///
/// Iterates until the producer closes the channel (end of stream). An `Err`
/// item reports a failure after which no further lines arrive.
#[derive(Debug)]
pub struct LogStream {
    receiver: Receiver<ApiResult<LogMessage>>,
}

impl LogStream {
    pub fn new(receiver: Receiver<ApiResult<LogMessage>>) -> Self {
        Self { receiver }
    }

    /// A finished stream that yields the given items and then ends.
    pub fn from_items(items: Vec<ApiResult<LogMessage>>) -> Self {
        let (sender, receiver) = std::sync::mpsc::channel();
        for item in items {
            // The receiver is alive until this function returns.
            let _ = sender.send(item);
        }
        Self { receiver }
    }
}

impl Iterator for LogStream {
    type Item = ApiResult<LogMessage>;

    fn next(&mut self) -> Option<Self::Item> {
        self.receiver.recv().ok()
    }
}

/// The repository set handed to commands and requirement resolvers.
#[derive(Clone)]
pub struct Repositories {
    pub organizations: Rc<dyn OrganizationRepository>,
    pub spaces: Rc<dyn SpaceRepository>,
    pub applications: Rc<dyn ApplicationRepository>,
    pub service_brokers: Rc<dyn ServiceBrokerRepository>,
    pub logs: Rc<dyn LogsRepository>,
    pub endpoint: Rc<dyn EndpointRepository>,
    pub authentication: Rc<dyn AuthenticationRepository>,
}

impl Repositories {
    /// HTTP-backed repositories bound to the session's endpoint and token.
    pub fn http(config: &Configuration) -> ApiResult<Self> {
        let client = Rc::new(client::CloudControllerClient::new(
            &config.api_endpoint,
            &config.access_token,
            config.skip_ssl_validation,
        )?);

        Ok(Self {
            organizations: Rc::new(organizations::HttpOrganizationRepository::new(Rc::clone(
                &client,
            ))),
            spaces: Rc::new(spaces::HttpSpaceRepository::new(Rc::clone(&client))),
            applications: Rc::new(applications::HttpApplicationRepository::new(Rc::clone(
                &client,
            ))),
            service_brokers: Rc::new(service_brokers::HttpServiceBrokerRepository::new(
                Rc::clone(&client),
            )),
            logs: Rc::new(logs::HttpLogsRepository::new(
                &config.logging_endpoint,
                &config.access_token,
                config.skip_ssl_validation,
            )?),
            endpoint: Rc::new(endpoint::HttpEndpointRepository),
            authentication: Rc::new(authentication::HttpAuthenticationRepository),
        })
    }
}
