//! In-memory repositories for tests.
//!
//! Each fake answers from entities registered up front, records every call
//! it receives and can be told to fail.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::{Configuration, SessionStore};
use crate::models::{
    Application, EntityKind, LogMessage, Organization, OrganizationFields, ServiceBroker, Space,
    SpaceFields,
};

use super::{
    ApiError, ApiResult, ApplicationRepository, AuthenticationRepository, EndpointInfo,
    EndpointRepository, LogStream, LogsRepository, OrganizationRepository, Repositories,
    ServiceBrokerRepository, SpaceRepository, TokenPair,
};

fn fail_with(error: &RefCell<Option<ApiError>>) -> ApiResult<()> {
    match error.borrow().as_ref() {
        Some(e) => Err(e.clone()),
        None => Ok(()),
    }
}

#[derive(Default)]
pub struct FakeOrganizationRepository {
    calls: Cell<usize>,
    pub organizations: RefCell<Vec<Organization>>,
    pub find_error: RefCell<Option<ApiError>>,
    pub rename_error: RefCell<Option<ApiError>>,
    pub delete_error: RefCell<Option<ApiError>>,
    pub found_names: RefCell<Vec<String>>,
    pub renamed: RefCell<Vec<(String, String)>>,
    pub deleted: RefCell<Vec<String>>,
}

impl FakeOrganizationRepository {
    pub fn add(&self, organization: Organization) {
        self.organizations.borrow_mut().push(organization);
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl OrganizationRepository for FakeOrganizationRepository {
    fn find_by_name(&self, name: &str) -> ApiResult<Organization> {
        self.calls.set(self.calls.get() + 1);
        self.found_names.borrow_mut().push(name.to_string());
        fail_with(&self.find_error)?;
        self.organizations
            .borrow()
            .iter()
            .find(|o| o.name() == name)
            .cloned()
            .ok_or_else(|| ApiError::not_found(EntityKind::Organization, name))
    }

    fn rename(&self, guid: &str, new_name: &str) -> ApiResult<()> {
        self.calls.set(self.calls.get() + 1);
        fail_with(&self.rename_error)?;
        self.renamed
            .borrow_mut()
            .push((guid.to_string(), new_name.to_string()));
        Ok(())
    }

    fn delete(&self, guid: &str) -> ApiResult<()> {
        self.calls.set(self.calls.get() + 1);
        fail_with(&self.delete_error)?;
        self.deleted.borrow_mut().push(guid.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeSpaceRepository {
    calls: Cell<usize>,
    pub spaces: RefCell<Vec<Space>>,
    pub find_error: RefCell<Option<ApiError>>,
    pub rename_error: RefCell<Option<ApiError>>,
    pub delete_error: RefCell<Option<ApiError>>,
    /// `(organization guid, space name)` of each lookup.
    pub found_names: RefCell<Vec<(String, String)>>,
    pub renamed: RefCell<Vec<(String, String)>>,
    pub deleted: RefCell<Vec<String>>,
}

impl FakeSpaceRepository {
    /// Register a space owned by `organization_guid`.
    pub fn add(&self, organization_guid: &str, mut space: Space) {
        space.organization = OrganizationFields::new(organization_guid, "");
        self.spaces.borrow_mut().push(space);
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl SpaceRepository for FakeSpaceRepository {
    fn find_by_name(&self, organization_guid: &str, name: &str) -> ApiResult<Space> {
        self.calls.set(self.calls.get() + 1);
        self.found_names
            .borrow_mut()
            .push((organization_guid.to_string(), name.to_string()));
        fail_with(&self.find_error)?;
        self.spaces
            .borrow()
            .iter()
            .find(|s| s.name() == name && s.organization.guid == organization_guid)
            .cloned()
            .ok_or_else(|| ApiError::not_found(EntityKind::Space, name))
    }

    fn rename(&self, guid: &str, new_name: &str) -> ApiResult<()> {
        self.calls.set(self.calls.get() + 1);
        fail_with(&self.rename_error)?;
        self.renamed
            .borrow_mut()
            .push((guid.to_string(), new_name.to_string()));
        Ok(())
    }

    fn delete(&self, guid: &str) -> ApiResult<()> {
        self.calls.set(self.calls.get() + 1);
        fail_with(&self.delete_error)?;
        self.deleted.borrow_mut().push(guid.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeApplicationRepository {
    calls: Cell<usize>,
    /// `(space guid, application)` pairs.
    pub applications: RefCell<Vec<(String, Application)>>,
    pub find_error: RefCell<Option<ApiError>>,
    pub found_names: RefCell<Vec<(String, String)>>,
}

impl FakeApplicationRepository {
    pub fn add(&self, space_guid: &str, application: Application) {
        self.applications
            .borrow_mut()
            .push((space_guid.to_string(), application));
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl ApplicationRepository for FakeApplicationRepository {
    fn find_by_name(&self, space_guid: &str, name: &str) -> ApiResult<Application> {
        self.calls.set(self.calls.get() + 1);
        self.found_names
            .borrow_mut()
            .push((space_guid.to_string(), name.to_string()));
        fail_with(&self.find_error)?;
        self.applications
            .borrow()
            .iter()
            .find(|(space, app)| space == space_guid && app.name == name)
            .map(|(_, app)| app.clone())
            .ok_or_else(|| ApiError::not_found(EntityKind::Application, name))
    }
}

#[derive(Default)]
pub struct FakeServiceBrokerRepository {
    calls: Cell<usize>,
    pub brokers: RefCell<Vec<ServiceBroker>>,
    pub find_error: RefCell<Option<ApiError>>,
    pub delete_error: RefCell<Option<ApiError>>,
    pub found_names: RefCell<Vec<String>>,
    pub deleted: RefCell<Vec<String>>,
}

impl FakeServiceBrokerRepository {
    pub fn add(&self, broker: ServiceBroker) {
        self.brokers.borrow_mut().push(broker);
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl ServiceBrokerRepository for FakeServiceBrokerRepository {
    fn find_by_name(&self, name: &str) -> ApiResult<ServiceBroker> {
        self.calls.set(self.calls.get() + 1);
        self.found_names.borrow_mut().push(name.to_string());
        fail_with(&self.find_error)?;
        self.brokers
            .borrow()
            .iter()
            .find(|b| b.name == name)
            .cloned()
            .ok_or_else(|| ApiError::not_found(EntityKind::ServiceBroker, name))
    }

    fn delete(&self, guid: &str) -> ApiResult<()> {
        self.calls.set(self.calls.get() + 1);
        fail_with(&self.delete_error)?;
        self.deleted.borrow_mut().push(guid.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeLogsRepository {
    calls: Cell<usize>,
    pub recent_messages: RefCell<Vec<LogMessage>>,
    pub recent_error: RefCell<Option<ApiError>>,
    pub tail_messages: RefCell<Vec<LogMessage>>,
    /// Failure when opening the stream.
    pub tail_error: RefCell<Option<ApiError>>,
    /// Failure delivered through the stream after `tail_messages`.
    pub stream_error: RefCell<Option<ApiError>>,
    pub app_guids: RefCell<Vec<String>>,
}

impl FakeLogsRepository {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl LogsRepository for FakeLogsRepository {
    fn recent(&self, app_guid: &str) -> ApiResult<Vec<LogMessage>> {
        self.calls.set(self.calls.get() + 1);
        self.app_guids.borrow_mut().push(app_guid.to_string());
        fail_with(&self.recent_error)?;
        Ok(self.recent_messages.borrow().clone())
    }

    fn tail(&self, app_guid: &str) -> ApiResult<LogStream> {
        self.calls.set(self.calls.get() + 1);
        self.app_guids.borrow_mut().push(app_guid.to_string());
        fail_with(&self.tail_error)?;

        let mut items: Vec<ApiResult<LogMessage>> =
            self.tail_messages.borrow().iter().cloned().map(Ok).collect();
        if let Some(e) = self.stream_error.borrow().as_ref() {
            items.push(Err(e.clone()));
        }
        Ok(LogStream::from_items(items))
    }
}

#[derive(Default)]
pub struct FakeEndpointRepository {
    calls: Cell<usize>,
    pub info: RefCell<EndpointInfo>,
    pub error: RefCell<Option<ApiError>>,
    /// `(endpoint, skip_ssl_validation)` of each request.
    pub requests: RefCell<Vec<(String, bool)>>,
}

impl FakeEndpointRepository {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl EndpointRepository for FakeEndpointRepository {
    fn info(&self, endpoint: &str, skip_ssl_validation: bool) -> ApiResult<EndpointInfo> {
        self.calls.set(self.calls.get() + 1);
        self.requests
            .borrow_mut()
            .push((endpoint.to_string(), skip_ssl_validation));
        fail_with(&self.error)?;
        Ok(self.info.borrow().clone())
    }
}

#[derive(Default)]
pub struct FakeAuthenticationRepository {
    calls: Cell<usize>,
    pub tokens: RefCell<TokenPair>,
    pub error: RefCell<Option<ApiError>>,
    /// `(authorization endpoint, username, password)` of each attempt.
    pub attempts: RefCell<Vec<(String, String, String)>>,
}

impl FakeAuthenticationRepository {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl AuthenticationRepository for FakeAuthenticationRepository {
    fn authenticate(
        &self,
        authorization_endpoint: &str,
        username: &str,
        password: &str,
        _skip_ssl_validation: bool,
    ) -> ApiResult<TokenPair> {
        self.calls.set(self.calls.get() + 1);
        self.attempts.borrow_mut().push((
            authorization_endpoint.to_string(),
            username.to_string(),
            password.to_string(),
        ));
        fail_with(&self.error)?;
        Ok(self.tokens.borrow().clone())
    }
}

/// One of every fake, with typed handles kept for assertions.
#[derive(Default)]
pub struct FakeRepositories {
    pub organizations: Rc<FakeOrganizationRepository>,
    pub spaces: Rc<FakeSpaceRepository>,
    pub applications: Rc<FakeApplicationRepository>,
    pub service_brokers: Rc<FakeServiceBrokerRepository>,
    pub logs: Rc<FakeLogsRepository>,
    pub endpoint: Rc<FakeEndpointRepository>,
    pub authentication: Rc<FakeAuthenticationRepository>,
}

impl FakeRepositories {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trait-object view sharing these fakes.
    pub fn repositories(&self) -> Repositories {
        Repositories {
            organizations: self.organizations.clone(),
            spaces: self.spaces.clone(),
            applications: self.applications.clone(),
            service_brokers: self.service_brokers.clone(),
            logs: self.logs.clone(),
            endpoint: self.endpoint.clone(),
            authentication: self.authentication.clone(),
        }
    }

    /// Calls received by all fakes together.
    pub fn total_calls(&self) -> usize {
        self.organizations.calls()
            + self.spaces.calls()
            + self.applications.calls()
            + self.service_brokers.calls()
            + self.logs.calls()
            + self.endpoint.calls()
            + self.authentication.calls()
    }
}

/// An in-memory session logged in as `my-user` and targeting
/// `my-org` / `my-space`.
pub fn session_with_defaults() -> SessionStore {
    SessionStore::in_memory(Configuration {
        api_endpoint: "https://api.example.com".to_string(),
        api_version: "2.180.0".to_string(),
        authorization_endpoint: "https://login.example.com".to_string(),
        logging_endpoint: "https://log-cache.example.com".to_string(),
        access_token: "bearer my-token".to_string(),
        refresh_token: "my-refresh-token".to_string(),
        username: "my-user".to_string(),
        organization_fields: OrganizationFields::new("my-org-guid", "my-org"),
        space_fields: SpaceFields::new("my-space-guid", "my-space"),
        ..Configuration::default()
    })
}
