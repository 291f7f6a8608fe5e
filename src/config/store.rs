//! The session store.

use crate::error::Result;
use crate::models::{OrganizationFields, SpaceFields};

use super::{Configuration, MemoryPersistor, Persistor};

/// Single owner of the session record for one invocation.
///
/// Every setter is write-through: the change is applied to a copy, the copy
/// is flushed through the persistor, and only then does it replace the
/// in-memory record. A failed flush leaves the session untouched.
pub struct SessionStore {
    config: Configuration,
    persistor: Box<dyn Persistor>,
}

impl SessionStore {
    /// Load the session from a persistor, starting empty if nothing is stored.
    pub fn load(persistor: Box<dyn Persistor>) -> Result<Self> {
        let config = persistor.load()?.unwrap_or_default();
        Ok(Self { config, persistor })
    }

    /// Session kept in memory only.
    pub fn in_memory(config: Configuration) -> Self {
        Self {
            config: config.clone(),
            persistor: Box::new(MemoryPersistor::with_config(config)),
        }
    }

    /// The full record, read-only.
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn api_endpoint(&self) -> &str {
        &self.config.api_endpoint
    }

    pub fn api_version(&self) -> &str {
        &self.config.api_version
    }

    pub fn authorization_endpoint(&self) -> &str {
        &self.config.authorization_endpoint
    }

    pub fn logging_endpoint(&self) -> &str {
        &self.config.logging_endpoint
    }

    pub fn access_token(&self) -> &str {
        &self.config.access_token
    }

    pub fn refresh_token(&self) -> &str {
        &self.config.refresh_token
    }

    pub fn is_ssl_disabled(&self) -> bool {
        self.config.skip_ssl_validation
    }

    pub fn organization_fields(&self) -> &OrganizationFields {
        &self.config.organization_fields
    }

    pub fn space_fields(&self) -> &SpaceFields {
        &self.config.space_fields
    }

    pub fn username(&self) -> &str {
        &self.config.username
    }

    pub fn has_api_endpoint(&self) -> bool {
        !self.config.api_endpoint.is_empty()
    }

    pub fn is_logged_in(&self) -> bool {
        !self.config.access_token.is_empty()
    }

    pub fn has_organization(&self) -> bool {
        !self.config.organization_fields.is_empty()
    }

    pub fn has_space(&self) -> bool {
        !self.config.space_fields.is_empty()
    }

    // --- Mutation ---

    /// Point the session at a new API endpoint.
    ///
    /// Tokens and targets belong to the old endpoint and are cleared.
    pub fn set_api_endpoint(
        &mut self,
        endpoint: &str,
        version: &str,
        authorization_endpoint: &str,
        logging_endpoint: &str,
        skip_ssl_validation: bool,
    ) -> Result<()> {
        self.mutate(|c| {
            c.api_endpoint = endpoint.to_string();
            c.api_version = version.to_string();
            c.authorization_endpoint = authorization_endpoint.to_string();
            c.logging_endpoint = logging_endpoint.to_string();
            c.skip_ssl_validation = skip_ssl_validation;
            clear_login(c);
        })
    }

    /// Record a successful authentication.
    ///
    /// Targets chosen under a previous login are dropped.
    pub fn set_tokens(&mut self, access: &str, refresh: &str, username: &str) -> Result<()> {
        self.mutate(|c| {
            clear_login(c);
            c.access_token = access.to_string();
            c.refresh_token = refresh.to_string();
            c.username = username.to_string();
        })
    }

    /// Target an organization, or clear the target with empty fields.
    pub fn set_organization_fields(&mut self, fields: OrganizationFields) -> Result<()> {
        self.mutate(|c| c.organization_fields = fields)
    }

    /// Target a space, or clear the target with empty fields.
    pub fn set_space_fields(&mut self, fields: SpaceFields) -> Result<()> {
        self.mutate(|c| c.space_fields = fields)
    }

    /// Replace both targets in one flush.
    pub fn set_target(&mut self, organization: OrganizationFields, space: SpaceFields) -> Result<()> {
        self.mutate(|c| {
            c.organization_fields = organization;
            c.space_fields = space;
        })
    }

    /// Forget tokens, user and targets, keeping the endpoint.
    pub fn clear_session(&mut self) -> Result<()> {
        self.mutate(clear_login)
    }

    fn mutate(&mut self, change: impl FnOnce(&mut Configuration)) -> Result<()> {
        let mut next = self.config.clone();
        change(&mut next);
        self.persistor.save(&next)?;
        self.config = next;
        Ok(())
    }
}

fn clear_login(config: &mut Configuration) {
    config.access_token.clear();
    config.refresh_token.clear();
    config.username.clear();
    config.organization_fields = OrganizationFields::default();
    config.space_fields = SpaceFields::default();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FilePersistor;
    use crate::error::CumulusError;
    use tempfile::TempDir;

    struct FailingPersistor;

    impl Persistor for FailingPersistor {
        fn load(&self) -> Result<Option<Configuration>> {
            Ok(None)
        }

        fn save(&self, _config: &Configuration) -> Result<()> {
            Err(CumulusError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
    }

    fn targeted_session() -> SessionStore {
        let mut config = Configuration::default();
        config.api_endpoint = "https://api.example.com".into();
        config.access_token = "bearer token".into();
        config.username = "my-user".into();
        config.organization_fields = OrganizationFields::new("org-guid", "my-org");
        config.space_fields = SpaceFields::new("space-guid", "my-space");
        SessionStore::in_memory(config)
    }

    #[test]
    fn empty_session_has_nothing_targeted() {
        let session = SessionStore::in_memory(Configuration::default());
        assert!(!session.is_logged_in());
        assert!(!session.has_organization());
        assert!(!session.has_space());
        assert!(!session.has_api_endpoint());
    }

    #[test]
    fn set_organization_fields_updates_target() {
        let mut session = SessionStore::in_memory(Configuration::default());
        session
            .set_organization_fields(OrganizationFields::new("org-guid", "my-org"))
            .unwrap();
        assert!(session.has_organization());
        assert_eq!(session.organization_fields().name, "my-org");
    }

    #[test]
    fn setting_org_does_not_touch_space() {
        let mut session = targeted_session();
        session
            .set_organization_fields(OrganizationFields::new("other-guid", "other-org"))
            .unwrap();
        assert_eq!(session.space_fields().name, "my-space");
    }

    #[test]
    fn empty_fields_clear_target() {
        let mut session = targeted_session();
        session
            .set_organization_fields(OrganizationFields::default())
            .unwrap();
        session.set_space_fields(SpaceFields::default()).unwrap();
        assert!(!session.has_organization());
        assert!(!session.has_space());
    }

    #[test]
    fn set_target_replaces_both() {
        let mut session = targeted_session();
        session
            .set_target(
                OrganizationFields::new("new-org-guid", "new-org"),
                SpaceFields::default(),
            )
            .unwrap();
        assert_eq!(session.organization_fields().guid, "new-org-guid");
        assert!(!session.has_space());
    }

    #[test]
    fn set_api_endpoint_clears_login_and_target() {
        let mut session = targeted_session();
        session
            .set_api_endpoint(
                "https://api.other.com",
                "2.100.0",
                "https://login.other.com",
                "https://log-cache.other.com",
                true,
            )
            .unwrap();
        assert_eq!(session.api_endpoint(), "https://api.other.com");
        assert_eq!(session.api_version(), "2.100.0");
        assert!(session.is_ssl_disabled());
        assert!(!session.is_logged_in());
        assert!(!session.has_organization());
        assert!(session.username().is_empty());
    }

    #[test]
    fn set_tokens_drops_previous_target() {
        let mut session = targeted_session();
        session.set_tokens("bearer new", "refresh", "other-user").unwrap();
        assert_eq!(session.access_token(), "bearer new");
        assert_eq!(session.username(), "other-user");
        assert!(!session.has_organization());
        assert!(!session.has_space());
    }

    #[test]
    fn clear_session_keeps_endpoint() {
        let mut session = targeted_session();
        session.clear_session().unwrap();
        assert_eq!(session.api_endpoint(), "https://api.example.com");
        assert!(!session.is_logged_in());
        assert!(!session.has_space());
    }

    #[test]
    fn failed_flush_leaves_session_unchanged() {
        let mut session = SessionStore::load(Box::new(FailingPersistor)).unwrap();
        let result = session.set_tokens("token", "refresh", "me");
        assert!(result.is_err());
        assert!(!session.is_logged_in());
    }

    #[test]
    fn mutations_are_flushed_to_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");

        let mut session = SessionStore::load(Box::new(FilePersistor::new(&path))).unwrap();
        session.set_tokens("token", "refresh", "my-user").unwrap();
        session
            .set_space_fields(SpaceFields::new("space-guid", "my-space"))
            .unwrap();

        let reloaded = SessionStore::load(Box::new(FilePersistor::new(&path))).unwrap();
        assert_eq!(reloaded.access_token(), "token");
        assert_eq!(reloaded.username(), "my-user");
        assert_eq!(reloaded.space_fields().name, "my-space");
    }
}
