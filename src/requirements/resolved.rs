//! Entities produced by requirement lookups.

use crate::error::{CumulusError, Result};
use crate::models::{Application, Organization, ServiceBroker, Space};

/// Output of one successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedEntity {
    Organization(Organization),
    Space(Space),
    Application(Application),
    ServiceBroker(ServiceBroker),
}

/// Everything the requirements of one invocation looked up.
///
/// A command only reads what it asked for; asking for anything else is a
/// programming error reported as [`CumulusError::Unresolved`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolved {
    organization: Option<Organization>,
    space: Option<Space>,
    application: Option<Application>,
    service_broker: Option<ServiceBroker>,
}

impl Resolved {
    pub fn insert(&mut self, entity: ResolvedEntity) {
        match entity {
            ResolvedEntity::Organization(o) => self.organization = Some(o),
            ResolvedEntity::Space(s) => self.space = Some(s),
            ResolvedEntity::Application(a) => self.application = Some(a),
            ResolvedEntity::ServiceBroker(b) => self.service_broker = Some(b),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.organization.is_none()
            && self.space.is_none()
            && self.application.is_none()
            && self.service_broker.is_none()
    }

    pub fn organization(&self) -> Result<&Organization> {
        self.organization
            .as_ref()
            .ok_or(CumulusError::Unresolved {
                what: "organization",
            })
    }

    pub fn space(&self) -> Result<&Space> {
        self.space
            .as_ref()
            .ok_or(CumulusError::Unresolved { what: "space" })
    }

    pub fn application(&self) -> Result<&Application> {
        self.application
            .as_ref()
            .ok_or(CumulusError::Unresolved {
                what: "application",
            })
    }

    pub fn service_broker(&self) -> Result<&ServiceBroker> {
        self.service_broker
            .as_ref()
            .ok_or(CumulusError::Unresolved {
                what: "service broker",
            })
    }
}

impl FromIterator<ResolvedEntity> for Resolved {
    fn from_iter<I: IntoIterator<Item = ResolvedEntity>>(iter: I) -> Self {
        let mut resolved = Self::default();
        for entity in iter {
            resolved.insert(entity);
        }
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let resolved = Resolved::default();
        assert!(resolved.is_empty());
        assert!(matches!(
            resolved.organization(),
            Err(CumulusError::Unresolved { what: "organization" })
        ));
    }

    #[test]
    fn collects_from_iterator() {
        let resolved: Resolved = vec![
            ResolvedEntity::Organization(Organization::new("org-guid", "my-org")),
            ResolvedEntity::Application(Application::new("app-guid", "my-app")),
        ]
        .into_iter()
        .collect();

        assert_eq!(resolved.organization().unwrap().name(), "my-org");
        assert_eq!(resolved.application().unwrap().name, "my-app");
        assert!(resolved.space().is_err());
        assert!(resolved.service_broker().is_err());
    }

    #[test]
    fn later_lookup_of_same_kind_replaces_earlier() {
        let mut resolved = Resolved::default();
        resolved.insert(ResolvedEntity::Space(Space::new("a", "first")));
        resolved.insert(ResolvedEntity::Space(Space::new("b", "second")));
        assert_eq!(resolved.space().unwrap().name(), "second");
    }
}
