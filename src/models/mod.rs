//! Entity records returned by the platform API.
//!
//! Every entity carries a server-assigned `guid` that never changes and a
//! mutable display `name`. The session store only caches the "fields"
//! (guid + name) of the targeted organization and space.

pub mod log_message;

pub use log_message::{LogMessage, LogStreamKind};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Guid and name of an organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationFields {
    #[serde(default)]
    pub guid: String,
    #[serde(default)]
    pub name: String,
}

impl OrganizationFields {
    pub fn new(guid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
        }
    }

    /// True when no organization is described (nothing targeted).
    pub fn is_empty(&self) -> bool {
        self.guid.is_empty() && self.name.is_empty()
    }
}

/// Guid and name of a space.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceFields {
    #[serde(default)]
    pub guid: String,
    #[serde(default)]
    pub name: String,
}

impl SpaceFields {
    pub fn new(guid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
        }
    }

    /// True when no space is described (nothing targeted).
    pub fn is_empty(&self) -> bool {
        self.guid.is_empty() && self.name.is_empty()
    }
}

/// An organization, the top-level tenant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Organization {
    pub fields: OrganizationFields,
    /// Spaces owned by the organization, when the API returned them inline.
    pub spaces: Vec<SpaceFields>,
}

impl Organization {
    pub fn new(guid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            fields: OrganizationFields::new(guid, name),
            spaces: Vec::new(),
        }
    }

    pub fn guid(&self) -> &str {
        &self.fields.guid
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }
}

/// A space inside an organization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Space {
    pub fields: SpaceFields,
    pub organization: OrganizationFields,
}

impl Space {
    pub fn new(guid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            fields: SpaceFields::new(guid, name),
            organization: OrganizationFields::default(),
        }
    }

    pub fn guid(&self) -> &str {
        &self.fields.guid
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }
}

/// An application deployed to a space.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Application {
    pub guid: String,
    pub name: String,
    pub state: String,
    pub instances: u32,
    pub memory_mb: u64,
    /// User-provided environment variables, ordered by key.
    pub environment_vars: BTreeMap<String, String>,
}

impl Application {
    pub fn new(guid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A registered service broker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceBroker {
    pub guid: String,
    pub name: String,
    pub url: String,
    pub username: String,
}

impl ServiceBroker {
    pub fn new(guid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

/// The kinds of entity a lookup can target.
///
/// Used in not-found errors and user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Organization,
    Space,
    Application,
    ServiceBroker,
}

impl EntityKind {
    /// Lowercase noun as used in prompts ("Really delete the org ...").
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Organization => "org",
            Self::Space => "space",
            Self::Application => "app",
            Self::ServiceBroker => "service-broker",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Organization => "Organization",
            Self::Space => "Space",
            Self::Application => "App",
            Self::ServiceBroker => "Service Broker",
        };
        f.write_str(label)
    }
}
