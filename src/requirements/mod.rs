//! Preconditions evaluated before a command runs.
//!
//! A command declares an ordered list of [`Requirement`]s once its arguments
//! have parsed. They are checked in order and checking stops at the first
//! failure, so later lookups never hit the API when an earlier state check
//! has already failed. Lookups that succeed are collected into a
//! [`Resolved`] value handed to the command's run step.
//!
//! # Modules
//!
//! - [`resolved`] - Entities produced by successful lookups

pub mod resolved;

pub use resolved::{Resolved, ResolvedEntity};

use crate::api::Repositories;
use crate::config::SessionStore;
use crate::error::{CumulusError, Result};

/// A single precondition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// An API endpoint is configured.
    ApiEndpoint,
    /// The session holds an access token.
    Login,
    /// An organization is targeted.
    TargetedOrganization,
    /// A space is targeted.
    TargetedSpace,
    /// Look up an organization by name.
    OrganizationByName(String),
    /// Look up a space by name in the targeted organization.
    SpaceByName(String),
    /// Look up an application by name in the targeted space.
    ApplicationByName(String),
    /// Look up a service broker by name.
    ServiceBrokerByName(String),
}

impl Requirement {
    /// Check this requirement against the session, querying the API for lookups.
    ///
    /// State checks never touch the repositories. A lookup that finds nothing
    /// fails with the repository's not-found error.
    pub fn execute(
        &self,
        session: &SessionStore,
        repositories: &Repositories,
    ) -> Result<Option<ResolvedEntity>> {
        match self {
            Self::ApiEndpoint => check(session.has_api_endpoint(), CumulusError::NoApiEndpoint),
            Self::Login => check(session.is_logged_in(), CumulusError::NotAuthenticated),
            Self::TargetedOrganization => check(
                session.has_organization(),
                CumulusError::NoOrganizationTargeted,
            ),
            Self::TargetedSpace => check(session.has_space(), CumulusError::NoSpaceTargeted),
            Self::OrganizationByName(name) => {
                let org = repositories.organizations.find_by_name(name)?;
                Ok(Some(ResolvedEntity::Organization(org)))
            }
            Self::SpaceByName(name) => {
                let org_guid = &session.organization_fields().guid;
                let space = repositories.spaces.find_by_name(org_guid, name)?;
                Ok(Some(ResolvedEntity::Space(space)))
            }
            Self::ApplicationByName(name) => {
                let space_guid = &session.space_fields().guid;
                let app = repositories.applications.find_by_name(space_guid, name)?;
                Ok(Some(ResolvedEntity::Application(app)))
            }
            Self::ServiceBrokerByName(name) => {
                let broker = repositories.service_brokers.find_by_name(name)?;
                Ok(Some(ResolvedEntity::ServiceBroker(broker)))
            }
        }
    }
}

fn check(satisfied: bool, failure: CumulusError) -> Result<Option<ResolvedEntity>> {
    if satisfied {
        Ok(None)
    } else {
        Err(failure)
    }
}

/// Check every requirement in order, stopping at the first failure.
pub fn resolve(
    requirements: &[Requirement],
    session: &SessionStore,
    repositories: &Repositories,
) -> Result<Resolved> {
    let mut resolved = Resolved::default();
    for requirement in requirements {
        tracing::debug!(?requirement, "checking requirement");
        match requirement.execute(session, repositories) {
            Ok(Some(entity)) => resolved.insert(entity),
            Ok(None) => {}
            Err(e) => {
                tracing::debug!(?requirement, error = %e, "requirement failed");
                return Err(e);
            }
        }
    }
    Ok(resolved)
}
