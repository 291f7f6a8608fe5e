//! Organization repository over the Cloud Controller v2 API.

use serde::Deserialize;
use serde_json::json;
use std::rc::Rc;

use crate::models::{EntityKind, Organization, SpaceFields};

use super::client::{CloudControllerClient, Resource};
use super::{ApiError, ApiResult, OrganizationRepository};

#[derive(Debug, Deserialize)]
struct OrganizationEntity {
    name: String,
    #[serde(default)]
    spaces: Vec<Resource<SpaceEntity>>,
}

#[derive(Debug, Deserialize)]
struct SpaceEntity {
    name: String,
}

pub struct HttpOrganizationRepository {
    client: Rc<CloudControllerClient>,
}

impl HttpOrganizationRepository {
    pub fn new(client: Rc<CloudControllerClient>) -> Self {
        Self { client }
    }
}

impl OrganizationRepository for HttpOrganizationRepository {
    fn find_by_name(&self, name: &str) -> ApiResult<Organization> {
        let found = self
            .client
            .find_first::<OrganizationEntity>("/v2/organizations", name)?
            .ok_or_else(|| ApiError::not_found(EntityKind::Organization, name))?;

        let mut org = Organization::new(found.metadata.guid, found.entity.name);
        org.spaces = found
            .entity
            .spaces
            .into_iter()
            .map(|s| SpaceFields::new(s.metadata.guid, s.entity.name))
            .collect();
        Ok(org)
    }

    fn rename(&self, guid: &str, new_name: &str) -> ApiResult<()> {
        self.client.put(
            &format!("/v2/organizations/{}", guid),
            &json!({ "name": new_name }),
        )
    }

    fn delete(&self, guid: &str) -> ApiResult<()> {
        self.client.delete(
            &format!("/v2/organizations/{}", guid),
            &[("recursive", "true")],
        )
    }
}
