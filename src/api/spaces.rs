//! Space repository over the Cloud Controller v2 API.

use serde::Deserialize;
use serde_json::json;
use std::rc::Rc;

use crate::models::{EntityKind, OrganizationFields, Space};

use super::client::CloudControllerClient;
use super::{ApiError, ApiResult, SpaceRepository};

#[derive(Debug, Deserialize)]
struct SpaceEntity {
    name: String,
}

pub struct HttpSpaceRepository {
    client: Rc<CloudControllerClient>,
}

impl HttpSpaceRepository {
    pub fn new(client: Rc<CloudControllerClient>) -> Self {
        Self { client }
    }
}

impl SpaceRepository for HttpSpaceRepository {
    fn find_by_name(&self, organization_guid: &str, name: &str) -> ApiResult<Space> {
        let path = format!("/v2/organizations/{}/spaces", organization_guid);
        let found = self
            .client
            .find_first::<SpaceEntity>(&path, name)?
            .ok_or_else(|| ApiError::not_found(EntityKind::Space, name))?;

        let mut space = Space::new(found.metadata.guid, found.entity.name);
        space.organization = OrganizationFields::new(organization_guid, "");
        Ok(space)
    }

    fn rename(&self, guid: &str, new_name: &str) -> ApiResult<()> {
        self.client
            .put(&format!("/v2/spaces/{}", guid), &json!({ "name": new_name }))
    }

    fn delete(&self, guid: &str) -> ApiResult<()> {
        self.client
            .delete(&format!("/v2/spaces/{}", guid), &[("recursive", "true")])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn repo(server: &MockServer) -> HttpSpaceRepository {
        let client = CloudControllerClient::new(&server.base_url(), "bearer token", false).unwrap();
        HttpSpaceRepository::new(Rc::new(client))
    }

    #[test]
    fn find_by_name_searches_within_org() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v2/organizations/org-guid/spaces")
                .query_param("q", "name:my-space");
            then.status(200).json_body(json!({
                "resources": [{"metadata": {"guid": "space-guid"}, "entity": {"name": "my-space"}}]
            }));
        });

        let space = repo(&server).find_by_name("org-guid", "my-space").unwrap();

        mock.assert();
        assert_eq!(space.guid(), "space-guid");
        assert_eq!(space.organization.guid, "org-guid");
    }

    #[test]
    fn find_by_name_missing_is_not_found() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v2/organizations/org-guid/spaces");
            then.status(200).json_body(json!({"resources": []}));
        });

        let err = repo(&server)
            .find_by_name("org-guid", "nope")
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::ModelNotFound {
                kind: EntityKind::Space,
                ..
            }
        ));
    }

    #[test]
    fn rename_and_delete_hit_space_resource() {
        let server = MockServer::start();
        let rename = server.mock(|when, then| {
            when.method(PUT)
                .path("/v2/spaces/space-guid")
                .json_body(json!({"name": "renamed"}));
            then.status(201).json_body(json!({}));
        });
        let delete = server.mock(|when, then| {
            when.method(DELETE).path("/v2/spaces/space-guid");
            then.status(204);
        });

        let repo = repo(&server);
        repo.rename("space-guid", "renamed").unwrap();
        repo.delete("space-guid").unwrap();

        rename.assert();
        delete.assert();
    }
}
