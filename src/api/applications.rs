//! Application repository over the Cloud Controller v2 API.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::models::{Application, EntityKind};

use super::client::CloudControllerClient;
use super::{ApiError, ApiResult, ApplicationRepository};

#[derive(Debug, Deserialize)]
struct ApplicationEntity {
    name: String,
    #[serde(default)]
    state: String,
    #[serde(default)]
    instances: u32,
    #[serde(default)]
    memory: u64,
    #[serde(default)]
    environment_json: Option<BTreeMap<String, serde_json::Value>>,
}

pub struct HttpApplicationRepository {
    client: Rc<CloudControllerClient>,
}

impl HttpApplicationRepository {
    pub fn new(client: Rc<CloudControllerClient>) -> Self {
        Self { client }
    }
}

impl ApplicationRepository for HttpApplicationRepository {
    fn find_by_name(&self, space_guid: &str, name: &str) -> ApiResult<Application> {
        let path = format!("/v2/spaces/{}/apps", space_guid);
        let found = self
            .client
            .find_first::<ApplicationEntity>(&path, name)?
            .ok_or_else(|| ApiError::not_found(EntityKind::Application, name))?;

        let entity = found.entity;
        Ok(Application {
            guid: found.metadata.guid,
            name: entity.name,
            state: entity.state,
            instances: entity.instances,
            memory_mb: entity.memory,
            environment_vars: entity
                .environment_json
                .unwrap_or_default()
                .into_iter()
                .map(|(key, value)| (key, env_value_to_string(value)))
                .collect(),
        })
    }
}

/// Environment values are usually strings; anything else is shown as JSON.
fn env_value_to_string(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}
