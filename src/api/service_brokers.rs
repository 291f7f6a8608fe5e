//! Service broker repository over the Cloud Controller v2 API.

use serde::Deserialize;
use std::rc::Rc;

use crate::models::{EntityKind, ServiceBroker};

use super::client::CloudControllerClient;
use super::{ApiError, ApiResult, ServiceBrokerRepository};

#[derive(Debug, Deserialize)]
struct ServiceBrokerEntity {
    name: String,
    #[serde(default)]
    broker_url: String,
    #[serde(default)]
    auth_username: String,
}

pub struct HttpServiceBrokerRepository {
    client: Rc<CloudControllerClient>,
}

impl HttpServiceBrokerRepository {
    pub fn new(client: Rc<CloudControllerClient>) -> Self {
        Self { client }
    }
}

impl ServiceBrokerRepository for HttpServiceBrokerRepository {
    fn find_by_name(&self, name: &str) -> ApiResult<ServiceBroker> {
        let found = self
            .client
            .find_first::<ServiceBrokerEntity>("/v2/service_brokers", name)?
            .ok_or_else(|| ApiError::not_found(EntityKind::ServiceBroker, name))?;

        Ok(ServiceBroker {
            guid: found.metadata.guid,
            name: found.entity.name,
            url: found.entity.broker_url,
            username: found.entity.auth_username,
        })
    }

    fn delete(&self, guid: &str) -> ApiResult<()> {
        self.client
            .delete(&format!("/v2/service_brokers/{}", guid), &[])
    }
}
