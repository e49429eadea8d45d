use std::sync::Arc;

use orgdesk_gateway::Result;
use orgdesk_gateway::SessionGateway;
use orgdesk_protocol::Paginated;
use orgdesk_protocol::UserInfo;
use serde::Serialize;

use crate::resource::ResourceClient;

pub struct UserClient {
    resource: ResourceClient<UserInfo>,
}

impl UserClient {
    pub fn new(gateway: Arc<SessionGateway>) -> Self {
        Self {
            resource: ResourceClient::new(gateway, "users"),
        }
    }

    /// First page as shown by the user table.
    pub async fn get_list(&self) -> Result<Paginated<UserInfo>> {
        self.resource.get_page(1, 10).await
    }

    pub async fn update(&self, id: &str, body: &impl Serialize) -> Result<UserInfo> {
        self.resource.update(id, body).await
    }

    pub fn resource(&self) -> &ResourceClient<UserInfo> {
        &self.resource
    }
}
