use std::sync::Arc;

use orgdesk_gateway::Result;
use orgdesk_gateway::SessionGateway;
use orgdesk_protocol::Group;
use orgdesk_protocol::Paginated;

use crate::resource::ResourceClient;

pub struct GroupClient {
    resource: ResourceClient<Group>,
}

impl GroupClient {
    pub fn new(gateway: Arc<SessionGateway>) -> Self {
        Self {
            resource: ResourceClient::new(gateway, "groups"),
        }
    }

    pub async fn get_list(&self) -> Result<Paginated<Group>> {
        self.resource.get_page(1, 10).await
    }

    pub fn resource(&self) -> &ResourceClient<Group> {
        &self.resource
    }
}
