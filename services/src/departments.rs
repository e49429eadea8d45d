use std::sync::Arc;

use orgdesk_gateway::Result;
use orgdesk_gateway::SessionGateway;
use orgdesk_protocol::Department;
use orgdesk_protocol::Paginated;

use crate::resource::ResourceClient;

pub struct DepartmentClient {
    resource: ResourceClient<Department>,
}

impl DepartmentClient {
    pub fn new(gateway: Arc<SessionGateway>) -> Self {
        Self {
            resource: ResourceClient::new(gateway, "departments"),
        }
    }

    /// Expand manager/deputy on every read, as the org chart views need.
    pub fn with_leadership(gateway: Arc<SessionGateway>) -> Self {
        Self {
            resource: ResourceClient::new(gateway, "departments")
                .with_populate(["manager", "deputy"]),
        }
    }

    pub async fn get_list(&self) -> Result<Paginated<Department>> {
        self.resource.get_page(1, 10).await
    }

    pub fn resource(&self) -> &ResourceClient<Department> {
        &self.resource
    }
}
