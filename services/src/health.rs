use std::sync::Arc;

use orgdesk_gateway::ApiRequest;
use orgdesk_gateway::Result;
use orgdesk_gateway::SessionGateway;
use orgdesk_protocol::HealthReport;

pub struct HealthClient {
    gateway: Arc<SessionGateway>,
}

impl HealthClient {
    pub fn new(gateway: Arc<SessionGateway>) -> Self {
        Self { gateway }
    }

    pub async fn database(&self) -> Result<Vec<HealthReport>> {
        self.gateway.call(ApiRequest::get("health/database")).await
    }
}
