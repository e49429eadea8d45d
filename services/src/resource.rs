use std::marker::PhantomData;
use std::sync::Arc;

use orgdesk_gateway::ApiRequest;
use orgdesk_gateway::Result;
use orgdesk_gateway::SessionGateway;
use orgdesk_protocol::Paginated;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Generic CRUD access to one REST collection.
///
/// `populate` keys are forwarded on every read as repeated query pairs,
/// which is how the backend expands relations.
pub struct ResourceClient<T> {
    gateway: Arc<SessionGateway>,
    endpoint: String,
    populate: Vec<String>,
    marker: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> ResourceClient<T> {
    pub fn new(gateway: Arc<SessionGateway>, endpoint: impl Into<String>) -> Self {
        Self {
            gateway,
            endpoint: endpoint.into(),
            populate: Vec::new(),
            marker: PhantomData,
        }
    }

    pub fn with_populate(
        mut self,
        keys: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.populate = keys.into_iter().map(Into::into).collect();
        self
    }

    fn item_path(&self, id: &str) -> String {
        format!("{}/{id}", self.endpoint)
    }

    fn populated(&self, mut request: ApiRequest) -> ApiRequest {
        for key in &self.populate {
            request = request.query("populate", key.clone());
        }
        request
    }

    pub async fn get_all(&self) -> Result<Vec<T>> {
        self.gateway
            .call(self.populated(ApiRequest::get(&self.endpoint)))
            .await
    }

    pub async fn get_page(&self, page: u32, take: u32) -> Result<Paginated<T>> {
        let request = ApiRequest::get(&self.endpoint)
            .query("page", page.to_string())
            .query("take", take.to_string());
        self.gateway.call(self.populated(request)).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<T> {
        self.gateway
            .call(self.populated(ApiRequest::get(self.item_path(id))))
            .await
    }

    pub async fn create(&self, body: &impl Serialize) -> Result<T> {
        let request = ApiRequest::post(&self.endpoint).json(serde_json::to_value(body)?);
        self.gateway.call(request).await
    }

    pub async fn update(&self, id: &str, body: &impl Serialize) -> Result<T> {
        let request = ApiRequest::put(self.item_path(id)).json(serde_json::to_value(body)?);
        self.gateway.call(request).await
    }

    pub async fn delete(&self, id: &str) -> Result<T> {
        self.gateway.call(ApiRequest::delete(self.item_path(id))).await
    }
}
