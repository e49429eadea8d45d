//! Service-client tests against a mock backend, through the real
//! gateway and reqwest transport.

use std::sync::Arc;

use orgdesk_gateway::ReqwestTransport;
use orgdesk_gateway::SessionGateway;
use orgdesk_gateway::SessionStore;
use orgdesk_gateway::TracingNotifier;
use orgdesk_protocol::SignInRequest;
use orgdesk_protocol::TokenPair;
use orgdesk_services::AuthClient;
use orgdesk_services::DepartmentClient;
use orgdesk_services::GroupClient;
use orgdesk_services::HealthClient;
use orgdesk_services::UserClient;
use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::body_json;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::matchers::query_param;

async fn start_gateway(server: &MockServer) -> Arc<SessionGateway> {
    let base_url = Url::parse(&format!("{}/", server.uri())).expect("server uri should parse");
    let transport = ReqwestTransport::new(base_url).expect("transport should build");
    let session = Arc::new(SessionStore::new());
    session.set_tokens(TokenPair {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
    });
    Arc::new(SessionGateway::new(
        Arc::new(transport),
        session,
        Arc::new(TracingNotifier),
    ))
}

#[tokio::test]
async fn user_list_requests_the_first_page() {
    let server = MockServer::start().await;
    let gateway = start_gateway(&server).await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("page", "1"))
        .and(query_param("take", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "SUCCESS",
            "data": {
                "docs": [
                    { "id": "u1", "email": "ada@example.test", "firstName": "Ada" },
                    { "id": "u2", "email": "alan@example.test" },
                ],
                "count": 2,
            },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = UserClient::new(gateway)
        .get_list()
        .await
        .expect("list should load");
    assert_eq!(page.count, 2);
    assert_eq!(page.docs.len(), 2);
    assert_eq!(page.docs[0].first_name.as_deref(), Some("Ada"));
}

#[tokio::test]
async fn department_reads_expand_leadership_relations() {
    let server = MockServer::start().await;
    let gateway = start_gateway(&server).await;

    Mock::given(method("GET"))
        .and(path("/departments"))
        .and(query_param("populate", "manager"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "SUCCESS",
            "data": {
                "docs": [{
                    "id": "d1",
                    "name": "Engineering",
                    "code": "ENG",
                    "path": "/ENG",
                    "manager": { "id": "u1", "email": "ada@example.test" },
                }],
                "count": 1,
            },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = DepartmentClient::with_leadership(gateway)
        .get_list()
        .await
        .expect("list should load");
    assert_eq!(page.docs[0].code, "ENG");
    let manager = page.docs[0].manager.as_ref().expect("manager expanded");
    assert_eq!(manager.email, "ada@example.test");
}

#[tokio::test]
async fn group_create_posts_the_body_and_decodes_the_entity() {
    let server = MockServer::start().await;
    let gateway = start_gateway(&server).await;

    Mock::given(method("POST"))
        .and(path("/groups"))
        .and(body_json(json!({ "name": "Admins", "code": "ADM" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "SUCCESS",
            "data": {
                "id": "g1",
                "name": "Admins",
                "code": "ADM",
                "permissions": ["ADD_USER", "DELETE_USER"],
            },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let group = GroupClient::new(gateway)
        .resource()
        .create(&json!({ "name": "Admins", "code": "ADM" }))
        .await
        .expect("create should succeed");
    assert_eq!(group.id, "g1");
    assert_eq!(group.permissions.len(), 2);
}

#[tokio::test]
async fn user_delete_targets_the_item_path() {
    let server = MockServer::start().await;
    let gateway = start_gateway(&server).await;

    Mock::given(method("DELETE"))
        .and(path("/users/u7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "SUCCESS",
            "data": { "id": "u7", "email": "gone@example.test", "deleted": true },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = UserClient::new(gateway)
        .resource()
        .delete("u7")
        .await
        .expect("delete should succeed");
    assert!(user.deleted);
}

#[tokio::test]
async fn sign_in_stores_the_returned_tokens() {
    let server = MockServer::start().await;
    let gateway = start_gateway(&server).await;
    gateway.session().sign_out();

    Mock::given(method("POST"))
        .and(path("/auth/signin"))
        .and(body_json(json!({
            "email": "ada@example.test",
            "password": "hunter2",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "SUCCESS",
            "data": {
                "accessToken": "fresh-access",
                "refreshToken": "fresh-refresh",
                "user": { "id": "u1", "email": "ada@example.test" },
            },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let auth = AuthClient::new(gateway.clone());
    let response = auth
        .sign_in(&SignInRequest {
            email: "ada@example.test".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .expect("sign-in should succeed");
    assert_eq!(response.user.id, "u1");
    assert_eq!(
        gateway.session().access_token().as_deref(),
        Some("fresh-access")
    );

    auth.sign_out();
    assert!(gateway.session().snapshot().is_empty());
}

#[tokio::test]
async fn health_probe_decodes_indicator_details() {
    let server = MockServer::start().await;
    let gateway = start_gateway(&server).await;

    Mock::given(method("GET"))
        .and(path("/health/database"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "SUCCESS",
            "data": [{
                "status": "ok",
                "info": { "database": { "status": "up" } },
                "error": {},
                "details": { "database": { "status": "up" } },
            }],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reports = HealthClient::new(gateway)
        .database()
        .await
        .expect("probe should succeed");
    assert_eq!(reports.len(), 1);
    assert_eq!(
        reports[0].info["database"].status,
        orgdesk_protocol::IndicatorStatus::Up
    );
}
