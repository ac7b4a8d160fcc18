use lambda_http::Body;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use notify_lambda::endpoints::notify::handler;
use notify_shared::utilities::config::NotifyConfig;
use notify_shared::utilities::test::{init_logger, test_config, TEST_PROJECT_ID};

fn json_body(body: &Body) -> Value {
    match body {
        Body::Text(body) => serde_json::from_str(body).unwrap(),
        _ => panic!("Response body is not text"),
    }
}

async fn mount_push_provider(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "tok"})))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/v1/projects/{}/messages:send", TEST_PROJECT_ID)))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "projects/p/messages/1"})))
        .expect(1)
        .mount(server)
        .await;
}

async fn sent_message(server: &MockServer) -> Value {
    let requests = server.received_requests().await.unwrap();
    let send = requests
        .iter()
        .find(|r| r.url.path().ends_with("messages:send"))
        .expect("no send request recorded");
    serde_json::from_slice(&send.body).unwrap()
}

#[tokio::test]
async fn test_push_dispatch_end_to_end() {
    init_logger();
    let server = MockServer::start().await;
    mount_push_provider(&server).await;

    let body = json!({
        "channel": "PUSH",
        "data": {"token": "abc123", "title": "Hi", "body": "There"}
    });
    let response = handler(&test_config(&server.uri()), body).await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        json_body(response.body()),
        json!({"success": true, "message": "Notification sent via PUSH"})
    );

    let message = sent_message(&server).await;
    assert_eq!(message, json!({
        "message": {
            "token": "abc123",
            "notification": {"title": "Hi", "body": "There"}
        }
    }));
}

#[tokio::test]
async fn test_push_dispatch_forwards_data() {
    init_logger();
    let server = MockServer::start().await;
    mount_push_provider(&server).await;

    let body = json!({
        "channel": "PUSH",
        "data": {"token": "abc123", "title": "Hi", "body": "There", "data": {"url": "/orders/42"}}
    });
    let response = handler(&test_config(&server.uri()), body).await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(sent_message(&server).await["message"]["data"], json!({"url": "/orders/42"}));
}

#[tokio::test]
async fn test_push_without_service_account() {
    let body = json!({"channel": "PUSH", "data": {"token": "abc123", "title": "Hi", "body": "There"}});
    let response = handler(&NotifyConfig::default(), body).await.unwrap();

    assert_eq!(response.status(), 500);
    assert_eq!(json_body(response.body()), json!({"error": "FCM_SERVICE_ACCOUNT is not set"}));
}

#[tokio::test]
async fn test_push_without_device_token() {
    init_logger();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "tok"})))
        .expect(0)
        .mount(&server)
        .await;

    let body = json!({"channel": "PUSH", "data": {"title": "Hi", "body": "There"}});
    let response = handler(&test_config(&server.uri()), body).await.unwrap();

    assert_eq!(response.status(), 500);
    assert_eq!(json_body(response.body()), json!({"error": "FCM device token is required"}));
}

#[tokio::test]
async fn test_email_without_api_key() {
    let body = json!({
        "channel": "EMAIL",
        "data": {"to": "a@b.com", "subject": "s", "html": "<p>hi</p>"}
    });
    let response = handler(&NotifyConfig::default(), body).await.unwrap();

    assert_eq!(response.status(), 500);
    assert_eq!(json_body(response.body()), json!({"error": "RESEND_API_KEY is not set"}));
}

#[tokio::test]
async fn test_email_dispatch_end_to_end() {
    init_logger();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "email_1"})))
        .expect(1)
        .mount(&server)
        .await;

    let body = json!({
        "channel": "EMAIL",
        "data": {"to": "a@b.com", "subject": "s", "html": "<p>hi</p>"}
    });
    let response = handler(&test_config(&server.uri()), body).await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        json_body(response.body()),
        json!({"success": true, "message": "Notification sent via EMAIL"})
    );
}

#[tokio::test]
async fn test_null_data_is_rejected() {
    let response = handler(&NotifyConfig::default(), json!({"channel": "EMAIL", "data": null})).await.unwrap();

    assert_eq!(response.status(), 400);
    assert_eq!(json_body(response.body()), json!({"error": "channel and data are required"}));
}
