#[cfg(test)]
mod tests {
    use http::{Method, Uri};
    use lambda_http::{Body, Request, RequestExt};
    use serde_json::{json, Value};
    use notify_lambda::router::handle_lambda;

    fn post(path: &'static str, body: Value) -> Request {
        Request::from(http::Request::builder()
            .method(Method::POST)
            .uri(Uri::from_static(path))
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap())
            .with_raw_http_path(path)
    }

    fn json_body(body: &Body) -> Value {
        if let Body::Text(body) = body {
            serde_json::from_str(body).unwrap()
        } else {
            panic!("Response body is not text");
        }
    }

    #[tokio::test]
    async fn test_lambda_handler_status_path() {
        let request = Request::from(http::Request::builder()
            .method(Method::GET)
            .uri(Uri::from_static("/dev/status"))
            .body(Body::Empty)
            .unwrap())
            .with_raw_http_path("/dev/status");

        let response = handle_lambda(request).await.unwrap();

        assert_eq!(response.status(), 200);
        let body = json_body(response.body());
        assert_eq!(body["status"], "OK");
        assert_eq!(body["service"], "notify-lambda");
        assert_eq!(body["channels"], json!(["EMAIL", "PUSH"]));
    }

    #[tokio::test]
    async fn test_lambda_handler_not_found_path() {
        let request = Request::from(http::Request::builder()
            .method(Method::GET)
            .uri("/dev/unknown")
            .body(Body::Empty)
            .unwrap())
            .with_raw_http_path("/dev/unknown");

        let response = handle_lambda(request).await.unwrap();

        assert_eq!(response.status(), 404);
        assert_eq!(json_body(response.body()), json!({"error": "Not Found"}));
    }

    #[tokio::test]
    async fn test_notify_without_channel() {
        let request = post("/prod/notify", json!({"data": {"token": "abc123"}}));
        let response = handle_lambda(request).await.unwrap();

        assert_eq!(response.status(), 400);
        assert_eq!(json_body(response.body()), json!({"error": "channel and data are required"}));
    }

    #[tokio::test]
    async fn test_notify_unsupported_channel() {
        let request = post("/dev/notify", json!({"channel": "SMS", "data": {"to": "+447700900000"}}));
        let response = handle_lambda(request).await.unwrap();

        assert_eq!(response.status(), 400);
        assert_eq!(json_body(response.body()), json!({"error": "Unsupported channel"}));
    }

    #[tokio::test]
    async fn test_notify_with_invalid_json_body() {
        let request = Request::from(http::Request::builder()
            .method(Method::POST)
            .uri("/notify")
            .body(Body::from("{channel: PUSH"))
            .unwrap())
            .with_raw_http_path("/notify");

        let response = handle_lambda(request).await.unwrap();

        assert_eq!(response.status(), 400);
        assert_eq!(json_body(response.body()), json!({"error": "channel and data are required"}));
    }
}
