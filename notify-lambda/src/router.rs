use http::StatusCode;
use lambda_http::{Body, Request, Response};
use lambda_http::RequestExt;
use crate::endpoints::{notify, status};
use notify_shared::utilities::config::NotifyConfig;
use notify_shared::utilities::requests::extract_body;
use notify_shared::utilities::responses::{error_with_code, success_response};

const GET: &str = "GET";
const POST: &str = "POST";

pub async fn handle_lambda(event: Request) -> Result<Response<Body>, lambda_http::Error> {
    let raw_path = event.raw_http_path();
    let path = raw_path.strip_prefix("/dev")
        .or_else(|| raw_path.strip_prefix("/prod"))
        .unwrap_or(&raw_path);

    log::info!("Received request for path: {}", path);

    match (event.method().as_str(), path) {
        //Monitor
        (GET, "/status") => success_response(status::handle().await),

        //Dispatch
        (POST, "/notify") | (POST, "/") | (POST, "") => {
            // Secrets are read per invocation, nothing is kept between requests
            let config = NotifyConfig::from_env();
            notify::handler(&config, extract_body(&event)).await
        }

        //Not found
        _ => error_with_code("Not Found", StatusCode::NOT_FOUND),
    }
}
