use serde::Serialize;

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub channels: [&'static str; 2],
}

pub async fn handle() -> StatusResponse {
    StatusResponse {
        status: "OK",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        channels: ["EMAIL", "PUSH"],
    }
}
