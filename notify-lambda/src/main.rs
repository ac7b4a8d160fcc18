use lambda_http::{service_fn, Error};
use notify_lambda::router::handle_lambda;
use notify_shared::utilities::config;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    std::panic::set_hook(Box::new(|info| {
        log::error!("Application panicked: {}", info);
    }));

    config::init();
    lambda_http::run(service_fn(handle_lambda)).await?;
    Ok(())
}
