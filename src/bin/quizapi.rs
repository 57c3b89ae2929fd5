pub use quiz_functions::api::quiz_handler::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    quiz_functions::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
