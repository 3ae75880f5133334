use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::info;

use otp_api::app::create_app;
use otp_api::routes::otp::AppState;
use otp_core::services::otp::{OtpConfig, OtpManager, SmsSender};
use otp_infra::sms::{MockSms, TwilioSms};
use otp_shared::config::ServerConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting SMS OTP API server");

    let server_config = ServerConfig::from_env();

    // Select the SMS provider. The mock sender logs passcodes instead of
    // sending them, so it is only suitable for development.
    let provider = std::env::var("SMS_PROVIDER").unwrap_or_else(|_| "mock".to_string());
    match provider.as_str() {
        "twilio" => {
            let sender =
                Arc::new(TwilioSms::from_env().context("failed to configure Twilio sender")?);
            run_server(sender, server_config).await
        }
        "mock" => {
            info!("SMS_PROVIDER=mock: passcodes will be logged, not sent");
            run_server(Arc::new(MockSms::new()), server_config).await
        }
        other => anyhow::bail!("unknown SMS_PROVIDER: {other} (expected 'twilio' or 'mock')"),
    }
}

async fn run_server<S: SmsSender + 'static>(
    sender: Arc<S>,
    config: ServerConfig,
) -> anyhow::Result<()> {
    let manager = Arc::new(OtpManager::new(sender, OtpConfig::default()));
    let state = web::Data::new(AppState { manager });

    let bind_address = config.bind_address();
    info!("Server listening on {}", bind_address);

    HttpServer::new(move || create_app(state.clone()))
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
