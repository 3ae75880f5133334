//! Application factory
//!
//! Builds the actix-web application with its middleware and routes, generic
//! over the SMS sender so production (Twilio) and tests (mock) share the
//! exact same wiring.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use otp_core::services::otp::SmsSender;

use crate::middleware::cors::create_cors;
use crate::routes::otp::{send_otp::send_otp, verify_otp::verify_otp, AppState};

/// Create and configure the application
pub fn create_app<S: SmsSender + 'static>(
    app_state: web::Data<AppState<S>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody<Error: std::fmt::Debug>>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // OTP endpoints
        .route("/send-otp", web::post().to(send_otp::<S>))
        .route("/verify-otp", web::post().to(verify_otp::<S>))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "sms-otp-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "The requested resource was not found"
    }))
}
