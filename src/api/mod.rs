pub mod auth;
pub mod common;
pub mod contact;
pub mod health;
pub mod newsletter;

pub use health::health;

use axum::{
    extract::DefaultBodyLimit,
    handler::HandlerWithoutStateExt,
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{AppState, Config};

/// Portal Backend API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portal Backend API",
        version = "0.1.0",
        description = "Newsletter, contact form and account endpoints backed by a flat JSON store"
    ),
    paths(
        health::health,
        newsletter::handlers::subscribe,
        contact::handlers::send_message,
        auth::handlers::register,
        auth::handlers::login,
    ),
    components(
        schemas(
            common::MessageResponse,
            common::ErrorResponse,
            health::HealthResponse,
            newsletter::handlers::SubscribeRequest,
            contact::handlers::ContactRequest,
            auth::handlers::RegisterRequest,
            auth::handlers::LoginRequest,
            auth::handlers::LoginResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Newsletter", description = "Newsletter subscriptions"),
        (name = "Contact", description = "Contact form messages"),
        (name = "Auth", description = "User registration and login"),
    )
)]
pub struct ApiDoc;

/// Build the full application: API routes, static files, and middleware.
pub fn router(state: Arc<AppState>, config: &Config) -> Router {
    // GETs that match no route are served from disk; anything else unmatched
    // gets the JSON 404. API paths hit with another method take the same path.
    let static_files = ServeDir::new(&config.static_dir)
        .call_fallback_on_method_not_allowed(true)
        .fallback(common::not_found.into_service());

    Router::new()
        .route(
            "/api/subscribe",
            post(newsletter::subscribe).fallback_service(static_files.clone()),
        )
        .route(
            "/api/contact",
            post(contact::send_message).fallback_service(static_files.clone()),
        )
        .route(
            "/api/register",
            post(auth::register).fallback_service(static_files.clone()),
        )
        .route(
            "/api/login",
            post(auth::login).fallback_service(static_files.clone()),
        )
        .route(
            "/api/health",
            get(health).fallback_service(static_files.clone()),
        )
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(static_files)
        .layer(DefaultBodyLimit::max(config.body_limit))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    match config
        .cors_origin
        .as_deref()
        .and_then(|origin| origin.parse::<HeaderValue>().ok())
    {
        Some(origin) => layer.allow_origin(AllowOrigin::exact(origin)),
        None => layer.allow_origin(AllowOrigin::any()),
    }
}
