use std::{env, net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    error_handling::HandleErrorLayer,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    BoxError,
};
use calilog_api::{
    app::{env::Envy, errors::DefaultApiError},
    posts::{repository::postgres::PgPostRepository, service::PostService},
    AppState,
};
use sqlx::postgres::PgPoolOptions;
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("calilog_api=debug,tower_http=debug")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port.unwrap_or(3000);
    let cors = CorsLayer::new()
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET, Method::PATCH, Method::DELETE]);
    let cors = match &envy.frontend_url {
        Some(frontend_url) => cors.allow_origin(
            frontend_url
                .parse::<HeaderValue>()
                .expect("FRONTEND_URL is not a valid header value"),
        ),
        None => cors.allow_origin(Any),
    };

    let pool = PgPoolOptions::new()
        .max_connections(envy.database_max_connections.unwrap_or(10))
        .idle_timeout(Some(Duration::from_secs(60)))
        .connect(&envy.database_url)
        .await
        .expect("failed to connect to database");

    tracing::info!("connected to db");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("failed to run migrations");

    let repository = PgPostRepository::new(pool);
    let state = AppState::new(PostService::new(Arc::new(repository)));

    // app
    let rate_limit = envy.rate_limit_per_sec.unwrap_or(50);
    let app = calilog_api::router(state).layer(cors).layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(|err: BoxError| async move {
                tracing::warn!(%err, "request failed in middleware");
                DefaultApiError::InternalServerError.value()
            }))
            .layer(BufferLayer::new(1024))
            .layer(RateLimitLayer::new(rate_limit, Duration::from_secs(1))),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
