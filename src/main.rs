use std::{env, sync::Arc};

use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use notes_api::{handlers::rest, repository::Repository, router, service::NoteService};

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt::init();

    // Fetch env variables
    let database_dsn =
        env::var("PG_DSN").expect("database dsn must be provided as an ENV variable");

    // Repository creation and migration
    let mut repo = Repository::new(database_dsn).await.unwrap_or_else(|e| {
        tracing::error!("Failed to establish database connection: {e}");
        panic!("failed to establish database connection: {e}");
    });

    repo.migrate().await.unwrap_or_else(|e| {
        tracing::error!("Failed to migrate database: {e}");
        panic!("failed to migrate database: {e}");
    });

    // Service creation
    let service = Arc::new(NoteService::new(Arc::new(repo)));

    // Router config
    let app = router(service)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", rest::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tracing::info!("Notes API starting, listening on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("failed to start server");
}
