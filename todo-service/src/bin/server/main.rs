use std::sync::Arc;

use auth::TokenService;
use sqlx::postgres::PgPoolOptions;
use todo_service::config::Config;
use todo_service::domain::book::service::BookService;
use todo_service::domain::store::MemoryStore;
use todo_service::domain::todo::models::seed_todos;
use todo_service::domain::todo::service::TodoService;
use todo_service::inbound::http::router::create_router;
use todo_service::outbound::repositories::PostgresBookRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "todo-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let token_service = Arc::new(TokenService::new(config.jwt.secret.as_bytes()));
    let todo_service = Arc::new(TodoService::new(MemoryStore::with_entities(seed_todos())));
    let book_repository = Arc::new(PostgresBookRepository::new(pg_pool));
    let book_service = Arc::new(BookService::new(book_repository));

    let http_address = format!("{}:{}", config.server.host, config.server.port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(todo_service, book_service, token_service);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
