use std::sync::Arc;
use std::time::Duration;

use auth::TokenService;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Json;
use axum::Router;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_book::create_book;
use super::handlers::create_todo::create_todo;
use super::handlers::delete_book::delete_book;
use super::handlers::get_book::get_book;
use super::handlers::get_todo::get_todo;
use super::handlers::list_books::list_books;
use super::handlers::list_todos::list_todos;
use super::handlers::login::login;
use super::handlers::private_test::private_test;
use super::handlers::toggle_todo::toggle_todo;
use super::handlers::update_book::update_book;
use super::middleware::authenticate as auth_middleware;
use crate::domain::book::ports::BookServicePort;
use crate::domain::todo::ports::TodoServicePort;

#[derive(Clone)]
pub struct AppState {
    pub todo_service: Arc<dyn TodoServicePort>,
    pub book_service: Arc<dyn BookServicePort>,
    pub token_service: Arc<TokenService>,
}

pub fn create_router(
    todo_service: Arc<dyn TodoServicePort>,
    book_service: Arc<dyn BookServicePort>,
    token_service: Arc<TokenService>,
) -> Router {
    let state = AppState {
        todo_service,
        book_service,
        token_service,
    };

    let public_routes = Router::new()
        .route("/login", post(login))
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/:id", get(get_todo).patch(toggle_todo))
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/:id",
            get(get_book).patch(update_book).delete(delete_book),
        );

    // The public/protected split is decided here at wiring time; public
    // routes never run the token check.
    let protected_routes = Router::new()
        .route("/private/test/:uid", get(private_test))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state.token_service),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .fallback(page_not_found)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn page_not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "code": "PAGE_NOT_FOUND", "message": "Page not found" })),
    )
}
