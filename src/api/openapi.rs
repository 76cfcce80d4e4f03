//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, pages};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookish API",
        version = "0.1.0",
        description = "Book catalog REST API backed by a JSON file"
    ),
    paths(
        // Pages
        pages::welcome,
        pages::about,
        // Health
        health::health_check,
        // Books
        books::view_books,
        books::get_book,
        books::sort_books,
        books::add_book,
    ),
    components(
        schemas(
            pages::WelcomeResponse,
            pages::AboutResponse,
            health::HealthResponse,
            books::AddBookResponse,
            crate::models::book::Book,
            crate::models::book::BookStatus,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "pages", description = "Welcome and about pages"),
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog")
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/docs`, raw document at `/openapi.json`
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
}
