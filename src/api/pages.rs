//! Static informational endpoints

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct AboutResponse {
    pub about: String,
}

/// Welcome message
#[utoipa::path(
    get,
    path = "/",
    tag = "pages",
    responses(
        (status = 200, description = "Welcome message", body = WelcomeResponse)
    )
)]
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "welcome to my Bookish Api".to_string(),
    })
}

/// About page
#[utoipa::path(
    get,
    path = "/about",
    tag = "pages",
    responses(
        (status = 200, description = "About the API", body = AboutResponse)
    )
)]
pub async fn about() -> Json<AboutResponse> {
    Json(AboutResponse {
        about: "this is about page of my Api".to_string(),
    })
}
