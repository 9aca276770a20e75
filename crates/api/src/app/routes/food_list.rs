use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/party/:id/foodlist", get(get_food_list))
        .route(
            "/party/:id/foodlist/:user/:item",
            post(add_food_item).delete(remove_food_item),
        )
}

pub async fn get_food_list(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_party_number(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.food_list(id) {
        Ok(foodlist) => (StatusCode::OK, Json(dto::FoodListResponse { foodlist })).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn add_food_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path((id, user, item)): Path<(String, String, String)>,
) -> axum::response::Response {
    let id = match errors::parse_party_number(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.add_food(id, &user, &item) {
        Ok(list) => (StatusCode::OK, Json(list)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn remove_food_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path((id, user, item)): Path<(String, String, String)>,
) -> axum::response::Response {
    let id = match errors::parse_party_number(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.remove_food(id, &user, &item) {
        Ok(()) => (
            StatusCode::OK,
            Json(dto::Message {
                msg: format!("{item} removed from the food list"),
            }),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
