use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/parties", get(list_parties).post(create_party))
        .route("/parties/loaded", get(loaded_parties))
        .route("/party/:id", get(get_party).delete(delete_party))
}

pub async fn create_party(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CreatePartyRequest>, JsonRejection>,
) -> axum::response::Response {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::warn!("unreadable party body: {rejection}");
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_body", rejection.body_text());
        }
    };

    match services.create_party(body.into_guests()) {
        Ok(party_number) => (StatusCode::OK, Json(dto::PartyCreated { party_number })).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_parties(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let loaded_parties = services.list_parties();
    (StatusCode::OK, Json(dto::LoadedParties { loaded_parties })).into_response()
}

pub async fn loaded_parties(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let loaded_parties = services.loaded_count();
    (StatusCode::OK, Json(dto::LoadedCount { loaded_parties })).into_response()
}

pub async fn get_party(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_party_number(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.get_party(id) {
        Ok(party) => (StatusCode::OK, Json(party)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_party(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_party_number(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.delete_party(id) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
