use axum::Router;

pub mod food_list;
pub mod parties;
pub mod system;

/// Router for all party and food-list endpoints.
pub fn router() -> Router {
    Router::new()
        .merge(parties::router())
        .merge(food_list::router())
}
