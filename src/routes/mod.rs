use axum::{routing::get, Router};

use crate::db::PlayerStore;

pub mod health;
pub mod players;

/// Player CRUD surface plus liveness, with the store as shared state.
/// CORS and request tracing are layered on in main.
pub fn app(store: PlayerStore) -> Router {
    Router::new()
        .route("/", get(players::list_players).post(players::create_player))
        .route("/health", get(health::health_check))
        .route(
            "/{id}",
            get(players::get_player)
                .put(players::replace_player)
                .patch(players::patch_player)
                .delete(players::delete_player),
        )
        .with_state(store)
}
