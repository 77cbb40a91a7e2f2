use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use uuid::Uuid;

use crate::db::{self, PlayerStore};
use crate::error::ApiError;
use crate::models::{is_truthy, CreatePlayer, PatchPlayer, Player, UpdatePlayer};

/// Clients may cache reads for five minutes.
const CACHE_CONTROL_VALUE: &str = "public, max-age=300";

fn new_player_id() -> String {
    Uuid::new_v4().to_string()
}

// GET / - return the whole collection in insertion order
pub async fn list_players(
    State(store): State<PlayerStore>,
) -> Result<impl IntoResponse, ApiError> {
    let players = db::load_players(&store).await?;

    Ok(([(header::CACHE_CONTROL, CACHE_CONTROL_VALUE)], Json(players)))
}

// POST / - append a new player with a server-assigned id
pub async fn create_player(
    State(store): State<PlayerStore>,
    Json(payload): Json<CreatePlayer>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    let mut players = db::load_players(&store).await?;

    let player = payload.into_player(new_player_id());
    players.push(player.clone());

    db::save_players(&store, &players).await?;

    Ok((StatusCode::CREATED, Json(player)))
}

// GET /:id - linear scan for a matching id
pub async fn get_player(
    State(store): State<PlayerStore>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let players = db::load_players(&store).await?;

    let player = players
        .into_iter()
        .find(|p| p.id == id)
        .ok_or(ApiError::NotFound)?;

    Ok(([(header::CACHE_CONTROL, CACHE_CONTROL_VALUE)], Json(player)))
}

// PUT /:id - replace name/country/rank on an existing record, or insert a
// new record under a fresh id when the path id is unknown. The upsert
// ignores the requested id; only the three known fields are replaced, so
// anything else on an existing record survives untouched.
pub async fn replace_player(
    State(store): State<PlayerStore>,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePlayer>,
) -> Result<Json<Player>, ApiError> {
    let mut players = db::load_players(&store).await?;

    let result = match players.iter_mut().find(|p| p.id == id) {
        Some(player) => {
            player.name = payload.name;
            player.country = payload.country;
            player.rank = payload.rank;
            player.clone()
        }
        None => {
            let player = Player {
                id: new_player_id(),
                name: payload.name,
                country: payload.country,
                rank: payload.rank,
                extra: serde_json::Map::new(),
            };
            players.push(player.clone());
            player
        }
    };

    db::save_players(&store, &players).await?;

    Ok(Json(result))
}

// PATCH /:id - replace each of name/country/rank only when the payload
// carries a truthy value; falsy values (0, "", null, false) are dropped
// and the record keeps its old field.
pub async fn patch_player(
    State(store): State<PlayerStore>,
    Path(id): Path<String>,
    Json(payload): Json<PatchPlayer>,
) -> Result<Json<Player>, ApiError> {
    let mut players = db::load_players(&store).await?;

    let player = players
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or(ApiError::NotFound)?;

    if let Some(name) = payload.name.filter(|n| !n.is_empty()) {
        player.name = Some(name);
    }
    if let Some(country) = payload.country.filter(|c| !c.is_empty()) {
        player.country = Some(country);
    }
    if let Some(rank) = payload.rank.filter(is_truthy) {
        player.rank = Some(rank);
    }

    let updated = player.clone();
    db::save_players(&store, &players).await?;

    Ok(Json(updated))
}

// DELETE /:id - remove every record with the given id and persist the rest
pub async fn delete_player(
    State(store): State<PlayerStore>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut players = db::load_players(&store).await?;

    if !players.iter().any(|p| p.id == id) {
        return Err(ApiError::NotFound);
    }

    players.retain(|p| p.id != id);
    db::save_players(&store, &players).await?;

    // 203 with an empty body, matching the service's historical contract
    Ok(StatusCode::NON_AUTHORITATIVE_INFORMATION)
}
