//! Pokemon API routes.
//!
//! Endpoints for catalog lifecycle, matchup queries, and battle simulation.
//! The boundary owns the "which criteria were supplied" validation and the
//! page-size cap; the use cases own everything else.

use axum::extract::multipart::Field;
use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::http::ApiError;
use crate::app::App;
use crate::use_cases::{BattleResult, CreatePokemon, Matchups, UpdatePokemon};
use pokedex_domain::{Attack, ImageUpload, Pokemon, PokemonId, Resistance, Weakness};

/// Hard cap on page size, to prevent large data retrieval.
pub const MAX_PAGE_SIZE: u32 = 20;
const DEFAULT_PAGE_SIZE: u32 = 5;

/// A record key: exactly one of `id` or `name`; supplying both is rejected
/// rather than silently preferring one. An `id` param always means the
/// numeric identifier; a numeric-looking `name` is still a name.
#[derive(Debug, Deserialize)]
pub struct KeyQuery {
    pub id: Option<i64>,
    pub name: Option<String>,
}

enum Key {
    Id(PokemonId),
    Name(String),
}

fn resolve_key(query: KeyQuery) -> Result<Key, ApiError> {
    match (query.id, query.name) {
        (Some(id), None) => Ok(Key::Id(PokemonId::new(id))),
        (None, Some(name)) => Ok(Key::Name(name)),
        (Some(_), Some(_)) => Err(ApiError::BadRequest(
            "Query parameters id and name are mutually exclusive".to_string(),
        )),
        (None, None) => Err(ApiError::BadRequest(
            "Query parameter id or name must be provided".to_string(),
        )),
    }
}

// =============================================================================
// Create
// =============================================================================

/// Create a record from a multipart form.
///
/// Text fields: `name`, `health`, optional `rarity`; JSON-encoded fields:
/// `attack`, `weakness`, optional `resistance`; optional `file` part with
/// the image artifact.
pub async fn create_pokemon(
    State(app): State<Arc<App>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Pokemon>), ApiError> {
    let mut name = None;
    let mut health = None;
    let mut rarity = None;
    let mut attack = None;
    let mut weakness = None;
    let mut resistance = None;
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        let Some(field_name) = field.name().map(ToString::to_string) else {
            continue;
        };

        match field_name.as_str() {
            "name" => name = Some(field_text(field).await?),
            "health" => {
                health = Some(field_text(field).await?.parse::<i32>().map_err(|_| {
                    ApiError::BadRequest("health must be a number".to_string())
                })?);
            }
            "rarity" => rarity = Some(field_text(field).await?),
            "attack" => attack = Some(parse_json_field::<Attack>("attack", field).await?),
            "weakness" => weakness = Some(parse_json_field::<Weakness>("weakness", field).await?),
            "resistance" => {
                resistance = Some(parse_json_field::<Resistance>("resistance", field).await?);
            }
            "file" => {
                let file_name = field.file_name().unwrap_or("artifact").to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?
                    .to_vec();
                image = Some(ImageUpload {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            _ => {}
        }
    }

    let payload = CreatePokemon {
        name: required(name, "name")?,
        health: required(health, "health")?,
        rarity,
        attack: required(attack, "attack")?,
        weakness: required(weakness, "weakness")?,
        resistance,
    };

    let pokemon = app.use_cases.catalog.create(payload, image).await?;
    Ok((StatusCode::CREATED, Json(pokemon)))
}

async fn field_text(field: Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// Structured fields arrive as JSON-encoded strings inside the form.
async fn parse_json_field<T: serde::de::DeserializeOwned>(
    name: &str,
    field: Field<'_>,
) -> Result<T, ApiError> {
    let text = field_text(field).await?;
    serde_json::from_str(&text)
        .map_err(|e| ApiError::BadRequest(format!("{name} is malformed: {e}")))
}

fn required<T>(value: Option<T>, name: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::BadRequest(format!("{name} must be provided")))
}

// =============================================================================
// Lookup
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct FindQuery {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub rarity: Option<String>,
}

/// Get one record by id or name, or the set matching a rarity. Exactly one
/// criterion must be supplied.
pub async fn get_pokemon(
    State(app): State<Arc<App>>,
    Query(query): Query<FindQuery>,
) -> Result<Response, ApiError> {
    match (query.id, query.name, query.rarity) {
        (Some(id), None, None) => {
            let pokemon = app.use_cases.catalog.get_by_id(PokemonId::new(id)).await?;
            Ok(Json(pokemon).into_response())
        }
        (None, Some(name), None) => {
            let pokemon = app.use_cases.catalog.get_by_name(&name).await?;
            Ok(Json(pokemon).into_response())
        }
        (None, None, Some(rarity)) => {
            let pokemons = app.use_cases.catalog.find_by_rarity(&rarity).await?;
            Ok(Json(pokemons).into_response())
        }
        (None, None, None) => Err(ApiError::BadRequest(
            "Query parameter id, name or rarity must be provided".to_string(),
        )),
        _ => Err(ApiError::BadRequest(
            "Query parameters id, name and rarity are mutually exclusive".to_string(),
        )),
    }
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// List a page of records in insertion order.
pub async fn list_pokemons(
    State(app): State<Arc<App>>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Vec<Pokemon>>, ApiError> {
    let mut limit = page.limit.unwrap_or(DEFAULT_PAGE_SIZE);
    if limit > MAX_PAGE_SIZE {
        tracing::debug!(requested = limit, "Capping page size to {MAX_PAGE_SIZE}");
        limit = MAX_PAGE_SIZE;
    }

    let pokemons = app
        .use_cases
        .catalog
        .list(limit, page.offset.unwrap_or(0))
        .await?;
    Ok(Json(pokemons))
}

// =============================================================================
// Update / Delete
// =============================================================================

pub async fn update_pokemon(
    State(app): State<Arc<App>>,
    Query(query): Query<KeyQuery>,
    Json(update): Json<UpdatePokemon>,
) -> Result<Json<Pokemon>, ApiError> {
    let pokemon = match resolve_key(query)? {
        Key::Id(id) => app.use_cases.catalog.update_by_id(id, update).await?,
        Key::Name(name) => app.use_cases.catalog.update_by_name(&name, update).await?,
    };
    Ok(Json(pokemon))
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

pub async fn delete_pokemon(
    State(app): State<Arc<App>>,
    Query(query): Query<KeyQuery>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let message = match resolve_key(query)? {
        Key::Id(id) => app.use_cases.catalog.delete_by_id(id).await?,
        Key::Name(name) => app.use_cases.catalog.delete_by_name(&name).await?,
    };
    Ok(Json(DeleteResponse {
        message: message.to_string(),
    }))
}

// =============================================================================
// Derived queries
// =============================================================================

pub async fn get_matchups(
    State(app): State<Arc<App>>,
    Query(query): Query<KeyQuery>,
) -> Result<Json<Matchups>, ApiError> {
    let matchups = match resolve_key(query)? {
        Key::Id(id) => app.use_cases.matchups.by_id(id).await?,
        Key::Name(name) => app.use_cases.matchups.by_name(&name).await?,
    };
    Ok(Json(matchups))
}

#[derive(Debug, Deserialize)]
pub struct BattleQuery {
    pub attacker: Option<i64>,
    pub defender: Option<i64>,
}

pub async fn simulate_battle(
    State(app): State<Arc<App>>,
    Query(query): Query<BattleQuery>,
) -> Result<Json<BattleResult>, ApiError> {
    let (Some(attacker), Some(defender)) = (query.attacker, query.defender) else {
        return Err(ApiError::BadRequest(
            "Attacker and defender must be provided".to_string(),
        ));
    };

    let result = app
        .use_cases
        .battle
        .execute(PokemonId::new(attacker), PokemonId::new(defender))
        .await?;
    Ok(Json(result))
}
