//! Postgres pokemon repository implementation.
//!
//! Structured fields (attack/weakness/resistance) are stored as JSONB. The
//! attack-name query uses a `@>` containment match so the filter runs in
//! the store instead of the application.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};

use crate::infrastructure::ports::{NewPokemon, PokemonPatch, PokemonRepo, RepoError};
use pokedex_domain::{Attack, Pokemon, PokemonId, Resistance, Weakness};

const COLUMNS: &str =
    "id, name, health, rarity, artifact_ref, attack, weakness, resistance, created_at, updated_at";

pub struct PostgresPokemonRepo {
    pool: PgPool,
}

impl PostgresPokemonRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_err(e: sqlx::Error) -> RepoError {
    RepoError::Database(e.to_string())
}

fn row_to_pokemon(row: &PgRow) -> Result<Pokemon, RepoError> {
    Ok(Pokemon {
        id: PokemonId::new(row.try_get::<i64, _>("id").map_err(db_err)?),
        name: row.try_get("name").map_err(db_err)?,
        health: row.try_get("health").map_err(db_err)?,
        rarity: row.try_get("rarity").map_err(db_err)?,
        artifact_ref: row.try_get("artifact_ref").map_err(db_err)?,
        attack: row.try_get::<Json<Attack>, _>("attack").map_err(db_err)?.0,
        weakness: row
            .try_get::<Json<Weakness>, _>("weakness")
            .map_err(db_err)?
            .0,
        resistance: row
            .try_get::<Option<Json<Resistance>>, _>("resistance")
            .map_err(db_err)?
            .map(|json| json.0),
        created_at: row.try_get("created_at").map_err(db_err)?,
        updated_at: row.try_get("updated_at").map_err(db_err)?,
    })
}

#[async_trait]
impl PokemonRepo for PostgresPokemonRepo {
    /// Insert a record; the store assigns id and timestamps.
    async fn insert(&self, new: NewPokemon) -> Result<Pokemon, RepoError> {
        let row = sqlx::query(&format!(
            "INSERT INTO pokemon (name, health, rarity, artifact_ref, attack, weakness, resistance)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {COLUMNS}"
        ))
        .bind(&new.name)
        .bind(new.health)
        .bind(&new.rarity)
        .bind(&new.artifact_ref)
        .bind(Json(&new.attack))
        .bind(Json(&new.weakness))
        .bind(new.resistance.as_ref().map(Json))
        .fetch_one(&self.pool)
        .await
        .map_err(db_err)?;

        row_to_pokemon(&row)
    }

    /// Merge non-null patch fields into an existing row.
    async fn merge(
        &self,
        id: PokemonId,
        patch: PokemonPatch,
    ) -> Result<Option<Pokemon>, RepoError> {
        let row = sqlx::query(&format!(
            "UPDATE pokemon SET
                name = COALESCE($2, name),
                health = COALESCE($3, health),
                rarity = COALESCE($4, rarity),
                artifact_ref = COALESCE($5, artifact_ref),
                attack = COALESCE($6, attack),
                weakness = COALESCE($7, weakness),
                resistance = COALESCE($8, resistance),
                updated_at = now()
            WHERE id = $1
            RETURNING {COLUMNS}"
        ))
        .bind(id.value())
        .bind(&patch.name)
        .bind(patch.health)
        .bind(&patch.rarity)
        .bind(&patch.artifact_ref)
        .bind(patch.attack.as_ref().map(Json))
        .bind(patch.weakness.as_ref().map(Json))
        .bind(patch.resistance.as_ref().map(Json))
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.as_ref().map(row_to_pokemon).transpose()
    }

    async fn get(&self, id: PokemonId) -> Result<Option<Pokemon>, RepoError> {
        let row = sqlx::query(&format!("SELECT {COLUMNS} FROM pokemon WHERE id = $1"))
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        row.as_ref().map(row_to_pokemon).transpose()
    }

    async fn delete(&self, id: PokemonId) -> Result<u64, RepoError> {
        let result = sqlx::query("DELETE FROM pokemon WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        tracing::debug!(id = %id, affected = result.rows_affected(), "Deleted pokemon rows");
        Ok(result.rows_affected())
    }

    /// Names are not unique; the lowest id wins for an ambiguous lookup.
    async fn find_by_name(&self, name: &str) -> Result<Option<Pokemon>, RepoError> {
        let row = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM pokemon WHERE name = $1 ORDER BY id LIMIT 1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.as_ref().map(row_to_pokemon).transpose()
    }

    async fn find_by_rarity(&self, rarity: &str) -> Result<Vec<Pokemon>, RepoError> {
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM pokemon WHERE rarity = $1 ORDER BY id"
        ))
        .bind(rarity)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.iter().map(row_to_pokemon).collect()
    }

    async fn find_page(&self, limit: u32, offset: u32) -> Result<Vec<Pokemon>, RepoError> {
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM pokemon ORDER BY id LIMIT $1 OFFSET $2"
        ))
        .bind(i64::from(limit))
        .bind(i64::from(offset))
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.iter().map(row_to_pokemon).collect()
    }

    /// Containment match on the nested attack name, served by the GIN index.
    async fn find_by_attack_name(&self, move_name: &str) -> Result<Vec<Pokemon>, RepoError> {
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM pokemon WHERE attack @> $1 ORDER BY id"
        ))
        .bind(Json(serde_json::json!({ "name": move_name })))
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.iter().map(row_to_pokemon).collect()
    }
}
