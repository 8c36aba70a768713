//! Schema bootstrap for the catalog table.

use sqlx::PgPool;

/// Ensure the catalog table and indexes exist (idempotent).
///
/// Structured fields live in JSONB columns; the GIN index backs the
/// containment match on `attack` used by the matchup query.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS pokemon (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            health INTEGER NOT NULL,
            rarity TEXT,
            artifact_ref TEXT,
            attack JSONB NOT NULL,
            weakness JSONB NOT NULL,
            resistance JSONB,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS pokemon_name_idx ON pokemon (name)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS pokemon_attack_gin ON pokemon USING GIN (attack)")
        .execute(pool)
        .await?;

    Ok(())
}
