use sqlx::PgPool;
use tracing::info;

use crate::database::manager::DatabaseError;

const TABLES: &[(&str, &str)] = &[
    (
        "users",
        r#"CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL DEFAULT '',
            email TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL DEFAULT '',
            whatsapp TEXT NOT NULL DEFAULT '',
            gender TEXT NOT NULL DEFAULT '',
            role TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )"#,
    ),
    (
        "categories",
        r#"CREATE TABLE IF NOT EXISTS categories (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )"#,
    ),
    (
        "products",
        r#"CREATE TABLE IF NOT EXISTS products (
            id BIGSERIAL PRIMARY KEY,
            user_id BIGINT NOT NULL DEFAULT 0,
            category_id BIGINT NOT NULL DEFAULT 0,
            name TEXT NOT NULL DEFAULT '',
            image TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT '',
            price BIGINT NOT NULL DEFAULT 0,
            stock BIGINT NOT NULL DEFAULT 0,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )"#,
    ),
    (
        "banks",
        r#"CREATE TABLE IF NOT EXISTS banks (
            id BIGSERIAL PRIMARY KEY,
            user_id BIGINT NOT NULL DEFAULT 0,
            "type" TEXT NOT NULL DEFAULT '',
            name TEXT NOT NULL DEFAULT '',
            number TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )"#,
    ),
    (
        "deliveries",
        r#"CREATE TABLE IF NOT EXISTS deliveries (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL DEFAULT '',
            whatsapp TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )"#,
    ),
    (
        "payments",
        r#"CREATE TABLE IF NOT EXISTS payments (
            id BIGSERIAL PRIMARY KEY,
            user_id BIGINT NOT NULL DEFAULT 0,
            delivery_id BIGINT NOT NULL DEFAULT 0,
            total_price BIGINT NOT NULL DEFAULT 0,
            image TEXT NOT NULL DEFAULT '',
            address TEXT NOT NULL DEFAULT '',
            whatsapp TEXT NOT NULL DEFAULT '',
            payment_status TEXT NOT NULL DEFAULT '',
            delivery_name TEXT NOT NULL DEFAULT '',
            resi TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )"#,
    ),
    (
        "carts",
        r#"CREATE TABLE IF NOT EXISTS carts (
            id BIGSERIAL PRIMARY KEY,
            user_id BIGINT NOT NULL DEFAULT 0,
            product_id BIGINT NOT NULL DEFAULT 0,
            payment_id BIGINT NOT NULL DEFAULT 0,
            quantity BIGINT NOT NULL DEFAULT 0,
            total_price BIGINT NOT NULL DEFAULT 0,
            is_active TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )"#,
    ),
    (
        "settings",
        r#"CREATE TABLE IF NOT EXISTS settings (
            id BIGSERIAL PRIMARY KEY,
            image TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT '',
            contact TEXT NOT NULL DEFAULT '',
            email TEXT NOT NULL DEFAULT '',
            instagram TEXT NOT NULL DEFAULT '',
            website TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )"#,
    ),
];

/// The storefront reads setting 1, so make sure one row exists.
const SEED_SETTINGS: &str =
    "INSERT INTO settings (id) SELECT 1 WHERE NOT EXISTS (SELECT 1 FROM settings)";

/// Create any missing tables. Safe to run on every start.
pub async fn migrate(pool: &PgPool) -> Result<(), DatabaseError> {
    for (name, ddl) in TABLES {
        sqlx::query(ddl)
            .execute(pool)
            .await
            .map_err(|e| DatabaseError::MigrationError(format!("{}: {}", name, e)))?;
    }

    sqlx::query(SEED_SETTINGS)
        .execute(pool)
        .await
        .map_err(|e| DatabaseError::MigrationError(format!("settings seed: {}", e)))?;

    info!("Schema ready ({} tables)", TABLES.len());
    Ok(())
}
