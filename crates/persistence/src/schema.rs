//! Schema management.
//!
//! The registry owns exactly two tables; there is no migration history to
//! replay, only a destructive reset.

use sqlx::PgPool;

use crate::error::StoreError;

// phones is dropped first: its foreign key references clients.
const RESET_SQL: &str = r#"
DROP TABLE IF EXISTS phones;
DROP TABLE IF EXISTS clients;

CREATE TABLE clients (
    client_id SERIAL PRIMARY KEY,
    name VARCHAR(60) NOT NULL,
    surname VARCHAR(60) NOT NULL,
    email VARCHAR(60) NOT NULL UNIQUE
);

CREATE TABLE phones (
    number BIGINT NOT NULL UNIQUE CHECK (number <= 99999999999),
    client_id INTEGER NOT NULL REFERENCES clients(client_id)
);
"#;

/// Drops and recreates both tables.
///
/// All existing client and phone data is irrecoverably lost.
pub async fn reset(pool: &PgPool) -> Result<(), StoreError> {
    tracing::debug!("resetting client registry schema");
    sqlx::raw_sql(RESET_SQL).execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phones_dropped_before_clients() {
        let drop_phones = RESET_SQL.find("DROP TABLE IF EXISTS phones").unwrap();
        let drop_clients = RESET_SQL.find("DROP TABLE IF EXISTS clients").unwrap();
        assert!(drop_phones < drop_clients);
    }

    #[test]
    fn test_schema_keeps_original_constraints() {
        assert!(RESET_SQL.contains("email VARCHAR(60) NOT NULL UNIQUE"));
        assert!(RESET_SQL.contains("CHECK (number <= 99999999999)"));
        assert!(RESET_SQL.contains("REFERENCES clients(client_id)"));
    }
}
