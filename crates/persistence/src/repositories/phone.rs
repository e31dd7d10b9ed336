//! Phone repository for database operations.

use sqlx::PgPool;

use domain::models::Phone;

use crate::entities::PhoneEntity;
use crate::error::StoreError;
use crate::metrics::QueryTimer;

/// Repository for phone-related database operations.
#[derive(Clone)]
pub struct PhoneRepository {
    pool: PgPool,
}

impl PhoneRepository {
    /// Creates a new PhoneRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Attach a phone number to a client.
    ///
    /// Fails with [`StoreError::UniqueViolation`] when the number is already
    /// taken, [`StoreError::ForeignKeyViolation`] when the client does not
    /// exist, and [`StoreError::CheckViolation`] when the number exceeds
    /// eleven digits.
    pub async fn create(&self, client_id: i32, number: i64) -> Result<Phone, StoreError> {
        let timer = QueryTimer::new("add_phone");
        let result = sqlx::query_as::<_, PhoneEntity>(
            r#"
            INSERT INTO phones (client_id, number)
            VALUES ($1, $2)
            RETURNING client_id, number
            "#,
        )
        .bind(client_id)
        .bind(number)
        .fetch_one(&self.pool)
        .await;
        timer.record();

        let entity = result?;
        tracing::debug!(client_id, number, "phone attached");
        Ok(entity.into())
    }

    /// Replace the phone number stored for a client.
    ///
    /// Returns `None` when the client has no phone row.
    pub async fn update_number(
        &self,
        client_id: i32,
        number: i64,
    ) -> Result<Option<Phone>, StoreError> {
        let timer = QueryTimer::new("update_phone");
        let result = sqlx::query_as::<_, PhoneEntity>(
            r#"
            UPDATE phones
            SET number = $1
            WHERE client_id = $2
            RETURNING client_id, number
            "#,
        )
        .bind(number)
        .bind(client_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();

        let updated = result?;
        if updated.is_some() {
            tracing::debug!(client_id, number, "phone number changed");
        }
        Ok(updated.map(Phone::from))
    }

    /// Remove the phone row for a client and return it, `None` if none existed.
    pub async fn delete(&self, client_id: i32) -> Result<Option<Phone>, StoreError> {
        let timer = QueryTimer::new("delete_phone");
        let result = sqlx::query_as::<_, PhoneEntity>(
            r#"
            DELETE FROM phones
            WHERE client_id = $1
            RETURNING client_id, number
            "#,
        )
        .bind(client_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();

        let removed = result?;
        if removed.is_some() {
            tracing::debug!(client_id, "phone detached");
        }
        Ok(removed.map(Phone::from))
    }
}
