//! Client repository for database operations.

use sqlx::PgPool;

use domain::models::{Client, ClientWithPhone};

use crate::entities::{ClientEntity, ClientWithPhoneEntity};
use crate::error::StoreError;
use crate::metrics::QueryTimer;

/// Field-update set for a partial client update.
///
/// `None` means "leave the column unchanged". All three columns are NOT NULL,
/// so there is no ambiguity between an absent field and an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
}

impl ClientPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.surname.is_none() && self.email.is_none()
    }
}

/// Outcome of a partial client update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The patch carried no fields; no statement was issued.
    Noop,
    /// Fields were supplied but no client row matched.
    NotFound,
    /// The row as stored after the update.
    Updated(Client),
}

/// Search predicates for the clients-with-phones join.
///
/// Supplied predicates are AND-combined; absent ones are omitted from the
/// generated WHERE clause entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientSearchFilter {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub number: Option<i64>,
}

/// Repository for client-related database operations.
#[derive(Clone)]
pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    /// Creates a new ClientRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Insert a new client and return the stored row with its generated id.
    pub async fn create(
        &self,
        name: &str,
        surname: &str,
        email: &str,
    ) -> Result<Client, StoreError> {
        let timer = QueryTimer::new("add_client");
        let result = sqlx::query_as::<_, ClientEntity>(
            r#"
            INSERT INTO clients (name, surname, email)
            VALUES ($1, $2, $3)
            RETURNING client_id, name, surname, email
            "#,
        )
        .bind(name)
        .bind(surname)
        .bind(email)
        .fetch_one(&self.pool)
        .await;
        timer.record();

        let entity = result?;
        tracing::debug!(client_id = entity.client_id, "client created");
        Ok(entity.into())
    }

    /// Apply a partial update covering only the fields the patch supplies.
    ///
    /// An empty patch issues no statement and yields [`UpdateOutcome::Noop`].
    pub async fn update(
        &self,
        client_id: i32,
        patch: &ClientPatch,
    ) -> Result<UpdateOutcome, StoreError> {
        let sql = match build_update_sql(patch) {
            Some(sql) => sql,
            None => return Ok(UpdateOutcome::Noop),
        };

        let timer = QueryTimer::new("update_client");
        let mut query = sqlx::query_as::<_, ClientEntity>(&sql);
        if let Some(name) = &patch.name {
            query = query.bind(name);
        }
        if let Some(surname) = &patch.surname {
            query = query.bind(surname);
        }
        if let Some(email) = &patch.email {
            query = query.bind(email);
        }
        let result = query.bind(client_id).fetch_optional(&self.pool).await;
        timer.record();

        match result? {
            Some(entity) => {
                tracing::debug!(client_id, "client updated");
                Ok(UpdateOutcome::Updated(entity.into()))
            }
            None => Ok(UpdateOutcome::NotFound),
        }
    }

    /// Delete a client and return the removed row, `None` if none existed.
    ///
    /// The phones foreign key carries no cascade clause: while a phone row
    /// still references the client this fails with
    /// [`StoreError::ForeignKeyViolation`].
    pub async fn delete(&self, client_id: i32) -> Result<Option<Client>, StoreError> {
        let timer = QueryTimer::new("delete_client");
        let result = sqlx::query_as::<_, ClientEntity>(
            r#"
            DELETE FROM clients
            WHERE client_id = $1
            RETURNING client_id, name, surname, email
            "#,
        )
        .bind(client_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();

        let removed = result?;
        if removed.is_some() {
            tracing::debug!(client_id, "client deleted");
        }
        Ok(removed.map(Client::from))
    }

    /// Search the clients-with-phones join by the supplied predicates.
    pub async fn search(
        &self,
        filter: &ClientSearchFilter,
    ) -> Result<Vec<ClientWithPhone>, StoreError> {
        let sql = build_search_sql(filter);

        let timer = QueryTimer::new("find_client");
        let mut query = sqlx::query_as::<_, ClientWithPhoneEntity>(&sql);
        if let Some(name) = &filter.name {
            query = query.bind(name);
        }
        if let Some(surname) = &filter.surname {
            query = query.bind(surname);
        }
        if let Some(email) = &filter.email {
            query = query.bind(email);
        }
        if let Some(number) = filter.number {
            query = query.bind(number);
        }
        let result = query.fetch_all(&self.pool).await;
        timer.record();

        let rows = result?;
        Ok(rows.into_iter().map(ClientWithPhone::from).collect())
    }
}

/// Build the UPDATE statement for the supplied patch fields.
///
/// Clauses are emitted in the fixed order name, surname, email so the
/// generated SQL is reproducible. Returns `None` for an empty patch.
fn build_update_sql(patch: &ClientPatch) -> Option<String> {
    let mut assignments = Vec::new();
    let mut param_idx = 1;

    if patch.name.is_some() {
        assignments.push(format!("name = ${}", param_idx));
        param_idx += 1;
    }
    if patch.surname.is_some() {
        assignments.push(format!("surname = ${}", param_idx));
        param_idx += 1;
    }
    if patch.email.is_some() {
        assignments.push(format!("email = ${}", param_idx));
        param_idx += 1;
    }

    if assignments.is_empty() {
        return None;
    }

    Some(format!(
        "UPDATE clients SET {} WHERE client_id = ${} \
         RETURNING client_id, name, surname, email",
        assignments.join(", "),
        param_idx
    ))
}

/// Build the SELECT statement for the supplied search predicates.
fn build_search_sql(filter: &ClientSearchFilter) -> String {
    let mut query = String::from(
        "SELECT c.name, c.surname, c.email, p.number \
         FROM clients c \
         LEFT JOIN phones p ON p.client_id = c.client_id",
    );

    let mut param_idx = 1;
    let mut conditions = Vec::new();

    if filter.name.is_some() {
        conditions.push(format!("c.name = ${}", param_idx));
        param_idx += 1;
    }
    if filter.surname.is_some() {
        conditions.push(format!("c.surname = ${}", param_idx));
        param_idx += 1;
    }
    if filter.email.is_some() {
        conditions.push(format!("c.email = ${}", param_idx));
        param_idx += 1;
    }
    if filter.number.is_some() {
        conditions.push(format!("p.number = ${}", param_idx));
    }

    if !conditions.is_empty() {
        query.push_str(" WHERE ");
        query.push_str(&conditions.join(" AND "));
    }

    query.push_str(" ORDER BY c.client_id");
    query
}
