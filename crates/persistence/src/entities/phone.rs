//! Phone entity (database row mapping).

use sqlx::FromRow;

use domain::models::Phone;

/// Database row mapping for the phones table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct PhoneEntity {
    pub client_id: i32,
    pub number: i64,
}

impl From<PhoneEntity> for Phone {
    fn from(entity: PhoneEntity) -> Self {
        Self {
            client_id: entity.client_id,
            number: entity.number,
        }
    }
}
