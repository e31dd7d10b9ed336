//! Client entities (database row mappings).

use sqlx::FromRow;

use domain::models::{Client, ClientWithPhone};

/// Database row mapping for the clients table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ClientEntity {
    pub client_id: i32,
    pub name: String,
    pub surname: String,
    pub email: String,
}

impl From<ClientEntity> for Client {
    fn from(entity: ClientEntity) -> Self {
        Self {
            client_id: entity.client_id,
            name: entity.name,
            surname: entity.surname,
            email: entity.email,
        }
    }
}

/// Row shape of the clients-with-phones left outer join used by search.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ClientWithPhoneEntity {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub number: Option<i64>,
}

impl From<ClientWithPhoneEntity> for ClientWithPhone {
    fn from(entity: ClientWithPhoneEntity) -> Self {
        Self {
            name: entity.name,
            surname: entity.surname,
            email: entity.email,
            number: entity.number,
        }
    }
}
