//! PostgreSQL implementation of EnrollmentReader.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::PgPool;

use crate::domain::enrollment::{Address, Enrollment};
use crate::domain::foundation::{AddressId, DomainError, EnrollmentId, Timestamp, UserId};
use crate::ports::EnrollmentReader;

/// PostgreSQL implementation of the EnrollmentReader port.
pub struct PostgresEnrollmentReader {
    pool: PgPool,
}

impl PostgresEnrollmentReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Enrollment joined with its (optional) address.
#[derive(Debug, sqlx::FromRow)]
struct EnrollmentRow {
    id: i32,
    user_id: i32,
    name: String,
    cpf: String,
    birthday: NaiveDateTime,
    phone: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
    address_id: Option<i32>,
    cep: Option<String>,
    street: Option<String>,
    city: Option<String>,
    state: Option<String>,
    number: Option<String>,
    neighborhood: Option<String>,
    address_detail: Option<String>,
}

impl From<EnrollmentRow> for Enrollment {
    fn from(row: EnrollmentRow) -> Self {
        let enrollment_id = EnrollmentId::from_db(row.id);
        let address = row.address_id.map(|address_id| Address {
            id: AddressId::from_db(address_id),
            enrollment_id,
            cep: row.cep.unwrap_or_default(),
            street: row.street.unwrap_or_default(),
            city: row.city.unwrap_or_default(),
            state: row.state.unwrap_or_default(),
            number: row.number.unwrap_or_default(),
            neighborhood: row.neighborhood.unwrap_or_default(),
            address_detail: row.address_detail,
        });

        Enrollment {
            id: enrollment_id,
            user_id: UserId::from_db(row.user_id),
            name: row.name,
            cpf: row.cpf,
            birthday: row.birthday.date(),
            phone: row.phone,
            address,
            created_at: Timestamp::from_naive_utc(row.created_at),
            updated_at: Timestamp::from_naive_utc(row.updated_at),
        }
    }
}

#[async_trait]
impl EnrollmentReader for PostgresEnrollmentReader {
    async fn find_with_address_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Enrollment>, DomainError> {
        let row: Option<EnrollmentRow> = sqlx::query_as(
            r#"
            SELECT e.id, e."userId" AS user_id, e.name, e.cpf, e.birthday, e.phone,
                   e."createdAt" AS created_at, e."updatedAt" AS updated_at,
                   a.id AS address_id, a.cep, a.street, a.city, a.state, a.number,
                   a.neighborhood, a."addressDetail" AS address_detail
            FROM "Enrollment" e
            LEFT JOIN "Address" a ON a."enrollmentId" = e.id
            WHERE e."userId" = $1
            "#,
        )
        .bind(user_id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to get enrollment", e))?;

        Ok(row.map(Enrollment::from))
    }
}
