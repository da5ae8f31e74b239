use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    enrollment::{Address, Enrollment},
    id::UserId,
};
use kernel::repository::enrollment::EnrollmentRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::enrollment::{AddressRow, EnrollmentRow},
    ConnectionPool,
};

#[derive(new)]
pub struct EnrollmentRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl EnrollmentRepository for EnrollmentRepositoryImpl {
    async fn find_with_address_by_user_id(
        &self,
        user_id: UserId,
    ) -> AppResult<Option<Enrollment>> {
        let row: Option<EnrollmentRow> = sqlx::query_as(
            r#"
                SELECT
                    enrollment_id,
                    user_id,
                    name,
                    cpf,
                    birthday,
                    phone,
                    created_at,
                    updated_at
                FROM enrollments
                WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let address: Option<AddressRow> = sqlx::query_as(
            r#"
                SELECT
                    cep,
                    street,
                    city,
                    state,
                    number,
                    neighborhood,
                    address_detail
                FROM addresses
                WHERE enrollment_id = $1
                ORDER BY address_id ASC
                LIMIT 1
            "#,
        )
        .bind(row.enrollment_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(Some(row.into_enrollment(address.map(Address::from))))
    }
}
