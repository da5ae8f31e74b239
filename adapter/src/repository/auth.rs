use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{auth::AccessToken, id::UserId},
    repository::auth::AuthRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{model::auth::SessionRow, ConnectionPool};

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn fetch_user_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<UserId>> {
        let row: Option<SessionRow> = sqlx::query_as(
            r#"
                SELECT user_id
                FROM sessions
                WHERE token = $1
            "#,
        )
        .bind(&access_token.0)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(|r| r.user_id))
    }
}
