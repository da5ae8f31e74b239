use kernel::model::id::UserId;

#[derive(sqlx::FromRow)]
pub struct SessionRow {
    pub user_id: UserId,
}
