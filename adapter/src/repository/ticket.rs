use async_trait::async_trait;
use derive_new::new;
use kernel::model::{id::EnrollmentId, ticket::Ticket};
use kernel::repository::ticket::TicketRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::ticket::TicketRow, ConnectionPool};

#[derive(new)]
pub struct TicketRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl TicketRepository for TicketRepositoryImpl {
    async fn find_ticket_by_enrollment_id(
        &self,
        enrollment_id: EnrollmentId,
    ) -> AppResult<Option<Ticket>> {
        let row: Option<TicketRow> = sqlx::query_as(
            r#"
                SELECT
                    t.ticket_id,
                    t.enrollment_id,
                    t.status,
                    t.created_at,
                    t.updated_at,
                    tt.ticket_type_id,
                    tt.name AS ticket_type_name,
                    tt.price,
                    tt.is_remote,
                    tt.includes_hotel
                FROM tickets AS t
                INNER JOIN ticket_types AS tt ON tt.ticket_type_id = t.ticket_type_id
                WHERE t.enrollment_id = $1
                ORDER BY t.created_at DESC, t.ticket_id DESC
                LIMIT 1
            "#,
        )
        .bind(enrollment_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Ticket::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::{id::TicketId, ticket::TicketStatus};

    #[sqlx::test(fixtures("common"))]
    async fn find_ticket_with_type(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = TicketRepositoryImpl::new(ConnectionPool::new(pool));

        let ticket = repo
            .find_ticket_by_enrollment_id(EnrollmentId::new(1))
            .await?
            .expect("enrollment 1 has a ticket");
        assert_eq!(ticket.status, TicketStatus::Paid);
        assert!(ticket.ticket_type.includes_hotel);
        assert!(!ticket.ticket_type.is_remote);

        let ticket = repo
            .find_ticket_by_enrollment_id(EnrollmentId::new(2))
            .await?
            .expect("enrollment 2 has a ticket");
        assert_eq!(ticket.status, TicketStatus::Reserved);

        // enrollment 3 has no ticket
        assert!(repo
            .find_ticket_by_enrollment_id(EnrollmentId::new(3))
            .await?
            .is_none());
        Ok(())
    }

    #[sqlx::test(fixtures("common"))]
    async fn most_recent_ticket_wins(pool: sqlx::PgPool) -> anyhow::Result<()> {
        sqlx::query(
            r#"
                INSERT INTO tickets (ticket_type_id, enrollment_id, status, created_at, updated_at)
                VALUES (2, 1, 'RESERVED', now() + interval '1 day', now() + interval '1 day')
            "#,
        )
        .execute(&pool)
        .await?;

        let repo = TicketRepositoryImpl::new(ConnectionPool::new(pool));
        let ticket = repo
            .find_ticket_by_enrollment_id(EnrollmentId::new(1))
            .await?
            .expect("enrollment 1 has tickets");
        assert_ne!(ticket.id, TicketId::new(1));
        assert_eq!(ticket.status, TicketStatus::Reserved);
        assert!(ticket.ticket_type.is_remote);
        Ok(())
    }
}
