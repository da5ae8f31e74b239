use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{id::EnrollmentId, ticket::Ticket};

#[mockall::automock]
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Most recent ticket of the enrollment, with its ticket type.
    async fn find_ticket_by_enrollment_id(
        &self,
        enrollment_id: EnrollmentId,
    ) -> AppResult<Option<Ticket>>;
}
