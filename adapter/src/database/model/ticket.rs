use std::str::FromStr;

use chrono::{DateTime, Utc};
use kernel::model::{
    id::{EnrollmentId, TicketId, TicketTypeId},
    ticket::{Ticket, TicketStatus, TicketType},
};
use shared::error::AppError;

#[derive(sqlx::FromRow)]
pub struct TicketRow {
    pub ticket_id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub ticket_type_id: TicketTypeId,
    pub ticket_type_name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

impl TryFrom<TicketRow> for Ticket {
    type Error = AppError;

    fn try_from(value: TicketRow) -> Result<Self, Self::Error> {
        let TicketRow {
            ticket_id,
            enrollment_id,
            status,
            created_at,
            updated_at,
            ticket_type_id,
            ticket_type_name,
            price,
            is_remote,
            includes_hotel,
        } = value;
        let status = TicketStatus::from_str(&status).map_err(|_| {
            AppError::ConversionEntityError(format!(
                "ticket {ticket_id} has unknown status {status}"
            ))
        })?;
        Ok(Ticket {
            id: ticket_id,
            enrollment_id,
            status,
            ticket_type: TicketType {
                id: ticket_type_id,
                name: ticket_type_name,
                price,
                is_remote,
                includes_hotel,
            },
            created_at,
            updated_at,
        })
    }
}
