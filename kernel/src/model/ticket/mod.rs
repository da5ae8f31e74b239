use chrono::{DateTime, Utc};
use strum::{AsRefStr, EnumString};

use crate::model::id::{EnrollmentId, TicketId, TicketTypeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Reserved,
    Paid,
}

#[derive(Debug, Clone)]
pub struct TicketType {
    pub id: TicketTypeId,
    pub name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

impl TicketType {
    /// In-person tickets that include accommodation.
    pub fn grants_hotel(&self) -> bool {
        self.includes_hotel && !self.is_remote
    }
}

#[derive(Debug, Clone)]
pub struct Ticket {
    pub id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub status: TicketStatus,
    pub ticket_type: TicketType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    pub fn is_paid(&self) -> bool {
        self.status == TicketStatus::Paid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn ticket_status_parses_stored_text() {
        assert_eq!(TicketStatus::from_str("PAID").unwrap(), TicketStatus::Paid);
        assert_eq!(
            TicketStatus::from_str("RESERVED").unwrap(),
            TicketStatus::Reserved
        );
        assert!(TicketStatus::from_str("paid").is_err());
        assert_eq!(TicketStatus::Paid.as_ref(), "PAID");
    }

    #[test]
    fn only_in_person_hotel_tickets_grant_hotel() {
        let mut ticket_type = TicketType {
            id: TicketTypeId::new(1),
            name: "Presencial + Hotel".into(),
            price: 600,
            is_remote: false,
            includes_hotel: true,
        };
        assert!(ticket_type.grants_hotel());

        ticket_type.is_remote = true;
        assert!(!ticket_type.grants_hotel());

        ticket_type.is_remote = false;
        ticket_type.includes_hotel = false;
        assert!(!ticket_type.grants_hotel());
    }
}
