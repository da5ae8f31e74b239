use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use shared::error::{AppError, AppResult};

use crate::{
    model::{
        hotel::{Hotel, HotelWithRooms},
        id::{EnrollmentId, HotelId, TicketId, UserId},
        ticket::Ticket,
    },
    repository::{
        enrollment::EnrollmentRepository, hotel::HotelRepository, ticket::TicketRepository,
    },
};

/// Why a user was refused access to hotel listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDenial {
    NoEnrollment,
    TicketIneligible,
    TicketNotPaid,
}

impl From<AccessDenial> for AppError {
    fn from(value: AccessDenial) -> Self {
        match value {
            AccessDenial::NoEnrollment => AppError::UnauthorizedError,
            AccessDenial::TicketIneligible => AppError::ForbiddenOperation,
            AccessDenial::TicketNotPaid => AppError::PaymentRequired("ticket not paid".into()),
        }
    }
}

/// Context of a user who passed every hotel access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotelAccess {
    pub enrollment_id: EnrollmentId,
    pub ticket_id: TicketId,
}

/// Ticket half of the guard chain: the ticket must exist, be in-person with
/// accommodation, and be paid, in that order.
pub fn check_ticket(ticket: Option<&Ticket>) -> Result<&Ticket, AccessDenial> {
    let ticket = match ticket {
        Some(t) if t.ticket_type.grants_hotel() => t,
        _ => return Err(AccessDenial::TicketIneligible),
    };
    if !ticket.is_paid() {
        return Err(AccessDenial::TicketNotPaid);
    }
    Ok(ticket)
}

#[mockall::automock]
#[async_trait]
pub trait HotelService: Send + Sync {
    async fn list_available_hotels(&self, user_id: UserId) -> AppResult<Vec<Hotel>>;
    async fn list_hotel_rooms(
        &self,
        hotel_id: HotelId,
        user_id: UserId,
    ) -> AppResult<HotelWithRooms>;
}

#[derive(new)]
pub struct HotelServiceImpl {
    hotel_repository: Arc<dyn HotelRepository>,
    enrollment_repository: Arc<dyn EnrollmentRepository>,
    ticket_repository: Arc<dyn TicketRepository>,
}

impl HotelServiceImpl {
    pub async fn resolve_authorization(&self, user_id: UserId) -> AppResult<HotelAccess> {
        let Some(enrollment) = self
            .enrollment_repository
            .find_with_address_by_user_id(user_id)
            .await?
        else {
            tracing::debug!(%user_id, "no enrollment for user");
            return Err(AccessDenial::NoEnrollment.into());
        };

        let ticket = self
            .ticket_repository
            .find_ticket_by_enrollment_id(enrollment.id)
            .await?;
        let ticket = check_ticket(ticket.as_ref()).inspect_err(|denial| {
            tracing::debug!(%user_id, ?denial, "hotel access denied");
        })?;

        Ok(HotelAccess {
            enrollment_id: enrollment.id,
            ticket_id: ticket.id,
        })
    }
}

#[async_trait]
impl HotelService for HotelServiceImpl {
    async fn list_available_hotels(&self, user_id: UserId) -> AppResult<Vec<Hotel>> {
        self.resolve_authorization(user_id).await?;
        self.hotel_repository.find_hotels().await
    }

    async fn list_hotel_rooms(
        &self,
        hotel_id: HotelId,
        user_id: UserId,
    ) -> AppResult<HotelWithRooms> {
        self.resolve_authorization(user_id).await?;
        self.hotel_repository
            .find_hotel_rooms(hotel_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound(format!("hotel {hotel_id} not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{
            enrollment::Enrollment,
            hotel::Room,
            id::{RoomId, TicketTypeId},
            ticket::{TicketStatus, TicketType},
        },
        repository::{
            enrollment::MockEnrollmentRepository, hotel::MockHotelRepository,
            ticket::MockTicketRepository,
        },
    };
    use chrono::{NaiveDate, Utc};
    use mockall::predicate::eq;

    const USER: i32 = 7;
    const ENROLLMENT: i32 = 3;

    fn enrollment() -> Enrollment {
        Enrollment {
            id: EnrollmentId::new(ENROLLMENT),
            user_id: UserId::new(USER),
            name: "Ana Souza".into(),
            cpf: "12345678909".into(),
            birthday: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
            phone: "(21) 98999-9999".into(),
            address: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn ticket(status: TicketStatus, is_remote: bool, includes_hotel: bool) -> Ticket {
        Ticket {
            id: TicketId::new(11),
            enrollment_id: EnrollmentId::new(ENROLLMENT),
            status,
            ticket_type: TicketType {
                id: TicketTypeId::new(2),
                name: "Presencial".into(),
                price: 250,
                is_remote,
                includes_hotel,
            },
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn hotel(id: i32) -> Hotel {
        Hotel {
            id: HotelId::new(id),
            name: "Driven Resort".into(),
            image: "https://example.com/resort.png".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service(
        enrollment: Option<Enrollment>,
        ticket: Option<Ticket>,
        hotels: MockHotelRepository,
    ) -> HotelServiceImpl {
        let mut enrollments = MockEnrollmentRepository::new();
        enrollments
            .expect_find_with_address_by_user_id()
            .with(eq(UserId::new(USER)))
            .returning(move |_| Ok(enrollment.clone()));

        let mut tickets = MockTicketRepository::new();
        tickets
            .expect_find_ticket_by_enrollment_id()
            .with(eq(EnrollmentId::new(ENROLLMENT)))
            .returning(move |_| Ok(ticket.clone()));

        HotelServiceImpl::new(Arc::new(hotels), Arc::new(enrollments), Arc::new(tickets))
    }

    fn untouched_hotels() -> MockHotelRepository {
        let mut hotels = MockHotelRepository::new();
        hotels.expect_find_hotels().never();
        hotels.expect_find_hotel_rooms().never();
        hotels
    }

    #[test]
    fn check_ticket_walks_the_guard_chain_in_order() {
        assert_eq!(check_ticket(None).unwrap_err(), AccessDenial::TicketIneligible);

        let remote = ticket(TicketStatus::Reserved, true, true);
        assert_eq!(
            check_ticket(Some(&remote)).unwrap_err(),
            AccessDenial::TicketIneligible
        );

        let no_hotel = ticket(TicketStatus::Paid, false, false);
        assert_eq!(
            check_ticket(Some(&no_hotel)).unwrap_err(),
            AccessDenial::TicketIneligible
        );

        let reserved = ticket(TicketStatus::Reserved, false, true);
        assert_eq!(
            check_ticket(Some(&reserved)).unwrap_err(),
            AccessDenial::TicketNotPaid
        );

        let paid = ticket(TicketStatus::Paid, false, true);
        assert_eq!(check_ticket(Some(&paid)).unwrap().id, paid.id);
    }

    #[tokio::test]
    async fn no_enrollment_is_unauthorized() {
        let mut enrollments = MockEnrollmentRepository::new();
        enrollments
            .expect_find_with_address_by_user_id()
            .returning(|_| Ok(None));
        let mut tickets = MockTicketRepository::new();
        tickets.expect_find_ticket_by_enrollment_id().never();

        let service = HotelServiceImpl::new(
            Arc::new(untouched_hotels()),
            Arc::new(enrollments),
            Arc::new(tickets),
        );

        let res = service.list_available_hotels(UserId::new(USER)).await;
        assert!(matches!(res, Err(AppError::UnauthorizedError)));
        let res = service
            .list_hotel_rooms(HotelId::new(1), UserId::new(USER))
            .await;
        assert!(matches!(res, Err(AppError::UnauthorizedError)));
    }

    #[tokio::test]
    async fn missing_or_ineligible_ticket_is_forbidden() {
        let cases = [
            None,
            Some(ticket(TicketStatus::Paid, true, true)),
            Some(ticket(TicketStatus::Paid, false, false)),
        ];
        for t in cases {
            let service = service(Some(enrollment()), t, untouched_hotels());
            let res = service.list_available_hotels(UserId::new(USER)).await;
            assert!(matches!(res, Err(AppError::ForbiddenOperation)));
            let res = service
                .list_hotel_rooms(HotelId::new(1), UserId::new(USER))
                .await;
            assert!(matches!(res, Err(AppError::ForbiddenOperation)));
        }
    }

    #[tokio::test]
    async fn reserved_ticket_requires_payment() {
        let service = service(
            Some(enrollment()),
            Some(ticket(TicketStatus::Reserved, false, true)),
            untouched_hotels(),
        );

        let res = service.list_available_hotels(UserId::new(USER)).await;
        assert!(matches!(res, Err(AppError::PaymentRequired(_))));
        let res = service
            .list_hotel_rooms(HotelId::new(1), UserId::new(USER))
            .await;
        assert!(matches!(res, Err(AppError::PaymentRequired(_))));
    }

    #[tokio::test]
    async fn paid_ticket_lists_all_hotels() -> anyhow::Result<()> {
        let mut hotels = MockHotelRepository::new();
        hotels
            .expect_find_hotels()
            .times(1)
            .returning(|| Ok(vec![hotel(1), hotel(2)]));

        let service = service(
            Some(enrollment()),
            Some(ticket(TicketStatus::Paid, false, true)),
            hotels,
        );

        let access = service.resolve_authorization(UserId::new(USER)).await?;
        assert_eq!(access.enrollment_id, EnrollmentId::new(ENROLLMENT));
        assert_eq!(access.ticket_id, TicketId::new(11));

        let res = service.list_available_hotels(UserId::new(USER)).await?;
        assert_eq!(res.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn paid_ticket_with_no_hotels_is_empty_list() -> anyhow::Result<()> {
        let mut hotels = MockHotelRepository::new();
        hotels.expect_find_hotels().returning(|| Ok(vec![]));

        let service = service(
            Some(enrollment()),
            Some(ticket(TicketStatus::Paid, false, true)),
            hotels,
        );

        assert!(service
            .list_available_hotels(UserId::new(USER))
            .await?
            .is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_hotel_is_not_found() {
        let mut hotels = MockHotelRepository::new();
        hotels
            .expect_find_hotel_rooms()
            .with(eq(HotelId::new(0)))
            .returning(|_| Ok(None));

        let service = service(
            Some(enrollment()),
            Some(ticket(TicketStatus::Paid, false, true)),
            hotels,
        );

        let res = service
            .list_hotel_rooms(HotelId::new(0), UserId::new(USER))
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn hotel_rooms_are_returned_even_when_empty() -> anyhow::Result<()> {
        let mut hotels = MockHotelRepository::new();
        hotels
            .expect_find_hotel_rooms()
            .with(eq(HotelId::new(1)))
            .returning(|id| {
                Ok(Some(HotelWithRooms {
                    hotel: hotel(id.raw()),
                    rooms: vec![Room {
                        id: RoomId::new(5),
                        name: "101".into(),
                        capacity: 3,
                        hotel_id: id,
                        created_at: Utc::now(),
                        updated_at: Utc::now(),
                    }],
                }))
            });
        hotels
            .expect_find_hotel_rooms()
            .with(eq(HotelId::new(2)))
            .returning(|id| {
                Ok(Some(HotelWithRooms {
                    hotel: hotel(id.raw()),
                    rooms: vec![],
                }))
            });

        let service = service(
            Some(enrollment()),
            Some(ticket(TicketStatus::Paid, false, true)),
            hotels,
        );

        let with_rooms = service
            .list_hotel_rooms(HotelId::new(1), UserId::new(USER))
            .await?;
        assert_eq!(with_rooms.rooms.len(), 1);
        assert_eq!(with_rooms.rooms[0].hotel_id, HotelId::new(1));

        let without_rooms = service
            .list_hotel_rooms(HotelId::new(2), UserId::new(USER))
            .await?;
        assert_eq!(without_rooms.hotel.id, HotelId::new(2));
        assert!(without_rooms.rooms.is_empty());
        Ok(())
    }
}
