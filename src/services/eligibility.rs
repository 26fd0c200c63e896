//! Проверка права пользователя видеть отели.
//!
//! Порядок проверок фиксирован: статус оплаты, затем удаленный формат,
//! затем наличие отеля в типе билета. Клиент получает ровно одну причину отказа.

use thiserror::Error;
use tracing::debug;

use crate::error::AppError;
use crate::models::{Ticket, TicketStatus};
use crate::repositories::TicketGateway;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EligibilityError {
    #[error("user has no tickets")]
    NoTicket,
    #[error("user needs to pay the ticket")]
    PaymentRequired,
    #[error("ticket is remote")]
    RemoteTicket,
    #[error("ticket do not include hotel")]
    HotelNotIncluded,
}

/// Классифицирует уже прочитанный билет. Чистая функция, без I/O.
pub fn evaluate(ticket: Option<&Ticket>) -> Result<(), EligibilityError> {
    let ticket = ticket.ok_or(EligibilityError::NoTicket)?;

    if ticket.status != TicketStatus::Paid {
        return Err(EligibilityError::PaymentRequired);
    }
    if ticket.ticket_type.is_remote {
        return Err(EligibilityError::RemoteTicket);
    }
    if !ticket.ticket_type.includes_hotel {
        return Err(EligibilityError::HotelNotIncluded);
    }

    Ok(())
}

pub async fn check_eligibility(
    tickets: &dyn TicketGateway,
    user_id: i32,
) -> Result<(), AppError> {
    let ticket = tickets.find_ticket_by_user(user_id).await?;

    evaluate(ticket.as_ref()).map_err(|reason| {
        debug!(user_id, %reason, "Hotel access denied");
        AppError::from(reason)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TicketType;
    use chrono::Utc;
    use proptest::prelude::*;

    fn ticket(status: TicketStatus, is_remote: bool, includes_hotel: bool) -> Ticket {
        let now = Utc::now();
        Ticket {
            id: 1,
            enrollment_id: 1,
            status,
            ticket_type: TicketType {
                id: 1,
                name: "Conference pass".into(),
                price: 250,
                is_remote,
                includes_hotel,
                created_at: now,
                updated_at: now,
            },
            created_at: now,
            updated_at: now,
        }
    }

    fn any_status() -> impl Strategy<Value = TicketStatus> {
        prop_oneof![Just(TicketStatus::Reserved), Just(TicketStatus::Paid)]
    }

    #[test]
    fn no_ticket_is_rejected() {
        assert_eq!(evaluate(None), Err(EligibilityError::NoTicket));
    }

    #[test]
    fn paid_in_person_with_hotel_is_eligible() {
        assert_eq!(evaluate(Some(&ticket(TicketStatus::Paid, false, true))), Ok(()));
    }

    proptest! {
        #[test]
        fn unpaid_always_needs_payment(is_remote in any::<bool>(), includes_hotel in any::<bool>()) {
            let t = ticket(TicketStatus::Reserved, is_remote, includes_hotel);
            prop_assert_eq!(evaluate(Some(&t)), Err(EligibilityError::PaymentRequired));
        }

        #[test]
        fn paid_remote_is_rejected_even_with_hotel(includes_hotel in any::<bool>()) {
            let t = ticket(TicketStatus::Paid, true, includes_hotel);
            prop_assert_eq!(evaluate(Some(&t)), Err(EligibilityError::RemoteTicket));
        }

        #[test]
        fn eligible_only_when_paid_in_person_with_hotel(
            status in any_status(),
            is_remote in any::<bool>(),
            includes_hotel in any::<bool>(),
        ) {
            let t = ticket(status, is_remote, includes_hotel);
            let eligible = status == TicketStatus::Paid && !is_remote && includes_hotel;
            prop_assert_eq!(evaluate(Some(&t)).is_ok(), eligible);
        }
    }

    #[test]
    fn paid_in_person_without_hotel() {
        assert_eq!(
            evaluate(Some(&ticket(TicketStatus::Paid, false, false))),
            Err(EligibilityError::HotelNotIncluded)
        );
    }
}
