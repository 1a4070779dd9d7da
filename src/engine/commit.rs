use super::{HotelError, Stay};
use crate::model::{
    Customer, CustomerId, Hotel, NewCustomer, Reservation, ReservationId, RoomNumber,
};
use tracing::{info, warn};

pub(super) fn reserve_room(
    hotel: &mut Hotel,
    customer_id: CustomerId,
    room_number: RoomNumber,
    start_date: &str,
    days: u32,
) -> Result<ReservationId, HotelError> {
    if hotel.room(room_number).is_none() {
        warn!(room = %room_number, "booking rejected: unknown room");
        return Err(HotelError::RoomNotFound(room_number));
    }
    let stay = Stay::parse(start_date, days)?;
    commit(hotel, customer_id, room_number, stay)
}

/// Vérifie puis ajoute ; `&mut Hotel` fait de ces deux étapes une seule
/// section critique.
fn commit(
    hotel: &mut Hotel,
    customer_id: CustomerId,
    room_number: RoomNumber,
    stay: Stay,
) -> Result<ReservationId, HotelError> {
    if let Some(existing) = hotel
        .reservations_for_room(room_number)
        .find(|r| r.stay().overlaps(&stay))
    {
        warn!(
            room = %room_number,
            conflicting = %existing.id,
            start = %stay.start(),
            days = stay.days(),
            "booking rejected: room occupied"
        );
        return Err(HotelError::RoomOccupied {
            room: room_number,
            conflicting: existing.id,
        });
    }

    let reservation = Reservation::new(hotel.next_reservation_id, customer_id, room_number, stay)?;
    let id = reservation.id;
    hotel.add_reservation(reservation)?;
    info!(
        reservation = %id,
        customer = %customer_id,
        room = %room_number,
        start = %stay.start(),
        days = stay.days(),
        "reservation committed"
    );
    Ok(id)
}

pub(super) fn register_customer(
    hotel: &mut Hotel,
    details: NewCustomer,
) -> Result<CustomerId, HotelError> {
    let customer = Customer::new(hotel.next_customer_id, details);
    let id = customer.id;
    hotel.add_customer(customer)?;
    info!(customer = %id, "customer registered");
    Ok(id)
}

#[cfg(test)]
mod tests {
    use crate::engine::{HotelError, Stay};
    use crate::model::{CustomerId, Hotel, NewCustomer, Reservation, Room, RoomNumber};

    fn hotel() -> Hotel {
        let mut h = Hotel::new("Test", 3);
        h.add_room(Room::new(101, "single", 50.0).unwrap()).unwrap();
        h.add_room(Room::new(102, "single", 45.0).unwrap()).unwrap();
        h
    }

    const ALICE: CustomerId = CustomerId::new(1);
    const R101: RoomNumber = RoomNumber::new(101);

    #[test]
    fn same_day_turnover_is_accepted() {
        let mut h = hotel();
        let first = h.reserve_room(ALICE, R101, "2024-06-01", 3).unwrap();
        assert_eq!(first.get(), 1);

        let err = h.reserve_room(ALICE, R101, "2024-06-02", 2).unwrap_err();
        assert!(matches!(
            err,
            HotelError::RoomOccupied { conflicting, .. } if conflicting == first
        ));

        let third = h.reserve_room(ALICE, R101, "2024-06-04", 2).unwrap();
        assert_eq!(third.get(), 2);
        assert_eq!(h.reservations().len(), 2);
    }

    #[test]
    fn failures_leave_no_trace() {
        let mut h = hotel();
        h.reserve_room(ALICE, R101, "2024-06-01", 3).unwrap();
        let before = h.reservations().to_vec();
        let next = h.next_reservation_id();

        assert!(matches!(
            h.reserve_room(ALICE, RoomNumber::new(999), "2024-06-01", 1),
            Err(HotelError::RoomNotFound(_))
        ));
        assert!(matches!(
            h.reserve_room(ALICE, R101, "2024-06-xx", 1),
            Err(HotelError::InvalidDate(_))
        ));
        assert!(matches!(
            h.reserve_room(ALICE, R101, "2024-07-01", 0),
            Err(HotelError::InvalidDuration(0))
        ));
        assert!(h.reserve_room(ALICE, R101, "2024-05-31", 2).is_err());

        assert_eq!(h.reservations(), before.as_slice());
        assert_eq!(h.next_reservation_id(), next);
    }

    #[test]
    fn unknown_room_wins_over_bad_date() {
        let mut h = hotel();
        assert!(matches!(
            h.reserve_room(ALICE, RoomNumber::new(7), "not-a-date", 0),
            Err(HotelError::RoomNotFound(_))
        ));
    }

    #[test]
    fn customer_zero_is_rejected() {
        let mut h = hotel();
        let next = h.next_reservation_id();
        assert!(matches!(
            h.reserve_room(CustomerId::new(0), R101, "2024-06-01", 1),
            Err(HotelError::InvalidId)
        ));
        assert!(h.reservations().is_empty());
        assert_eq!(h.next_reservation_id(), next);
    }

    #[test]
    fn other_rooms_do_not_conflict() {
        let mut h = hotel();
        h.reserve_room(ALICE, R101, "2024-06-01", 3).unwrap();
        assert!(h
            .reserve_room(ALICE, RoomNumber::new(102), "2024-06-01", 3)
            .is_ok());
    }

    #[test]
    fn ids_continue_after_loaded_gaps() {
        let mut h = hotel();
        for (id, start) in [(3, "2024-01-01"), (7, "2024-02-01"), (2, "2024-03-01")] {
            let stay = Stay::parse(start, 1).unwrap();
            h.add_reservation(Reservation::new(id, ALICE, R101, stay).unwrap())
                .unwrap();
        }
        let id = h.reserve_room(ALICE, R101, "2024-06-01", 1).unwrap();
        assert_eq!(id.get(), 8);
    }

    #[test]
    fn serialized_bookings_never_overlap() {
        let mut h = hotel();
        let attempts = [
            ("2024-06-01", 3),
            ("2024-06-02", 1),
            ("2024-06-03", 4),
            ("2024-06-04", 2),
            ("2024-05-30", 3),
            ("2024-05-29", 3),
            ("2024-06-06", 1),
            ("2024-06-05", 2),
        ];
        for (start, days) in attempts {
            let _ = h.reserve_room(ALICE, R101, start, days);
        }
        let stays: Vec<_> = h.reservations_for_room(R101).map(|r| r.stay()).collect();
        assert!(stays.len() >= 2);
        for (i, a) in stays.iter().enumerate() {
            for b in stays.iter().skip(i + 1) {
                assert!(!a.overlaps(b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn registration_allocates_after_existing_ids() {
        let mut h = hotel();
        let first = h
            .register_customer(NewCustomer::new("Ana", "Calle 1", "123"))
            .unwrap();
        assert_eq!(first.get(), 1);
        h.add_customer(crate::model::Customer::new(
            10,
            NewCustomer::new("Luis", "Calle 2", "234"),
        ))
        .unwrap();
        let next = h
            .register_customer(NewCustomer::new("Eva", "Calle 3", "345").loyal(5.0))
            .unwrap();
        assert_eq!(next.get(), 11);
        assert!(h.customer(next).unwrap().loyal);
    }
}
