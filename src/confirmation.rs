use crate::engine::HotelError;
use crate::model::{Customer, Hotel, HotelInfo, Reservation, ReservationId, Room};
use chrono::NaiveDate;

/// Confirmation générée pour une réservation.
#[derive(Debug, Clone)]
pub struct Confirmation {
    pub reservation_id: ReservationId,
    pub customer_name: String,
    pub checkout: Option<NaiveDate>,
    pub content: String,
}

/// Permet de customiser le rendu du message (texte, mail, etc.).
pub trait ConfirmationRenderer {
    fn render(
        &self,
        hotel: &HotelInfo,
        customer: Option<&Customer>,
        room: &Room,
        reservation: &Reservation,
    ) -> String;
}

/// Gabarit texte simple.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextConfirmation;

impl ConfirmationRenderer for TextConfirmation {
    fn render(
        &self,
        hotel: &HotelInfo,
        customer: Option<&Customer>,
        room: &Room,
        reservation: &Reservation,
    ) -> String {
        let guest = customer
            .map(|c| c.name.as_str())
            .unwrap_or("guest");
        let checkout = reservation
            .stay()
            .checkout()
            .map(|d| d.to_string())
            .unwrap_or_else(|| "?".to_string());
        format!(
            "{hotel} ({stars}*) - reservation {id}\nGuest: {guest}\nRoom {room} ({kind}), {days} night(s): {start} -> {checkout}\n",
            hotel = hotel.name,
            stars = hotel.stars,
            id = reservation.id,
            room = room.number,
            kind = room.kind,
            days = reservation.days,
            start = reservation.start_date,
        )
    }
}

/// Prépare la confirmation d'une réservation existante.
pub fn prepare_confirmation(
    hotel: &Hotel,
    id: ReservationId,
    renderer: &dyn ConfirmationRenderer,
) -> Result<Confirmation, HotelError> {
    let reservation = hotel
        .reservation(id)
        .ok_or(HotelError::ReservationNotFound(id))?;
    let room = hotel
        .room(reservation.room_number)
        .ok_or(HotelError::RoomNotFound(reservation.room_number))?;
    let customer = hotel.customer(reservation.customer_id);

    let content = renderer.render(hotel.info(), customer, room, reservation);
    Ok(Confirmation {
        reservation_id: id,
        customer_name: customer.map(|c| c.name.clone()).unwrap_or_default(),
        checkout: reservation.stay().checkout(),
        content,
    })
}
