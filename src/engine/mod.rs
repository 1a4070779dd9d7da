mod availability;
mod commit;
mod pricing;
mod shared;
mod stay;
mod types;

pub use shared::SharedHotel;
pub use stay::{overlaps, parse_date, Stay, DATE_FORMAT};
pub use types::{BookingOutcome, HotelError, Quote};

use crate::model::{CustomerId, Hotel, NewCustomer, ReservationId, Room, RoomNumber};

/// Opérations du moteur de réservation, exposées sur l'agrégat `Hotel`.
impl Hotel {
    /// Chambres d'un type libres sur `[from, from + days)`.
    ///
    /// Sans date de début, renvoie toutes les chambres du type, quelles que
    /// soient les réservations. Ordre d'insertion conservé.
    pub fn available_rooms_by_type(
        &self,
        kind: &str,
        from: Option<&str>,
        days: u32,
    ) -> Result<Vec<&Room>, HotelError> {
        availability::available_rooms_by_type(self, kind, from, days)
    }

    pub fn available_rooms(&self, kind: &str, window: Option<Stay>) -> Vec<&Room> {
        availability::available_rooms(self, kind, window)
    }

    /// Réserve une chambre si aucune réservation existante ne chevauche le
    /// séjour demandé. En cas d'échec, rien n'est modifié.
    pub fn reserve_room(
        &mut self,
        customer_id: CustomerId,
        room_number: RoomNumber,
        start_date: &str,
        days: u32,
    ) -> Result<ReservationId, HotelError> {
        commit::reserve_room(self, customer_id, room_number, start_date, days)
    }

    /// Enregistre un client avec le prochain identifiant libre.
    pub fn register_customer(&mut self, details: NewCustomer) -> Result<CustomerId, HotelError> {
        commit::register_customer(self, details)
    }

    pub fn prices_by_type(&self, kind: &str) -> Vec<f64> {
        pricing::prices_by_type(self, kind)
    }

    pub fn average_price_by_type(&self, kind: &str) -> Option<f64> {
        pricing::average_price_by_type(self, kind)
    }

    pub fn loyalty_discounts(&self) -> Vec<f64> {
        pricing::loyalty_discounts(self)
    }

    /// Applique `new_price` à toutes les chambres du type ; renvoie le
    /// nombre de chambres modifiées.
    pub fn change_price_by_type(
        &mut self,
        kind: &str,
        new_price: f64,
    ) -> Result<usize, HotelError> {
        pricing::change_price_by_type(self, kind, new_price)
    }

    pub fn quote(
        &self,
        customer_id: CustomerId,
        room_number: RoomNumber,
        nights: u32,
    ) -> Result<Quote, HotelError> {
        pricing::quote(self, customer_id, room_number, nights)
    }
}
