use crate::model::{CustomerId, ReservationId, RoomNumber};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HotelError {
    #[error("room {0} does not exist")]
    RoomNotFound(RoomNumber),
    #[error("room {room} is already booked on those dates (reservation {conflicting})")]
    RoomOccupied {
        room: RoomNumber,
        conflicting: ReservationId,
    },
    #[error("invalid date {0:?}: expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid duration: {0} day(s), at least 1 required")]
    InvalidDuration(u32),
    #[error("invalid price: {0}")]
    InvalidPrice(f64),
    #[error("invalid discount: {0} (expected a percentage between 0 and 100)")]
    InvalidDiscount(f64),
    #[error("room {room}: attribute {name:?} must be a scalar value")]
    InvalidAttribute { room: RoomNumber, name: String },
    #[error("invalid identifier: ids start at 1")]
    InvalidId,
    #[error("duplicate room number: {0}")]
    DuplicateRoom(RoomNumber),
    #[error("duplicate customer id: {0}")]
    DuplicateCustomer(CustomerId),
    #[error("duplicate reservation id: {0}")]
    DuplicateReservation(ReservationId),
    #[error("unknown customer: {0}")]
    CustomerNotFound(CustomerId),
    #[error("unknown reservation: {0}")]
    ReservationNotFound(ReservationId),
    #[error("malformed hotel record: {0}")]
    Parse(String),
}

/// Résultat présentable d'une tentative de réservation.
///
/// Le booléen et le message restent séparés : l'appelant choisit quoi
/// afficher et quel code de sortie renvoyer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingOutcome {
    pub confirmed: bool,
    pub message: String,
    pub reservation: Option<ReservationId>,
}

impl From<Result<ReservationId, HotelError>> for BookingOutcome {
    fn from(result: Result<ReservationId, HotelError>) -> Self {
        match result {
            Ok(id) => Self {
                confirmed: true,
                message: format!("reservation created (id {id})"),
                reservation: Some(id),
            },
            Err(err) => Self {
                confirmed: false,
                message: err.to_string(),
                reservation: None,
            },
        }
    }
}

/// Devis d'un séjour pour un client donné.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub nightly: f64,
    pub nights: u32,
    pub subtotal: f64,
    /// Pourcentage appliqué (0 pour un client non habitué).
    pub discount_pct: f64,
    pub total: f64,
}
