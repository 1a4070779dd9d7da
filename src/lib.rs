#![forbid(unsafe_code)]
//! Hotel desk — moteur de réservation hôtelière local (sans BD).
//!
//! - Chambres, clients, réservations ; identifiants monotones.
//! - Disponibilité par type sur intervalles de jours semi-ouverts.
//! - Réservation sans chevauchement, prix et remises fidélité.
//! - Stockage fichiers (JSON/CSV) en dehors du moteur.

pub mod confirmation;
pub mod demo;
pub mod engine;
#[cfg(feature = "csv")]
pub mod io;
pub mod model;
pub mod storage;

pub use confirmation::{prepare_confirmation, Confirmation, ConfirmationRenderer, TextConfirmation};
pub use demo::demo_hotel;
pub use engine::{overlaps, BookingOutcome, HotelError, Quote, SharedHotel, Stay};
pub use model::{
    Attributes, Customer, CustomerId, Hotel, HotelInfo, HotelRecord, NewCustomer, Reservation,
    ReservationId, Room, RoomNumber,
};
pub use storage::{JsonStorage, Storage};
