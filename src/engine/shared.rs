//! Accès concurrent à un `Hotel` unique.
//!
//! Les écritures (réservation, enregistrement client, changement de prix)
//! prennent le verrou en écriture pendant tout le contrôle + ajout ; deux
//! réservations qui se chevauchent ne peuvent donc pas passer toutes les
//! deux. Les lectures renvoient des copies : l'appelant voit l'état d'avant
//! ou d'après une réservation, jamais un état intermédiaire.

use super::{HotelError, Stay};
use crate::model::{CustomerId, Hotel, NewCustomer, Reservation, ReservationId, Room, RoomNumber};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Clone)]
pub struct SharedHotel {
    inner: Arc<RwLock<Hotel>>,
}

impl SharedHotel {
    pub fn new(hotel: Hotel) -> Self {
        Self {
            inner: Arc::new(RwLock::new(hotel)),
        }
    }

    // Chaque mutation valide avant d'écrire : un verrou empoisonné ne
    // protège pas d'état à moitié modifié, on le récupère.
    fn read(&self) -> RwLockReadGuard<'_, Hotel> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Hotel> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn reserve_room(
        &self,
        customer_id: CustomerId,
        room_number: RoomNumber,
        start_date: &str,
        days: u32,
    ) -> Result<ReservationId, HotelError> {
        self.write()
            .reserve_room(customer_id, room_number, start_date, days)
    }

    pub fn register_customer(&self, details: NewCustomer) -> Result<CustomerId, HotelError> {
        self.write().register_customer(details)
    }

    pub fn change_price_by_type(&self, kind: &str, new_price: f64) -> Result<usize, HotelError> {
        self.write().change_price_by_type(kind, new_price)
    }

    pub fn available_rooms(&self, kind: &str, window: Option<Stay>) -> Vec<Room> {
        self.read()
            .available_rooms(kind, window)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn prices_by_type(&self, kind: &str) -> Vec<f64> {
        self.read().prices_by_type(kind)
    }

    pub fn loyalty_discounts(&self) -> Vec<f64> {
        self.read().loyalty_discounts()
    }

    pub fn reservations_for_room(&self, number: RoomNumber) -> Vec<Reservation> {
        self.read().reservations_for_room(number).cloned().collect()
    }

    /// Copie complète de l'état courant (pour sauvegarde).
    pub fn snapshot(&self) -> Hotel {
        self.read().clone()
    }
}
