use crate::engine::{HotelError, Stay};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }
            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(
    /// Numéro de chambre (unique dans l'hôtel)
    RoomNumber
);
numeric_id!(
    /// Identifiant fort pour Customer
    CustomerId
);
numeric_id!(
    /// Identifiant fort pour Reservation
    ReservationId
);

/// Attributs libres d'une chambre ("exterior": true, "beds": 2, ...).
///
/// Ordre des clés et valeurs conservés tels quels (`preserve_order`). Toute
/// valeur scalaire est admise, `null` compris ; tableaux et objets sont
/// refusés par [`Hotel::add_room`].
pub type Attributes = Map<String, Value>;

/// Rendu d'un attribut pour l'affichage (chaînes sans guillemets).
pub fn display_attribute(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn validate_extra(number: RoomNumber, extra: &Attributes) -> Result<(), HotelError> {
    match extra
        .iter()
        .find(|(_, v)| matches!(v, Value::Array(_) | Value::Object(_)))
    {
        Some((name, _)) => Err(HotelError::InvalidAttribute {
            room: number,
            name: name.clone(),
        }),
        None => Ok(()),
    }
}

/// Chambre
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(alias = "numero")]
    pub number: RoomNumber,
    #[serde(rename = "type", alias = "tipo")]
    pub kind: String,
    #[serde(alias = "precio")]
    pub price: f64,
    #[serde(default, alias = "foto", skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extra: Attributes,
}

impl Room {
    /// Crée une chambre en validant le numéro et le prix.
    pub fn new<K: Into<String>>(number: u32, kind: K, price: f64) -> Result<Self, HotelError> {
        if number == 0 {
            return Err(HotelError::InvalidId);
        }
        validate_price(price)?;
        Ok(Self {
            number: RoomNumber(number),
            kind: kind.into(),
            price,
            photo: None,
            extra: Attributes::new(),
        })
    }

    pub fn with_photo<P: Into<String>>(mut self, photo: P) -> Self {
        self.photo = Some(photo.into());
        self
    }

    pub fn with_attribute<N: Into<String>, V: Into<Value>>(mut self, name: N, value: V) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind == kind
    }
}

pub(crate) fn validate_price(price: f64) -> Result<(), HotelError> {
    if !price.is_finite() || price < 0.0 {
        return Err(HotelError::InvalidPrice(price));
    }
    Ok(())
}

/// Une remise est un pourcentage fini entre 0 et 100.
pub fn validate_discount(discount: f64) -> Result<(), HotelError> {
    if !discount.is_finite() || !(0.0..=100.0).contains(&discount) {
        return Err(HotelError::InvalidDiscount(discount));
    }
    Ok(())
}

/// Client de l'hôtel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(alias = "id_cliente")]
    pub id: CustomerId,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "direccion")]
    pub address: String,
    #[serde(alias = "telefono")]
    pub phone: String,
    #[serde(alias = "habitual")]
    pub loyal: bool,
    /// Pourcentage de remise, pris en compte seulement si `loyal`.
    #[serde(alias = "descuento")]
    pub discount: f64,
    #[serde(default, alias = "suscrito_ofertas")]
    pub offers_subscription: bool,
}

impl Customer {
    pub fn new(id: u32, details: NewCustomer) -> Self {
        Self {
            id: CustomerId(id),
            name: details.name,
            address: details.address,
            phone: details.phone,
            loyal: details.loyal,
            discount: details.discount,
            offers_subscription: details.offers_subscription,
        }
    }

    /// Remise effective : 0 pour un client non habitué.
    pub fn effective_discount(&self) -> f64 {
        if self.loyal {
            self.discount
        } else {
            0.0
        }
    }
}

/// Données d'un client à enregistrer, avant attribution d'un identifiant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewCustomer {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub loyal: bool,
    pub discount: f64,
    pub offers_subscription: bool,
}

impl NewCustomer {
    pub fn new<N: Into<String>, A: Into<String>, P: Into<String>>(
        name: N,
        address: A,
        phone: P,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
            ..Self::default()
        }
    }

    pub fn loyal(mut self, discount: f64) -> Self {
        self.loyal = true;
        self.discount = discount;
        self
    }

    pub fn subscribed(mut self) -> Self {
        self.offers_subscription = true;
        self
    }
}

/// Réservation d'une chambre sur `[start_date, start_date + days)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(alias = "id_reserva")]
    pub id: ReservationId,
    #[serde(alias = "cliente_id")]
    pub customer_id: CustomerId,
    #[serde(alias = "habitacion_num")]
    pub room_number: RoomNumber,
    #[serde(alias = "fecha_entrada")]
    pub start_date: NaiveDate,
    #[serde(alias = "dias")]
    pub days: u32,
}

impl Reservation {
    /// Crée une réservation pour un séjour déjà validé.
    pub fn new(
        id: u32,
        customer_id: CustomerId,
        room_number: RoomNumber,
        stay: Stay,
    ) -> Result<Self, HotelError> {
        if id == 0 || customer_id.get() == 0 {
            return Err(HotelError::InvalidId);
        }
        Ok(Self {
            id: ReservationId(id),
            customer_id,
            room_number,
            start_date: stay.start(),
            days: stay.days(),
        })
    }

    pub fn stay(&self) -> Stay {
        Stay::from_parts(self.start_date, self.days)
    }
}

/// Métadonnées de l'hôtel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelInfo {
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "estrellas")]
    pub stars: u8,
}

/// Forme persistée de l'hôtel : métadonnées + trois listes plates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelRecord {
    pub hotel: HotelInfo,
    #[serde(default, alias = "habitaciones")]
    pub rooms: Vec<Room>,
    #[serde(default, alias = "clientes")]
    pub customers: Vec<Customer>,
    #[serde(default, alias = "reservas")]
    pub reservations: Vec<Reservation>,
}

/// Hôtel : racine d'agrégat, propriétaire des chambres, clients et
/// réservations.
///
/// Les collections gardent l'ordre d'insertion ; un index par identifiant
/// donne l'accès direct. Les compteurs `next_*` valent toujours « un de plus
/// que le plus grand identifiant inséré ».
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "HotelRecord", into = "HotelRecord")]
pub struct Hotel {
    pub(crate) info: HotelInfo,
    pub(crate) rooms: Vec<Room>,
    room_index: HashMap<RoomNumber, usize>,
    pub(crate) customers: Vec<Customer>,
    customer_index: HashMap<CustomerId, usize>,
    pub(crate) reservations: Vec<Reservation>,
    reservation_index: HashMap<ReservationId, usize>,
    pub(crate) next_customer_id: u32,
    pub(crate) next_reservation_id: u32,
}

impl Hotel {
    pub fn new<N: Into<String>>(name: N, stars: u8) -> Self {
        Self {
            info: HotelInfo {
                name: name.into(),
                stars,
            },
            rooms: Vec::new(),
            room_index: HashMap::new(),
            customers: Vec::new(),
            customer_index: HashMap::new(),
            reservations: Vec::new(),
            reservation_index: HashMap::new(),
            next_customer_id: 1,
            next_reservation_id: 1,
        }
    }

    pub fn info(&self) -> &HotelInfo {
        &self.info
    }
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }
    pub fn next_customer_id(&self) -> CustomerId {
        CustomerId(self.next_customer_id)
    }
    pub fn next_reservation_id(&self) -> ReservationId {
        ReservationId(self.next_reservation_id)
    }

    pub fn room(&self, number: RoomNumber) -> Option<&Room> {
        self.room_index.get(&number).map(|&pos| &self.rooms[pos])
    }
    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customer_index.get(&id).map(|&pos| &self.customers[pos])
    }
    pub fn reservation(&self, id: ReservationId) -> Option<&Reservation> {
        self.reservation_index
            .get(&id)
            .map(|&pos| &self.reservations[pos])
    }

    /// Réservations d'une chambre, dans l'ordre d'insertion.
    pub fn reservations_for_room(&self, number: RoomNumber) -> impl Iterator<Item = &Reservation> {
        self.reservations
            .iter()
            .filter(move |r| r.room_number == number)
    }

    /// Insertion brute d'une chambre (chargement, configuration initiale).
    pub fn add_room(&mut self, room: Room) -> Result<(), HotelError> {
        if room.number.get() == 0 {
            return Err(HotelError::InvalidId);
        }
        validate_price(room.price)?;
        validate_extra(room.number, &room.extra)?;
        if self.room_index.contains_key(&room.number) {
            return Err(HotelError::DuplicateRoom(room.number));
        }
        self.room_index.insert(room.number, self.rooms.len());
        self.rooms.push(room);
        Ok(())
    }

    /// Insertion brute d'un client ; avance `next_customer_id`.
    pub fn add_customer(&mut self, customer: Customer) -> Result<(), HotelError> {
        let raw = customer.id.get();
        if raw == 0 {
            return Err(HotelError::InvalidId);
        }
        validate_discount(customer.discount)?;
        if self.customer_index.contains_key(&customer.id) {
            return Err(HotelError::DuplicateCustomer(customer.id));
        }
        let next = advance(self.next_customer_id, raw)?;
        self.customer_index.insert(customer.id, self.customers.len());
        self.customers.push(customer);
        self.next_customer_id = next;
        Ok(())
    }

    /// Insertion brute d'une réservation ; avance `next_reservation_id`.
    ///
    /// Aucun contrôle de chevauchement ici : c'est le rôle de
    /// [`Hotel::reserve_room`].
    pub fn add_reservation(&mut self, reservation: Reservation) -> Result<(), HotelError> {
        let raw = reservation.id.get();
        if raw == 0 || reservation.customer_id.get() == 0 {
            return Err(HotelError::InvalidId);
        }
        Stay::new(reservation.start_date, reservation.days)?;
        if self.reservation_index.contains_key(&reservation.id) {
            return Err(HotelError::DuplicateReservation(reservation.id));
        }
        let next = advance(self.next_reservation_id, raw)?;
        self.reservation_index
            .insert(reservation.id, self.reservations.len());
        self.reservations.push(reservation);
        self.next_reservation_id = next;
        Ok(())
    }
}

fn advance(current: u32, inserted: u32) -> Result<u32, HotelError> {
    let next = inserted.checked_add(1).ok_or(HotelError::InvalidId)?;
    Ok(current.max(next))
}

impl TryFrom<HotelRecord> for Hotel {
    type Error = HotelError;

    fn try_from(record: HotelRecord) -> Result<Self, Self::Error> {
        let mut hotel = Hotel::new(record.hotel.name, record.hotel.stars);
        for room in record.rooms {
            hotel.add_room(room)?;
        }
        for customer in record.customers {
            hotel.add_customer(customer)?;
        }
        for reservation in record.reservations {
            hotel.add_reservation(reservation)?;
        }
        Ok(hotel)
    }
}

impl From<Hotel> for HotelRecord {
    fn from(hotel: Hotel) -> Self {
        Self {
            hotel: hotel.info,
            rooms: hotel.rooms,
            customers: hotel.customers,
            reservations: hotel.reservations,
        }
    }
}
