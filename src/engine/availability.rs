use super::{HotelError, Stay};
use crate::model::{Hotel, Room, RoomNumber};
use std::collections::HashSet;
use tracing::debug;

pub(super) fn available_rooms<'a>(
    hotel: &'a Hotel,
    kind: &str,
    window: Option<Stay>,
) -> Vec<&'a Room> {
    let occupied = match window {
        Some(stay) => occupied_rooms(hotel, &stay),
        None => HashSet::new(),
    };

    let free: Vec<&Room> = hotel
        .rooms
        .iter()
        .filter(|room| room.is_kind(kind) && !occupied.contains(&room.number))
        .collect();

    debug!(
        kind,
        occupied = occupied.len(),
        free = free.len(),
        "availability query"
    );
    free
}

pub(super) fn available_rooms_by_type<'a>(
    hotel: &'a Hotel,
    kind: &str,
    from: Option<&str>,
    days: u32,
) -> Result<Vec<&'a Room>, HotelError> {
    let window = from.map(|raw| Stay::parse(raw, days)).transpose()?;
    Ok(available_rooms(hotel, kind, window))
}

/// Numéros des chambres ayant au moins une réservation qui chevauche `stay`.
fn occupied_rooms(hotel: &Hotel, stay: &Stay) -> HashSet<RoomNumber> {
    hotel
        .reservations
        .iter()
        .filter(|r| r.stay().overlaps(stay))
        .map(|r| r.room_number)
        .collect()
}
