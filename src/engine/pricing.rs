use super::{HotelError, Quote};
use crate::model::{validate_price, CustomerId, Hotel, RoomNumber};
use tracing::info;

pub(super) fn prices_by_type(hotel: &Hotel, kind: &str) -> Vec<f64> {
    hotel
        .rooms
        .iter()
        .filter(|room| room.is_kind(kind))
        .map(|room| room.price)
        .collect()
}

pub(super) fn average_price_by_type(hotel: &Hotel, kind: &str) -> Option<f64> {
    let prices = prices_by_type(hotel, kind);
    if prices.is_empty() {
        return None;
    }
    Some(prices.iter().sum::<f64>() / prices.len() as f64)
}

/// Remises distinctes des clients habitués, triées par ordre croissant.
pub(super) fn loyalty_discounts(hotel: &Hotel) -> Vec<f64> {
    let mut out: Vec<f64> = hotel
        .customers
        .iter()
        .filter(|c| c.loyal)
        .map(|c| c.discount)
        .collect();
    out.sort_by(f64::total_cmp);
    out.dedup();
    out
}

pub(super) fn change_price_by_type(
    hotel: &mut Hotel,
    kind: &str,
    new_price: f64,
) -> Result<usize, HotelError> {
    validate_price(new_price)?;
    let mut count = 0usize;
    for room in hotel.rooms.iter_mut().filter(|room| room.is_kind(kind)) {
        room.price = new_price;
        count += 1;
    }
    info!(kind, new_price, count, "price changed");
    Ok(count)
}

pub(super) fn quote(
    hotel: &Hotel,
    customer_id: CustomerId,
    room_number: RoomNumber,
    nights: u32,
) -> Result<Quote, HotelError> {
    if nights == 0 {
        return Err(HotelError::InvalidDuration(nights));
    }
    let room = hotel
        .room(room_number)
        .ok_or(HotelError::RoomNotFound(room_number))?;
    let customer = hotel
        .customer(customer_id)
        .ok_or(HotelError::CustomerNotFound(customer_id))?;

    let subtotal = room.price * f64::from(nights);
    let discount_pct = customer.effective_discount().clamp(0.0, 100.0);
    let total = subtotal * (1.0 - discount_pct / 100.0);
    Ok(Quote {
        nightly: room.price,
        nights,
        subtotal,
        discount_pct,
        total,
    })
}
