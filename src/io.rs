use crate::model::{validate_discount, Hotel, NewCustomer, Room};
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::path::Path;

/// Import de chambres depuis CSV: header `number,type,price[,photo]`
pub fn import_rooms_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Room>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let number = rec.get(0).context("missing number")?.trim();
        let kind = rec.get(1).context("missing type")?.trim();
        let price = rec.get(2).context("missing price")?.trim();
        if kind.is_empty() {
            bail!("invalid room row {number}: empty type");
        }
        let number: u32 = number
            .parse()
            .with_context(|| format!("invalid room number {number:?}"))?;
        let price: f64 = price
            .parse()
            .with_context(|| format!("invalid price for room {number}"))?;
        let mut room = Room::new(number, kind, price)?;
        if let Some(photo) = rec.get(3).map(str::trim).filter(|p| !p.is_empty()) {
            room = room.with_photo(photo);
        }
        out.push(room);
    }
    Ok(out)
}

/// Import de clients: header `name,address,phone[,loyal][,discount][,offers]`
///
/// Les identifiants sont attribués à l'enregistrement, pas lus du fichier.
pub fn import_customers_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<NewCustomer>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        let address = rec.get(1).context("missing address")?.trim();
        let phone = rec.get(2).context("missing phone")?.trim();
        if name.is_empty() {
            bail!("invalid customer row (empty name)");
        }
        let mut customer = NewCustomer::new(name, address, phone);
        if let Some(flag) = optional(&rec, 3) {
            customer.loyal = parse_bool(flag)
                .with_context(|| format!("invalid loyal value for {name}"))?;
        }
        if let Some(discount) = optional(&rec, 4) {
            customer.discount = discount
                .parse()
                .with_context(|| format!("invalid discount for {name}"))?;
            validate_discount(customer.discount)
                .with_context(|| format!("invalid discount for {name}"))?;
        }
        if let Some(flag) = optional(&rec, 5) {
            customer.offers_subscription = parse_bool(flag)
                .with_context(|| format!("invalid offers value for {name}"))?;
        }
        out.push(customer);
    }
    Ok(out)
}

fn optional(rec: &csv::StringRecord, idx: usize) -> Option<&str> {
    rec.get(idx).map(str::trim).filter(|s| !s.is_empty())
}

fn parse_bool(s: &str) -> anyhow::Result<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "s" | "si" | "oui" => Ok(true),
        "false" | "0" | "no" | "n" | "non" => Ok(false),
        _ => bail!("expected boolean"),
    }
}

/// Export CSV des réservations:
/// header `id,customer_id,customer_name,room_number,start_date,checkout,days`
pub fn export_reservations_csv<P: AsRef<Path>>(path: P, hotel: &Hotel) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record([
        "id",
        "customer_id",
        "customer_name",
        "room_number",
        "start_date",
        "checkout",
        "days",
    ])?;
    let mut id_buf = itoa::Buffer::new();
    let mut customer_buf = itoa::Buffer::new();
    let mut room_buf = itoa::Buffer::new();
    let mut days_buf = itoa::Buffer::new();
    for r in hotel.reservations() {
        let name = hotel
            .customer(r.customer_id)
            .map(|c| c.name.as_str())
            .unwrap_or("");
        let start = r.start_date.to_string();
        let checkout = r
            .stay()
            .checkout()
            .map(|d| d.to_string())
            .unwrap_or_default();
        w.write_record([
            id_buf.format(r.id.get()),
            customer_buf.format(r.customer_id.get()),
            name,
            room_buf.format(r.room_number.get()),
            start.as_str(),
            checkout.as_str(),
            days_buf.format(r.days),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Export JSON de l'hôtel (jolie mise en forme)
pub fn export_hotel_json<P: AsRef<Path>>(path: P, hotel: &Hotel) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(hotel)?;
    std::fs::write(path, s)?;
    Ok(())
}
