use super::HotelError;
use chrono::{Datelike, Days, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Séjour : intervalle de jours semi-ouvert `[start, start + days)`.
///
/// Le jour de départ n'est pas occupé : un séjour qui se termine le 4 et un
/// séjour qui commence le 4 ne se chevauchent pas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stay {
    start: NaiveDate,
    days: u32,
}

impl Stay {
    pub fn new(start: NaiveDate, days: u32) -> Result<Self, HotelError> {
        if days == 0 {
            return Err(HotelError::InvalidDuration(days));
        }
        // la date de départ doit rester représentable
        start
            .checked_add_days(Days::new(u64::from(days)))
            .ok_or(HotelError::InvalidDuration(days))?;
        Ok(Self { start, days })
    }

    /// Parse `YYYY-MM-DD` puis valide la durée.
    pub fn parse(raw: &str, days: u32) -> Result<Self, HotelError> {
        Self::new(parse_date(raw)?, days)
    }

    pub(crate) fn from_parts(start: NaiveDate, days: u32) -> Self {
        Self { start, days }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }
    pub fn days(&self) -> u32 {
        self.days
    }

    /// Date de départ (premier jour libre).
    pub fn checkout(&self) -> Option<NaiveDate> {
        self.start.checked_add_days(Days::new(u64::from(self.days)))
    }

    pub fn overlaps(&self, other: &Stay) -> bool {
        overlaps(self.start, self.days, other.start, other.days)
    }
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, HotelError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| HotelError::InvalidDate(raw.to_string()))
}

/// Teste l'intersection de `[a_start, a_start + a_days)` et
/// `[b_start, b_start + b_days)`.
///
/// Calcul sur les ordinaux de jours : aucune date intermédiaire n'est
/// construite, donc pas de dépassement possible.
pub fn overlaps(a_start: NaiveDate, a_days: u32, b_start: NaiveDate, b_days: u32) -> bool {
    let (a0, a1) = day_bounds(a_start, a_days);
    let (b0, b1) = day_bounds(b_start, b_days);
    a0 < b1 && b0 < a1
}

fn day_bounds(start: NaiveDate, days: u32) -> (i64, i64) {
    let first = i64::from(start.num_days_from_ce());
    (first, first + i64::from(days))
}
