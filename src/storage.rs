use crate::engine::HotelError;
use crate::model::Hotel;
use anyhow::Context;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

pub const DEFAULT_DATA_FILE: &str = "hotel_data.json";

pub trait Storage {
    /// Charge l'hôtel depuis un support ; `None` si aucun état antérieur.
    ///
    /// Un enregistrement malformé échoue avec [`HotelError::Parse`].
    fn load(&self) -> anyhow::Result<Option<Hotel>>;
    /// Sauvegarde de manière atomique.
    fn save(&self, hotel: &Hotel) -> anyhow::Result<()>;
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self {
            path: path.as_ref().to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<Option<Hotel>> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no data file, starting empty");
                return Ok(None);
            }
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", self.path.display()))
            }
        };
        let hotel: Hotel = serde_json::from_slice(&data).map_err(|err| {
            HotelError::Parse(format!("{}: {err}", self.path.display()))
        })?;
        debug!(
            path = %self.path.display(),
            rooms = hotel.rooms().len(),
            customers = hotel.customers().len(),
            reservations = hotel.reservations().len(),
            "hotel loaded"
        );
        Ok(Some(hotel))
    }

    fn save(&self, hotel: &Hotel) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(hotel)?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        debug!(path = %self.path.display(), "hotel saved");
        Ok(())
    }
}
