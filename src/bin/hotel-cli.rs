#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use hotel_desk::{
    demo_hotel,
    engine::{BookingOutcome, DATE_FORMAT},
    io,
    model::{display_attribute, CustomerId, NewCustomer, Room, RoomNumber},
    prepare_confirmation,
    storage::{JsonStorage, Storage, DEFAULT_DATA_FILE},
    TextConfirmation,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

const DEMO_NAME: &str = "Hotel Example";
const DEMO_STARS: u8 = 3;

/// CLI minimaliste de réservation hôtelière (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de l'hôtel
    #[arg(long, global = true, env = "HOTEL_DATA", default_value = DEFAULT_DATA_FILE)]
    data: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Créer le fichier de données avec l'hôtel d'exemple
    Init {
        #[arg(long, default_value = DEMO_NAME)]
        name: String,
        #[arg(long, default_value_t = DEMO_STARS)]
        stars: u8,
        /// Écraser un fichier existant
        #[arg(long)]
        force: bool,
    },

    /// Lister toutes les chambres
    Rooms,

    /// Chambres disponibles d'un type
    Available {
        #[arg(long = "type")]
        kind: String,
        /// YYYY-MM-DD (défaut : aujourd'hui)
        #[arg(long)]
        from: Option<String>,
        #[arg(long, default_value_t = 1)]
        days: u32,
        /// Ignorer les réservations (liste par type)
        #[arg(long, conflicts_with = "from")]
        any_date: bool,
    },

    /// Prix des chambres d'un type
    Prices {
        #[arg(long = "type")]
        kind: String,
    },

    /// Remises des clients habitués
    Discounts,

    /// Enregistrer un client
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        phone: String,
        /// Remise fidélité en pourcentage (rend le client habitué)
        #[arg(long)]
        discount: Option<f64>,
        #[arg(long)]
        offers: bool,
    },

    /// Réserver une chambre par numéro
    Reserve {
        #[arg(long)]
        customer: u32,
        #[arg(long)]
        room: u32,
        /// YYYY-MM-DD
        #[arg(long)]
        from: String,
        #[arg(long)]
        days: u32,
    },

    /// Changer le prix de toutes les chambres d'un type
    SetPrice {
        #[arg(long = "type")]
        kind: String,
        #[arg(long)]
        price: f64,
    },

    /// Devis d'un séjour (remise fidélité incluse)
    Quote {
        #[arg(long)]
        customer: u32,
        #[arg(long)]
        room: u32,
        #[arg(long)]
        nights: u32,
    },

    /// Importer des chambres depuis un CSV
    ImportRooms {
        #[arg(long)]
        csv: String,
    },

    /// Importer des clients depuis un CSV
    ImportCustomers {
        #[arg(long)]
        csv: String,
    },

    /// Exporter l'hôtel (JSON) et/ou les réservations (CSV)
    Export {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.data)?;

    if let Commands::Init { name, stars, force } = &cli.cmd {
        if storage.path().exists() && !force {
            bail!("{} already exists (use --force)", storage.path().display());
        }
        let hotel = demo_hotel(name, *stars)?;
        storage.save(&hotel)?;
        println!("Created {} with {} rooms", storage.path().display(), hotel.rooms().len());
        return Ok(());
    }

    let mut hotel = match storage.load()? {
        Some(h) => h,
        None => demo_hotel(DEMO_NAME, DEMO_STARS)?,
    };

    let code = match cli.cmd {
        Commands::Init { .. } => 0,
        Commands::Rooms => {
            for room in hotel.rooms() {
                println!(
                    "{} | {} | {:.2} | {}",
                    room.number,
                    room.kind,
                    room.price,
                    format_extra(room)
                );
            }
            0
        }
        Commands::Available {
            kind,
            from,
            days,
            any_date,
        } => {
            let kind = normalize_kind(&kind);
            let from = if any_date {
                None
            } else {
                let today = || Local::now().date_naive().format(DATE_FORMAT).to_string();
                Some(from.unwrap_or_else(today))
            };
            let free = hotel.available_rooms_by_type(&kind, from.as_deref(), days)?;
            if free.is_empty() {
                println!("No {kind} room available for that range");
            } else {
                for room in free {
                    println!("{} | {:.2} | {}", room.number, room.price, format_extra(room));
                }
            }
            0
        }
        Commands::Prices { kind } => {
            let kind = normalize_kind(&kind);
            let prices = hotel.prices_by_type(&kind);
            match hotel.average_price_by_type(&kind) {
                Some(avg) => {
                    println!("Prices: {prices:?}");
                    println!("Average: {avg:.2}");
                }
                None => println!("No {kind} room"),
            }
            0
        }
        Commands::Discounts => {
            let discounts = hotel.loyalty_discounts();
            if discounts.is_empty() {
                println!("No loyal customer registered");
            } else {
                println!("Loyalty discounts (%): {discounts:?}");
            }
            0
        }
        Commands::Register {
            name,
            address,
            phone,
            discount,
            offers,
        } => {
            let mut details = NewCustomer::new(name, address, phone);
            if let Some(pct) = discount {
                details = details.loyal(pct);
            }
            details.offers_subscription = offers;
            let id = hotel.register_customer(details)?;
            storage.save(&hotel)?;
            println!("Customer created with id {id}");
            0
        }
        Commands::Reserve {
            customer,
            room,
            from,
            days,
        } => {
            let result =
                hotel.reserve_room(CustomerId::new(customer), RoomNumber::new(room), &from, days);
            let outcome = BookingOutcome::from(result);
            println!("{}", outcome.message);
            match outcome.reservation {
                Some(id) if outcome.confirmed => {
                    storage.save(&hotel)?;
                    let confirmation = prepare_confirmation(&hotel, id, &TextConfirmation)?;
                    print!("{}", confirmation.content);
                    0
                }
                // Code 2 = réservation refusée
                _ => 2,
            }
        }
        Commands::SetPrice { kind, price } => {
            let kind = normalize_kind(&kind);
            let count = hotel.change_price_by_type(&kind, price)?;
            storage.save(&hotel)?;
            println!("Price changed on {count} room(s)");
            0
        }
        Commands::Quote {
            customer,
            room,
            nights,
        } => {
            let q = hotel.quote(CustomerId::new(customer), RoomNumber::new(room), nights)?;
            println!(
                "{} night(s) x {:.2} = {:.2}, discount {}% -> {:.2}",
                q.nights, q.nightly, q.subtotal, q.discount_pct, q.total
            );
            0
        }
        Commands::ImportRooms { csv } => {
            let rooms = io::import_rooms_csv(csv)?;
            let count = rooms.len();
            for room in rooms {
                hotel.add_room(room)?;
            }
            storage.save(&hotel)?;
            println!("Imported {count} room(s)");
            0
        }
        Commands::ImportCustomers { csv } => {
            let customers = io::import_customers_csv(csv)?;
            let count = customers.len();
            for details in customers {
                hotel.register_customer(details)?;
            }
            storage.save(&hotel)?;
            println!("Imported {count} customer(s)");
            0
        }
        Commands::Export { out_json, out_csv } => {
            if let Some(path) = out_json {
                io::export_hotel_json(path, &hotel)?;
            }
            if let Some(path) = out_csv {
                io::export_reservations_csv(path, &hotel)?;
            }
            0
        }
    };

    std::process::exit(code);
}

fn normalize_kind(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn format_extra(room: &Room) -> String {
    room.extra
        .iter()
        .map(|(k, v)| format!("{k}={}", display_attribute(v)))
        .collect::<Vec<_>>()
        .join(", ")
}
