use crate::engine::HotelError;
use crate::model::{Customer, Hotel, NewCustomer, Room};

/// Hôtel d'exemple utilisé quand aucun fichier de données n'existe.
pub fn demo_hotel(name: &str, stars: u8) -> Result<Hotel, HotelError> {
    let mut hotel = Hotel::new(name, stars);

    let rooms = [
        Room::new(101, "single", 50.0)?
            .with_photo("img101.jpg")
            .with_attribute("exterior", true),
        Room::new(102, "single", 45.0)?
            .with_photo("img102.jpg")
            .with_attribute("exterior", false),
        Room::new(201, "double", 80.0)?
            .with_photo("img201.jpg")
            .with_attribute("double_bed", true),
        Room::new(202, "double", 75.0)?
            .with_photo("img202.jpg")
            .with_attribute("double_bed", false),
        Room::new(301, "suite", 150.0)?
            .with_photo("img301.jpg")
            .with_attribute("bathtub", true)
            .with_attribute("sauna", false)
            .with_attribute("viewpoint", true),
    ];
    for room in rooms {
        hotel.add_room(room)?;
    }

    hotel.add_customer(Customer::new(
        1,
        NewCustomer::new("Ana Perez", "Calle 1", "123456").loyal(10.0),
    ))?;
    hotel.add_customer(Customer::new(
        2,
        NewCustomer::new("Luis Gomez", "Calle 2", "234567").subscribed(),
    ))?;
    Ok(hotel)
}
