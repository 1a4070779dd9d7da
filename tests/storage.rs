#![forbid(unsafe_code)]
use hotel_desk::{demo_hotel, CustomerId, HotelError, JsonStorage, RoomNumber, Storage};
use std::fs;
use tempfile::tempdir;

#[test]
fn missing_file_means_no_prior_state() {
    let dir = tempdir().unwrap();
    let storage = JsonStorage::open(dir.path().join("absent.json")).unwrap();
    assert!(storage.load().unwrap().is_none());
}

#[test]
fn save_and_load_roundtrip() {
    let dir = tempdir().unwrap();
    let storage = JsonStorage::open(dir.path().join("hotel.json")).unwrap();

    let mut hotel = demo_hotel("Hotel Example", 3).unwrap();
    hotel
        .reserve_room(CustomerId::new(2), RoomNumber::new(201), "2024-06-01", 2)
        .unwrap();
    storage.save(&hotel).unwrap();

    let mut loaded = storage.load().unwrap().unwrap();
    assert_eq!(loaded.info(), hotel.info());
    assert_eq!(loaded.rooms(), hotel.rooms());
    assert_eq!(loaded.customers(), hotel.customers());
    assert_eq!(loaded.reservations(), hotel.reservations());

    // les compteurs repartent du maximum chargé
    let id = loaded
        .reserve_room(CustomerId::new(1), RoomNumber::new(201), "2024-06-03", 1)
        .unwrap();
    assert_eq!(id.get(), 2);
}

#[test]
fn reload_continues_after_highest_reservation_id() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hotel.json");
    fs::write(
        &path,
        r#"{
          "hotel": {"name": "Gaps", "stars": 2},
          "rooms": [{"number": 101, "type": "single", "price": 50.0}],
          "customers": [],
          "reservations": [
            {"id": 3, "customer_id": 1, "room_number": 101, "start_date": "2024-01-01", "days": 1},
            {"id": 7, "customer_id": 1, "room_number": 101, "start_date": "2024-02-01", "days": 1},
            {"id": 2, "customer_id": 1, "room_number": 101, "start_date": "2024-03-01", "days": 1}
          ]
        }"#,
    )
    .unwrap();
    let mut hotel = JsonStorage::open(&path).unwrap().load().unwrap().unwrap();
    let id = hotel
        .reserve_room(CustomerId::new(1), RoomNumber::new(101), "2024-06-01", 1)
        .unwrap();
    assert_eq!(id.get(), 8);
}

#[test]
fn legacy_field_names_are_accepted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hotel_data.json");
    fs::write(
        &path,
        r#"{
          "hotel": {"nombre": "Hotel ejemplo", "estrellas": 3},
          "habitaciones": [
            {"numero": 301, "tipo": "suite", "precio": 150.0, "foto": "img301.jpg",
             "extra": {"banera": true, "sauna": false}}
          ],
          "clientes": [
            {"id_cliente": 1, "nombre": "Ana Perez", "direccion": "Calle 1",
             "telefono": "123456", "habitual": true, "descuento": 10.0}
          ],
          "reservas": [
            {"id_reserva": 4, "cliente_id": 1, "habitacion_num": 301,
             "fecha_entrada": "2024-06-01", "dias": 2}
          ]
        }"#,
    )
    .unwrap();
    let hotel = JsonStorage::open(&path).unwrap().load().unwrap().unwrap();
    assert_eq!(hotel.info().name, "Hotel ejemplo");
    assert_eq!(hotel.rooms()[0].kind, "suite");
    let keys: Vec<&str> = hotel.rooms()[0].extra.keys().map(String::as_str).collect();
    assert_eq!(keys, ["banera", "sauna"]);
    assert!(!hotel.customers()[0].offers_subscription);
    assert_eq!(hotel.next_reservation_id().get(), 5);
}

fn load_error(raw: &str) -> HotelError {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, raw).unwrap();
    let err = JsonStorage::open(&path).unwrap().load().unwrap_err();
    err.downcast::<HotelError>().unwrap()
}

#[test]
fn malformed_records_fail_fast() {
    // champ obligatoire manquant
    let err = load_error(
        r#"{"hotel": {"name": "X", "stars": 1},
            "rooms": [{"number": 1, "type": "single"}]}"#,
    );
    assert!(matches!(err, HotelError::Parse(_)));

    // mauvais type
    let err = load_error(
        r#"{"hotel": {"name": "X", "stars": 1},
            "customers": [{"id": "one", "name": "a", "address": "b", "phone": "c",
                           "loyal": false, "discount": 0.0}]}"#,
    );
    assert!(matches!(err, HotelError::Parse(_)));

    // date illisible
    let err = load_error(
        r#"{"hotel": {"name": "X", "stars": 1},
            "reservations": [{"id": 1, "customer_id": 1, "room_number": 1,
                              "start_date": "June 1st", "days": 1}]}"#,
    );
    assert!(matches!(err, HotelError::Parse(_)));
}

#[test]
fn duplicate_room_numbers_are_rejected_on_load() {
    let err = load_error(
        r#"{"hotel": {"name": "X", "stars": 1},
            "rooms": [{"number": 1, "type": "single", "price": 1.0},
                      {"number": 1, "type": "double", "price": 2.0}]}"#,
    );
    match err {
        HotelError::Parse(msg) => assert!(msg.contains("duplicate room number: 1"), "{msg}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn out_of_range_discount_is_rejected_on_load() {
    let err = load_error(
        r#"{"hotel": {"name": "X", "stars": 1},
            "customers": [{"id": 1, "name": "a", "address": "b", "phone": "c",
                           "loyal": true, "discount": -40.0}]}"#,
    );
    match err {
        HotelError::Parse(msg) => assert!(msg.contains("invalid discount"), "{msg}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn scalar_attributes_survive_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hotel.json");
    fs::write(
        &path,
        r#"{"hotel": {"name": "X", "stars": 1},
            "rooms": [{"number": 1, "type": "single", "price": 1.0,
                       "extra": {"zeta": null, "serial": 18446744073709551615,
                                 "floor": -2, "alpha": "sea"}}]}"#,
    )
    .unwrap();
    let storage = JsonStorage::open(&path).unwrap();
    let hotel = storage.load().unwrap().unwrap();
    storage.save(&hotel).unwrap();
    let reloaded = storage.load().unwrap().unwrap();

    let extra = &reloaded.rooms()[0].extra;
    let keys: Vec<&str> = extra.keys().map(String::as_str).collect();
    assert_eq!(keys, ["zeta", "serial", "floor", "alpha"]);
    assert!(extra["zeta"].is_null());
    assert_eq!(extra["serial"].as_u64(), Some(u64::MAX));
    assert_eq!(extra["floor"].as_i64(), Some(-2));
    assert_eq!(extra["alpha"], "sea");
}
