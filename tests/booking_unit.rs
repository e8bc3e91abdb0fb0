use chrono::{NaiveDate, Utc};
use rust_decimal_macros::dec;
use serde_json::json;
use uuid::Uuid;

use ringside_server::booking::snapshot::{build_snapshot, items_json, line_item, UNRESOLVED_NAME};
use ringside_server::booking::writer::parse_request;
use ringside_server::models::{Event, EventTicket};
use ringside_server::utils::error::AppError;

fn fight_night() -> Event {
    Event {
        id: Uuid::new_v4(),
        title: "Fight Night".to_string(),
        event_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        start_time: None,
        end_time: None,
        venue_id: Some(Uuid::new_v4()),
        region_id: Some(Uuid::new_v4()),
        status: "SCHEDULED".to_string(),
        is_deleted: false,
        template_id: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn ringside_ticket() -> EventTicket {
    EventTicket {
        id: Uuid::new_v4(),
        event_id: Uuid::new_v4(),
        seat_type: "Ringside".to_string(),
        price: dec!(1000),
        discounted_price: Some(dec!(800)),
        cost: None,
        capacity: 50,
        sold_count: 0,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[test]
fn snapshot_captures_event_venue_region_and_discounted_prices() {
    // Event "Fight Night" at "Lumpinee" in "Bangkok", two Ringside tickets
    // priced 1000 with an 800 discount.
    let snapshot = build_snapshot(
        &fight_night(),
        Some("Lumpinee".to_string()),
        Some("Bangkok".to_string()),
        &[(ringside_ticket(), 2)],
    );

    assert_eq!(snapshot.event_title, "Fight Night");
    assert_eq!(snapshot.venue_name, "Lumpinee");
    assert_eq!(snapshot.region_name, "Bangkok");

    let items = items_json(&snapshot.items).expect("items present");
    assert_eq!(
        items,
        json!([{
            "seatType": "Ringside",
            "quantity": 2,
            "pricePaid": "800",
            "costAtBooking": null
        }])
    );
}

#[test]
fn snapshot_survives_source_row_edits() {
    let mut event = fight_night();
    let mut ticket = ringside_ticket();
    let snapshot = build_snapshot(
        &event,
        Some("Lumpinee".to_string()),
        Some("Bangkok".to_string()),
        &[(ticket.clone(), 1)],
    );

    // Later admin edits to the live rows must not leak into the snapshot.
    event.title = "Fight Night (Rescheduled)".to_string();
    ticket.discounted_price = Some(dec!(950));

    assert_eq!(snapshot.event_title, "Fight Night");
    assert_eq!(snapshot.items[0].price_paid, dec!(800));
}

#[test]
fn unresolvable_venue_and_region_fall_back_to_sentinel() {
    let snapshot = build_snapshot(&fight_night(), None, None, &[]);
    assert_eq!(snapshot.venue_name, UNRESOLVED_NAME);
    assert_eq!(snapshot.region_name, UNRESOLVED_NAME);
}

#[test]
fn all_selections_unresolved_yields_null_items() {
    // The booking is still created in this case; the column holds NULL.
    let snapshot = build_snapshot(&fight_night(), None, None, &[]);
    assert_eq!(items_json(&snapshot.items), None);
}

#[test]
fn cost_basis_is_explicit_null_when_absent() {
    let with_cost = EventTicket {
        cost: Some(dec!(300)),
        ..ringside_ticket()
    };
    assert_eq!(line_item(&with_cost, 1).cost_at_booking, Some(dec!(300)));
    assert_eq!(line_item(&ringside_ticket(), 1).cost_at_booking, None);
}

#[test]
fn booking_request_missing_fields_are_enumerated() {
    let err = parse_request(&json!({
        "contactInfo": { "fullName": "Jane Doe" }
    }))
    .unwrap_err();

    match err {
        AppError::ValidationError { details, .. } => {
            let missing: Vec<String> =
                serde_json::from_value(details.unwrap()["missing"].clone()).unwrap();
            assert_eq!(
                missing,
                vec!["eventId", "contactInfo.email", "tickets", "totalCost"]
            );
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn booking_request_with_string_total_cost_parses() {
    // Decimal accepts both JSON numbers and strings; gateways and clients
    // have sent both.
    let request = parse_request(&json!({
        "eventId": Uuid::new_v4(),
        "contactInfo": { "fullName": "Jane Doe", "email": "jane@example.com" },
        "tickets": [{ "id": Uuid::new_v4(), "quantity": 1 }],
        "totalCost": "1600.00"
    }))
    .expect("parse request");

    assert_eq!(request.total_cost, dec!(1600.00));
}
