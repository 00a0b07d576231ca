use crate::model::OfferRecord;
use crate::schema::NormalizedRow;

const NIGHT_MARKER: &str = "Night";
const SHIP_SYMBOLS: [char; 3] = ['\u{00AE}', '\u{2122}', '\u{00A9}'];

/// Splits `"7 Night Caribbean"` into `("7", "Caribbean")` at the first `Night`.
pub(crate) fn split_itinerary(itinerary: &str) -> (String, String) {
    match itinerary.split_once(NIGHT_MARKER) {
        Some((nights, destination)) => (nights.trim().to_string(), destination.trim().to_string()),
        None => (String::new(), itinerary.to_string()),
    }
}

pub(crate) fn clean_ship_name(ship: &str) -> String {
    ship.replace(SHIP_SYMBOLS, "").trim().to_string()
}

pub(crate) fn transform_row(row: NormalizedRow) -> OfferRecord {
    let NormalizedRow {
        mut record,
        itinerary,
    } = row;

    if let Some(itinerary) = itinerary {
        let (nights, destination) = split_itinerary(&itinerary);
        record.nights = nights;
        record.destination = destination;
    }
    record.ship = clean_ship_name(&record.ship);

    record
}
