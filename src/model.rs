use serde::Serialize;

/// One raw cell as handed over by the table extractor.
pub type Cell = Option<String>;
pub type RawRow = Vec<Cell>;
/// The grid of one detected table on one page.
pub type TableBlock = Vec<RawRow>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageTables {
    pub page: u32,
    pub tables: Vec<TableBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    pub page_number: u32,
    pub text: String,
}

pub const NORMALIZED_COLUMNS: [&str; 9] = [
    "Offer Code",
    "Ship",
    "Departure Port",
    "Sail Date",
    "Nights",
    "Destination",
    "Stateroom Type",
    "Offer Type",
    "Next Cruise Bonus",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    OfferCode,
    Ship,
    DeparturePort,
    SailDate,
    Nights,
    Destination,
    StateroomType,
    OfferType,
    NextCruiseBonus,
}

impl Column {
    pub const ALL: [Self; 9] = [
        Self::OfferCode,
        Self::Ship,
        Self::DeparturePort,
        Self::SailDate,
        Self::Nights,
        Self::Destination,
        Self::StateroomType,
        Self::OfferType,
        Self::NextCruiseBonus,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        NORMALIZED_COLUMNS[self as usize]
    }
}

/// One offer row in the fixed output schema. Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct OfferRecord {
    #[serde(rename = "Offer Code")]
    pub offer_code: String,
    #[serde(rename = "Ship")]
    pub ship: String,
    #[serde(rename = "Departure Port")]
    pub departure_port: String,
    #[serde(rename = "Sail Date")]
    pub sail_date: String,
    #[serde(rename = "Nights")]
    pub nights: String,
    #[serde(rename = "Destination")]
    pub destination: String,
    #[serde(rename = "Stateroom Type")]
    pub stateroom_type: String,
    #[serde(rename = "Offer Type")]
    pub offer_type: String,
    #[serde(rename = "Next Cruise Bonus")]
    pub next_cruise_bonus: String,
}

impl OfferRecord {
    pub fn get_mut(&mut self, column: Column) -> &mut String {
        match column {
            Column::OfferCode => &mut self.offer_code,
            Column::Ship => &mut self.ship,
            Column::DeparturePort => &mut self.departure_port,
            Column::SailDate => &mut self.sail_date,
            Column::Nights => &mut self.nights,
            Column::Destination => &mut self.destination,
            Column::StateroomType => &mut self.stateroom_type,
            Column::OfferType => &mut self.offer_type,
            Column::NextCruiseBonus => &mut self.next_cruise_bonus,
        }
    }
}
