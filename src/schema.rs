use std::collections::HashMap;

use crate::model::{Column, OfferRecord};

pub(crate) const ITINERARY_LABEL: &str = "Itinerary";

/// A header label seen in some document revisions, mapped onto the output schema.
#[derive(Debug, Clone, Copy)]
struct HeaderVariant {
    label: &'static str,
    rename_to: Column,
    inject: &'static [Column],
}

// The merged column holds stateroom text only; the bonus column is added empty.
const HEADER_VARIANTS: &[HeaderVariant] = &[HeaderVariant {
    label: "Next Cruise Bonus Stateroom Type",
    rename_to: Column::StateroomType,
    inject: &[Column::NextCruiseBonus],
}];

/// Collapses whitespace runs (wrapped header cells) and snaps known labels to their
/// canonical spelling regardless of case. Unknown labels keep their text.
pub(crate) fn canonical_label(label: &str) -> String {
    let collapsed = label.split_whitespace().collect::<Vec<_>>().join(" ");
    let known = Column::ALL
        .iter()
        .map(|column| column.label())
        .chain([ITINERARY_LABEL])
        .chain(HEADER_VARIANTS.iter().map(|variant| variant.label));

    for candidate in known {
        if candidate.eq_ignore_ascii_case(&collapsed) {
            return candidate.to_string();
        }
    }
    collapsed
}

/// Where a block's Nights and Destination values come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ItineraryLayout {
    /// A single `Itinerary` column to be split.
    Combined,
    /// Separate `Nights` / `Destination` columns, or neither.
    Separate,
    /// Both shapes present; the separate columns are used.
    Ambiguous,
}

pub(crate) fn itinerary_layout(labels: &[String]) -> ItineraryLayout {
    let has = |wanted: &str| labels.iter().any(|label| label == wanted);
    let combined = has(ITINERARY_LABEL);
    let separate = has(Column::Nights.label()) || has(Column::Destination.label());

    match (combined, separate) {
        (true, false) => ItineraryLayout::Combined,
        (true, true) => ItineraryLayout::Ambiguous,
        (false, _) => ItineraryLayout::Separate,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NormalizedRow {
    pub record: OfferRecord,
    pub itinerary: Option<String>,
}

pub(crate) fn normalize_row(
    mapping: &HashMap<&str, &str>,
    layout: ItineraryLayout,
) -> NormalizedRow {
    let mut fields = mapping.clone();
    for variant in HEADER_VARIANTS {
        if let Some(value) = fields.remove(variant.label) {
            fields.insert(variant.rename_to.label(), value);
            for column in variant.inject {
                fields.entry(column.label()).or_insert("");
            }
        }
    }

    let mut record = OfferRecord::default();
    for column in Column::ALL {
        if let Some(value) = fields.get(column.label()) {
            *record.get_mut(column) = (*value).to_string();
        }
    }

    let itinerary = (layout == ItineraryLayout::Combined).then(|| {
        fields
            .get(ITINERARY_LABEL)
            .map_or_else(String::new, |value| (*value).to_string())
    });

    NormalizedRow { record, itinerary }
}
