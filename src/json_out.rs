use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ExtractError;
use crate::model::OfferRecord;

pub(crate) fn write_json(path: &Path, records: &[OfferRecord]) -> Result<(), ExtractError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

pub(crate) fn write_json_to_string(records: &[OfferRecord]) -> Result<String, ExtractError> {
    Ok(serde_json::to_string_pretty(records)?)
}

#[cfg(test)]
mod tests {
    use super::write_json_to_string;
    use crate::model::OfferRecord;

    #[test]
    fn keeps_unicode_and_two_space_indent() {
        let records = vec![OfferRecord {
            ship: "Île de Mer".to_string(),
            ..OfferRecord::default()
        }];
        let json = write_json_to_string(&records).expect("records should serialize");
        assert!(json.contains("\"Ship\": \"Île de Mer\""), "{json}");
        assert!(json.starts_with("[\n  {\n    \"Offer Code\": \"\""), "{json}");
    }
}
