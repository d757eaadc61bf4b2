use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use bucketsort::{Record, parse_records};

/// Reads a JSON array of digit strings and validates it as one batch of
/// equal-width records.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let raw: Vec<String> = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a JSON array of strings", path.display()))?;
    let records =
        parse_records(&raw).with_context(|| format!("invalid record in {}", path.display()))?;
    Ok(records)
}

/// Pretty JSON with two-space indentation.
pub fn to_json(records: &[Record]) -> Result<String> {
    serde_json::to_string_pretty(records).context("failed to encode records as JSON")
}

pub fn write_records(path: &Path, records: &[Record]) -> Result<()> {
    let json = to_json(records)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("bucketsort-{}-{}", std::process::id(), name))
    }

    #[test]
    fn write_then_read() {
        let path = temp_path("roundtrip.json");
        let records = parse_records(["0123456789", "5550001234"]).unwrap();

        write_records(&path, &records).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "[\n  \"0123456789\",\n  \"5550001234\"\n]");
        assert_eq!(read_records(&path).unwrap(), records);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn read_reports_bad_documents() {
        let path = temp_path("bad.json");

        fs::write(&path, r#"{"numbers": []}"#).unwrap();
        let err = read_records(&path).unwrap_err();
        assert!(err.to_string().contains("not a JSON array"), "err={err:#}");

        fs::write(&path, r#"["123", "12x"]"#).unwrap();
        let err = read_records(&path).unwrap_err();
        assert!(format!("{err:#}").contains("malformed record \"12x\""), "err={err:#}");

        fs::remove_file(&path).unwrap();
        assert!(read_records(&path).is_err());
    }
}
