use thiserror::Error;
use vecbuilder_core::SlotCategory;

use crate::entry::{BackboneInfo, CatalogEntry};

/// The part catalog, one row per selectable part.
const CATALOG_CSV: &str = include_str!("../data/catalog.csv");

/// Descriptions of the fixed backbone elements, keyed by map label.
const BACKBONE_CSV: &str = include_str!("../data/backbone.csv");

/// A catalog row that could not be turned into an entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("line {line}: unknown category {value:?}")]
    UnknownCategory { line: usize, value: String },
    #[error("line {line}: bad length {value:?}")]
    BadLength { line: usize, value: String },
    #[error("line {line}: missing {field}")]
    MissingField { line: usize, field: &'static str },
}

/// Parse the embedded catalog.
///
/// CSV columns: id, category, name, length, feature_type, description, notes.
/// Bad rows are logged and skipped.
pub fn builtin_entries() -> Vec<CatalogEntry> {
    rows(CATALOG_CSV, 7)
        .filter_map(|(line, fields)| match parse_entry(line, &fields) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("skipping catalog row: {}", e);
                None
            }
        })
        .collect()
}

fn parse_entry(line: usize, fields: &[String]) -> Result<CatalogEntry, RowError> {
    let category = SlotCategory::from_key(&fields[1]).ok_or_else(|| RowError::UnknownCategory {
        line,
        value: fields[1].clone(),
    })?;
    let length = match fields[3].trim().parse::<usize>() {
        Ok(len) if len > 0 => len,
        _ => {
            return Err(RowError::BadLength {
                line,
                value: fields[3].clone(),
            })
        }
    };
    if fields[0].is_empty() {
        return Err(RowError::MissingField { line, field: "id" });
    }
    if fields[2].is_empty() {
        return Err(RowError::MissingField { line, field: "name" });
    }

    let mut entry = CatalogEntry::new(
        fields[0].as_str(),
        category,
        fields[2].as_str(),
        length,
        fields[5].as_str(),
        fields[6].as_str(),
    );
    if !fields[4].is_empty() {
        entry.feature_type = Some(fields[4].clone());
    }
    Ok(entry)
}

/// Parse the embedded backbone descriptions.
pub fn builtin_backbone_info() -> Vec<BackboneInfo> {
    rows(BACKBONE_CSV, 3)
        .map(|(_, fields)| BackboneInfo {
            label: fields[0].clone(),
            description: fields[1].clone(),
            notes: fields[2].clone(),
        })
        .collect()
}

/// Non-empty data rows (header skipped) with at least `min_fields` columns,
/// paired with their 1-based line number.
fn rows(csv: &str, min_fields: usize) -> impl Iterator<Item = (usize, Vec<String>)> + '_ {
    csv.lines()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| (i + 1, parse_csv_line(line.trim())))
        .filter(move |(_, fields)| fields.len() >= min_fields)
}

/// Split one CSV line. Double quotes wrap fields containing commas and `""`
/// inside a quoted field is a literal quote.
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match (ch, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                chars.next();
                current.push('"');
            }
            ('"', _) => in_quotes = !in_quotes,
            (',', false) => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_entries_parsed() {
        let entries = builtin_entries();
        assert_eq!(entries.len(), 20);
        for category in SlotCategory::EDITABLE {
            assert!(
                entries.iter().any(|e| e.category == category),
                "no entries for {}",
                category
            );
        }
        assert!(entries.iter().all(|e| e.category != SlotCategory::Backbone));
    }

    #[test]
    fn test_lengths_positive() {
        for e in builtin_entries() {
            assert!(e.length > 0, "Entry {} has zero length", e.name);
        }
    }

    #[test]
    fn test_no_duplicate_ids() {
        let entries = builtin_entries();
        let mut ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total, "Found duplicate catalog ids");
    }

    #[test]
    fn test_known_entries() {
        let entries = builtin_entries();
        let cmv = entries.iter().find(|e| e.id == "cmv").unwrap();
        assert_eq!(cmv.name, "CMV");
        assert_eq!(cmv.length, 589);
        assert_eq!(cmv.category, SlotCategory::Promoter);
        assert_eq!(
            cmv.notes,
            "Strong promoter; may have variable strength in some cell types."
        );

        let sv40 = entries.iter().find(|e| e.id == "sv40_poly_a").unwrap();
        assert_eq!(sv40.feature_type_label(), "PolyA_signal");
        let gfp = entries.iter().find(|e| e.id == "gfp").unwrap();
        assert_eq!(gfp.feature_type_label(), "CDS");
    }

    #[test]
    fn test_backbone_info() {
        let info = builtin_backbone_info();
        assert_eq!(info.len(), 5);
        let puc = info.iter().find(|i| i.label == "pUC ori").unwrap();
        assert_eq!(
            puc.notes,
            "Facilitates plasmid replication in E. coli; regulates high-copy plasmid number (500-700)."
        );
    }

    #[test]
    fn test_bad_rows_rejected() {
        let fields = |line: &str| parse_csv_line(line);
        assert_eq!(
            parse_entry(4, &fields("x,plasmid,X,10,,d,n")),
            Err(RowError::UnknownCategory {
                line: 4,
                value: "plasmid".to_string()
            })
        );
        assert!(matches!(
            parse_entry(5, &fields("x,orf,X,0,,d,n")),
            Err(RowError::BadLength { line: 5, .. })
        ));
        assert_eq!(
            parse_entry(6, &fields("x,orf,,10,,d,n")),
            Err(RowError::MissingField {
                line: 6,
                field: "name"
            })
        );
        assert!(parse_entry(7, &fields("x,orf,X,10,,d,n")).is_ok());
    }

    #[test]
    fn test_csv_parser() {
        let line = r#"hello,world,"quoted,field","say ""hi""",simple"#;
        let fields = parse_csv_line(line);
        assert_eq!(
            fields,
            vec!["hello", "world", "quoted,field", "say \"hi\"", "simple"]
        );
    }
}
