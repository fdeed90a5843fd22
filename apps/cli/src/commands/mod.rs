//! View projections: each function reads the session and returns the read
//! model for one view.

pub mod catalog;
pub mod map;
pub mod sequence;
pub mod table;

use crate::session::Intent;

/// Parse a `SLOT=PART` command-line assignment into an intent.
pub fn parse_assignment(arg: &str) -> Result<Intent, String> {
    let (slot_id, entry) = arg
        .split_once('=')
        .ok_or_else(|| format!("Expected SLOT=PART, got {:?}", arg))?;
    let (slot_id, entry) = (slot_id.trim(), entry.trim());
    if slot_id.is_empty() || entry.is_empty() {
        return Err(format!("Expected SLOT=PART, got {:?}", arg));
    }
    Ok(Intent::AssignEntry {
        slot_id: slot_id.to_string(),
        entry: entry.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("orf-1 = GFP").unwrap(),
            Intent::AssignEntry {
                slot_id: "orf-1".to_string(),
                entry: "GFP".to_string(),
            }
        );
        // Part names may contain '='-free punctuation such as '+'.
        assert!(parse_assignment("promoter=CMV+intron").is_ok());
        assert!(parse_assignment("promoter").is_err());
        assert!(parse_assignment("=CMV").is_err());
    }
}
