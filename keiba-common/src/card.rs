//! Parsing of race-card (出馬表) text into horse entries.
//!
//! Two row layouts are accepted:
//!
//! - compact: `waku umaban sex_age jockey_weight horse_weight`
//! - a netkeiba shutuba row copied as tab-separated cells, where the
//!   relevant columns are 0 (枠), 1 (馬番), 4 (性齢), 5 (斤量) and 8 (馬体重)
//!
//! Rows with a missing or malformed cell are skipped.

use crate::horse::{HorseEntry, Sex};

const COMPACT_COLUMNS: usize = 5;
const SHUTUBA_COLUMNS: usize = 9;

/// Split `"牡4"` into its sex and age.
pub fn parse_sex_age(text: &str) -> Option<(Sex, u32)> {
    let text = text.trim();
    let mut chars = text.chars();
    let sex = Sex::from_symbol(chars.next()?)?;
    let age = chars.as_str().trim().parse().ok()?;
    Some((sex, age))
}

/// Extract the body weight from `"480(+2)"`.
///
/// Unmeasured horses are listed as `計不`, which yields `None`.
pub fn parse_horse_weight(text: &str) -> Option<f64> {
    let text = text.trim();
    let digits: &str = match text.find(|c: char| !c.is_ascii_digit()) {
        Some(end) => &text[..end],
        None => text,
    };
    if digits.len() < 3 {
        return None;
    }
    digits.parse().ok()
}

pub fn parse_card_row(line: &str) -> Option<HorseEntry> {
    let cells: Vec<&str> = if line.contains('\t') {
        line.split('\t').map(str::trim).collect()
    } else {
        line.split_whitespace().collect()
    };

    let (waku, umaban, sex_age, jockey_weight, horse_weight) = if cells.len() >= SHUTUBA_COLUMNS {
        (cells[0], cells[1], cells[4], cells[5], cells[8])
    } else if cells.len() >= COMPACT_COLUMNS {
        (cells[0], cells[1], cells[2], cells[3], cells[4])
    } else {
        return None;
    };

    let (sex, age) = parse_sex_age(sex_age)?;
    Some(HorseEntry {
        waku: waku.parse().ok()?,
        umaban: umaban.parse().ok()?,
        jockey_weight: jockey_weight.parse().ok()?,
        horse_weight: parse_horse_weight(horse_weight)?,
        sex,
        age,
    })
}

/// Parse every non-empty line of a pasted race card, keeping card order.
pub fn parse_card(text: &str) -> Vec<HorseEntry> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(parse_card_row)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sex_age() {
        assert_eq!(parse_sex_age("牡4"), Some((Sex::Male, 4)));
        assert_eq!(parse_sex_age("牝3"), Some((Sex::Female, 3)));
        assert_eq!(parse_sex_age(" セ7 "), Some((Sex::Gelding, 7)));
        assert_eq!(parse_sex_age("牡"), None);
        assert_eq!(parse_sex_age("X4"), None);
        assert_eq!(parse_sex_age(""), None);
    }

    #[test]
    fn test_parse_horse_weight() {
        assert_eq!(parse_horse_weight("480(+2)"), Some(480.0));
        assert_eq!(parse_horse_weight("512(-10)"), Some(512.0));
        assert_eq!(parse_horse_weight("498"), Some(498.0));
        assert_eq!(parse_horse_weight("計不"), None);
        assert_eq!(parse_horse_weight("48"), None);
    }

    #[test]
    fn test_parse_compact_row() {
        let entry = parse_card_row("3 5 牝4 55.0 462(-4)").unwrap();
        assert_eq!(entry.waku, 3);
        assert_eq!(entry.umaban, 5);
        assert_eq!(entry.sex, Sex::Female);
        assert_eq!(entry.age, 4);
        assert_eq!(entry.jockey_weight, 55.0);
        assert_eq!(entry.horse_weight, 462.0);
    }

    #[test]
    fn test_parse_shutuba_row() {
        let line = "1\t2\t\tイクイノックス\t牡4\t58.0\tルメール\t美浦木村\t498(+4)\t1.3\t1";
        let entry = parse_card_row(line).unwrap();
        assert_eq!(entry.waku, 1);
        assert_eq!(entry.umaban, 2);
        assert_eq!(entry.sex, Sex::Male);
        assert_eq!(entry.age, 4);
        assert_eq!(entry.jockey_weight, 58.0);
        assert_eq!(entry.horse_weight, 498.0);
    }

    #[test]
    fn test_parse_card_skips_bad_rows() {
        let text = "1 1 牡3 57 480(+2)\n\n2 2 牡3 57 計不\nheader line\n3 3 セ5 57 502(0)\n";
        let entries = parse_card(text);
        let numbers: Vec<u32> = entries.iter().map(|e| e.umaban).collect();
        assert_eq!(numbers, vec![1, 3]);
    }
}
