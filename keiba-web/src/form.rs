//! Editable state of the prediction form.
//!
//! The server keeps no session: every post carries the whole list of rows
//! back as repeated fields (`waku`, `umaban`, ...), paired up by position.
//! Rows keep the raw text the user typed so invalid input re-renders as-is.

use keiba_common::{
    parse_card, parse_horse_weight, validate_field, HorseEntry, Sex, MAX_UMABAN,
};

use crate::error::{Error, Result};

/// A field holds at most one row per horse number.
pub const MAX_ROWS: usize = MAX_UMABAN as usize;

const DEFAULT_WAKU: &str = "1";
const DEFAULT_JOCKEY_WEIGHT: &str = "55";
const DEFAULT_HORSE_WEIGHT: &str = "480";
const DEFAULT_AGE: &str = "3";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntryRow {
    pub waku: String,
    pub umaban: String,
    pub jockey_weight: String,
    pub horse_weight: String,
    pub sex: String,
    pub age: String,
}

impl EntryRow {
    /// A new row pre-filled with typical values.
    pub fn with_umaban(umaban: u32) -> Self {
        Self {
            waku: DEFAULT_WAKU.to_string(),
            umaban: umaban.to_string(),
            jockey_weight: DEFAULT_JOCKEY_WEIGHT.to_string(),
            horse_weight: DEFAULT_HORSE_WEIGHT.to_string(),
            sex: Sex::default().code().to_string(),
            age: DEFAULT_AGE.to_string(),
        }
    }

    pub fn from_entry(entry: &HorseEntry) -> Self {
        Self {
            waku: entry.waku.to_string(),
            umaban: entry.umaban.to_string(),
            jockey_weight: entry.jockey_weight.to_string(),
            horse_weight: entry.horse_weight.to_string(),
            sex: entry.sex.code().to_string(),
            age: entry.age.to_string(),
        }
    }

    /// Parse the raw inputs, collecting one message per bad field.
    pub fn parse(&self) -> std::result::Result<HorseEntry, Vec<String>> {
        let mut errors = Vec::new();

        let waku = self.waku.trim().parse::<u32>().map_err(|_| {
            errors.push("waku must be a whole number".to_string());
        });
        let umaban = self.umaban.trim().parse::<u32>().map_err(|_| {
            errors.push("umaban must be a whole number".to_string());
        });
        let jockey_weight = self.jockey_weight.trim().parse::<f64>().map_err(|_| {
            errors.push("jockey weight must be a number".to_string());
        });
        // Accept the race-card notation "480(+2)" as well as a plain number.
        let horse_weight = self
            .horse_weight
            .trim()
            .parse::<f64>()
            .ok()
            .or_else(|| parse_horse_weight(&self.horse_weight))
            .ok_or_else(|| {
                errors.push("horse weight must be a number".to_string());
            });
        let sex = self
            .sex
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(Sex::from_code)
            .ok_or_else(|| {
                errors.push("sex must be 0, 1 or 2".to_string());
            });
        let age = self.age.trim().parse::<u32>().map_err(|_| {
            errors.push("age must be a whole number".to_string());
        });

        match (waku, umaban, jockey_weight, horse_weight, sex, age) {
            (Ok(waku), Ok(umaban), Ok(jockey_weight), Ok(horse_weight), Ok(sex), Ok(age)) => {
                Ok(HorseEntry {
                    waku,
                    umaban,
                    jockey_weight,
                    horse_weight,
                    sex,
                    age,
                })
            }
            _ => Err(errors),
        }
    }
}

/// What the submitting button asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Predict,
    Add,
    Remove(usize),
    Import,
}

impl Action {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "predict" => Some(Action::Predict),
            "add" => Some(Action::Add),
            "import" => Some(Action::Import),
            _ => value
                .strip_prefix("remove-")
                .and_then(|index| index.parse().ok())
                .map(Action::Remove),
        }
    }
}

/// Result of a race-card import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardImport {
    pub imported: usize,
    /// Readable rows beyond `MAX_ROWS` that were not imported.
    pub left_out: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictForm {
    pub rows: Vec<EntryRow>,
    /// Pasted race-card text for the import action.
    pub card: String,
}

impl Default for PredictForm {
    fn default() -> Self {
        Self {
            rows: vec![EntryRow::with_umaban(1)],
            card: String::new(),
        }
    }
}

impl PredictForm {
    /// Rebuild the form and the requested action from url-encoded pairs.
    ///
    /// A post without an `action` (e.g. Enter pressed in a field) means predict.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<(Self, Action)> {
        let mut waku = Vec::new();
        let mut umaban = Vec::new();
        let mut jockey_weight = Vec::new();
        let mut horse_weight = Vec::new();
        let mut sex = Vec::new();
        let mut age = Vec::new();
        let mut card = String::new();
        let mut action = Action::Predict;

        for (key, value) in pairs {
            match key.as_str() {
                "waku" => waku.push(value),
                "umaban" => umaban.push(value),
                "jockey_weight" => jockey_weight.push(value),
                "horse_weight" => horse_weight.push(value),
                "sex" => sex.push(value),
                "age" => age.push(value),
                "card" => card = value,
                "action" => {
                    action = Action::parse(&value)
                        .ok_or_else(|| Error::InvalidRequest(format!("unknown action '{}'", value)))?;
                }
                _ => tracing::debug!("Ignoring unknown form field {}", key),
            }
        }

        let take = |values: &mut Vec<String>, i: usize| -> String {
            values.get_mut(i).map(std::mem::take).unwrap_or_default()
        };
        let rows = (0..waku.len())
            .map(|i| EntryRow {
                waku: take(&mut waku, i),
                umaban: take(&mut umaban, i),
                jockey_weight: take(&mut jockey_weight, i),
                horse_weight: take(&mut horse_weight, i),
                sex: take(&mut sex, i),
                age: take(&mut age, i),
            })
            .collect();

        Ok((Self { rows, card }, action))
    }

    /// Append a default row using the lowest horse number not yet taken.
    ///
    /// Returns `false` when the field is already full.
    pub fn add_row(&mut self) -> bool {
        if self.rows.len() >= MAX_ROWS {
            return false;
        }
        let used: Vec<u32> = self
            .rows
            .iter()
            .filter_map(|row| row.umaban.trim().parse().ok())
            .collect();
        let next = (1..=MAX_UMABAN)
            .find(|n| !used.contains(n))
            .unwrap_or(MAX_UMABAN);
        self.rows.push(EntryRow::with_umaban(next));
        true
    }

    /// Remove row `index`, always leaving at least one row.
    pub fn remove_row(&mut self, index: usize) -> bool {
        if self.rows.len() <= 1 || index >= self.rows.len() {
            return false;
        }
        self.rows.remove(index);
        true
    }

    /// Replace the rows with the entries read from the pasted card.
    ///
    /// Nothing readable leaves the form untouched.
    pub fn import_card(&mut self) -> CardImport {
        let entries = parse_card(&self.card);
        if entries.is_empty() {
            return CardImport::default();
        }
        let left_out = entries.len().saturating_sub(MAX_ROWS);
        self.rows = entries.iter().take(MAX_ROWS).map(EntryRow::from_entry).collect();
        self.card.clear();
        CardImport {
            imported: self.rows.len(),
            left_out,
        }
    }

    /// Parse and validate every row, ready to send to the model.
    pub fn entries(&self) -> std::result::Result<Vec<HorseEntry>, Vec<String>> {
        let mut entries = Vec::with_capacity(self.rows.len());
        let mut errors = Vec::new();

        for (i, row) in self.rows.iter().enumerate() {
            match row.parse() {
                Ok(entry) => match entry.validate() {
                    Ok(()) => entries.push(entry),
                    Err(e) => errors.push(format!("Horse {}: {}", i + 1, e)),
                },
                Err(messages) => {
                    errors.extend(messages.into_iter().map(|m| format!("Horse {}: {}", i + 1, m)))
                }
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        validate_field(&entries).map_err(|e| vec![e.to_string()])?;
        Ok(entries)
    }
}
