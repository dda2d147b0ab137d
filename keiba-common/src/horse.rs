//! Per-horse attributes sent to the prediction endpoint.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Highest post-position bracket (枠番).
pub const MAX_WAKU: u32 = 8;
/// Highest horse number (馬番) in a single field.
pub const MAX_UMABAN: u32 = 18;

/// Sex of a horse, encoded on the wire as 0, 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Sex {
    /// 牡 (colt / horse)
    #[default]
    Male,
    /// 牝 (filly / mare)
    Female,
    /// セ (gelding)
    Gelding,
}

impl Sex {
    pub const ALL: [Sex; 3] = [Sex::Male, Sex::Female, Sex::Gelding];

    pub fn code(self) -> u8 {
        match self {
            Sex::Male => 0,
            Sex::Female => 1,
            Sex::Gelding => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Sex::Male),
            1 => Some(Sex::Female),
            2 => Some(Sex::Gelding),
            _ => None,
        }
    }

    /// Map the race-card symbol (牡, 牝, セ) to a sex.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '牡' => Some(Sex::Male),
            '牝' => Some(Sex::Female),
            'セ' => Some(Sex::Gelding),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Sex::Male => '牡',
            Sex::Female => '牝',
            Sex::Gelding => 'セ',
        }
    }

    /// Label shown in the prediction form.
    pub fn label(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Gelding => "gelding",
        }
    }
}

impl TryFrom<u8> for Sex {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Sex::from_code(code).ok_or_else(|| format!("invalid sex code {code}, expected 0, 1 or 2"))
    }
}

impl From<Sex> for u8 {
    fn from(sex: Sex) -> Self {
        sex.code()
    }
}

/// One horse in the field, as the prediction model expects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorseEntry {
    pub waku: u32,
    pub umaban: u32,
    pub jockey_weight: f64,
    pub horse_weight: f64,
    pub sex: Sex,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EntryError {
    #[error("waku must be between 1 and 8, got {0}")]
    WakuOutOfRange(u32),
    #[error("umaban must be between 1 and 18, got {0}")]
    UmabanOutOfRange(u32),
    #[error("jockey weight must be a positive number")]
    InvalidJockeyWeight,
    #[error("horse weight must be a positive number")]
    InvalidHorseWeight,
    #[error("age must be at least 1")]
    InvalidAge,
    #[error("umaban {0} appears more than once")]
    DuplicateUmaban(u32),
    #[error("at least one horse is required")]
    EmptyField,
}

impl HorseEntry {
    pub fn validate(&self) -> Result<(), EntryError> {
        if !(1..=MAX_WAKU).contains(&self.waku) {
            return Err(EntryError::WakuOutOfRange(self.waku));
        }
        if !(1..=MAX_UMABAN).contains(&self.umaban) {
            return Err(EntryError::UmabanOutOfRange(self.umaban));
        }
        if !(self.jockey_weight.is_finite() && self.jockey_weight > 0.0) {
            return Err(EntryError::InvalidJockeyWeight);
        }
        if !(self.horse_weight.is_finite() && self.horse_weight > 0.0) {
            return Err(EntryError::InvalidHorseWeight);
        }
        if self.age == 0 {
            return Err(EntryError::InvalidAge);
        }
        Ok(())
    }
}

/// Validate a whole field of entries.
///
/// Predictions come back keyed by `umaban`, so numbers must be unique.
pub fn validate_field(entries: &[HorseEntry]) -> Result<(), EntryError> {
    if entries.is_empty() {
        return Err(EntryError::EmptyField);
    }

    let mut seen = HashSet::new();
    for entry in entries {
        entry.validate()?;
        if !seen.insert(entry.umaban) {
            return Err(EntryError::DuplicateUmaban(entry.umaban));
        }
    }
    Ok(())
}
