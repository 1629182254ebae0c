use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Parse error
// ---------------------------------------------------------------------------

/// Error returned when parsing an unknown enum string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: {value:?} (expected one of: {expected})")]
pub struct ParseEnumError {
    /// What was being parsed (e.g. `level`).
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
    /// Comma-separated list of accepted values.
    pub expected: &'static str,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
            expected,
        }
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Experience level. Selects which catalog sub-table is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Lower-case key as used in the catalog and config file.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Capitalized form for headings ("Beginner").
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(ParseEnumError::new(
                "level",
                s,
                "beginner, intermediate, advanced",
            )),
        }
    }
}

// ---------------------------------------------------------------------------

/// A fixed phase of a practice. Routines always visit sections in
/// [`Section::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    WarmUp,
    Standing,
    Floor,
    Cooldown,
}

impl Section {
    pub const ALL: [Section; 4] = [Self::WarmUp, Self::Standing, Self::Floor, Self::Cooldown];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WarmUp => "warm_up",
            Self::Standing => "standing",
            Self::Floor => "floor",
            Self::Cooldown => "cooldown",
        }
    }

    /// Key with underscores replaced by spaces, each word title-cased.
    pub fn display_name(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warm_up" | "warm-up" | "warmup" => Ok(Self::WarmUp),
            "standing" => Ok(Self::Standing),
            "floor" => Ok(Self::Floor),
            "cooldown" | "cool_down" | "cool-down" => Ok(Self::Cooldown),
            _ => Err(ParseEnumError::new(
                "section",
                s,
                "warm_up, standing, floor, cooldown",
            )),
        }
    }
}

// ---------------------------------------------------------------------------

/// Thematic tag used to bias pose selection toward named poses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusArea {
    Flexibility,
    Strength,
    Balance,
    Relaxation,
}

impl FocusArea {
    pub const ALL: [FocusArea; 4] = [
        Self::Flexibility,
        Self::Strength,
        Self::Balance,
        Self::Relaxation,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Flexibility => "flexibility",
            Self::Strength => "strength",
            Self::Balance => "balance",
            Self::Relaxation => "relaxation",
        }
    }
}

impl fmt::Display for FocusArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FocusArea {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flexibility" => Ok(Self::Flexibility),
            "strength" => Ok(Self::Strength),
            "balance" => Ok(Self::Balance),
            "relaxation" => Ok(Self::Relaxation),
            _ => Err(ParseEnumError::new(
                "focus area",
                s,
                "flexibility, strength, balance, relaxation",
            )),
        }
    }
}

// ---------------------------------------------------------------------------

/// When the practice takes place. Only affects the guidance note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeOfDay {
    #[default]
    #[serde(alias = "morning")]
    Morning,
    #[serde(alias = "midday")]
    Midday,
    #[serde(alias = "evening")]
    Evening,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 3] = [Self::Morning, Self::Midday, Self::Evening];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Midday => "Midday",
            Self::Evening => "Evening",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(Self::Morning),
            "midday" => Ok(Self::Midday),
            "evening" => Ok(Self::Evening),
            _ => Err(ParseEnumError::new(
                "time of day",
                s,
                "Morning, Midday, Evening",
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Pose
// ---------------------------------------------------------------------------

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Pose {
    /// Pose name, also the key used by focus-area indexes.
    pub name: String,
    /// Free-form hold time, e.g. `"1 min"` or `"2 min each side"`.
    pub duration: String,
    /// Short description of what the pose is good for.
    pub benefits: String,
}
