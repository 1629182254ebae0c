//! Built-in pose catalog.
//!
//! Poses are grouped by [`Level`] and [`Section`], with a reverse index from
//! [`FocusArea`] to pose names. The data lives in `poses.toml` and is
//! embedded in the binary at compile time, then parsed and validated once.

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{FocusArea, Level, Pose, Section};

/// Every (level, section) pair must hold at least this many poses so that
/// sampling two per section never comes up short.
pub const MIN_POSES_PER_SECTION: usize = 2;

/// The embedded catalog TOML.
static POSES_TOML: &str = include_str!("poses.toml");

static GLOBAL: LazyLock<Catalog> =
    LazyLock::new(|| Catalog::load().expect("embedded poses.toml is invalid"));

/// Errors from parsing or validating catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("{level} {section} has {count} poses (need at least 2)")]
    TooFewPoses {
        level: Level,
        section: Section,
        count: usize,
    },

    #[error("duplicate pose {name:?} in {level} {section}")]
    DuplicatePose {
        level: Level,
        section: Section,
        name: String,
    },

    #[error("focus area {0} lists no poses")]
    EmptyFocusArea(FocusArea),
}

// ---------------------------------------------------------------------------
// On-disk shape
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogToml {
    levels: LevelTables,
    focus: FocusIndex,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct LevelTables {
    beginner: SectionTable,
    intermediate: SectionTable,
    advanced: SectionTable,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct SectionTable {
    warm_up: Vec<Pose>,
    standing: Vec<Pose>,
    floor: Vec<Pose>,
    cooldown: Vec<Pose>,
}

impl SectionTable {
    fn get(&self, section: Section) -> &[Pose] {
        match section {
            Section::WarmUp => &self.warm_up,
            Section::Standing => &self.standing,
            Section::Floor => &self.floor,
            Section::Cooldown => &self.cooldown,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct FocusIndex {
    flexibility: BTreeSet<String>,
    strength: BTreeSet<String>,
    balance: BTreeSet<String>,
    relaxation: BTreeSet<String>,
}

impl FocusIndex {
    fn get(&self, area: FocusArea) -> &BTreeSet<String> {
        match area {
            FocusArea::Flexibility => &self.flexibility,
            FocusArea::Strength => &self.strength,
            FocusArea::Balance => &self.balance,
            FocusArea::Relaxation => &self.relaxation,
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Validated, read-only pose catalog.
///
/// Missing levels or sections are rejected during deserialization, so every
/// lookup on a constructed `Catalog` is total.
#[derive(Debug, Clone)]
pub struct Catalog {
    levels: LevelTables,
    focus: FocusIndex,
}

impl Catalog {
    /// Parse and validate the embedded catalog.
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_toml_str(POSES_TOML)
    }

    /// Parse and validate catalog data from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let raw: CatalogToml = toml::from_str(content)?;
        let catalog = Self {
            levels: raw.levels,
            focus: raw.focus,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for level in Level::ALL {
            for section in Section::ALL {
                let poses = self.poses_for(level, section);
                if poses.len() < MIN_POSES_PER_SECTION {
                    return Err(CatalogError::TooFewPoses {
                        level,
                        section,
                        count: poses.len(),
                    });
                }
                let mut seen = HashSet::new();
                for pose in poses {
                    if !seen.insert(pose.name.as_str()) {
                        return Err(CatalogError::DuplicatePose {
                            level,
                            section,
                            name: pose.name.clone(),
                        });
                    }
                }
            }
        }

        for area in FocusArea::ALL {
            if self.focus.get(area).is_empty() {
                return Err(CatalogError::EmptyFocusArea(area));
            }
        }

        Ok(())
    }

    fn table(&self, level: Level) -> &SectionTable {
        match level {
            Level::Beginner => &self.levels.beginner,
            Level::Intermediate => &self.levels.intermediate,
            Level::Advanced => &self.levels.advanced,
        }
    }

    /// Candidate poses for a level and section, in catalog order.
    pub fn poses_for(&self, level: Level, section: Section) -> &[Pose] {
        self.table(level).get(section)
    }

    /// Pose names associated with a focus area. Names may belong to any level.
    pub fn focus_pose_names(&self, area: FocusArea) -> &BTreeSet<String> {
        self.focus.get(area)
    }

    /// Every place a pose name appears in the catalog.
    pub fn find_pose(&self, name: &str) -> Vec<(Level, Section, &Pose)> {
        self.iter()
            .flat_map(|(level, section, poses)| {
                poses
                    .iter()
                    .filter(move |p| p.name.eq_ignore_ascii_case(name))
                    .map(move |p| (level, section, p))
            })
            .collect()
    }

    /// Iterate all (level, section, poses) entries in level then section order.
    pub fn iter(&self) -> impl Iterator<Item = (Level, Section, &[Pose])> + '_ {
        Level::ALL.into_iter().flat_map(move |level| {
            Section::ALL
                .into_iter()
                .map(move |section| (level, section, self.poses_for(level, section)))
        })
    }
}

/// The process-wide catalog built from the embedded data.
///
/// # Panics
///
/// Panics on first use if the embedded TOML is malformed. The data is fixed
/// at compile time and covered by tests, so a built binary always loads it.
pub fn global() -> &'static Catalog {
    &GLOBAL
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn names(poses: &[Pose]) -> Vec<&str> {
        poses.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn embedded_catalog_loads() {
        Catalog::load().expect("embedded catalog should be valid");
    }

    #[test]
    fn every_level_and_section_has_at_least_two_poses() {
        let catalog = global();
        for level in Level::ALL {
            for section in Section::ALL {
                let poses = catalog.poses_for(level, section);
                assert!(
                    poses.len() >= MIN_POSES_PER_SECTION,
                    "{level} {section} has only {} poses",
                    poses.len()
                );
            }
        }
    }

    #[test]
    fn beginner_warm_up_matches_catalog_order() {
        let poses = global().poses_for(Level::Beginner, Section::WarmUp);
        assert_eq!(
            names(poses),
            vec!["Cat-Cow Stretch", "Child's Pose", "Neck Rolls"]
        );
        assert_eq!(poses[2].duration, "30 sec");
    }

    #[test]
    fn advanced_floor_poses() {
        let poses = global().poses_for(Level::Advanced, Section::Floor);
        assert_eq!(names(poses), vec!["Wheel Pose", "Crow Pose", "King Pigeon"]);
    }

    #[test]
    fn focus_index_contains_cross_level_names() {
        let strength = global().focus_pose_names(FocusArea::Strength);
        assert_eq!(strength.len(), 6);
        assert!(strength.contains("Crow Pose"));
        assert!(strength.contains("Warrior I"));

        let relaxation = global().focus_pose_names(FocusArea::Relaxation);
        assert!(relaxation.contains("Corpse Pose"));
    }

    #[test]
    fn find_pose_reports_every_level() {
        let hits = global().find_pose("corpse pose");
        let levels: Vec<Level> = hits.iter().map(|(l, _, _)| *l).collect();
        assert_eq!(levels, Level::ALL.to_vec());
        assert!(hits.iter().all(|(_, s, _)| *s == Section::Cooldown));
        assert_eq!(hits[2].2.duration, "5-10 min");
    }

    #[test]
    fn find_pose_unknown_is_empty() {
        assert!(global().find_pose("Handstand").is_empty());
    }

    #[test]
    fn iter_visits_all_twelve_tables() {
        assert_eq!(global().iter().count(), 12);
    }

    fn single_section_toml(warm_up: &str) -> String {
        let two = r#"[{ name = "A", duration = "1 min", benefits = "x" }, { name = "B", duration = "1 min", benefits = "y" }]"#;
        let table = format!(
            "warm_up = {warm_up}\nstanding = {two}\nfloor = {two}\ncooldown = {two}\n"
        );
        let full = format!("standing = {two}\nwarm_up = {two}\nfloor = {two}\ncooldown = {two}\n");
        format!(
            "[levels.beginner]\n{table}\n[levels.intermediate]\n{full}\n[levels.advanced]\n{full}\n\
             [focus]\nflexibility = [\"A\"]\nstrength = [\"A\"]\nbalance = [\"A\"]\nrelaxation = [\"B\"]\n"
        )
    }

    #[test]
    fn rejects_section_with_one_pose() {
        let toml = single_section_toml(r#"[{ name = "Solo", duration = "1 min", benefits = "x" }]"#);
        let err = Catalog::from_toml_str(&toml).unwrap_err();
        match err {
            CatalogError::TooFewPoses {
                level,
                section,
                count,
            } => {
                assert_eq!(level, Level::Beginner);
                assert_eq!(section, Section::WarmUp);
                assert_eq!(count, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_duplicate_pose_in_section() {
        let toml = single_section_toml(
            r#"[{ name = "A", duration = "1 min", benefits = "x" }, { name = "A", duration = "2 min", benefits = "x" }]"#,
        );
        let err = Catalog::from_toml_str(&toml).unwrap_err();
        assert!(
            matches!(err, CatalogError::DuplicatePose { ref name, .. } if name == "A"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn rejects_missing_section() {
        let toml = "[levels.beginner]\nwarm_up = []\n[focus]\n";
        let err = Catalog::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, CatalogError::TomlError(_)));
    }

    #[test]
    fn accepts_minimal_valid_catalog() {
        let toml = single_section_toml(
            r#"[{ name = "A", duration = "1 min", benefits = "x" }, { name = "C", duration = "1 min", benefits = "z" }]"#,
        );
        let catalog = Catalog::from_toml_str(&toml).unwrap();
        assert_eq!(
            names(catalog.poses_for(Level::Beginner, Section::WarmUp)),
            vec!["A", "C"]
        );
    }
}
