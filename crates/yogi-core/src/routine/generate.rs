//! Routine generation: focus filtering, sample sizing and random selection.
//!
//! Pure logic over an immutable [`Catalog`]; the caller supplies the RNG and
//! clock through [`generate_with`] so tests can pin both.

use std::collections::{BTreeSet, HashSet};

use chrono::{DateTime, Local};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{self, Catalog};
use crate::models::{FocusArea, Level, Pose, Section, TimeOfDay};

use super::request::RoutineRequest;

/// Practices shorter than this get two poses per section, longer ones three.
pub const SHORT_PRACTICE_MINUTES: u32 = 25;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The poses chosen for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionPlan {
    pub section: Section,
    pub poses: Vec<Pose>,
}

/// A generated routine. Built once per request and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutineResult {
    pub level: Level,
    pub time_of_day: TimeOfDay,
    pub focus_areas: BTreeSet<FocusArea>,
    /// The requested total; not reconciled with individual pose durations.
    pub total_minutes: u32,
    pub generated_at: DateTime<Local>,
    /// One entry per section, in [`Section::ALL`] order.
    pub sections: Vec<SectionPlan>,
}

impl RoutineResult {
    /// Coarse time allocation: the total split evenly across sections.
    pub fn minutes_per_section(&self) -> f64 {
        f64::from(self.total_minutes) / Section::ALL.len() as f64
    }

    /// Total number of poses across all sections.
    pub fn pose_count(&self) -> usize {
        self.sections.iter().map(|s| s.poses.len()).sum()
    }

    pub fn section(&self, section: Section) -> Option<&SectionPlan> {
        self.sections.iter().find(|s| s.section == section)
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate a routine from the built-in catalog, the thread RNG and the
/// current local time. Each call may return a different routine.
pub fn generate(request: &RoutineRequest) -> RoutineResult {
    generate_with(request, catalog::global(), &mut rand::rng(), Local::now())
}

/// Generate a routine with an explicit catalog, RNG and timestamp.
pub fn generate_with<R: Rng + ?Sized>(
    request: &RoutineRequest,
    catalog: &Catalog,
    rng: &mut R,
    generated_at: DateTime<Local>,
) -> RoutineResult {
    let focus_names = focus_union(catalog, &request.focus_areas);
    let target = sample_size(request.duration_minutes);

    let sections = Section::ALL
        .into_iter()
        .map(|section| {
            let all = catalog.poses_for(request.level, section);
            let candidates = filter_by_focus(all, focus_names.as_ref());
            let k = target.min(candidates.len());

            debug!(
                level = %request.level,
                section = %section,
                available = all.len(),
                candidates = candidates.len(),
                chosen = k,
                "selecting poses"
            );

            let poses = candidates
                .choose_multiple(&mut *rng, k)
                .map(|&p| p.clone())
                .collect();
            SectionPlan { section, poses }
        })
        .collect();

    RoutineResult {
        level: request.level,
        time_of_day: request.time_of_day,
        focus_areas: request.focus_areas.clone(),
        total_minutes: request.duration_minutes,
        generated_at,
        sections,
    }
}

/// Poses to draw per section for a given practice length.
pub fn sample_size(duration_minutes: u32) -> usize {
    if duration_minutes < SHORT_PRACTICE_MINUTES {
        2
    } else {
        3
    }
}

/// Union of the pose names for the selected focus areas, or `None` when no
/// focus area is selected.
fn focus_union<'a>(
    catalog: &'a Catalog,
    areas: &BTreeSet<FocusArea>,
) -> Option<HashSet<&'a str>> {
    if areas.is_empty() {
        return None;
    }
    Some(
        areas
            .iter()
            .flat_map(|&area| catalog.focus_pose_names(area))
            .map(String::as_str)
            .collect(),
    )
}

/// Keep the poses named by the focus union. An empty match falls back to
/// the full candidate list so a section is never starved.
fn filter_by_focus<'a>(poses: &'a [Pose], focus: Option<&HashSet<&str>>) -> Vec<&'a Pose> {
    let Some(names) = focus else {
        return poses.iter().collect();
    };
    let matched: Vec<&Pose> = poses
        .iter()
        .filter(|p| names.contains(p.name.as_str()))
        .collect();
    if matched.is_empty() {
        debug!("no focus matches, using all candidates");
        poses.iter().collect()
    } else {
        matched
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
