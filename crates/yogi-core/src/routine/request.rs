use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{FocusArea, Level, TimeOfDay};

/// Shortest practice the planner accepts, in minutes.
pub const MIN_DURATION_MINUTES: u32 = 10;
/// Longest practice the planner accepts, in minutes.
pub const MAX_DURATION_MINUTES: u32 = 60;
/// Durations are chosen in steps of this many minutes.
pub const DURATION_STEP_MINUTES: u32 = 5;

/// Errors from validating a [`RoutineRequest`] at the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("duration {0} min is out of range (expected 10-60)")]
    DurationOutOfRange(u32),

    #[error("duration {0} min is not a multiple of 5")]
    DurationNotStepped(u32),
}

/// Parameters for one routine.
///
/// Use [`RoutineRequest::new`] for the required fields, then chain the
/// optional setters (builder-style).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineRequest {
    pub level: Level,
    pub duration_minutes: u32,
    /// Selected focus areas; empty means no narrowing.
    #[serde(default)]
    pub focus_areas: BTreeSet<FocusArea>,
    #[serde(default)]
    pub time_of_day: TimeOfDay,
}

impl RoutineRequest {
    /// Create a request with no focus areas and a morning practice.
    pub fn new(level: Level, duration_minutes: u32) -> Self {
        Self {
            level,
            duration_minutes,
            focus_areas: BTreeSet::new(),
            time_of_day: TimeOfDay::default(),
        }
    }

    /// Add a single focus area.
    pub fn focus(mut self, area: FocusArea) -> Self {
        self.focus_areas.insert(area);
        self
    }

    /// Add several focus areas. Duplicates collapse.
    pub fn focus_areas(mut self, areas: impl IntoIterator<Item = FocusArea>) -> Self {
        self.focus_areas.extend(areas);
        self
    }

    /// Set the time of day.
    pub fn time_of_day(mut self, time_of_day: TimeOfDay) -> Self {
        self.time_of_day = time_of_day;
        self
    }

    /// Check the duration contract the generator relies on callers to honour.
    ///
    /// Generation itself never calls this.
    pub fn validate(&self) -> Result<(), RequestError> {
        let d = self.duration_minutes;
        if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&d) {
            return Err(RequestError::DurationOutOfRange(d));
        }
        if d % DURATION_STEP_MINUTES != 0 {
            return Err(RequestError::DurationNotStepped(d));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_defaults() {
        let req = RoutineRequest::new(Level::Beginner, 30);
        assert_eq!(req.level, Level::Beginner);
        assert_eq!(req.duration_minutes, 30);
        assert!(req.focus_areas.is_empty());
        assert_eq!(req.time_of_day, TimeOfDay::Morning);
    }

    #[test]
    fn builder_collapses_duplicate_focus_areas() {
        let req = RoutineRequest::new(Level::Advanced, 45)
            .focus(FocusArea::Strength)
            .focus_areas([FocusArea::Balance, FocusArea::Strength])
            .time_of_day(TimeOfDay::Evening);
        assert_eq!(req.focus_areas.len(), 2);
        assert!(req.focus_areas.contains(&FocusArea::Balance));
        assert_eq!(req.time_of_day, TimeOfDay::Evening);
    }

    #[test]
    fn validate_accepts_stepped_range() {
        for d in (10..=60).step_by(5) {
            assert!(RoutineRequest::new(Level::Beginner, d).validate().is_ok(), "{d}");
        }
    }

    #[test]
    fn validate_rejects_out_of_range() {
        assert_eq!(
            RoutineRequest::new(Level::Beginner, 5).validate(),
            Err(RequestError::DurationOutOfRange(5))
        );
        assert_eq!(
            RoutineRequest::new(Level::Beginner, 65).validate(),
            Err(RequestError::DurationOutOfRange(65))
        );
    }

    #[test]
    fn validate_rejects_unstepped_duration() {
        let err = RoutineRequest::new(Level::Beginner, 22).validate().unwrap_err();
        assert_eq!(err, RequestError::DurationNotStepped(22));
        assert!(err.to_string().contains("multiple of 5"));
    }

    #[test]
    fn deserializes_with_optional_fields_missing() {
        let req: RoutineRequest =
            serde_json::from_str(r#"{"level":"intermediate","duration_minutes":25}"#).unwrap();
        assert_eq!(req, RoutineRequest::new(Level::Intermediate, 25));
    }
}
