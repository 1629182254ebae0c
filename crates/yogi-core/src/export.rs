//! Plain-text and JSON renderings of a [`RoutineResult`].

use std::fmt::Write;

use chrono::{DateTime, Datelike, Local, NaiveDate};

use crate::routine::RoutineResult;

/// strftime pattern for the "Generated" line, e.g. `March 04, 2026 at 07:15 AM`.
pub const TIMESTAMP_FORMAT: &str = "%B %d, %Y at %I:%M %p";

/// Format a generation timestamp the way exports display it.
pub fn format_timestamp(ts: &DateTime<Local>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Render the routine as the downloadable text artifact.
///
/// ```text
/// Yoga Routine - Beginner - 20 min
/// Generated: March 04, 2026 at 07:15 AM
///
/// Warm Up: Neck Rolls, Child's Pose
/// ...
/// ```
pub fn render_text(result: &RoutineResult) -> String {
    let mut out = String::with_capacity(256);
    let _ = writeln!(
        out,
        "Yoga Routine - {} - {} min",
        result.level.display_name(),
        result.total_minutes
    );
    let _ = writeln!(out, "Generated: {}", format_timestamp(&result.generated_at));
    out.push('\n');

    let lines: Vec<String> = result
        .sections
        .iter()
        .map(|plan| {
            let poses: Vec<&str> = plan.poses.iter().map(|p| p.name.as_str()).collect();
            format!("{}: {}", plan.section.display_name(), poses.join(", "))
        })
        .collect();
    out.push_str(&lines.join("\n"));
    out
}

/// Serialize the full routine (including pose details) as pretty JSON.
pub fn render_json(result: &RoutineResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

/// File name for a text export made on `date`: `yoga_routine_YYYYMMDD.txt`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!(
        "yoga_routine_{:04}{:02}{:02}.txt",
        date.year(),
        date.month(),
        date.day()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::models::{Level, Pose, Section, TimeOfDay};
    use crate::routine::SectionPlan;

    fn pose(name: &str) -> Pose {
        Pose {
            name: name.to_string(),
            duration: "1 min".to_string(),
            benefits: "test".to_string(),
        }
    }

    fn sample_result() -> RoutineResult {
        RoutineResult {
            level: Level::Beginner,
            time_of_day: TimeOfDay::Morning,
            focus_areas: Default::default(),
            total_minutes: 20,
            generated_at: Local.with_ymd_and_hms(2026, 3, 4, 7, 15, 0).unwrap(),
            sections: vec![
                SectionPlan {
                    section: Section::WarmUp,
                    poses: vec![pose("Neck Rolls"), pose("Child's Pose")],
                },
                SectionPlan {
                    section: Section::Standing,
                    poses: vec![pose("Mountain Pose"), pose("Warrior I")],
                },
                SectionPlan {
                    section: Section::Floor,
                    poses: vec![pose("Cobra Pose"), pose("Bridge Pose")],
                },
                SectionPlan {
                    section: Section::Cooldown,
                    poses: vec![pose("Corpse Pose"), pose("Legs Up the Wall")],
                },
            ],
        }
    }

    #[test]
    fn text_export_layout() {
        let text = render_text(&sample_result());
        let expected = "Yoga Routine - Beginner - 20 min\n\
                        Generated: March 04, 2026 at 07:15 AM\n\
                        \n\
                        Warm Up: Neck Rolls, Child's Pose\n\
                        Standing: Mountain Pose, Warrior I\n\
                        Floor: Cobra Pose, Bridge Pose\n\
                        Cooldown: Corpse Pose, Legs Up the Wall";
        assert_eq!(text, expected);
    }

    #[test]
    fn afternoon_timestamp_uses_pm() {
        let ts = Local.with_ymd_and_hms(2026, 10, 14, 18, 5, 0).unwrap();
        assert_eq!(format_timestamp(&ts), "October 14, 2026 at 06:05 PM");
    }

    #[test]
    fn json_export_includes_pose_details() {
        let json = render_json(&sample_result()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["level"], "beginner");
        assert_eq!(value["total_minutes"], 20);
        assert_eq!(value["sections"][0]["section"], "warm_up");
        assert_eq!(value["sections"][0]["poses"][1]["name"], "Child's Pose");
        assert_eq!(value["sections"][3]["poses"][0]["duration"], "1 min");
    }

    #[test]
    fn export_file_name_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(export_file_name(date), "yoga_routine_20260105.txt");
    }
}
