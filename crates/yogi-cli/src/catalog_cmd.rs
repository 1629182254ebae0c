//! `yogi catalog` and `yogi focus` commands: browse the built-in pose catalog.

use std::fmt::Write as _;

use anyhow::{Result, bail};

use yogi_core::{Catalog, FocusArea, Level, catalog};

/// Run the catalog command.
///
/// With `pose`, shows every level and section containing that pose.
/// Otherwise lists the catalog, optionally restricted to one level.
pub fn run_catalog(level: Option<Level>, pose: Option<&str>) -> Result<()> {
    let catalog = catalog::global();
    match pose {
        Some(name) => {
            let hits = catalog.find_pose(name);
            if hits.is_empty() {
                bail!("pose {name:?} is not in the catalog");
            }
            for (level, section, pose) in hits {
                println!(
                    "{} ({} {}): {} | {}",
                    pose.name,
                    level,
                    section.display_name(),
                    pose.duration,
                    pose.benefits
                );
            }
        }
        None => print!("{}", render_catalog(catalog, level)),
    }
    Ok(())
}

/// Run the focus command: list one or all focus areas with their poses.
pub fn run_focus(area: Option<FocusArea>) -> Result<()> {
    let areas: Vec<FocusArea> = match area {
        Some(a) => vec![a],
        None => FocusArea::ALL.to_vec(),
    };
    print!("{}", render_focus(catalog::global(), &areas));
    Ok(())
}

fn render_catalog(catalog: &Catalog, only: Option<Level>) -> String {
    let mut out = String::new();
    let mut current = None;
    for (level, section, poses) in catalog.iter() {
        if only.is_some_and(|l| l != level) {
            continue;
        }
        if current != Some(level) {
            if current.is_some() {
                out.push('\n');
            }
            let _ = writeln!(out, "{}", level.display_name());
            current = Some(level);
        }
        let _ = writeln!(out, "  {}", section.display_name());
        for pose in poses {
            let _ = writeln!(out, "    {:<24} {:<20} {}", pose.name, pose.duration, pose.benefits);
        }
    }
    out
}

fn render_focus(catalog: &Catalog, areas: &[FocusArea]) -> String {
    let mut out = String::new();
    for (i, &area) in areas.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{area}");
        for name in catalog.focus_pose_names(area) {
            let levels: Vec<&str> = catalog
                .find_pose(name)
                .into_iter()
                .map(|(level, _, _)| level.as_str())
                .collect();
            if levels.is_empty() {
                let _ = writeln!(out, "  {name}");
            } else {
                let _ = writeln!(out, "  {name} ({})", levels.join(", "));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_all_levels() {
        let text = render_catalog(catalog::global(), None);
        assert!(text.contains("Beginner\n  Warm Up\n    Cat-Cow Stretch"));
        assert!(text.contains("Intermediate\n"));
        assert!(text.contains("Advanced\n"));
        assert!(text.contains("King Pigeon"));
    }

    #[test]
    fn catalog_filters_by_level() {
        let text = render_catalog(catalog::global(), Some(Level::Advanced));
        assert!(text.starts_with("Advanced\n"));
        assert!(!text.contains("Beginner"));
        assert!(!text.contains("Cat-Cow Stretch"));
        assert!(text.contains("Shoulderstand"));
    }

    #[test]
    fn focus_shows_levels_for_each_pose() {
        let text = render_focus(catalog::global(), &[FocusArea::Relaxation]);
        assert!(text.starts_with("relaxation\n"));
        assert!(text.contains("  Corpse Pose (beginner, intermediate, advanced)"));
        assert!(text.contains("  Child's Pose (beginner)"));
    }

    #[test]
    fn focus_lists_all_areas() {
        let text = render_focus(catalog::global(), &FocusArea::ALL);
        for area in FocusArea::ALL {
            assert!(text.contains(&format!("{area}\n")));
        }
    }
}
