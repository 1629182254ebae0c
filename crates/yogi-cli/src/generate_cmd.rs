//! `yogi generate` command: build a routine, print it and optionally export it.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use yogi_core::export::{export_file_name, format_timestamp, render_json, render_text};
use yogi_core::guidance::PRACTICE_TIPS;
use yogi_core::{FocusArea, Level, RoutineResult, TimeOfDay, catalog, generate, generate_with};

use crate::config::{Overrides, YogiConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Formatted routine with benefits, durations and tips
    Text,
    /// The full routine as JSON
    Json,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Experience level: beginner, intermediate, advanced
    #[arg(long, short)]
    pub level: Option<Level>,
    /// Practice duration in minutes (10-60, steps of 5)
    #[arg(long, short)]
    pub duration: Option<u32>,
    /// Comma-separated focus areas: flexibility, strength, balance, relaxation
    #[arg(long, short, value_delimiter = ',', conflicts_with = "no_focus")]
    pub focus: Vec<FocusArea>,
    /// Ignore focus areas from the environment and config file
    #[arg(long)]
    pub no_focus: bool,
    /// Time of day: Morning, Midday, Evening
    #[arg(long, short)]
    pub time_of_day: Option<TimeOfDay>,
    /// Seed the pose selection for a repeatable routine
    #[arg(long)]
    pub seed: Option<u64>,
    /// Output format on stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Write the plain-text export to the export directory
    #[arg(long)]
    pub export: bool,
    /// Write the plain-text export to this file or directory (implies --export)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    /// Flag values for config resolution.
    pub fn overrides(&self) -> Overrides {
        let focus = if self.no_focus {
            Some(Vec::new())
        } else if self.focus.is_empty() {
            None
        } else {
            Some(self.focus.clone())
        };
        Overrides {
            level: self.level,
            duration_minutes: self.duration,
            focus,
            time_of_day: self.time_of_day,
        }
    }
}

/// Run the generate command.
pub fn run_generate(args: &GenerateArgs) -> Result<()> {
    let config = YogiConfig::resolve(&args.overrides())?;
    let request = config.request();
    request.validate().context("invalid routine request")?;

    debug!(
        level = %request.level,
        duration = request.duration_minutes,
        focus = ?request.focus_areas,
        seed = ?args.seed,
        "generating routine"
    );

    let result = match args.seed {
        Some(seed) => generate_with(
            &request,
            catalog::global(),
            &mut StdRng::seed_from_u64(seed),
            Local::now(),
        ),
        None => generate(&request),
    };

    match args.format {
        OutputFormat::Text => print!("{}", render_routine(&result)),
        OutputFormat::Json => println!("{}", render_json(&result)?),
    }

    if args.export || args.output.is_some() {
        let path = export_path(
            args.output.as_deref(),
            &config.export_dir,
            Local::now().date_naive(),
        );
        write_export(&path, &result)?;
        // Keep stdout parseable in JSON mode.
        match args.format {
            OutputFormat::Text => println!("\nRoutine exported to {}", path.display()),
            OutputFormat::Json => eprintln!("Routine exported to {}", path.display()),
        }
    }

    Ok(())
}

/// Where to write an export. An explicit directory (or a path ending in a
/// separator) gets the dated file name; any other explicit path is used as is.
pub fn export_path(output: Option<&Path>, export_dir: &Path, today: NaiveDate) -> PathBuf {
    let file_name = export_file_name(today);
    match output {
        Some(path) if path.is_dir() || path.as_os_str().to_string_lossy().ends_with('/') => {
            path.join(file_name)
        }
        Some(path) => path.to_path_buf(),
        None => export_dir.join(file_name),
    }
}

/// Write the plain-text export, creating parent directories as needed.
pub fn write_export(path: &Path, result: &RoutineResult) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create export directory {}", parent.display()))?;
    }
    let mut contents = render_text(result);
    contents.push('\n');
    std::fs::write(path, contents)
        .with_context(|| format!("failed to write export file {}", path.display()))?;
    info!(path = %path.display(), poses = result.pose_count(), "routine exported");
    Ok(())
}

/// Terminal view of a routine.
pub fn render_routine(result: &RoutineResult) -> String {
    let mut out = String::with_capacity(1024);

    let _ = writeln!(out, "Your Routine for {}", result.time_of_day);
    let _ = writeln!(out, "Generated on {}", format_timestamp(&result.generated_at));
    let _ = writeln!(
        out,
        "Level: {} | {} min",
        result.level.display_name(),
        result.total_minutes
    );
    if !result.focus_areas.is_empty() {
        let focus: Vec<&str> = result.focus_areas.iter().map(FocusArea::as_str).collect();
        let _ = writeln!(out, "Focus: {}", focus.join(", "));
    }
    out.push('\n');
    let _ = writeln!(out, "{}", result.time_of_day.practice_note());

    for plan in &result.sections {
        out.push('\n');
        let _ = writeln!(out, "{}", plan.section.display_name());
        for pose in &plan.poses {
            let _ = writeln!(out, "  {:<24} {}", pose.name, pose.duration);
            let _ = writeln!(out, "    Benefits: {}", pose.benefits);
        }
    }

    out.push('\n');
    let _ = writeln!(
        out,
        "Total Practice Time: ~{} minutes (about {:.1} min per section)",
        result.total_minutes,
        result.minutes_per_section()
    );

    out.push('\n');
    out.push_str("Practice Tips\n");
    for (headline, detail) in PRACTICE_TIPS {
        let _ = writeln!(out, "  - {headline} {detail}");
    }

    out
}
