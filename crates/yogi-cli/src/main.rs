mod catalog_cmd;
mod config;
mod generate_cmd;
#[cfg(test)]
mod test_util;

use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};

use yogi_core::{FocusArea, Level, RoutineRequest, TimeOfDay};

use generate_cmd::GenerateArgs;

#[derive(Parser)]
#[command(name = "yogi", version, about = "Randomized yoga practice planner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a yogi config file with default practice settings
    Init {
        /// Default experience level
        #[arg(long, default_value_t = config::DEFAULT_LEVEL)]
        level: Level,
        /// Default practice duration in minutes
        #[arg(long, default_value_t = config::DEFAULT_DURATION_MINUTES)]
        duration: u32,
        /// Default time of day
        #[arg(long, default_value_t = TimeOfDay::Morning)]
        time_of_day: TimeOfDay,
        /// Default comma-separated focus areas
        #[arg(long, value_delimiter = ',')]
        focus: Vec<FocusArea>,
        /// Directory for text exports
        #[arg(long)]
        export_dir: Option<PathBuf>,
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Generate a routine
    Generate(GenerateArgs),
    /// List the pose catalog
    Catalog {
        /// Only show one level
        #[arg(long, short)]
        level: Option<Level>,
        /// Look up a single pose by name
        #[arg(long, short, conflicts_with = "level")]
        pose: Option<String>,
    },
    /// List focus areas and the poses they favour
    Focus {
        /// Focus area to show (omit to list all)
        area: Option<FocusArea>,
    },
    /// Print shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

/// Execute the `yogi init` command: write config file.
fn cmd_init(
    defaults: config::DefaultsSection,
    export_dir: Option<PathBuf>,
    force: bool,
) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    // Reject defaults that `yogi generate` would refuse later.
    if let (Some(level), Some(duration)) = (defaults.level, defaults.duration_minutes) {
        RoutineRequest::new(level, duration)
            .validate()
            .context("invalid default duration")?;
    }

    let cfg = config::ConfigFile {
        defaults,
        export: config::ExportSection { dir: export_dir },
    };
    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    if let Some(level) = cfg.defaults.level {
        println!("  defaults.level = {level}");
    }
    if let Some(duration) = cfg.defaults.duration_minutes {
        println!("  defaults.duration_minutes = {duration}");
    }
    if let Some(tod) = cfg.defaults.time_of_day {
        println!("  defaults.time_of_day = {tod}");
    }
    if !cfg.defaults.focus.is_empty() {
        let focus: Vec<&str> = cfg.defaults.focus.iter().map(FocusArea::as_str).collect();
        println!("  defaults.focus = {}", focus.join(", "));
    }
    if let Some(ref dir) = cfg.export.dir {
        println!("  export.dir = {}", dir.display());
    }
    println!();
    println!("Next: run `yogi generate` to build a routine.");

    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Init {
            level,
            duration,
            time_of_day,
            focus,
            export_dir,
            force,
        } => {
            let defaults = config::DefaultsSection {
                level: Some(level),
                duration_minutes: Some(duration),
                time_of_day: Some(time_of_day),
                focus,
            };
            cmd_init(defaults, export_dir, force)?;
        }
        Commands::Generate(args) => {
            generate_cmd::run_generate(&args)?;
        }
        Commands::Catalog { level, pose } => {
            catalog_cmd::run_catalog(level, pose.as_deref())?;
        }
        Commands::Focus { area } => {
            catalog_cmd::run_focus(area)?;
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "yogi", &mut std::io::stdout());
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
