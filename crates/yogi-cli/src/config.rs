//! Configuration file management for yogi.
//!
//! Provides a TOML-based config file at `~/.config/yogi/config.toml` and a
//! resolution chain: CLI flag > env var > config file > default.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use yogi_core::{FocusArea, Level, ParseEnumError, RoutineRequest, TimeOfDay};

/// Built-in defaults used when neither flag, env var nor config file set a value.
pub const DEFAULT_LEVEL: Level = Level::Beginner;
pub const DEFAULT_DURATION_MINUTES: u32 = 30;

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub defaults: DefaultsSection,
    #[serde(default)]
    pub export: ExportSection,
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<TimeOfDay>,
    #[serde(default)]
    pub focus: Vec<FocusArea>,
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportSection {
    /// Directory text exports are written to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the yogi config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/yogi` or `~/.config/yogi`.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("yogi");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("yogi")
}

/// Return the path to the yogi config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load the config file at `path`. A missing file is `Ok(None)`; a file that
/// exists but does not parse is an error.
pub fn load_config_from(path: &Path) -> Result<Option<ConfigFile>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config file at {}", path.display()))?;
    Ok(Some(config))
}

/// Load the config file from the default location.
pub fn load_config() -> Result<Option<ConfigFile>> {
    load_config_from(&config_path())
}

/// Serialize and write the config file, creating parent dirs as needed.
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;

    Ok(())
}

// -----------------------------------------------------------------------
// Env helpers
// -----------------------------------------------------------------------

/// Read and parse an env var. Unset is `Ok(None)`; set but unparseable is an error.
fn env_value<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("{name} env var is invalid: {raw:?}")),
        Err(_) => Ok(None),
    }
}

/// Parse a comma-separated focus list. Blank entries are skipped.
pub fn parse_focus_list(raw: &str) -> Result<Vec<FocusArea>, ParseEnumError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse::<FocusArea>)
        .collect()
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Values supplied on the command line. `None` defers to the next source.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub level: Option<Level>,
    pub duration_minutes: Option<u32>,
    pub focus: Option<Vec<FocusArea>>,
    pub time_of_day: Option<TimeOfDay>,
}

/// Fully resolved configuration, ready for use.
#[derive(Debug, Clone, PartialEq)]
pub struct YogiConfig {
    pub level: Level,
    pub duration_minutes: u32,
    pub focus: Vec<FocusArea>,
    pub time_of_day: TimeOfDay,
    pub export_dir: PathBuf,
}

impl YogiConfig {
    /// Resolve configuration using the chain: CLI flag > env var > config file > default.
    ///
    /// - level: `--level` > `YOGI_LEVEL` > `defaults.level` > beginner
    /// - duration: `--duration` > `YOGI_DURATION` > `defaults.duration_minutes` > 30
    /// - focus: `--focus`/`--no-focus` > `YOGI_FOCUS` (csv) > `defaults.focus` > none
    /// - time of day: `--time-of-day` > `YOGI_TIME_OF_DAY` > `defaults.time_of_day` > Morning
    /// - export dir: `YOGI_EXPORT_DIR` > `export.dir` > `.`
    pub fn resolve(cli: &Overrides) -> Result<Self> {
        let file = load_config()?.unwrap_or_default();
        Self::resolve_with(cli, file)
    }

    fn resolve_with(cli: &Overrides, file: ConfigFile) -> Result<Self> {
        let level = match cli.level {
            Some(level) => level,
            None => env_value::<Level>("YOGI_LEVEL")?
                .or(file.defaults.level)
                .unwrap_or(DEFAULT_LEVEL),
        };

        let duration_minutes = match cli.duration_minutes {
            Some(d) => d,
            None => env_value::<u32>("YOGI_DURATION")?
                .or(file.defaults.duration_minutes)
                .unwrap_or(DEFAULT_DURATION_MINUTES),
        };

        let focus = if let Some(ref focus) = cli.focus {
            focus.clone()
        } else if let Ok(raw) = std::env::var("YOGI_FOCUS") {
            parse_focus_list(&raw)
                .with_context(|| format!("YOGI_FOCUS env var is invalid: {raw:?}"))?
        } else {
            file.defaults.focus
        };

        let time_of_day = match cli.time_of_day {
            Some(t) => t,
            None => env_value::<TimeOfDay>("YOGI_TIME_OF_DAY")?
                .or(file.defaults.time_of_day)
                .unwrap_or_default(),
        };

        let export_dir = env_value::<PathBuf>("YOGI_EXPORT_DIR")?
            .or(file.export.dir)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            level,
            duration_minutes,
            focus,
            time_of_day,
            export_dir,
        })
    }

    /// Build the routine request these settings describe.
    pub fn request(&self) -> RoutineRequest {
        RoutineRequest::new(self.level, self.duration_minutes)
            .focus_areas(self.focus.iter().copied())
            .time_of_day(self.time_of_day)
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
