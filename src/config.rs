// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daymark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daymark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Environment-based configuration.
//!
//! All settings come from environment variables, optionally seeded from a `.env` file.
//! The `.env` loader never overwrites variables already present in the environment.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::DayWindow;
use crate::scene::{SceneMetrics, SceneOptions};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { name: String, value: String, reason: String },
    InvalidWindow { start: String, end: String },
    InvalidEnvLine { file: PathBuf, line: String },
    Io { file: PathBuf, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { name, value, reason } => {
                write!(f, "invalid value {value:?} for {name}: {reason}")
            }
            Self::InvalidWindow { start, end } => {
                write!(f, "day window start {start:?} must lie before end {end:?}")
            }
            Self::InvalidEnvLine { file, line } => {
                write!(f, "invalid line in {}: {line:?}, expected KEY=VALUE", file.display())
            }
            Self::Io { file, reason } => {
                write!(f, "could not read {}: {reason}", file.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    window: DayWindow,
    canvas_width: i32,
    canvas_height: i32,
    show_density: bool,
    calendar_ids: Vec<String>,
}

impl AppConfig {
    pub fn window(&self) -> DayWindow {
        self.window
    }

    pub fn show_density(&self) -> bool {
        self.show_density
    }

    /// Configured calendar ids; empty when none are set.
    pub fn calendar_ids(&self) -> &[String] {
        &self.calendar_ids
    }

    /// Default scene metrics with the configured canvas dimensions applied.
    pub fn metrics(&self) -> SceneMetrics {
        SceneMetrics {
            canvas_width: self.canvas_width,
            canvas_height: self.canvas_height,
            ..SceneMetrics::default()
        }
    }

    pub fn scene_options(&self) -> SceneOptions {
        SceneOptions {
            metrics: self.metrics(),
            device_pixel_ratio: 1.0,
            show_density: self.show_density,
        }
    }

    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Pure core of [`from_env`](Self::from_env): reads through any lookup function.
    ///
    /// Every variable has a default, so an empty environment yields a working config:
    /// `DAY_START=08:00`, `DAY_END=21:00`, `CANVAS_WIDTH=480`, `CANVAS_HEIGHT=800`,
    /// `SHOW_DENSITY=false`, no calendar ids.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let start_raw = lookup("DAY_START").unwrap_or_else(|| "08:00".to_owned());
        let end_raw = lookup("DAY_END").unwrap_or_else(|| "21:00".to_owned());
        let start = parse_time_of_day("DAY_START", &start_raw)?;
        let end = parse_time_of_day("DAY_END", &end_raw)?;
        if start >= end {
            return Err(ConfigError::InvalidWindow { start: start_raw, end: end_raw });
        }

        Ok(Self {
            window: DayWindow::new(start, end),
            canvas_width: parse_dimension("CANVAS_WIDTH", lookup("CANVAS_WIDTH"), 480)?,
            canvas_height: parse_dimension("CANVAS_HEIGHT", lookup("CANVAS_HEIGHT"), 800)?,
            show_density: parse_flag("SHOW_DENSITY", lookup("SHOW_DENSITY"))?,
            calendar_ids: parse_calendar_ids(lookup("CALENDAR_IDS")),
        })
    }
}

fn parse_time_of_day(name: &str, value: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidValue {
        name: name.to_owned(),
        value: value.to_owned(),
        reason: reason.to_owned(),
    };

    let (hours, minutes) = value.trim().split_once(':').ok_or_else(|| invalid("expected HH:MM"))?;
    let hours: u32 = hours.parse().map_err(|_| invalid("hours are not a number"))?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid("minutes are not a number"))?;
    if hours > 24 || minutes > 59 || hours * 60 + minutes > 24 * 60 {
        return Err(invalid("time of day out of range"));
    }
    Ok(hours * 60 + minutes)
}

fn parse_dimension(name: &str, value: Option<String>, default: i32) -> Result<i32, ConfigError> {
    let Some(value) = value else {
        return Ok(default);
    };
    match value.trim().parse::<i32>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(ConfigError::InvalidValue {
            name: name.to_owned(),
            value,
            reason: "expected a positive integer".to_owned(),
        }),
    }
}

fn parse_flag(name: &str, value: Option<String>) -> Result<bool, ConfigError> {
    let Some(value) = value else {
        return Ok(false);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name: name.to_owned(),
            value,
            reason: "expected a boolean".to_owned(),
        }),
    }
}

fn parse_calendar_ids(value: Option<String>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Seeds the process environment from `path` (default `./.env`).
///
/// A missing file is not an error. Variables already present in the environment are left
/// untouched, so the real environment always wins over the file.
pub fn load_env_file(path: Option<&Path>) -> Result<(), ConfigError> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from(".env"));
    if !path.is_file() {
        return Ok(());
    }

    let content = fs::read_to_string(&path)
        .map_err(|err| ConfigError::Io { file: path.clone(), reason: err.to_string() })?;
    for (key, value) in parse_env_entries(&path, &content)? {
        if std::env::var_os(&key).is_none() {
            std::env::set_var(&key, &value);
        }
    }
    Ok(())
}

/// Parses `KEY=VALUE` lines; blank lines and `#` comments are skipped, quotes are stripped.
fn parse_env_entries(path: &Path, content: &str) -> Result<Vec<(String, String)>, ConfigError> {
    let mut entries = Vec::new();
    for raw_line in content.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            return Err(ConfigError::InvalidEnvLine {
                file: path.to_path_buf(),
                line: raw_line.to_owned(),
            });
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(ConfigError::InvalidEnvLine {
                file: path.to_path_buf(),
                line: raw_line.to_owned(),
            });
        }
        let value = value.trim().trim_matches('"').trim_matches('\'');
        entries.push((key.to_owned(), value.to_owned()));
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::path::Path;

    use rstest::rstest;

    use super::{parse_env_entries, AppConfig, ConfigError};

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn empty_environment_yields_the_default_config() {
        let config = AppConfig::from_lookup(|_| None).expect("config");

        assert_eq!(config.window().start_minute(), 8 * 60);
        assert_eq!(config.window().end_minute(), 21 * 60);
        assert_eq!(config.metrics().canvas_width, 480);
        assert_eq!(config.metrics().canvas_height, 800);
        assert!(!config.show_density());
        assert!(config.calendar_ids().is_empty());
    }

    #[test]
    fn explicit_values_override_the_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            ("DAY_START", "06:30"),
            ("DAY_END", "22:00"),
            ("CANVAS_WIDTH", "800"),
            ("CANVAS_HEIGHT", "600"),
            ("SHOW_DENSITY", "true"),
            ("CALENDAR_IDS", "primary, work@example.com ,, "),
        ]))
        .expect("config");

        assert_eq!(config.window().start_minute(), 6 * 60 + 30);
        assert_eq!(config.window().end_minute(), 22 * 60);
        assert_eq!(config.metrics().canvas_width, 800);
        assert!(config.show_density());
        assert_eq!(config.calendar_ids(), ["primary", "work@example.com"]);
    }

    #[rstest]
    #[case::no_colon("0800")]
    #[case::words("eight")]
    #[case::minutes_out_of_range("08:75")]
    #[case::hours_out_of_range("25:00")]
    fn malformed_times_are_rejected(#[case] value: &str) {
        let err = AppConfig::from_lookup(lookup(&[("DAY_START", value)])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref name, .. } if name == "DAY_START"));
    }

    #[test]
    fn inverted_window_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("DAY_START", "21:00"), ("DAY_END", "08:00")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWindow { .. }));
    }

    #[rstest]
    #[case::one("1", true)]
    #[case::yes("YES", true)]
    #[case::on("on", true)]
    #[case::zero("0", false)]
    #[case::off("off", false)]
    #[case::empty("", false)]
    fn density_flag_accepts_common_spellings(#[case] value: &str, #[case] expected: bool) {
        let config = AppConfig::from_lookup(lookup(&[("SHOW_DENSITY", value)])).expect("config");
        assert_eq!(config.show_density(), expected);
    }

    #[test]
    fn unknown_flag_spellings_are_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("SHOW_DENSITY", "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref name, .. } if name == "SHOW_DENSITY"));
    }

    #[test]
    fn zero_canvas_dimensions_are_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("CANVAS_WIDTH", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref name, .. } if name == "CANVAS_WIDTH"));
    }

    #[test]
    fn env_entries_skip_comments_and_strip_quotes() {
        let content = "# comment\n\nDAY_START=09:00\nNAME=\"quoted value\"\nOTHER='single'\n";
        let entries = parse_env_entries(Path::new(".env"), content).expect("entries");

        assert_eq!(
            entries,
            vec![
                ("DAY_START".to_owned(), "09:00".to_owned()),
                ("NAME".to_owned(), "quoted value".to_owned()),
                ("OTHER".to_owned(), "single".to_owned()),
            ]
        );
    }

    #[test]
    fn env_lines_without_an_equals_sign_are_rejected() {
        let err = parse_env_entries(Path::new(".env"), "JUSTAKEY\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvLine { .. }));
    }

    #[test]
    fn env_lines_with_an_empty_key_are_rejected() {
        let err = parse_env_entries(Path::new(".env"), "=value\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvLine { .. }));
    }
}
