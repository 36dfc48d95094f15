use serde::Deserialize;
use figment::{Figment, providers::{Format, Toml, Env}};

pub const CONFIG_FILE: &str = "ems.toml";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Default file name for `ems export`
    pub export_filename: String,
    /// Default file name for `ems template`
    pub template_filename: String,
    pub calendar: CalendarConfig,
}

/// Look-around window used by `ems calendar`
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CalendarConfig {
    /// Whole months shown before the focal month
    pub months_before: u32,
    /// Whole months shown after the focal month
    pub months_after: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_filename: "employees.csv".to_string(),
            template_filename: "employee_template.csv".to_string(),
            calendar: CalendarConfig::default(),
        }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            months_before: 1,
            months_after: 1,
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    /// `ems.toml` in the working directory, overridden by `EMS_` variables.
    /// Nested keys use a double underscore, e.g. `EMS_CALENDAR__MONTHS_AFTER=2`.
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed("EMS_").split("__"))
    }
}
