//! TOML-based dashboard configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Top-level dashboard configuration parsed from TOML.
///
/// All fields have defaults matching the baseline household. Load from
/// TOML with [`DashboardConfig::from_toml_file`] or use
/// [`DashboardConfig::baseline`] for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    /// Household-level parameters.
    #[serde(default)]
    pub house: HouseConfig,
    /// Simulation window and draw parameters.
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Display names per outlet, paired (label, device). Must supply exactly
    /// `house.outlet_count` entries.
    #[serde(default = "default_outlets")]
    pub outlets: Vec<OutletNames>,
}

/// Household-level parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HouseConfig {
    /// Number of monitored outlets (must be > 0).
    pub outlet_count: usize,
    /// Flat price per kWh used for billing.
    pub tariff_rate: f64,
}

impl Default for HouseConfig {
    fn default() -> Self {
        Self {
            outlet_count: 5,
            tariff_rate: 80.0,
        }
    }
}

/// Simulation window and draw parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Number of history days per series (must be > 0).
    pub days: usize,
    /// Lower bound of the daily draw (kWh, inclusive).
    pub min_kwh: f64,
    /// Upper bound of the daily draw (kWh, inclusive).
    pub max_kwh: f64,
    /// Master random seed.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            days: 30,
            min_kwh: 0.5,
            max_kwh: 3.5,
            seed: 42,
        }
    }
}

/// One outlet's display names: a label and the device plugged into it.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutletNames {
    /// Outlet display label.
    pub label: String,
    /// Name of the device behind the outlet.
    pub device: String,
}

impl OutletNames {
    fn pair(label: &str, device: &str) -> Self {
        Self {
            label: label.to_string(),
            device: device.to_string(),
        }
    }
}

fn default_outlets() -> Vec<OutletNames> {
    vec![
        OutletNames::pair("Outlet 1", "Kettle"),
        OutletNames::pair("Outlet 2", "Refrigerator"),
        OutletNames::pair("Outlet 3", "Washing machine"),
        OutletNames::pair("Outlet 4", "Microwave"),
        OutletNames::pair("Outlet 5", "Computer"),
    ]
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"simulation.days"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl DashboardConfig {
    /// Returns the baseline household (the original five-outlet setup).
    pub fn baseline() -> Self {
        Self {
            house: HouseConfig::default(),
            simulation: SimulationConfig::default(),
            outlets: default_outlets(),
        }
    }

    /// Returns the studio preset: three outlets on a pricier tariff.
    pub fn studio() -> Self {
        Self {
            house: HouseConfig {
                outlet_count: 3,
                tariff_rate: 95.0,
            },
            simulation: SimulationConfig::default(),
            outlets: vec![
                OutletNames::pair("Outlet 1", "Space heater"),
                OutletNames::pair("Outlet 2", "Laptop"),
                OutletNames::pair("Outlet 3", "Router"),
            ],
        }
    }

    /// Returns the workshop preset: eight outlets with a wider draw range.
    pub fn workshop() -> Self {
        Self {
            house: HouseConfig {
                outlet_count: 8,
                tariff_rate: 80.0,
            },
            simulation: SimulationConfig {
                min_kwh: 0.2,
                max_kwh: 5.0,
                ..SimulationConfig::default()
            },
            outlets: vec![
                OutletNames::pair("Outlet 1", "Table saw"),
                OutletNames::pair("Outlet 2", "Compressor"),
                OutletNames::pair("Outlet 3", "Bench grinder"),
                OutletNames::pair("Outlet 4", "Dust collector"),
                OutletNames::pair("Outlet 5", "Drill press"),
                OutletNames::pair("Outlet 6", "Soldering station"),
                OutletNames::pair("Outlet 7", "Shop lights"),
                OutletNames::pair("Outlet 8", "Battery charger"),
            ],
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "studio", "workshop"];

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "studio" => Ok(Self::studio()),
            "workshop" => Ok(Self::workshop()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let h = &self.house;
        if h.outlet_count == 0 {
            errors.push(ConfigError {
                field: "house.outlet_count".into(),
                message: "must be > 0".into(),
            });
        }
        if h.tariff_rate < 0.0 {
            errors.push(ConfigError {
                field: "house.tariff_rate".into(),
                message: "must be >= 0".into(),
            });
        }

        let s = &self.simulation;
        if s.days == 0 {
            errors.push(ConfigError {
                field: "simulation.days".into(),
                message: "must be > 0".into(),
            });
        }
        if s.min_kwh < 0.0 {
            errors.push(ConfigError {
                field: "simulation.min_kwh".into(),
                message: "must be >= 0".into(),
            });
        }
        if s.min_kwh > s.max_kwh {
            errors.push(ConfigError {
                field: "simulation.min_kwh".into(),
                message: "must be <= simulation.max_kwh".into(),
            });
        }

        if self.outlets.len() != h.outlet_count {
            errors.push(ConfigError {
                field: "outlets".into(),
                message: format!(
                    "expected {} (label, device) pairs, got {}",
                    h.outlet_count,
                    self.outlets.len()
                ),
            });
        }

        errors
    }
}
