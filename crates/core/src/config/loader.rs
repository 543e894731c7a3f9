//! Configuration file loading

use super::schema::{ConfigSchema, ProfileConfig};
use crate::error::{Error, Result, ResultExt};
use std::path::{Path, PathBuf};

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    /// Parsed settings
    pub schema: ConfigSchema,
    /// File the settings came from, if any
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicit path must exist. Without one, the standard locations are
    /// searched and defaults are used if none is present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => return Err(Error::config_not_found(p)),
            Some(p) => Some(p.to_path_buf()),
            None => find_config_file(),
        };

        let schema = if let Some(ref p) = config_path {
            load_config_file(p)?
        } else {
            ConfigSchema::default()
        };

        validate(&schema)
            .context(format!("loading {}", describe(config_path.as_deref())))?;

        Ok(Self {
            schema,
            path: config_path,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let schema: ConfigSchema = toml::from_str(content)?;
        validate(&schema)?;
        Ok(Self { schema, path: None })
    }

    /// Load with defaults only (no file)
    pub fn default() -> Self {
        Self {
            schema: ConfigSchema::default(),
            path: None,
        }
    }
}

fn describe(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in defaults".to_string())
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    let candidates = [".tripcalc.toml", "tripcalc.toml", ".config/tripcalc.toml"];

    for candidate in candidates {
        if Path::new(candidate).exists() {
            return Some(PathBuf::from(candidate));
        }
    }

    dirs::config_dir()
        .map(|dir| dir.join("tripcalc").join("config.toml"))
        .filter(|p| p.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::config(format!("Failed to read config file {}: {}", path.display(), e)).with_source(e)
    })?;

    toml::from_str(&content).map_err(|e| {
        Error::from(e).with_context(format!("parsing {}", path.display()))
    })
}

/// Check the profile table for values that would make every row fail
fn validate(schema: &ConfigSchema) -> Result<()> {
    let vehicles = &schema.vehicles;
    for (name, profile) in [
        ("motorcycle", &vehicles.motorcycle),
        ("car", &vehicles.car),
        ("pickup", &vehicles.pickup),
    ] {
        validate_profile(name, profile)?;
    }
    Ok(())
}

fn validate_profile(name: &str, profile: &ProfileConfig) -> Result<()> {
    if !profile.speed_kmh.is_finite() || profile.speed_kmh <= 0.0 {
        return Err(Error::config_validation(format!(
            "vehicles.{}.speed_kmh must be greater than 0, got {}",
            name, profile.speed_kmh
        ))
        .with_suggestion("Use the average travel speed in km/h, e.g. speed_kmh = 80"));
    }

    if !profile.liters_per_100km.is_finite() || profile.liters_per_100km < 0.0 {
        return Err(Error::config_validation(format!(
            "vehicles.{}.liters_per_100km must be 0 or more, got {}",
            name, profile.liters_per_100km
        ))
        .with_suggestion("Use the consumption in liters per 100 km, e.g. liters_per_100km = 10"));
    }

    Ok(())
}
