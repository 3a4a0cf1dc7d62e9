//! Configuration loader with optional TOML file and environment overrides
//!
//! Precedence, lowest to highest: built-in defaults, the TOML file (when
//! one is given), environment variables.

use super::schema::ReportsConfig;
use super::secret::secret_string;
use crate::domain::errors::ReportError;
use crate::domain::result::Result;
use crate::domain::ReportLanguage;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads configuration from the process environment
///
/// This function:
/// 1. Starts from defaults, or reads the TOML file when `path` is given
/// 2. Performs environment variable substitution (`${VAR}` syntax) in the file
/// 3. Applies the environment variable overrides (`OUTDIR`, `TOP_N`, `MONGO_*`, ...)
/// 4. Validates the configuration, including credential completeness
///
/// # Errors
///
/// Returns [`ReportError::Configuration`] if the file cannot be read or
/// parsed, an override has an invalid value, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use listing_reports::config::load_config;
///
/// let config = load_config(None).expect("Failed to load config");
/// println!("Writing reports to {}", config.output.directory.display());
/// ```
pub fn load_config(path: Option<&Path>) -> Result<ReportsConfig> {
    load_config_with(path, |name| std::env::var(name).ok())
}

/// Same as [`load_config`], reading variables through `lookup`
pub fn load_config_with<F>(path: Option<&Path>, lookup: F) -> Result<ReportsConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => read_config_file(path, &lookup)?,
        None => ReportsConfig::default(),
    };

    apply_env_overrides(&mut config, &lookup)?;

    config.validate().map_err(|e| {
        ReportError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

fn read_config_file<F>(path: &Path, lookup: &F) -> Result<ReportsConfig>
where
    F: Fn(&str) -> Option<String>,
{
    if !path.exists() {
        return Err(ReportError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ReportError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents, lookup)?;

    Ok(toml::from_str(&contents)?)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars<F>(input: &str, lookup: &F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ReportError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match lookup(var_name) {
                Some(value) => {
                    processed_line = processed_line.replace(&format!("${{{var_name}}}"), &value);
                }
                None => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(ReportError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(lines.join("\n"))
}

/// Applies the job's environment variables on top of `config`
///
/// Values are trimmed; an empty value counts as unset.
fn apply_env_overrides<F>(config: &mut ReportsConfig, lookup: &F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| {
        lookup(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    // Output overrides
    if let Some(val) = var("OUTDIR") {
        config.output.directory = PathBuf::from(val);
    }
    if let Some(val) = var("TOP_N") {
        config.output.top_n = val.parse().map_err(|_| {
            ReportError::Configuration(format!("TOP_N must be a positive integer, got '{val}'"))
        })?;
    }
    if let Some(val) = var("NETTOYER_OUTPUTS") {
        config.output.clean_before_write = parse_flag(&val);
    }
    if let Some(val) = var("REPORT_LANG") {
        config.output.language = val
            .parse::<ReportLanguage>()
            .map_err(ReportError::Configuration)?;
    }
    if let Some(val) = var("FLOAT_PRECISION") {
        let precision = val.parse().map_err(|_| {
            ReportError::Configuration(format!(
                "FLOAT_PRECISION must be a non-negative integer, got '{val}'"
            ))
        })?;
        config.output.float_precision = Some(precision);
    }

    // MongoDB overrides
    if let Some(val) = var("MONGO_URI") {
        config.mongodb.uri = Some(secret_string(val));
    }
    if let Some(val) = var("MONGO_HOST") {
        config.mongodb.host = val;
    }
    if let Some(val) = var("MONGO_PORT") {
        config.mongodb.port = val.parse().map_err(|_| {
            ReportError::Configuration(format!("MONGO_PORT must be a valid port, got '{val}'"))
        })?;
    }
    if let Some(val) = var("MONGO_AUTH_SOURCE") {
        config.mongodb.auth_source = val;
    }
    if let Some(val) = var("MONGO_USER") {
        config.mongodb.username = Some(val);
    }
    if let Some(val) = var("MONGO_PASS") {
        config.mongodb.password = Some(secret_string(val));
    }
    if let Some(val) = var("MONGO_DB") {
        config.mongodb.database = val;
    }
    if let Some(val) = var("MONGO_COLLECTION") {
        config.mongodb.collection = val;
    }

    Ok(())
}

/// `"1"` and `"true"` (any case) enable a flag, anything else disables it
fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
