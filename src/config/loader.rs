//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::AnonymoConfig;
use crate::config::secret_string;
use crate::domain::errors::AnonymoError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into AnonymoConfig
/// 4. Applies environment variable overrides (ANONYMO_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns a configuration error if the file is missing or unreadable, a
/// referenced variable is unset, parsing fails or validation fails.
///
/// # Examples
///
/// ```no_run
/// use anonymo::config::loader::load_config;
///
/// let config = load_config("anonymo.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<AnonymoConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(AnonymoError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        AnonymoError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: AnonymoConfig = toml::from_str(&contents)
        .map_err(|e| AnonymoError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    finish(&mut config)?;
    Ok(config)
}

/// Loads the configuration file if it exists, otherwise starts from defaults
///
/// Environment overrides and validation apply in both cases.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<AnonymoConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(path = %path.display(), "No configuration file, using defaults");
    let mut config = AnonymoConfig::default();
    finish(&mut config)?;
    Ok(config)
}

fn finish(config: &mut AnonymoConfig) -> Result<()> {
    apply_env_overrides(config)?;
    config.validate().map_err(|e| {
        AnonymoError::Configuration(format!("Configuration validation failed: {}", e))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| AnonymoError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(AnonymoError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the ANONYMO_* prefix
///
/// Variables follow the pattern ANONYMO_<SECTION>_<KEY>, for example
/// ANONYMO_PREVIEW_PAGE_SIZE. Database overrides only apply when a
/// `[database]` section is present.
fn apply_env_overrides(config: &mut AnonymoConfig) -> Result<()> {
    if let Ok(val) = std::env::var("ANONYMO_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Some(ref mut db) = config.database {
        if let Ok(val) = std::env::var("ANONYMO_DATABASE_KIND") {
            db.kind = val.parse()?;
        }
        if let Ok(val) = std::env::var("ANONYMO_DATABASE_HOST") {
            db.host = val;
        }
        if let Ok(val) = std::env::var("ANONYMO_DATABASE_PORT") {
            db.port = val;
        }
        if let Ok(val) = std::env::var("ANONYMO_DATABASE_USERNAME") {
            db.username = val;
        }
        if let Ok(val) = std::env::var("ANONYMO_DATABASE_PASSWORD") {
            db.password = secret_string(val);
        }
        if let Ok(val) = std::env::var("ANONYMO_DATABASE_NAME") {
            db.database = val;
        }
        if let Ok(val) = std::env::var("ANONYMO_DATABASE_MAX_CONNECTIONS") {
            if let Ok(max) = val.parse() {
                db.max_connections = max;
            }
        }
    }

    if let Ok(val) = std::env::var("ANONYMO_ANONYMIZATION_METHOD") {
        config.anonymization.method = val.parse().map_err(|e: AnonymoError| {
            AnonymoError::Configuration(format!("Invalid ANONYMO_ANONYMIZATION_METHOD: {e}"))
        })?;
    }
    if let Ok(val) = std::env::var("ANONYMO_ANONYMIZATION_SALT") {
        config.anonymization.salt = Some(secret_string(val));
    }

    if let Ok(val) = std::env::var("ANONYMO_PREVIEW_PAGE_SIZE") {
        if let Ok(size) = val.parse() {
            config.preview.page_size = size;
        }
    }

    if let Ok(val) = std::env::var("ANONYMO_EXPORT_OUTPUT_DIR") {
        config.export.output_dir = PathBuf::from(val);
    }

    if let Ok(val) = std::env::var("ANONYMO_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("ANONYMO_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}
