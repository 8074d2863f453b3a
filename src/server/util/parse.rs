use crate::server::error::config::ConfigError;

/// Parses a Discord snowflake id from an environment variable value.
///
/// # Arguments
/// - `name` - Environment variable name, used in the error
/// - `value` - The string to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed id
/// - `Err(ConfigError::InvalidEnvVar)` - Value is not a valid non-zero `u64`
pub fn parse_id(name: &str, value: &str) -> Result<u64, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason,
    };

    match value.trim().parse::<u64>() {
        Ok(0) => Err(invalid("id must not be zero".to_string())),
        Ok(id) => Ok(id),
        Err(e) => Err(invalid(e.to_string())),
    }
}

/// Parses a comma-separated list of Discord snowflake ids.
///
/// Empty entries are skipped, so trailing commas and blank values are accepted.
///
/// # Arguments
/// - `name` - Environment variable name, used in the error
/// - `value` - Comma-separated ids
///
/// # Returns
/// - `Ok(Vec<u64>)` - Parsed ids in the order given
/// - `Err(ConfigError::InvalidEnvVar)` - An entry is not a valid `u64`
pub fn parse_id_list(name: &str, value: &str) -> Result<Vec<u64>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| parse_id(name, entry))
        .collect()
}
