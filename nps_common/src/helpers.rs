use std::{env, str::FromStr};

/// Parse a boolean flag from a string value, or return the given default value otherwise.
pub fn parse_boolean_flag(value: Option<String>, default: bool) -> bool {
    let value = match value {
        Some(v) => v,
        None => return default,
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

/// Reads the boolean flag in environment variable `name`, falling back to `default` if it is unset or unrecognised.
pub fn env_flag(name: &str, default: bool) -> bool {
    parse_boolean_flag(env::var(name).ok(), default)
}

/// Reads and parses environment variable `name`.
///
/// Returns `None` if the variable is not set, and `Some(Err(..))` with a human-readable reason if it could not be
/// parsed, so that callers can log the problem before falling back to a default.
pub fn env_parsed<T>(name: &str) -> Option<Result<T, String>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env::var(name).ok().map(|s| s.trim().parse::<T>().map_err(|e| format!("{s} is not a valid value for {name}. {e}")))
}
