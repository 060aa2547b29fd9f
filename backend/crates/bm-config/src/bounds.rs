use crate::{ConfigError, ConfigErrorResult};

use std::fmt::Display;
use std::ops::RangeInclusive;

/// Reject `value` for the dotted `key` unless it lies in `allowed`.
#[track_caller]
pub(crate) fn within<T>(key: &str, value: T, allowed: RangeInclusive<T>) -> ConfigErrorResult<()>
where
    T: PartialOrd + Display,
{
    if allowed.contains(&value) {
        return Ok(());
    }

    Err(ConfigError::out_of_range(format!(
        "{key} must be {}-{}, got {value}",
        allowed.start(),
        allowed.end()
    )))
}

/// Relative and free of `..`, so it cannot leave the config directory.
#[track_caller]
pub(crate) fn contained(key: &str, path: &str) -> ConfigErrorResult<()> {
    if std::path::Path::new(path).is_absolute() || path.contains("..") {
        return Err(ConfigError::config(format!(
            "{key} must be relative and cannot contain '..'"
        )));
    }
    Ok(())
}
