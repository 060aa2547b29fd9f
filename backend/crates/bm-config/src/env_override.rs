use crate::LogLevel;

use std::str::FromStr;

/// A setting that can be replaced from a `BM_*` environment variable.
/// Values that do not parse leave the setting alone.
pub(crate) trait EnvOverride {
    fn override_with(&mut self, raw: String);
}

impl EnvOverride for String {
    fn override_with(&mut self, raw: String) {
        *self = raw;
    }
}

impl EnvOverride for Option<String> {
    fn override_with(&mut self, raw: String) {
        *self = Some(raw);
    }
}

impl EnvOverride for bool {
    fn override_with(&mut self, raw: String) {
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => *self = true,
            "false" | "0" => *self = false,
            _ => {}
        }
    }
}

macro_rules! parsed_override {
    ($($ty:ty),*) => {$(
        impl EnvOverride for $ty {
            fn override_with(&mut self, raw: String) {
                if let Ok(parsed) = <$ty>::from_str(raw.trim()) {
                    *self = parsed;
                }
            }
        }
    )*};
}

parsed_override!(u16, u32, u64, usize, LogLevel);

pub(crate) fn apply<T: EnvOverride>(var: &str, target: &mut T) {
    if let Ok(raw) = std::env::var(var) {
        target.override_with(raw);
    }
}
