
use std::ffi::OsString;
use std::path::Path;

use tempfile::TempDir;

/// Sets or clears one environment variable and puts the previous value
/// back on drop. Tests touching the environment run `#[serial]`.
pub(crate) struct EnvGuard {
    key: &'static str,
    previous: Option<OsString>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        Self::swap(key, Some(value.into()))
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        Self::swap(key, None)
    }

    fn swap(key: &'static str, value: Option<OsString>) -> Self {
        let previous = std::env::var_os(key);
        write_env(key, value.as_ref());
        Self { key, previous }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        write_env(self.key, self.previous.as_ref());
    }
}

fn write_env(key: &str, value: Option<&OsString>) {
    // SAFETY: callers are #[serial], no other thread reads the environment
    unsafe {
        match value {
            Some(value) => std::env::set_var(key, value),
            None => std::env::remove_var(key),
        }
    }
}

/// Throwaway config directory that `BM_CONFIG_DIR` points at while alive
pub(crate) struct ConfigDir {
    temp: TempDir,
    _env: EnvGuard,
}

impl ConfigDir {
    pub(crate) fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let env = EnvGuard::set("BM_CONFIG_DIR", temp.path().to_str().unwrap());
        Self { temp, _env: env }
    }

    pub(crate) fn path(&self) -> &Path {
        self.temp.path()
    }

    pub(crate) fn write(&self, name: &str, contents: &str) {
        std::fs::write(self.path().join(name), contents).unwrap();
    }
}
