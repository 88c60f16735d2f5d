
use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

const OVERRIDE_VARS: [&str; 6] = [
    "FZ_API_BASE_URL",
    "FZ_API_TIMEOUT_SECS",
    "FZ_STORAGE_DIR",
    "FZ_LOG_LEVEL",
    "FZ_LOG_COLORED",
    "FZ_LOG_FILE",
];

/// Temp config dir exported via FZ_CONFIG_DIR, with every FZ_* override cleared.
pub(crate) struct ConfigDir {
    pub(crate) temp: TempDir,
    _dir: EnvGuard,
    _cleared: Vec<EnvGuard>,
}

pub(crate) fn setup_config_dir() -> ConfigDir {
    let temp = TempDir::new().unwrap();
    let dir = EnvGuard::set(crate::CONFIG_DIR_ENV, temp.path().to_str().unwrap());
    let cleared = OVERRIDE_VARS.into_iter().map(EnvGuard::remove).collect();
    ConfigDir {
        temp,
        _dir: dir,
        _cleared: cleared,
    }
}

pub(crate) fn write_config(dir: &ConfigDir, contents: &str) {
    std::fs::write(dir.temp.path().join(crate::CONFIG_FILENAME), contents).unwrap();
}
