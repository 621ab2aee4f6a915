
use std::env;

use tempfile::TempDir;

/// Variables read by `Config::load`; cleared so the host environment cannot leak in.
const CONFIG_ENV_VARS: [&str; 10] = [
    "TG_SERVER_HOST",
    "TG_SERVER_PORT",
    "TG_DATABASE_PATH",
    "TG_LOG_LEVEL",
    "TG_LOG_COLORED",
    "TG_LOG_FILE",
    "JWT_ACCESS_SECRET",
    "JWT_REFRESH_SECRET",
    "JWT_ACCESS_EXPIRATION",
    "JWT_REFRESH_EXPIRATION",
];

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

/// Temp config dir with TG_CONFIG_DIR pointing at it and a clean environment
pub(crate) struct TestEnv {
    pub(crate) dir: TempDir,
    _guards: Vec<EnvGuard>,
}

pub(crate) fn setup_config_dir() -> TestEnv {
    let dir = TempDir::new().unwrap();
    let mut guards = vec![EnvGuard::set("TG_CONFIG_DIR", dir.path().to_str().unwrap())];
    guards.extend(CONFIG_ENV_VARS.iter().map(|&key| EnvGuard::remove(key)));
    TestEnv {
        dir,
        _guards: guards,
    }
}

pub(crate) fn set_secrets() -> (EnvGuard, EnvGuard) {
    (
        EnvGuard::set("JWT_ACCESS_SECRET", "access-secret"),
        EnvGuard::set("JWT_REFRESH_SECRET", "refresh-secret"),
    )
}
