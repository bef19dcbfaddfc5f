// SPDX-License-Identifier: MPL-2.0
//! Application directory resolution.
//!
//! Two directories matter to the lightbox: the config directory
//! (`settings.toml`) and the data directory (`favorites.json`).
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** passed to the `_with_override()` functions (tests, embedders)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) registered with [`init_cli_overrides`]
//! 3. **Environment variables** (`ICED_LIGHTBOX_DATA_DIR`, `ICED_LIGHTBOX_CONFIG_DIR`)
//! 4. **Platform default** from the `dirs` crate, with [`APP_NAME`] appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
pub const APP_NAME: &str = "IcedLightbox";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "ICED_LIGHTBOX_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_LIGHTBOX_CONFIG_DIR";

/// Directory overrides given on the command line.
#[derive(Debug, Default)]
struct CliOverrides {
    data_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
}

static CLI_OVERRIDES: OnceLock<CliOverrides> = OnceLock::new();

/// Registers the `--data-dir` / `--config-dir` overrides.
///
/// Only the first call takes effect. Returns `false` when overrides were
/// already registered.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) -> bool {
    let registered = CLI_OVERRIDES
        .set(CliOverrides {
            data_dir: data_dir.map(PathBuf::from),
            config_dir: config_dir.map(PathBuf::from),
        })
        .is_ok();
    if !registered {
        log::warn!("CLI directory overrides were already registered; ignoring");
    }
    registered
}

fn env_dir(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn resolve(
    override_path: Option<PathBuf>,
    cli: impl FnOnce(&CliOverrides) -> Option<PathBuf>,
    env_var: &str,
    platform: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    override_path
        .or_else(|| CLI_OVERRIDES.get().and_then(cli))
        .or_else(|| env_dir(env_var))
        .or_else(|| platform().map(|base| base.join(APP_NAME)))
}

/// Returns the data directory (favorites store).
///
/// Platform defaults:
/// - Linux: `~/.local/share/IcedLightbox/`
/// - macOS: `~/Library/Application Support/IcedLightbox/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedLightbox\`
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the data directory, preferring `override_path` when given.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        |cli| cli.data_dir.clone(),
        ENV_DATA_DIR,
        dirs::data_dir,
    )
}

/// Returns the config directory (`settings.toml`).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the config directory, preferring `override_path` when given.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        |cli| cli.config_dir.clone(),
        ENV_CONFIG_DIR,
        dirs::config_dir,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_data_dir_ends_with_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_DATA_DIR);

        if let Some(path) = get_app_data_dir() {
            assert!(path.ends_with(APP_NAME));
            assert!(path.is_absolute());
        }
    }

    #[test]
    fn app_config_dir_ends_with_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(path.ends_with(APP_NAME));
        }
    }

    #[test]
    fn override_path_takes_precedence_over_env_var() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/env/path");

        let override_path = PathBuf::from("/override/path");
        let result = get_app_data_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn env_var_overrides_platform_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/test/config/dir");

        assert_eq!(
            get_app_config_dir(),
            Some(PathBuf::from("/test/config/dir"))
        );

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "");

        if let Some(path) = get_app_data_dir() {
            assert!(path.ends_with(APP_NAME));
        }

        std::env::remove_var(ENV_DATA_DIR);
    }
}
