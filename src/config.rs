//! Configuration management for hexpub.
//!
//! Reads build variables from a .env file and environment variables.
//! Environment variables take precedence over .env file.

use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Default build directory of the firmware toolchain.
pub const DEFAULT_BUILD_DIR: &str = ".pio/build/default";

/// Default program name (the hex image is `<PROGNAME>.hex`).
pub const DEFAULT_PROGNAME: &str = "firmware";

/// Variables used to expand post-action hook keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Build output directory (`BUILD_DIR`)
    pub build_dir: String,
    /// Program name (`PROGNAME`)
    pub progname: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            build_dir: DEFAULT_BUILD_DIR.to_string(),
            progname: DEFAULT_PROGNAME.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `<base_dir>/.env` and the environment.
    pub fn load(base_dir: &Path) -> Self {
        let mut vars = HashMap::new();

        let env_path = base_dir.join(".env");
        if env_path.exists() {
            match dotenvy::from_path_iter(&env_path) {
                Ok(iter) => {
                    for item in iter {
                        match item {
                            Ok((key, value)) => {
                                vars.insert(key, value);
                            }
                            Err(e) => {
                                eprintln!("[WARN] Skipping bad line in {}: {}", env_path.display(), e)
                            }
                        }
                    }
                }
                Err(e) => eprintln!("[WARN] Failed to read {}: {}", env_path.display(), e),
            }
        }

        // Environment variables override .env file
        vars.extend(std::env::vars());

        Self::from_vars(&vars)
    }

    /// Build a config from a variable map, falling back to defaults.
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        let defaults = Self::default();
        Self {
            build_dir: vars.get("BUILD_DIR").cloned().unwrap_or(defaults.build_dir),
            progname: vars.get("PROGNAME").cloned().unwrap_or(defaults.progname),
        }
    }

    /// Look up a hook-key variable by name.
    pub fn var(&self, name: &str) -> Option<&str> {
        match name {
            "BUILD_DIR" => Some(&self.build_dir),
            "PROGNAME" => Some(&self.progname),
            _ => None,
        }
    }

    /// Path of the firmware hex image produced by the build.
    pub fn hex_artifact(&self) -> PathBuf {
        Path::new(&self.build_dir).join(format!("{}.hex", self.progname))
    }

    /// Print configuration for debugging.
    pub fn print(&self) {
        println!("Configuration:");
        println!("  BUILD_DIR: {}", self.build_dir);
        println!("  PROGNAME: {}", self.progname);
        if self.hex_artifact().is_file() {
            println!("  Hex image: FOUND ({})", self.hex_artifact().display());
        } else {
            println!("  Hex image: NOT FOUND (run 'hexpub build -- <command>' first)");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vars_defaults() {
        let config = Config::from_vars(&HashMap::new());
        assert_eq!(config, Config::default());
        assert_eq!(
            config.hex_artifact(),
            PathBuf::from(".pio/build/default/firmware.hex")
        );
    }

    #[test]
    fn test_from_vars_overrides() {
        let vars = HashMap::from([
            ("BUILD_DIR".to_string(), "build".to_string()),
            ("PROGNAME".to_string(), "blinky".to_string()),
        ]);
        let config = Config::from_vars(&vars);
        assert_eq!(config.var("BUILD_DIR"), Some("build"));
        assert_eq!(config.var("PROGNAME"), Some("blinky"));
        assert_eq!(config.var("HOME"), None);
        assert_eq!(config.hex_artifact(), PathBuf::from("build/blinky.hex"));
    }

    fn clear_env() {
        std::env::remove_var("BUILD_DIR");
        std::env::remove_var("PROGNAME");
    }

    #[test]
    #[serial_test::serial]
    fn test_load_reads_dotenv() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".env"),
            "# board settings\nBUILD_DIR=.pio/build/uno\nPROGNAME=\"blinky\"\n",
        )
        .unwrap();

        let config = Config::load(dir.path());

        assert_eq!(config.build_dir, ".pio/build/uno");
        assert_eq!(config.progname, "blinky");
    }

    #[test]
    #[serial_test::serial]
    fn test_environment_overrides_dotenv() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "BUILD_DIR=from-file\nPROGNAME=from-file\n")
            .unwrap();
        std::env::set_var("PROGNAME", "from-env");

        let config = Config::load(dir.path());
        clear_env();

        assert_eq!(config.build_dir, "from-file");
        assert_eq!(config.progname, "from-env");
    }

    #[test]
    #[serial_test::serial]
    fn test_load_skips_malformed_line() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".env"),
            "BUILD_DIR=build\nthis is not valid\nPROGNAME=app\n",
        )
        .unwrap();

        let config = Config::load(dir.path());

        assert_eq!(config.build_dir, "build");
        assert_eq!(config.progname, "app");
    }

    #[test]
    #[serial_test::serial]
    fn test_load_without_dotenv_uses_defaults() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load(dir.path()), Config::default());
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_value(Config::default()).unwrap();
        assert_eq!(json["build_dir"], DEFAULT_BUILD_DIR);
        assert_eq!(json["progname"], DEFAULT_PROGNAME);
    }
}
