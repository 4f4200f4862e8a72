//! Console process configuration.
//!
//! Values come from `MROSC_*` environment variables first. When
//! `MROSC_CONSOLE_CONFIG` names a YAML file, any keys it sets win over the
//! environment. Unknown YAML keys are rejected.
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";
pub const DEFAULT_METRICS_BIND: &str = "0.0.0.0:9090";

/// Console configuration sourced from environment variables.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub bind_addr: SocketAddr,
    pub metrics_bind: SocketAddr,
    pub instance_id: String,
    /// YAML permission tables replacing the built-in ones.
    pub permissions_file: Option<PathBuf>,
    /// YAML/JSON rows loaded into the in-memory store.
    pub seed_file: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConsoleConfigOverride {
    bind_addr: Option<String>,
    metrics_bind: Option<String>,
    instance_id: Option<String>,
    permissions_file: Option<PathBuf>,
    seed_file: Option<PathBuf>,
}

impl ConsoleConfig {
    /// Build the configuration from the process environment.
    ///
    /// # What it does
    /// Reads `MROSC_CONSOLE_BIND`, `MROSC_METRICS_BIND`, `MROSC_INSTANCE_ID`,
    /// `MROSC_PERMISSIONS_FILE` and `MROSC_SEED_FILE`, falling back to
    /// [`DEFAULT_BIND`], [`DEFAULT_METRICS_BIND`] and `local` when unset.
    ///
    /// # Errors
    /// - Either bind variable is set but is not a socket address.
    pub fn from_env() -> Result<Self> {
        let bind_addr = std::env::var("MROSC_CONSOLE_BIND")
            .unwrap_or_else(|_| DEFAULT_BIND.to_string())
            .parse()
            .with_context(|| "parse MROSC_CONSOLE_BIND")?;
        let metrics_bind = std::env::var("MROSC_METRICS_BIND")
            .unwrap_or_else(|_| DEFAULT_METRICS_BIND.to_string())
            .parse()
            .with_context(|| "parse MROSC_METRICS_BIND")?;
        let instance_id =
            std::env::var("MROSC_INSTANCE_ID").unwrap_or_else(|_| "local".to_string());
        Ok(Self {
            bind_addr,
            metrics_bind,
            instance_id,
            permissions_file: std::env::var_os("MROSC_PERMISSIONS_FILE").map(PathBuf::from),
            seed_file: std::env::var_os("MROSC_SEED_FILE").map(PathBuf::from),
        })
    }

    /// [`ConsoleConfig::from_env`], then the YAML file named by
    /// `MROSC_CONSOLE_CONFIG` on top.
    ///
    /// # Errors
    /// - Anything [`ConsoleConfig::from_env`] rejects.
    /// - The file cannot be read, is not valid YAML, has an unknown key or
    ///   holds an unparsable address.
    pub fn from_env_or_yaml() -> Result<Self> {
        let mut config = Self::from_env()?;
        if let Ok(path) = std::env::var("MROSC_CONSOLE_CONFIG") {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("read MROSC_CONSOLE_CONFIG: {path}"))?;
            config.apply_yaml(&contents)?;
        }
        Ok(config)
    }

    // Only keys present in the document overwrite.
    fn apply_yaml(&mut self, contents: &str) -> Result<()> {
        let override_cfg: ConsoleConfigOverride =
            serde_yaml::from_str(contents).with_context(|| "parse console config yaml")?;
        if let Some(value) = override_cfg.bind_addr {
            self.bind_addr = value.parse().with_context(|| "parse bind_addr")?;
        }
        if let Some(value) = override_cfg.metrics_bind {
            self.metrics_bind = value.parse().with_context(|| "parse metrics_bind")?;
        }
        if let Some(value) = override_cfg.instance_id {
            self.instance_id = value;
        }
        if let Some(value) = override_cfg.permissions_file {
            self.permissions_file = Some(value);
        }
        if let Some(value) = override_cfg.seed_file {
            self.seed_file = Some(value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_env::ScopedEnv;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    #[serial]
    fn defaults_without_env() {
        let _env = ScopedEnv::new()
            .unset("MROSC_CONSOLE_BIND")
            .unset("MROSC_METRICS_BIND")
            .unset("MROSC_PERMISSIONS_FILE")
            .unset("MROSC_SEED_FILE")
            .unset("MROSC_INSTANCE_ID");

        let config = ConsoleConfig::from_env().expect("config");
        assert_eq!(config.bind_addr, DEFAULT_BIND.parse().expect("addr"));
        assert_eq!(config.metrics_bind, DEFAULT_METRICS_BIND.parse().expect("addr"));
        assert_eq!(config.instance_id, "local");
        assert!(config.permissions_file.is_none());
        assert!(config.seed_file.is_none());
    }

    #[test]
    #[serial]
    fn env_overrides_defaults() {
        let _env = ScopedEnv::new()
            .set("MROSC_CONSOLE_BIND", "127.0.0.1:18080")
            .set("MROSC_SEED_FILE", "/srv/seed.yaml");
        let config = ConsoleConfig::from_env().expect("config");
        assert_eq!(config.bind_addr.port(), 18080);
        assert_eq!(config.seed_file, Some(PathBuf::from("/srv/seed.yaml")));
    }

    #[test]
    #[serial]
    fn invalid_bind_is_an_error() {
        let _env = ScopedEnv::new().set("MROSC_CONSOLE_BIND", "not-an-addr");
        assert!(ConsoleConfig::from_env().is_err());
    }

    #[test]
    #[serial]
    fn yaml_file_overrides_env() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(
            file,
            "bind_addr: 127.0.0.1:9000\ninstance_id: prefeitura\npermissions_file: /etc/mrosc/permissions.yaml"
        )
        .expect("write");
        let path = file.path().to_string_lossy().to_string();
        let _env = ScopedEnv::new()
            .unset("MROSC_CONSOLE_BIND")
            .set("MROSC_CONSOLE_CONFIG", &path);

        let config = ConsoleConfig::from_env_or_yaml().expect("config");
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.instance_id, "prefeitura");
        assert_eq!(
            config.permissions_file,
            Some(PathBuf::from("/etc/mrosc/permissions.yaml"))
        );
    }

    #[test]
    fn unknown_yaml_keys_are_rejected() {
        let mut config = ConsoleConfig {
            bind_addr: DEFAULT_BIND.parse().expect("addr"),
            metrics_bind: DEFAULT_METRICS_BIND.parse().expect("addr"),
            instance_id: "local".to_string(),
            permissions_file: None,
            seed_file: None,
        };
        assert!(config.apply_yaml("region_id: x").is_err());
    }
}
