use serde::{Deserialize, Serialize};
use std::{fs, io, path::Path};

use crate::error::{DemoError, DemoResult};

pub const DEFAULT_CONFIG_PATH: &str = "locator-demo.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// env_logger filter; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Dispatches per scenario step. Must be at least 1.
    #[serde(default = "default_operations")]
    pub operations: u32,
}

fn default_log_filter() -> String {
    "info".to_string()
}
fn default_operations() -> u32 {
    1
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            operations: default_operations(),
        }
    }
}

impl DemoConfig {
    /// Missing file means defaults. A file that exists but does not parse
    /// or validate is an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> DemoResult<Self> {
        let path = path.as_ref();
        let cfg: DemoConfig = match fs::read_to_string(path) {
            Ok(s) => toml::from_str(&s)
                .map_err(|e| DemoError::Config(format!("parse {}: {}", path.display(), e)))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(e.into()),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> DemoResult<()> {
        // Zero dispatches would leave every counter at 0 and prove nothing.
        if self.operations == 0 {
            return Err(DemoError::Config("operations must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = DemoConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.log_filter, "info");
        assert_eq!(cfg.operations, 1);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "operations = 3").unwrap();

        let cfg = DemoConfig::load_or_default(file.path()).unwrap();
        assert_eq!(cfg.operations, 3);
        assert_eq!(cfg.log_filter, "info");
    }

    #[test]
    fn malformed_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "operations = \"many\"").unwrap();

        let err = DemoConfig::load_or_default(file.path()).unwrap_err();
        assert!(matches!(err, DemoError::Config(_)));
    }

    #[test]
    fn zero_operations_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "operations = 0").unwrap();

        let err = DemoConfig::load_or_default(file.path()).unwrap_err();
        assert!(matches!(err, DemoError::Config(ref msg) if msg.contains("operations")));
    }
}
