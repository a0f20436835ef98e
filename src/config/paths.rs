//! Path management for gastos
//!
//! Provides XDG-compliant path resolution for configuration and data files.
//!
//! ## Path Resolution Order
//!
//! 1. `GASTOS_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/gastos` or `~/.config/gastos`
//! 3. Windows: `%APPDATA%\gastos`

use std::path::PathBuf;

use crate::error::GastosError;

/// Manages all paths used by gastos
#[derive(Debug, Clone)]
pub struct GastosPaths {
    /// Base directory for all gastos data
    base_dir: PathBuf,
}

impl GastosPaths {
    /// Create a new GastosPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, GastosError> {
        let base_dir = if let Ok(custom) = std::env::var("GASTOS_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create GastosPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/gastos/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/gastos/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the persisted settings snapshot
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("expense-tracker-settings.json")
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), GastosError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| GastosError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| GastosError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if gastos has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, GastosError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| GastosError::Config("Could not determine home directory".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("gastos"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, GastosError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| GastosError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("gastos"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GastosPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GastosPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(
            paths.settings_file(),
            temp_dir.path().join("expense-tracker-settings.json")
        );
        assert_eq!(
            paths.expenses_file(),
            temp_dir.path().join("data").join("expenses.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GastosPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }
}
