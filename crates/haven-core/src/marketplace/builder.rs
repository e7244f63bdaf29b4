//! Builder for creating and configuring Marketplace instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::Marketplace;
use crate::{
    error::{CatalogResultExt, HavenError, Result},
    models::FeeRatio,
};

/// Builder for creating and configuring Marketplace instances.
#[derive(Debug, Clone)]
pub struct MarketplaceBuilder {
    catalog_path: Option<PathBuf>,
    fee_ratio: FeeRatio,
}

impl MarketplaceBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            catalog_path: None,
            fee_ratio: FeeRatio::platform_default(),
        }
    }

    /// Sets a custom catalog file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/haven/catalog.json` or
    /// `~/.local/share/haven/catalog.json`
    pub fn with_catalog_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the platform fee ratio applied to quotes. Defaults to 10%.
    pub fn with_fee_ratio(mut self, fee_ratio: FeeRatio) -> Self {
        self.fee_ratio = fee_ratio;
        self
    }

    /// Builds the configured marketplace instance.
    ///
    /// The catalog file itself may not exist yet; the marketplace then
    /// starts with an empty catalog.
    ///
    /// # Errors
    ///
    /// Returns `HavenError::XdgDirectory` if no default location can be
    /// determined, and `HavenError::FileSystem` if the catalog directory
    /// cannot be created.
    pub async fn build(self) -> Result<Marketplace> {
        let catalog_path = if let Some(path) = self.catalog_path {
            path
        } else {
            Self::default_catalog_path()?
        };

        if let Some(parent) = catalog_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).fs_context(parent)?;
            }
        }

        debug!(
            "Using catalog {} with platform fee {}",
            catalog_path.display(),
            self.fee_ratio
        );
        Ok(Marketplace::new(catalog_path, self.fee_ratio))
    }

    /// Returns the default catalog path following XDG Base Directory
    /// specification.
    fn default_catalog_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("haven")
            .place_data_file("catalog.json")
            .map_err(|e| HavenError::XdgDirectory(e.to_string()))
    }
}

impl Default for MarketplaceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
