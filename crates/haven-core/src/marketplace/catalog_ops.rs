//! Catalog operations for the Marketplace.

use std::path::PathBuf;

use log::info;
use tokio::task;

use super::Marketplace;
use crate::{
    catalog::Catalog,
    error::{HavenError, Result, ResultExt},
    models::CatalogStats,
    params::ImportCatalog,
};

impl Marketplace {
    /// Reads the active catalog. A catalog file that does not exist yet
    /// reads as an empty catalog.
    pub async fn load_catalog(&self) -> Result<Catalog> {
        let catalog_path = self.catalog_path.clone();

        task::spawn_blocking(move || Catalog::load(&catalog_path))
            .await
            .with_context("Task join error")?
    }

    /// Validates a catalog file without installing it, returning the number
    /// of listings it holds.
    pub async fn validate_catalog(&self, params: &ImportCatalog) -> Result<usize> {
        let source = PathBuf::from(&params.path);

        let catalog = task::spawn_blocking(move || Catalog::load_existing(&source))
            .await
            .with_context("Task join error")??;

        Ok(catalog.len())
    }

    /// Validates a catalog file and installs it as the active catalog,
    /// replacing the previous one. Returns the number of listings imported.
    ///
    /// Nothing is written if the file fails validation.
    pub async fn import_catalog(&self, params: &ImportCatalog) -> Result<usize> {
        let source = PathBuf::from(&params.path);
        let catalog_path = self.catalog_path.clone();

        let imported = task::spawn_blocking(move || {
            let catalog = Catalog::load_existing(&source)?;
            catalog.save(&catalog_path)?;
            Ok::<usize, HavenError>(catalog.len())
        })
        .await
        .with_context("Task join error")??;

        info!(
            "Imported {imported} listings from {} into {}",
            params.path,
            self.catalog_path.display()
        );
        Ok(imported)
    }

    /// Computes counts and averages over the active catalog.
    pub async fn catalog_stats(&self) -> Result<CatalogStats> {
        let catalog = self.load_catalog().await?;
        Ok(catalog.stats())
    }
}
