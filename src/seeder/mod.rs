// Seeder: replaces the people collection with synthetic data

pub mod data;
pub mod generator;

use crate::model::{SeedReport, StorageError};
use crate::storage::PeopleStore;
use chrono::Utc;
use generator::{generate_people, provider_distribution};
use tracing::info;

pub async fn run_seed(store: &dyn PeopleStore, count: usize) -> Result<SeedReport, StorageError> {
    info!("Generating {} people...", count);
    let people = {
        let mut rng = rand::rng();
        generate_people(&mut rng, count, Utc::now())
    };

    let inserted = store.replace_all(&people).await?;
    info!("{} records inserted", inserted);

    Ok(SeedReport {
        inserted,
        distribution: provider_distribution(&people),
    })
}

/// Logs the provider breakdown, most common first.
pub fn log_report(report: &SeedReport) {
    info!("Provider distribution:");
    for (provider, count) in &report.distribution {
        info!("  {}: {} pessoas", provider, count);
    }
}
