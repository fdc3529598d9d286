use std::fs;
use std::path::Path;

use anyhow::Result;
use log::info;

use crate::database::{self, SeedData};

/// Builds a fresh league database from seed files and swaps it in place
pub struct SeedingService {
    db_path: String,
}

impl SeedingService {
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn run(&self, players_path: &Path, matches_path: &Path) -> Result<()> {
        let temp_db_path = format!("{}.tmp", self.db_path);

        info!("=== Initialising league database ===");
        info!("Target DB: {}, Temp DB: {}", self.db_path, temp_db_path);

        let seed = database::load_seed(players_path, matches_path)?;
        seed.validate()?;

        if Path::new(&temp_db_path).exists() {
            fs::remove_file(&temp_db_path)?;
        }

        self.seed_into(&temp_db_path, &seed)?;

        // Atomic swap
        fs::rename(&temp_db_path, &self.db_path)?;
        info!("Successfully swapped database to {}", self.db_path);

        info!("=== Initialisation complete ===");
        Ok(())
    }

    fn seed_into(&self, db_path: &str, seed: &SeedData) -> Result<()> {
        let pool = database::create_pool(db_path)?;
        let mut conn = database::get_connection(&pool)?;
        database::seed_database(&mut conn, seed)
    }
}
