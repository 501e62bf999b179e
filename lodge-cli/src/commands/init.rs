//! Init command implementation.
//!
//! This module implements the `init` command for explicitly initializing
//! the lodge data directory and store.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Parser;
use lodge::{bootstrap_demo_data, default_data_dir, SqliteStore, StoreConfig};
use std::path::PathBuf;

/// Initialize lodge data directory and store.
#[derive(Parser)]
#[command(about = "Initialize lodge data directory and store")]
pub struct InitCommand {
    /// Data directory to initialize
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Seed a small demonstration inventory
    #[arg(long)]
    demo: bool,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// Note: This command does NOT honor --disable-autoinit (would be
    /// paradoxical). The --data-dir flag has a different meaning here
    /// (where to create, not where to find).
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // Determine data directory to initialize
        // Priority: command flag > global flag > default
        let data_dir = match self.data_dir.or_else(|| global.data_dir.clone()) {
            Some(dir) => dir,
            None => default_data_dir().map_err(|e| CliError::Config(e.to_string()))?,
        };

        let created = !data_dir.exists();
        std::fs::create_dir_all(&data_dir)?;

        let db_path = data_dir.join("lodge.db");
        let mut store = SqliteStore::open(StoreConfig::new(&db_path))?;

        if self.demo {
            bootstrap_demo_data(&mut store)?;
        }

        // Report what was created
        println!("Initialized lodge in: {}", data_dir.display());

        if created {
            println!("  - Created data directory");
        }

        println!("  - Store ready at: {}", db_path.display());

        if self.demo {
            println!("  - Seeded demo inventory");
        }

        Ok(())
    }
}
