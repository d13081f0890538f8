//! `pathway students` - student pool operations

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;

use pathway_rl::SyntheticStudentPool;

#[derive(Subcommand)]
pub enum StudentsCommands {
    /// Generate a synthetic student pool file
    Generate {
        /// Number of students to generate
        #[arg(short, long, default_value_t = 100)]
        count: usize,

        /// Seed for the generator
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Catalog spec JSON; the built-in catalog is used when omitted
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output file
        #[arg(short, long, default_value = "sample_students.json")]
        output: PathBuf,
    },
}

pub async fn run(cmd: StudentsCommands) -> Result<()> {
    match cmd {
        StudentsCommands::Generate {
            count,
            seed,
            catalog,
            output,
        } => {
            let graph = super::load_graph(catalog.as_deref())?;
            let mut pool = SyntheticStudentPool::new(&graph, seed)?;
            let students = pool.generate_batch(count)?;

            let json = serde_json::to_string_pretty(&students)?;
            std::fs::write(&output, json)
                .with_context(|| format!("failed to write {}", output.display()))?;

            println!("Wrote {count} students to {}", output.display());
            Ok(())
        }
    }
}
