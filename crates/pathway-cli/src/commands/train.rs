//! `pathway train` - run a training session and persist the table

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use pathway_core::Config;
use pathway_rl::{
    ActionValueTable, JsonStudentPool, StudentPool, SyntheticStudentPool, Trainer,
};

#[derive(Args)]
pub struct TrainArgs {
    /// Configuration file (defaults to pathway.toml discovery)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog spec JSON; the built-in catalog is used when omitted
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Student profile JSON; a synthetic pool is used when omitted
    #[arg(long)]
    students: Option<PathBuf>,

    /// Number of training episodes
    #[arg(long)]
    episodes: Option<u64>,

    /// Learning rate, in (0, 1]
    #[arg(long)]
    alpha: Option<f64>,

    /// Discount factor, in [0, 1]
    #[arg(long)]
    gamma: Option<f64>,

    /// Seed for all random draws
    #[arg(long)]
    seed: Option<u64>,

    /// Output path for the trained table artifact
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn run(args: TrainArgs) -> Result<()> {
    let mut config = Config::load_from(args.config.as_deref())?;

    // CLI flags win over config file and environment
    if let Some(episodes) = args.episodes {
        config.training.episodes = episodes;
    }
    if let Some(alpha) = args.alpha {
        config.training.alpha = alpha;
    }
    if let Some(gamma) = args.gamma {
        config.training.gamma = gamma;
    }
    if let Some(seed) = args.seed {
        config.training.seed = seed;
    }

    let catalog_path = args
        .catalog
        .or_else(|| config.data.catalog_path.as_ref().map(PathBuf::from));
    let students_path = args
        .students
        .or_else(|| config.data.students_path.as_ref().map(PathBuf::from));
    let output_path = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.data.output_path));

    let graph = super::load_graph(catalog_path.as_deref())?;

    // Pool randomness is seeded separately from action sampling so the two
    // streams do not interleave
    let pool_seed = config.training.seed.wrapping_add(1);
    let mut pool: Box<dyn StudentPool + '_> = match &students_path {
        Some(path) => Box::new(
            JsonStudentPool::from_file(path, pool_seed)
                .with_context(|| format!("failed to load students from {}", path.display()))?,
        ),
        None => {
            info!("no student file supplied, using synthetic pool");
            Box::new(SyntheticStudentPool::new(&graph, pool_seed)?)
        }
    };

    let mut table = ActionValueTable::new();
    let mut trainer = Trainer::new(&graph, config.training.clone())?;
    let stats = trainer.run(pool.as_mut(), &mut table)?;

    let artifact = table.to_artifact(&config.training, &stats);
    artifact
        .write_json(&output_path)
        .context("failed to persist action-value table")?;

    println!(
        "Trained {} episodes ({} skipped), mean reward {:.3}, {} table entries",
        stats.episodes_run, stats.episodes_skipped, stats.mean_reward, stats.table_entries
    );
    println!("Table written to {}", output_path.display());

    Ok(())
}
