//! `pathway catalog` - catalog inspection and validation

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// Print the catalog with prerequisites
    Show {
        /// Catalog spec JSON; the built-in catalog is used when omitted
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Validate a catalog file: references and acyclicity
    Check {
        /// Catalog spec JSON to validate
        path: PathBuf,
    },
}

pub async fn run(cmd: CatalogCommands) -> Result<()> {
    match cmd {
        CatalogCommands::Show { catalog } => {
            let graph = super::load_graph(catalog.as_deref())?;

            println!("Catalog ({} courses)", graph.len());
            println!("=======");
            for course in graph.courses() {
                let prereqs = graph.prerequisites(course);
                if prereqs.is_empty() {
                    println!("{course}");
                } else {
                    let names: Vec<&str> = prereqs.iter().map(|p| p.as_str()).collect();
                    println!("{course}  (requires: {})", names.join(", "));
                }
            }
            Ok(())
        }
        CatalogCommands::Check { path } => {
            let graph = super::load_graph(Some(&path))?;
            println!(
                "OK: {} courses, {} prerequisite edges, no cycles",
                graph.len(),
                graph.edge_count()
            );
            Ok(())
        }
    }
}
