//! CLI command implementations

pub mod catalog;
pub mod students;
pub mod train;

use std::path::Path;

use anyhow::{Context, Result};
use pathway_core::{CatalogSpec, CurriculumGraph};

/// Build the curriculum graph from a catalog file, or fall back to the
/// built-in catalog
pub fn load_graph(catalog_path: Option<&Path>) -> Result<CurriculumGraph> {
    let spec = match catalog_path {
        Some(path) => CatalogSpec::from_json_file(path)
            .with_context(|| format!("failed to load catalog from {}", path.display()))?,
        None => CatalogSpec::default_catalog(),
    };
    let graph = CurriculumGraph::from_spec(&spec).context("invalid catalog")?;
    Ok(graph)
}
