//! `shadeplan resolve` - run the conflict resolver over an artifact list

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::archive::PlaceholderStore;
use crate::domain::ResolvedArtifact;
use crate::resolver::{Decision, DependencyResolver};

use super::output::Output;

pub fn run(output: &Output, input: &str, placeholder_dir: Option<PathBuf>) -> Result<()> {
    let artifacts = read_artifacts(input)?;
    output.verbose_ctx("resolve", &format!("{} input artifacts", artifacts.len()));

    let store = match placeholder_dir {
        Some(dir) => PlaceholderStore::new(dir),
        None => PlaceholderStore::in_temp_dir(),
    };
    let resolver = DependencyResolver::new(store);

    let resolution = resolver.resolve_detailed(&artifacts)?;

    for decision in &resolution.decisions {
        match decision {
            Decision::Kept { coordinate, .. } => {
                output.verbose_ctx("resolve", &format!("keep {}", coordinate));
            }
            Decision::SkippedShaded { coordinate } => {
                output.verbose_ctx("resolve", &format!("skip {} (already shaded)", coordinate));
            }
            Decision::Placeholder { coordinate, .. } => {
                output.verbose_ctx("resolve", &format!("placeholder for {}", coordinate));
            }
        }
    }

    if output.is_json() {
        output.data(&resolution.paths);
    } else {
        for path in &resolution.paths {
            println!("{}", path.display());
        }
    }

    Ok(())
}

/// Reads the artifact list from a JSON file, or stdin when input is `-`
fn read_artifacts(input: &str) -> Result<Vec<ResolvedArtifact>> {
    let content = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read artifact list from stdin")?;
        buffer
    } else {
        fs::read_to_string(input)
            .with_context(|| format!("Failed to read artifact list: {}", input))?
    };

    serde_json::from_str(&content).with_context(|| format!("Failed to parse artifact list: {}", input))
}
