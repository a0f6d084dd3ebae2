//! `shadeplan inspect` - print an archive's shaded-dependency manifest

use std::path::Path;

use anyhow::Result;

use crate::archive::{read_shaded_manifest, ManifestOutcome};

use super::output::Output;

pub fn run(output: &Output, archive: &Path) -> Result<()> {
    match read_shaded_manifest(Some(archive)) {
        ManifestOutcome::Missing => {
            output.message("No shaded-dependency manifest");
        }
        ManifestOutcome::Unreadable => {
            output.message("Archive unreadable; treated as declaring nothing");
        }
        ManifestOutcome::Parsed(coordinates) => {
            let mut lines: Vec<String> = coordinates
                .into_iter()
                .map(|coordinate| coordinate.to_string())
                .collect();
            lines.sort();

            if output.is_json() {
                output.data(&lines);
            } else {
                for line in &lines {
                    println!("{}", line);
                }
            }
        }
    }

    Ok(())
}
