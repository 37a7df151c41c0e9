use crate::chains::ChainRecord;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const METADATA_FILE: &str = "chains.json";

/// Ensure the output directory exists, creating parents as needed
pub fn ensure_output_dir(output_dir: &Path) -> io::Result<()> {
    if !output_dir.exists() {
        fs::create_dir_all(output_dir)?;
        println!("Created directory: {}", output_dir.display());
    }

    Ok(())
}

/// Write the normalized chain list to `chains.json` inside the output
/// directory, replacing any previous snapshot.
pub fn write_chain_metadata(
    output_dir: &Path,
    chains: &[ChainRecord],
) -> io::Result<PathBuf> {
    let metadata_path = output_dir.join(METADATA_FILE);

    let json_data = serde_json::to_string_pretty(chains).map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to serialize JSON: {}", e),
        )
    })?;

    fs::write(&metadata_path, json_data)?;

    Ok(metadata_path)
}
