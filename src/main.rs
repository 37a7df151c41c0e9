use clap::Parser;
use std::io;
use std::path::Path;

mod chains;
mod utils;

use chains::debank::{self, DebankApi};

/// Simple program to fetch chain logos from the DeBank API
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path where to save the logos
    #[arg(short, long, default_value = "frontend/public/images/chains")]
    path: String,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    let output_dir = Path::new(&args.path);

    utils::files::ensure_output_dir(output_dir)?;

    let client = utils::http::build_client()?;

    let chains = match debank::fetch_chain_list(
        &client,
        DebankApi::primary_url(),
        DebankApi::fallback_url(),
    )
    .await
    {
        Ok(chains) => chains,
        Err(e) => {
            eprintln!("Error fetching chain list: {}", e);
            std::process::exit(1);
        }
    };

    let summary = utils::logos::download_chain_logos(&client, &chains, output_dir).await;

    println!();
    println!("Summary:");
    println!("  Downloaded: {}", summary.succeeded);
    println!("  Skipped (no logo): {}", summary.skipped);
    println!("  Failed: {}", summary.failed);
    println!("  Total chains: {}", chains.len());

    let metadata_path = utils::files::write_chain_metadata(output_dir, &chains)?;
    println!("\nSaved chain metadata to {}", metadata_path.display());

    Ok(())
}
