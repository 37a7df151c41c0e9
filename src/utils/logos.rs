use crate::chains::ChainRecord;
use crate::utils::http;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Outcome counters for one download run
#[derive(Debug, Default, PartialEq)]
pub struct DownloadSummary {
    pub succeeded: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Download every chain logo into `output_dir`, one request at a time.
///
/// Records without a logo URL are skipped; a failed download is counted
/// and the loop moves on. Files are named `<chain id><extension>` with
/// the extension taken from the logo URL.
pub async fn download_chain_logos(
    client: &reqwest::Client,
    chains: &[ChainRecord],
    output_dir: &Path,
) -> DownloadSummary {
    let mut summary = DownloadSummary::default();

    let pb = ProgressBar::new(chains.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )
            .unwrap()
            .progress_chars("#>-"),
    );

    for chain in chains {
        let logo_url = match chain.logo_url.as_deref() {
            Some(url) => url,
            None => {
                pb.println(format!(
                    "Skipping {} ({}): no logo URL",
                    chain.display_name(),
                    chain.id
                ));
                summary.skipped += 1;
                pb.inc(1);
                continue;
            }
        };

        let file_name = format!("{}{}", chain.id, http::infer_extension(logo_url));
        let output_path = output_dir.join(&file_name);

        match http::download_logo(client, logo_url, &output_path).await {
            Ok(()) => summary.succeeded += 1,
            Err(e) => {
                pb.println(format!(
                    "Failed {} ({}): {}",
                    chain.display_name(),
                    chain.id,
                    e
                ));
                summary.failed += 1;
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Download complete");

    summary
}
