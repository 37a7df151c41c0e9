use crate::chains::{normalize_chain_list, ChainRecord};
use crate::utils::http::get_user_agent;
use reqwest::StatusCode;
use serde_json::Value;
use std::io;

pub struct DebankApi;

impl DebankApi {
    pub fn primary_url() -> &'static str {
        "https://pro-openapi.debank.com/v1/chain/list"
    }

    /// Public endpoint, served without authentication
    pub fn fallback_url() -> &'static str {
        "https://api.debank.com/chain/list"
    }
}

async fn get_json(client: &reqwest::Client, url: &str) -> io::Result<reqwest::Response> {
    client
        .get(url)
        .header("User-Agent", get_user_agent())
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::Other,
                format!("Failed to send request: {}", e),
            )
        })
}

/// Fetch the chain list, retrying the public endpoint when the primary
/// endpoint answers 401.
pub async fn fetch_chain_list(
    client: &reqwest::Client,
    primary_url: &str,
    fallback_url: &str,
) -> io::Result<Vec<ChainRecord>> {
    println!("Fetching chain list from DeBank API...");

    let mut response = get_json(client, primary_url).await?;

    if response.status() == StatusCode::UNAUTHORIZED {
        println!("API requires authentication, retrying public endpoint...");
        response = get_json(client, fallback_url).await?;
    }

    if response.status() != StatusCode::OK {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to fetch chain list: HTTP {} - {}", status, body),
        ));
    }

    let response_text = response.text().await.map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to get response text: {}", e),
        )
    })?;

    let data: Value = serde_json::from_str(&response_text).map_err(|e| {
        io::Error::new(io::ErrorKind::Other, format!("Failed to parse JSON: {}", e))
    })?;

    let chains = normalize_chain_list(&data);
    println!("Found {} chains", chains.len());

    Ok(chains)
}
