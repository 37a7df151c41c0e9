use std::ffi::OsStr;
use std::io;
use std::path::Path;
use std::time::Duration;
use url::Url;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the shared HTTP client with the fixed request timeout
pub fn build_client() -> io::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::Other,
                format!("Failed to build HTTP client: {}", e),
            )
        })
}

/// Get standard user agent string
pub fn get_user_agent() -> &'static str {
    "ChainLogoFetch"
}

/// Infer the image file extension from a logo URL's path, with `.png`
/// as the default when the path carries none.
pub fn infer_extension(logo_url: &str) -> String {
    let path = match Url::parse(logo_url) {
        Ok(url) => url.path().to_string(),
        Err(_) => String::new(),
    };

    match Path::new(&path).extension().and_then(OsStr::to_str) {
        Some(ext) => format!(".{}", ext),
        None => ".png".to_string(),
    }
}

/// Download a single logo and write the raw bytes to `output_path`.
/// Nothing is written unless the server answers 200.
pub async fn download_logo(
    client: &reqwest::Client,
    logo_url: &str,
    output_path: &Path,
) -> io::Result<()> {
    let response = client
        .get(logo_url)
        .header("User-Agent", get_user_agent())
        .send()
        .await
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::Other,
                format!("HTTP request failed: {}", e),
            )
        })?;

    if response.status() != reqwest::StatusCode::OK {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            format!("HTTP {} for URL: {}", response.status(), logo_url),
        ));
    }

    let bytes = response.bytes().await.map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to read response bytes: {}", e),
        )
    })?;

    tokio::fs::write(output_path, &bytes).await.map_err(|e| {
        io::Error::new(io::ErrorKind::Other, format!("Failed to write file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_comes_from_url_path() {
        assert_eq!(infer_extension("https://x/logo/eth.png"), ".png");
        assert_eq!(infer_extension("https://x/logo/matic.svg"), ".svg");
        assert_eq!(infer_extension("https://x/logo/bnb.jpeg"), ".jpeg");
    }

    #[test]
    fn extension_defaults_to_png() {
        assert_eq!(infer_extension("https://x/logo/eth"), ".png");
        assert_eq!(infer_extension("https://x/"), ".png");
        assert_eq!(infer_extension("not a url"), ".png");
    }

    #[test]
    fn extension_ignores_query_string() {
        assert_eq!(infer_extension("https://x/logo/eth.webp?v=2"), ".webp");
        assert_eq!(infer_extension("https://x/logo/eth?format=png"), ".png");
    }

    #[tokio::test]
    async fn download_writes_raw_bytes_on_200() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/logo/eth.png")
            .with_status(200)
            .with_body("png-bytes")
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("eth.png");
        let client = build_client().unwrap();
        let url = format!("{}/logo/eth.png", server.url());

        download_logo(&client, &url, &output_path).await.unwrap();

        mock.assert_async().await;
        assert_eq!(std::fs::read(&output_path).unwrap(), b"png-bytes");
    }

    #[tokio::test]
    async fn download_leaves_no_file_on_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/logo/gone.png")
            .with_status(404)
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("gone.png");
        let client = build_client().unwrap();
        let url = format!("{}/logo/gone.png", server.url());

        let result = download_logo(&client, &url, &output_path).await;

        assert!(result.unwrap_err().to_string().contains("HTTP 404"));
        assert!(!output_path.exists());
    }
}
