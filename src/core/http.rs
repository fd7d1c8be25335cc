use std::time::Duration;

use reqwest::{
    header::USER_AGENT,
    Client,
    Response,
};

use crate::core::errors::{
    KiokuError,
    Result,
};

const MAX_ATTEMPTS: usize = 3;

pub fn http_client() -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(60))
        .build()
        .map_err(|e| KiokuError::Custom(format!("HTTP client build failed: {e}")))
}

pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Reads the word list from a URL or a local path.
pub async fn fetch_source(location: &str) -> Result<String> {
    if is_remote(location) {
        let client = http_client()?;
        fetch_text(&client, location).await
    } else {
        log::info!("Reading word list from {}", location);
        Ok(tokio::fs::read_to_string(location).await?)
    }
}

pub async fn fetch_text(client: &Client, url: &str) -> Result<String> {
    let mut attempts: usize = 0;
    loop {
        attempts += 1;
        log::info!("Fetching word list from {} (attempt {})", url, attempts);

        let resp = client.get(url).header(USER_AGENT, "kioku/0.1 (+reqwest)").send().await;

        let resp = match resp {
            Ok(r) => r,
            Err(e) => {
                if attempts < MAX_ATTEMPTS {
                    log::warn!("GET {} failed: {}; retrying", url, e);
                    tokio::time::sleep(Duration::from_secs(2 * attempts as u64)).await;
                    continue;
                }
                return Err(e.into());
            }
        };

        ensure_success(&resp)?;
        return Ok(resp.text().await?);
    }
}

fn ensure_success(resp: &Response) -> Result<()> {
    if !resp.status().is_success() {
        return Err(KiokuError::Http {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_is_remote() {
        assert!(is_remote("https://docs.google.com/x?output=tsv"));
        assert!(is_remote("http://localhost/words.tsv"));
        assert!(!is_remote("/home/me/words.tsv"));
        assert!(!is_remote("words.tsv"));
    }

    #[tokio::test]
    async fn test_fetch_source_reads_local_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "no\tja\ten\n1\t犬\tdog\n").unwrap();

        let text = fetch_source(file.path().to_str().unwrap()).await.unwrap();
        assert!(text.contains("犬\tdog"));
    }

    #[tokio::test]
    async fn test_fetch_source_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.tsv");

        let err = fetch_source(missing.to_str().unwrap()).await.unwrap_err();
        assert!(matches!(err, KiokuError::Io(_)));
    }
}
