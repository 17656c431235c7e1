//! Resource download and caching
//!
//! A [`Resource`] names a set of upstream URLs and a cache lifetime;
//! [`Downloader::fetch`] returns one local path per URL, downloading only
//! what the cache cannot serve. Cached files are validated against the
//! sha256 digest recorded at download time and re-downloaded when stale
//! or corrupted. Downloads run sequentially, one URL at a time.

use crate::error::{IngestError, Result};
use chrono::{DateTime, Duration, Utc};
use ddig_common::checksum::{compute_file_checksum, verify_file_checksum, ChecksumAlgorithm};
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const DDINTER_BASE_URL: &str = "http://ddinter.scbdd.com/static/media/download";

/// Cache lifetime of the DDInter downloads, in days
pub const DDINTER_LIFETIME_DAYS: i64 = 14;

/// A downloadable resource: a set of URLs cached together under one name.
#[derive(Debug, Clone)]
pub struct Resource {
    /// Cache namespace for the resource
    pub name: String,

    /// Upstream URLs, one file each
    pub urls: Vec<String>,

    /// How long a cached download stays fresh, in days
    pub lifetime_days: i64,
}

impl Resource {
    pub fn new(name: impl Into<String>, urls: Vec<String>, lifetime_days: i64) -> Self {
        Self {
            name: name.into(),
            urls,
            lifetime_days,
        }
    }

    /// The canonical DDInter resource: one interaction table per
    /// first-level ATC category.
    pub fn ddinter() -> Self {
        let urls = ["A", "B", "D", "H", "L", "P", "R", "V"]
            .iter()
            .map(|code| format!("{DDINTER_BASE_URL}/ddinter_downloads_code_{code}.csv"))
            .collect();

        Self::new("ddinter", urls, DDINTER_LIFETIME_DAYS)
    }
}

/// Per-resource cache metadata sidecar
#[derive(Debug, Default, Serialize, Deserialize)]
struct ResourceMetadata {
    files: HashMap<String, FileEntry>,
}

/// Metadata recorded for one cached download
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FileEntry {
    downloaded_at: DateTime<Utc>,
    checksum: String,
    size: u64,
}

impl ResourceMetadata {
    fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Downloads resources into a local cache directory.
pub struct Downloader {
    client: reqwest::Client,
    cache_dir: PathBuf,
}

impl Downloader {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            client: reqwest::Client::new(),
            cache_dir: cache_dir.into(),
        }
    }

    /// The cache directory this downloader writes into
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Fetch every URL of `resource`, returning local paths in URL order.
    ///
    /// A cached file is reused when it exists, its recorded age is within
    /// the resource lifetime, and its checksum still matches; `force`
    /// bypasses the cache entirely. Any download or filesystem failure
    /// aborts the whole fetch.
    pub async fn fetch(&self, resource: &Resource, force: bool) -> Result<Vec<PathBuf>> {
        let dir = self.cache_dir.join(&resource.name);
        std::fs::create_dir_all(&dir)?;

        let meta_path = dir.join(format!("{}.meta.json", resource.name));
        let mut metadata = ResourceMetadata::load(&meta_path)?;

        let mut paths = Vec::with_capacity(resource.urls.len());

        for url in &resource.urls {
            let file_name = file_name_from_url(url)?;
            let target = dir.join(file_name);

            if !force && is_fresh(&metadata, file_name, &target, resource.lifetime_days) {
                info!(file = file_name, "using cached download");
                paths.push(target);
                continue;
            }

            self.download_file(url, &target).await?;

            let checksum = compute_file_checksum(&target, ChecksumAlgorithm::Sha256)?;
            let size = std::fs::metadata(&target)?.len();

            metadata.files.insert(
                file_name.to_string(),
                FileEntry {
                    downloaded_at: Utc::now(),
                    checksum,
                    size,
                },
            );

            paths.push(target);
        }

        metadata.save(&meta_path)?;

        Ok(paths)
    }

    /// Stream one URL to disk with a progress bar
    async fn download_file(&self, url: &str, target: &Path) -> Result<()> {
        debug!(url, "starting download");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(IngestError::Download {
                url: url.to_string(),
                status: response.status(),
            });
        }

        let total_size = response.content_length().unwrap_or(0);

        let pb = ProgressBar::new(total_size);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg}\n{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        let display_name = target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        pb.set_message(format!("Downloading {display_name}"));

        let mut file = std::fs::File::create(target)?;
        let mut downloaded = 0u64;
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk)?;
            downloaded += chunk.len() as u64;
            pb.set_position(downloaded);
        }

        pb.finish_with_message(format!("Downloaded {display_name}"));
        info!(url, bytes = downloaded, "download complete");

        Ok(())
    }
}

/// Whether a cached file can be served without hitting the network
fn is_fresh(
    metadata: &ResourceMetadata,
    file_name: &str,
    target: &Path,
    lifetime_days: i64,
) -> bool {
    if !target.exists() {
        return false;
    }

    let Some(entry) = metadata.files.get(file_name) else {
        return false;
    };

    if Utc::now() - entry.downloaded_at > Duration::days(lifetime_days) {
        debug!(file = file_name, "cached download expired");
        return false;
    }

    match verify_file_checksum(target, &entry.checksum, ChecksumAlgorithm::Sha256) {
        Ok(_) => true,
        Err(e) => {
            warn!(file = file_name, error = %e, "cached download failed verification");
            false
        },
    }
}

/// The trailing path segment of a URL, used as the cached file name
fn file_name_from_url(url: &str) -> Result<&str> {
    url.rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| IngestError::config(format!("URL has no file name: {url}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const BODY: &str = "DDInterID_A,Drug_A,DDInterID_B,Drug_B,Level\nDDInter1,Aspirin,DDInter2,Ibuprofen,Major\n";

    fn test_resource(server: &MockServer) -> Resource {
        Resource::new(
            "ddinter-test",
            vec![format!("{}/ddinter_downloads_code_A.csv", server.uri())],
            14,
        )
    }

    #[tokio::test]
    async fn test_fetch_downloads_and_reuses_cache() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ddinter_downloads_code_A.csv"))
            .respond_with(ResponseTemplate::new(200).set_body_string(BODY))
            .expect(1)
            .mount(&server)
            .await;

        let cache = tempfile::tempdir().unwrap();
        let downloader = Downloader::new(cache.path());
        let resource = test_resource(&server);

        let paths = downloader.fetch(&resource, false).await.unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(std::fs::read_to_string(&paths[0]).unwrap(), BODY);

        // Second fetch within the lifetime must not hit the network
        // (the mock expects exactly one request).
        let again = downloader.fetch(&resource, false).await.unwrap();
        assert_eq!(again, paths);
    }

    #[tokio::test]
    async fn test_corrupted_cache_is_redownloaded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ddinter_downloads_code_A.csv"))
            .respond_with(ResponseTemplate::new(200).set_body_string(BODY))
            .expect(2)
            .mount(&server)
            .await;

        let cache = tempfile::tempdir().unwrap();
        let downloader = Downloader::new(cache.path());
        let resource = test_resource(&server);

        let paths = downloader.fetch(&resource, false).await.unwrap();
        std::fs::write(&paths[0], "tampered").unwrap();

        let again = downloader.fetch(&resource, false).await.unwrap();
        assert_eq!(std::fs::read_to_string(&again[0]).unwrap(), BODY);
    }

    #[tokio::test]
    async fn test_force_bypasses_cache() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ddinter_downloads_code_A.csv"))
            .respond_with(ResponseTemplate::new(200).set_body_string(BODY))
            .expect(2)
            .mount(&server)
            .await;

        let cache = tempfile::tempdir().unwrap();
        let downloader = Downloader::new(cache.path());
        let resource = test_resource(&server);

        downloader.fetch(&resource, false).await.unwrap();
        downloader.fetch(&resource, true).await.unwrap();
    }

    #[tokio::test]
    async fn test_http_error_aborts_fetch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ddinter_downloads_code_A.csv"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let cache = tempfile::tempdir().unwrap();
        let downloader = Downloader::new(cache.path());
        let resource = test_resource(&server);

        let err = downloader.fetch(&resource, false).await.unwrap_err();
        assert!(matches!(err, IngestError::Download { .. }));
    }

    #[test]
    fn test_ddinter_resource_covers_all_categories() {
        let resource = Resource::ddinter();
        assert_eq!(resource.urls.len(), 8);
        assert_eq!(resource.lifetime_days, DDINTER_LIFETIME_DAYS);
        assert!(resource.urls[0].ends_with("ddinter_downloads_code_A.csv"));
    }

    #[test]
    fn test_file_name_from_url() {
        let name = file_name_from_url("http://example.com/a/b/data_A.csv").unwrap();
        assert_eq!(name, "data_A.csv");
        assert!(file_name_from_url("http://example.com/a/").is_err());
    }
}
