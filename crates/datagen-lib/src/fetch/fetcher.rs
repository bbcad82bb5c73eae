use super::types::{DownloadSpec, FailurePolicy, FetchError, FetchOptions, FetchOutcome, FetchReport};
use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{info, warn};
use url::Url;

/// Resolves a destination relative to the project root into an absolute path.
pub fn resolve_destination(root: &Path, destination: &Path) -> std::io::Result<PathBuf> {
    std::path::absolute(root.join(destination))
}

/// Streams a single URL to `destination`, truncating whatever was there.
///
/// The response status is checked before the destination is opened, so a
/// non-success response never creates or truncates the file. A failure while
/// streaming leaves the partially written file in place.
pub async fn fetch_one(client: &Client, url: &Url, destination: &Path) -> Result<u64, FetchError> {
    if let Some(parent) = destination.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| FetchError::filesystem(url, parent, e))?;
    }

    let response = client
        .get(url.clone())
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|e| FetchError::network(url, destination, e))?;

    let file = tokio::fs::File::create(destination)
        .await
        .map_err(|e| FetchError::filesystem(url, destination, e))?;
    let mut writer = BufWriter::new(file);

    let mut body = response.bytes_stream();
    let mut written = 0u64;
    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|e| FetchError::network(url, destination, e))?;
        writer
            .write_all(&chunk)
            .await
            .map_err(|e| FetchError::filesystem(url, destination, e))?;
        written += chunk.len() as u64;
    }

    writer
        .flush()
        .await
        .map_err(|e| FetchError::filesystem(url, destination, e))?;

    Ok(written)
}

/// Fetches every entry of `spec` into paths under `root`.
///
/// Results are reported in input order. With `parallelism == 1` entries are
/// fetched strictly one after another; larger values keep that many requests
/// in flight. Under [`FailurePolicy::FailFast`] no new entry starts after a
/// failure, but entries already in flight run to completion.
pub async fn fetch(
    client: &Client,
    root: &Path,
    spec: &DownloadSpec,
    options: FetchOptions,
) -> FetchReport {
    let parallelism = options.parallelism.max(1);
    let fail_fast = options.failure_policy == FailurePolicy::FailFast;
    let stopped = AtomicBool::new(false);
    let stopped = &stopped;

    let mut pending = stream::iter(spec.iter())
        .map(|(destination, url)| async move {
            if stopped.load(Ordering::SeqCst) {
                return None;
            }

            let (destination_path, result) = match resolve_destination(root, destination) {
                Ok(destination_path) => {
                    info!(url = %url, "Downloading {}", url);
                    let result = fetch_one(client, url, &destination_path).await;
                    (destination_path, result)
                }
                Err(e) => {
                    let joined = root.join(destination);
                    let err = FetchError::filesystem(url, &joined, e);
                    (joined, Err(err))
                }
            };

            match &result {
                Ok(bytes) => {
                    info!(url = %url, bytes, "Saved to {}", destination_path.display())
                }
                Err(err) => {
                    if fail_fast {
                        stopped.store(true, Ordering::SeqCst);
                    }
                    warn!(url = %url, destination = %destination_path.display(), "Download failed: {}", err)
                }
            }

            Some(FetchOutcome {
                destination: destination_path,
                url: url.clone(),
                result,
            })
        })
        .buffered(parallelism);

    let mut outcomes = Vec::with_capacity(spec.len());
    let mut skipped = 0;
    while let Some(outcome) = pending.next().await {
        match outcome {
            Some(outcome) => outcomes.push(outcome),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!(skipped, "Stopped after first failure; remaining downloads were not attempted");
    }

    FetchReport { outcomes, skipped }
}
