mod fetcher;
mod types;

pub use fetcher::{fetch, fetch_one, resolve_destination};
pub use types::{
    DownloadSpec, DownloadSpecError, FailurePolicy, FetchError, FetchOptions, FetchOutcome,
    FetchReport,
};
