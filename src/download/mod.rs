//! GitHub release download and archive extraction
//!
//! ## Module Organization
//!
//! - `github` - GitHub API interaction for release discovery
//! - `fetch` - archive download to a local path
//! - `extract` - zip extraction

pub mod extract;
pub mod fetch;
pub mod github;

pub use extract::{extract, extract_archive};
pub use fetch::download;
pub use github::{Asset, Release, ReleaseClient, find_release_by_tag, resolve_asset_url};
