//! Lifecycle data from the [endoflife.date](https://endoflife.date) API.
//!
//! - [`mapping`]: product name → API slug
//! - [`client`]: v1/legacy endpoint fetching
//! - [`response`]: the two response shapes, decoded into [`ReleaseFeed`]
//! - [`resolve`]: requested version → release record
//!
//! # Example
//!
//! ```no_run
//! use eol_lookup::lifecycle::{map_product, resolve, LifecycleClient, LifecycleClientConfig};
//!
//! let client = LifecycleClient::new(LifecycleClientConfig::default())?;
//! let response = client.fetch_product(&map_product("Debian"))?;
//! let resolution = resolve(response.feed.releases(), "13");
//! println!("{resolution:?}");
//! # Ok::<(), eol_lookup::EolError>(())
//! ```

pub mod client;
pub mod mapping;
pub mod resolve;
pub mod response;

pub use client::{
    Endpoint, HttpTransport, LifecycleClient, LifecycleClientConfig, ProductResponse,
    ReqwestTransport, DEFAULT_BASE_URL, DEFAULT_TIMEOUT,
};
pub use mapping::{map_product, ProductSlug};
pub use resolve::{resolve, MatchKind, Resolution, ResolvedRelease};
pub use response::{FieldValue, ProductMetadata, ReleaseFeed, ReleaseRecord};
