//! Client for the HSTS preload list that browser vendors ship with their
//! releases.
//!
//! The upstream document is JSON with non-standard `//` line comments, so
//! loading it means: one blocking GET, strip the comment lines, decode,
//! then index the entry names for O(1) membership checks. All of that
//! happens once, in the constructor; afterwards the client is pure
//! read-only state.
//!
//! ## Module map
//! - `client.rs` — `PreloadedListClient`: construction pipeline + queries.
//! - `list.rs` — parsed document model (`PreloadedList`, `Entry`).
//! - `decomment.rs` — full-line `//` comment stripping.
//! - `source.rs` — upstream endpoint constant + the blocking fetch.
//! - `error.rs` — `PreloadError` and the crate `Result` alias.
//!
//! ## Example
//!
//! ```ignore
//! let client = hsts_preload::PreloadedListClient::new()?;
//! if client.is_host_preloaded("example.com")? {
//!     println!("example.com ships preloaded");
//! }
//! ```

pub mod client;
pub mod decomment;
pub mod error;
pub mod list;
pub mod source;

pub use client::PreloadedListClient;
pub use decomment::decomment;
pub use error::{PreloadError, Result};
pub use list::{Entry, PreloadedList};
pub use source::PRELOAD_LIST_URL;
