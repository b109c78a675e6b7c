use std::collections::HashSet;

use tracing::info;

use crate::decomment::decomment;
use crate::error::{PreloadError, Result};
use crate::list::PreloadedList;
use crate::source::{self, PRELOAD_LIST_URL};

/// Loaded preload list plus a host index for membership checks.
///
/// Construction runs the whole pipeline, fetch, decomment, decode,
/// index, and either yields a fully usable client or fails; there is no
/// partially initialized state to observe. Nothing is mutated afterwards,
/// so a constructed client can be shared freely across threads.
#[derive(Debug)]
pub struct PreloadedListClient {
    list: PreloadedList,
    hosts: HashSet<String>,
}

impl PreloadedListClient {
    /// Fetches and indexes the list from [`PRELOAD_LIST_URL`].
    pub fn new() -> Result<Self> {
        Self::from_url(PRELOAD_LIST_URL)
    }

    /// Same pipeline against a caller-chosen endpoint serving the
    /// commented-JSON body.
    pub fn from_url(url: &str) -> Result<Self> {
        let raw = source::fetch_list_text(url)?;
        let client = Self::from_commented_json(&raw)?;
        info!(
            entries = client.list.entries.len(),
            hosts = client.hosts.len(),
            "preload list loaded"
        );
        Ok(client)
    }

    fn from_commented_json(raw: &str) -> Result<Self> {
        let list: PreloadedList = serde_json::from_str(&decomment(raw))?;
        let mut hosts = HashSet::with_capacity(list.entries.len());
        for entry in &list.entries {
            hosts.insert(entry.name.clone());
        }
        Ok(Self { list, hosts })
    }

    /// Whether `host` appears verbatim in the list.
    ///
    /// The lookup is an exact, case-sensitive string match; no
    /// normalization and no subdomain walk, so `sub.a.example` does not
    /// match an `a.example` entry even when that entry sets
    /// `include_subdomains`. An empty `host` is rejected as
    /// [`PreloadError::EmptyHost`].
    pub fn is_host_preloaded(&self, host: &str) -> Result<bool> {
        if host.is_empty() {
            return Err(PreloadError::EmptyHost);
        }
        Ok(self.hosts.contains(host))
    }

    /// Read-only view of the full parsed document, passthrough fields
    /// included.
    pub fn all_data(&self) -> &PreloadedList {
        &self.list
    }
}
