use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The parsed preload list document.
///
/// `entries` is the only key this crate interprets; whatever else the
/// vendor ships at the top level (`pinsets` and friends) is carried in
/// `extra` untouched and survives re-serialization.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PreloadedList {
    pub entries: Vec<Entry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One host record from the preload list.
///
/// A record without a `name` fails decoding; the remaining vendor fields
/// are optional, and unknown ones land in `extra`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Entry {
    pub name: String,
    pub mode: Option<String>,
    pub include_subdomains: Option<bool>,
    pub pins: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
