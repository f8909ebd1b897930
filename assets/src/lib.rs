//! # brookui-assets
//!
//! An in-memory catalog turning named binary payloads into embeddable
//! `data:` URIs.
//!
//! Webview render surfaces typically refuse `file://` access, so images and
//! other local payloads cannot be referenced by path. The catalog sidesteps
//! this: register the bytes once under a logical name, refer to them from the
//! element tree as `asset:<name>`, and the surface is handed a
//! `data:<mime>;base64,<payload>` URI instead of a file path.
//!
//! ```
//! use brookui_assets::AssetCatalog;
//!
//! let catalog = AssetCatalog::new();
//! catalog.add("images/logo.png", b"\x89PNG\r\n\x1a\n...".to_vec());
//!
//! let uri = catalog.get_data_uri("logo.png").unwrap();
//! assert!(uri.starts_with("data:image/png;base64,"));
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use mime::Mime;
use parking_lot::RwLock;
use tracing::debug;

mod sniff;

pub use sniff::sniff;

/// One stored asset: its bytes and the mime type sniffed at insertion.
#[derive(Debug, Clone)]
pub struct AssetEntry {
    name: String,
    bytes: Arc<[u8]>,
    mime: Mime,
}

impl AssetEntry {
    /// The logical name as supplied by the caller, path prefix included.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The immutable payload.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The mime type inferred from the byte signature.
    #[must_use]
    pub fn mime(&self) -> &Mime {
        &self.mime
    }

    /// Encodes this entry as a `data:<mime>;base64,<payload>` URI.
    #[must_use]
    pub fn data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime.essence_str(),
            STANDARD.encode(&self.bytes)
        )
    }
}

/// Strips any path prefix from a logical asset name.
///
/// Both `/` and `\` count as separators, so `"images/logo.png"` and
/// `r"images\logo.png"` share the basename `"logo.png"`.
#[must_use]
pub fn basename(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name)
}

/// A process-lifetime content store mapping basenames to binary payloads.
///
/// The catalog is shared and lock-protected: concurrent `add` calls cannot
/// corrupt each other, and a reader racing a writer on the same basename
/// observes either the fully-old or fully-new entry. There is no deletion
/// operation.
#[derive(Debug, Default)]
pub struct AssetCatalog {
    entries: RwLock<HashMap<String, AssetEntry>>,
}

impl AssetCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `bytes` under the basename of `name`, sniffing the mime type
    /// from the payload's signature.
    ///
    /// A prior entry with the same basename is overwritten; last write wins.
    pub fn add(&self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        let name = name.into();
        let key = basename(&name).to_owned();
        let bytes: Arc<[u8]> = bytes.into().into();
        let mime = sniff(&bytes);
        debug!(name = %name, key = %key, mime = %mime, len = bytes.len(), "registering asset");

        let entry = AssetEntry { name, bytes, mime };
        if self.entries.write().insert(key.clone(), entry).is_some() {
            debug!(key = %key, "overwrote existing asset entry");
        }
    }

    /// Looks up an asset by name (the same basename rule as [`add`](Self::add)
    /// applies) and returns its `data:` URI.
    ///
    /// Absence is a normal outcome, not an error.
    #[must_use]
    pub fn get_data_uri(&self, name: &str) -> Option<String> {
        self.entry(name).map(|entry| entry.data_uri())
    }

    /// Resolves an `asset:<name>` URI to its `data:` URI.
    ///
    /// Returns `None` for URIs in any other scheme and for unknown names.
    #[must_use]
    pub fn resolve(&self, uri: &str) -> Option<String> {
        let name = uri.strip_prefix("asset:")?;
        self.get_data_uri(name)
    }

    /// Returns a snapshot of the entry stored under the basename of `name`.
    #[must_use]
    pub fn entry(&self, name: &str) -> Option<AssetEntry> {
        self.entries.read().get(basename(name)).cloned()
    }

    /// Whether an entry exists for the basename of `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.read().contains_key(basename(name))
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
