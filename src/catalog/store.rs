use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::core::marker::MarkerEntry;
use crate::utils::validation::{parse_marker, SequenceError};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read marker catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse marker catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid marker '{sequence}': {source}")]
    InvalidMarker {
        sequence: String,
        #[source]
        source: SequenceError,
    },
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub markers: Vec<MarkerEntry>,
}

/// Ordered list of markers used to build a [`MarkerCatalog`].
///
/// Order matters: it decides the catalog's tree shape, and with it the order
/// in which matched genes are reported.
///
/// [`MarkerCatalog`]: crate::catalog::marker_tree::MarkerCatalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerSet {
    pub markers: Vec<MarkerEntry>,
}

impl MarkerSet {
    pub fn new(markers: Vec<MarkerEntry>) -> Self {
        Self { markers }
    }

    /// Load the embedded default marker table
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Validated at compile time by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/alzheimer_markers.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load a marker table from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load the file at `path` if given, otherwise the embedded table
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load_embedded(),
        }
    }

    /// Parse a marker table from a JSON string.
    ///
    /// Marker sequences are uppercased and must be non-empty runs of A, C, G
    /// and T; gaps are not allowed.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            warn!(
                "Marker catalog version mismatch (expected {}, found {})",
                CATALOG_VERSION, data.version
            );
        }

        let markers = data
            .markers
            .into_iter()
            .map(|marker| {
                let sequence = parse_marker(&marker.sequence).map_err(|source| {
                    CatalogError::InvalidMarker {
                        sequence: marker.sequence.clone(),
                        source,
                    }
                })?;
                Ok(MarkerEntry::new(sequence, marker.gene))
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        Ok(Self::new(markers))
    }

    /// Export the marker table to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            markers: self.markers.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
