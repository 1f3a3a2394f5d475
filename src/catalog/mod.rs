//! Known-marker catalog storage and screening.
//!
//! The catalog holds short marker subsequences tied to genes. A sequence is
//! flagged for a gene when it contains that gene's marker as a contiguous
//! substring. An embedded default table is compiled into the binary, but custom
//! tables can be loaded from JSON files.
//!
//! ## Embedded Catalog
//!
//! The default table holds Alzheimer's-associated markers:
//!
//! - **APOE**, **APP**
//! - **PSEN1** (M146L and L286V variants)
//! - **PSEN2**
//!
//! ## Example
//!
//! ```rust
//! use mutscreen::catalog::marker_tree::MarkerCatalog;
//! use mutscreen::catalog::store::MarkerSet;
//!
//! let markers = MarkerSet::load_embedded().unwrap();
//! let catalog = MarkerCatalog::new(&markers);
//!
//! assert_eq!(catalog.find_matches("XATGCTCGGAX"), vec!["PSEN1 (M146L)"]);
//! ```
//!
//! ## Custom Catalogs
//!
//! ```rust,no_run
//! use mutscreen::catalog::store::MarkerSet;
//! use std::path::Path;
//!
//! let json = MarkerSet::load_embedded().unwrap().to_json().unwrap();
//! std::fs::write("my_markers.json", json).unwrap();
//!
//! let custom = MarkerSet::load_from_file(Path::new("my_markers.json")).unwrap();
//! ```

pub mod marker_tree;
pub mod store;
