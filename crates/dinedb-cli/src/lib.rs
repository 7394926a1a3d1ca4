//! dinedb-cli
//! ==========
//!
//! Command-line interface for the `dinedb-core` restaurant catalog.
//!
//! This crate primarily provides a binary (`dinedb`). The library target
//! exists so the crate has a rendered documentation page with this overview.
//!
//! Basic usage
//! -----------
//!
//! ```text
//! dinedb --help
//! dinedb stats
//! dinedb search sushi
//! dinedb search italian --location downtown
//! dinedb suggest tok
//! dinedb near --lat 40.7128 --lon -74.0060
//! dinedb --json occasion "date night" --sort rating
//! ```
//!
//! For programmatic access use the [`dinedb-core`] crate directly.
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// No API here; the binary is the deliverable.
