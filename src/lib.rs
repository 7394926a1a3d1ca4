//! dinedb-rs: workspace crate re-exporting [`dinedb_core`] for the demos.
//!
//! ```no_run
//! use dinedb_rs::prelude::*;
//!
//! let catalog = Catalog::load().unwrap();
//! println!("{} restaurants", catalog.len());
//! ```

pub use dinedb_core::*;
