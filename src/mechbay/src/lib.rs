//! # mechbay
//!
//! Build-link viewer library for mech parts catalogs.
//!
//! This library provides functionality to:
//! - Parse a comma-delimited parts catalog into indexed part records
//! - Extract build indices from a share URL's `build` query parameter
//! - Resolve those indices against the catalog and sum the stat columns
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let text = "No.,Name,Kind,ENLoad,Weight\r\n\
//!             1,HC-2000 FINDER EYE,Head,88,920\r\n\
//!             2,NACHTREIHER/44E,Head,210,2320\r\n";
//! let catalog = mechbay::catalog::parse(text)?;
//!
//! let indices = mechbay::parse_share_url("https://mechbay.example/view?build=1-0")?
//!     .ok_or("no build in URL")?;
//! let assembly = mechbay::resolve(&indices, &catalog);
//!
//! assert_eq!(assembly.parts[0].name(), "NACHTREIHER/44E");
//! assert_eq!(assembly.total_weight, 3240.0);
//! # Ok(())
//! # }
//! ```

pub mod assembly;
pub mod build;
pub mod catalog;

// Re-export commonly used items
#[doc(inline)]
pub use assembly::{resolve, Assembly};
#[doc(inline)]
pub use build::{parse_build_param, parse_share_url, BuildError};
#[doc(inline)]
pub use catalog::{Catalog, CatalogError, PartRecord};
