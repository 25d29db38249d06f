//! Canonical XML for XML digital signatures.
//!
//! The canonical form declares each namespace once per scope instead of on
//! every element, sorts attributes in a fixed order and renders prefixes
//! consistently, so that the same logical document always produces the same
//! bytes to digest.
//!
//! ```rust
//! let canonical = xmlsig_c14n::canonicalize(
//!     r#"<Response xmlns="http://example.com/ns" ResponseId="r1"><Status/></Response>"#,
//! )?;
//! assert_eq!(
//!     canonical.as_str(),
//!     r#"<Response xmlns="http://example.com/ns" ResponseId="r1"><Status></Status></Response>"#
//! );
//! assert_eq!(canonical.id(), "r1");
//! # Ok::<(), xmlsig_c14n::Error>(())
//! ```

mod error;
mod marshal;
mod order;
mod rewrite;
mod token;

pub use error::{Error, Result};
pub use marshal::{canonicalize, Marshal};
pub use order::{canonical_order, extract_id};
pub use rewrite::{Canonical, Canonicalizer, Parameters, UnresolvedPrefix};
pub use token::{tokenize, Attribute, Token};
