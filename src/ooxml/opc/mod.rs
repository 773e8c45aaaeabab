//! Open Packaging Convention (OPC) writing.
//!
//! Both `.pptx` and `.xlsx` files are ZIP containers of XML parts linked by
//! relationship items. The document writers assemble an [`OpcPackage`] and
//! hand it to [`PackageWriter`].

pub mod constants;
pub mod package;
pub mod pkgwriter;
pub mod rel;

pub use package::{OpcPackage, Part};
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
