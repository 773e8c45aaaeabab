//! Office Open XML documents.
//!
//! - `opc`: in-memory packages of parts and relationships, written as ZIP
//! - `common`: document properties shared by every format
//! - `pptx`: PowerPoint presentations
//! - `xlsx`: Excel workbooks

pub mod common;
pub mod opc;
#[cfg(feature = "pptx")]
pub mod pptx;
#[cfg(feature = "xlsx")]
pub mod xlsx;

pub use common::DocumentProperties;
pub use opc::OpcPackage;
