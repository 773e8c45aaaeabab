//! Package writer for OPC packages.
//!
//! Serializes an [`OpcPackage`] into a ZIP container: `[Content_Types].xml`
//! first, then the package relationships, then every part followed by its
//! relationships item.

use std::collections::BTreeMap;
use std::io::{Cursor, Seek, Write};
use std::path::Path;

use zip::write::{SimpleFileOptions, ZipWriter};

use crate::common::Result;
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::{content_type as ct, namespace};
use crate::ooxml::opc::package::OpcPackage;

pub struct PackageWriter;

impl PackageWriter {
    /// Write an OPC package to a file.
    pub fn write<P: AsRef<Path>>(path: P, package: &OpcPackage) -> Result<()> {
        let bytes = Self::to_bytes(package)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Write an OPC package to a stream.
    pub fn write_to_stream<W: Write>(mut writer: W, package: &OpcPackage) -> Result<()> {
        let bytes = Self::to_bytes(package)?;
        writer.write_all(&bytes)?;
        Ok(())
    }

    /// Serialize an OPC package to bytes.
    pub fn to_bytes(package: &OpcPackage) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

        Self::write_member(
            &mut zip,
            "[Content_Types].xml",
            ContentTypesItem::from_package(package).to_xml().as_bytes(),
        )?;
        Self::write_member(&mut zip, "_rels/.rels", package.rels().to_xml().as_bytes())?;

        for part in package.iter_parts() {
            Self::write_member(&mut zip, part.partname(), part.blob())?;
            if !part.rels().is_empty() {
                Self::write_member(
                    &mut zip,
                    &part.rels_partname(),
                    part.rels().to_xml().as_bytes(),
                )?;
            }
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }

    fn write_member<W: Write + Seek>(
        zip: &mut ZipWriter<W>,
        partname: &str,
        content: &[u8],
    ) -> Result<()> {
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        zip.start_file(partname.trim_start_matches('/'), options)?;
        zip.write_all(content)?;
        Ok(())
    }
}

/// Helper for building `[Content_Types].xml` content.
struct ContentTypesItem {
    /// Default content types by extension
    defaults: BTreeMap<String, String>,
    /// Override content types by partname
    overrides: BTreeMap<String, String>,
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    fn from_package(package: &OpcPackage) -> Self {
        let mut cti = Self::new();
        for part in package.iter_parts() {
            if cti.defaults.get(part.ext()).map(String::as_str) != Some(part.content_type()) {
                cti.overrides
                    .insert(part.partname().to_string(), part.content_type().to_string());
            }
        }
        cti
    }

    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<Types xmlns=""#);
        xml.push_str(namespace::OPC_CONTENT_TYPES);
        xml.push_str(r#"">"#);

        for (ext, content_type) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(content_type)
            ));
        }
        for (partname, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(content_type)
            ));
        }

        xml.push_str("</Types>");
        xml
    }
}
