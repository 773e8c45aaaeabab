//! In-memory OPC package assembled by the document writers.

use crate::common::{Error, Result};
use crate::ooxml::opc::rel::Relationships;

/// One part of a package: its absolute partname, content type and bytes,
/// plus the relationships it is the source of.
#[derive(Debug, Clone)]
pub struct Part {
    partname: String,
    content_type: String,
    blob: Vec<u8>,
    rels: Relationships,
}

impl Part {
    pub fn partname(&self) -> &str {
        &self.partname
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    /// Replace the part content. Writers add relationships first so the
    /// serialized XML can reference the assigned rIds.
    pub fn set_blob(&mut self, blob: impl Into<Vec<u8>>) {
        self.blob = blob.into();
    }

    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    pub fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }

    /// Extension of the partname, used for `Default` content-type entries.
    pub fn ext(&self) -> &str {
        self.partname
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or("")
    }

    /// Partname of this part's relationships item, e.g.
    /// `/ppt/slides/_rels/slide1.xml.rels` for `/ppt/slides/slide1.xml`.
    pub fn rels_partname(&self) -> String {
        match self.partname.rsplit_once('/') {
            Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
            None => format!("/_rels/{}.rels", self.partname),
        }
    }
}

/// Package under construction: parts in insertion order and the
/// package-level relationships (`/_rels/.rels`).
#[derive(Debug, Default)]
pub struct OpcPackage {
    parts: Vec<Part>,
    rels: Relationships,
}

impl OpcPackage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part and return it so the caller can attach relationships.
    pub fn add_part(
        &mut self,
        partname: &str,
        content_type: &str,
        blob: impl Into<Vec<u8>>,
    ) -> Result<&mut Part> {
        if !partname.starts_with('/') {
            return Err(Error::InvalidInput(format!(
                "partname must be absolute: {}",
                partname
            )));
        }
        if self.contains_part(partname) {
            return Err(Error::InvalidInput(format!(
                "duplicate partname: {}",
                partname
            )));
        }
        self.parts.push(Part {
            partname: partname.to_string(),
            content_type: content_type.to_string(),
            blob: blob.into(),
            rels: Relationships::new(),
        });
        let index = self.parts.len() - 1;
        Ok(&mut self.parts[index])
    }

    pub fn contains_part(&self, partname: &str) -> bool {
        self.parts.iter().any(|p| p.partname == partname)
    }

    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate the package itself to a part; targets are package-relative.
    pub fn relate_to(&mut self, partname: &str, reltype: &str) -> String {
        self.rels.add(reltype, partname.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::content_type as ct;

    #[test]
    fn test_rels_partname() {
        let mut pkg = OpcPackage::new();
        let part = pkg
            .add_part("/ppt/slides/slide1.xml", ct::PML_SLIDE, Vec::new())
            .unwrap();
        assert_eq!(part.rels_partname(), "/ppt/slides/_rels/slide1.xml.rels");
        assert_eq!(part.ext(), "xml");
    }

    #[test]
    fn test_rejects_duplicates_and_relative_names() {
        let mut pkg = OpcPackage::new();
        pkg.add_part("/xl/workbook.xml", ct::SML_SHEET_MAIN, Vec::new())
            .unwrap();
        assert!(pkg
            .add_part("/xl/workbook.xml", ct::SML_SHEET_MAIN, Vec::new())
            .is_err());
        assert!(pkg.add_part("xl/styles.xml", ct::SML_STYLES, Vec::new()).is_err());
        assert_eq!(pkg.part_count(), 1);
    }
}
