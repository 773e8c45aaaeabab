//! Relationship collections for package parts.

use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;

/// A single relationship from a source part to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    r_id: String,
    reltype: String,
    target_ref: String,
}

impl Relationship {
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }
}

/// Ordered relationships of one source part, numbered `rId1`, `rId2`, ...
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    rels: Vec<Relationship>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship and return its freshly assigned rId.
    ///
    /// Targets are relative to the source part's directory.
    pub fn add(&mut self, reltype: &str, target_ref: &str) -> String {
        let r_id = format!("rId{}", self.rels.len() + 1);
        self.rels.push(Relationship {
            r_id: r_id.clone(),
            reltype: reltype.to_string(),
            target_ref: target_ref.to_string(),
        });
        r_id
    }

    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rels.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<Relationships xmlns=""#);
        xml.push_str(namespace::OPC_RELATIONSHIPS);
        xml.push_str(r#"">"#);

        for rel in &self.rels {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(&rel.r_id),
                escape_xml(&rel.reltype),
                escape_xml(&rel.target_ref),
            ));
        }

        xml.push_str("</Relationships>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;

    #[test]
    fn test_ids_are_sequential() {
        let mut rels = Relationships::new();
        assert_eq!(rels.add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml"), "rId1");
        assert_eq!(rels.add(rt::SLIDE, "slides/slide1.xml"), "rId2");
        assert_eq!(rels.len(), 2);
    }

    #[test]
    fn test_to_xml() {
        let mut rels = Relationships::new();
        rels.add(rt::THEME, "theme/theme1.xml");
        let xml = rels.to_xml();
        assert!(xml.contains(r#"Id="rId1""#));
        assert!(xml.contains(r#"Target="theme/theme1.xml""#));
        assert!(xml.ends_with("</Relationships>"));
    }
}
