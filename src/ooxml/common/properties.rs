//! Document properties shared by `.pptx` and `.xlsx` packages.
//!
//! Core properties live in `docProps/core.xml`, extended (application)
//! properties in `docProps/app.xml`.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::common::xml::escape_xml;

/// Document core properties (metadata).
#[derive(Debug, Clone)]
pub struct DocumentProperties {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub keywords: Option<String>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl Default for DocumentProperties {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            title: None,
            subject: None,
            creator: Some("deckbook".to_string()),
            keywords: None,
            created: now,
            modified: now,
        }
    }
}

impl DocumentProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    pub fn creator(mut self, creator: &str) -> Self {
        self.creator = Some(creator.to_string());
        self
    }

    pub fn keywords(mut self, keywords: &str) -> Self {
        self.keywords = Some(keywords.to_string());
        self
    }

    /// Generate `docProps/core.xml`.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);

        let text_elements = [
            ("dc:title", &self.title),
            ("dc:subject", &self.subject),
            ("dc:creator", &self.creator),
            ("cp:keywords", &self.keywords),
        ];
        for (tag, value) in text_elements {
            if let Some(value) = value {
                xml.push_str(&format!("<{tag}>{}</{tag}>", escape_xml(value)));
            }
        }

        xml.push_str(r#"<dcterms:created xsi:type="dcterms:W3CDTF">"#);
        xml.push_str(&self.created.to_rfc3339_opts(SecondsFormat::Secs, true));
        xml.push_str("</dcterms:created>");
        xml.push_str(r#"<dcterms:modified xsi:type="dcterms:W3CDTF">"#);
        xml.push_str(&self.modified.to_rfc3339_opts(SecondsFormat::Secs, true));
        xml.push_str("</dcterms:modified>");

        xml.push_str("</cp:coreProperties>");
        xml
    }
}

/// Generate `docProps/app.xml` naming the producing application.
///
/// `counts` carries format-specific statistics such as `("Slides", 3)`.
pub fn app_properties_xml(counts: &[(&str, usize)]) -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#);
    xml.push_str("<Application>deckbook</Application>");
    for (tag, count) in counts {
        xml.push_str(&format!("<{tag}>{count}</{tag}>"));
    }
    xml.push_str("</Properties>");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_core_xml() {
        let mut props = DocumentProperties::new().title("Q3 <Review>").keywords("sales");
        props.created = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let xml = props.to_xml();
        assert!(xml.contains("<dc:title>Q3 &lt;Review&gt;</dc:title>"));
        assert!(xml.contains("<cp:keywords>sales</cp:keywords>"));
        assert!(xml.contains("2024-03-01T09:30:00Z"));
        assert!(!xml.contains("<dc:subject>"));
    }

    #[test]
    fn test_app_xml() {
        let xml = app_properties_xml(&[("Slides", 4)]);
        assert!(xml.contains("<Application>deckbook</Application>"));
        assert!(xml.contains("<Slides>4</Slides>"));
    }
}
