//! Shared strings table for a workbook package.

use std::collections::HashMap;
use std::fmt::Write as FmtWrite;

use crate::common::Result;
use crate::common::xml::{escape_xml, needs_space_preserve};

/// Unique strings of every worksheet, in first-use order.
///
/// Cells refer to text by index into this table, so each distinct string
/// is stored once per package.
#[derive(Debug, Default)]
pub(crate) struct SharedStrings {
    strings: Vec<String>,
    index: HashMap<String, usize>,
    /// Number of references, repeats included
    count: usize,
}

impl SharedStrings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of `s`, adding it on first use.
    pub fn add(&mut self, s: &str) -> usize {
        self.count += 1;
        if let Some(&index) = self.index.get(s) {
            return index;
        }
        let index = self.strings.len();
        self.strings.push(s.to_string());
        self.index.insert(s.to_string(), index);
        index
    }

    pub fn unique_count(&self) -> usize {
        self.strings.len()
    }

    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(256 + self.strings.iter().map(|s| s.len() + 16).sum::<usize>());
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="{}" uniqueCount="{}">"#,
            self.count,
            self.strings.len()
        )?;

        for s in &self.strings {
            if needs_space_preserve(s) {
                write!(xml, r#"<si><t xml:space="preserve">{}</t></si>"#, escape_xml(s))?;
            } else {
                write!(xml, "<si><t>{}</t></si>", escape_xml(s))?;
            }
        }

        xml.push_str("</sst>");
        Ok(xml)
    }
}
