//! The workbook: an ordered list of worksheets plus document properties.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::common::{Config, Error, Result};
use crate::ooxml::common::DocumentProperties;
use crate::ooxml::opc::PackageWriter;
use crate::ooxml::xlsx::worksheet::Worksheet;
use crate::ooxml::xlsx::writer;

/// Longest worksheet title a spreadsheet accepts.
pub const MAX_TITLE_LEN: usize = 31;

const INVALID_TITLE_CHARS: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];
const DEFAULT_TITLE: &str = "Sheet";

/// Worksheet lookup by 0-based position or by title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetRef<'a> {
    Index(usize),
    Name(&'a str),
}

impl From<usize> for SheetRef<'_> {
    fn from(index: usize) -> Self {
        SheetRef::Index(index)
    }
}

impl<'a> From<&'a str> for SheetRef<'a> {
    fn from(name: &'a str) -> Self {
        SheetRef::Name(name)
    }
}

/// An Excel workbook under construction.
///
/// ```
/// use deckbook::ooxml::xlsx::{CellFormatOptions, Workbook};
///
/// let mut wb = Workbook::new();
/// let ws = wb.add_worksheet(Some("Sales"))?;
/// ws.write_cell(1, 1, "Region", &CellFormatOptions::new().bold(true))?;
/// ws.write_cell(2, 1, 1250.5, &CellFormatOptions::new())?;
/// assert_eq!(wb.sheet_names(), ["Sales"]);
/// # Ok::<(), deckbook::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    worksheets: Vec<Worksheet>,
    active: usize,
    config: Config,
    properties: DocumentProperties,
}

impl Workbook {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            worksheets: Vec::new(),
            active: 0,
            config,
            properties: DocumentProperties::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn properties(&self) -> &DocumentProperties {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut DocumentProperties {
        &mut self.properties
    }

    /// Append a worksheet and return it.
    ///
    /// Without a title the sheet is called `Sheet`, `Sheet1`, `Sheet2`, ...
    /// A title already in use (ignoring case) gets the next free numeric
    /// suffix.
    pub fn add_worksheet(&mut self, title: Option<&str>) -> Result<&mut Worksheet> {
        let requested = title.unwrap_or(DEFAULT_TITLE);
        check_title(requested)?;
        let title = self.unique_title(requested);
        check_title(&title)?;

        let sheet = Worksheet::new(title, self.config.sheet.clone());
        self.worksheets.push(sheet);
        let index = self.worksheets.len() - 1;
        Ok(&mut self.worksheets[index])
    }

    fn unique_title(&self, requested: &str) -> String {
        let lower = requested.to_lowercase();
        let taken: Vec<String> = self.worksheets.iter().map(|ws| ws.title().to_lowercase()).collect();
        if !taken.contains(&lower) {
            return requested.to_string();
        }

        let max_suffix = taken
            .iter()
            .filter_map(|t| t.strip_prefix(lower.as_str()))
            .filter_map(|suffix| if suffix.is_empty() { Some(0) } else { suffix.parse::<u32>().ok() })
            .max()
            .unwrap_or(0);
        format!("{}{}", requested, max_suffix + 1)
    }

    fn position(&self, sheet: SheetRef<'_>) -> Result<usize> {
        match sheet {
            SheetRef::Index(index) if index < self.worksheets.len() => Ok(index),
            SheetRef::Index(index) => Err(Error::WorksheetIndexOutOfRange {
                index,
                count: self.worksheets.len(),
            }),
            SheetRef::Name(name) => self
                .worksheets
                .iter()
                .position(|ws| ws.title() == name)
                .ok_or_else(|| Error::WorksheetNotFound(name.to_string())),
        }
    }

    pub fn worksheet<'a>(&self, sheet: impl Into<SheetRef<'a>>) -> Result<&Worksheet> {
        let index = self.position(sheet.into())?;
        Ok(&self.worksheets[index])
    }

    pub fn worksheet_mut<'a>(&mut self, sheet: impl Into<SheetRef<'a>>) -> Result<&mut Worksheet> {
        let index = self.position(sheet.into())?;
        Ok(&mut self.worksheets[index])
    }

    pub fn worksheets(&self) -> &[Worksheet] {
        &self.worksheets
    }

    pub fn worksheet_count(&self) -> usize {
        self.worksheets.len()
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.worksheets.iter().map(Worksheet::title).collect()
    }

    /// The sheet selected when the file is opened; `None` before the first
    /// sheet is added.
    pub fn active_worksheet(&self) -> Option<&Worksheet> {
        self.worksheets.get(self.active)
    }

    pub fn active_worksheet_mut(&mut self) -> Option<&mut Worksheet> {
        self.worksheets.get_mut(self.active)
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn set_active<'a>(&mut self, sheet: impl Into<SheetRef<'a>>) -> Result<()> {
        self.active = self.position(sheet.into())?;
        Ok(())
    }

    /// Serialize the workbook to `.xlsx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let package = writer::build_package(self)?;
        PackageWriter::to_bytes(&package)
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let package = writer::build_package(self)?;
        PackageWriter::write_to_stream(writer, &package)
    }

    /// Save to `path`, or to the configured default file name, adding the
    /// `.xlsx` extension when it is missing. Returns the path written.
    pub fn save<P: AsRef<Path>>(&self, path: Option<P>) -> Result<PathBuf> {
        let mut path = match path {
            Some(p) => p.as_ref().to_path_buf(),
            None => PathBuf::from(&self.config.sheet.default_filename),
        };
        let has_extension = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"));
        if !has_extension {
            let mut name = path.into_os_string();
            name.push(".xlsx");
            path = PathBuf::from(name);
        }

        writer::build_package(self)
            .and_then(|package| PackageWriter::write(&path, &package))
            .map_err(|e| Error::saving(&path, e))?;
        info!(path = %path.display(), sheets = self.worksheets.len(), "saved workbook");
        Ok(path)
    }
}

fn check_title(title: &str) -> Result<()> {
    if title.is_empty() || title.chars().count() > MAX_TITLE_LEN || title.contains(INVALID_TITLE_CHARS) {
        return Err(Error::InvalidSheetName(title.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::xlsx::{CellFormatOptions, CellValue};
    use std::io::Read;

    #[test]
    fn test_default_titles() {
        let mut wb = Workbook::new();
        for _ in 0..3 {
            wb.add_worksheet(None).unwrap();
        }
        assert_eq!(wb.sheet_names(), ["Sheet", "Sheet1", "Sheet2"]);
    }

    #[test]
    fn test_duplicate_titles_get_suffix() {
        let mut wb = Workbook::new();
        wb.add_worksheet(Some("Data")).unwrap();
        wb.add_worksheet(Some("data")).unwrap();
        wb.add_worksheet(Some("Data")).unwrap();
        assert_eq!(wb.sheet_names(), ["Data", "data1", "Data2"]);
    }

    #[test]
    fn test_invalid_titles() {
        let mut wb = Workbook::new();
        let too_long = "x".repeat(32);
        for title in ["", "a/b", "what?", "[x]", too_long.as_str()] {
            assert!(
                matches!(wb.add_worksheet(Some(title)), Err(Error::InvalidSheetName(_))),
                "{title:?} should be rejected"
            );
        }
        wb.add_worksheet(Some(&"y".repeat(31))).unwrap();
        // The suffixed title would be 32 characters long
        assert!(wb.add_worksheet(Some(&"y".repeat(31))).is_err());
        assert_eq!(wb.worksheet_count(), 1);
    }

    #[test]
    fn test_lookup_and_active() {
        let mut wb = Workbook::new();
        assert!(wb.active_worksheet().is_none());
        wb.add_worksheet(Some("A")).unwrap();
        wb.add_worksheet(Some("B")).unwrap();

        assert_eq!(wb.worksheet(1).unwrap().title(), "B");
        assert_eq!(wb.worksheet("A").unwrap().title(), "A");
        assert!(matches!(wb.worksheet("C"), Err(Error::WorksheetNotFound(_))));
        assert!(matches!(
            wb.worksheet(5),
            Err(Error::WorksheetIndexOutOfRange { index: 5, count: 2 })
        ));

        assert_eq!(wb.active_worksheet().unwrap().title(), "A");
        wb.set_active("B").unwrap();
        assert_eq!(wb.active_index(), 1);
        assert!(wb.set_active(9).is_err());
        assert_eq!(wb.active_index(), 1);
    }

    #[test]
    fn test_empty_workbook_cannot_be_saved() {
        assert!(matches!(Workbook::new().to_bytes(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_save_appends_extension() {
        let dir = tempfile::tempdir().unwrap();
        let mut wb = Workbook::new();
        wb.add_worksheet(None)
            .unwrap()
            .write_cell(1, 1, "x", &CellFormatOptions::new())
            .unwrap();

        let written = wb.save(Some(dir.path().join("report"))).unwrap();
        assert_eq!(written, dir.path().join("report.xlsx"));
        assert!(written.exists());

        let err = wb.save(Some(dir.path().join("missing/dir/out.xlsx"))).unwrap_err();
        assert!(matches!(err, Error::Save { .. }));
    }

    #[test]
    fn test_written_package_round_trip() {
        let mut wb = Workbook::new();
        let ws = wb.add_worksheet(Some("Sales")).unwrap();
        ws.write_cell(1, 1, "Region", &CellFormatOptions::new().bold(true)).unwrap();
        ws.write_cell(2, 1, "North", &CellFormatOptions::new()).unwrap();
        ws.write_cell(2, 2, 1250.5, &CellFormatOptions::new().number_format("#,##0.00"))
            .unwrap();
        assert_eq!(ws.read_cell(2, 2).unwrap(), Some(&CellValue::Float(1250.5)));

        let bytes = wb.to_bytes().unwrap();
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        let names: Vec<String> = archive.file_names().map(str::to_string).collect();
        for expected in [
            "[Content_Types].xml",
            "_rels/.rels",
            "xl/workbook.xml",
            "xl/_rels/workbook.xml.rels",
            "xl/worksheets/sheet1.xml",
            "xl/styles.xml",
            "xl/sharedStrings.xml",
            "docProps/core.xml",
            "docProps/app.xml",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing {expected}");
        }

        let mut workbook_xml = String::new();
        archive
            .by_name("xl/workbook.xml")
            .unwrap()
            .read_to_string(&mut workbook_xml)
            .unwrap();
        assert!(workbook_xml.contains(r#"<sheet name="Sales" sheetId="1" r:id="rId1"/>"#));

        let mut sheet_xml = String::new();
        archive
            .by_name("xl/worksheets/sheet1.xml")
            .unwrap()
            .read_to_string(&mut sheet_xml)
            .unwrap();
        assert!(sheet_xml.contains(r#"<c r="A2" t="s""#));
        assert!(sheet_xml.contains("<v>1250.5</v>"));
    }
}
