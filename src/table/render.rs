//! Tabular data to a formatted grid on a document surface.

use std::borrow::Cow;
use std::collections::HashMap;

use tracing::{debug, trace};

use crate::common::{Font, Result};
use crate::table::data::{TabularData, Value};
use crate::table::format::{FormatError, NumberFormat};
use crate::table::style::{StyleSpec, TableOptions};
use crate::table::surface::{DocumentSurface, GridRegion, TableGrid};

/// Header used for the index column when neither a label nor an index name
/// is available.
pub const DEFAULT_INDEX_HEADER: &str = "Index";

/// Handle and dimensions of a grid produced by [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedTable<H> {
    pub handle: H,
    pub rows: usize,
    pub cols: usize,
}

/// Render `data` as a table on `surface` at `region`.
///
/// The grid has one header row plus one row per data row, and one column
/// per data column plus the index column when `options.include_index` is
/// set. Input is validated before the surface is touched, so an error
/// leaves the surface unchanged.
///
/// Numeric cells whose column has a format spec are formatted with it; a
/// spec that fails to parse or apply falls back to the plain text of the
/// value. Null cells are always empty.
pub fn render<S: DocumentSurface>(
    surface: &mut S,
    data: &TabularData,
    region: &S::Region,
    options: &TableOptions,
) -> Result<RenderedTable<S::Handle>> {
    let row_count = data.validate()?;
    region.validate()?;

    let offset = usize::from(options.include_index);
    let rows = row_count + 1;
    let cols = data.column_count() + offset;
    debug!(rows, cols, include_index = options.include_index, "rendering table");

    let formats = compile_formats(options);
    let mut grid = surface.add_grid(rows, cols, region)?;

    if options.include_index {
        grid.set_text(0, 0, &index_header(data, options));
    }
    for (c, column) in data.columns().iter().enumerate() {
        let header = options
            .display_names
            .get(&column.name)
            .unwrap_or(&column.name);
        grid.set_text(0, c + offset, header);
    }

    for r in 0..row_count {
        if options.include_index {
            let label = match data.index() {
                Some(index) => index.labels[r].display_text().into_owned(),
                None => r.to_string(),
            };
            grid.set_text(r + 1, 0, &label);
        }
        for (c, column) in data.columns().iter().enumerate() {
            let format = formats.get(column.name.as_str());
            let text = cell_text(&column.values[r], format);
            grid.set_text(r + 1, c + offset, &text);
        }
    }

    let default_style;
    let style = match &options.style {
        Some(style) => style,
        None => {
            default_style = StyleSpec::default();
            &default_style
        },
    };
    apply_style(&mut grid, style);

    Ok(RenderedTable {
        handle: grid.handle(),
        rows,
        cols,
    })
}

fn index_header(data: &TabularData, options: &TableOptions) -> String {
    options
        .index_label
        .clone()
        .or_else(|| data.index().and_then(|i| i.name.clone()))
        .unwrap_or_else(|| DEFAULT_INDEX_HEADER.to_string())
}

fn compile_formats(options: &TableOptions) -> HashMap<&str, std::result::Result<NumberFormat, FormatError>> {
    options
        .number_formats
        .iter()
        .map(|(column, spec)| (column.as_str(), NumberFormat::parse(spec)))
        .collect()
}

/// Display text of one data cell.
fn cell_text<'a>(
    value: &'a Value,
    format: Option<&std::result::Result<NumberFormat, FormatError>>,
) -> Cow<'a, str> {
    if value.is_null() {
        return Cow::Borrowed("");
    }
    let (Some(number), Some(format)) = (value.as_number(), format) else {
        return value.display_text();
    };
    let formatted = match format {
        Ok(format) => format.apply(number),
        Err(e) => Err(e.clone()),
    };
    match formatted {
        Ok(text) => Cow::Owned(text),
        Err(e) => {
            trace!(error = %e, "number format failed, using plain text");
            value.display_text()
        },
    }
}

fn apply_style<G: TableGrid>(grid: &mut G, style: &StyleSpec) {
    let (rows, cols) = (grid.rows(), grid.cols());

    let body_font = Font {
        name: style.font_name.clone(),
        size: style.font_size,
        ..Font::default()
    };
    if !body_font.is_empty() {
        for r in 0..rows {
            for c in 0..cols {
                grid.set_font(r, c, &body_font);
            }
        }
    }

    if let Some(widths) = &style.column_widths {
        for (c, width) in widths.entries() {
            if c < cols {
                grid.set_column_width(c, width);
            }
        }
    }
    if let Some(heights) = &style.row_heights {
        for (r, height) in heights.entries() {
            if r < rows {
                grid.set_row_height(r, height);
            }
        }
    }

    let mut header_font = Font::default();
    if style.header_bold {
        header_font.bold = Some(true);
    }
    header_font.color = style.header_font_color;
    for c in 0..cols {
        if !header_font.is_empty() {
            grid.set_font(0, c, &header_font);
        }
        if let Some(fill) = style.header_fill_color {
            grid.set_fill(0, c, fill);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Error, RgbColor};
    use crate::table::data::{Column, RowIndex};
    use crate::table::style::Dimensions;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    #[derive(Debug, Clone, Default)]
    struct MockCell {
        runs: Vec<(String, Font)>,
        fill: Option<RgbColor>,
    }

    impl MockCell {
        fn text(&self) -> String {
            self.runs.iter().map(|(t, _)| t.as_str()).collect()
        }
    }

    #[derive(Debug, Default)]
    struct MockGrid {
        cells: Vec<Vec<MockCell>>,
        widths: BTreeMap<usize, f64>,
        heights: BTreeMap<usize, f64>,
    }

    #[derive(Debug, Default)]
    struct MockSurface {
        grids: Vec<MockGrid>,
    }

    struct MockRegion {
        valid: bool,
    }

    const OK_REGION: MockRegion = MockRegion { valid: true };

    impl GridRegion for MockRegion {
        fn validate(&self) -> Result<()> {
            if self.valid {
                Ok(())
            } else {
                Err(Error::InvalidInput("region has zero size".to_string()))
            }
        }
    }

    struct MockGridMut<'a> {
        id: usize,
        grid: &'a mut MockGrid,
    }

    impl TableGrid for MockGridMut<'_> {
        type Handle = usize;

        fn rows(&self) -> usize {
            self.grid.cells.len()
        }

        fn cols(&self) -> usize {
            self.grid.cells.first().map_or(0, Vec::len)
        }

        fn set_text(&mut self, row: usize, col: usize, text: &str) {
            let cell = &mut self.grid.cells[row][col];
            cell.runs.clear();
            if !text.is_empty() {
                cell.runs.push((text.to_string(), Font::default()));
            }
        }

        fn set_font(&mut self, row: usize, col: usize, font: &Font) {
            for (_, run_font) in &mut self.grid.cells[row][col].runs {
                run_font.apply(font);
            }
        }

        fn set_fill(&mut self, row: usize, col: usize, color: RgbColor) {
            self.grid.cells[row][col].fill = Some(color);
        }

        fn set_column_width(&mut self, col: usize, width: f64) {
            self.grid.widths.insert(col, width);
        }

        fn set_row_height(&mut self, row: usize, height: f64) {
            self.grid.heights.insert(row, height);
        }

        fn handle(&self) -> usize {
            self.id
        }
    }

    impl DocumentSurface for MockSurface {
        type Region = MockRegion;
        type Handle = usize;
        type Grid<'a> = MockGridMut<'a>;

        fn add_grid(&mut self, rows: usize, cols: usize, _region: &MockRegion) -> Result<MockGridMut<'_>> {
            self.grids.push(MockGrid {
                cells: vec![vec![MockCell::default(); cols]; rows],
                ..MockGrid::default()
            });
            let id = self.grids.len() - 1;
            Ok(MockGridMut {
                id,
                grid: &mut self.grids[id],
            })
        }
    }

    impl MockSurface {
        fn texts(&self, handle: usize) -> Vec<Vec<String>> {
            self.grids[handle]
                .cells
                .iter()
                .map(|row| row.iter().map(MockCell::text).collect())
                .collect()
        }
    }

    fn sales() -> TabularData {
        TabularData::new(vec![
            Column::new("Quantity", [120, 250]),
            Column::new("UnitPrice", [0.99, 0.59]),
        ])
    }

    fn price_options() -> TableOptions {
        TableOptions::new()
            .number_format("UnitPrice", "$.2f")
            .display_name("UnitPrice", "Price")
    }

    #[test]
    fn test_display_names_and_formats() {
        let mut surface = MockSurface::default();
        let table = render(&mut surface, &sales(), &OK_REGION, &price_options()).unwrap();
        assert_eq!((table.rows, table.cols), (3, 2));
        assert_eq!(
            surface.texts(table.handle),
            vec![
                vec!["Quantity", "Price"],
                vec!["120", "$0.99"],
                vec!["250", "$0.59"],
            ]
        );
    }

    #[test]
    fn test_include_index_defaults_header() {
        let mut surface = MockSurface::default();
        let options = price_options().include_index(true);
        let table = render(&mut surface, &sales(), &OK_REGION, &options).unwrap();
        let texts = surface.texts(table.handle);
        assert_eq!(texts[0], vec!["Index", "Quantity", "Price"]);
        assert_eq!(texts[1], vec!["0", "120", "$0.99"]);
        assert_eq!(texts[2], vec!["1", "250", "$0.59"]);
    }

    #[test]
    fn test_index_header_precedence() {
        let data = sales().with_index(RowIndex::named("Region", ["North", "South"]));

        let mut surface = MockSurface::default();
        let options = TableOptions::new().include_index(true);
        let table = render(&mut surface, &data, &OK_REGION, &options).unwrap();
        let texts = surface.texts(table.handle);
        assert_eq!(texts[0][0], "Region");
        assert_eq!(texts[2][0], "South");

        let options = options.index_label("Area");
        let table = render(&mut surface, &data, &OK_REGION, &options).unwrap();
        assert_eq!(surface.texts(table.handle)[0][0], "Area");
    }

    #[test]
    fn test_index_is_never_formatted() {
        let data = TabularData::new(vec![Column::new("v", [1.0])])
            .with_index(RowIndex::named("v", [0.5]));
        let options = TableOptions::new()
            .include_index(true)
            .index_label("k")
            .number_format("v", ".3f");
        let mut surface = MockSurface::default();
        let table = render(&mut surface, &data, &OK_REGION, &options).unwrap();
        assert_eq!(surface.texts(table.handle)[1], vec!["0.5", "1.000"]);
    }

    #[test]
    fn test_nulls_render_empty() {
        let data = TabularData::new(vec![Column::new(
            "Score",
            [Value::Null, Value::Float(f64::NAN), Value::Float(2.5)],
        )]);
        let options = TableOptions::new().number_format("Score", ".1f");
        let mut surface = MockSurface::default();
        let table = render(&mut surface, &data, &OK_REGION, &options).unwrap();
        let texts = surface.texts(table.handle);
        assert_eq!(texts[1][0], "");
        assert_eq!(texts[2][0], "");
        assert_eq!(texts[3][0], "2.5");
    }

    #[test]
    fn test_format_skips_non_numeric_values() {
        let data = TabularData::new(vec![Column::new(
            "Mixed",
            [Value::from("n/a"), Value::Bool(true), Value::Int(3)],
        )]);
        let options = TableOptions::new().number_format("Mixed", ".2f");
        let mut surface = MockSurface::default();
        let table = render(&mut surface, &data, &OK_REGION, &options).unwrap();
        let texts = surface.texts(table.handle);
        assert_eq!(texts[1][0], "n/a");
        assert_eq!(texts[2][0], "true");
        assert_eq!(texts[3][0], "3.00");
    }

    #[test]
    fn test_bad_format_falls_back_to_plain_text() {
        let data = TabularData::new(vec![
            Column::new("a", [1.5]),
            Column::new("b", [2.5]),
        ]);
        let options = TableOptions::new()
            .number_format("a", "d")
            .number_format("b", "not a spec");
        let mut surface = MockSurface::default();
        let table = render(&mut surface, &data, &OK_REGION, &options).unwrap();
        assert_eq!(surface.texts(table.handle)[1], vec!["1.5", "2.5"]);
    }

    #[test]
    fn test_oversized_format_falls_back_to_plain_text() {
        let data = TabularData::new(vec![
            Column::new("wide", [1.5]),
            Column::new("precise", [1.5]),
        ]);
        let options = TableOptions::new()
            .number_format("wide", "9999999999999999999.2f")
            .number_format("precise", ".9999999999999999999f");
        let mut surface = MockSurface::default();
        let table = render(&mut surface, &data, &OK_REGION, &options).unwrap();
        assert_eq!(surface.texts(table.handle)[1], vec!["1.5", "1.5"]);
    }

    #[test]
    fn test_invalid_input_leaves_surface_untouched() {
        let ragged = TabularData::new(vec![
            Column::new("a", [1, 2]),
            Column::new("b", [1]),
        ]);
        let mut surface = MockSurface::default();
        let err = render(&mut surface, &ragged, &OK_REGION, &TableOptions::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(surface.grids.is_empty());

        let bad_region = MockRegion { valid: false };
        assert!(render(&mut surface, &sales(), &bad_region, &TableOptions::new()).is_err());
        assert!(surface.grids.is_empty());
    }

    #[test]
    fn test_header_style() {
        let style = StyleSpec::new()
            .header_font_color(RgbColor::WHITE)
            .header_fill_color(RgbColor::new(0x1F, 0x4E, 0x79));
        let options = TableOptions::new().style(style);
        let mut surface = MockSurface::default();
        let table = render(&mut surface, &sales(), &OK_REGION, &options).unwrap();
        let grid = &surface.grids[table.handle];
        for cell in &grid.cells[0] {
            assert_eq!(cell.runs[0].1.bold, Some(true));
            assert_eq!(cell.runs[0].1.color, Some(RgbColor::WHITE));
            assert_eq!(cell.fill, Some(RgbColor::new(0x1F, 0x4E, 0x79)));
        }
        assert_eq!(grid.cells[1][0].runs[0].1.bold, None);
        assert_eq!(grid.cells[1][0].fill, None);
    }

    #[test]
    fn test_default_style_only_bolds_header() {
        let mut surface = MockSurface::default();
        let table = render(&mut surface, &sales(), &OK_REGION, &TableOptions::new()).unwrap();
        let grid = &surface.grids[table.handle];
        assert_eq!(grid.cells[0][1].runs[0].1.bold, Some(true));
        assert!(grid.cells.iter().flatten().all(|c| c.fill.is_none()));

        let options = TableOptions::new().style(StyleSpec::new().header_bold(false));
        let table = render(&mut surface, &sales(), &OK_REGION, &options).unwrap();
        assert_eq!(surface.grids[table.handle].cells[0][0].runs[0].1.bold, None);
    }

    #[test]
    fn test_body_font_applies_to_existing_runs() {
        let data = TabularData::new(vec![Column::new("a", [Value::Null, Value::Int(1)])]);
        let options = TableOptions::new().style(StyleSpec::new().font_name("Calibri").font_size(11.0));
        let mut surface = MockSurface::default();
        let table = render(&mut surface, &data, &OK_REGION, &options).unwrap();
        let grid = &surface.grids[table.handle];
        assert!(grid.cells[1][0].runs.is_empty());
        let font = &grid.cells[2][0].runs[0].1;
        assert_eq!(font.name.as_deref(), Some("Calibri"));
        assert_eq!(font.size, Some(11.0));
    }

    #[test]
    fn test_out_of_range_dimensions_ignored() {
        let style = StyleSpec::new()
            .column_widths(vec![1.0, 2.0, 3.0, 4.0])
            .row_heights(Dimensions::Map(BTreeMap::from([(1, 0.4), (7, 9.0)])));
        let options = TableOptions::new().style(style);
        let mut surface = MockSurface::default();
        let table = render(&mut surface, &sales(), &OK_REGION, &options).unwrap();
        let grid = &surface.grids[table.handle];
        assert_eq!(grid.widths, BTreeMap::from([(0, 1.0), (1, 2.0)]));
        assert_eq!(grid.heights, BTreeMap::from([(1, 0.4)]));
    }

    #[test]
    fn test_empty_data_renders_header_only() {
        let data = TabularData::new(vec![Column::new("a", Vec::<i64>::new())]);
        let mut surface = MockSurface::default();
        let table = render(&mut surface, &data, &OK_REGION, &TableOptions::new()).unwrap();
        assert_eq!((table.rows, table.cols), (1, 1));
        assert_eq!(surface.texts(table.handle), vec![vec!["a"]]);
    }

    mod property_tests {
        use super::*;

        fn value_strategy() -> impl Strategy<Value = Value> {
            prop_oneof![
                Just(Value::Null),
                any::<i64>().prop_map(Value::Int),
                (-1.0e6f64..1.0e6).prop_map(Value::Float),
                any::<bool>().prop_map(Value::Bool),
                "[a-z]{0,6}".prop_map(Value::Text),
            ]
        }

        fn data_strategy() -> impl Strategy<Value = TabularData> {
            (1usize..5, 0usize..6).prop_flat_map(|(cols, rows)| {
                prop::collection::vec(prop::collection::vec(value_strategy(), rows), cols).prop_map(
                    |columns| {
                        TabularData::new(
                            columns
                                .into_iter()
                                .enumerate()
                                .map(|(i, values)| Column::new(format!("col{}", i), values))
                                .collect(),
                        )
                    },
                )
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            #[test]
            fn prop_grid_dimensions(data in data_strategy(), include_index in any::<bool>()) {
                let mut surface = MockSurface::default();
                let options = TableOptions::new().include_index(include_index);
                let table = render(&mut surface, &data, &OK_REGION, &options).unwrap();
                prop_assert_eq!(table.rows, data.row_count() + 1);
                prop_assert_eq!(table.cols, data.column_count() + usize::from(include_index));
                let texts = surface.texts(table.handle);
                prop_assert_eq!(texts.len(), table.rows);
                prop_assert!(texts.iter().all(|row| row.len() == table.cols));
            }

            #[test]
            fn prop_headers_are_source_names(data in data_strategy()) {
                let mut surface = MockSurface::default();
                let table = render(&mut surface, &data, &OK_REGION, &TableOptions::new()).unwrap();
                let expected: Vec<String> = data.column_names().map(str::to_string).collect();
                prop_assert_eq!(&surface.texts(table.handle)[0], &expected);
            }

            #[test]
            fn prop_nulls_are_empty_whatever_the_format(data in data_strategy(), spec in "[$]?[.][0-3][fe%]") {
                let mut options = TableOptions::new();
                for name in data.column_names() {
                    options = options.number_format(name, spec.clone());
                }
                let mut surface = MockSurface::default();
                let table = render(&mut surface, &data, &OK_REGION, &options).unwrap();
                let texts = surface.texts(table.handle);
                for (c, column) in data.columns().iter().enumerate() {
                    for (r, value) in column.values.iter().enumerate() {
                        if value.is_null() {
                            prop_assert_eq!(texts[r + 1][c].as_str(), "");
                        }
                        if let Value::Text(s) = value {
                            prop_assert_eq!(&texts[r + 1][c], s);
                        }
                    }
                }
            }
        }
    }
}
