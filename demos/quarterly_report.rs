//! Build a small quarterly report as both a slide deck and a workbook.
//!
//! The same sales table is rendered on a slide (display-formatted text) and
//! written to a worksheet (typed values with Excel number formats).
//!
//! # Usage
//!
//! ```sh
//! cargo run --example quarterly_report -- -o out/
//! cargo run --example quarterly_report -- -o out/ --config report.yaml
//! RUST_LOG=deckbook=debug cargo run --example quarterly_report -- -o out/
//! ```

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use deckbook::Config;
use deckbook::common::RgbColor;
use deckbook::ooxml::pptx::{ChartData, ChartType, Frame, Presentation};
use deckbook::ooxml::xlsx::{CellFormatOptions, DataFrameOptions, Workbook};
use deckbook::table::{Column, Number, RowIndex, StyleSpec, TabularData};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Render a quarterly sales table to .pptx and .xlsx
#[derive(Parser, Debug)]
#[command(name = "quarterly_report", version)]
struct Args {
    /// Directory the report files are written to
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// YAML file with deck and sheet defaults
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Title shown on the first slide and as the worksheet title cell
    #[arg(long, default_value = "Quarterly Sales")]
    title: String,

    /// Number the slides
    #[arg(long)]
    slide_numbers: bool,
}

fn sales() -> TabularData {
    TabularData::new(vec![
        Column::new("Units", [Some(1200), Some(950), Some(1430), None]),
        Column::new("Revenue", [18250.0, 14110.5, 22930.25, 9800.0]),
        Column::new("Margin", [0.231, 0.187, 0.254, 0.12]),
    ])
    .with_index(RowIndex::named("Region", ["North", "South", "East", "West"]))
}

fn build_deck(config: &Config, args: &Args, data: &TabularData) -> deckbook::Result<Presentation> {
    let mut pres = Presentation::with_config(config.clone());

    let slide = pres.add_slide("Title Slide")?;
    slide.set_title(&args.title)?;
    slide.set_subtitle("Sales by region")?;

    let options = pres
        .default_table_options()
        .include_index(true)
        .display_name("Revenue", "Revenue ($)")
        .number_format("Revenue", "$,.2f")
        .number_format("Margin", ".1%")
        .style(
            StyleSpec::new()
                .font_size(14.0)
                .header_fill_color(RgbColor::new(0x1F, 0x4E, 0x79))
                .header_font_color(RgbColor::WHITE)
                .column_widths(vec![1.6, 1.4, 2.0, 1.4]),
        );
    let slide = pres.add_slide("Title Only")?;
    slide.set_title("Regional breakdown")?;
    let table = slide.add_table_from_data(data, Frame::from_inches(1.0, 1.8, 6.4, 2.5), &options)?;
    info!(rows = table.rows, cols = table.cols, "rendered slide table");

    let revenue: Vec<f64> = data
        .column("Revenue")
        .map(|c| {
            c.values
                .iter()
                .map(|v| match v.as_number() {
                    Some(Number::Int(n)) => n as f64,
                    Some(Number::Float(n)) => n,
                    None => f64::NAN,
                })
                .collect()
        })
        .unwrap_or_default();
    let slide = pres.add_slide("Title Only")?;
    slide.set_title("Revenue by region")?;
    slide.add_chart(
        ChartType::ColumnClustered,
        ChartData::new(["North", "South", "East", "West"]).series("Revenue", revenue),
        Frame::from_inches(1.0, 1.8, 8.0, 5.0),
        None,
    )?;

    pres.set_slide_numbers_visibility(args.slide_numbers);
    Ok(pres)
}

fn build_workbook(config: &Config, args: &Args, data: &TabularData) -> deckbook::Result<Workbook> {
    let mut wb = Workbook::with_config(config.clone());
    let ws = wb.add_worksheet(Some("Sales"))?;
    ws.write_cell(1, 1, args.title.as_str(), &CellFormatOptions::new().bold(true).font_size(14.0))?;
    ws.merge_cells(1, 1, 1, 4)?;

    let options = DataFrameOptions::new()
        .start(3, 1)
        .include_index(true)
        .number_format("Revenue", "#,##0.00")
        .number_format("Margin", "0.0%")
        .auto_column_widths()
        .row_height(3, 20.0);
    let block = ws.write_dataframe(data, &options)?;
    info!(range = %block, "wrote sales block");
    Ok(wb)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Config::from_yaml_file(path)?,
        None => Config::default(),
    };
    fs::create_dir_all(&args.output)?;

    let data = sales();
    build_deck(&config, &args, &data)?.save(args.output.join("quarterly_report.pptx"))?;
    let written = build_workbook(&config, &args, &data)?.save(Some(args.output.join("quarterly_report")))?;

    println!("Wrote {} and {}", args.output.join("quarterly_report.pptx").display(), written.display());
    Ok(())
}
