//! Category charts embedded in slides.
//!
//! Chart data is stored with the chart and written as literal caches in the
//! chart part, so no embedded workbook is needed.

use crate::common::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartType {
    ColumnClustered,
    ColumnStacked,
    BarClustered,
    BarStacked,
    Line,
    LineMarkers,
    Pie,
    Doughnut,
    Area,
}

impl ChartType {
    /// Whether the chart is drawn against category and value axes.
    pub fn has_axes(&self) -> bool {
        !matches!(self, ChartType::Pie | ChartType::Doughnut)
    }

    /// Pie-like charts color each point rather than each series.
    pub fn vary_colors(&self) -> bool {
        !self.has_axes()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

/// Categories plus one or more named series of values.
///
/// ```
/// use deckbook::ooxml::pptx::ChartData;
///
/// let data = ChartData::new(["Q1", "Q2"])
///     .series("North", [1.5, 2.0])
///     .series("South", [0.5, 1.0]);
/// assert!(data.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartData {
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

impl ChartData {
    pub fn new<S: Into<String>>(categories: impl IntoIterator<Item = S>) -> Self {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            series: Vec::new(),
        }
    }

    pub fn series(mut self, name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        self.add_series(name, values);
        self
    }

    pub fn add_series(&mut self, name: impl Into<String>, values: impl IntoIterator<Item = f64>) {
        self.series.push(Series {
            name: name.into(),
            values: values.into_iter().collect(),
        });
    }

    /// At least one series, each with exactly one value per category.
    pub fn validate(&self) -> Result<()> {
        if self.series.is_empty() {
            return Err(Error::InvalidChartData(
                "chart data needs at least one series".to_string(),
            ));
        }
        for series in &self.series {
            if series.values.len() != self.categories.len() {
                return Err(Error::InvalidChartData(format!(
                    "series '{}' has {} values, but there are {} categories",
                    series.name,
                    series.values.len(),
                    self.categories.len()
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    chart_type: ChartType,
    data: ChartData,
    title: Option<String>,
}

impl Chart {
    pub(crate) fn new(chart_type: ChartType, data: ChartData, title: Option<String>) -> Self {
        Self {
            chart_type,
            data,
            title,
        }
    }

    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    pub fn data(&self) -> &ChartData {
        &self.data
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn has_title(&self) -> bool {
        self.title.is_some()
    }

    /// A legend is only useful when there is more than one series to tell
    /// apart.
    pub fn has_legend(&self) -> bool {
        self.data.series.len() > 1
    }
}
