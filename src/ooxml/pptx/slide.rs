//! A slide and the operations that add or change its shapes.

use crate::common::config::{DeckDefaults, TextDefaults};
use crate::common::{Error, Font, PlaceholderKind, Result, RgbColor};
use crate::ooxml::pptx::chart::{Chart, ChartData, ChartType};
use crate::ooxml::pptx::layout::SlideLayout;
use crate::ooxml::pptx::placeholder::PlaceholderType;
use crate::ooxml::pptx::shape::{AutoShapeType, Frame, Shape, ShapeId, ShapeKind, ShapeRef};
use crate::ooxml::pptx::table::{SlideTable, Table};
use crate::ooxml::pptx::text::{Field, Paragraph, Run, TextFrame};
use crate::table::{
    DocumentSurface, GridRegion, RenderedTable, TableOptions, TabularData, render,
};

/// Bullet used by [`Slide::add_bullet_point_box`].
pub const BULLET_CHAR: char = '•';

/// A slide: its layout and the shapes on it, in z-order.
///
/// Shape id 1 is reserved for the slide's shape tree, so shapes are
/// numbered from 2.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    layout_index: usize,
    shapes: Vec<Shape>,
    defaults: DeckDefaults,
}

impl Slide {
    /// A slide carrying a copy of every placeholder on `layout`.
    pub(crate) fn from_layout(layout_index: usize, layout: &SlideLayout, defaults: DeckDefaults) -> Self {
        let mut slide = Self {
            layout_index,
            shapes: Vec::with_capacity(layout.placeholders().len()),
            defaults,
        };
        for placeholder in layout.placeholders() {
            let id = slide.next_shape_id();
            let mut text = TextFrame::new();
            if placeholder.ph_type == PlaceholderType::SlideNumber {
                text.add_paragraph(slide_number_paragraph());
            }
            slide.shapes.push(Shape::new(
                id,
                format!("{} {}", placeholder.ph_type.display_name(), id.0 - 1),
                placeholder.frame,
                ShapeKind::Placeholder {
                    ph_type: placeholder.ph_type,
                    idx: placeholder.idx,
                    text,
                },
            ));
        }
        slide
    }

    /// Index of the layout in the master's layout list.
    pub fn layout_index(&self) -> usize {
        self.layout_index
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    fn next_shape_id(&self) -> ShapeId {
        let max = self.shapes.iter().map(|s| s.id.0).max().unwrap_or(1);
        ShapeId(max + 1)
    }

    fn push_shape(&mut self, shape: Shape) -> &mut Shape {
        self.shapes.push(shape);
        let last = self.shapes.len() - 1;
        &mut self.shapes[last]
    }

    fn position(&self, shape_ref: &ShapeRef) -> Result<usize> {
        let found = match shape_ref {
            ShapeRef::Index(i) => (*i < self.shapes.len()).then_some(*i),
            ShapeRef::Name(name) => self.shapes.iter().position(|s| s.name == *name),
            ShapeRef::Id(id) => self.shapes.iter().position(|s| s.id == *id),
        };
        found.ok_or_else(|| Error::ShapeNotFound(shape_ref.to_string()))
    }

    /// Look a shape up by index, name or id.
    pub fn shape(&self, shape_ref: impl Into<ShapeRef>) -> Result<&Shape> {
        let pos = self.position(&shape_ref.into())?;
        Ok(&self.shapes[pos])
    }

    pub fn shape_mut(&mut self, shape_ref: impl Into<ShapeRef>) -> Result<&mut Shape> {
        let pos = self.position(&shape_ref.into())?;
        Ok(&mut self.shapes[pos])
    }

    /// First placeholder of the given kind.
    pub fn placeholder(&self, kind: PlaceholderKind) -> Option<&Shape> {
        self.shapes
            .iter()
            .find(|s| s.placeholder_type().is_some_and(|t| t.kind() == kind))
    }

    pub fn placeholder_mut(&mut self, kind: PlaceholderKind) -> Option<&mut Shape> {
        self.shapes
            .iter_mut()
            .find(|s| s.placeholder_type().is_some_and(|t| t.kind() == kind))
    }

    /// Text of the title placeholder, if the slide has one.
    pub fn title(&self) -> Option<String> {
        self.placeholder(PlaceholderKind::Title).map(Shape::text)
    }

    pub fn set_title(&mut self, text: &str) -> Result<()> {
        let font = self.defaults.title.clone();
        self.set_placeholder_text(PlaceholderKind::Title, text, &font)
    }

    pub fn set_subtitle(&mut self, text: &str) -> Result<()> {
        let font = self.defaults.subtitle.clone();
        self.set_placeholder_text(PlaceholderKind::Subtitle, text, &font)
    }

    pub fn set_footer_text(&mut self, text: &str) -> Result<()> {
        let font = self.defaults.footer.clone();
        self.set_placeholder_text(PlaceholderKind::Footer, text, &font)
    }

    fn set_placeholder_text(&mut self, kind: PlaceholderKind, text: &str, defaults: &TextDefaults) -> Result<()> {
        let frame = self
            .placeholder_mut(kind)
            .and_then(Shape::text_frame_mut)
            .ok_or(Error::PlaceholderNotFound(kind))?;
        frame.set_text(text);
        frame.apply_font(
            &Font::new()
                .name(defaults.font_name.as_str())
                .size(defaults.font_size),
        );
        Ok(())
    }

    /// Add a text box holding `text`, one paragraph per line.
    pub fn add_text_box(&mut self, text: &str, frame: Frame) -> Result<ShapeId> {
        frame.validate()?;
        let id = self.next_shape_id();
        self.shapes.push(Shape::new(
            id,
            format!("TextBox {}", id.0 - 1),
            frame,
            ShapeKind::TextBox(TextFrame::from_text(text)),
        ));
        Ok(id)
    }

    /// Add a text box with one bulleted paragraph per item.
    pub fn add_bullet_point_box<S: AsRef<str>>(&mut self, items: &[S], frame: Frame) -> Result<ShapeId> {
        frame.validate()?;
        let mut text = TextFrame::new();
        for item in items {
            text.add_paragraph(Paragraph {
                bullet: Some(BULLET_CHAR),
                ..Paragraph::new(item.as_ref())
            });
        }
        let id = self.next_shape_id();
        self.shapes.push(Shape::new(
            id,
            format!("TextBox {}", id.0 - 1),
            frame,
            ShapeKind::TextBox(text),
        ));
        Ok(id)
    }

    /// Add an auto shape, optionally naming it.
    pub fn add_shape(&mut self, shape_type: AutoShapeType, frame: Frame, name: Option<&str>) -> Result<ShapeId> {
        frame.validate()?;
        let id = self.next_shape_id();
        let name = match name {
            Some(name) => name.to_string(),
            None => format!("{} {}", shape_type.display_name(), id.0 - 1),
        };
        self.shapes.push(Shape::new(
            id,
            name,
            frame,
            ShapeKind::AutoShape {
                shape_type,
                text: TextFrame::new(),
            },
        ));
        Ok(id)
    }

    pub fn set_shape_fill_color(&mut self, shape_ref: impl Into<ShapeRef>, color: RgbColor) -> Result<()> {
        self.shape_mut(shape_ref)?.set_fill(color)
    }

    pub fn set_shape_line_color(&mut self, shape_ref: impl Into<ShapeRef>, color: RgbColor) -> Result<()> {
        self.shape_mut(shape_ref)?.set_line_color(color)
    }

    /// Outline width in points.
    pub fn set_shape_line_weight(&mut self, shape_ref: impl Into<ShapeRef>, points: f64) -> Result<()> {
        self.shape_mut(shape_ref)?.set_line_weight(points)
    }

    /// Add a chart; the title is shown only when given and the legend only
    /// for more than one series.
    pub fn add_chart(
        &mut self,
        chart_type: ChartType,
        data: ChartData,
        frame: Frame,
        title: Option<&str>,
    ) -> Result<ShapeId> {
        data.validate()?;
        frame.validate()?;
        let id = self.next_shape_id();
        let chart = Chart::new(chart_type, data, title.map(str::to_string));
        self.shapes.push(Shape::new(
            id,
            format!("Chart {}", id.0 - 1),
            frame,
            ShapeKind::Chart(chart),
        ));
        Ok(id)
    }

    /// Render `data` as a table at `frame`.
    pub fn add_table_from_data(
        &mut self,
        data: &TabularData,
        frame: Frame,
        options: &TableOptions,
    ) -> Result<RenderedTable<ShapeId>> {
        render(self, data, &frame, options)
    }

    pub fn table(&self, id: ShapeId) -> Option<&Table> {
        self.shapes.iter().find(|s| s.id == id).and_then(Shape::table)
    }

    pub fn charts(&self) -> impl Iterator<Item = &Chart> {
        self.shapes.iter().filter_map(Shape::chart)
    }

    /// Show or hide the slide number; returns whether the slide has a
    /// slide-number placeholder at all.
    pub(crate) fn set_slide_number_visible(&mut self, visible: bool) -> bool {
        let Some(frame) = self
            .placeholder_mut(PlaceholderKind::SlideNumber)
            .and_then(Shape::text_frame_mut)
        else {
            return false;
        };
        if !visible {
            frame.clear();
        } else if !frame.has_field(Field::SlideNumber) {
            frame.clear();
            frame.add_paragraph(slide_number_paragraph());
        }
        true
    }

    /// Deep copy with shapes renumbered; auto shapes get a `_copy` suffix.
    pub(crate) fn duplicate(&self) -> Slide {
        let mut copy = self.clone();
        for (i, shape) in copy.shapes.iter_mut().enumerate() {
            shape.id = ShapeId(i as u32 + 2);
            if matches!(shape.kind, ShapeKind::AutoShape { .. }) {
                shape.name = format!("{}_copy", shape.name);
            }
        }
        copy
    }
}

fn slide_number_paragraph() -> Paragraph {
    Paragraph {
        runs: vec![Run::slide_number()],
        ..Paragraph::default()
    }
}

impl DocumentSurface for Slide {
    type Region = Frame;
    type Handle = ShapeId;
    type Grid<'a> = SlideTable<'a>;

    fn add_grid(&mut self, rows: usize, cols: usize, region: &Frame) -> Result<SlideTable<'_>> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidInput(format!(
                "cannot place an empty {}x{} table on a slide",
                rows, cols
            )));
        }
        region.validate()?;
        let id = self.next_shape_id();
        let shape = self.push_shape(Shape::new(
            id,
            format!("Table {}", id.0 - 1),
            *region,
            ShapeKind::Table(Table::new(rows, cols, region)),
        ));
        let ShapeKind::Table(table) = &mut shape.kind else {
            unreachable!("shape was built as a table");
        };
        Ok(SlideTable { id, table })
    }
}
