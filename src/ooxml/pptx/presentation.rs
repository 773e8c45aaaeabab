//! The presentation: layouts, slides and document properties.

use std::io::Write;
use std::path::Path;

use tracing::{info, warn};

use crate::common::{Config, Error, LayoutRef, Length, Result};
use crate::ooxml::common::DocumentProperties;
use crate::ooxml::opc::PackageWriter;
use crate::ooxml::pptx::layout::{SlideLayout, standard_layouts};
use crate::ooxml::pptx::slide::Slide;
use crate::ooxml::pptx::writer;
use crate::table::TableOptions;

/// A PowerPoint presentation under construction.
///
/// New presentations are 10" x 7.5" with the eleven standard layouts and no
/// slides.
///
/// ```
/// use deckbook::ooxml::pptx::Presentation;
///
/// let mut pres = Presentation::new();
/// let slide = pres.add_slide("Title Slide")?;
/// slide.set_title("Quarterly Review")?;
/// slide.set_subtitle("Q3")?;
/// assert_eq!(pres.slide_count(), 1);
/// # Ok::<(), deckbook::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Presentation {
    layouts: Vec<SlideLayout>,
    slides: Vec<Slide>,
    config: Config,
    properties: DocumentProperties,
    slide_width: Length,
    slide_height: Length,
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}

impl Presentation {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            layouts: standard_layouts(),
            slides: Vec::new(),
            config,
            properties: DocumentProperties::default(),
            slide_width: Length::from_emus(9_144_000),
            slide_height: Length::from_emus(6_858_000),
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

    pub fn slide_width(&self) -> Length {
        self.slide_width
    }

    pub fn slide_height(&self) -> Length {
        self.slide_height
    }

    pub fn layouts(&self) -> &[SlideLayout] {
        &self.layouts
    }

    pub fn layout_names(&self) -> Vec<String> {
        self.layouts.iter().map(|l| l.name().to_string()).collect()
    }

    fn resolve_layout(&self, layout: &LayoutRef) -> Result<usize> {
        match layout {
            LayoutRef::Index(index) => {
                if *index < self.layouts.len() {
                    Ok(*index)
                } else {
                    Err(Error::LayoutIndexOutOfRange {
                        index: *index,
                        count: self.layouts.len(),
                    })
                }
            },
            LayoutRef::Name(name) => self
                .layouts
                .iter()
                .position(|l| l.name() == name)
                .ok_or_else(|| Error::LayoutNotFound {
                    name: name.clone(),
                    available: self.layout_names(),
                }),
        }
    }

    /// Append a slide built from a layout given by index or name.
    pub fn add_slide(&mut self, layout: impl Into<LayoutRef>) -> Result<&mut Slide> {
        let index = self.resolve_layout(&layout.into())?;
        let slide = Slide::from_layout(index, &self.layouts[index], self.config.deck.clone());
        self.slides.push(slide);
        let last = self.slides.len() - 1;
        Ok(&mut self.slides[last])
    }

    /// Append a slide using the configured default layout.
    pub fn add_default_slide(&mut self) -> Result<&mut Slide> {
        let layout = self.config.deck.layout.clone();
        self.add_slide(layout)
    }

    fn check_slide_index(&self, index: usize) -> Result<()> {
        if index < self.slides.len() {
            Ok(())
        } else {
            Err(Error::SlideIndexOutOfRange {
                index,
                count: self.slides.len(),
            })
        }
    }

    pub fn slide(&self, index: usize) -> Result<&Slide> {
        self.check_slide_index(index)?;
        Ok(&self.slides[index])
    }

    pub fn slide_mut(&mut self, index: usize) -> Result<&mut Slide> {
        self.check_slide_index(index)?;
        Ok(&mut self.slides[index])
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn delete_slide(&mut self, index: usize) -> Result<()> {
        self.check_slide_index(index)?;
        self.slides.remove(index);
        Ok(())
    }

    /// Move a slide; a target past the end moves it to the end.
    pub fn move_slide(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_slide_index(from)?;
        let slide = self.slides.remove(from);
        let to = to.min(self.slides.len());
        self.slides.insert(to, slide);
        Ok(())
    }

    /// Append a copy of a slide and return it.
    pub fn duplicate_slide(&mut self, index: usize) -> Result<&mut Slide> {
        let copy = self.slide(index)?.duplicate();
        self.slides.push(copy);
        let last = self.slides.len() - 1;
        Ok(&mut self.slides[last])
    }

    /// Show or hide the slide number on every slide that has a slide-number
    /// placeholder.
    pub fn set_slide_numbers_visibility(&mut self, visible: bool) {
        for (i, slide) in self.slides.iter_mut().enumerate() {
            let found = slide.set_slide_number_visible(visible);
            if !found && visible {
                warn!(slide = i, "slide has no slide number placeholder to make visible");
            }
        }
        info!(visible, slides = self.slides.len(), "updated slide number visibility");
    }

    /// Table options seeded from the deck defaults in the configuration.
    pub fn default_table_options(&self) -> TableOptions {
        TableOptions::from_defaults(&self.config.deck)
    }

    /// Serialize the presentation to `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let package = writer::build_package(self)?;
        PackageWriter::to_bytes(&package)
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let package = writer::build_package(self)?;
        PackageWriter::write_to_stream(writer, &package)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        writer::build_package(self)
            .and_then(|package| PackageWriter::write(path, &package))
            .map_err(|e| Error::saving(path, e))?;
        info!(path = %path.display(), slides = self.slides.len(), "saved presentation");
        Ok(())
    }
}
