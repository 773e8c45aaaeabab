//! Text content of shapes and table cells.

use crate::common::Font;

/// Placeholder text PowerPoint shows for a slide-number field before it is
/// evaluated.
pub const SLIDE_NUMBER_TEXT: &str = "‹#›";

/// Fields a run can carry instead of literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    SlideNumber,
}

impl Field {
    pub(crate) fn xml_type(&self) -> &'static str {
        match self {
            Field::SlideNumber => "slidenum",
        }
    }
}

/// A run of characters sharing one font.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Run {
    pub text: String,
    pub font: Font,
    pub field: Option<Field>,
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn slide_number() -> Self {
        Self {
            text: SLIDE_NUMBER_TEXT.to_string(),
            font: Font::default(),
            field: Some(Field::SlideNumber),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    /// Outline level, 0-8
    pub level: u8,
    /// Bullet character; `None` leaves bulleting to the placeholder style
    pub bullet: Option<char>,
}

impl Paragraph {
    pub fn new(text: &str) -> Self {
        let runs = if text.is_empty() {
            Vec::new()
        } else {
            vec![Run::new(text)]
        };
        Self {
            runs,
            ..Self::default()
        }
    }

    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Ordered paragraphs of a text body.
///
/// A frame always holds at least one paragraph, possibly without runs.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFrame {
    paragraphs: Vec<Paragraph>,
    pub word_wrap: bool,
}

impl Default for TextFrame {
    fn default() -> Self {
        Self {
            paragraphs: vec![Paragraph::default()],
            word_wrap: true,
        }
    }
}

impl TextFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// A frame holding `text` as one paragraph per line.
    pub fn from_text(text: &str) -> Self {
        let mut frame = Self::default();
        frame.set_text(text);
        frame
    }

    /// A frame holding `text` as exactly one run, line breaks included.
    pub fn single_run(text: &str) -> Self {
        Self {
            paragraphs: vec![Paragraph::new(text)],
            word_wrap: true,
        }
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Replace the content with one paragraph per line of `text`.
    pub fn set_text(&mut self, text: &str) {
        self.paragraphs = text.split('\n').map(Paragraph::new).collect();
    }

    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        // a lone empty paragraph is the blank frame, not content
        if self.paragraphs.len() == 1 && self.paragraphs[0].runs.is_empty() {
            self.paragraphs.clear();
        }
        self.paragraphs.push(paragraph);
    }

    pub fn clear(&mut self) {
        self.paragraphs = vec![Paragraph::default()];
    }

    /// Plain text with paragraphs joined by `\n`.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn runs(&self) -> impl Iterator<Item = &Run> {
        self.paragraphs.iter().flat_map(|p| p.runs.iter())
    }

    /// Overlay `font` onto every existing run.
    pub fn apply_font(&mut self, font: &Font) {
        for run in self.paragraphs.iter_mut().flat_map(|p| p.runs.iter_mut()) {
            run.font.apply(font);
        }
    }

    pub fn has_field(&self, field: Field) -> bool {
        self.runs().any(|r| r.field == Some(field))
    }
}
