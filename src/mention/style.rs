//! Styled projection of raw text.
//!
//! A [`StyledText`] is disposable output: it is rebuilt from raw text on every
//! formatting pass and never read back into the engine.

use std::ops::Range;

use crate::theme::Color;

/// Visual attributes applied to a run of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub bold: bool,
    pub font_size: f32,
}

impl TextStyle {
    pub const fn new(color: Color, font_size: f32) -> Self {
        Self {
            color,
            bold: false,
            font_size,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// A style applied over a char range
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSpan {
    pub range: Range<usize>,
    pub style: TextStyle,
}

/// Raw text plus the ordered style spans to apply over it.
///
/// The first span (when the text is not empty) covers the whole text with the
/// base style; every later span overlays a mention and never overlaps another
/// overlay.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyledText {
    pub text: String,
    pub spans: Vec<StyleSpan>,
}

impl StyledText {
    /// The spans that overlay mentions (everything after the base span)
    pub fn overlays(&self) -> &[StyleSpan] {
        self.spans.get(1..).unwrap_or(&[])
    }

    /// Effective style at a char offset (last span wins)
    pub fn style_at(&self, offset: usize) -> Option<TextStyle> {
        self.spans
            .iter()
            .rev()
            .find(|span| span.range.contains(&offset))
            .map(|span| span.style)
    }
}
