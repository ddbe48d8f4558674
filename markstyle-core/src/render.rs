// markstyle-core/src/render.rs
//! Rendering: applying an ordered transform list to an injected style sink.
//!
//! The sink is an explicit capability object exposing exactly the known
//! style-setter operations; nothing is discovered via ambient state or
//! string-built method names. Each style call narrows or overwrites
//! sub-ranges of previously styled text, so transforms must be applied in
//! list order: order is an observable contract, not an implementation
//! detail.
//!
//! License: MIT OR Apache-2.0

use log::debug;

use crate::config::StyleSetting;
use crate::errors::MarkStyleError;
use crate::transform::{Parsed, Transform};

/// The host-side styling target.
///
/// One method per supported style property, each addressing a character
/// range of the text, plus `set_text` to finalize the cleaned string.
/// A sink that cannot be styled reports [`MarkStyleError::NotStyleable`];
/// the core propagates it without recovery.
pub trait StyleSink {
    fn set_font(&mut self, font: &str, start: usize, len: usize) -> Result<(), MarkStyleError>;
    fn set_font_size(&mut self, size: f64, start: usize, len: usize) -> Result<(), MarkStyleError>;
    fn set_fill_color(&mut self, color: &[f64], start: usize, len: usize) -> Result<(), MarkStyleError>;
    fn set_stroke_color(&mut self, color: &[f64], start: usize, len: usize) -> Result<(), MarkStyleError>;
    fn set_stroke_width(&mut self, width: f64, start: usize, len: usize) -> Result<(), MarkStyleError>;
    fn set_tracking(&mut self, tracking: f64, start: usize, len: usize) -> Result<(), MarkStyleError>;
    fn set_text(&mut self, text: &str) -> Result<(), MarkStyleError>;
}

/// Dispatches one transform to the matching sink method.
pub fn apply_transform(sink: &mut dyn StyleSink, transform: &Transform) -> Result<(), MarkStyleError> {
    let (start, len) = (transform.start, transform.len);
    match &transform.setting {
        StyleSetting::Font(font) => sink.set_font(font, start, len),
        StyleSetting::FontSize(size) => sink.set_font_size(*size, start, len),
        StyleSetting::FillColor(color) => sink.set_fill_color(color, start, len),
        StyleSetting::StrokeColor(color) => sink.set_stroke_color(color, start, len),
        StyleSetting::StrokeWidth(width) => sink.set_stroke_width(*width, start, len),
        StyleSetting::Tracking(tracking) => sink.set_tracking(*tracking, start, len),
    }
}

/// Applies all transforms to the sink in order, then sets the cleaned text.
pub fn render(parsed: &Parsed, sink: &mut dyn StyleSink) -> Result<(), MarkStyleError> {
    debug!("Rendering {} transforms.", parsed.transforms.len());
    for transform in &parsed.transforms {
        apply_transform(sink, transform)?;
    }
    sink.set_text(&parsed.text)
}

/// Like [`render`], but applies `base` styles over the whole text first so
/// unmatched spans get a defined appearance (e.g. a regular font and a base
/// size) before the per-match transforms narrow them.
pub fn render_with_base(
    parsed: &Parsed,
    base: &[StyleSetting],
    sink: &mut dyn StyleSink,
) -> Result<(), MarkStyleError> {
    let full_len = parsed.text.chars().count();
    for setting in base {
        apply_transform(
            sink,
            &Transform {
                setting: setting.clone(),
                start: 0,
                len: full_len,
            },
        )?;
    }
    render(parsed, sink)
}

/// A recording sink: captures every applied transform and the final text.
///
/// Lets callers exercise the rendering fold and assert on application order
/// without a live host object.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TransformLog {
    pub applied: Vec<Transform>,
    pub text: Option<String>,
}

impl TransformLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, setting: StyleSetting, start: usize, len: usize) {
        self.applied.push(Transform { setting, start, len });
    }
}

impl StyleSink for TransformLog {
    fn set_font(&mut self, font: &str, start: usize, len: usize) -> Result<(), MarkStyleError> {
        self.record(StyleSetting::Font(font.to_string()), start, len);
        Ok(())
    }

    fn set_font_size(&mut self, size: f64, start: usize, len: usize) -> Result<(), MarkStyleError> {
        self.record(StyleSetting::FontSize(size), start, len);
        Ok(())
    }

    fn set_fill_color(&mut self, color: &[f64], start: usize, len: usize) -> Result<(), MarkStyleError> {
        self.record(StyleSetting::FillColor(color.to_vec()), start, len);
        Ok(())
    }

    fn set_stroke_color(&mut self, color: &[f64], start: usize, len: usize) -> Result<(), MarkStyleError> {
        self.record(StyleSetting::StrokeColor(color.to_vec()), start, len);
        Ok(())
    }

    fn set_stroke_width(&mut self, width: f64, start: usize, len: usize) -> Result<(), MarkStyleError> {
        self.record(StyleSetting::StrokeWidth(width), start, len);
        Ok(())
    }

    fn set_tracking(&mut self, tracking: f64, start: usize, len: usize) -> Result<(), MarkStyleError> {
        self.record(StyleSetting::Tracking(tracking), start, len);
        Ok(())
    }

    fn set_text(&mut self, text: &str) -> Result<(), MarkStyleError> {
        self.text = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_applies_transforms_in_order_then_sets_text() {
        let parsed = Parsed {
            text: "bold text".to_string(),
            transforms: vec![
                Transform {
                    setting: StyleSetting::Font("Menlo-Bold".to_string()),
                    start: 0,
                    len: 4,
                },
                Transform {
                    setting: StyleSetting::FillColor(vec![1.0, 0.0, 0.0]),
                    start: 0,
                    len: 4,
                },
            ],
        };

        let mut sink = TransformLog::new();
        render(&parsed, &mut sink).unwrap();

        assert_eq!(sink.applied, parsed.transforms);
        assert_eq!(sink.text.as_deref(), Some("bold text"));
    }

    #[test]
    fn base_styles_cover_the_whole_text_first() {
        let parsed = Parsed {
            text: "hello".to_string(),
            transforms: vec![],
        };
        let base = vec![
            StyleSetting::Font("Menlo-Regular".to_string()),
            StyleSetting::FontSize(40.0),
        ];

        let mut sink = TransformLog::new();
        render_with_base(&parsed, &base, &mut sink).unwrap();

        assert_eq!(sink.applied.len(), 2);
        assert_eq!(sink.applied[0].start, 0);
        assert_eq!(sink.applied[0].len, 5);
        assert_eq!(sink.applied[1].setting, StyleSetting::FontSize(40.0));
    }

    #[test]
    fn sink_errors_propagate_unchanged() {
        struct NotText;
        impl StyleSink for NotText {
            fn set_font(&mut self, _: &str, _: usize, _: usize) -> Result<(), MarkStyleError> {
                Err(MarkStyleError::NotStyleable("Shape Layer 1".to_string()))
            }
            fn set_font_size(&mut self, _: f64, _: usize, _: usize) -> Result<(), MarkStyleError> {
                unreachable!()
            }
            fn set_fill_color(&mut self, _: &[f64], _: usize, _: usize) -> Result<(), MarkStyleError> {
                unreachable!()
            }
            fn set_stroke_color(&mut self, _: &[f64], _: usize, _: usize) -> Result<(), MarkStyleError> {
                unreachable!()
            }
            fn set_stroke_width(&mut self, _: f64, _: usize, _: usize) -> Result<(), MarkStyleError> {
                unreachable!()
            }
            fn set_tracking(&mut self, _: f64, _: usize, _: usize) -> Result<(), MarkStyleError> {
                unreachable!()
            }
            fn set_text(&mut self, _: &str) -> Result<(), MarkStyleError> {
                unreachable!()
            }
        }

        let parsed = Parsed {
            text: "x".to_string(),
            transforms: vec![Transform {
                setting: StyleSetting::Font("Menlo-Bold".to_string()),
                start: 0,
                len: 1,
            }],
        };

        let err = render(&parsed, &mut NotText).unwrap_err();
        assert!(matches!(err, MarkStyleError::NotStyleable(_)));
    }
}
