// markstyle-core/src/transform.rs
//! Provides core data structures for matches and style transforms produced
//! by the markdown engine within the `markstyle-core` library.

use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::config::StyleSetting;

/// One located occurrence of a rule's matcher in the source text.
///
/// Ephemeral: produced during scanning and consumed by the strip+remap
/// pass (or surfaced by scan summaries); never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkupMatch {
    /// Name of the rule that produced this match.
    pub rule_name: String,
    /// Start offset of the match in the ORIGINAL text, in characters.
    pub start: usize,
    /// The full matched span, delimiter syntax included.
    pub raw: String,
    /// The captured content to keep.
    pub content: String,
}

impl MarkupMatch {
    /// Number of delimiter characters this match will strip.
    pub fn removed_chars(&self) -> usize {
        self.raw.chars().count() - self.content.chars().count()
    }
}

/// One style-operation instruction targeting a character range in the
/// cleaned text.
///
/// Serializes in the downstream wire shape:
/// `{ "method": "setFont", "args": ["Menlo-Bold", 15, 4] }`.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// The style property and value to apply.
    pub setting: StyleSetting,
    /// Range start in the CLEANED text, in characters.
    pub start: usize,
    /// Range length: the character count of the captured content.
    pub len: usize,
}

impl Transform {
    /// The `set<Capitalized>` method name for this transform.
    pub fn method_name(&self) -> &'static str {
        self.setting.method_name()
    }
}

impl Serialize for Transform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Transform", 2)?;
        state.serialize_field("method", self.method_name())?;
        state.serialize_field("args", &TransformArgs(self))?;
        state.end()
    }
}

/// Serializes `[value, start, len]` with the value typed per property.
struct TransformArgs<'a>(&'a Transform);

impl Serialize for TransformArgs<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(3))?;
        match &self.0.setting {
            StyleSetting::Font(v) => seq.serialize_element(v)?,
            StyleSetting::FontSize(v)
            | StyleSetting::StrokeWidth(v)
            | StyleSetting::Tracking(v) => seq.serialize_element(v)?,
            StyleSetting::FillColor(v) | StyleSetting::StrokeColor(v) => {
                seq.serialize_element(v)?
            }
        }
        seq.serialize_element(&self.0.start)?;
        seq.serialize_element(&self.0.len)?;
        seq.end()
    }
}

/// The engine's output and the plugin-chain interchange shape: the cleaned
/// text plus the ordered transform list anchored to it.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Parsed {
    /// The input string with all rule delimiter syntax removed.
    pub text: String,
    /// Transforms in emission order. Order is an observable contract: the
    /// rendering fold must apply them left to right.
    pub transforms: Vec<Transform>,
}

impl Parsed {
    /// Serializes the full document in the downstream wire shape.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// A per-rule summary of matches found in one scan, for reporting UIs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSummaryItem {
    pub rule_name: String,
    pub occurrences: usize,
    pub contents: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StyleSetting;

    #[test]
    fn transform_serializes_in_wire_shape() {
        let t = Transform {
            setting: StyleSetting::Font("Menlo-Bold".to_string()),
            start: 15,
            len: 4,
        };
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"method":"setFont","args":["Menlo-Bold",15,4]}"#);
    }

    #[test]
    fn color_transform_serializes_components() {
        let t = Transform {
            setting: StyleSetting::FillColor(vec![1.0, 1.0, 0.0]),
            start: 0,
            len: 11,
        };
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"method":"setFillColor","args":[[1.0,1.0,0.0],0,11]}"#);
    }

    #[test]
    fn removed_chars_counts_characters_not_bytes() {
        let m = MarkupMatch {
            rule_name: "bold".to_string(),
            start: 0,
            raw: "*bôld*".to_string(),
            content: "bôld".to_string(),
        };
        assert_eq!(m.removed_chars(), 2);
    }
}
