// markstyle-core/tests/plugin_integration_tests.rs
//! Tests for the post-parse plugin chain and the rendering fold: plugins
//! may rewrite the cleaned text as long as they keep the transform offsets
//! correct relative to their own edits.

use anyhow::Result;
use markstyle_core::config::StyleSetting;
use markstyle_core::plugins::{apply_plugins, StylePlugin};
use markstyle_core::render::{render_with_base, TransformLog};
use markstyle_core::transform::{Parsed, Transform};
use markstyle_core::parse_markup;

struct CapitalizeWords;

impl StylePlugin for CapitalizeWords {
    fn name(&self) -> &str {
        "capitalize"
    }

    fn transform(&self, parsed: Parsed) -> Result<Parsed> {
        let mut text = String::with_capacity(parsed.text.len());
        let mut at_word_start = true;
        for c in parsed.text.chars() {
            if at_word_start {
                text.extend(c.to_uppercase());
            } else {
                text.push(c);
            }
            at_word_start = !c.is_alphanumeric();
        }
        Ok(Parsed {
            text,
            transforms: parsed.transforms,
        })
    }
}

/// Removes every vowel and re-anchors all transforms to the shorter text.
struct RemoveVowels;

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

impl StylePlugin for RemoveVowels {
    fn name(&self) -> &str {
        "remove-vowels"
    }

    fn transform(&self, parsed: Parsed) -> Result<Parsed> {
        let chars: Vec<char> = parsed.text.chars().collect();
        // removed[i] = vowels stripped before character i.
        let mut removed = Vec::with_capacity(chars.len() + 1);
        let mut count = 0usize;
        for c in &chars {
            removed.push(count);
            if is_vowel(*c) {
                count += 1;
            }
        }
        removed.push(count);

        let text: String = chars.iter().filter(|c| !is_vowel(**c)).collect();
        let transforms = parsed
            .transforms
            .into_iter()
            .map(|t| {
                let end = (t.start + t.len).min(chars.len());
                let start = t.start.min(chars.len());
                Transform {
                    start: start - removed[start],
                    len: (end - removed[end]) - (start - removed[start]),
                    setting: t.setting,
                }
            })
            .collect();

        Ok(Parsed { text, transforms })
    }
}

#[test]
fn simple_plugin_rewrites_text_only() -> Result<()> {
    let markdown = "This is a *sample* markdown text with _some_ formatting.";
    let parsed = parse_markup(markdown, None, None)?;

    let plugins: Vec<Box<dyn StylePlugin>> = vec![Box::new(CapitalizeWords)];
    let parsed = apply_plugins(parsed, &plugins)?;

    assert_eq!(parsed.text, "This Is A Sample Markdown Text With Some Formatting.");
    Ok(())
}

#[test]
fn editing_plugin_must_re_anchor_transforms() -> Result<()> {
    let markdown = "This is a *sample* markdown text with _some_ formatting.";
    let parsed = parse_markup(markdown, None, None)?;
    assert_eq!(parsed.text, "This is a sample markdown text with some formatting.");
    assert_eq!((parsed.transforms[0].start, parsed.transforms[0].len), (10, 6));
    assert_eq!((parsed.transforms[1].start, parsed.transforms[1].len), (36, 4));

    let plugins: Vec<Box<dyn StylePlugin>> = vec![Box::new(RemoveVowels)];
    let parsed = apply_plugins(parsed, &plugins)?;

    assert_eq!(parsed.text, "Ths s  smpl mrkdwn txt wth sm frmttng.");
    assert_eq!(
        parsed.transforms,
        vec![
            Transform {
                setting: StyleSetting::Font("Menlo-Bold".to_string()),
                start: 7,
                len: 4, // "smpl"
            },
            Transform {
                setting: StyleSetting::Font("Menlo-Italic".to_string()),
                start: 27,
                len: 2, // "sm"
            },
        ]
    );
    Ok(())
}

#[test]
fn render_folds_base_styles_then_transforms_in_order() -> Result<()> {
    let parsed = parse_markup("make me *bold*", None, None)?;

    let base = vec![
        StyleSetting::Font("Menlo-Regular".to_string()),
        StyleSetting::FontSize(40.0),
    ];
    let mut sink = TransformLog::new();
    render_with_base(&parsed, &base, &mut sink)?;

    assert_eq!(sink.text.as_deref(), Some("make me bold"));
    assert_eq!(sink.applied.len(), 3);
    // Base styles cover the whole cleaned text, then the match narrows it.
    assert_eq!(sink.applied[0].setting, StyleSetting::Font("Menlo-Regular".to_string()));
    assert_eq!((sink.applied[0].start, sink.applied[0].len), (0, 12));
    assert_eq!(sink.applied[1].setting, StyleSetting::FontSize(40.0));
    assert_eq!(sink.applied[2].setting, StyleSetting::Font("Menlo-Bold".to_string()));
    assert_eq!((sink.applied[2].start, sink.applied[2].len), (8, 4));
    Ok(())
}
