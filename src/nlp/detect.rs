//! Language detection seam
//!
//! Real language identification lives outside this crate. Callers plug it in
//! through [`LanguageDetector`]; any `Fn(&str) -> String` closure works.
//! [`ScriptDetector`] is a dependency-free fallback that only distinguishes
//! the scripts this crate can segment.

/// Maps a document to a language tag such as `"en"` or `"ko"`.
///
/// Implementations must be synchronous and free of side effects.
pub trait LanguageDetector: Send + Sync {
    /// Return the tag for `text`
    fn detect(&self, text: &str) -> String;
}

impl<F> LanguageDetector for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn detect(&self, text: &str) -> String {
        self(text)
    }
}

/// Tags text by its dominant script.
///
/// Hangul-dominant text is `"ko"`, Latin-dominant text is `"en"`, anything
/// else (including text with no letters) is `"und"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptDetector;

impl ScriptDetector {
    fn is_hangul(c: char) -> bool {
        matches!(c,
            '\u{AC00}'..='\u{D7A3}'
            | '\u{1100}'..='\u{11FF}'
            | '\u{3130}'..='\u{318F}'
            | '\u{A960}'..='\u{A97F}'
            | '\u{D7B0}'..='\u{D7FF}')
    }

    fn is_latin(c: char) -> bool {
        c.is_ascii_alphabetic() || matches!(c, '\u{00C0}'..='\u{024F}')
    }
}

impl LanguageDetector for ScriptDetector {
    fn detect(&self, text: &str) -> String {
        let (hangul, latin) = text.chars().fold((0usize, 0usize), |(h, l), c| {
            if Self::is_hangul(c) {
                (h + 1, l)
            } else if Self::is_latin(c) {
                (h, l + 1)
            } else {
                (h, l)
            }
        });

        let tag = if hangul > 0 && hangul >= latin {
            "ko"
        } else if latin > 0 {
            "en"
        } else {
            "und"
        };
        tag.to_string()
    }
}
