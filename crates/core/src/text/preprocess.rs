//! Equation preprocessing for the target pipeline.
//!
//! Normalizes operator spacing before segmentation. The rewrites are plain
//! substring replacements applied one after another over the whole string;
//! later passes see the output of earlier ones, so the order matters.

/// Literal rewrites, applied in order after `**` has become `^`.
const REWRITES: [(&str, &str); 8] = [
    ("{", " {"),
    ("*", " * "),
    ("-", " - "),
    ("+", " + "),
    ("(", " ("),
    ("/", " / "),
    ("  ", " "),
    ("( (", "(("),
];

/// Target equation preprocessor.
#[derive(Debug, Clone, Copy, Default)]
pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Normalize an equation.
    pub fn preprocess(&self, text: &str) -> String {
        let mut data = text.replace("**", "^");
        for (from, to) in REWRITES {
            data = data.replace(from, to);
        }
        data.trim().to_string()
    }
}

/// Shorthand for [`Preprocessor::preprocess`].
pub fn preprocess(text: &str) -> String {
    Preprocessor.preprocess(text)
}
