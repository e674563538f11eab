//! Code syntax highlighting using syntect.

use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;
use thiserror::Error;

const LIGHT_THEME: &str = "InspiredGitHub";
const DARK_THEME: &str = "base16-ocean.dark";

#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("theme '{0}' missing from the default theme set")]
    MissingTheme(&'static str),

    #[error("no syntax found for language '{0}'")]
    UnknownLanguage(String),

    #[error("highlighting failed: {0}")]
    Engine(#[from] syntect::Error),
}

/// Immutable highlighting engine handle.
///
/// Constructed once at startup (the build's one fallible setup step) and
/// passed by reference through the renderer, so tests can build their
/// own instance instead of relying on ambient global state.
pub struct Highlighter {
    syntaxes: SyntaxSet,
    light: Theme,
    dark: Theme,
}

impl Highlighter {
    pub fn new() -> Result<Self, HighlightError> {
        let syntaxes = SyntaxSet::load_defaults_newlines();
        let mut themes = ThemeSet::load_defaults().themes;
        let light = themes
            .remove(LIGHT_THEME)
            .ok_or(HighlightError::MissingTheme(LIGHT_THEME))?;
        let dark = themes
            .remove(DARK_THEME)
            .ok_or(HighlightError::MissingTheme(DARK_THEME))?;

        Ok(Self {
            syntaxes,
            light,
            dark,
        })
    }

    /// Highlight `code` once per theme, wrapped in containers the
    /// stylesheet toggles on `prefers-color-scheme`.
    ///
    /// Errors here are recoverable: the caller falls back to escaped
    /// plain text rather than aborting the document.
    pub fn highlight(&self, code: &str, lang: &str) -> Result<String, HighlightError> {
        let syntax = self
            .syntaxes
            .find_syntax_by_token(lang)
            .or_else(|| self.syntaxes.find_syntax_by_extension(lang))
            .ok_or_else(|| HighlightError::UnknownLanguage(lang.to_string()))?;

        let light = highlighted_html_for_string(code, &self.syntaxes, syntax, &self.light)?;
        let dark = highlighted_html_for_string(code, &self.syntaxes, syntax, &self.dark)?;

        Ok(format!(
            "<div class=\"code-light\">{light}</div><div class=\"code-dark\">{dark}</div>"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_succeeds_with_default_themes() {
        assert!(Highlighter::new().is_ok());
    }

    #[test]
    fn test_recognized_language_produces_both_themes() {
        let highlighter = Highlighter::new().unwrap();
        let html = highlighter.highlight("fn main() {}", "rust").unwrap();
        assert!(html.contains("code-light"));
        assert!(html.contains("code-dark"));
        assert!(html.contains("main"));
    }

    #[test]
    fn test_source_angle_brackets_are_escaped() {
        let highlighter = Highlighter::new().unwrap();
        let html = highlighter
            .highlight("let v: Vec<u8> = a < b;", "rust")
            .unwrap();
        assert!(!html.contains("Vec<u8>"));
        assert!(html.contains("&lt;"));
    }

    #[test]
    fn test_unknown_language_is_an_error() {
        let highlighter = Highlighter::new().unwrap();
        let err = highlighter.highlight("hello", "klingon").unwrap_err();
        assert!(matches!(err, HighlightError::UnknownLanguage(lang) if lang == "klingon"));
    }

    #[test]
    fn test_extension_token_resolves() {
        let highlighter = Highlighter::new().unwrap();
        assert!(highlighter.highlight("const x = 1;", "js").is_ok());
    }
}
