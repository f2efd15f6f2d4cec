//! Page template configuration.
//!
//! The renderer never hard-codes its look: it takes a [`Template`] carrying
//! the page title prefix, the inline stylesheet, and the number of per-sender
//! style classes that stylesheet defines. [`Template::default`] is the
//! built-in dark bubble theme.
//!
//! # Example
//!
//! ```rust
//! use chatsheet::config::Template;
//!
//! let template = Template::new()
//!     .with_title_prefix("Family chat ")
//!     .with_stylesheet(".chatbox { border: 1px solid; }")
//!     .with_palette_size(2);
//!
//! assert_eq!(template.style_class(3), Some("u1".to_string()));
//! ```

use serde::{Deserialize, Serialize};

/// Number of `uN` classes in [`DEFAULT_STYLESHEET`].
pub const DEFAULT_PALETTE_SIZE: usize = 6;

/// Built-in stylesheet: one `.chatbox` per run, `u1`..`u6` colour variants.
pub const DEFAULT_STYLESHEET: &str = r"
body {
    font-family: sans-serif;
    font-size: 10px;
}
a {
    color: hotpink;
}
span.username, span.date {
    color: gray;
}
.chatbox {
    width: 100%;
    margin-bottom: 10px;
    background: #bfbfbf;
}
.chatbox span {
    padding-bottom: 5px;
    color: darkred;
    font-weight: bold;
}
.chatbox .message {
    margin-left: 20px;
    font-size: 12px;
    white-space: pre-wrap;
}
.u1, .u2, .u3, .u4, .u5, .u6 {
    color: white;
    font-weight: bold;
}
.u1 { background: #0A1518 !important; }
.u2 { background: #423103 !important; }
.u3 { background: #707010 !important; }
.u4 { background: #0D376E !important; }
.u5 { background: #692D6E !important; }
.u6 { background: #413A6E !important; }
.chatbox.u1 span, .chatbox.u2 span, .chatbox.u3 span,
.chatbox.u4 span, .chatbox.u5 span, .chatbox.u6 span {
    color: #fffb00 !important;
}
";

/// Look of the generated page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Text placed before the input file name in `<title>` (default: `"WhatsApp archive "`)
    pub title_prefix: String,

    /// CSS inlined into the page `<style>` element
    pub stylesheet: String,

    /// Number of `uN` sender classes the stylesheet defines (default: 6).
    /// Zero leaves every run unstyled.
    pub palette_size: usize,
}

impl Default for Template {
    fn default() -> Self {
        Self {
            title_prefix: "WhatsApp archive ".to_string(),
            stylesheet: DEFAULT_STYLESHEET.to_string(),
            palette_size: DEFAULT_PALETTE_SIZE,
        }
    }
}

impl Template {
    /// Creates the built-in template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `<title>` prefix.
    #[must_use]
    pub fn with_title_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.title_prefix = prefix.into();
        self
    }

    /// Replaces the stylesheet.
    #[must_use]
    pub fn with_stylesheet(mut self, css: impl Into<String>) -> Self {
        self.stylesheet = css.into();
        self
    }

    /// Sets how many sender classes the stylesheet provides.
    #[must_use]
    pub fn with_palette_size(mut self, size: usize) -> Self {
        self.palette_size = size;
        self
    }

    /// CSS class for the sender with display index `sender_index` (1-based).
    ///
    /// Indices past the palette wrap around, so the 7th sender of a 6-colour
    /// palette shares `u1` with the first. Returns `None` for an empty
    /// palette or index 0.
    pub fn style_class(&self, sender_index: usize) -> Option<String> {
        if self.palette_size == 0 || sender_index == 0 {
            return None;
        }
        Some(format!("u{}", (sender_index - 1) % self.palette_size + 1))
    }
}
