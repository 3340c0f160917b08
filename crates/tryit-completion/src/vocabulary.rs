//! Static completion vocabularies
//!
//! Order matters: suggestions are listed in vocabulary order, not
//! alphabetically, so the most common names come first.

use serde::{Deserialize, Serialize};

use crate::error::{CompletionError, CompletionResult};

pub const HTML_TAGS: &[&str] = &[
    "html", "head", "title", "meta", "link", "style", "script", "body", "header", "nav", "main",
    "section", "article", "aside", "footer", "h1", "h2", "h3", "h4", "h5", "h6", "p", "div",
    "span", "a", "img", "ul", "ol", "li", "table", "thead", "tbody", "tfoot", "tr", "th", "td",
    "form", "input", "button", "label", "select", "option", "textarea", "br", "hr", "strong", "em",
    "b", "i", "u", "small", "code", "pre", "blockquote", "figure", "figcaption", "video", "audio",
    "source", "iframe", "canvas", "svg", "noscript", "template", "details", "summary", "dialog",
    "address", "abbr", "cite", "mark", "time", "sub", "sup", "dl", "dt", "dd", "fieldset",
    "legend", "caption", "colgroup", "col", "picture", "progress", "meter", "output", "datalist",
    "optgroup", "area", "map", "base", "embed", "object", "param", "track", "wbr", "q", "s",
    "samp", "kbd", "var", "del", "ins", "bdi", "bdo", "ruby", "rt", "rp", "data",
];

pub const HTML_ATTRIBUTES: &[&str] = &[
    "id", "class", "style", "title", "href", "src", "alt", "name", "type", "value", "placeholder",
    "rel", "target", "width", "height", "lang", "dir", "hidden", "disabled", "checked", "readonly",
    "required", "selected", "multiple", "autofocus", "autocomplete", "action", "method", "for",
    "form", "max", "min", "maxlength", "minlength", "pattern", "step", "colspan", "rowspan",
    "tabindex", "role", "aria-label", "aria-hidden", "aria-describedby", "data-", "charset",
    "content", "http-equiv", "download", "loading", "srcset", "sizes", "controls", "autoplay",
    "loop", "muted", "poster", "onclick", "onchange", "oninput", "onsubmit",
];

pub const CSS_PROPERTIES: &[&str] = &[
    "color", "background", "background-color", "background-image", "background-size",
    "background-position", "background-repeat", "margin", "margin-top", "margin-right",
    "margin-bottom", "margin-left", "padding", "padding-top", "padding-right", "padding-bottom",
    "padding-left", "border", "border-radius", "border-color", "border-width", "border-style",
    "width", "height", "max-width", "min-width", "max-height", "min-height", "display", "position",
    "top", "right", "bottom", "left", "z-index", "float", "clear", "overflow", "font-family",
    "font-size", "font-weight", "font-style", "line-height", "letter-spacing", "text-align",
    "text-decoration", "text-transform", "text-shadow", "white-space", "vertical-align", "opacity",
    "visibility", "cursor", "box-shadow", "box-sizing", "transition", "transform", "animation",
    "flex", "flex-direction", "flex-wrap", "justify-content", "align-items", "align-content",
    "gap", "grid-template-columns", "grid-template-rows", "grid-gap", "list-style", "outline",
    "content",
];

/// The three ordered name lists the suggestion provider filters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub tags: Vec<String>,
    pub attributes: Vec<String>,
    pub properties: Vec<String>,
}

impl Vocabulary {
    /// Built-in HTML/CSS vocabulary
    pub fn builtin() -> Self {
        Self {
            tags: to_owned(HTML_TAGS),
            attributes: to_owned(HTML_ATTRIBUTES),
            properties: to_owned(CSS_PROPERTIES),
        }
    }

    pub fn validate(&self) -> CompletionResult<()> {
        for (label, list) in [
            ("tags", &self.tags),
            ("attributes", &self.attributes),
            ("properties", &self.properties),
        ] {
            if list.is_empty() {
                return Err(CompletionError::ConfigError(format!(
                    "Vocabulary list '{}' cannot be empty",
                    label
                )));
            }
            if list.iter().any(|entry| entry.trim().is_empty()) {
                return Err(CompletionError::ConfigError(format!(
                    "Vocabulary list '{}' contains an empty entry",
                    label
                )));
            }
        }
        Ok(())
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

fn to_owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
