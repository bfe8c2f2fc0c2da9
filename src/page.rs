//! Page files declaring terminals and their lines.
//!
//! A page is TOML or JSON. Each terminal becomes a `div.termynal` container
//! in a fresh [`Document`], with one `span[data-ty]` child per line.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::animator::{LineKind, LINE_ATTR};
use crate::dom::Document;
use crate::host::CONTAINER_CLASS;

/// Attribute carrying a terminal's window title.
pub const TITLE_ATTR: &str = "data-title";

/// One declared line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSpec {
    /// `input`, `progress`, or anything else for literal output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
    #[serde(default)]
    pub text: String,
}

impl LineSpec {
    pub fn kind(&self) -> LineKind {
        LineKind::from_attr(self.ty.as_deref())
    }
}

/// One terminal window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, rename = "line")]
    pub lines: Vec<LineSpec>,
}

/// A parsed page file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default, rename = "terminal")]
    pub terminals: Vec<TerminalSpec>,
}

impl Page {
    /// Load a page, choosing the format from the file extension (`.json` or TOML).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read page: {:?}", path))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&content).with_context(|| format!("Invalid page file: {:?}", path))
        } else {
            Self::from_toml(&content).with_context(|| format!("Invalid page file: {:?}", path))
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse page TOML")
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse page JSON")
    }

    /// Build the document for this page.
    pub fn to_document(&self) -> Document {
        let mut doc = Document::new();
        let root = doc.root();
        for terminal in &self.terminals {
            let container = doc.create_element("div");
            doc.add_class(container, CONTAINER_CLASS);
            if let Some(title) = &terminal.title {
                doc.set_attribute(container, TITLE_ATTR, title);
            }
            doc.append_child(root, container);

            for line in &terminal.lines {
                let el = doc.create_element("span");
                doc.set_attribute(el, LINE_ATTR, line.ty.as_deref().unwrap_or(""));
                doc.set_text(el, &line.text);
                doc.append_child(container, el);
            }
        }
        doc
    }
}
