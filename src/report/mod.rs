// src/report/mod.rs

pub mod format;
pub mod compose;

pub use compose::{compose, not_supported};

use serde::Serialize;

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ActionLink {
    pub label: String,
    pub url: String,
}

/// The finished artifact handed to the delivery sink: an ordered sequence of
/// rendered sections plus the action links. Immutable once composed; the
/// sink owns transport and rendering.
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub sections: Vec<String>,
    pub action_links: Vec<ActionLink>,
}

impl Report {
    pub fn text(&self) -> String {
        self.sections.join("\n\n")
    }
}
