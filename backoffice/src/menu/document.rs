//! Menu document primitives
//!
//! A flat stream of drawing operations both the preview and the PDF export
//! are built from. The PDF raster backend consuming [`DocOp`] streams is an
//! external collaborator; this module only describes content.

use serde::{Deserialize, Serialize};

/// One drawing operation of a rendered menu document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "op")]
pub enum DocOp {
    /// Document or page heading (store name, menu title)
    Heading { text: String, level: u8 },
    /// Sub-line under the heading (address, phone)
    Subtitle { text: String },
    /// Category section header
    CategoryHeader { name: String },
    /// One menu item line
    ItemLine {
        name: String,
        price_text: String,
        description: Option<String>,
        image_url: Option<String>,
        chef_recommendation: bool,
    },
    /// Horizontal rule
    Divider,
    /// Start a new page
    PageBreak,
}

/// Format a cent price for menu display
pub fn format_price(cents: i64) -> String {
    format!("{:.2}€", cents as f64 / 100.0)
}

/// Builder collecting [`DocOp`]s in document order
#[derive(Debug, Default)]
pub struct MenuDocBuilder {
    ops: Vec<DocOp>,
}

impl MenuDocBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heading(&mut self, text: impl Into<String>, level: u8) -> &mut Self {
        self.ops.push(DocOp::Heading { text: text.into(), level });
        self
    }

    pub fn subtitle(&mut self, text: impl Into<String>) -> &mut Self {
        self.ops.push(DocOp::Subtitle { text: text.into() });
        self
    }

    pub fn category(&mut self, name: impl Into<String>) -> &mut Self {
        self.ops.push(DocOp::CategoryHeader { name: name.into() });
        self
    }

    pub fn item(
        &mut self,
        name: impl Into<String>,
        price_cents: i64,
        description: Option<String>,
        image_url: Option<String>,
        chef_recommendation: bool,
    ) -> &mut Self {
        self.ops.push(DocOp::ItemLine {
            name: name.into(),
            price_text: format_price(price_cents),
            description,
            image_url,
            chef_recommendation,
        });
        self
    }

    pub fn divider(&mut self) -> &mut Self {
        self.ops.push(DocOp::Divider);
        self
    }

    pub fn page_break(&mut self) -> &mut Self {
        self.ops.push(DocOp::PageBreak);
        self
    }

    pub fn into_ops(self) -> Vec<DocOp> {
        self.ops
    }
}
