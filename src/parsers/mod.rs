pub mod html;
pub mod table;

#[cfg(test)]
mod tests;

pub use html::TextOptions;
pub use table::{Cell, Table};

use scraper::{Html, Selector};

/// Parsed HTML document that text, images and tables are extracted from
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses a page leniently; malformed markup never fails
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Access the underlying scraper tree
    pub fn html(&self) -> &Html {
        &self.html
    }

    /// Text of the first `<title>`, if present and non-empty
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").unwrap();
        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty())
    }

    /// All text content, see [`html::document_text`]
    pub fn text(&self, options: &TextOptions) -> String {
        html::document_text(&self.html, options)
    }

    /// `src` of every image in document order
    pub fn images(&self) -> Vec<String> {
        html::document_images(&self.html)
    }

    /// Tables with more than one data row
    pub fn tables(&self) -> Vec<Table> {
        table::document_tables(&self.html)
    }
}

/// Parses HTML into a [`Document`]
pub fn parse(html: &str) -> Document {
    Document::parse(html)
}
