use crate::parsers::Document;
use scraper::{Html, Node, Selector};
use url::Url;

/// Elements whose text is never part of the page content
const NON_CONTENT_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Options for text extraction
#[derive(Debug, Clone, Copy, Default)]
pub struct TextOptions {
    /// Collapse whitespace runs into single spaces and trim the result
    pub normalize_whitespace: bool,
}

/// Extracts the text content of an HTML page
///
/// Text nodes are concatenated in document order without a separator, so
/// the result reads the way the markup was laid out.
pub fn extract_text(html: &str) -> String {
    extract_text_with_options(html, &TextOptions::default())
}

/// Extracts the text content of an HTML page with specific options
pub fn extract_text_with_options(html: &str, options: &TextOptions) -> String {
    Document::parse(html).text(options)
}

/// Extracts the `src` of every `<img>` in document order
pub fn extract_images(html: &str) -> Vec<String> {
    Document::parse(html).images()
}

pub(crate) fn document_text(doc: &Html, options: &TextOptions) -> String {
    let mut text = String::new();

    for node in doc.tree.root().descendants() {
        let Some(fragment) = node.value().as_text() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| match ancestor.value() {
            Node::Element(el) => NON_CONTENT_ELEMENTS.contains(&el.name()),
            _ => false,
        });
        if !hidden {
            text.push_str(fragment);
        }
    }

    if options.normalize_whitespace {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    } else {
        text
    }
}

pub(crate) fn document_images(doc: &Html) -> Vec<String> {
    let img_selector = Selector::parse("img").unwrap();

    let mut images = Vec::new();
    for img in doc.select(&img_selector) {
        match img.value().attr("src") {
            Some(src) => images.push(src.to_string()),
            None => ::log::debug!("Skipping <img> without src"),
        }
    }

    ::log::debug!("HTML parser found {} images", images.len());
    images
}

/// Resolves image references against the URL of the page they came from
///
/// References are kept as written when the base does not parse or the join
/// fails.
pub fn resolve_image_urls(base: &str, images: &[String]) -> Vec<String> {
    let Ok(base) = Url::parse(base) else {
        return images.to_vec();
    };

    images
        .iter()
        .map(|src| match base.join(src) {
            Ok(url) => url.to_string(),
            Err(_) => src.clone(),
        })
        .collect()
}
