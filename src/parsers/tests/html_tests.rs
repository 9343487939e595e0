use crate::parsers::html::{self, TextOptions};
use crate::parsers::{self, Document};
use crate::utils::clean_data;

#[test]
fn test_extract_text_concatenates_in_document_order() {
    let page = "<html><head><title>Prices</title></head><body><p>Hello, <b>world</b>!</p><p>Bye</p></body></html>";
    assert_eq!(html::extract_text(page), "PricesHello, world!Bye");
}

#[test]
fn test_extract_text_skips_scripts_and_styles() {
    let page = r#"<html><head><style>p { color: red }</style><script>var x = "hidden";</script></head>
        <body><p>Visible</p><noscript>Enable JS</noscript><script>track()</script></body></html>"#;
    let text = html::extract_text_with_options(
        page,
        &TextOptions {
            normalize_whitespace: true,
        },
    );
    assert_eq!(text, "Visible");
}

#[test]
fn test_extract_text_skips_template_content() {
    let page = "<body><p>Shown</p><template><p>Hidden</p></template></body>";
    let options = TextOptions {
        normalize_whitespace: true,
    };
    assert_eq!(html::extract_text_with_options(page, &options), "Shown");
    assert_eq!(html::extract_text(page), "Shown");
}

#[test]
fn test_normalized_text() {
    let page = "<body>\n  <h1>Title</h1>\n\n  <p>first   line</p>\n  <p>second</p>\n</body>";
    let options = TextOptions {
        normalize_whitespace: true,
    };
    assert_eq!(
        html::extract_text_with_options(page, &options),
        "Title first line second"
    );
}

#[test]
fn test_clean_then_extract() {
    let page = "<p>one\ntwo</p>\n<p>three</p>";
    assert_eq!(html::extract_text(&clean_data(page)), "onetwothree");
}

#[test]
fn test_extract_text_empty_input() {
    assert_eq!(html::extract_text(""), "");
}

#[test]
fn test_extract_images_in_order() {
    let page = r#"<body>
        <img src="/a.png" alt="a">
        <div><img src="https://cdn.example.com/b.jpg"></div>
        <img alt="no source">
        <img src="c.gif">
    </body>"#;
    assert_eq!(
        html::extract_images(page),
        vec!["/a.png", "https://cdn.example.com/b.jpg", "c.gif"]
    );
}

#[test]
fn test_extract_images_none() {
    assert!(html::extract_images("<p>text only</p>").is_empty());
}

#[test]
fn test_resolve_image_urls() {
    let images = vec![
        "/a.png".to_string(),
        "img/b.jpg".to_string(),
        "https://cdn.example.com/c.gif".to_string(),
    ];
    assert_eq!(
        html::resolve_image_urls("https://example.com/listings/page", &images),
        vec![
            "https://example.com/a.png",
            "https://example.com/listings/img/b.jpg",
            "https://cdn.example.com/c.gif",
        ]
    );
}

#[test]
fn test_resolve_image_urls_bad_base_keeps_references() {
    let images = vec!["/a.png".to_string()];
    assert_eq!(html::resolve_image_urls("not a url", &images), images);
}

#[test]
fn test_document_title() {
    let doc = parsers::parse("<html><head><title>  Market Watch </title></head><body></body></html>");
    assert_eq!(doc.title().as_deref(), Some("Market Watch"));

    let doc = Document::parse("<p>untitled</p>");
    assert_eq!(doc.title(), None);
}

#[test]
fn test_malformed_html_still_parses() {
    let doc = Document::parse("<div><p>unclosed <b>bold<img src=x.png></div></p>");
    assert_eq!(doc.images(), vec!["x.png"]);
    assert!(doc.text(&TextOptions::default()).contains("unclosed"));
}
