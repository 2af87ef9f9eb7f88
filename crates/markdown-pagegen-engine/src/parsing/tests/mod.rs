//! Document-level tests for the parsing module.
//!
//! Fixtures (.md) and their expected output (.html) are co-located in
//! `fixtures/`.


use pretty_assertions::assert_eq;

use crate::{
    error::ConvertError,
    html::HtmlNode,
    parsing::{blocks::BlockType, markdown_to_html_node},
};

// Fixture-based tests

#[test]
fn fixture_simple_paragraph() {
    assert_fixture("simple_paragraph");
}

#[test]
fn fixture_all_blocks() {
    assert_fixture("all_blocks");
}

#[test]
fn fixture_links_and_images() {
    assert_fixture("links_and_images");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.html")).unwrap();

    let root = markdown_to_html_node(&md).unwrap();
    invariants::check(&root);

    assert_eq!(root.to_html(), expected.trim_end());
}

// Structure tests

#[test]
fn title_paragraph_and_list() {
    let md = "# Title\n\nSome **bold** and _italic_ text.\n\n- item1\n- item2";
    let root = markdown_to_html_node(md).unwrap();
    invariants::check(&root);

    let tags: Vec<_> = root.children.iter().map(|c| c.tag()).collect();
    assert_eq!(tags, vec![Some("h1"), Some("p"), Some("ul")]);

    let p = &root.children[1];
    assert!(p.children.contains(&HtmlNode::leaf("b", "bold")));
    assert!(p.children.contains(&HtmlNode::leaf("i", "italic")));

    let ul = &root.children[2];
    assert_eq!(ul.children.len(), 2);
    assert_eq!(ul.children_tagged("li").count(), 2);
}

#[test]
fn block_order_is_preserved() {
    let md = "1. first\n2. second\n\n> quoted\n\n```\ncode\n```\n\n## End";
    let root = markdown_to_html_node(md).unwrap();
    let tags: Vec<_> = root.children.iter().filter_map(|c| c.tag()).collect();
    assert_eq!(tags, vec!["ol", "blockquote", "pre", "h2"]);
}

#[test]
fn multiple_bold_runs_in_one_paragraph() {
    let root = markdown_to_html_node("**one** then **two**").unwrap();
    assert_eq!(
        root.to_html(),
        "<div><p><b>one</b> then <b>two</b></p></div>"
    );
}

#[test]
fn broken_inline_markup_fails_whole_document() {
    let md = "# Fine\n\nThis _never closes\n\nAlso fine";
    assert_eq!(
        markdown_to_html_node(md),
        Err(ConvertError::MalformedInlineMarkup {
            delimiter: "_".to_string()
        })
    );
}

#[test]
fn empty_document() {
    let root = markdown_to_html_node("").unwrap();
    assert!(root.children.is_empty());
}

#[test]
fn blank_lines_only() {
    let root = markdown_to_html_node("\n\n\n").unwrap();
    assert!(root.children.is_empty());
}

#[test]
fn classification_covers_every_block() {
    use crate::parsing::blocks::{block_to_block_type, markdown_to_blocks};

    let md = "# h\n\np\n\n```\nc\n```\n\n> q\n\n- u\n\n1. o";
    let types: Vec<_> = markdown_to_blocks(md)
        .into_iter()
        .map(block_to_block_type)
        .collect();
    assert_eq!(
        types,
        vec![
            BlockType::Heading,
            BlockType::Paragraph,
            BlockType::Code,
            BlockType::Quote,
            BlockType::UnorderedList,
            BlockType::OrderedList,
        ]
    );
}
