// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

//! Drives comrak and feeds every node to a [`Renderer`] as a [`Construct`].
//!
//! Children are rendered before their parent, so each construct carries the
//! already rendered text of its content. The strings returned by the renderer
//! are concatenated in document order.

use comrak::nodes::{AstNode, ListType, NodeValue};

use crate::{Error, Result};
use crate::error::unsupported;

/// One Markdown construct with its content already rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Construct {
    Heading { level: u8, text: String },
    /// `in_list` is set when the paragraph is a direct child of a list item.
    Paragraph { text: String, in_list: bool },
    ThematicBreak,
    List { ordered: bool, items: Vec<String> },
    ListItem { text: String },
    /// `in_footnote` is set when the block belongs to a footnote definition.
    CodeBlock {
        code: String,
        info: String,
        in_footnote: bool,
    },
    /// `nested` is set when the quote sits inside another block quote.
    BlockQuote { text: String, nested: bool },
    HtmlBlock(String),
    Table,
    TableRow,
    TableCell,
    FootnoteDefinition { key: String, text: String },
    Text(String),
    Emphasis(String),
    Strong(String),
    Code(String),
    LineBreak,
    SoftBreak,
    /// `link` is the address as written: the URL, or the bare email address.
    Autolink { link: String, is_email: bool },
    Link { url: String, title: String, text: String },
    Image { url: String },
    HtmlInline(String),
    Strikethrough(String),
    FootnoteReference { key: String },
}

impl Construct {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Heading { .. } => "Heading",
            Self::Paragraph { .. } => "Paragraph",
            Self::ThematicBreak => "Horizontal rule",
            Self::List { .. } => "List",
            Self::ListItem { .. } => "List item",
            Self::CodeBlock { .. } => "Code block",
            Self::BlockQuote { .. } => "Block quote",
            Self::HtmlBlock(_) => "Block HTML",
            Self::Table | Self::TableRow | Self::TableCell => "Table",
            Self::FootnoteDefinition { .. } => "Footnote definition",
            Self::Text(_) => "Text",
            Self::Emphasis(_) => "Emphasis",
            Self::Strong(_) => "Bold text",
            Self::Code(_) => "Inline code",
            Self::LineBreak => "Line break",
            Self::SoftBreak => "Soft break",
            Self::Autolink { .. } => "Autolink",
            Self::Link { .. } => "Link",
            Self::Image { .. } => "Image",
            Self::HtmlInline(_) => "Inline HTML",
            Self::Strikethrough(_) => "Strike-through text",
            Self::FootnoteReference { .. } => "Footnote reference",
        }
    }
}

pub trait Renderer {
    fn render(&mut self, construct: Construct) -> Result<String>;
}

/// Parses `markdown` and renders it through `renderer`.
pub fn render_markdown<R: Renderer + ?Sized>(markdown: &str, renderer: &mut R) -> Result<String> {
    let arena = comrak::Arena::new();
    let options = comrak_options();
    let root = comrak::parse_document(&arena, markdown, &options);
    let mut walker = Walker {
        renderer,
        quote_depth: 0,
        footnote_depth: 0,
    };
    walker.render_children(root, false)
}

fn comrak_options() -> comrak::Options<'static> {
    let mut options = comrak::Options::default();
    options.extension.autolink = true;
    options.extension.footnotes = true;
    // Parsed only so that they can be rejected instead of leaking through as text.
    options.extension.strikethrough = true;
    options.extension.table = true;
    options
}

struct Walker<'r, R: ?Sized> {
    renderer: &'r mut R,
    quote_depth: usize,
    footnote_depth: usize,
}

impl<R: Renderer + ?Sized> Walker<'_, R> {
    fn render_children<'a>(&mut self, node: &'a AstNode<'a>, in_item: bool) -> Result<String> {
        let mut out = String::new();
        for child in node.children() {
            out.push_str(&self.render_node(child, in_item)?);
        }
        Ok(out)
    }

    fn render_node<'a>(&mut self, node: &'a AstNode<'a>, in_item: bool) -> Result<String> {
        let construct = match &node.data.borrow().value {
            NodeValue::Document | NodeValue::Escaped => {
                return self.render_children(node, in_item);
            }
            NodeValue::Heading(heading) => Construct::Heading {
                level: heading.level,
                text: self.render_children(node, false)?,
            },
            NodeValue::Paragraph => Construct::Paragraph {
                text: self.render_children(node, false)?,
                in_list: in_item,
            },
            NodeValue::ThematicBreak => Construct::ThematicBreak,
            NodeValue::List(list) => {
                let mut items = Vec::new();
                for item in node.children() {
                    items.push(self.render_node(item, false)?);
                }
                Construct::List {
                    ordered: matches!(list.list_type, ListType::Ordered),
                    items,
                }
            }
            NodeValue::Item(_) => {
                let mut blocks = Vec::new();
                for child in node.children() {
                    let block = self.render_node(child, true)?;
                    blocks.push(block.trim_start_matches('\n').to_string());
                }
                Construct::ListItem {
                    text: blocks.join("\n\n"),
                }
            }
            NodeValue::CodeBlock(code_block) => Construct::CodeBlock {
                code: code_block.literal.clone(),
                info: code_block.info.clone(),
                in_footnote: self.footnote_depth > 0,
            },
            NodeValue::BlockQuote => {
                self.quote_depth += 1;
                let text = self.render_children(node, false);
                self.quote_depth -= 1;
                Construct::BlockQuote {
                    text: text?,
                    nested: self.quote_depth > 0,
                }
            }
            NodeValue::HtmlBlock(html) => Construct::HtmlBlock(html.literal.clone()),
            NodeValue::Table(_) => Construct::Table,
            NodeValue::TableRow(_) => Construct::TableRow,
            NodeValue::TableCell => Construct::TableCell,
            NodeValue::FootnoteDefinition(definition) => {
                self.footnote_depth += 1;
                let text = self.render_children(node, false);
                self.footnote_depth -= 1;
                Construct::FootnoteDefinition {
                    key: definition.name.clone(),
                    text: text?,
                }
            }
            NodeValue::Text(text) => Construct::Text(text.to_string()),
            NodeValue::Emph => Construct::Emphasis(self.render_children(node, false)?),
            NodeValue::Strong => Construct::Strong(self.render_children(node, false)?),
            NodeValue::Code(code) => Construct::Code(code.literal.clone()),
            NodeValue::LineBreak => Construct::LineBreak,
            NodeValue::SoftBreak => Construct::SoftBreak,
            NodeValue::Link(link) => match autolink_address(node, &link.url) {
                Some((link, is_email)) => Construct::Autolink { link, is_email },
                None => Construct::Link {
                    url: link.url.clone(),
                    title: link.title.clone(),
                    text: self.render_children(node, false)?,
                },
            },
            NodeValue::Image(image) => Construct::Image {
                url: image.url.clone(),
            },
            NodeValue::HtmlInline(html) => Construct::HtmlInline(html.clone()),
            NodeValue::Strikethrough => {
                Construct::Strikethrough(self.render_children(node, false)?)
            }
            NodeValue::FootnoteReference(reference) => Construct::FootnoteReference {
                key: reference.name.clone(),
            },
            other => return Err(unsupported_node(other)),
        };
        self.renderer.render(construct)
    }
}

fn unsupported_node(value: &NodeValue) -> Error {
    unsupported(format!("Markdown node `{}`", node_kind(value)))
}

/// The variant name of a node, without its payload.
fn node_kind(value: &NodeValue) -> String {
    format!("{value:?}")
        .chars()
        .take_while(char::is_ascii_alphanumeric)
        .collect()
}

/// Detects links whose only content is their own address, which is how comrak
/// represents `<https://…>`, `<someone@example.com>` and bare URLs.
fn autolink_address<'a>(node: &'a AstNode<'a>, url: &str) -> Option<(String, bool)> {
    let mut children = node.children();
    let only = children.next()?;
    if children.next().is_some() {
        return None;
    }

    let text = match &only.data.borrow().value {
        NodeValue::Text(text) => text.to_string(),
        _ => return None,
    };
    if text == url {
        Some((text, false))
    } else if url.strip_prefix("mailto:") == Some(text.as_str()) {
        Some((text, true))
    } else {
        None
    }
}
