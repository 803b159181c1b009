//! Chat export document parsing.
//!
//! The export is parsed into a DOM once and flattened into the ordered
//! [`ChatNode`] stream in document (pre-order) order. Only three element
//! shapes survive the flattening:
//!
//! | tag    | class    | node                  |
//! |--------|----------|-----------------------|
//! | `div`  | `thread` | [`ChatNode::Thread`]  |
//! | `span` | `user`   | [`ChatNode::Speaker`] |
//! | `p`    | any      | [`ChatNode::Message`] |

use std::fs;
use std::path::Path;

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use super::error::ExtractError;
use super::node::ChatNode;

/// Options controlling how strictly the export is parsed.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Fail on any error reported by the HTML tree builder instead of
    /// accepting the parser's recovery.
    pub strict: bool,
}

/// Read and parse a chat export from disk.
pub fn read_chat_log(path: &Path, options: &ParseOptions) -> Result<Vec<ChatNode>, ExtractError> {
    if !path.exists() {
        return Err(ExtractError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let html = String::from_utf8(bytes).map_err(|e| ExtractError::InvalidUtf8 {
        offset: e.utf8_error().valid_up_to(),
    })?;

    parse_chat_log(&html, options)
}

/// Parse chat export markup into the ordered node stream.
pub fn parse_chat_log(html: &str, options: &ParseOptions) -> Result<Vec<ChatNode>, ExtractError> {
    let dom = parse_document(RcDom::default(), Default::default()).one(html);

    {
        let errors = dom.errors.borrow();
        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "HTML parser reported recoverable errors");
        }
        if options.strict {
            if let Some(first) = errors.first() {
                return Err(ExtractError::Malformed {
                    message: format!("{} ({} problem(s) reported)", first, errors.len()),
                });
            }
        }
    }

    let nodes = flatten(&dom.document);
    tracing::debug!(nodes = nodes.len(), "flattened chat log");
    Ok(nodes)
}

/// Walk the DOM in pre-order and keep the nodes the extractor understands.
///
/// Uses an explicit stack so deeply nested exports cannot overflow the call stack.
fn flatten(root: &Handle) -> Vec<ChatNode> {
    let mut nodes = Vec::new();
    let mut stack = vec![root.clone()];

    while let Some(handle) = stack.pop() {
        if let Some(node) = classify(&handle) {
            nodes.push(node);
        }
        let children = handle.children.borrow();
        stack.extend(children.iter().rev().cloned());
    }

    nodes
}

fn classify(handle: &Handle) -> Option<ChatNode> {
    let NodeData::Element { name, attrs, .. } = &handle.data else {
        return None;
    };

    let class = attrs
        .borrow()
        .iter()
        .find(|attr| &*attr.name.local == "class")
        .map(|attr| attr.value.to_string());

    match (&*name.local, class.as_deref()) {
        ("div", Some("thread")) => Some(ChatNode::Thread {
            participants: leading_text(handle),
        }),
        ("span", Some("user")) => Some(ChatNode::Speaker {
            name: leading_text(handle),
        }),
        ("p", _) => Some(ChatNode::Message {
            text: leading_text(handle),
        }),
        _ => None,
    }
}

/// Text that appears inside an element before its first child element or comment.
fn leading_text(handle: &Handle) -> Option<String> {
    let mut text = String::new();
    for child in handle.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => text.push_str(&contents.borrow()),
            NodeData::Element { .. } | NodeData::Comment { .. } => break,
            _ => {}
        }
    }
    (!text.is_empty()).then_some(text)
}
