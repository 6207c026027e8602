//! Element tree built from document bytes
//!
//!     The walker needs each element's inline text (before its first child) and its tail
//!     (the text after its end tag, up to the next sibling). quick-xml hands us a flat event
//!     stream, so the tree is rebuilt here with an explicit stack of open elements:
//!
//!         <verse>a<w>b</w>c</verse>
//!
//!     gives `verse.text = "a"`, `w.text = "b"`, `w.tail = "c"`.

use crate::b3::error::B3Error;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub tail: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Number of elements below this one, at any depth.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }

    /// All elements below this one in document order.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut found = Vec::new();
        let mut stack: Vec<&Element> = self.children.iter().rev().collect();
        while let Some(el) = stack.pop() {
            found.push(el);
            stack.extend(el.children.iter().rev());
        }
        found
    }
}

/// Parse a document into its root element.
pub fn parse_tree(source: &str) -> Result<Element, B3Error> {
    let mut reader = Reader::from_str(source);
    let mut open: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => open.push(element_from(&start)?),
            Event::Empty(start) => {
                let el = element_from(&start)?;
                close(el, &mut open, &mut root);
            }
            Event::End(_) => {
                if let Some(el) = open.pop() {
                    close(el, &mut open, &mut root);
                }
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(quick_xml::Error::from)?;
                push_text(&mut open, &text);
            }
            Event::CData(cdata) => {
                let bytes = cdata.into_inner();
                push_text(&mut open, std::str::from_utf8(&bytes)?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(el) = open.pop() {
        return Err(B3Error::Unclosed(el.tag));
    }
    root.ok_or(B3Error::EmptyDocument)
}

fn element_from(start: &BytesStart<'_>) -> Result<Element, B3Error> {
    let tag = std::str::from_utf8(start.name().as_ref())?.to_string();
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
        let value = attr.unescape_value().map_err(quick_xml::Error::from)?;
        attributes.push((key, value.into_owned()));
    }
    Ok(Element {
        tag,
        attributes,
        ..Default::default()
    })
}

fn close(el: Element, open: &mut [Element], root: &mut Option<Element>) {
    match open.last_mut() {
        Some(parent) => parent.children.push(el),
        None => {
            if root.is_none() {
                *root = Some(el);
            }
        }
    }
}

/// Text belongs to the innermost open element: as inline text before its first child,
/// otherwise as the tail of its last child.
fn push_text(open: &mut [Element], text: &str) {
    let Some(parent) = open.last_mut() else {
        return;
    };
    let slot = match parent.children.last_mut() {
        Some(child) => &mut child.tail,
        None => &mut parent.text,
    };
    slot.get_or_insert_with(String::new).push_str(text);
}
