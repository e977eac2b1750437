use crate::error::ParseError;
use crate::pipeline::parse::Parser;
use crate::types::document::{Node, NodeKind, SourceDocument, TCX_NAMESPACE};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

pub struct TcxParser;

impl Parser for TcxParser {
    fn parse(&self, bytes: &[u8]) -> Result<SourceDocument, ParseError> {
        let mut reader = NsReader::from_reader(bytes);
        reader.trim_text(true);

        let mut stack: Vec<Node> = Vec::new();
        let mut root: Option<Node> = None;
        let mut buf = Vec::new();

        loop {
            let (ns, event) = reader
                .read_resolved_event_into(&mut buf)
                .map_err(|e| ParseError::InvalidXml(e.to_string()))?;

            match event {
                Event::Start(e) => {
                    if stack.is_empty() && root.is_some() {
                        return Err(ParseError::InvalidXml("multiple root elements".into()));
                    }
                    let node = element(&ns, &e, stack.is_empty())?;
                    stack.push(node);
                }
                Event::Empty(e) => {
                    if stack.is_empty() && root.is_some() {
                        return Err(ParseError::InvalidXml("multiple root elements".into()));
                    }
                    let node = element(&ns, &e, stack.is_empty())?;
                    attach(node, &mut stack, &mut root);
                }
                Event::Text(e) => {
                    let text = e
                        .unescape()
                        .map_err(|e| ParseError::InvalidXml(e.to_string()))?;
                    append_text(&mut stack, &text);
                }
                Event::CData(e) => {
                    let text = std::str::from_utf8(&e)
                        .map_err(|e| ParseError::InvalidXml(e.to_string()))?;
                    append_text(&mut stack, text.trim());
                }
                Event::End(_) => {
                    // check_end_names is on by default, so a stray end tag
                    // surfaces as a reader error before this point.
                    if let Some(node) = stack.pop() {
                        attach(node, &mut stack, &mut root);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if !stack.is_empty() {
            return Err(ParseError::Truncated(stack.len()));
        }

        root.map(|root| SourceDocument { root })
            .ok_or(ParseError::EmptyDocument)
    }
}

fn element(ns: &ResolveResult, e: &BytesStart, is_root: bool) -> Result<Node, ParseError> {
    let local = e.local_name();
    let kind = match ns {
        ResolveResult::Bound(Namespace(uri)) if *uri == TCX_NAMESPACE.as_bytes() => {
            NodeKind::from_local_name(local.as_ref())
        }
        _ => NodeKind::Other,
    };

    if is_root && kind != NodeKind::TrainingCenterDatabase {
        return Err(ParseError::UnexpectedRoot(describe(ns, local.as_ref())));
    }

    let mut node = Node::new(kind);
    for attr in e.attributes() {
        let attr = attr.map_err(|e| ParseError::InvalidXml(e.to_string()))?;
        let key = std::str::from_utf8(attr.key.local_name().as_ref())
            .map_err(|e| ParseError::InvalidXml(e.to_string()))?
            .to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| ParseError::InvalidXml(e.to_string()))?;
        node.attributes.push((key, value.into_owned()));
    }
    Ok(node)
}

fn describe(ns: &ResolveResult, local: &[u8]) -> String {
    let name = String::from_utf8_lossy(local);
    match ns {
        ResolveResult::Bound(Namespace(uri)) => {
            format!("<{}> in namespace {}", name, String::from_utf8_lossy(uri))
        }
        _ => format!("<{}> without namespace", name),
    }
}

fn attach(node: Node, stack: &mut [Node], root: &mut Option<Node>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => *root = Some(node),
    }
}

fn append_text(stack: &mut [Node], text: &str) {
    if text.is_empty() {
        return;
    }
    // Text outside the root element is ignored.
    if let Some(node) = stack.last_mut() {
        match node.text.as_mut() {
            Some(existing) => existing.push_str(text),
            None => node.text = Some(text.to_string()),
        }
    }
}
