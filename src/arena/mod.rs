use std::collections::TryReserveError;
use std::mem::size_of;

use smol_str::SmolStr;

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Section,
    Binding,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueData {
    Int(i64),
    Float(f64),
    String(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A section's `span` indexes `Arena::children`; a binding's indexes
/// `Arena::values`.
#[derive(Debug, Clone, Copy)]
pub struct Node {
    pub kind: NodeKind,
    pub key: usize,
    pub span: Span,
}

/// Backing store for one document. Records are only ever appended; the
/// whole arena is dropped at once.
#[derive(Debug, Default)]
pub struct Arena {
    pub nodes: Vec<Node>,
    pub children: Vec<usize>,
    pub values: Vec<ValueData>,
    pub keys: Vec<SmolStr>,
    pub strings: Vec<Box<str>>,
    used: usize,
    limit: Option<usize>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    pub fn bytes_used(&self) -> usize {
        self.used
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn alloc_key(&mut self, key: &str) -> Result<usize> {
        self.charge(key.len())?;
        self.keys.try_reserve(1).map_err(reserve_failed)?;
        self.keys.push(SmolStr::new(key));
        Ok(self.keys.len() - 1)
    }

    pub fn alloc_string(&mut self, value: &str) -> Result<usize> {
        self.charge(value.len())?;
        self.strings.try_reserve(1).map_err(reserve_failed)?;
        self.strings.push(Box::from(value));
        Ok(self.strings.len() - 1)
    }

    /// Appends a contiguous run of child ids and returns its span.
    pub fn push_children(&mut self, ids: &[usize]) -> Result<Span> {
        self.charge(size_of::<usize>() * ids.len())?;
        self.children
            .try_reserve(ids.len())
            .map_err(reserve_failed)?;
        let start = self.children.len();
        self.children.extend_from_slice(ids);
        Ok(Span {
            start,
            end: self.children.len(),
        })
    }

    pub fn push_section(&mut self, key: usize, children: &[usize]) -> Result<usize> {
        let span = self.push_children(children)?;
        self.push_node(Node {
            kind: NodeKind::Section,
            key,
            span,
        })
    }

    pub fn push_binding(&mut self, key: usize, values: &[ValueData]) -> Result<usize> {
        debug_assert!(!values.is_empty());
        self.charge(size_of::<ValueData>() * values.len())?;
        self.values.try_reserve(values.len()).map_err(reserve_failed)?;
        let start = self.values.len();
        self.values.extend_from_slice(values);
        let span = Span {
            start,
            end: self.values.len(),
        };
        self.push_node(Node {
            kind: NodeKind::Binding,
            key,
            span,
        })
    }

    fn push_node(&mut self, node: Node) -> Result<usize> {
        self.charge(size_of::<Node>())?;
        self.nodes.try_reserve(1).map_err(reserve_failed)?;
        self.nodes.push(node);
        Ok(self.nodes.len() - 1)
    }

    fn charge(&mut self, bytes: usize) -> Result<()> {
        let used = self.used.saturating_add(bytes);
        if let Some(limit) = self.limit {
            if used > limit {
                return Err(Error::allocation(format!(
                    "arena limit of {limit} bytes exceeded"
                )));
            }
        }
        self.used = used;
        Ok(())
    }

    pub fn node(&self, id: usize) -> &Node {
        &self.nodes[id]
    }

    pub fn key(&self, node: &Node) -> &str {
        self.keys.get(node.key).map(|key| key.as_str()).unwrap_or("")
    }

    pub fn string(&self, index: usize) -> &str {
        self.strings.get(index).map(|value| &**value).unwrap_or("")
    }

    pub fn children(&self, node: &Node) -> &[usize] {
        match node.kind {
            NodeKind::Section => self.span_ids(node.span),
            NodeKind::Binding => &[],
        }
    }

    pub fn span_ids(&self, span: Span) -> &[usize] {
        self.children.get(span.start..span.end).unwrap_or(&[])
    }

    pub fn values(&self, node: &Node) -> &[ValueData] {
        match node.kind {
            NodeKind::Binding => self.values.get(node.span.start..node.span.end).unwrap_or(&[]),
            NodeKind::Section => &[],
        }
    }
}

fn reserve_failed(err: TryReserveError) -> Error {
    Error::allocation(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[rstest::rstest]
    fn test_section_and_binding_records() {
        let mut arena = Arena::new();
        let key = arena.alloc_key("level").unwrap();
        let leaf = arena.push_binding(key, &[ValueData::Int(3)]).unwrap();
        let key = arena.alloc_key("log").unwrap();
        let section = arena.push_section(key, &[leaf]).unwrap();

        let node = arena.node(section);
        assert_eq!(node.kind, NodeKind::Section);
        assert_eq!(arena.key(node), "log");
        assert_eq!(arena.children(node), &[leaf]);
        assert!(arena.values(node).is_empty());

        let node = arena.node(leaf);
        assert_eq!(arena.values(node), &[ValueData::Int(3)]);
        assert!(arena.children(node).is_empty());
    }

    #[rstest::rstest]
    fn test_strings_are_owned() {
        let mut arena = Arena::new();
        let source = String::from("/dev/sda");
        let id = arena.alloc_string(&source).unwrap();
        drop(source);
        assert_eq!(arena.string(id), "/dev/sda");
    }

    #[rstest::rstest]
    fn test_limit_rejects_allocation() {
        let mut arena = Arena::with_limit(Some(8));
        assert!(arena.alloc_key("devices").is_ok());
        let err = arena.alloc_key("global").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Allocation);
        assert_eq!(arena.keys.len(), 1);
        assert_eq!(arena.bytes_used(), 7);
    }

    #[rstest::rstest]
    fn test_empty_section_has_empty_span() {
        let mut arena = Arena::new();
        let key = arena.alloc_key("empty").unwrap();
        let id = arena.push_section(key, &[]).unwrap();
        assert!(arena.node(id).span.is_empty());
        assert!(arena.children(arena.node(id)).is_empty());
    }
}
