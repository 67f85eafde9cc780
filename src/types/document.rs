use std::fmt;
use std::path::Path;

use crate::arena::{Arena, Node, NodeKind, Span};
use crate::{decode, path, DecodeOptions, Result};

use super::value::{Value, Values};

/// A parsed configuration file.
///
/// Every node, value and string lives in the document's arena and is
/// released with it. A document is only populated by a parse that
/// accepted the whole input; a failed load leaves it empty.
#[derive(Default)]
pub struct Document {
    arena: Arena,
    roots: Span,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(arena: Arena, roots: Span) -> Self {
        Self { arena, roots }
    }

    pub fn load(&mut self, input: &str) -> Result<()> {
        self.load_with_options(input, &DecodeOptions::default())
    }

    pub fn load_with_options(&mut self, input: &str, options: &DecodeOptions) -> Result<()> {
        self.replace_with(decode::from_str(input, options))
    }

    pub fn load_slice(&mut self, input: &[u8], options: &DecodeOptions) -> Result<()> {
        self.replace_with(decode::from_slice(input, options))
    }

    pub fn load_file<P: AsRef<Path>>(&mut self, path: P, options: &DecodeOptions) -> Result<()> {
        self.replace_with(decode::from_file(path.as_ref(), options))
    }

    fn replace_with(&mut self, parsed: Result<Document>) -> Result<()> {
        match parsed {
            Ok(document) => {
                *self = document;
                Ok(())
            }
            Err(err) => {
                self.clear();
                Err(err)
            }
        }
    }

    /// Releases the arena. Safe to call any number of times.
    pub fn clear(&mut self) {
        let limit = self.arena.limit();
        self.arena = Arena::with_limit(limit);
        self.roots = Span::default();
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.arena.nodes.len()
    }

    pub fn arena_bytes(&self) -> usize {
        self.arena.bytes_used()
    }

    pub fn roots(&self) -> Nodes<'_> {
        Nodes {
            arena: &self.arena,
            ids: self.arena.span_ids(self.roots).iter(),
        }
    }

    pub fn find_node(&self, path: &str, separator: char) -> Option<NodeRef<'_>> {
        path::find_node(self.roots(), path, separator)
    }

    pub fn find_str<'a>(&'a self, path: &str, separator: char, default: &'a str) -> &'a str {
        path::find_str(self.roots(), path, separator, default)
    }

    pub fn find_int(&self, path: &str, separator: char, default: i64) -> i64 {
        path::find_int(self.roots(), path, separator, default)
    }

    pub fn find_float(&self, path: &str, separator: char, default: f64) -> f64 {
        path::find_float(self.roots(), path, separator, default)
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.roots()).finish()
    }
}

/// A borrowed handle to one node of a [`Document`].
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    arena: &'a Arena,
    node: &'a Node,
}

impl<'a> NodeRef<'a> {
    pub fn key(&self) -> &'a str {
        self.arena.key(self.node)
    }

    pub fn kind(&self) -> NodeKind {
        self.node.kind
    }

    pub fn is_section(&self) -> bool {
        self.node.kind == NodeKind::Section
    }

    pub fn is_binding(&self) -> bool {
        self.node.kind == NodeKind::Binding
    }

    /// Child nodes; empty for a binding.
    pub fn children(&self) -> Nodes<'a> {
        Nodes {
            arena: self.arena,
            ids: self.arena.children(self.node).iter(),
        }
    }

    /// Values in source order; empty for a section.
    pub fn values(&self) -> Values<'a> {
        Values {
            arena: self.arena,
            data: self.arena.values(self.node).iter(),
        }
    }

    pub fn first_value(&self) -> Option<Value<'a>> {
        self.values().next()
    }

    pub fn child(&self, key: &str) -> Option<NodeRef<'a>> {
        self.children().find(|child| child.key() == key)
    }

    /// Resolves `path` relative to this node's children.
    pub fn find(&self, path: &str, separator: char) -> Option<NodeRef<'a>> {
        path::find_node(self.children(), path, separator)
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            NodeKind::Section => f
                .debug_struct("Section")
                .field("key", &self.key())
                .field("children", &self.children().collect::<Vec<_>>())
                .finish(),
            NodeKind::Binding => f
                .debug_struct("Binding")
                .field("key", &self.key())
                .field("values", &self.values().collect::<Vec<_>>())
                .finish(),
        }
    }
}

/// Iterator over a sibling list.
#[derive(Clone)]
pub struct Nodes<'a> {
    arena: &'a Arena,
    ids: std::slice::Iter<'a, usize>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.ids.next()?;
        Some(NodeRef {
            arena: self.arena,
            node: self.arena.node(*id),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl DoubleEndedIterator for Nodes<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let id = self.ids.next_back()?;
        Some(NodeRef {
            arena: self.arena,
            node: self.arena.node(*id),
        })
    }
}

impl ExactSizeIterator for Nodes<'_> {}
