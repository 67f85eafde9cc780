mod document;
mod value;

pub use document::{Document, NodeRef, Nodes};
pub use value::{Value, Values};
