use std::fmt;

use crate::arena::{Arena, ValueData};

/// A typed scalar borrowed from a [`Document`](crate::Document).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Int(i64),
    Float(f64),
    String(&'a str),
}

impl<'a> Value<'a> {
    pub(crate) fn resolve(arena: &'a Arena, data: ValueData) -> Self {
        match data {
            ValueData::Int(value) => Value::Int(value),
            ValueData::Float(value) => Value::Float(value),
            ValueData::String(id) => Value::String(arena.string(id)),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::String(value) => Some(*value),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value:.6}"),
            Value::String(value) => write!(f, "{value}"),
        }
    }
}

/// Iterator over the values of one binding.
#[derive(Clone)]
pub struct Values<'a> {
    pub(crate) arena: &'a Arena,
    pub(crate) data: std::slice::Iter<'a, ValueData>,
}

impl<'a> Iterator for Values<'a> {
    type Item = Value<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let data = self.data.next()?;
        Some(Value::resolve(self.arena, *data))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.data.size_hint()
    }
}

impl DoubleEndedIterator for Values<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let data = self.data.next_back()?;
        Some(Value::resolve(self.arena, *data))
    }
}

impl ExactSizeIterator for Values<'_> {}
