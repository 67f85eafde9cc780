use crate::constants::{DEFAULT_INDENT, MAX_DEPTH, MAX_INDENT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Spaces(usize),
}

impl Indent {
    pub fn spaces(count: usize) -> Self {
        Indent::Spaces(count)
    }

    /// Columns of indentation for `depth`, capped at [`MAX_INDENT`].
    pub fn columns(self, depth: usize) -> usize {
        let Indent::Spaces(width) = self;
        width.saturating_mul(depth).min(MAX_INDENT)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Indent::Spaces(DEFAULT_INDENT)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    pub indent: Indent,
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }
}

#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Maximum section nesting accepted by the parser.
    pub max_depth: usize,
    /// Byte budget for the document arena. `None` means unbounded.
    pub arena_limit: Option<usize>,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_arena_limit(mut self, arena_limit: Option<usize>) -> Self {
        self.arena_limit = arena_limit;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            arena_limit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[case(0, 0)]
    #[case(1, 2)]
    #[case(3, 6)]
    #[case(16, 32)]
    #[case(40, 32)]
    fn indent_is_capped(#[case] depth: usize, #[case] expected: usize) {
        assert_eq!(Indent::default().columns(depth), expected);
    }

    #[rstest::rstest]
    fn decode_options_builder() {
        let options = DecodeOptions::new()
            .with_max_depth(4)
            .with_arena_limit(Some(1024));
        assert_eq!(options.max_depth, 4);
        assert_eq!(options.arena_limit, Some(1024));
    }
}
