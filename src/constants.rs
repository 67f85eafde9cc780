pub const DEFAULT_INDENT: usize = 2;

/// Indentation stops growing past this many columns.
pub const MAX_INDENT: usize = 32;

pub const MAX_DEPTH: usize = 256;

pub const DEFAULT_SEPARATOR: char = '/';

/// C `isspace` in the "C" locale.
#[inline]
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c')
}

#[inline]
pub fn ends_identifier(byte: u8) -> bool {
    is_space(byte) || byte == b'#' || byte == b'='
}
