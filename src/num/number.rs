/// Converts an `Int` token. The scanner guarantees decimal digits only, so
/// the one failure left is overflow of `i64`.
pub fn parse_int(text: &str) -> Option<i64> {
    text.parse::<i64>().ok()
}

/// Converts a `Float` token the way `strtod` would: digits with a single
/// dot, where a bare `.` reads as zero. Returns `None` when the digits
/// overflow to infinity, which has no textual form in the grammar.
pub fn parse_float(text: &str) -> Option<f64> {
    let value = match text {
        "." => 0.0,
        _ => text.parse::<f64>().ok()?,
    };
    value.is_finite().then_some(value)
}

pub fn write_int_into(value: i64, out: &mut Vec<u8>) {
    let mut buffer = itoa::Buffer::new();
    out.extend_from_slice(buffer.format(value).as_bytes());
}

/// Fixed notation with six decimals, matching C's `%f`.
pub fn write_float_into(value: f64, out: &mut Vec<u8>) {
    out.extend_from_slice(format!("{value:.6}").as_bytes());
}
