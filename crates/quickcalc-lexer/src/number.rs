//! Numeric literal parsing.
//!
//! Accepted grammar, with no locale lookup:
//!
//! ```text
//! number   = [sign] mantissa [exponent]
//! mantissa = integer ["." digit*] | "." digit+
//! integer  = digit+ | group1 ("," group3)+
//! group1   = digit{1,3}
//! group3   = digit{3}
//! exponent = ("e" | "E") [sign] digit+
//! sign     = "+" | "-"
//! ```
//!
//! Grouping separators are only allowed in the integer part. Words such as
//! `inf` or `NaN` are rejected.

/// Parse `text` as an `f64`, or `None` if it is not a number.
///
/// Values beyond the `f64` range saturate to infinity.
pub fn parse_number(text: &str) -> Option<f64> {
    canonicalize(text)?.parse().ok()
}

/// Validate `text` against the literal grammar and strip its grouping
/// separators, producing a string Rust's float parser accepts.
fn canonicalize(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(bytes.len());
    let mut pos = 0;

    if let Some(sign) = sign_at(bytes, pos) {
        out.push(char::from(sign));
        pos += 1;
    }

    // Integer part, with optional `,` grouping.
    let mut int_digits = 0;
    let mut group_len = 0;
    let mut grouped = false;
    while let Some(&b) = bytes.get(pos) {
        match b {
            b'0'..=b'9' => {
                out.push(char::from(b));
                int_digits += 1;
                group_len += 1;
            }
            b',' => {
                let valid_group = if grouped {
                    group_len == 3
                } else {
                    (1..=3).contains(&group_len)
                };
                if !valid_group {
                    return None;
                }
                grouped = true;
                group_len = 0;
            }
            _ => break,
        }
        pos += 1;
    }
    if grouped && group_len != 3 {
        return None;
    }

    // Fraction.
    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        out.push('.');
        pos += 1;
        while let Some(b) = digit_at(bytes, pos) {
            out.push(char::from(b));
            frac_digits += 1;
            pos += 1;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    // Exponent.
    if let Some(b'e' | b'E') = bytes.get(pos).copied() {
        out.push('e');
        pos += 1;
        if let Some(sign) = sign_at(bytes, pos) {
            out.push(char::from(sign));
            pos += 1;
        }
        let mut exp_digits = 0;
        while let Some(b) = digit_at(bytes, pos) {
            out.push(char::from(b));
            exp_digits += 1;
            pos += 1;
        }
        if exp_digits == 0 {
            return None;
        }
    }

    (pos == bytes.len()).then_some(out)
}

fn digit_at(bytes: &[u8], pos: usize) -> Option<u8> {
    bytes.get(pos).copied().filter(u8::is_ascii_digit)
}

fn sign_at(bytes: &[u8], pos: usize) -> Option<u8> {
    bytes.get(pos).copied().filter(|b| matches!(b, b'+' | b'-'))
}
