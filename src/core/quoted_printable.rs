// src/core/quoted_printable.rs
// Quoted-printable decoding for "Save as MHTML" page exports.

/// MHTML bodies escape `=` in attributes as `=3D`; its presence is our signal.
pub fn looks_encoded(s: &str) -> bool {
    s.contains("=3D")
}

/// Decode `=XX` escapes and `=`-newline soft breaks into raw bytes.
/// Malformed escapes are passed through untouched.
pub fn decode(s: &str) -> Vec<u8> {
    let b = s.as_bytes();
    let n = b.len();
    let mut out = Vec::with_capacity(n);
    let mut i = 0usize;

    while i < n {
        if b[i] != b'=' {
            out.push(b[i]);
            i += 1;
            continue;
        }
        // soft line break: "=\r\n" or "=\n" (trailing spaces before the newline allowed)
        let mut j = i + 1;
        while j < n && (b[j] == b' ' || b[j] == b'\t') { j += 1; }
        if j < n && b[j] == b'\n' { i = j + 1; continue; }
        if j + 1 < n && b[j] == b'\r' && b[j + 1] == b'\n' { i = j + 2; continue; }

        match (b.get(i + 1).and_then(|&c| hex_val(c)), b.get(i + 2).and_then(|&c| hex_val(c))) {
            (Some(hi), Some(lo)) => {
                out.push(hi << 4 | lo);
                i += 3;
            }
            _ => {
                out.push(b'=');
                i += 1;
            }
        }
    }
    out
}

/// Decoded text: UTF-8 when the bytes are valid UTF-8, otherwise Latin-1.
pub fn decode_to_string(s: &str) -> String {
    let bytes = decode(s);
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => e.into_bytes().into_iter().map(char::from).collect(),
    }
}

fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'A'..=b'F' => Some(c - b'A' + 10),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}
