// src/render/wrap.rs

use super::metrics::TextMetrics;

/// A word split after each inner hyphen: `"self-repairing"` gives
/// `["self-", "repairing"]`. A hyphen only counts between two alphanumerics.
fn hyphen_pieces(word: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = word.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        let next = chars.peek().map(|&(_, n)| n);
        if c == '-' && prev.is_some_and(char::is_alphanumeric) && next.is_some_and(char::is_alphanumeric) {
            pieces.push(&word[start..i + 1]);
            start = i + 1;
        }
        prev = Some(c);
    }
    pieces.push(&word[start..]);
    pieces
}

/// Greedy word wrap to at most `width` characters per line.
/// Runs of whitespace collapse; lines may also break after a hyphen inside a
/// word, and words longer than a line are broken into chunks.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0usize;

    for word in text.split_whitespace() {
        for (n, piece) in hyphen_pieces(word).into_iter().enumerate() {
            let piece_len = piece.chars().count();
            // Pieces after the first continue the same word without a space.
            let gap = if n == 0 { 1 } else { 0 };

            if !line.is_empty() && line_len + gap + piece_len <= width {
                if gap == 1 {
                    line.push(' ');
                }
                line.push_str(piece);
                line_len += gap + piece_len;
                continue;
            }
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }

            let chars: Vec<char> = piece.chars().collect();
            let mut chunks = chars.chunks(width).peekable();
            while let Some(chunk) = chunks.next() {
                let part: String = chunk.iter().collect();
                if chunks.peek().is_some() {
                    lines.push(part);
                } else {
                    line_len = chunk.len();
                    line = part;
                }
            }
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Wrap `text` set at `font_size` into a column `width` units wide.
pub fn wrap_to_width(text: &str, font_size: f32, width: f32, metrics: &dyn TextMetrics) -> Vec<String> {
    wrap(text, metrics.chars_per_line(font_size, width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greedy_fill() {
        assert_eq!(wrap("the quick brown fox", 10), vec!["the quick", "brown fox"]);
        assert_eq!(wrap("a b c", 5), vec!["a b c"]);
    }

    #[test]
    fn blank_text_has_no_lines() {
        assert!(wrap("   ", 10).is_empty());
        assert!(wrap("", 10).is_empty());
    }

    #[test]
    fn long_words_are_broken() {
        assert_eq!(wrap("abcdefghij xy", 4), vec!["abcd", "efgh", "ij", "xy"]);
        assert_eq!(wrap("ok abcdefgh", 4), vec!["ok", "abcd", "efgh"]);
    }

    #[test]
    fn lines_break_after_inner_hyphens() {
        assert_eq!(wrap("Shape-shifting self-repairing", 10), vec!["Shape-", "shifting", "self-", "repairing"]);
        assert_eq!(wrap("a self-repairing wall", 30), vec!["a self-repairing wall"]);
        assert_eq!(wrap("go self-repair", 8), vec!["go self-", "repair"]);
        // Leading, trailing and doubled hyphens stay attached.
        assert_eq!(wrap("-x y- a--b", 3), vec!["-x", "y-", "a--", "b"]);
    }
}
