// src/core/html.rs
// Low-level HTML string scanning.
// Deliberately naive: no DOM, no tree repair beyond "an unclosed element ends
// where the next one of the same kind starts". Tag and attribute names are
// matched case-insensitively on ASCII; byte offsets are shared between the
// source and its lowercased copy.

use super::sanitize::{normalize_entities, normalize_ws};

/// ASCII-only lowercasing. Keeps byte offsets identical to the input.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Byte ranges of one element: `<tag ...>` [open_end] inner [close_start] `</tag>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Element {
    pub start: usize,
    pub open_end: usize,
    pub close_start: usize,
    pub end: usize,
}

impl Element {
    pub fn open_tag<'a>(&self, s: &'a str) -> &'a str { &s[self.start..self.open_end] }
    pub fn inner<'a>(&self, s: &'a str) -> &'a str { &s[self.open_end..self.close_start] }
    /// Visible text of the element, entities decoded, whitespace collapsed.
    pub fn text(&self, s: &str) -> String { strip_tags(self.inner(s)) }
}

/// Lowercased source paired with the original, so scans don't re-lowercase.
pub struct Html<'a> {
    pub src: &'a str,
    lc: String,
}

impl<'a> Html<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, lc: to_lower(src) }
    }

    pub fn len(&self) -> usize { self.src.len() }
    pub fn is_empty(&self) -> bool { self.src.is_empty() }

    /// Next `<tag` opener at or after `from` (tag must be lowercase).
    /// Returns `(start, open_end)` where `open_end` is just past the `>`.
    pub fn find_open(&self, tag: &str, from: usize) -> Option<(usize, usize)> {
        let pat = format!("<{tag}");
        let bytes = self.lc.as_bytes();
        let mut pos = from;
        loop {
            let start = self.lc.get(pos..)?.find(&pat)? + pos;
            let after = start + pat.len();
            match bytes.get(after) {
                Some(b) if b.is_ascii_whitespace() || *b == b'>' || *b == b'/' => {
                    let gt = self.lc[after..].find('>')? + after;
                    return Some((start, gt + 1));
                }
                // `<pre` while looking for `<p`, or a truncated tag at EOF
                _ => pos = after,
            }
        }
    }

    /// Next complete `tag` element starting at or after `from`.
    /// A missing close tag ends the element at the next opener of the same tag
    /// (or at the end of the document).
    pub fn find_element(&self, tag: &str, from: usize) -> Option<Element> {
        let (start, open_end) = self.find_open(tag, from)?;
        if self.src[start..open_end].ends_with("/>") {
            return Some(Element { start, open_end, close_start: open_end, end: open_end });
        }
        let close_pat = format!("</{tag}");
        let next_open = self.find_open(tag, open_end).map(|(s, _)| s);
        let close = self.lc[open_end..].find(&close_pat).map(|c| c + open_end);

        let (close_start, end) = match (close, next_open) {
            (Some(c), Some(n)) if n < c => (n, n),
            (Some(c), _) => {
                let gt = self.lc[c..].find('>').map(|g| c + g + 1).unwrap_or(self.len());
                (c, gt)
            }
            (None, Some(n)) => (n, n),
            (None, None) => (self.len(), self.len()),
        };
        Some(Element { start, open_end, close_start, end })
    }

    /// All `tag` elements whose opener starts inside `[from, to)`.
    pub fn elements_in(&self, tag: &str, from: usize, to: usize) -> Vec<Element> {
        let mut out = Vec::new();
        let mut pos = from;
        while let Some(el) = self.find_element(tag, pos) {
            if el.start >= to { break; }
            pos = el.open_end;
            out.push(el);
        }
        out
    }
}

/// Value of attribute `name` in an opening tag like `<h3 class="normal big">`.
/// Handles double, single and unquoted values.
pub fn attr_value(open_tag: &str, name: &str) -> Option<String> {
    let lc = to_lower(open_tag);
    let needle = to_lower(name);
    let bytes = lc.as_bytes();
    let mut pos = 0usize;
    while let Some(rel) = lc[pos..].find(&needle) {
        let at = pos + rel;
        pos = at + needle.len();
        // must be a whole attribute name
        let before_ok = at > 0 && bytes[at - 1].is_ascii_whitespace();
        let rest = lc[pos..].trim_start();
        if !before_ok || !rest.starts_with('=') { continue; }

        let val_start = open_tag.len() - rest.len() + 1;
        let val = open_tag[val_start..].trim_start();
        let (quote, body) = match val.as_bytes().first() {
            Some(b'"') => (Some('"'), &val[1..]),
            Some(b'\'') => (Some('\''), &val[1..]),
            _ => (None, val),
        };
        let end = match quote {
            Some(q) => body.find(q),
            None => body.find(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/'),
        }.unwrap_or(body.len());
        return Some(normalize_entities(&body[..end]));
    }
    None
}

/// Does the opening tag carry `class` token `class` (whitespace-separated, case-insensitive)?
pub fn has_class(open_tag: &str, class: &str) -> bool {
    attr_value(open_tag, "class")
        .map(|v| v.split_ascii_whitespace().any(|c| c.eq_ignore_ascii_case(class)))
        .unwrap_or(false)
}

/// Text from `pos` up to the next tag, entities decoded and trimmed.
pub fn text_until_tag(s: &str, pos: usize) -> String {
    let rest = s.get(pos..).unwrap_or("");
    let end = rest.find('<').unwrap_or(rest.len());
    normalize_ws(&normalize_entities(&rest[..end]))
}

/// Remove all `<...>` tags, decode entities, collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&normalize_entities(&out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_tag_respects_name_boundary() {
        let doc = Html::new("<pre>x</pre><P class=a>y</p>");
        let (s, e) = doc.find_open("p", 0).unwrap();
        assert_eq!(&doc.src[s..e], "<P class=a>");
    }

    #[test]
    fn unclosed_element_ends_at_next_sibling() {
        let doc = Html::new("<p>one<p>two</p>");
        let els = doc.elements_in("p", 0, doc.len());
        assert_eq!(els.len(), 2);
        assert_eq!(els[0].text(doc.src), "one");
        assert_eq!(els[1].text(doc.src), "two");
    }

    #[test]
    fn attributes_any_quoting() {
        assert_eq!(attr_value(r#"<h3 class="normal x">"#, "class").as_deref(), Some("normal x"));
        assert_eq!(attr_value("<h3 class='normal'>", "class").as_deref(), Some("normal"));
        assert_eq!(attr_value("<h3 class=normal>", "class").as_deref(), Some("normal"));
        assert_eq!(attr_value(r#"<h3 data-class="x">"#, "class"), None);
        assert!(has_class(r#"<h3 CLASS="Normal other">"#, "normal"));
        assert!(!has_class(r#"<h3 class="abnormal">"#, "normal"));
    }

    #[test]
    fn strip_and_text_until_tag() {
        assert_eq!(strip_tags("<b>A</b>&amp;  <i>B</i>"), "A& B");
        let s = "<strong>Cost:</strong> 5 Focus <em>x</em>";
        let pos = s.find("</strong>").unwrap() + "</strong>".len();
        assert_eq!(text_until_tag(s, pos), "5 Focus");
    }
}
