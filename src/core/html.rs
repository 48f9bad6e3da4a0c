// src/core/html.rs
// Case-insensitive tag-block scanning over raw HTML.
// No DOM and no nesting: a block runs from `<tag …>` to the first `</tag>` after it.

use super::sanitize::{ normalize_entities, normalize_ws };

/// Iterator over `<tag …>…</tag>` blocks of one tag name, in document order.
/// The haystack is lowercased once up front (ASCII only, so byte offsets line up).
pub struct TagBlocks<'a> {
    src: &'a str,
    lc: String,
    open: String,
    close: String,
    pos: usize,
}

impl<'a> TagBlocks<'a> {
    pub fn new(src: &'a str, tag: &str) -> Self {
        let tag = tag.to_ascii_lowercase();
        Self {
            src,
            lc: src.to_ascii_lowercase(),
            open: format!("<{tag}"),
            close: format!("</{tag}>"),
            pos: 0,
        }
    }
}

impl<'a> Iterator for TagBlocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let (start, end) = next_tag_block(&self.lc, &self.open, &self.close, self.pos)?;
        self.pos = end;
        Some(&self.src[start..end])
    }
}

/// All `<tag>` blocks inside `s`.
pub fn blocks<'a>(s: &'a str, tag: &str) -> TagBlocks<'a> {
    TagBlocks::new(s, tag)
}

/// Next block on an already-lowercased haystack, as a byte range.
/// `open` must match a whole tag name: `<tr` does not match `<track`.
fn next_tag_block(lc: &str, open: &str, close: &str, from: usize) -> Option<(usize, usize)> {
    let mut at = from;
    let start = loop {
        let cand = lc.get(at..)?.find(open)? + at;
        let boundary = match lc.as_bytes().get(cand + open.len()) {
            Some(b'>') | Some(b'/') => true,
            Some(c) => c.is_ascii_whitespace(),
            None => false,
        };
        if boundary { break cand; }
        at = cand + open.len();
    };
    let open_end = lc[start..].find('>')? + start + 1;
    let end = lc[open_end..].find(close)? + open_end + close.len();
    Some((start, end))
}

/// Given a complete block like `<td …>INNER</td>`, return INNER (may still hold tags).
pub fn inner_after_open_tag(block: &str) -> &str {
    if let (Some(open_end), Some(close_start)) = (block.find('>'), block.rfind('<')) {
        if close_start > open_end {
            return &block[open_end + 1..close_start];
        }
    }
    ""
}

/// Remove every `<...>` tag, keeping the text between them.
/// An unterminated `<` drops the rest of the input.
pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(lt) = rest.find('<') {
        out.push_str(&rest[..lt]);
        match rest[lt..].find('>') {
            Some(gt) => rest = &rest[lt + gt + 1..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

/// Visible text of a cell block: tags out, entities decoded, whitespace collapsed.
pub fn cell_text(block: &str) -> String {
    normalize_ws(&normalize_entities(&strip_tags(inner_after_open_tag(block))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_are_case_insensitive_and_ordered() {
        let html = "<TR><td>a</td></TR><tr class=\"x\"><TD>b</TD></tr>";
        let rows: Vec<&str> = blocks(html, "tr").collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], "<TR><td>a</td></TR>");
        assert_eq!(cell_text(blocks(rows[1], "td").next().unwrap()), "b");
    }

    #[test]
    fn open_tag_needs_a_name_boundary() {
        let html = "<track src=x></track><tr><td>ok</td></tr>";
        let rows: Vec<&str> = blocks(html, "tr").collect();
        assert_eq!(rows, vec!["<tr><td>ok</td></tr>"]);
    }

    #[test]
    fn unterminated_block_is_not_returned() {
        assert_eq!(blocks("<td>never closed", "td").count(), 0);
    }

    #[test]
    fn cell_text_strips_nested_markup() {
        let td = "<td class=\"c\"><p><strong>Joint&nbsp;1</strong>\n </p></td>";
        assert_eq!(cell_text(td), "Joint 1");
    }

    #[test]
    fn strip_tags_keeps_text_between_tags() {
        assert_eq!(strip_tags("<b>π</b>/2"), "π/2");
        assert_eq!(strip_tags("a > b"), "a > b");
        assert_eq!(strip_tags("Joint 1<br"), "Joint 1");
    }

    #[test]
    fn inner_of_empty_block_is_empty() {
        assert_eq!(inner_after_open_tag("<td></td>"), "");
        assert_eq!(inner_after_open_tag("no tags"), "");
    }
}
