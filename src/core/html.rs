// src/core/html.rs
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Next `<o ...> ... </c>` block at or after `from`. Case-insensitive,
/// returns byte offsets spanning open tag through close tag. Does not
/// handle nesting of the same tag; use `div_inner_by_marker` for that.
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Inner content of the `<div>` whose opener carries `marker` (an id or
/// class fragment). Walks a div depth counter so nested divs inside the
/// container don't cut the block short.
pub fn div_inner_by_marker<'a>(s: &'a str, marker: &str) -> Option<&'a str> {
    let lc = to_lower(s);
    let hit = lc.find(&to_lower(marker))?;
    let open = lc[..hit].rfind("<div")?;
    let content = s[open..].find('>')? + open + 1;

    let mut depth = 1usize;
    let mut i = content;
    loop {
        let close = lc[i..].find("</div")? + i;
        match lc[i..close].find("<div") {
            Some(o) => {
                depth += 1;
                i += o + "<div".len();
            }
            None => {
                depth -= 1;
                if depth == 0 {
                    return Some(&s[content..close]);
                }
                i = close + "</div".len();
            }
        }
    }
}

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
    super::sanitize::normalize_ws(&out)
}
