// Small markdown subset rendered to HTML. Everything that is not recognised
// syntax is escaped, so raw markup in the source never reaches the DOM.

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

enum Block {
    Paragraph(Vec<String>),
    List(Vec<String>),
}

pub fn render(text: &str) -> String {
    let mut out = String::new();
    let mut block: Option<Block> = None;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            flush(&mut block, &mut out);
            continue;
        }
        if let Some((level, title)) = heading(line) {
            flush(&mut block, &mut out);
            out.push_str(&format!("<h{0}>{1}</h{0}>", level, inline(title)));
            continue;
        }
        if let Some(item) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
            match &mut block {
                Some(Block::List(items)) => items.push(item.to_string()),
                _ => {
                    flush(&mut block, &mut out);
                    block = Some(Block::List(vec![item.to_string()]));
                }
            }
            continue;
        }
        match &mut block {
            Some(Block::Paragraph(lines)) => lines.push(line.to_string()),
            _ => {
                flush(&mut block, &mut out);
                block = Some(Block::Paragraph(vec![line.to_string()]));
            }
        }
    }
    flush(&mut block, &mut out);
    out
}

fn heading(line: &str) -> Option<(usize, &str)> {
    let level = line.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    line[level..].strip_prefix(' ').map(|t| (level, t.trim()))
}

fn flush(block: &mut Option<Block>, out: &mut String) {
    match block.take() {
        Some(Block::Paragraph(lines)) => {
            out.push_str("<p>");
            out.push_str(&inline(&lines.join(" ")));
            out.push_str("</p>");
        }
        Some(Block::List(items)) => {
            out.push_str("<ul>");
            for item in items {
                out.push_str("<li>");
                out.push_str(&inline(&item));
                out.push_str("</li>");
            }
            out.push_str("</ul>");
        }
        None => {}
    }
}

fn safe_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    ["http://", "https://", "mailto:"]
        .iter()
        .any(|p| lower.starts_with(p))
}

/// Inline spans: `code`, **strong**, *em* and [links](url).
fn inline(text: &str) -> String {
    let mut out = String::new();
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        match c {
            '`' => {
                if let Some(end) = rest[1..].find('`') {
                    out.push_str("<code>");
                    out.push_str(&escape_html(&rest[1..1 + end]));
                    out.push_str("</code>");
                    rest = &rest[end + 2..];
                    continue;
                }
            }
            '*' if rest.starts_with("**") => {
                if let Some(end) = rest[2..].find("**") {
                    out.push_str("<strong>");
                    out.push_str(&inline(&rest[2..2 + end]));
                    out.push_str("</strong>");
                    rest = &rest[end + 4..];
                    continue;
                }
            }
            '*' => {
                if let Some(end) = rest[1..].find('*') {
                    if end > 0 {
                        out.push_str("<em>");
                        out.push_str(&inline(&rest[1..1 + end]));
                        out.push_str("</em>");
                        rest = &rest[end + 2..];
                        continue;
                    }
                }
            }
            '[' => {
                if let Some((label, url, used)) = link(rest) {
                    if safe_url(url) {
                        out.push_str(&format!(
                            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                            escape_html(url.trim()),
                            inline(label)
                        ));
                    } else {
                        out.push_str(&inline(label));
                    }
                    rest = &rest[used..];
                    continue;
                }
            }
            _ => {}
        }
        out.push_str(&escape_html(&rest[..c.len_utf8()]));
        rest = &rest[c.len_utf8()..];
    }
    out
}

// `[label](url)` at the start of `s` → (label, url, bytes consumed).
// The label ends at the first `]`, which must be followed by `(`.
fn link(s: &str) -> Option<(&str, &str, usize)> {
    let close = s.find(']')?;
    let label = &s[1..close];
    let tail = s[close + 1..].strip_prefix('(')?;
    let end = tail.find(')')?;
    Some((label, &tail[..end], close + 2 + end + 1))
}
