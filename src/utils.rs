use ratatui::text::Text;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `s` to at most `max_width` display columns, ending in "..." when
/// something was removed.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str("...");
    out
}

/// `A`, `B`, `C`, `D` for option indices 0..4.
pub fn option_label(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}

/// Number of rows `line` occupies when wrapped at `max_width` columns,
/// breaking on characters the way a trimmed ratatui `Wrap` roughly does.
pub fn wrapped_line_count(line: &str, max_width: usize) -> usize {
    if max_width == 0 {
        return 0;
    }
    let mut rows = 1;
    let mut current = 0;
    for ch in line.trim_end().chars() {
        let w = ch.width().unwrap_or(1);
        if current + w > max_width && current > 0 {
            rows += 1;
            current = w;
        } else {
            current += w;
        }
    }
    rows
}

pub fn estimate_text_height(text: &Text, max_width: usize) -> usize {
    text.lines
        .iter()
        .map(|line| {
            let content: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            wrapped_line_count(&content, max_width)
        })
        .sum()
}

pub fn calculate_max_scroll(content_height: usize, visible_height: usize) -> u16 {
    content_height
        .saturating_sub(visible_height)
        .min(u16::MAX as usize) as u16
}
