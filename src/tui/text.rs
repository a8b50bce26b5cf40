//! Shared text formatting helpers used by terminal rendering.

/// Count visible character width (single-cell approximation).
pub fn visible_width(s: &str) -> usize {
    s.chars().count()
}

/// Clip a string to at most `max_width` visible characters.
pub fn clip_to_width(s: &str, max_width: usize) -> String {
    s.chars().take(max_width).collect()
}

/// Truncate text for single-line display and replace newlines with spaces.
pub fn truncate_single_line(s: &str, max_width: usize) -> String {
    let flat: String = s.chars().map(|c| if c == '\n' { ' ' } else { c }).collect();
    if visible_width(&flat) <= max_width {
        return flat;
    }
    if max_width <= 3 {
        return clip_to_width(&flat, max_width);
    }
    format!("{}...", clip_to_width(&flat, max_width - 3))
}

/// Right-pad with spaces to exactly `width` columns, clipping longer input.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let mut out = clip_to_width(s, width);
    let used = visible_width(&out);
    out.extend(std::iter::repeat(' ').take(width - used));
    out
}

/// Left padding that centers `s` in `width` columns.
pub fn center_offset(s: &str, width: usize) -> usize {
    width.saturating_sub(visible_width(s)) / 2
}

/// Wrap a single line to fit `max_width`.
///
/// This prefers whitespace boundaries when possible and falls back to hard
/// wrapping long words.
pub fn wrap_for_block(line: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }
    if line.is_empty() {
        return vec![String::new()];
    }

    let chars: Vec<char> = line.chars().collect();
    let mut out = Vec::new();
    let mut start = 0usize;

    while start < chars.len() {
        let end = (start + max_width).min(chars.len());
        if end == chars.len() {
            out.push(chars[start..end].iter().collect());
            break;
        }
        if chars[end].is_whitespace() {
            out.push(chars[start..end].iter().collect());
            start = skip_whitespace(&chars, end);
            continue;
        }

        match (start + 1..end).rev().find(|idx| chars[*idx].is_whitespace()) {
            Some(split_idx) => {
                out.push(chars[start..split_idx].iter().collect());
                start = skip_whitespace(&chars, split_idx);
            }
            None => {
                out.push(chars[start..end].iter().collect());
                start = end;
            }
        }
    }

    if out.is_empty() {
        out.push(String::new());
    }
    out
}

/// Wrap multi-paragraph text, keeping blank lines between paragraphs.
pub fn wrap_paragraphs(text: &str, max_width: usize) -> Vec<String> {
    text.lines()
        .flat_map(|line| wrap_for_block(line.trim_end(), max_width))
        .collect()
}

fn skip_whitespace(chars: &[char], mut idx: usize) -> usize {
    while idx < chars.len() && chars[idx].is_whitespace() {
        idx += 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_flattens_and_clips() {
        let out = truncate_single_line("hello\nworld", 8);
        assert_eq!(out, "hello...");
        assert_eq!(truncate_single_line("short", 8), "short");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_single_line("ééééé", 5), "ééééé");
        assert_eq!(truncate_single_line("éééééé", 5), "éé...");
    }

    #[test]
    fn clip_to_width_limits_by_chars() {
        assert_eq!(clip_to_width("abcdef", 3), "abc");
    }

    #[test]
    fn pad_to_width_pads_and_clips() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdef", 4), "abcd");
    }

    #[test]
    fn center_offset_splits_remaining_space() {
        assert_eq!(center_offset("abcd", 10), 3);
        assert_eq!(center_offset("abcdefghijkl", 10), 0);
    }

    #[test]
    fn wrap_for_block_prefers_word_boundaries() {
        let wrapped = wrap_for_block("one two three", 7);
        assert_eq!(wrapped, vec!["one two".to_string(), "three".to_string()]);
    }

    #[test]
    fn wrap_for_block_falls_back_to_hard_wrap() {
        let wrapped = wrap_for_block("superlongtoken", 5);
        assert_eq!(
            wrapped,
            vec!["super".to_string(), "longt".to_string(), "oken".to_string()]
        );
    }

    #[test]
    fn wrap_paragraphs_keeps_blank_lines() {
        let wrapped = wrap_paragraphs("alpha beta\n\ngamma", 5);
        assert_eq!(wrapped, vec!["alpha", "beta", "", "gamma"]);
    }
}
