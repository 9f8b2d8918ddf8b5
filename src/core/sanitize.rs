// src/core/sanitize.rs

/// Collapse runs of whitespace (including newlines) into single spaces and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// `1234567` → `"1,234,567"`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 { out.push(','); }
        out.push(ch);
    }
    out
}

/// First `max` chars, then `…`. Counts chars, not bytes.
pub fn truncate_ellipsis(s: &str, max: usize) -> String {
    let mut out: String = s.chars().take(max).collect();
    out.push('…');
    out
}

/// Date portion of an RFC 3339 timestamp (`2019-03-04T10:00:00Z` → `2019-03-04`).
pub fn date_part(ts: &str) -> &str {
    ts.get(..10).unwrap_or(ts)
}
