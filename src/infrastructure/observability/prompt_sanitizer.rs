const MAX_VISIBLE_CHARS: usize = 100;

/// Shortens user text for logging and masks anything that looks like a credential.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let visible = if total_chars > MAX_VISIBLE_CHARS {
        let head: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", head, total_chars)
    } else {
        trimmed.to_string()
    };

    redact_secrets(&visible)
}

fn redact_secrets(text: &str) -> String {
    let markers = ["Bearer ", "api_key=", "password=", "secret=", "token=", "sk-"];

    let mut result = text.to_string();
    for marker in markers {
        let mut search_from = 0;
        while let Some(offset) = result[search_from..].find(marker) {
            let marker_at = search_from + offset;
            let start = marker_at + marker.len();
            // markers only count at the start of a word: "risk-free" stays as is
            if !starts_word(&result, marker_at) {
                search_from = start;
                continue;
            }
            let end = result[start..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| start + i)
                .unwrap_or(result.len());
            result.replace_range(start..end, "[REDACTED]");
            search_from = start + "[REDACTED]".len();
        }
    }

    result
}

fn starts_word(text: &str, at: usize) -> bool {
    text[..at]
        .chars()
        .next_back()
        .is_none_or(|c| !(c.is_alphanumeric() || c == '_'))
}
