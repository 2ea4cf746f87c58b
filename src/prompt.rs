/// Prompt sent to the chat API when no override is configured.
pub const DEFAULT_PROMPT: &str = "Tell me a funny joke, ideally dirty!";

/// Max length for a configured prompt override (hard truncation beyond this).
pub const MAX_PROMPT_LEN: usize = 800;

/// Remove control characters and hard-truncate a configured prompt override.
pub fn sanitize_prompt(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_control())
        .take(MAX_PROMPT_LEN)
        .collect()
}

/// Resolve the prompt to send: a sanitized override when one is configured
/// and non-blank, the default otherwise.
pub fn resolve_prompt(custom: Option<&str>) -> String {
    custom
        .map(sanitize_prompt)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PROMPT.to_string())
}
