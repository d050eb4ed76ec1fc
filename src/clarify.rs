//! Heuristic screen for under-specified prompts.

/// Trimmed prompts shorter than this many characters are too vague
/// to answer.
const MIN_PROMPT_CHARS: usize = 10;

/// Prompts of this many whitespace tokens or fewer lack context.
const MAX_BARE_TOKENS: usize = 2;

/// True when the prompt is too short or too bare to answer without
/// asking back. Length is counted in Unicode scalar values, which can
/// misread dense non-Latin scripts as too short.
pub fn needs_clarification(prompt: &str) -> bool {
    let trimmed = prompt.trim();
    if trimmed.chars().count() < MIN_PROMPT_CHARS {
        return true;
    }
    trimmed.split_whitespace().count() <= MAX_BARE_TOKENS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_prompt_needs_clarification() {
        assert!(needs_clarification(""));
    }

    #[test]
    fn whitespace_only_needs_clarification() {
        assert!(needs_clarification("   \n\t  "));
    }

    #[test]
    fn short_prompt_needs_clarification() {
        assert!(needs_clarification("hi"));
        assert!(needs_clarification("  help  "));
    }

    #[test]
    fn two_tokens_need_clarification() {
        // Long enough, but only two words.
        assert!(needs_clarification("explain recursion"));
    }

    #[test]
    fn three_tokens_pass() {
        assert!(!needs_clarification("explain recursion basics"));
    }

    #[test]
    fn full_question_passes() {
        assert!(!needs_clarification(
            "how do binary search trees maintain balance during insertion"
        ));
    }

    #[test]
    fn length_is_counted_in_chars_not_bytes() {
        // Nine characters, many more bytes; still under the threshold.
        assert!(needs_clarification("再帰とは何ですか？ "));
    }
}
