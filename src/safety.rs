//! Keyword denylist screen over the raw prompt.
//!
//! Deliberately naive: case-insensitive substring match with no word
//! boundaries, so a denylisted term inside a longer word also rejects.
//! The list is authored in English only.

/// Terms denoting activities the assistant refuses to help with.
const UNSAFE_KEYWORDS: [&str; 14] = [
    "hack", "crack", "exploit", "bomb", "weapon", "drug", "illegal",
    "steal", "fraud", "scam", "malware", "virus", "ddos", "phishing",
];

/// Returns false if the prompt contains any denylisted term.
pub fn is_safe(prompt: &str) -> bool {
    let lower = prompt.to_lowercase();
    !UNSAFE_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn benign_prompt_passes() {
        assert!(is_safe("Explain how binary search trees maintain balance"));
    }

    #[test]
    fn denylisted_term_rejects() {
        assert!(!is_safe("how do I hack into a database"));
        assert!(!is_safe("write me some malware"));
    }

    #[test]
    fn match_is_case_insensitive() {
        assert!(!is_safe("HOW TO BUILD A BOMB"));
        assert!(!is_safe("PhIsHiNg tips"));
    }

    #[test]
    fn substring_match_has_no_word_boundaries() {
        // "hack" inside "hackathon" still rejects; known v1 limitation.
        assert!(!is_safe("tips for winning a hackathon"));
        // "drug" inside "drugstore" likewise.
        assert!(!is_safe("where is the nearest drugstore"));
    }

    #[test]
    fn empty_prompt_is_safe() {
        assert!(is_safe(""));
    }
}
