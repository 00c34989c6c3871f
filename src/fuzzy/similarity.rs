// File: src/fuzzy/similarity.rs

/// Tokens of this many characters or fewer ("de", "el", ...) are noise.
const NOISE_TOKEN_LEN: usize = 2;

/// Credit for a token that is a substring of (or contains) a token on the other side.
pub const PARTIAL_CREDIT: f64 = 0.7;

fn tokens(s: &str) -> Vec<&str> {
    s.split_whitespace()
        .filter(|t| t.chars().count() > NOISE_TOKEN_LEN)
        .collect()
}

/// Token-overlap similarity between two already-normalized strings.
///
/// Every token of `a` scores 1.0 when it appears verbatim in `b`, otherwise
/// 0.7 for the first token of `b` it contains or is contained by. The sum is
/// divided by the larger token count, so the result lies in `[0, 1]`.
/// Returns 0 when either side has no tokens left after noise filtering.
pub fn similarity(a: &str, b: &str) -> f64 {
    let words_a = tokens(a);
    let words_b = tokens(b);

    if words_a.is_empty() || words_b.is_empty() {
        return 0.0;
    }

    let total = words_a.len().max(words_b.len()) as f64;
    let mut match_count = 0.0;

    for word_a in &words_a {
        if words_b.contains(word_a) {
            match_count += 1.0;
        } else if words_b
            .iter()
            .any(|word_b| word_a.contains(word_b) || word_b.contains(word_a))
        {
            match_count += PARTIAL_CREDIT;
        }
    }

    match_count / total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_phrases_score_one() {
        assert_eq!(similarity("anillo con bisagra", "anillo con bisagra"), 1.0);
    }

    #[test]
    fn test_noise_tokens_are_ignored() {
        // "de" is dropped on both sides.
        assert_eq!(similarity("tunel de metal", "tunel metal"), 1.0);
        assert_eq!(similarity("de el", "tunel"), 0.0);
        assert_eq!(similarity("", "tunel"), 0.0);
    }

    #[test]
    fn test_partial_credit_counts_once_per_token() {
        // "barbells" contains "barbell"; only one 0.7 is granted for it.
        let score = similarity("barbells", "barbell barbell");
        assert!((score - 0.35).abs() < 1e-9, "score was {score}");
    }

    #[test]
    fn test_divides_by_larger_token_count() {
        let score = similarity("alfa bravo charlie delta echo foxtrot golf hotel india juliet",
            "alfa bravo charlie delta echo foxtrot");
        assert_eq!(score, 0.6);
    }

    #[test]
    fn test_mixed_exact_and_partial() {
        let score = similarity(
            "alfa bravo charlie delta echo foxtrot golf hotel india juliet",
            "alfa bravo charlie delta golfing hotels indiana",
        );
        assert!((score - 0.61).abs() < 1e-9, "score was {score}");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // "ñu" is two characters but three bytes.
        assert_eq!(similarity("ñu", "ñu"), 0.0);
    }
}
