// file: src/analysis/evidence.rs
// description: literal sentence-level evidence extraction for scored pairs
// reference: exact-substring heuristic, not fuzzy matching

/// Minimum raw cosine score before evidence is even attempted.
pub const EVIDENCE_SCORE_THRESHOLD: f32 = 0.4;

/// Candidate sentences at or below this trimmed length are too short to be
/// meaningful evidence.
pub const MIN_SENTENCE_CHARS: usize = 30;

/// Find up to 3 sentences of the source that appear verbatim in the target.
///
/// Sentences are the source split on literal periods, trimmed. A candidate
/// is kept only when its trimmed length exceeds 30 characters and it occurs
/// as an exact, case-sensitive substring of the target. Collection stops
/// after the third match is appended.
pub fn find_matches(source_text: &str, target_text: &str, score: f32) -> Vec<String> {
    let mut matches = Vec::new();

    if score <= EVIDENCE_SCORE_THRESHOLD {
        return matches;
    }

    for sentence in source_text.split('.') {
        let clean = sentence.trim();
        if clean.chars().count() > MIN_SENTENCE_CHARS && target_text.contains(clean) {
            matches.push(clean.to_string());
            if matches.len() > 2 {
                break;
            }
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FOX: &str =
        "The quick brown fox jumps over the lazy dog and this is a long enough sentence.";

    #[test]
    fn test_verbatim_sentence_is_found() {
        let target = format!("Intro text. {FOX} Outro text.");
        let matches = find_matches(FOX, &target, 0.8);
        assert_eq!(
            matches,
            vec!["The quick brown fox jumps over the lazy dog and this is a long enough sentence"]
        );
    }

    #[test]
    fn test_no_matches_at_or_below_threshold() {
        let target = format!("container with {FOX}");
        assert!(find_matches(FOX, &target, 0.4).is_empty());
        assert!(find_matches(FOX, &target, 0.1).is_empty());
    }

    #[test]
    fn test_just_above_threshold_matches() {
        let target = format!("container with {FOX}");
        assert_eq!(find_matches(FOX, &target, 0.41).len(), 1);
    }

    #[test]
    fn test_short_sentences_are_skipped() {
        let source = "Tiny one. Another tiny. Short again.";
        let matches = find_matches(source, source, 0.9);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_exact_case_sensitive_substring_required() {
        let source = "This sentence is certainly longer than thirty characters.";
        let target = "this sentence is certainly longer than thirty characters.";
        assert!(find_matches(source, target, 0.9).is_empty());
    }

    #[test]
    fn test_never_more_than_three_matches() {
        let sentences: Vec<String> = (0..6)
            .map(|i| format!("Sentence number {i} which is comfortably past thirty characters"))
            .collect();
        let source = sentences.join(". ");
        let target = source.clone();

        let matches = find_matches(&source, &target, 0.9);
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0], sentences[0]);
        assert_eq!(matches[2], sentences[2]);
    }

    #[test]
    fn test_matches_collected_in_source_order() {
        let a = "Alpha sentence that is much longer than thirty characters total";
        let b = "Beta sentence that is much longer than thirty characters as well";
        let source = format!("{a}. {b}.");
        let target = format!("{b} ... {a}");

        let matches = find_matches(&source, &target, 0.9);
        assert_eq!(matches, vec![a.to_string(), b.to_string()]);
    }

    #[test]
    fn test_empty_source_yields_nothing() {
        assert!(find_matches("", "anything", 0.9).is_empty());
    }
}
