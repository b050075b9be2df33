pub mod words;

use self::words::{LONGEST_WORD, WORD_SET};
use serde::Serialize;
use std::collections::HashSet;

/// Scan window for substring lookups; no table entry is longer.
pub const MAX_WORD_LEN: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordMatch {
    pub word: String,
    pub start: usize,
    pub end: usize,
}

impl WordMatch {
    pub fn span(&self) -> usize {
        self.end - self.start
    }
}

pub fn contains(word: &str) -> bool {
    WORD_SET.contains(word)
}

fn upper_chars(text: &str) -> Vec<char> {
    text.to_uppercase().chars().collect()
}

/// Every lexicon word occurring in `text`, overlapping ones included.
/// Offsets are char positions in the upper-cased text.
pub fn find_words(text: &str, min_len: usize) -> Vec<WordMatch> {
    let chars = upper_chars(text);
    find_words_in(&chars, min_len.max(1))
}

fn find_words_in(chars: &[char], min_len: usize) -> Vec<WordMatch> {
    let n = chars.len();
    let mut found = Vec::new();
    let mut buf = String::with_capacity(MAX_WORD_LEN);

    for start in 0..n {
        let limit = (start + MAX_WORD_LEN).min(n);
        for end in (start + min_len)..=limit {
            buf.clear();
            buf.extend(&chars[start..end]);
            if WORD_SET.contains(buf.as_str()) {
                found.push(WordMatch {
                    word: buf.clone(),
                    start,
                    end,
                });
            }
        }
    }
    found
}

/// Fraction of characters covered by non-overlapping lexicon words.
///
/// Greedy: longest matches claim their span first and any match touching an
/// already claimed position is skipped. This is an approximation, not the
/// maximum achievable coverage.
pub fn coverage_score(text: &str) -> f64 {
    let chars = upper_chars(text);
    if chars.is_empty() {
        return 0.0;
    }

    let mut found = find_words_in(&chars, 2);
    if found.is_empty() {
        return 0.0;
    }
    found.sort_by(|a, b| b.span().cmp(&a.span()));

    let mut covered = vec![false; chars.len()];
    for m in &found {
        if !covered[m.start..m.end].iter().any(|&c| c) {
            covered[m.start..m.end].iter_mut().for_each(|c| *c = true);
        }
    }

    let hits = covered.iter().filter(|&&c| c).count();
    hits as f64 / chars.len() as f64
}

fn token_score(token: &str, len: usize) -> f64 {
    if WORD_SET.contains(token) {
        (len as f64).powf(1.5)
    } else if len <= 2 {
        len as f64 * 0.5
    } else {
        // Unknown runs are allowed but earn nothing.
        0.0
    }
}

/// Splits spaceless text into words, maximizing the summed token score.
/// Returns upper-case tokens joined by single spaces.
pub fn segment(text: &str, max_word_len: usize) -> String {
    let chars = upper_chars(text);
    let n = chars.len();
    let max_word_len = max_word_len.max(1);

    // best[i] = (score of best split of chars[..i], start of its last token)
    let mut best: Vec<(f64, Option<usize>)> = vec![(0.0, None); n + 1];
    let mut buf = String::with_capacity(max_word_len);

    for i in 1..=n {
        let (mut best_score, mut best_prev) = (0.0, None);
        for j in i.saturating_sub(max_word_len)..i {
            buf.clear();
            buf.extend(&chars[j..i]);
            let total = best[j].0 + token_score(&buf, i - j);
            if total > best_score {
                best_score = total;
                best_prev = Some(j);
            }
        }
        best[i] = (best_score, best_prev);
    }

    let mut tokens = Vec::new();
    let mut end = n;
    while let Some(start) = best[end].1 {
        tokens.push(chars[start..end].iter().collect::<String>());
        end = start;
    }
    tokens.reverse();
    tokens.join(" ")
}

/// Share of whitespace-separated words found in the lexicon. Text without
/// whitespace falls back to [`coverage_score`].
pub fn detect_language(text: &str) -> f64 {
    if text.trim().is_empty() {
        return 0.0;
    }
    if !text.chars().any(char::is_whitespace) {
        return coverage_score(text);
    }
    let upper = text.to_uppercase();
    let words: Vec<&str> = upper.split_whitespace().collect();
    let valid = words.iter().filter(|w| WORD_SET.contains(**w)).count();
    valid as f64 / words.len() as f64
}

/// Longest lexicon word in `text`; the first one wins on equal length.
pub fn find_longest_word(text: &str) -> (String, usize) {
    let chars = upper_chars(text);
    let mut longest = (String::new(), 0);
    let mut buf = String::new();

    for start in 0..chars.len() {
        let limit = (start + *LONGEST_WORD).min(chars.len());
        for end in (start + 1)..=limit {
            let len = end - start;
            if len <= longest.1 {
                continue;
            }
            buf.clear();
            buf.extend(&chars[start..end]);
            if WORD_SET.contains(buf.as_str()) {
                longest = (buf.clone(), len);
            }
        }
    }
    longest
}

/// Spaced text counts each lexicon word; spaceless text counts distinct words found.
pub fn count_dictionary_words(text: &str) -> usize {
    let upper = text.to_uppercase();
    if upper.contains(' ') {
        return upper
            .split_whitespace()
            .filter(|w| WORD_SET.contains(*w))
            .count();
    }
    let chars: Vec<char> = upper.chars().collect();
    find_words_in(&chars, 2)
        .into_iter()
        .map(|m| m.word)
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_words_offsets() {
        let found = find_words("thecat", 2);
        assert!(found.contains(&WordMatch {
            word: "THE".into(),
            start: 0,
            end: 3
        }));
        // "HE" overlaps "THE" and is still reported.
        assert!(found.iter().any(|m| m.word == "HE" && m.start == 1));
    }

    #[test]
    fn test_min_len_filters_single_letters() {
        assert!(find_words("a", 2).is_empty());
        assert_eq!(find_words("a", 1).len(), 1);
    }

    #[test]
    fn test_coverage_full_and_empty() {
        assert_eq!(coverage_score(""), 0.0);
        assert_eq!(coverage_score("qzqzqz"), 0.0);
        assert!((coverage_score("THEWORLD") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_segment_known_words() {
        assert_eq!(segment("thequickbrownfox", MAX_WORD_LEN), "THE QUICK BROWN FOX");
    }

    #[test]
    fn test_segment_keeps_every_char() {
        let seg = segment("qzxthe", MAX_WORD_LEN);
        assert_eq!(seg.replace(' ', ""), "QZXTHE");
        assert!(seg.ends_with("THE"));
    }

    #[test]
    fn test_segment_empty() {
        assert_eq!(segment("", MAX_WORD_LEN), "");
    }

    #[test]
    fn test_detect_language() {
        assert!((detect_language("the world is") - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(detect_language("   "), 0.0);
        assert!(detect_language("THEWORLD") > 0.99);
    }

    #[test]
    fn test_longest_word() {
        assert_eq!(find_longest_word("xxsomethingxx"), ("SOMETHING".to_string(), 9));
        assert_eq!(find_longest_word("qqq"), (String::new(), 0));
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_dictionary_words("the cat the dog"), 3);
        assert_eq!(count_dictionary_words("thethe"), count_dictionary_words("the"));
    }
}
