use colcrack::cipher::{decode, encode, normalize, validate, Key, FILLER};
use colcrack::lexicon;
use colcrack::oracle;
use colcrack::scorer::Scorer;
use proptest::prelude::*;

// --- STRATEGIES ---

prop_compose! {
    fn arb_key()(len in 1usize..12)(ranks in Just((1..=len).collect::<Vec<_>>()).prop_shuffle()) -> Key {
        Key::new(ranks).unwrap()
    }
}

// Upper-case text with no filler characters.
fn arb_plaintext() -> impl Strategy<Value = String> {
    "[A-WYZ]{0,80}"
}

proptest! {
    #[test]
    fn prop_round_trip(text in arb_plaintext(), key in arb_key()) {
        let ct = encode(&text, &key, false);
        prop_assert_eq!(decode(&ct, &key), text);
    }

    #[test]
    fn prop_ciphertext_is_full_rectangle(text in arb_plaintext(), key in arb_key()) {
        let ct = encode(&text, &key, false);
        let n = text.chars().count();
        prop_assert_eq!(ct.chars().count(), n.div_ceil(key.len()) * key.len());
        prop_assert_eq!(
            ct.chars().filter(|&c| c != FILLER).count(),
            n
        );
    }

    #[test]
    fn prop_normalize_idempotent(key in arb_key()) {
        let once = normalize(&key.to_string()).unwrap();
        prop_assert_eq!(&once, &key);
        prop_assert_eq!(normalize(&once.to_string()).unwrap(), once);
    }

    #[test]
    fn prop_keywords_always_valid(word in "[a-zA-Z]{1,20}") {
        prop_assert!(validate(&word));
        let key = normalize(&word).unwrap();
        prop_assert_eq!(key.len(), word.chars().count());
        prop_assert!(validate(&key.to_string()));
    }

    #[test]
    fn prop_scoring_is_total(text in "\\PC{0,60}") {
        let scorer = Scorer::default();
        let s = scorer.score(&text);
        let f = scorer.fitness(&text);
        prop_assert!(s.is_finite() && s >= 0.0);
        prop_assert!(f.is_finite() && f >= 0.0);
        prop_assert!(f <= scorer.weights.score_cap);
        let c = scorer.confidence(f);
        prop_assert!((0.0..=100.0).contains(&c));
    }

    #[test]
    fn prop_coverage_in_unit_range(text in "[A-Za-z ]{0,60}") {
        let cov = lexicon::coverage_score(&text);
        prop_assert!((0.0..=1.0).contains(&cov));
    }

    #[test]
    fn prop_segment_preserves_letters(text in "[A-Z]{0,40}") {
        let seg = lexicon::segment(&text, lexicon::MAX_WORD_LEN);
        prop_assert_eq!(seg.replace(' ', ""), text);
    }

    #[test]
    fn prop_ic_bounded(text in "[A-Z]{0,100}") {
        let ic = oracle::index_of_coincidence(&text);
        prop_assert!((0.0..=1.0).contains(&ic));
    }
}
