use colcrack::api;
use colcrack::config::ScoringWeights;
use colcrack::scorer::engine::chi_squared;
use colcrack::scorer::tables::ENGLISH_FREQ;
use colcrack::scorer::Scorer;

const ENGLISH: &str = "ITWASTHEBESTOFTIMESITWASTHEWORSTOFTIMESITWASTHEAGEOFWISDOM\
ITWASTHEAGEOFFOOLISHNESSITWASTHEEPOCHOFBELIEFITWASTHEEPOCHOFINCREDULITY";

#[test]
fn test_chi_squared_empty_is_infinite() {
    assert_eq!(chi_squared(""), f64::INFINITY);
}

#[test]
fn test_english_beats_scrambled() {
    let scrambled: String = ENGLISH.chars().rev().collect();
    let english = api::score_text(ENGLISH);
    assert!(english > api::score_text(&scrambled));
    assert!(english > api::score_text(&"Q".repeat(ENGLISH.len())));
}

#[test]
fn test_score_range() {
    for text in [ENGLISH, "ZZZZ", "AB", "THE THE THE", "1234567"] {
        let s = api::score_text(text);
        assert!((0.0..100.0).contains(&s), "{} scored {}", text, s);
    }
}

#[test]
fn test_english_chi_squared_is_small() {
    assert!(chi_squared(ENGLISH) < chi_squared("ZZZZZZQQQQQQJJJJJ"));
}

// Letter counts proportional to English frequencies, rounded to whole letters.
fn english_shaped(length: usize) -> String {
    ('A'..='Z')
        .zip(ENGLISH_FREQ)
        .flat_map(|(c, pct)| {
            let count = (pct / 100.0 * length as f64).round() as usize;
            std::iter::repeat(c).take(count)
        })
        .collect()
}

#[test]
fn test_chi_squared_vanishes_for_english_distribution() {
    let values: Vec<f64> = [100, 1_000, 10_000, 100_000]
        .into_iter()
        .map(|n| chi_squared(&english_shaped(n)))
        .collect();

    assert!(values.windows(2).all(|w| w[1] < w[0]), "{:?}", values);
    assert!(values[0] < 2.0);
    assert!(values[3] < 0.01, "{:?}", values);
}

#[test]
fn test_dictionary_score_bounds() {
    assert_eq!(api::score_text_by_dictionary(""), 0.0);
    let full = api::score_text_by_dictionary("THEDOG");
    assert!(full > 0.9 && full <= 1.0);
    assert!(api::score_text_by_dictionary("QZXJVQ") < 0.5);
}

#[test]
fn test_details_and_compare() {
    let scorer = Scorer::new(ScoringWeights::default());
    let d = scorer.details(ENGLISH);
    assert!(d.dictionary > 0.5);
    assert!(d.combined_score >= d.base_score);

    let cmp = scorer.compare(ENGLISH, "QQQQ");
    assert!(cmp.text1_score > cmp.text2_score);
    assert!(cmp.text1_chi_squared < cmp.text2_chi_squared);
}

#[test]
fn test_weights_change_scores() {
    let letters_only = Scorer::new(ScoringWeights {
        weight_bigram: 0.0,
        weight_trigram: 0.0,
        weight_quadgram: 0.0,
        ..Default::default()
    });
    let default = Scorer::default();
    assert!(letters_only.score(ENGLISH) < default.score(ENGLISH));
}
