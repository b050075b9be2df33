use std::collections::HashSet;
use std::sync::LazyLock;

/// English letter frequencies in percent, A..Z.
pub const ENGLISH_FREQ: [f64; 26] = [
    8.167, 1.492, 2.782, 4.253, 12.702, 2.228, 2.015, 6.094, 6.966, 0.153, 0.772, 4.025, 2.406,
    6.749, 7.507, 1.929, 0.095, 5.987, 6.327, 9.056, 2.758, 0.978, 2.360, 0.150, 1.974, 0.074,
];

/// Index of Coincidence of English text.
pub const ENGLISH_IC: f64 = 0.067;

pub const COMMON_BIGRAMS: &[(&str, f64)] = &[
    ("TH", 3.56), ("HE", 3.07), ("IN", 2.43), ("ER", 2.05), ("AN", 1.99),
    ("RE", 1.85), ("ON", 1.76), ("AT", 1.49), ("EN", 1.45), ("ND", 1.35),
    ("TI", 1.34), ("ES", 1.34), ("OR", 1.28), ("TE", 1.20), ("OF", 1.17),
    ("ED", 1.17), ("IS", 1.13), ("IT", 1.12), ("AL", 1.09), ("AR", 1.07),
    ("ST", 1.05), ("TO", 1.04), ("NT", 1.04), ("NG", 0.95), ("SE", 0.93),
    ("HA", 0.93), ("AS", 0.87), ("OU", 0.87), ("IO", 0.83), ("LE", 0.83),
];

pub const COMMON_TRIGRAMS: &[(&str, f64)] = &[
    ("THE", 3.51), ("AND", 1.59), ("ING", 1.14), ("HER", 0.82), ("HAT", 0.65),
    ("HIS", 0.60), ("THA", 0.60), ("ERE", 0.56), ("FOR", 0.56), ("ENT", 0.53),
    ("ION", 0.53), ("TER", 0.51), ("WAS", 0.51), ("YOU", 0.48), ("ITH", 0.48),
    ("VER", 0.47), ("ALL", 0.46), ("WIT", 0.46), ("THI", 0.46), ("TIO", 0.45),
];

pub const COMMON_QUADGRAMS: &[(&str, f64)] = &[
    ("TION", 0.31), ("THAT", 0.27), ("THER", 0.24), ("WITH", 0.23), ("MENT", 0.19),
    ("IONS", 0.17), ("THES", 0.16), ("ATIO", 0.15), ("FTHE", 0.14), ("DTHE", 0.13),
    ("ANDT", 0.13), ("INTH", 0.12), ("HERE", 0.12), ("STHE", 0.12), ("OTHE", 0.11),
];

/// Membership set over upper-case ASCII n-grams of a fixed width.
pub struct NgramTable<const N: usize> {
    grams: HashSet<[u8; N]>,
}

impl<const N: usize> NgramTable<N> {
    pub fn from_entries(entries: &[(&str, f64)]) -> Self {
        let grams = entries
            .iter()
            .filter_map(|(gram, _)| <[u8; N]>::try_from(gram.as_bytes()).ok())
            .collect();
        Self { grams }
    }

    /// `window` must be exactly `N` upper-case chars.
    pub fn contains_chars(&self, window: &[char]) -> bool {
        let mut gram = [0u8; N];
        for (slot, &c) in gram.iter_mut().zip(window) {
            if !c.is_ascii() {
                return false;
            }
            *slot = c as u8;
        }
        window.len() == N && self.grams.contains(&gram)
    }
}

pub static BIGRAMS: LazyLock<NgramTable<2>> =
    LazyLock::new(|| NgramTable::from_entries(COMMON_BIGRAMS));
pub static TRIGRAMS: LazyLock<NgramTable<3>> =
    LazyLock::new(|| NgramTable::from_entries(COMMON_TRIGRAMS));
pub static QUADGRAMS: LazyLock<NgramTable<4>> =
    LazyLock::new(|| NgramTable::from_entries(COMMON_QUADGRAMS));
