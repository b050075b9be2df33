use super::key::Key;
use serde::Serialize;

/// Pads the plaintext rectangle. Decoding strips every trailing occurrence,
/// including ones that belonged to the message.
pub const FILLER: char = 'X';

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MatrixView {
    pub matrix: Vec<Vec<char>>,
    pub key: Vec<usize>,
    pub column_order: Vec<usize>,
    pub num_rows: usize,
    pub num_cols: usize,
}

// Row-major fill padded to a full rectangle.
fn fill_rows(text: &[char], cols: usize) -> (usize, Vec<char>) {
    if cols == 0 {
        return (0, Vec::new());
    }
    let rows = text.len().div_ceil(cols);
    let mut cells = Vec::with_capacity(rows * cols);
    cells.extend_from_slice(text);
    cells.resize(rows * cols, FILLER);
    (rows, cells)
}

pub fn encode(plaintext: &str, key: &Key, keep_spaces: bool) -> String {
    let text: Vec<char> = plaintext
        .chars()
        .filter(|&c| keep_spaces || c != ' ')
        .collect();
    let cols = key.len();
    if cols == 0 {
        return text.into_iter().collect();
    }
    let (rows, cells) = fill_rows(&text, cols);

    let mut out = String::with_capacity(cells.len());
    for col in key.column_order() {
        for row in 0..rows {
            out.push(cells[row * cols + col]);
        }
    }
    out
}

pub fn decode(ciphertext: &str, key: &Key) -> String {
    let text: Vec<char> = ciphertext.chars().collect();
    let cols = key.len();
    if cols == 0 {
        return ciphertext.to_string();
    }
    let rows = text.len().div_ceil(cols);
    let mut cells: Vec<Option<char>> = vec![None; rows * cols];

    // A short ciphertext leaves the tail of the last columns empty.
    let mut source = text.iter();
    'fill: for col in key.column_order() {
        for row in 0..rows {
            match source.next() {
                Some(&c) => cells[row * cols + col] = Some(c),
                None => break 'fill,
            }
        }
    }

    let plain: String = cells.into_iter().flatten().collect();
    plain.trim_end_matches(FILLER).to_string()
}

pub fn visualize(plaintext: &str, key: &Key) -> MatrixView {
    let text: Vec<char> = plaintext.chars().filter(|&c| c != ' ').collect();
    let cols = key.len();
    let (rows, cells) = fill_rows(&text, cols);

    MatrixView {
        matrix: cells.chunks(cols.max(1)).map(<[char]>::to_vec).collect(),
        key: key.ranks().to_vec(),
        column_order: key.column_order(),
        num_rows: rows,
        num_cols: cols,
    }
}
