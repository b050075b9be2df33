use colcrack::advisor::{explain, KeyStatistics, LengthHypothesis, Recommendation};
use colcrack::cipher::MatrixView;
use colcrack::lexicon::WordMatch;
use colcrack::optimizer::ScoredCandidate;
use colcrack::oracle::CiphertextAnalysis;
use colcrack::scorer::{ScoreDetails, Scorer};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

const PREVIEW_CHARS: usize = 48;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        return text.to_string();
    }
    let head: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("{}…", head)
}

fn confidence_cell(confidence: f64) -> Cell {
    let cell = Cell::new(format!("{:.1}%", confidence));
    if confidence >= 80.0 {
        cell.fg(Color::Green)
    } else if confidence >= 40.0 {
        cell.fg(Color::Yellow)
    } else {
        cell.fg(Color::Red)
    }
}

pub fn print_matrix(view: &MatrixView) {
    let mut table = new_table();

    table.set_header(
        view.key
            .iter()
            .map(|r| {
                Cell::new(r)
                    .add_attribute(Attribute::Bold)
                    .set_alignment(CellAlignment::Center)
            })
            .collect::<Vec<_>>(),
    );
    for row in &view.matrix {
        table.add_row(
            row.iter()
                .map(|c| Cell::new(c).set_alignment(CellAlignment::Center))
                .collect::<Vec<_>>(),
        );
    }
    println!(
        "\nMatrix: {} rows x {} columns (read order {:?})",
        view.num_rows, view.num_cols, view.column_order
    );
    println!("{}", table);
}

pub fn print_candidates(results: &[ScoredCandidate], scorer: &Scorer) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("#"),
        Cell::new("Key").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Conf"),
        Cell::new("Plaintext"),
    ]);
    align_right(&mut table, 0..=3);

    for (i, c) in results.iter().enumerate() {
        let key_cell = if i == 0 {
            Cell::new(&c.key)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(&c.key).add_attribute(Attribute::Bold)
        };
        table.add_row(vec![
            Cell::new(i + 1),
            key_cell,
            Cell::new(format!("{:.2}", c.score)).fg(Color::Cyan),
            confidence_cell(scorer.confidence(c.score)),
            Cell::new(preview(&c.plaintext)),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_analysis(analysis: &CiphertextAnalysis) {
    println!("\nLength: {}", analysis.length);
    println!("Factors: {:?}", analysis.factors);
    println!("Suggested key lengths: {:?}", analysis.suggested_lengths);

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Key length").add_attribute(Attribute::Bold),
        Cell::new("Avg IC"),
        Cell::new("|IC - 0.067|"),
    ]);
    align_right(&mut table, 0..=2);

    for (len, ic) in &analysis.ic_scores {
        let len_cell = if analysis.suggested_lengths.contains(len) {
            Cell::new(len).fg(Color::Green).add_attribute(Attribute::Bold)
        } else {
            Cell::new(len)
        };
        table.add_row(vec![
            len_cell,
            Cell::new(format!("{:.4}", ic)),
            Cell::new(format!("{:.4}", (ic - 0.067).abs())),
        ]);
    }
    println!("{}", table);
}

pub fn print_length_hypotheses(hypotheses: &[LengthHypothesis]) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Key length").add_attribute(Attribute::Bold),
        Cell::new("Confidence"),
        Cell::new("Reason"),
    ]);
    align_right(&mut table, 0..=1);

    for h in hypotheses {
        table.add_row(vec![
            Cell::new(h.key_length),
            confidence_cell(h.confidence),
            Cell::new(h.rationale),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_recommendations(recs: &[Recommendation], with_explanation: bool) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Key").add_attribute(Attribute::Bold),
        Cell::new("Len"),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Conf"),
        Cell::new("Source"),
        Cell::new("Plaintext"),
    ]);
    align_right(&mut table, 1..=3);

    for r in recs {
        table.add_row(vec![
            Cell::new(&r.key).add_attribute(Attribute::Bold),
            Cell::new(r.key_length),
            Cell::new(format!("{:.2}", r.score)).fg(Color::Cyan),
            confidence_cell(r.confidence),
            Cell::new(r.rationale),
            Cell::new(preview(&r.plaintext)),
        ]);
    }
    println!("\n{}", table);

    if with_explanation {
        for r in recs {
            println!("  • {}", explain(r));
        }
    }
}

pub fn print_key_statistics(stats: &[KeyStatistics]) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Key").add_attribute(Attribute::Bold),
        Cell::new("Base"),
        Cell::new("Dict"),
        Cell::new("Combined").fg(Color::Cyan),
        Cell::new("Conf"),
        Cell::new("Chi²"),
        Cell::new("Words"),
        Cell::new("Longest"),
        Cell::new("English?"),
    ]);
    align_right(&mut table, 1..=6);

    for s in stats {
        let english = if s.is_likely_english {
            Cell::new("yes").fg(Color::Green)
        } else {
            Cell::new("no").fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(&s.key).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", s.base_score)),
            Cell::new(format!("{:.2}", s.dictionary_score)),
            Cell::new(format!("{:.2}", s.combined_score)).fg(Color::Cyan),
            confidence_cell(s.confidence),
            Cell::new(format!("{:.1}", s.chi_squared)),
            Cell::new(s.word_count),
            Cell::new(&s.longest_word),
            english,
        ]);
    }
    println!("\n{}", table);
}

pub fn print_score_details(label: &str, d: &ScoreDetails) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new(format!("Breakdown ({})", label)).add_attribute(Attribute::Bold),
        Cell::new("Value"),
    ]);
    align_right(&mut table, 1..=1);

    let rows = [
        ("Letter fit", d.letter_freq),
        ("Bigram hits", d.bigram),
        ("Trigram hits", d.trigram),
        ("Quadgram hits", d.quadgram),
        ("Chi-squared", d.chi_squared),
        ("Dictionary coverage", d.dictionary),
        ("Base score", d.base_score),
        ("Combined score", d.combined_score),
    ];
    for (name, value) in rows {
        table.add_row(vec![Cell::new(name), Cell::new(format!("{:.3}", value))]);
    }
    println!("\n{}", table);
}

pub fn print_words(words: &[WordMatch]) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Word").add_attribute(Attribute::Bold),
        Cell::new("Start"),
        Cell::new("End"),
    ]);
    align_right(&mut table, 1..=2);

    for w in words {
        table.add_row(vec![Cell::new(&w.word), Cell::new(w.start), Cell::new(w.end)]);
    }
    println!("\n{}", table);
}
