use crate::reports;
use clap::Args;
use colcrack::api;
use colcrack::error::CrResult;
use colcrack::lexicon;

#[derive(Args, Debug, Clone)]
pub struct SegmentArgs {
    pub text: String,

    /// List every lexicon word found, overlaps included.
    #[arg(long, default_value_t = false)]
    pub words: bool,
}

pub fn run(args: SegmentArgs, json: bool) -> CrResult<()> {
    let segmented = api::segment_text(&args.text);
    let found = if args.words {
        api::find_words(&args.text)
    } else {
        Vec::new()
    };

    if json {
        return super::print_json(&serde_json::json!({
            "segmented": segmented,
            "coverage": api::score_text_by_dictionary(&args.text),
            "language": lexicon::detect_language(&segmented),
            "words": found,
        }));
    }

    println!("{}", segmented);
    if args.words {
        reports::print_words(&found);
    }
    Ok(())
}
