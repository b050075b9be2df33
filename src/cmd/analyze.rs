use crate::reports;
use clap::Args;
use colcrack::api;
use colcrack::error::{CrResult, CrackError};

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    pub ciphertext: String,
}

pub fn run(args: AnalyzeArgs, json: bool) -> CrResult<()> {
    if args.ciphertext.is_empty() {
        return Err(CrackError::EmptyInput("ciphertext"));
    }
    let analysis = api::analyze(&args.ciphertext);
    let hypotheses = api::suggest_key_length(&args.ciphertext);

    if json {
        return super::print_json(&serde_json::json!({
            "analysis": analysis,
            "key_lengths": hypotheses,
        }));
    }
    reports::print_analysis(&analysis);
    reports::print_length_hypotheses(&hypotheses);
    Ok(())
}
