use crate::reports;
use clap::Args;
use colcrack::api;
use colcrack::error::CrResult;
use serde::Serialize;

#[derive(Args, Debug, Clone)]
pub struct EncryptArgs {
    pub plaintext: String,

    /// Digit key (e.g. 312), dash-separated key or keyword.
    #[arg(short, long)]
    pub key: String,

    #[arg(long, default_value_t = false)]
    pub keep_spaces: bool,

    /// Also print the filled matrix.
    #[arg(long, default_value_t = false)]
    pub show_matrix: bool,
}

#[derive(Args, Debug, Clone)]
pub struct DecryptArgs {
    pub ciphertext: String,

    #[arg(short, long)]
    pub key: String,
}

#[derive(Args, Debug, Clone)]
pub struct ValidateKeyArgs {
    pub key: String,
}

#[derive(Serialize)]
struct KeyCheck {
    key: String,
    valid: bool,
    normalized: Option<String>,
}

pub fn run_encrypt(args: EncryptArgs, json: bool) -> CrResult<()> {
    let ciphertext = api::encrypt(&args.plaintext, &args.key, args.keep_spaces)?;
    let matrix = if args.show_matrix {
        Some(api::visualize(&args.plaintext, &args.key)?)
    } else {
        None
    };

    if json {
        return super::print_json(&serde_json::json!({
            "ciphertext": ciphertext,
            "key": api::normalize_key(&args.key)?,
            "matrix": matrix,
        }));
    }

    if let Some(view) = &matrix {
        reports::print_matrix(view);
    }
    println!("{}", ciphertext);
    Ok(())
}

pub fn run_decrypt(args: DecryptArgs, json: bool) -> CrResult<()> {
    let plaintext = api::decrypt(&args.ciphertext, &args.key)?;
    if json {
        return super::print_json(&serde_json::json!({ "plaintext": plaintext }));
    }
    println!("{}", plaintext);
    Ok(())
}

pub fn run_validate(args: ValidateKeyArgs, json: bool) -> CrResult<()> {
    let check = KeyCheck {
        valid: api::validate_key(&args.key),
        normalized: api::normalize_key(&args.key).ok(),
        key: args.key,
    };
    if json {
        return super::print_json(&check);
    }
    match &check.normalized {
        Some(n) if check.valid => println!("✅ '{}' is valid (numeric form {})", check.key, n),
        _ => println!("❌ '{}' is not a valid key", check.key),
    }
    Ok(())
}
