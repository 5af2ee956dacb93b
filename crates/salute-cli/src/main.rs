mod reader;

use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};

use reader::read_profile_config;
use salute_core::{language_pack, language_packs, ConsoleSink, Greeter};

#[derive(Parser)]
#[command(
    name = "salute",
    version,
    about = "Greeting utility — format, log, and localize short greetings"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a greeting for the given profile
    Greet {
        /// First name (falls back to salute.config.yaml)
        #[arg(long)]
        first: Option<String>,

        /// Last name (falls back to salute.config.yaml)
        #[arg(long)]
        last: Option<String>,

        /// Language code, e.g. en or es (falls back to salute.config.yaml)
        #[arg(long)]
        lang: Option<String>,

        /// Use the formal greeting
        #[arg(long)]
        formal: bool,

        /// Also write the log line after the greeting
        #[arg(long)]
        log: bool,
    },

    /// List supported languages and their phrase sets
    Languages {
        /// Output format: human (default) or json
        #[arg(long, default_value = "human")]
        format: String,
    },

    /// Check whether a language code is supported
    Validate {
        /// Language code to check
        code: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Greet {
            first,
            last,
            lang,
            formal,
            log,
        } => {
            match run_greet(
                first.as_deref(),
                last.as_deref(),
                lang.as_deref(),
                formal,
                log,
            ) {
                Ok(()) => {}
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(1);
                }
            }
        }
        Commands::Languages { format } => match run_languages(&format) {
            Ok(output) => {
                println!("{output}");
            }
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
        Commands::Validate { code } => match run_validate(&code) {
            Ok(output) => {
                println!("{output}");
            }
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
    }
}

/// Resolve each profile field: flag, then config file, then built-in default.
fn run_greet(
    first: Option<&str>,
    last: Option<&str>,
    lang: Option<&str>,
    formal: bool,
    log: bool,
) -> Result<(), String> {
    let config = read_profile_config(Path::new(".")).unwrap_or_default();

    let first = first
        .map(str::to_string)
        .or(config.first_name)
        .unwrap_or_default();
    let last = last
        .map(str::to_string)
        .or(config.last_name)
        .unwrap_or_default();
    let lang = lang
        .map(str::to_string)
        .or(config.language)
        .unwrap_or_default();

    let mut greeter = Greeter::new(&first, &last, &lang)
        .map_err(|e| e.to_string())?
        .with_log_sink(ConsoleSink);

    greeter.greet(formal);
    if log {
        greeter.log();
    }

    Ok(())
}

fn run_languages(format: &str) -> Result<String, String> {
    let packs = language_packs();

    if format == "json" {
        let output = serde_json::json!({
            "languages": packs,
            "summary": {
                "count": packs.len(),
            }
        });
        return serde_json::to_string_pretty(&output)
            .map_err(|e| format!("JSON serialization error: {e}"));
    }

    // Human-readable format
    let mut lines: Vec<String> = Vec::new();
    for pack in &packs {
        lines.push(format!(
            "{}  greeting=\"{}\"  formal=\"{}\"  log=\"{}\"",
            pack.code, pack.greeting, pack.formal_greeting, pack.log_phrase
        ));
    }

    let count = packs.len();
    let language_word = if count == 1 { "language" } else { "languages" };
    lines.push(format!("{count} {language_word} supported."));

    Ok(lines.join("\n"))
}

fn run_validate(code: &str) -> Result<String, String> {
    let pack = language_pack(code).map_err(|e| e.to_string())?;
    Ok(format!(
        "\"{}\" is supported (greeting \"{}\").",
        pack.code, pack.greeting
    ))
}
