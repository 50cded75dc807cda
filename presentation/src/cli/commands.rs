//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for eli
#[derive(Parser, Debug)]
#[command(name = "eli")]
#[command(author, version, about = "Explain anything, pitched at any age")]
#[command(long_about = r#"
eli explains a passage of text at a chosen audience age, in an optional
tone, using an OpenAI-compatible chat-completions endpoint.

Run without a question to start the single-page web tool; pass a question
for a one-shot explanation in the terminal.

Configuration files are loaded from (in priority order):
1. --config <path>   Explicit config file
2. ./eli.toml        Project-level config
3. ~/.config/eli/config.toml   Global config

The API key is read from the environment variable named by
[openai].api_key_env (default: OPENAI_API_KEY).

Example:
  eli                                   # serve http://127.0.0.1:8080
  eli "What is blockchain?"
  eli "Explain inflation" --age 30 --tone sarcastic
  eli "What is ROI?" --share            # also print a share link
"#)]
pub struct Cli {
    /// Text to explain (omit to start the web server)
    pub question: Option<String>,

    /// Audience age for one-shot mode
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=100), default_value_t = 5)]
    pub age: u8,

    /// Tone for one-shot mode: default, funny, sarcastic, or poetic
    #[arg(short, long, default_value = "default")]
    pub tone: String,

    /// Also print a share link for the question
    #[arg(long)]
    pub share: bool,

    /// Bind address for the web server (overrides config)
    #[arg(short, long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the spinner and decorations in one-shot mode
    #[arg(short, long)]
    pub quiet: bool,
}
