//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for refinement results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Description and prompt text for every generated prompt
    Full,
    /// Raw prompt text only, one per line
    Prompts,
    /// JSON snapshot of the orchestrator state
    Json,
}

impl From<OutputFormat> for refiner_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => Self::Full,
            OutputFormat::Prompts => Self::Prompts,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for prompt-refiner
#[derive(Parser, Debug)]
#[command(name = "prompt-refiner")]
#[command(author, version, about = "Turn keywords into ready-to-use LLM prompts")]
#[command(long_about = r#"
Prompt Refiner sends your keywords to a prompt generation service. When the
service needs more context it asks clarification questions; answer them and
the prompts are regenerated until a final set is returned.

Configuration files are loaded from (in priority order):
1. --config <path>            Explicit config file
2. PROMPT_REFINER_* env vars  e.g. PROMPT_REFINER_SERVICE__BASE_URL
3. ./prompt-refiner.toml      Project-level config
4. ~/.config/prompt-refiner/config.toml   Global config

Example:
  prompt-refiner "디지털 마케팅"
  prompt-refiner "디지털 마케팅" -a target=학생 -a tone=친근한/대화체 --test 1
  prompt-refiner --interactive -m o4-mini
"#)]
pub struct Cli {
    /// Keywords to generate prompts for (not required in interactive mode)
    pub keywords: Option<String>,

    /// Start the interactive refinement loop
    #[arg(short, long)]
    pub interactive: bool,

    /// Model to generate prompts with
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Model to test prompts against
    #[arg(long, value_name = "MODEL")]
    pub test_model: Option<String>,

    /// Answer a clarification question (can be specified multiple times)
    #[arg(short, long = "answer", value_name = "ID=VALUE", value_parser = parse_answer)]
    pub answers: Vec<(String, String)>,

    /// Test the N-th generated prompt (1-based) after generation
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub test: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Generation service base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Check that the generation service is reachable and exit
    #[arg(long)]
    pub check: bool,

    /// List the known models and exit
    #[arg(long)]
    pub list_models: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Parse an `ID=VALUE` answer flag
fn parse_answer(raw: &str) -> Result<(String, String), String> {
    let (id, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ID=VALUE, got '{}'", raw))?;
    let id = id.trim();
    let value = value.trim();
    if id.is_empty() {
        return Err("question id cannot be empty".to_string());
    }
    if value.is_empty() {
        return Err(format!("answer for '{}' cannot be empty", id));
    }
    Ok((id.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_one_shot() {
        let cli = Cli::try_parse_from([
            "prompt-refiner",
            "디지털 마케팅",
            "-a",
            "target=학생",
            "--answer",
            "goal = 정보 제공",
            "--test",
            "2",
            "-o",
            "prompts",
        ])
        .unwrap();

        assert_eq!(cli.keywords.as_deref(), Some("디지털 마케팅"));
        assert_eq!(
            cli.answers,
            vec![
                ("target".to_string(), "학생".to_string()),
                ("goal".to_string(), "정보 제공".to_string()),
            ]
        );
        assert_eq!(cli.test, Some(2));
        assert_eq!(cli.output, Some(OutputFormat::Prompts));
        assert!(!cli.interactive);
    }

    #[test]
    fn test_answer_with_equals_in_value() {
        assert_eq!(
            parse_answer("goal=a=b").unwrap(),
            ("goal".to_string(), "a=b".to_string())
        );
    }

    #[test]
    fn test_invalid_answers_rejected() {
        assert!(parse_answer("target").is_err());
        assert!(parse_answer("=학생").is_err());
        assert!(parse_answer("target=  ").is_err());
        assert!(Cli::try_parse_from(["prompt-refiner", "x", "-a", "nope"]).is_err());
    }

    #[test]
    fn test_zero_test_index_rejected() {
        assert!(Cli::try_parse_from(["prompt-refiner", "x", "--test", "0"]).is_err());
    }

    #[test]
    fn test_verbosity_count() {
        let cli = Cli::try_parse_from(["prompt-refiner", "-i", "-vv"]).unwrap();
        assert!(cli.interactive);
        assert_eq!(cli.verbose, 2);
        assert!(cli.keywords.is_none());
    }

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            refiner_domain::OutputFormat::from(OutputFormat::Json),
            refiner_domain::OutputFormat::Json
        );
    }
}
