//! REPL (Read-Eval-Print Loop) for interactive refinement

use super::responder::InteractiveResponder;
use crate::config::OutputConfig;
use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use refiner_application::{OrchestratorError, PromptGateway, PromptOrchestrator, ResponderError};
use refiner_domain::{DomainError, Model, Phase};
use std::sync::Arc;

/// A parsed REPL input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Plain text: start a new refinement for these keywords
    Keywords(String),
    /// `/answer ID VALUE`
    Answer { id: String, value: String },
    /// `/apply`: regenerate with the current answers
    Apply,
    /// `/select N` (1-based)
    Select(usize),
    /// `/test [N]`: test the selected (or N-th) prompt
    Test(Option<usize>),
    /// `/model [NAME]`: show or change the generation model
    Model(Option<String>),
    /// `/models`
    Models,
    /// `/show`: print the current state again
    Show,
    /// `/help`
    Help,
    /// `/quit`
    Quit,
    /// Anything else starting with `/`, or a malformed command
    Invalid(String),
    /// Blank line
    Empty,
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return ReplCommand::Empty;
        }
        if !line.starts_with('/') {
            return ReplCommand::Keywords(line.to_string());
        }

        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match cmd {
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/models" => ReplCommand::Models,
            "/show" | "/s" => ReplCommand::Show,
            "/apply" | "/regenerate" => ReplCommand::Apply,
            "/model" | "/m" if rest.is_empty() => ReplCommand::Model(None),
            "/model" | "/m" => ReplCommand::Model(Some(rest.to_string())),
            "/select" => match rest.parse::<usize>() {
                Ok(n) if n > 0 => ReplCommand::Select(n),
                _ => ReplCommand::Invalid("Usage: /select N".to_string()),
            },
            "/test" | "/t" if rest.is_empty() => ReplCommand::Test(None),
            "/test" | "/t" => match rest.parse::<usize>() {
                Ok(n) if n > 0 => ReplCommand::Test(Some(n)),
                _ => ReplCommand::Invalid("Usage: /test [N]".to_string()),
            },
            "/answer" | "/a" => match rest.split_once(char::is_whitespace) {
                Some((id, value)) if !value.trim().is_empty() => ReplCommand::Answer {
                    id: id.to_string(),
                    value: value.trim().to_string(),
                },
                _ => ReplCommand::Invalid("Usage: /answer ID VALUE".to_string()),
            },
            other => ReplCommand::Invalid(format!("Unknown command: {}", other)),
        }
    }
}

/// Interactive refinement REPL
pub struct RefineRepl<G: PromptGateway + 'static> {
    orchestrator: Arc<PromptOrchestrator<G>>,
    responder: InteractiveResponder,
    output: OutputConfig,
}

impl<G: PromptGateway + 'static> RefineRepl<G> {
    /// Create a new RefineRepl reading from standard input
    pub fn new(orchestrator: Arc<PromptOrchestrator<G>>, output: OutputConfig) -> Self {
        Self {
            orchestrator,
            responder: InteractiveResponder::stdin(),
            output,
        }
    }

    /// Run the interactive REPL until `/quit` or end of input
    pub async fn run(&self) -> Result<(), ResponderError> {
        self.print_welcome();

        loop {
            let Some(line) = self.responder.read_line("refine>")? else {
                println!("Bye!");
                return Ok(());
            };

            match ReplCommand::parse(&line) {
                ReplCommand::Quit => {
                    println!("Bye!");
                    return Ok(());
                }
                ReplCommand::Empty => continue,
                command => self.execute(command).await,
            }
        }
    }

    async fn execute(&self, command: ReplCommand) {
        let orch = &self.orchestrator;
        match command {
            ReplCommand::Keywords(keywords) => {
                match orch.refine(&keywords, &self.responder).await {
                    Ok(phase) => self.print_outcome(&phase),
                    Err(OrchestratorError::Responder(ResponderError::Aborted)) => {
                        println!("{}", "Clarification aborted.".yellow());
                    }
                    Err(e) => Self::print_error(&e),
                }
            }
            ReplCommand::Answer { id, value } => match orch.set_answer(&id, value) {
                Ok(()) => println!("{} {} answered", "v".green(), id),
                Err(e) => Self::print_error(&e),
            },
            ReplCommand::Apply => match orch.apply_and_regenerate().await {
                Ok(phase) => self.print_outcome(&phase),
                Err(e) => Self::print_error(&e),
            },
            ReplCommand::Select(n) => match self.select(n) {
                Ok(()) => println!("{} Prompt {} selected", "v".green(), n),
                Err(e) => Self::print_error(&e),
            },
            ReplCommand::Test(index) => {
                let selected = match index {
                    Some(n) => self.select(n),
                    None => Ok(()),
                };
                let tested = match selected {
                    Ok(()) => orch.test_selected().await,
                    Err(e) => Err(e),
                };
                match tested {
                    Ok(result) => {
                        let state = orch.state();
                        if let Some(prompt) = state.selected_prompt() {
                            println!(
                                "{}",
                                ConsoleFormatter::format_test_result(
                                    prompt,
                                    &orch.params().test_model,
                                    &result
                                )
                            );
                        }
                    }
                    Err(e) => Self::print_error(&e),
                }
            }
            ReplCommand::Model(None) => {
                println!("Current model: {}", orch.state().selected_model());
            }
            ReplCommand::Model(Some(name)) => {
                let model = Model::from(name.as_str());
                println!("{} Model set to {}", "v".green(), model);
                orch.select_model(model);
            }
            ReplCommand::Models => {
                print!("{}", ConsoleFormatter::format_models(orch.state().selected_model()));
            }
            ReplCommand::Show => {
                println!("{}", ConsoleFormatter::format(&orch.state(), self.output.format));
            }
            ReplCommand::Help => Self::print_help(),
            ReplCommand::Invalid(message) => {
                println!("{} {}", "!".yellow(), message);
                println!("Type /help for available commands.");
            }
            ReplCommand::Quit | ReplCommand::Empty => {}
        }
    }

    fn select(&self, n: usize) -> Result<(), OrchestratorError> {
        let state = self.orchestrator.state();
        let prompt = state
            .prompts()
            .get(n - 1)
            .ok_or_else(|| DomainError::UnknownPrompt(format!("#{}", n)))?;
        self.orchestrator.select_prompt(prompt)
    }

    fn print_outcome(&self, phase: &Phase) {
        println!("{}", ConsoleFormatter::format(&self.orchestrator.state(), self.output.format));
        if *phase == Phase::ClarifyingAwaitingAnswers {
            println!(
                "{}",
                "Answer with /answer ID VALUE, then /apply to regenerate.".dimmed()
            );
        }
    }

    fn print_error(error: &OrchestratorError) {
        let message = error
            .user_message()
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        println!("{} {}", "x".red(), message);
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        Prompt Refiner - Interactive         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Model: {}", self.orchestrator.state().selected_model());
        println!();
        println!("Type keywords to generate prompts, or /help for commands.");
        println!();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  <keywords>          - Generate prompts for keywords");
        println!("  /answer ID VALUE    - Answer a pending question");
        println!("  /apply              - Regenerate with the current answers");
        println!("  /select N           - Select prompt N");
        println!("  /test [N]           - Test the selected (or N-th) prompt");
        println!("  /model [NAME]       - Show or change the generation model");
        println!("  /models             - List known models");
        println!("  /show               - Show the current result again");
        println!("  /help, /h, /?       - Show this help");
        println!("  /quit, /exit, /q    - Exit");
        println!();
    }
}
