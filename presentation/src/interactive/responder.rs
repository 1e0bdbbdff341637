//! Terminal clarification responder
//!
//! Shows each round's feedback and questions, then reads one answer per
//! question. Multiple-choice questions accept the option number or the
//! option text; an empty line leaves the question unanswered and `/quit`
//! aborts the dialog.

use crate::output::console::ConsoleFormatter;
use async_trait::async_trait;
use colored::Colorize;
use refiner_application::{ClarificationResponder, ResponderError};
use refiner_domain::ClarificationQuestion;
use std::io::{self, BufRead, BufReader, Stdin, Write};
use std::sync::{Mutex, PoisonError};

/// Interactive clarification responder reading from a line source
pub struct InteractiveResponder<R = BufReader<Stdin>> {
    input: Mutex<R>,
}

impl InteractiveResponder {
    /// Responder reading from standard input
    pub fn stdin() -> Self {
        Self::new(BufReader::new(io::stdin()))
    }
}

impl<R: BufRead + Send> InteractiveResponder<R> {
    pub fn new(input: R) -> Self {
        Self {
            input: Mutex::new(input),
        }
    }

    /// Print `prompt` and read one trimmed line; `None` at end of input
    pub fn read_line(&self, prompt: &str) -> Result<Option<String>, ResponderError> {
        print!("{} ", prompt.magenta().bold());
        io::stdout()
            .flush()
            .map_err(|e| ResponderError::IoError(format!("Failed to flush stdout: {}", e)))?;

        let mut line = String::new();
        let read = self
            .input
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .read_line(&mut line)
            .map_err(|e| ResponderError::IoError(format!("Failed to read input: {}", e)))?;

        if read == 0 {
            Ok(None)
        } else {
            Ok(Some(line.trim().to_string()))
        }
    }
}

/// Map user input to an answer: an in-range option number selects that
/// option, anything else is taken verbatim.
pub fn resolve_answer(question: &ClarificationQuestion, input: &str) -> String {
    let input = input.trim();
    if let Some(options) = &question.options
        && let Ok(n) = input.parse::<usize>()
        && (1..=options.len()).contains(&n)
    {
        return options[n - 1].clone();
    }
    input.to_string()
}

#[async_trait]
impl<R: BufRead + Send> ClarificationResponder for InteractiveResponder<R> {
    async fn begin_round(
        &self,
        feedback: Option<&str>,
        questions: &[ClarificationQuestion],
    ) -> Result<(), ResponderError> {
        println!("{}", ConsoleFormatter::format_questions(feedback, questions));
        println!(
            "{}",
            "Enter a number or your own answer. Empty line stops, /quit aborts.".dimmed()
        );
        Ok(())
    }

    async fn answer(
        &self,
        question: &ClarificationQuestion,
    ) -> Result<Option<String>, ResponderError> {
        loop {
            let Some(input) = self.read_line(&format!("{}>", question.id))? else {
                return Ok(None);
            };

            match input.as_str() {
                "" => return Ok(None),
                "/quit" | "/q" => return Err(ResponderError::Aborted),
                _ => {}
            }

            let answer = resolve_answer(question, &input);
            if question.accepts(&answer) {
                return Ok(Some(answer));
            }

            let count = question.options.as_ref().map_or(0, Vec::len);
            println!(
                "{} Choose 1-{} or type one of the options.",
                "!".yellow(),
                count
            );
        }
    }
}
