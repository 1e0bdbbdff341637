//! Console output formatter for refinement results

use colored::Colorize;
use refiner_domain::{
    ClarificationQuestion, ConfigIssue, Model, OrchestratorState, OutputFormat, Phase, Prompt,
    Severity,
};

/// Formats orchestrator state for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the state in the requested output format
    pub fn format(state: &OrchestratorState, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format_full(state),
            OutputFormat::Prompts => Self::format_prompts_only(state),
            OutputFormat::Json => Self::format_json(state),
        }
    }

    /// Full view: keywords, feedback, pending questions, prompts and test result
    pub fn format_full(state: &OrchestratorState) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Prompt Refiner"));
        output.push('\n');

        if let Some(keywords) = state.keywords() {
            output.push_str(&format!("{} {}\n", "Keywords:".cyan().bold(), keywords));
        }
        output.push_str(&format!(
            "{} {}\n",
            "Model:".cyan().bold(),
            state.selected_model()
        ));

        if let Some(message) = state.feedback_message()
            && !state.clarification_visible()
        {
            let line = if state.phase().is_failed() {
                message.red().bold()
            } else {
                message.yellow()
            };
            output.push_str(&format!("\n{}\n", line));
        }

        if state.clarification_visible()
            && let Some(session) = state.clarification()
        {
            output.push_str(&Self::format_questions(
                state.feedback_message(),
                session.questions(),
            ));
            let invalid = session.invalid_answers();
            if !invalid.is_empty() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    "Answers outside the offered options:".yellow(),
                    invalid.join(", ")
                ));
            }
        }

        if !state.prompts().is_empty() {
            output.push_str(&Self::section_header("Generated Prompts"));
            for (i, prompt) in state.prompts().iter().enumerate() {
                let selected = state
                    .selected_prompt()
                    .is_some_and(|s| s.same_entry(prompt));
                output.push_str(&Self::format_prompt_entry(i + 1, prompt, selected));
            }
        }

        if let Some(result) = state.test_result() {
            output.push_str(&Self::section_header("Test Result"));
            output.push_str(&format!("\n{}\n", result));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Raw prompt texts only, for piping
    pub fn format_prompts_only(state: &OrchestratorState) -> String {
        state
            .prompts()
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format as JSON
    pub fn format_json(state: &OrchestratorState) -> String {
        serde_json::to_string_pretty(state).unwrap_or_else(|_| "{}".to_string())
    }

    /// Feedback and numbered questions of a clarification round
    pub fn format_questions(feedback: Option<&str>, questions: &[ClarificationQuestion]) -> String {
        let mut output = Self::section_header("Additional Information Needed");

        if let Some(feedback) = feedback {
            output.push_str(&format!("\n{}\n", feedback.yellow()));
        }

        for question in questions {
            output.push_str(&format!(
                "\n{} {}\n",
                format!("[{}]", question.id).dimmed(),
                question.question.bold()
            ));
            if let Some(options) = &question.options {
                for (i, option) in options.iter().enumerate() {
                    let marker = if question.answer == *option {
                        "*".green().to_string()
                    } else {
                        " ".to_string()
                    };
                    output.push_str(&format!("  {} {}. {}\n", marker, i + 1, option));
                }
            }
            if question.is_answered() {
                output.push_str(&format!("  {} {}\n", "->".green(), question.answer));
            }
        }

        output
    }

    fn format_prompt_entry(index: usize, prompt: &Prompt, selected: bool) -> String {
        let title = if prompt.description.is_empty() {
            format!("── {} ──", index)
        } else {
            format!("── {}. {} ──", index, prompt.description)
        };
        let title = if selected {
            format!("{} {}", title.green().bold(), "(selected)".green())
        } else {
            title.yellow().bold().to_string()
        };
        format!("\n{}\n{}\n", title, Self::indent(&prompt.text, "  "))
    }

    /// One-line summary of a settled phase
    pub fn format_phase(phase: &Phase) -> String {
        match phase {
            Phase::PromptsShown => format!("{} Prompts ready", "v".green()),
            Phase::ClarifyingAwaitingAnswers => {
                format!("{} More information needed", "?".yellow())
            }
            Phase::Failed(kind) => format!("{} {}", "x".red(), kind.user_message()),
            Phase::Idle | Phase::Submitting => phase.to_string(),
        }
    }

    /// Result of a prompt test
    pub fn format_test_result(prompt: &Prompt, model: &Model, result: &str) -> String {
        let mut output = Self::section_header(&format!("Test Result ({})", model));
        output.push_str(&format!("\n{}\n", Self::indent(&prompt.text, "> ").dimmed()));
        output.push_str(&format!("\n{}\n", result));
        output
    }

    /// The model catalog with the current model marked
    pub fn format_models(current: &Model) -> String {
        let mut output = format!("{}\n", "Available models:".cyan().bold());
        for model in Model::generation_models() {
            let marker = if model == *current { "*" } else { " " };
            output.push_str(&format!(
                "  {} {:<32} {}\n",
                marker,
                model.as_str(),
                model.description().dimmed()
            ));
        }
        if matches!(current, Model::Custom(_)) {
            output.push_str(&format!("  * {:<32} {}\n", current.as_str(), current.description().dimmed()));
        }
        output
    }

    /// Configuration issues, one per line
    pub fn format_config_issues(issues: &[ConfigIssue]) -> String {
        issues
            .iter()
            .map(|issue| match issue.severity {
                Severity::Error => format!("{} {}", "error:".red().bold(), issue.message),
                Severity::Warning => format!("{} {}", "warning:".yellow().bold(), issue.message),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refiner_domain::{ConfigIssueCode, FailureKind, GenerationResponse, Keywords};

    fn plain() {
        colored::control::set_override(false);
    }

    fn state_with_prompts() -> OrchestratorState {
        let mut state = OrchestratorState::default();
        state.begin_submission(Keywords::parse("디지털 마케팅").unwrap(), true);
        state
            .apply_outcome(
                GenerationResponse::with_prompts(vec![
                    Prompt::new("당신은 마케팅 전문가입니다.\n전략을 세워주세요.", "전문가 역할"),
                    Prompt::new("장단점을 설명해주세요.", ""),
                ])
                .classify(),
            )
            .unwrap();
        state
    }

    #[test]
    fn test_full_lists_prompts_and_selection() {
        plain();
        let mut state = state_with_prompts();
        let second = state.prompts()[1].clone();
        state.select_prompt(&second).unwrap();

        let output = ConsoleFormatter::format_full(&state);

        assert!(output.contains("Keywords: 디지털 마케팅"));
        assert!(output.contains("── 1. 전문가 역할 ──"));
        assert!(output.contains("  전략을 세워주세요."));
        assert!(output.contains("── 2 ── (selected)"));
    }

    #[test]
    fn test_prompts_only() {
        let output = ConsoleFormatter::format(&state_with_prompts(), OutputFormat::Prompts);
        assert_eq!(
            output,
            "당신은 마케팅 전문가입니다.\n전략을 세워주세요.\n장단점을 설명해주세요."
        );
    }

    #[test]
    fn test_json_snapshot() {
        let output = ConsoleFormatter::format(&state_with_prompts(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["phase"], "prompts_shown");
        assert_eq!(value["prompts"][0]["prompt"], "당신은 마케팅 전문가입니다.\n전략을 세워주세요.");
    }

    #[test]
    fn test_full_shows_failure_message() {
        plain();
        let mut state = OrchestratorState::default();
        state.begin_submission(Keywords::parse("x").unwrap(), true);
        state.fail(FailureKind::ServiceUnavailable);

        let output = ConsoleFormatter::format_full(&state);
        assert!(output.contains(FailureKind::ServiceUnavailable.user_message()));
    }

    #[test]
    fn test_full_shows_pending_questions() {
        plain();
        let mut state = OrchestratorState::default();
        state.begin_submission(Keywords::parse("x").unwrap(), true);
        state
            .apply_outcome(GenerationResponse::clarification(vec![]).classify())
            .unwrap();
        state.set_answer("tone", "전혀 다른 톤").unwrap();

        let output = ConsoleFormatter::format_full(&state);

        assert!(output.contains("추가 정보가 필요합니다."));
        assert!(output.contains("[target] 대상 독자/고객은 누구인가요?"));
        assert!(output.contains("1. 일반 사용자"));
        assert!(output.contains("Answers outside the offered options: tone"));
    }

    #[test]
    fn test_questions_mark_chosen_option() {
        plain();
        let mut question = ClarificationQuestion::new("target", "대상은?").with_options(["학생", "개발자"]);
        question.answer = "개발자".to_string();

        let output = ConsoleFormatter::format_questions(None, &[question]);

        assert!(output.contains("    1. 학생"));
        assert!(output.contains("  * 2. 개발자"));
    }

    #[test]
    fn test_models_marks_current() {
        plain();
        let output = ConsoleFormatter::format_models(&Model::O4Mini);
        assert!(output.contains("* o4-mini"));
        assert!(output.contains("  gpt-4.1 "));

        let custom = ConsoleFormatter::format_models(&Model::Custom("my-model".to_string()));
        assert!(custom.contains("* my-model"));
    }

    #[test]
    fn test_config_issues() {
        plain();
        let issues = vec![
            ConfigIssue::error(ConfigIssueCode::ZeroTimeout, "zero timeout"),
            ConfigIssue::warning(ConfigIssueCode::CooldownExceedsMinVisible, "long cooldown"),
        ];
        let output = ConsoleFormatter::format_config_issues(&issues);
        assert_eq!(output, "error: zero timeout\nwarning: long cooldown");
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "> "), "> a\n> b");
    }
}
