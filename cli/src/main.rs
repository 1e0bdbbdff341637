//! CLI entrypoint for prompt-refiner
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use refiner_application::{NoProgress, PromptGateway, PromptOrchestrator, ProgressNotifier};
use refiner_domain::{ConfigIssue, OutputFormat, Phase};
use refiner_infrastructure::{ConfigLoader, FileConfig, HttpPromptGateway};
use refiner_presentation::{
    Cli, ConsoleFormatter, OutputConfig, PresetResponder, ProgressReporter, RefineRepl,
    SimpleProgress,
};
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, config.logging.file_path().as_deref())?;
    info!("Starting prompt-refiner");

    let output = OutputConfig::resolve(
        cli.output.map(Into::into),
        config.output.format,
        config.output.color && !cli.no_color,
    );
    output.apply_color();

    let issues = config.validate();
    if !issues.is_empty() {
        eprintln!("{}", ConsoleFormatter::format_config_issues(&issues));
    }
    if ConfigIssue::has_errors(&issues) {
        bail!("Invalid configuration. Run with --show-config to see where it comes from.");
    }

    let params = config.to_params();

    if cli.list_models {
        print!("{}", ConsoleFormatter::format_models(&params.generation_model));
        return Ok(ExitCode::SUCCESS);
    }

    // === Dependency Injection ===
    let gateway = Arc::new(HttpPromptGateway::new(
        &config.service.base_url,
        config.service.timeout(),
    )?);

    if cli.check {
        return Ok(match gateway.health_check().await {
            Ok(()) => {
                println!("Service at {} is healthy", gateway.base_url());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Service at {} is not reachable: {}", gateway.base_url(), e);
                ExitCode::FAILURE
            }
        });
    }

    let progress = select_progress(&cli, &config, output.format);
    let orchestrator = Arc::new(PromptOrchestrator::new(gateway, params).with_progress(progress));

    // Interactive mode
    if cli.interactive {
        RefineRepl::new(orchestrator, output).run().await?;
        return Ok(ExitCode::SUCCESS);
    }

    // One-shot mode - keywords are required
    let Some(keywords) = cli.keywords.as_deref() else {
        bail!("Keywords are required. Use --interactive for interactive mode.");
    };

    let responder = PresetResponder::new(cli.answers.clone());
    let phase = orchestrator.refine(keywords, &responder).await?;

    if phase == Phase::ClarifyingAwaitingAnswers
        && let Some(session) = orchestrator.state().clarification()
    {
        let unused = responder.unused_ids(session.questions());
        if !unused.is_empty() {
            warn!("Answers for unknown questions ignored: {}", unused.join(", "));
        }
    }

    let mut test_failed = false;
    if let Some(n) = cli.test {
        if phase == Phase::PromptsShown {
            let state = orchestrator.state();
            let prompt = state
                .prompts()
                .get(n as usize - 1)
                .with_context(|| {
                    format!(
                        "Prompt {} does not exist ({} generated)",
                        n,
                        state.prompts().len()
                    )
                })?;
            orchestrator.select_prompt(prompt)?;
            if let Err(e) = orchestrator.test_selected().await {
                eprintln!("Prompt test failed: {}", e);
                test_failed = true;
            }
        } else {
            eprintln!("No prompts to test (phase: {})", phase);
        }
    }

    println!("{}", ConsoleFormatter::format(&orchestrator.state(), output.format));

    Ok(if phase.is_failed() || test_failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// CLI flags take precedence over every configuration source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(url) = &cli.base_url {
        config.service.base_url = url.clone();
    }
    if let Some(model) = &cli.model {
        config.models.generation = Some(model.clone());
    }
    if let Some(model) = &cli.test_model {
        config.models.test = Some(model.clone());
    }
}

/// Initialize logging based on verbosity level; `RUST_LOG` overrides it.
///
/// With a log file configured, events go to that file instead of stderr.
fn init_logging(verbose: u8, file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let Some(path) = file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", path.display()))?;
    std::fs::create_dir_all(directory)
        .with_context(|| format!("Failed to create log directory {}", directory.display()))?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

/// Spinner on a terminal, plain lines otherwise; nothing when quiet or when
/// stdout carries machine-readable output.
fn select_progress(cli: &Cli, config: &FileConfig, format: OutputFormat) -> Arc<dyn ProgressNotifier> {
    if cli.quiet || !config.repl.show_progress {
        return Arc::new(NoProgress);
    }
    if std::io::stderr().is_terminal() {
        return Arc::new(ProgressReporter::new());
    }
    if format == OutputFormat::Full || cli.interactive {
        Arc::new(SimpleProgress)
    } else {
        Arc::new(NoProgress)
    }
}
