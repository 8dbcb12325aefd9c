//! breakdown CLI
//!
//! Usage: breakdown <DIRECTIVE> <LAYER> [OPTIONS]
//!
//! Validates the directive/layer pair for the selected profile and prints
//! the input, output, prompt and schema paths it resolves to.

use anyhow::{Context, Result};
use clap::Parser;

use breakdown::config::{default_config_dir, ConfigWarning};
use breakdown::{
    LocalFs, PathOptions, PathResult, ResolveOutcome, ResolvePathsUseCase, ResolveRequest,
};

/// breakdown - validate a directive/layer pair and resolve its paths
#[derive(Parser, Debug)]
#[command(name = "breakdown")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directive type (e.g. to, summary, defect)
    directive: String,

    /// Layer type (e.g. project, issue, task)
    layer: String,

    /// Input file, or '-' for stdin
    #[arg(short = 'f', long = "from", allow_hyphen_values = true)]
    from: Option<String>,

    /// Output file or directory
    #[arg(short = 'o', long = "destination", visible_alias = "output")]
    destination: Option<String>,

    /// Prompt adaptation (selects f_{layer}_{adaptation}.md)
    #[arg(short, long)]
    adaptation: Option<String>,

    /// Source layer type used to pick the prompt template
    #[arg(short = 'i', long = "input")]
    from_layer_type: Option<String>,

    /// Configuration profile
    #[arg(short, long)]
    config: Option<String>,

    /// Template variable passed through to the renderer
    #[arg(long = "uv", value_name = "KEY=VALUE", value_parser = parse_custom_variable)]
    custom_variables: Vec<(String, String)>,

    /// Output format for CI
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn to_request(&self) -> ResolveRequest {
        let mut options = PathOptions {
            from_file: self.from.clone(),
            destination_file: self.destination.clone(),
            adaptation: self.adaptation.clone(),
            from_layer_type: self.from_layer_type.clone(),
            ..PathOptions::default()
        };
        for (key, value) in &self.custom_variables {
            options = options.with_custom_variable(key, value);
        }

        let mut request =
            ResolveRequest::new(self.directive.as_str(), self.layer.as_str()).with_options(options);
        request.profile = self.config.clone();
        request
    }
}

fn parse_custom_variable(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

/// Install a stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) -> Result<()> {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {e}"))
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = init_tracing(cli.verbose) {
        eprintln!("⚠ {err}");
    }

    if let Err(err) = run(&cli) {
        eprintln!("✗ Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let config_dir = default_config_dir(&cwd);

    let outcome = ResolvePathsUseCase::new(LocalFs).execute(&config_dir, &cli.to_request())?;

    for warning in &outcome.warnings {
        eprintln!("⚠ {}", format_warning(warning));
    }

    if cli.json {
        print_json(&outcome)
    } else {
        print_text(&outcome);
        Ok(())
    }
}

fn print_json(outcome: &ResolveOutcome) -> Result<()> {
    let output = serde_json::json!({
        "event": "resolve",
        "command": outcome.command,
        "paths": outcome.paths,
        "warnings": outcome.warnings,
    });
    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}

fn print_text(outcome: &ResolveOutcome) {
    println!(
        "✓ {} (profile: {})",
        outcome.params.command_string(),
        outcome.params.profile()
    );
    println!("  input:  {}", describe(&outcome.paths.input));
    println!("  output: {}", describe(&outcome.paths.output));
    println!("  prompt: {}", describe(&outcome.paths.prompt));
    println!("  schema: {}", describe(&outcome.paths.schema));
}

fn describe(result: &PathResult) -> String {
    if result.is_empty() {
        return "(none)".to_string();
    }
    let mut line = format!("{} [{}]", result.value().display(), result.kind().as_str());
    if !result.exists() && !result.is_generated() {
        line.push_str(" (missing)");
    }
    line
}

fn format_warning(warning: &ConfigWarning) -> String {
    let mut message = format!(
        "unknown config key '{}' in {}",
        warning.key,
        warning.file.display()
    );
    if let Some(line) = warning.line {
        message.push_str(&format!(":{line}"));
    }
    if let Some(suggestion) = &warning.suggestion {
        message.push_str(&format!(" (did you mean '{suggestion}'?)"));
    }
    message
}
