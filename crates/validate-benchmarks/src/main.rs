use anyhow::{Context, Result};
use benchhub_validation::{
    Rule, SchemaError, SiteConfig, ValidationReport, Verdict, validate_file,
};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod glob_expand;

use glob_expand::expand_globs;

const DEFAULT_PATTERN: &str = "_benchmarks/**/*.md";

#[derive(Parser)]
#[command(name = "validate-benchmarks")]
#[command(about = "Validate benchmark documents against the site's benchmark schema")]
#[command(version)]
struct Cli {
    /// Benchmark files (can be multiple files or glob patterns like "_benchmarks/**/*.md")
    #[arg(default_values_t = vec![DEFAULT_PATTERN.to_string()])]
    files: Vec<String>,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Site configuration holding the benchmark schema
    #[arg(short, long, default_value = "_config.yml")]
    config: PathBuf,

    /// Skip a rule (heading-hierarchy, external-links); may be repeated
    #[arg(long = "disable", value_name = "RULE")]
    disable: Vec<Rule>,

    /// Output findings as JSONL instead of the summary
    #[arg(long)]
    json: bool,

    /// Also save findings as JSONL to a file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "validate_benchmarks=debug,benchhub_validation=debug"
    } else {
        "validate_benchmarks=info,benchhub_validation=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let site = match SiteConfig::load(&cli.config) {
        Ok(site) => site,
        Err(e @ SchemaError::NotFound(_)) => {
            eprintln!("{}", e.to_string().red());
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to load {}", cli.config.display()));
        }
    };
    let rules = site.rules.without(&cli.disable);

    let file_paths = expand_globs(&cli.files)?;
    if file_paths.is_empty() {
        eprintln!("{}", "No benchmark files found".red());
        return Ok(ExitCode::FAILURE);
    }

    let mut report = ValidationReport::new();
    for file_path in &file_paths {
        if cli.verbose && !cli.json {
            println!("Validating: {}", file_path.display());
        }
        let id = file_path.display().to_string();
        report.merge(validate_file(&site.schema, &rules, file_path, &id));
    }

    if cli.json {
        for finding in report.findings() {
            println!("{}", serde_json::to_string(finding)?);
        }
    } else {
        print_summary(&report);
    }

    if let Some(output_path) = &cli.output {
        let mut output_str = String::new();
        for finding in report.findings() {
            output_str.push_str(&serde_json::to_string(finding)?);
            output_str.push('\n');
        }
        std::fs::write(output_path, output_str)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
    }

    Ok(if report.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn print_summary(report: &ValidationReport) {
    let errors = report.error_count();
    let warnings = report.warning_count();

    println!("\n{}", "=== Benchmark Validation Results ===".bold());
    println!("Files validated:     {}", report.documents);
    println!(
        "Errors:              {} {}",
        errors,
        if errors > 0 { "✗".red() } else { "✓".green() }
    );
    println!(
        "Warnings:            {} {}",
        warnings,
        if warnings > 0 { "⚠".yellow() } else { "✓".green() }
    );

    if !report.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for finding in &report.errors {
            println!("  {}", finding);
        }
    }

    if !report.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for finding in &report.warnings {
            println!("  {}", finding);
        }
    }

    let verdict = report.verdict();
    let message = verdict.message();
    println!(
        "\n{}",
        match verdict {
            Verdict::Clean => message.green().bold(),
            Verdict::WarningsOnly => message.yellow().bold(),
            Verdict::Failed => message.red().bold(),
        }
    );
}
