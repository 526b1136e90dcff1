//! Tidy Report CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tidy_report::config::{load_config, CONFIG_FILENAME};
use tidy_report::normalizer::{normalize, RawReport};
use tidy_report::reporter::{export_builtin_templates, ConsoleReporter, HtmlReporter, JsonReporter};

const DEFAULT_INPUT: &str = "results.json";
const DEFAULT_OUTPUT: &str = "html-report";
const EXPORTED_TEMPLATE_DIR: &str = "report-templates";

/// Static HTML reports from Playwright JSON test results
#[derive(Parser, Debug)]
#[command(name = "tidy-report")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Normalize a Playwright JSON report and write the HTML artifact
    Generate {
        /// Path to the Playwright JSON report (default: ./results.json)
        input: Option<PathBuf>,

        /// Output directory for the report artifact (default: ./html-report)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Template directory overriding the bundled assets
        #[arg(long)]
        template_dir: Option<PathBuf>,

        /// Print the normalized report as JSON instead of writing HTML
        #[arg(long, short)]
        json: bool,

        /// Quiet mode (no console summary)
        #[arg(long, short)]
        quiet: bool,

        /// Path to config file (default: search .tidyreportrc.json upward
        /// from the current directory)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create .tidyreportrc.json with sensible defaults
    Init {
        /// Directory in which to create the config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Also export the bundled template assets for customization
        #[arg(long)]
        templates: bool,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    match args.command {
        Commands::Generate {
            input,
            output,
            template_dir,
            json,
            quiet,
            config,
        } => run_generate(input, output, template_dir, json, quiet, config.as_deref()),
        Commands::Init { dir, templates } => run_init(dir.as_deref(), templates),
    }
}

fn run_generate(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    template_dir: Option<PathBuf>,
    json: bool,
    quiet: bool,
    config_path: Option<&Path>,
) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let config = load_config(&cwd, config_path)?.merge_with_cli(input, output, template_dir);

    let input = resolve(&cwd, config.input.as_deref().unwrap_or(Path::new(DEFAULT_INPUT)));
    if !input.exists() {
        anyhow::bail!("Report file not found: {}", input.display());
    }

    if !quiet && !json {
        eprintln!("{}: Reading test report from {}", "Info".blue(), input.display());
    }

    let raw_json = std::fs::read_to_string(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let raw: RawReport = serde_json::from_str(&raw_json)
        .with_context(|| format!("Failed to parse test report JSON in {}", input.display()))?;

    // An absent `suites` key is a valid empty run, not a hard failure.
    if raw.suites.is_none() {
        eprintln!(
            "{}: No suites found in {}",
            "Warning".yellow(),
            input.display()
        );
    }

    let report = normalize(&raw);

    if json {
        println!("{}", JsonReporter::new().pretty().report(&report));
        return Ok(ExitCode::SUCCESS);
    }

    let out_dir = resolve(
        &cwd,
        config.output.as_deref().unwrap_or(Path::new(DEFAULT_OUTPUT)),
    );
    let renderer = match &config.template_dir {
        Some(dir) => HtmlReporter::with_template_dir(resolve(&cwd, dir)),
        None => HtmlReporter::builtin(),
    };
    let index_path = renderer.write(&report, &out_dir)?;

    if !quiet {
        ConsoleReporter::new().report(&report);
        println!(
            "{}: Report generated at {}",
            "Done".green().bold(),
            index_path.display()
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn run_init(dir: Option<&Path>, templates: bool) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; remove it first or use --dir",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let template_line = if templates {
        format!(",\n  \"templateDir\": \"{}\"", EXPORTED_TEMPLATE_DIR)
    } else {
        String::new()
    };
    let json = format!(
        r#"{{
  "input": "{}",
  "output": "{}"{}
}}
"#,
        DEFAULT_INPUT, DEFAULT_OUTPUT, template_line
    );

    std::fs::write(&config_path, json)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    if templates {
        let template_dir = dir.join(EXPORTED_TEMPLATE_DIR);
        export_builtin_templates(&template_dir)?;
        println!(
            "{}: Exported template assets to {}",
            "Done".green().bold(),
            template_dir.display()
        );
    }

    println!(
        "{}: Created {}",
        "Done".green().bold(),
        config_path.display()
    );
    Ok(ExitCode::SUCCESS)
}

/// Resolve a possibly-relative path against the working directory
fn resolve(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
