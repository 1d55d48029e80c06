use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use docbench::{run_all, Config, PlainTextRenderer};

#[derive(Parser)]
#[command(name = "docbench")]
#[command(about = "Evaluate extracted document text against a declarative test set")]
struct Cli {
    /// Increase logging verbosity (repeatable: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a test file and report how many tests parsed successfully
    Load {
        /// Path to the JSONL test file
        tests: PathBuf,
    },

    /// List every test in a file, one line per test
    List {
        /// Path to the JSONL test file
        tests: PathBuf,
    },

    /// Run every test in a file against a content file and report results
    Run {
        /// Path to the JSONL test file
        tests: PathBuf,

        /// Path to the candidate content file (markdown/HTML text)
        content: PathBuf,

        /// Write JSON results to this path instead of printing a summary
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Load { tests } => cmd_load(&tests),
        Commands::List { tests } => cmd_list(&tests),
        Commands::Run { tests, content, output } => cmd_run(&tests, &content, output.as_deref()),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_load(tests_path: &PathBuf) -> Result<ExitCode> {
    let renderer = PlainTextRenderer;
    let config = Config::default();
    let tests = docbench::loader::load(tests_path, &renderer, &config)
        .with_context(|| format!("failed to load tests from {}", tests_path.display()))?;
    println!("loaded {} test(s) from {}", tests.len(), tests_path.display());
    Ok(ExitCode::SUCCESS)
}

fn cmd_list(tests_path: &PathBuf) -> Result<ExitCode> {
    let renderer = PlainTextRenderer;
    let config = Config::default();
    let tests = docbench::loader::load(tests_path, &renderer, &config)
        .with_context(|| format!("failed to load tests from {}", tests_path.display()))?;

    for test in &tests {
        println!("{:<10} {}", test.kind().to_string(), test.id());
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_run(tests_path: &PathBuf, content_path: &PathBuf, output: Option<&std::path::Path>) -> Result<ExitCode> {
    let renderer = PlainTextRenderer;
    let config = Config::default();
    let tests = docbench::loader::load(tests_path, &renderer, &config)
        .with_context(|| format!("failed to load tests from {}", tests_path.display()))?;
    let content = std::fs::read_to_string(content_path)
        .with_context(|| format!("failed to read content from {}", content_path.display()))?;

    let results = run_all(&tests, &content, &renderer, &config);
    let failures = results.iter().filter(|r| !r.passed).count();

    match output {
        Some(path) => {
            let json = serde_json::to_string_pretty(
                &results
                    .iter()
                    .map(|r| {
                        serde_json::json!({
                            "id": r.id,
                            "kind": r.kind.to_string(),
                            "passed": r.passed,
                            "explanation": r.explanation,
                        })
                    })
                    .collect::<Vec<_>>(),
            )?;
            std::fs::write(path, json).with_context(|| format!("failed to write results to {}", path.display()))?;
        }
        None => {
            for result in &results {
                println!("{}", result.summary_line());
            }
        }
    }

    println!("{}/{} passed", results.len() - failures, results.len());

    if failures > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
