use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use newslens_core::{
    BiasLexicon, ExtractConfig, FetchConfig, LimitedRetry, NewslensError, NoRetry, RetryFn,
    RetryPolicy, SentimentAnalyzer, Taxonomy, analyze_document, extract_article, fetch_file,
    fetch_stdin, fetch_with_retry, render_json, render_report, validate_url,
};
use owo_colors::OwoColorize;
use url::Url;

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for the analysis report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportFormat {
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: text, json", s)),
        }
    }
}

/// Analyze news articles for topic, sentiment, loaded language, and credibility
#[derive(Parser, Debug)]
#[command(name = "newslens")]
#[command(author = "Stormlight Labs")]
#[command(version = VERSION)]
#[command(about = "Analyze news articles for topic, sentiment, and credibility", long_about = None)]
struct Args {
    /// URL to fetch, local HTML file, or "-" for stdin (prompts when omitted)
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Report format (text, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: ReportFormat,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "10", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Base URL for resolving links in file or stdin input
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Retry failed fetches up to N times instead of prompting
    #[arg(long, value_name = "N")]
    retries: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL", value_enum)]
    completions: Option<Shell>,
}

/// Prompt for a URL when no input argument was given.
fn prompt_for_input() -> anyhow::Result<String> {
    if !io::stdin().is_terminal() {
        anyhow::bail!("no input given: pass a URL, a file path, or \"-\" for stdin");
    }

    eprint!("Please enter the URL of a news article to analyze: ");
    let mut line = String::new();
    io::stdin().read_line(&mut line).context("Failed to read URL from stdin")?;

    let input = line.trim().to_string();
    if input.is_empty() {
        anyhow::bail!("no URL entered");
    }

    Ok(input)
}

/// Ask on stderr whether the fetch should be attempted again.
fn prompt_retry() -> bool {
    eprint!("Would you like to try again? (y/n): ");
    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Pick the fetch retry policy: a fixed budget when `--retries` is given, an
/// interactive prompt on a terminal, otherwise a single attempt.
fn retry_policy(retries: Option<usize>) -> Box<dyn RetryPolicy> {
    match retries {
        Some(extra) => Box::new(LimitedRetry { max_attempts: extra + 1 }),
        None if io::stdin().is_terminal() => {
            Box::new(RetryFn(|_attempt: usize, error: &NewslensError| {
                echo::print_error(&format!("Error fetching article: {}", error));
                prompt_retry()
            }))
        }
        None => Box::new(NoRetry),
    }
}

/// Parse `--base-url` for file and stdin input.
fn parse_base_url(base: Option<&str>) -> anyhow::Result<Option<Url>> {
    match base {
        Some(raw) => {
            let url = validate_url(raw).context("Invalid --base-url")?;
            Ok(Some(url))
        }
        None => Ok(None),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Args::command(), "newslens", &mut io::stdout());
        return Ok(());
    }

    if args.verbose {
        echo::print_banner();
        echo::print_info("Debug logging enabled");
        eprintln!();
    }

    let input = match args.input {
        Some(input) => input,
        None => prompt_for_input()?,
    };

    let (html, size, base_url) = if input == "-" {
        if args.verbose {
            echo::print_step(1, 4, "Reading from stdin");
        }
        let html = fetch_stdin().context("Failed to read from stdin")?;
        let len = html.len();
        (html, len, parse_base_url(args.base_url.as_deref())?)
    } else if input.starts_with("http://") || input.starts_with("https://") {
        if args.verbose {
            echo::print_step(
                1,
                4,
                &format!("Fetching from {}", input.bright_white().underline()),
            );
        }
        if args.base_url.is_some() {
            echo::print_warning("--base-url is ignored when the input is a URL");
        }

        let url = validate_url(&input)?;
        let config = FetchConfig {
            timeout: args.timeout,
            user_agent: args
                .user_agent
                .unwrap_or_else(|| FetchConfig::default().user_agent),
        };
        let mut policy = retry_policy(args.retries);

        let html = fetch_with_retry(url.as_str(), &config, &mut policy)
            .await
            .context("Analysis cannot proceed")?;
        let len = html.len();
        (html, len, Some(url))
    } else {
        if args.verbose {
            echo::print_step(1, 4, &format!("Reading from file {}", input.bright_white()));
        }
        let html = fetch_file(&input).with_context(|| format!("Failed to read file: {}", input))?;
        let len = html.len();
        (html, len, parse_base_url(args.base_url.as_deref())?)
    };

    if args.verbose {
        eprintln!("  {} {}", "Size:".dimmed(), echo::format_size(size).bright_white());
        eprintln!();
        echo::print_step(2, 4, "Extracting article content");
    }

    let document = extract_article(&html, base_url.as_ref(), &ExtractConfig::default())
        .context("Failed to extract article")?;

    if args.verbose {
        eprintln!("  {} {}", "Title:".dimmed(), document.title.bright_white());
        eprintln!(
            "  {} {}",
            "Words:".dimmed(),
            document.word_count.to_string().bright_white()
        );
        eprintln!(
            "  {} {}",
            "Links:".dimmed(),
            document.external_link_count.to_string().bright_white()
        );
        eprintln!();
        echo::print_step(3, 4, "Analyzing content");
    }

    let result = analyze_document(
        &document,
        &Taxonomy::default(),
        &BiasLexicon::default(),
        &SentimentAnalyzer::default(),
    )
    .context("Failed to analyze article")?;

    if args.verbose {
        echo::print_analysis_details(&result);
        echo::print_step(4, 4, "Writing report");
        eprintln!(
            "  {} {}",
            "Format:".dimmed(),
            format!("{:?}", args.format).bright_white()
        );
        eprintln!();
    }

    let report = match args.format {
        ReportFormat::Text => render_report(&document, &result),
        ReportFormat::Json => {
            render_json(&document, &result).context("Failed to serialize report")?
        }
    };

    match args.output {
        Some(path) => {
            fs::write(&path, report)
                .with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Report written to {}", path.display().bright_white()));
        }
        None => {
            print!("{}", report);
        }
    }

    Ok(())
}
