use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use ranklens_core::{
    AnalysisResult, AnalyzerConfig, ContentRating, SeoAnalyzer, append_report, interpret,
};

/// Analyze a single web page for SEO signals
#[derive(Parser, Debug)]
#[command(name = "ranklens")]
#[command(version)]
#[command(about = "Analyze a web page: keywords, readability, technical markers, links", long_about = None)]
struct Args {
    /// URL to analyze, local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Print the full result as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Append a formatted report to this file
    #[arg(short, long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "10", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for the fetch
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Number of keywords to report
    #[arg(long, default_value = "10", value_name = "NUM")]
    keywords: usize,

    /// Print progress messages
    #[arg(short, long)]
    verbose: bool,
}

fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.bright_red());
}

fn section(title: &str) {
    println!("\n{}", title.bold().bright_cyan());
    println!("{}", "-".repeat(title.len()).dimmed());
}

fn print_summary(result: &AnalysisResult) {
    println!("{} {}", "URL:".bold(), result.url);

    section("Keywords");
    if result.keywords.is_empty() {
        println!("{}", "(none)".dimmed());
    } else {
        println!("{}", result.keywords.join(", "));
    }

    section("Content");
    match result.content.readability {
        Some(score) => println!(
            "Readability: {:.2} ({})",
            score,
            ContentRating::from_score(score).label()
        ),
        None => println!("Readability: {}", interpret(None)),
    }
    println!("Words: {}", result.content.word_count);
    let h = &result.content.headings;
    println!(
        "Headings: h1={} h2={} h3={} h4={} h5={} h6={}",
        h.h1, h.h2, h.h3, h.h4, h.h5, h.h6
    );

    section("Technical");
    println!("Title: {}", result.technical.title.as_deref().unwrap_or("(none)"));
    println!(
        "Meta description: {}",
        result.technical.meta_description.as_deref().unwrap_or("(none)")
    );
    println!("Canonical: {}", result.technical.canonical.as_deref().unwrap_or("(none)"));
    println!("Mobile friendly: {}", result.technical.mobile_friendly);
    println!("SSL: {}", result.technical.ssl);
    println!("Structured data: {}", result.technical.structured_data);

    section("Links");
    println!(
        "Internal: {}  External: {}  Total: {}",
        result.links.internal_count(),
        result.links.external_count(),
        result.links.total_count()
    );

    section("Performance");
    println!(
        "Resources: {}  Size: {} bytes",
        result.performance.total_resources, result.performance.total_size
    );

    println!(
        "\n{}",
        format!("Analyzed in {:.3}s", result.metadata.duration_seconds).dimmed()
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = AnalyzerConfig::builder()
        .timeout(args.timeout)
        .keyword_limit(args.keywords);
    if let Some(ua) = &args.user_agent {
        config = config.user_agent(ua.clone());
    }
    let analyzer = SeoAnalyzer::with_config(config.build());

    let result = if args.input == "-" {
        if args.verbose {
            print_info("Reading from stdin");
        }
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        analyzer.analyze_html("stdin", &buffer)
    } else if Path::new(&args.input).exists() {
        if args.verbose {
            print_info(&format!("Reading {}", args.input));
        }
        let html = std::fs::read_to_string(&args.input)
            .with_context(|| format!("Failed to read {}", args.input))?;
        analyzer.analyze_html(&args.input, &html)
    } else {
        if args.verbose {
            print_info(&format!("Fetching {}", args.input));
        }
        analyzer.analyze(&args.input).await
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result).context("Failed to serialize result")?);
    } else if let Some(error) = &result.error {
        print_error(&format!("Analysis failed: {}", error));
    } else {
        print_summary(&result);
    }

    if let Some(path) = &args.report {
        // Report failures are warnings, never analysis failures.
        match append_report(path, &result) {
            Ok(()) => {
                if args.verbose {
                    print_info(&format!("Report appended to {}", path.display()));
                }
            }
            Err(e) => print_warning(&format!("Could not write report: {}", e)),
        }
    }

    if result.error.is_some() {
        std::process::exit(1);
    }

    Ok(())
}
