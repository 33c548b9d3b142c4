use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use recorte_core::{
    FetchConfig, LinkContent, LinkProcessor, ProcessorConfig, extract_text, fetch_file, fetch_stdin,
    optimize_content,
};
use url::Url;

mod echo;

use echo::{print_banner, print_error, print_step, print_success, print_warning};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fetch web links and trim their text content to a fixed character budget
#[derive(Parser, Debug)]
#[command(name = "recorte")]
#[command(author = "Recorte Contributors")]
#[command(version = VERSION)]
#[command(about = "Fetch links and trim their text content", long_about = None)]
struct Args {
    /// URLs to fetch, local HTML files, or "-" for stdin
    #[arg(value_name = "INPUT", required = true)]
    inputs: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the result envelope as JSON
    #[arg(long)]
    json: bool,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "15", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable verbose progress output
    #[arg(short, long)]
    verbose: bool,
}

/// Inputs with an http(s) scheme go over the network; everything else is a
/// local path (or stdin).
fn is_url(input: &str) -> bool {
    Url::parse(input)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Read a local file or stdin and run it through the same trim pipeline.
fn process_local(input: &str) -> LinkContent {
    let read = if input == "-" { fetch_stdin() } else { fetch_file(input) };

    match read {
        Ok(html) => LinkContent::ok(input, optimize_content(&extract_text(&html))),
        Err(e) => LinkContent::failed(input, e.to_string()),
    }
}

fn render_json(records: &[LinkContent]) -> anyhow::Result<String> {
    let envelope = serde_json::json!({ "success": true, "links": records });
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Join successful contents; failures were already reported on stderr.
fn render_text(records: &[LinkContent]) -> String {
    let mut out = String::new();
    for record in records.iter().filter(|r| r.success) {
        if !out.is_empty() {
            out.push_str("\n\n");
        }
        out.push_str(&record.content);
    }
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        print_banner();
    }

    let mut fetch = FetchConfig { timeout: args.timeout, ..Default::default() };
    if let Some(ua) = &args.user_agent {
        fetch.user_agent = ua.clone();
    }
    let processor = LinkProcessor::with_config(ProcessorConfig { fetch, ..Default::default() })
        .context("Failed to build HTTP client")?;

    let total = args.inputs.len();
    let mut records = Vec::with_capacity(total);

    for (i, input) in args.inputs.iter().enumerate() {
        if args.verbose {
            print_step(i + 1, total, input);
        }

        let record = if is_url(input) {
            processor.process_link(input).await
        } else {
            process_local(input)
        };

        if let Some(error) = &record.error {
            print_error(&format!("{}: {}", record.url, error));
        }
        records.push(record);
    }

    let rendered = if args.json { render_json(&records)? } else { render_text(&records) };

    match &args.output {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("Failed to write {}", path.display()))?
        }
        None => print!("{}", rendered),
    }

    if args.verbose {
        let failures = records.iter().filter(|r| !r.success).count();
        if failures == 0 {
            print_success(&format!("{} input(s) processed", total));
        } else {
            print_warning(&format!("{} of {} input(s) failed", failures, total));
        }
    }

    Ok(())
}
