//! blog-toc - heading anchors and tables of contents for article HTML

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use blog_toc::faq::{self, FaqOptions};
use blog_toc::{Blog, Extraction, TocOptions, enhance, extract_with};

#[derive(Parser)]
#[command(name = "blog-toc")]
#[command(version, about = "Heading anchors and tables of contents for article HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    blog-toc toc post.html             Print the table of contents
    blog-toc toc --json < post.html    Print TOC and rewritten HTML as JSON
    blog-toc article blog.json         Enhance a blog payload
    blog-toc faq faqs.json -s billing  Search FAQs")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log debug output to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Extract the table of contents from an HTML file
    Toc {
        /// HTML file to read (stdin if omitted or "-")
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Deepest heading level to include
        #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=6))]
        max_level: u8,

        /// Print the full extraction result as JSON
        #[arg(long, conflicts_with = "content")]
        json: bool,

        /// Print the rewritten HTML instead of the TOC
        #[arg(long)]
        content: bool,
    },

    /// Enhance a blog JSON payload and print the result as JSON
    Article {
        /// Blog JSON file (stdin if "-")
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Search and trim a list of FAQs
    Faq {
        /// FAQ JSON file, either {"faqs": [...]} or a bare array
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Case-insensitive search term
        #[arg(short, long)]
        search: Option<String>,

        /// Maximum number of FAQs to print
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    // Only fails if a subscriber is already installed.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn run(command: Command) -> blog_toc::Result<()> {
    match command {
        Command::Toc {
            input,
            max_level,
            json,
            content,
        } => {
            let html = read_input(input.as_ref())?;
            let options = TocOptions::new().with_max_level(max_level);
            let extraction = extract_with(&html, &options);
            debug!(entries = extraction.table_of_contents.len(), "toc extracted");

            if json {
                println!("{}", serde_json::to_string_pretty(&extraction)?);
            } else if content {
                println!("{}", extraction.rewritten_content);
            } else {
                print!("{}", render_toc(&extraction));
            }
        }
        Command::Article { input } => {
            let blog = Blog::from_json(&read_input(Some(&input))?)?;
            debug!(id = blog.id, slug = %blog.slug(), "enhancing article");
            println!("{}", serde_json::to_string_pretty(&enhance(&blog))?);
        }
        Command::Faq {
            input,
            search,
            limit,
        } => {
            let faqs = faq::from_json(&read_input(Some(&input))?)?;
            let mut options = FaqOptions::new();
            if let Some(term) = search {
                options = options.search(term);
            }
            if let Some(limit) = limit {
                options = options.limit(limit);
            }
            let result = faq::customize(&faqs, &options);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => fs::read_to_string(p),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// One line per entry, indented by level: `  - Title (#id)`.
fn render_toc(extraction: &Extraction) -> String {
    let mut out = String::new();
    for entry in &extraction.table_of_contents {
        let indent = "  ".repeat(usize::from(entry.level.saturating_sub(1)));
        out.push_str(&format!("{indent}- {} ({})\n", entry.title, entry.anchor));
    }
    out
}
