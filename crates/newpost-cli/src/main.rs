#[cfg(target_env = "musl")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::Parser;
use newpost_core::output::{ArticleOutputs, OutputWriter};
use newpost_core::types::InputConfig;
use newpost_core::{Outcome, PublishedArticle, PushContext};
use std::borrow::Cow;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "newpost", version, about = "Markdown article publication detection")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Detect a newly pushed article and emit its metadata and body
    Detect(DetectArgs),
}

#[derive(clap::Args)]
struct DetectArgs {
    /// GitHub API token (Actions input `gh_token`)
    #[arg(long, env = "INPUT_GH_TOKEN")]
    gh_token: Option<String>,

    /// Folder under which articles are expected (Actions input `articles_folder`)
    #[arg(long, env = "INPUT_ARTICLES_FOLDER")]
    articles_folder: Option<String>,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL")]
    api_url: Option<String>,

    /// Directory holding the checked-out repository
    #[arg(long, env = "GITHUB_WORKSPACE")]
    workspace_dir: Option<String>,

    /// Output format: gha, json, text (default: auto-detect)
    #[arg(long, env = "NEWPOST_OUTPUT_FORMAT")]
    output_format: Option<String>,
}

/// Output format for the CLI
enum OutputFormat {
    /// GitHub Actions: write to $GITHUB_OUTPUT + summary to stdout
    Gha,
    /// Full JSON to stdout
    Json,
    /// Human-readable text to stdout
    Text,
}

impl OutputFormat {
    fn detect(explicit: Option<&str>) -> Self {
        match explicit {
            Some("gha") => OutputFormat::Gha,
            Some("json") => OutputFormat::Json,
            Some("text") => OutputFormat::Text,
            _ => {
                if std::env::var("GITHUB_ACTIONS").is_ok() {
                    OutputFormat::Gha
                } else {
                    OutputFormat::Text
                }
            }
        }
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Detect(args) => run_detect(args),
    };
    std::process::exit(code);
}

/// Route log lines to stderr so stdout stays machine-readable.
///
/// `RUNNER_DEBUG=1` (the Actions debug toggle) lowers the default level
/// to debug; `RUST_LOG` overrides everything.
fn init_tracing() {
    let default_directive = if std::env::var("RUNNER_DEBUG").as_deref() == Ok("1") {
        "debug"
    } else {
        "info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Filter empty string from Option (env vars may produce "" for empty values)
fn clean_opt(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

fn run_detect(args: DetectArgs) -> i32 {
    let output_format = OutputFormat::detect(clean_opt(&args.output_format));

    // Clean env var inputs (GHA sets empty strings for unset optional inputs)
    let gh_token = clean_opt(&args.gh_token);
    let articles_folder = clean_opt(&args.articles_folder);
    let api_url = clean_opt(&args.api_url);
    let workspace_dir = clean_opt(&args.workspace_dir);

    // Build InputConfig — borrowing from args (zero-copy)
    let mut config = InputConfig {
        token: gh_token.map(Cow::Borrowed).unwrap_or(Cow::Borrowed("")),
        articles_folder: articles_folder
            .map(Cow::Borrowed)
            .unwrap_or(Cow::Borrowed("")),
        ..Default::default()
    };
    if let Some(url) = api_url {
        config.api_url = Cow::Borrowed(url);
    }
    if let Some(dir) = workspace_dir {
        config.workspace_dir = Cow::Borrowed(dir);
    }

    let ctx = match PushContext::from_env() {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };
    debug!(owner = %ctx.owner, repo = %ctx.repo, sha = %ctx.sha, "resolved push context");

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build();
    let rt = match rt {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to create runtime: {e}");
            return 1;
        }
    };

    let outcome = rt.block_on(newpost_core::detect_article(&config, &ctx));

    match outcome {
        Ok(Outcome::AlreadyPublished { path }) => {
            info!(%path, "article already published, skipping");
            if let OutputFormat::Text = output_format {
                println!("Article {path} already published. Nothing to do.");
            }
            0
        }
        Ok(Outcome::Published(article)) => match write_published(&article, output_format) {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("Error: {e}");
                1
            }
        },
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

fn write_published(
    article: &PublishedArticle,
    format: OutputFormat,
) -> newpost_core::Result<()> {
    let outputs = ArticleOutputs::from_article(article)?;
    match format {
        OutputFormat::Gha => write_gha_output(article, &outputs),
        OutputFormat::Json => {
            write_json_output(article, &outputs);
            Ok(())
        }
        OutputFormat::Text => {
            write_text_output(article, &outputs);
            Ok(())
        }
    }
}

/// Write step outputs to $GITHUB_OUTPUT, with a summary to the job log
fn write_gha_output(
    article: &PublishedArticle,
    outputs: &ArticleOutputs,
) -> newpost_core::Result<()> {
    let output_file = match std::env::var("GITHUB_OUTPUT") {
        Ok(f) => f,
        Err(_) => {
            eprintln!("Warning: GITHUB_OUTPUT not set, falling back to stdout");
            write_json_output(article, outputs);
            return Ok(());
        }
    };

    OutputWriter::write(outputs, Path::new(&output_file))?;

    // Summary to stdout (visible in job log)
    let stdout = std::io::stdout();
    let mut w = stdout.lock();
    let _ = writeln!(w, "New Article Detected");
    let _ = writeln!(w, "====================");
    let _ = writeln!(w, "Path:     {}", article.path);
    let _ = writeln!(w, "File URL: {}", article.file_url);
    let _ = writeln!(w, "Metadata keys: {}", article.metadata.len());
    let _ = writeln!(w, "Body bytes:    {}", article.body.len());
    Ok(())
}

/// Write full JSON output to stdout
fn write_json_output(article: &PublishedArticle, outputs: &ArticleOutputs) {
    let metadata_val: serde_json::Value =
        serde_json::from_str(&outputs.metadata).unwrap_or(serde_json::json!({}));

    let output = serde_json::json!({
        "path": article.path,
        "file_url": outputs.file_url,
        "metadata": metadata_val,
        "content": outputs.content,
    });

    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    let _ = serde_json::to_writer(&mut lock, &output);
    let _ = writeln!(lock);
}

/// Write human-readable text to stdout
fn write_text_output(article: &PublishedArticle, outputs: &ArticleOutputs) {
    let stdout = std::io::stdout();
    let mut w = stdout.lock();

    let _ = writeln!(w, "New Article Detected");
    let _ = writeln!(w, "====================");
    let _ = writeln!(w);
    let _ = writeln!(w, "Path:     {}", article.path);
    let _ = writeln!(w, "File URL: {}", article.file_url);
    let _ = writeln!(w, "Metadata: {}", outputs.metadata);
    let _ = writeln!(w);
    let _ = writeln!(w, "{}", outputs.content);
}
