use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use gemini_generator::GeminiGenerator;
use genora_core::{Generator, Theme, ToolId};
use mock_generator::CannedGenerator;
use session::{SessionState, ToolSession, GENERIC_ERROR};
use storage::{
    FileStore, HistoryStore, InputStore, ReviewDraft, ReviewStore, SharedStore, ThemeSettings,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Debug, Parser)]
#[command(name = "genora")]
#[command(about = "AI content tools for creators: titles, descriptions, hashtags and SEO")]
struct Args {
    /// Directory holding saved inputs, history, reviews and settings
    #[arg(long, env = "GENORA_DATA_DIR", default_value = "./.genora")]
    data_dir: PathBuf,

    /// Theme used when none has been saved yet
    #[arg(long, env = "GENORA_THEME", default_value = "dark")]
    system_theme: Theme,

    /// Use canned offline answers instead of the Gemini API
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the available tools
    Tools,
    /// Run a tool and print its result
    Generate {
        /// Tool id (see `genora tools`)
        tool: ToolId,
        /// Primary input (topic, theme, brand, or video title)
        #[arg(long)]
        input1: Option<String>,
        /// Video description (seo-score only)
        #[arg(long)]
        input2: Option<String>,
        /// Comma-separated tags (seo-score only)
        #[arg(long)]
        input3: Option<String>,
        /// Per-character delay when printing descriptions, 0 to disable
        #[arg(long, default_value_t = 8)]
        reveal_ms: u64,
        /// Give up after this many seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or clear a tool's saved inputs
    Inputs {
        tool: ToolId,
        /// Erase the saved inputs
        #[arg(long)]
        clear: bool,
    },
    /// Browse or manage generation history
    History {
        #[command(subcommand)]
        action: Option<HistoryCommand>,
    },
    /// Read or leave a review
    Reviews {
        #[command(subcommand)]
        action: Option<ReviewsCommand>,
    },
    /// Show or change the color theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeCommand>,
    },
    /// Show trending topics on YouTube and Instagram
    Trending,
}

#[derive(Debug, Subcommand)]
enum HistoryCommand {
    /// List history, grouped by tool
    List {
        /// Only this tool
        tool: Option<ToolId>,
    },
    /// Print one history item in full
    Show { tool: ToolId, id: String },
    /// Delete one history item
    Delete { tool: ToolId, id: String },
    /// Delete the history of every tool
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
enum ReviewsCommand {
    /// List all reviews
    List,
    /// Submit a review
    Add {
        /// Display name (defaults to an anonymous creator)
        #[arg(long)]
        name: Option<String>,
        /// Star rating, 1 to 5
        #[arg(long)]
        rating: u8,
        /// Feedback text
        text: String,
    },
}

#[derive(Debug, Subcommand)]
enum ThemeCommand {
    /// Print the current theme
    Get,
    /// Set the theme
    Set { theme: Theme },
    /// Switch between dark and light
    Toggle,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let store: SharedStore = Arc::new(FileStore::open(&args.data_dir)?);
    info!(data_dir = %args.data_dir.display(), "Opened data store");

    match args.command {
        Command::Tools => print!("{}", render::tools()),
        Command::Generate {
            tool,
            input1,
            input2,
            input3,
            reveal_ms,
            timeout_secs,
            json,
        } => {
            let generator = build_generator(args.mock)?;
            let mut session = ToolSession::open(tool, store, generator);
            if let Some(timeout) = timeout_secs {
                session = session.with_timeout(Duration::from_secs(timeout));
            }
            if let Some(value) = input1 {
                session.set_input1(value);
            }
            if let Some(value) = input2 {
                session.set_input2(value);
            }
            if let Some(value) = input3 {
                session.set_input3(value);
            }

            if !session.has_primary_input() {
                let field = tool.fields()[0];
                return Err(format!("--input1 ({}) is required", field.label).into());
            }

            if session.submit().await? == SessionState::Failed {
                eprintln!("{}", session.error_message().unwrap_or(GENERIC_ERROR));
                std::process::exit(1);
            }

            if let Some(result) = session.result() {
                if json {
                    println!("{}", serde_json::to_string_pretty(result)?);
                } else if tool == ToolId::Description {
                    render::reveal(&result.copy_text(), Duration::from_millis(reveal_ms)).await?;
                } else {
                    print!("{}", render::result(result));
                }
            }
        }
        Command::Inputs { tool, clear } => {
            let inputs = InputStore::new(store);
            if clear {
                inputs.clear(tool)?;
                println!("Cleared saved inputs for {}", tool);
            } else {
                let saved = inputs.load(tool);
                for (field, value) in tool
                    .fields()
                    .iter()
                    .zip([&saved.input1, &saved.input2, &saved.input3])
                {
                    println!("{}: {}", field.label, value);
                }
            }
        }
        Command::History { action } => {
            let action = action.unwrap_or(HistoryCommand::List { tool: None });
            run_history(HistoryStore::new(store), action)?;
        }
        Command::Reviews { action } => {
            let reviews = ReviewStore::new(store);
            match action.unwrap_or(ReviewsCommand::List) {
                ReviewsCommand::List => {
                    for review in reviews.load_all() {
                        print!("{}", render::review(&review));
                    }
                }
                ReviewsCommand::Add { name, rating, text } => {
                    let review = reviews.submit(ReviewDraft { name, rating, text })?;
                    println!("Thanks for your feedback, {}!", review.username);
                }
            }
        }
        Command::Theme { action } => {
            let mut settings = ThemeSettings::load(store, args.system_theme);
            match action.unwrap_or(ThemeCommand::Get) {
                ThemeCommand::Get => println!("{}", settings.theme()),
                ThemeCommand::Set { theme } => {
                    settings.set(theme)?;
                    println!("{}", theme);
                }
                ThemeCommand::Toggle => println!("{}", settings.toggle()?),
            }
        }
        Command::Trending => {
            let generator = build_generator(args.mock)?;
            match generator.trending_topics().await {
                Ok(Some(topics)) => print!("{}", render::trending(&topics)),
                Ok(None) => {
                    warn!("Trending topics response could not be decoded");
                    eprintln!("{}", GENERIC_ERROR);
                    std::process::exit(1);
                }
                Err(e) => {
                    warn!("Failed to fetch trending topics: {}", e);
                    eprintln!("{}", GENERIC_ERROR);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn build_generator(mock: bool) -> Result<Arc<dyn Generator>, Box<dyn std::error::Error>> {
    if mock {
        info!("Using canned offline generator");
        return Ok(Arc::new(CannedGenerator::new()));
    }
    Ok(Arc::new(GeminiGenerator::from_env()?))
}

fn run_history(
    history: HistoryStore,
    action: HistoryCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        HistoryCommand::List { tool: None } => print!("{}", render::history(&history.load_all())),
        HistoryCommand::List { tool: Some(tool) } => {
            let items = history.load(tool);
            let groups = if items.is_empty() { vec![] } else { vec![(tool, items)] };
            print!("{}", render::history(&groups));
        }
        HistoryCommand::Show { tool, id } => {
            let item = history
                .load(tool)
                .into_iter()
                .find(|item| item.id == id)
                .ok_or_else(|| format!("No history item {} for {}", id, tool))?;
            println!("{}\n", render::history_item(&item));
            print!("{}", render::result(&item.result));
        }
        HistoryCommand::Delete { tool, id } => {
            history.remove(tool, &id)?;
            println!("Deleted {}", id);
        }
        HistoryCommand::Clear { yes } => {
            if !yes && !confirm("Clear all history? This cannot be undone. [y/N] ")? {
                println!("Cancelled");
                return Ok(());
            }
            history.clear_all()?;
            println!("Cleared all history");
        }
    }
    Ok(())
}

fn confirm(question: &str) -> io::Result<bool> {
    print!("{}", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
