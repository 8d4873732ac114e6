use std::io::Write as _;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use wr_core::{links, lists, Article, ListKind, ListStore, Result};
use wr_storage::create_store;
use wr_wiki::{ReaderManager, ViewState, WikipediaSource};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Storage backend for bookmarks and history: file or memory
    #[arg(long, default_value = "file")]
    storage: String,
    /// Directory the file backend keeps its lists in
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Seconds before an article fetch is abandoned
    #[arg(long, default_value_t = 15)]
    timeout: u64,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read random articles interactively
    Read,
    /// Browse saved bookmarks
    Bookmarks {
        #[command(subcommand)]
        command: Option<BookmarkCommands>,
    },
    /// Browse reading history
    History {
        #[command(subcommand)]
        command: Option<HistoryCommands>,
    },
}

#[derive(Subcommand, Debug)]
enum BookmarkCommands {
    /// Show every bookmark, most recently added first
    List,
    /// Remove one bookmark by article id
    Remove { id: u64 },
    /// Remove every bookmark
    Clear,
}

#[derive(Subcommand, Debug)]
enum HistoryCommands {
    /// Show recently viewed articles, most recent first
    List,
    /// Forget the reading history
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let store = create_store(&cli.storage, cli.data_dir.as_deref()).await?;
    info!("💾 Storage initialized (using {})", cli.storage);

    match cli.command.unwrap_or(Commands::Read) {
        Commands::Read => {
            let source = Arc::new(WikipediaSource::with_timeout(Duration::from_secs(
                cli.timeout,
            ))?);
            let manager = ReaderManager::new(source, store);
            run_reader(manager).await
        }
        Commands::Bookmarks { command } => match command.unwrap_or(BookmarkCommands::List) {
            BookmarkCommands::List => list_bookmarks(&*store).await,
            BookmarkCommands::Remove { id } => remove_bookmark(&*store, id).await,
            BookmarkCommands::Clear => clear_list(&*store, ListKind::Bookmarks).await,
        },
        Commands::History { command } => match command.unwrap_or(HistoryCommands::List) {
            HistoryCommands::List => list_history(&*store).await,
            HistoryCommands::Clear => clear_list(&*store, ListKind::History).await,
        },
    }
}

const PROMPT_HELP: &str = "[n]ext  [b]ookmark  [s]hare  [q]uit";

async fn run_reader(manager: ReaderManager) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    fetch_and_render(&manager).await;
    loop {
        print!("{PROMPT_HELP} > ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        match line.trim() {
            "" | "n" | "next" => fetch_and_render(&manager).await,
            "b" | "bookmark" => match manager.toggle_bookmark().await {
                Ok(Some(true)) => println!("🔖 Added to bookmarks."),
                Ok(Some(false)) => println!("Removed from bookmarks."),
                Ok(None) => println!("No article loaded."),
                Err(e) => {
                    warn!("bookmark not persisted: {}", e);
                    println!("⚠️  Could not save; the change lasts only for this session.");
                }
            },
            "s" | "share" => match manager.share_current().await {
                Some(share) => {
                    println!("{}", share.title);
                    println!("{}", share.snippet);
                    println!("{}", share.url);
                }
                None => println!("No article loaded."),
            },
            "h" | "help" => println!("{PROMPT_HELP}"),
            "q" | "quit" | "exit" => break,
            other => println!("Unknown command {other:?}. {PROMPT_HELP}"),
        }
    }
    Ok(())
}

async fn fetch_and_render(manager: &ReaderManager) {
    if let Err(e) = manager.fetch_next().await {
        if e.is_fetch_failure() {
            warn!("fetch failed: {}", e);
            println!("Failed to load article. Please try again.");
            return;
        }
        // The article came through; only the history write failed.
        warn!("history not persisted: {}", e);
        println!("⚠️  Could not save history.");
    }
    if let ViewState::Loaded { article, bookmarked } = manager.state().await {
        render_article(&article, bookmarked);
    }
}

fn render_article(article: &Article, bookmarked: bool) {
    let marker = if bookmarked { " 🔖" } else { "" };
    println!();
    println!("📰 {}{marker}", article.title);
    if let Some(thumbnail) = &article.thumbnail {
        println!("🖼  {thumbnail}");
    }
    println!();
    println!("{}", article.extract);
    println!();
    println!("Read on Wikipedia: {}", links::article_url(&article.title));
    println!();
}

async fn list_bookmarks(store: &dyn ListStore) -> Result<()> {
    let bookmarks = store.load(ListKind::Bookmarks).await?;
    if bookmarks.is_empty() {
        println!("You haven't bookmarked any articles yet.");
        return Ok(());
    }
    for article in &bookmarks {
        println!("🔖 {} (id {})", article.title, article.id);
        println!("   {}", links::article_url(&article.title));
    }
    Ok(())
}

async fn remove_bookmark(store: &dyn ListStore, id: u64) -> Result<()> {
    let bookmarks = store.load(ListKind::Bookmarks).await?;
    if !lists::contains(&bookmarks, id) {
        println!("No bookmark with id {id}.");
        return Ok(());
    }
    let bookmarks = lists::remove_by_id(bookmarks, id);
    store.save(ListKind::Bookmarks, &bookmarks).await?;
    println!("Bookmark removed.");
    Ok(())
}

async fn list_history(store: &dyn ListStore) -> Result<()> {
    let history = store.load(ListKind::History).await?;
    if history.is_empty() {
        println!("Your browsing history is empty.");
        return Ok(());
    }
    for article in &history {
        println!("📰 {} (id {})", article.title, article.id);
        println!("   {}", links::article_url(&article.title));
    }
    Ok(())
}

async fn clear_list(store: &dyn ListStore, list: ListKind) -> Result<()> {
    store.clear(list).await?;
    match list {
        ListKind::Bookmarks => println!("All bookmarks have been removed."),
        ListKind::History => println!("Your browsing history has been cleared."),
    }
    Ok(())
}
