use std::io::{self, BufRead, Write as _};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use lumina_app::modules::library::session::DraftField;
use lumina_app::{LibraryController, Notifier, RemovalGate};
use lumina_client::{BooksApi, RemoteCollection};
use lumina_kernel::settings::Settings;

const EMPTY_LIBRARY_MESSAGE: &str = "No books found in your library.";
const REMOVAL_PROMPT: &str = "Are you sure you want to remove this book? [y/N] ";

#[derive(Parser)]
#[command(name = "lumina", about = "Manage the Lumina book library from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the collection, optionally filtered by a search term.
    List {
        /// Case-insensitive match against title or author.
        #[arg(long)]
        search: Option<String>,
    },
    /// Add a new book to the collection.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        year: String,
    },
    /// Update fields of a stored book. Omitted fields keep their value.
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        year: Option<String>,
    },
    /// Remove a book after confirmation.
    Remove {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

/// Notifications go straight to the terminal.
struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn publish(&self, message: &str) {
        println!("{message}");
    }
}

/// Interactive confirmation on stdin, or auto-accept under `--yes`.
struct StdinGate {
    assume_yes: bool,
}

impl RemovalGate for StdinGate {
    fn confirm_removal(&self) -> bool {
        if self.assume_yes {
            return true;
        }
        print!("{REMOVAL_PROMPT}");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load().with_context(|| "failed to load LUMINA settings")?;
    lumina_telemetry::init(&settings.telemetry);

    tracing::info!(
        env = ?settings.environment,
        api = %settings.api.base_url,
        "lumina bootstrap starting"
    );

    let remote: Arc<dyn RemoteCollection> = Arc::new(BooksApi::new(&settings.api.base_url));
    let assume_yes = matches!(&cli.command, Command::Remove { yes: true, .. });
    let mut controller = LibraryController::new(
        remote,
        Arc::new(StdinGate { assume_yes }),
        Arc::new(StdoutNotifier),
    );
    controller.startup().await;

    match cli.command {
        Command::List { search } => {
            let term = search.unwrap_or_default();
            let mut printed = 0usize;
            for book in controller.visible_books(&term) {
                println!(
                    "{}  {} by {} ({})",
                    book.id, book.title, book.author, book.published_year
                );
                printed += 1;
            }
            if printed == 0 {
                println!("{EMPTY_LIBRARY_MESSAGE}");
            }
        }
        Command::Add {
            title,
            author,
            year,
        } => {
            controller.edit_field(DraftField::Title, title);
            controller.edit_field(DraftField::Author, author);
            controller.edit_field(DraftField::PublishedYear, year);
            if let Err(error) = controller.submit().await {
                anyhow::bail!("{}", error.user_message());
            }
        }
        Command::Edit {
            id,
            title,
            author,
            year,
        } => {
            if !controller.start_edit(&id) {
                anyhow::bail!("no book with id {id} in the library");
            }
            if let Some(title) = title {
                controller.edit_field(DraftField::Title, title);
            }
            if let Some(author) = author {
                controller.edit_field(DraftField::Author, author);
            }
            if let Some(year) = year {
                controller.edit_field(DraftField::PublishedYear, year);
            }
            if let Err(error) = controller.submit().await {
                anyhow::bail!("{}", error.user_message());
            }
        }
        Command::Remove { id, .. } => {
            if let Err(error) = controller.delete(&id).await {
                anyhow::bail!("{}", error.user_message());
            }
        }
    }

    Ok(())
}
