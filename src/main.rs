use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

use cinesearch::app::MoviesApp;
use cinesearch::config::Config;
use cinesearch::logging::init_tracing;
use cinesearch::movies::{SearchError, SearchTransport};
use cinesearch::routing::{Presenter, PresentationStyle, Screen};
use cinesearch::ui::cells::CellConfiguration;
use cinesearch::ui::viewmodel::{FetchIntent, Message};
use tokio::sync::watch;

#[derive(Parser)]
#[command(name = "cinesearch", about = "Search movies by title")]
struct Args {
    /// One-shot search query; omit for interactive mode.
    query: Option<String>,

    /// Number of result pages to fetch in one-shot mode.
    #[arg(long, default_value_t = 1)]
    pages: u32,

    /// Path to a config file (default: ~/.config/cinesearch/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Prints presented screens to stdout.
struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn present(&mut self, screen: Screen, _style: PresentationStyle) {
        match screen {
            Screen::MovieDetails(details) => {
                println!();
                println!("──── Movie details ────");
                println!("{}", details.title_text.as_deref().unwrap_or("(untitled)"));
                if let Some(line) = &details.release_date_text {
                    println!("{line}");
                }
                if let Some(line) = &details.rating_text {
                    println!("{line}");
                }
                println!("───────────────────────");
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    let mut app = MoviesApp::from_config(&config, TerminalPresenter);

    match args.query {
        Some(query) => run_one_shot(&mut app, &query, args.pages).await,
        None => run_interactive(&mut app).await,
    }
}

/// Watch-cell subscriptions held by the console view.
struct StateCells {
    message: watch::Receiver<Option<Message>>,
    error: watch::Receiver<Option<SearchError>>,
}

impl StateCells {
    fn subscribe<T: SearchTransport>(app: &MoviesApp<T>) -> Self {
        Self {
            message: app.viewmodel().watch_message(),
            error: app.viewmodel().watch_error(),
        }
    }

    /// Prints the message or error cells when they hold something new.
    fn report(&mut self) {
        if self.message.has_changed().unwrap_or(false) {
            if let Some(message) = self.message.borrow_and_update().as_ref() {
                println!("{}: {}", message.title, message.description);
            }
        }
        if self.error.has_changed().unwrap_or(false) {
            if let Some(error) = self.error.borrow_and_update().as_ref() {
                eprintln!("Error: {error}");
            }
        }
    }
}

async fn run_one_shot<T: SearchTransport>(
    app: &mut MoviesApp<T>,
    query: &str,
    pages: u32,
) -> anyhow::Result<()> {
    let mut cells = StateCells::subscribe(app);

    app.viewmodel_mut()
        .fetch_data(FetchIntent::FirstPage {
            title: query.to_string(),
        })
        .await;

    for _ in 1..pages {
        app.viewmodel_mut()
            .fetch_data(FetchIntent::NextPage {
                title: query.to_string(),
            })
            .await;
    }

    cells.report();
    render_rows(app.viewmodel().rows());
    Ok(())
}

async fn run_interactive<T: SearchTransport>(app: &mut MoviesApp<T>) -> anyhow::Result<()> {
    let mut cells = StateCells::subscribe(app);

    app.viewmodel_mut().fetch_data(FetchIntent::Initial).await;
    cells.report();
    println!("Type a title to search, :n for the next page, a row number for details, :q to quit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut current_title = String::new();

    while let Some(line) = lines.next_line().await.context("reading input")? {
        let input = line.trim();

        match input {
            "" => continue,
            ":q" => break,
            ":n" => {
                if current_title.is_empty() {
                    println!("Nothing to paginate yet. Search for a title first.");
                    continue;
                }
                app.viewmodel_mut()
                    .fetch_data(FetchIntent::NextPage {
                        title: current_title.clone(),
                    })
                    .await;
                cells.report();
                render_rows(app.viewmodel().rows());
            }
            _ => {
                if let Ok(number) = input.parse::<usize>() {
                    // 1-based row number as printed by render_rows.
                    if let Some(index) = number.checked_sub(1) {
                        app.viewmodel().select_row(index);
                        app.drain_actions();
                    }
                    continue;
                }

                current_title = input.to_string();
                app.viewmodel_mut()
                    .fetch_data(FetchIntent::FirstPage {
                        title: current_title.clone(),
                    })
                    .await;
                cells.report();
                render_rows(app.viewmodel().rows());
            }
        }
    }

    Ok(())
}

fn render_rows(rows: &[CellConfiguration]) {
    for (index, row) in rows.iter().enumerate() {
        match row {
            CellConfiguration::Movie(cell) => {
                let title = cell.title_text.as_deref().unwrap_or("(untitled)");
                let mut extras = Vec::new();
                if let Some(date) = &cell.release_date_text {
                    extras.push(date.clone());
                }
                if let Some(rating) = &cell.rating_text {
                    extras.push(rating.clone());
                }
                if extras.is_empty() {
                    println!("{:>3}. {}", index + 1, title);
                } else {
                    println!("{:>3}. {} ({})", index + 1, title, extras.join(", "));
                }
            }
            CellConfiguration::Loading => {
                println!("{:>3}. … more results available (:n to load)", index + 1);
            }
        }
    }
}
