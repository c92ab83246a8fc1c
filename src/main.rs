// ABOUTME: Entry point for popchat — a popup chat widget for the terminal.
// ABOUTME: Parses CLI args, loads config, and launches the app.

use clap::Parser;

use popchat::app::App;
use popchat::config::Config;

/// A toggleable popup chat widget with a canned, time-delayed responder.
#[derive(Parser, Debug)]
#[command(name = "popchat", version, about)]
struct Cli {
    /// Popup title shown in the widget header.
    #[arg(long)]
    title: Option<String>,

    /// Text of the canned reply.
    #[arg(long)]
    reply: Option<String>,

    /// Delay before the canned reply arrives, in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: failed to load config, using defaults: {e}");
            Config::default()
        }
    };

    if let Some(title) = cli.title {
        config.widget.title = title;
    }
    if let Some(reply) = cli.reply {
        config.responder.reply_text = reply;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.responder.delay_ms = delay_ms;
    }

    App::new(config).run().await
}
