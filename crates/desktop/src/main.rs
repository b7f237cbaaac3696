//! Terminal front end for the inventory manager.

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};

use dcclink_desktop::{Command, InventoryApp, InventoryClient};
use dcclink_observability::LogFormat;

enum Event {
    Line(Option<String>),
    Report(dcclink_desktop::FetchReport),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    dcclink_observability::tracing::init(LogFormat::from_env_or(LogFormat::Pretty));

    let client = InventoryClient::from_env();
    tracing::info!(api_url = client.api_url(), "starting inventory manager");

    let mut app = InventoryApp::new(client);
    app.load_inventory();
    println!("{}", Command::USAGE);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let event = tokio::select! {
            line = lines.next_line() => Event::Line(line.context("failed to read stdin")?),
            Some(report) = app.next_report() => Event::Report(report),
        };

        match event {
            Event::Line(None) => break,
            Event::Line(Some(line)) => {
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<Command>() {
                    Ok(command) => {
                        if !app.execute(command).await {
                            break;
                        }
                    }
                    Err(e) => println!("{e}"),
                }
            }
            Event::Report(report) => {
                if app.apply_report(report) {
                    print!("{}", app.render());
                }
            }
        }

        for notice in app.take_notices() {
            println!("{notice}");
        }
    }

    tracing::info!("inventory manager closed");
    Ok(())
}
