//! Inventory view controller.
//!
//! Owns the rows on screen and the queue of notices the front end must show.
//! Reads go through [`InventoryFetcher`] on a background task; mutations are
//! awaited by the caller and followed by a full refetch.

use std::collections::VecDeque;

use tokio::sync::mpsc;

use crate::client::{ClientError, InventoryClient};
use crate::command::Command;
use crate::fetcher::InventoryFetcher;
use crate::types::{FetchOutcome, FetchReport, ItemSummary, Notice, ViewStatus};

const INPUT_ERROR: &str = "Enter valid item name and quantity.";

pub struct InventoryApp {
    client: InventoryClient,
    rows: Vec<ItemSummary>,
    status: ViewStatus,
    notices: VecDeque<Notice>,
    /// Generation handed to the most recently started fetch.
    started: u64,
    /// Generation of the newest report applied to `rows`/`status`.
    applied: u64,
    in_flight: usize,
    tx: mpsc::UnboundedSender<FetchReport>,
    rx: mpsc::UnboundedReceiver<FetchReport>,
}

impl InventoryApp {
    /// Build the controller. Call [`load_inventory`](Self::load_inventory)
    /// (or [`refresh`](Self::refresh)) to populate it.
    pub fn new(client: InventoryClient) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            client,
            rows: Vec::new(),
            status: ViewStatus::Loading,
            notices: VecDeque::new(),
            started: 0,
            applied: 0,
            in_flight: 0,
            tx,
            rx,
        }
    }

    pub fn rows(&self) -> &[ItemSummary] {
        &self.rows
    }

    pub fn status(&self) -> &ViewStatus {
        &self.status
    }

    pub fn client(&self) -> &InventoryClient {
        &self.client
    }

    /// Drain the notices raised since the last call, oldest first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    /// Start a background fetch of the whole inventory.
    pub fn load_inventory(&mut self) {
        self.started += 1;
        self.in_flight += 1;
        InventoryFetcher::new(self.client.clone(), self.started, self.tx.clone()).start();
    }

    /// Wait for the next fetch report. Never resolves while no fetch is running.
    pub async fn next_report(&mut self) -> Option<FetchReport> {
        self.rx.recv().await
    }

    /// Apply a fetch report. Reports older than one already applied are
    /// dropped so a slow fetch cannot overwrite newer rows.
    pub fn apply_report(&mut self, report: FetchReport) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);

        if report.generation <= self.applied {
            tracing::debug!(
                generation = report.generation,
                applied = self.applied,
                "dropping stale inventory fetch"
            );
            return false;
        }
        self.applied = report.generation;

        match report.outcome {
            FetchOutcome::Loaded(rows) => {
                tracing::debug!(count = rows.len(), "inventory loaded");
                self.rows = rows;
                self.status = ViewStatus::Ready;
            }
            FetchOutcome::Failed(reason) => {
                // Keep whatever is on screen; the user is told it may be stale.
                self.notices.push_back(Notice::warning(
                    "Fetch Error",
                    format!("Could not load inventory: {reason}"),
                ));
                self.status = ViewStatus::FetchFailed(reason);
            }
        }
        true
    }

    /// Apply reports until no fetch is outstanding.
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            match self.rx.recv().await {
                Some(report) => {
                    self.apply_report(report);
                }
                None => break,
            }
        }
    }

    /// Fetch and wait for the result.
    pub async fn refresh(&mut self) {
        self.load_inventory();
        self.settle().await;
    }

    /// Validate the raw input fields, then create the item.
    pub async fn add_item(&mut self, name_input: &str, quantity_input: &str) {
        let name = name_input.trim();
        let Some(quantity) = parse_quantity(quantity_input) else {
            self.notices.push_back(Notice::warning("Input Error", INPUT_ERROR));
            return;
        };
        if name.is_empty() {
            self.notices.push_back(Notice::warning("Input Error", INPUT_ERROR));
            return;
        }

        let result = self.client.add_item(name, quantity).await.map(|_| ());
        self.finish_mutation(result, format!("{name} added successfully."), "Failed to add item.");
    }

    pub async fn remove_item(&mut self, name: &str) {
        let result = self.client.remove_item(name).await.map(|_| ());
        self.finish_mutation(result, format!("{name} removed successfully."), "Failed to remove item.");
    }

    /// Purchase (`change > 0`) or return (`change < 0`) stock.
    pub async fn modify_quantity(&mut self, name: &str, change: i64) {
        let result = self.client.update_quantity(name, change).await.map(|update| {
            tracing::info!(item = name, new_quantity = update.new_quantity, "{}", update.message);
        });
        self.finish_mutation(result, format!("{name} updated successfully."), "Failed to update item.");
    }

    fn finish_mutation(&mut self, result: Result<(), ClientError>, success: String, fallback: &str) {
        match result {
            Ok(()) => {
                self.notices.push_back(Notice::info("Success", success));
                self.load_inventory();
            }
            Err(ClientError::Api { status, detail }) => {
                tracing::warn!(status, detail = detail.as_deref(), "inventory request rejected");
                let message = detail.unwrap_or_else(|| fallback.to_string());
                self.notices.push_back(Notice::warning("Error", message));
            }
            Err(e) => {
                tracing::error!(error = %e, "inventory request failed");
                self.notices.push_back(Notice::critical("Error", e.to_string()));
            }
        }
    }

    /// Run one parsed command. Returns `false` when the front end should exit.
    pub async fn execute(&mut self, command: Command) -> bool {
        match command {
            Command::Add { name, quantity } => self.add_item(&name, &quantity).await,
            Command::Remove { name } => self.remove_item(&name).await,
            Command::Buy { name } => self.modify_quantity(&name, 1).await,
            Command::Return { name } => self.modify_quantity(&name, -1).await,
            Command::Refresh => self.load_inventory(),
            Command::Help => self.notices.push_back(Notice::info("Help", Command::USAGE)),
            Command::Quit => return false,
        }
        true
    }

    /// Render the table and status line as plain text.
    pub fn render(&self) -> String {
        let width = self
            .rows
            .iter()
            .map(|row| row.name.chars().count())
            .max()
            .unwrap_or(0)
            .max("Item Name".len());

        let mut out = format!("{:<width$}  {:>8}\n", "Item Name", "Quantity");
        out.push_str(&format!("{}  {}\n", "-".repeat(width), "-".repeat(8)));
        for row in &self.rows {
            out.push_str(&format!("{:<width$}  {:>8}\n", row.name, row.quantity));
        }

        match &self.status {
            ViewStatus::Loading => out.push_str("(loading...)\n"),
            ViewStatus::Ready if self.rows.is_empty() => out.push_str("(inventory is empty)\n"),
            ViewStatus::Ready => {}
            ViewStatus::FetchFailed(reason) => {
                out.push_str(&format!("(last refresh failed: {reason})\n"));
            }
        }
        out
    }
}

/// Accepts only non-empty all-digit input, the same rule the add form uses.
fn parse_quantity(input: &str) -> Option<i64> {
    let input = input.trim();
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    input.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_app() -> InventoryApp {
        InventoryApp::new(InventoryClient::new("http://127.0.0.1:1"))
    }

    fn rows(names: &[(&str, i64)]) -> Vec<ItemSummary> {
        names
            .iter()
            .map(|(name, quantity)| ItemSummary {
                name: name.to_string(),
                quantity: *quantity,
            })
            .collect()
    }

    #[test]
    fn quantity_input_must_be_digits() {
        assert_eq!(parse_quantity(" 12 "), Some(12));
        assert_eq!(parse_quantity("0"), Some(0));
        assert_eq!(parse_quantity(""), None);
        assert_eq!(parse_quantity("-3"), None);
        assert_eq!(parse_quantity("1.5"), None);
        assert_eq!(parse_quantity("ten"), None);
        assert_eq!(parse_quantity("99999999999999999999999"), None);
    }

    #[tokio::test]
    async fn invalid_input_raises_warning_without_request() {
        let mut app = offline_app();

        app.add_item("   ", "5").await;
        app.add_item("Widget", "abc").await;

        let notices = app.take_notices();
        assert_eq!(notices.len(), 2);
        for notice in notices {
            assert_eq!(notice, Notice::warning("Input Error", INPUT_ERROR));
        }
        assert_eq!(app.in_flight, 0);
    }

    #[test]
    fn stale_reports_are_dropped() {
        let mut app = offline_app();
        app.in_flight = 2;

        assert!(app.apply_report(FetchReport {
            generation: 2,
            outcome: FetchOutcome::Loaded(rows(&[("Widget", 3)])),
        }));
        assert!(!app.apply_report(FetchReport {
            generation: 1,
            outcome: FetchOutcome::Loaded(Vec::new()),
        }));

        assert_eq!(app.rows(), rows(&[("Widget", 3)]).as_slice());
        assert_eq!(app.status(), &ViewStatus::Ready);
        assert_eq!(app.in_flight, 0);
    }

    #[test]
    fn failed_fetch_keeps_rows_and_warns() {
        let mut app = offline_app();
        app.apply_report(FetchReport {
            generation: 1,
            outcome: FetchOutcome::Loaded(rows(&[("Bolt", 1)])),
        });

        app.apply_report(FetchReport {
            generation: 2,
            outcome: FetchOutcome::Failed("connection refused".to_string()),
        });

        assert_eq!(app.rows(), rows(&[("Bolt", 1)]).as_slice());
        assert_eq!(app.status(), &ViewStatus::FetchFailed("connection refused".to_string()));
        let notices = app.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, "Fetch Error");
    }

    #[test]
    fn render_lists_rows_under_header() {
        let mut app = offline_app();
        app.apply_report(FetchReport {
            generation: 1,
            outcome: FetchOutcome::Loaded(rows(&[("Widget", 5), ("Nut", 12)])),
        });

        let text = app.render();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("Item Name"));
        assert!(lines[2].starts_with("Widget"));
        assert!(lines[2].ends_with('5'));
        assert!(lines[3].starts_with("Nut"));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn render_marks_empty_inventory() {
        let mut app = offline_app();
        assert!(app.render().contains("(loading...)"));

        app.apply_report(FetchReport {
            generation: 1,
            outcome: FetchOutcome::Loaded(Vec::new()),
        });
        assert!(app.render().contains("(inventory is empty)"));
    }
}
