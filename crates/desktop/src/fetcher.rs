//! Background inventory fetch.
//!
//! The read-all request runs on its own task so the front end keeps handling
//! input; the result comes back over a channel.

use tokio::sync::mpsc;

use crate::client::InventoryClient;
use crate::types::{FetchOutcome, FetchReport};

pub struct InventoryFetcher {
    client: InventoryClient,
    generation: u64,
    tx: mpsc::UnboundedSender<FetchReport>,
}

impl InventoryFetcher {
    pub fn new(client: InventoryClient, generation: u64, tx: mpsc::UnboundedSender<FetchReport>) -> Self {
        Self {
            client,
            generation,
            tx,
        }
    }

    /// Spawn the fetch. Exactly one report is sent unless the receiver is gone.
    pub fn start(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            tracing::debug!(generation = self.generation, "fetching inventory");

            let outcome = match self.client.fetch_inventory().await {
                Ok(rows) => FetchOutcome::Loaded(rows),
                Err(e) => {
                    tracing::warn!(error = %e, api_url = self.client.api_url(), "inventory fetch failed");
                    FetchOutcome::Failed(e.to_string())
                }
            };

            let report = FetchReport {
                generation: self.generation,
                outcome,
            };
            if self.tx.send(report).is_err() {
                tracing::debug!("inventory view closed before fetch completed");
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_server_reports_failure() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let closed = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let client = InventoryClient::new(format!("http://{closed}"));

        InventoryFetcher::new(client, 7, tx).start().await.unwrap();

        let report = rx.recv().await.unwrap();
        assert_eq!(report.generation, 7);
        assert!(matches!(report.outcome, FetchOutcome::Failed(_)));
    }
}
