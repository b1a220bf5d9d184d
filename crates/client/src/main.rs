//! Minimal runner: print the public event list from the configured backend.
//!
//! The library crates are the product; this binary exists to smoke-test the
//! gateway against a live backend. `CAMPUS_API_URL` selects the backend.

use anyhow::Context;

use campus_auth::SessionStore;
use campus_client::{EventDesk, HttpGateway};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    campus_observability::init();

    let base_url =
        std::env::var("CAMPUS_API_URL").context("CAMPUS_API_URL must point at the backend")?;
    let gateway = HttpGateway::new(base_url);

    // No login: this exercises the public (unauthenticated) event view.
    let session = SessionStore::new();
    let desk = EventDesk::new(&gateway, &session);

    let events = desk.list().await.context("could not fetch the event list")?;
    for event in &events {
        let date = event
            .date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "sin fecha".to_string());
        println!("{date}  {}  ({})", event.name, event.place);
    }
    Ok(())
}
