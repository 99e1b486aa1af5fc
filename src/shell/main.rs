use std::sync::Arc;

use anyhow::Context;
use chrono::Local;

use event_store::modules::events::core::event::Event;
use event_store::shared::infrastructure::event_store::{
    EventIterator, EventStore, InMemoryEventStore,
};
use event_store::shell::config::DemoConfig;
use event_store::shell::seed::producer_events;
use event_store::shell::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = DemoConfig::from_env()?;
    tracing::info!(?config, "starting event store demo");

    let now = Local::now().naive_local();
    let store = Arc::new(InMemoryEventStore::new());

    let mut producers = Vec::with_capacity(config.producers);
    for producer in 0..config.producers {
        let events = producer_events(
            producer,
            config.producers,
            config.seed_events,
            config.window,
            now,
        )?;
        let store = Arc::clone(&store);
        producers.push(tokio::task::spawn_blocking(move || {
            let count = events.len();
            for event in events {
                store.insert(event);
            }
            count
        }));
    }
    for (producer, handle) in producers.into_iter().enumerate() {
        let inserted = handle.await.context("producer task failed")?;
        tracing::debug!(producer, inserted, "producer finished");
    }
    tracing::info!(stored = store.len(), "seeded store");

    let start = now
        .checked_sub_signed(config.window)
        .context("query window starts before the earliest supported date")?;
    let mut cursor = store.query(&config.query_type, start, now);
    let mut first: Option<Event> = None;
    let mut drained = 0usize;
    while cursor.move_next() {
        if first.is_none() {
            first = cursor.current().cloned();
        }
        cursor.remove();
        drained += 1;
    }
    cursor.close();
    tracing::info!(
        query_type = %config.query_type,
        drained,
        stored = store.len(),
        "drained query cursor; store is untouched by cursor removals"
    );
    if let Some(event) = first {
        tracing::info!(first = %serde_json::to_string(&event)?, "first match");
    }

    if let Some(purge_type) = &config.purge_type {
        let removed = store.remove_all(purge_type);
        tracing::info!(
            %purge_type,
            removed,
            remaining = store.len(),
            "purged event type"
        );
    }

    Ok(())
}
