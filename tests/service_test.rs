//! Integration tests for the ingest-and-query cycle

use async_trait::async_trait;
use buenbit_ticker::error::TickerError;
use buenbit_ticker::quote::{Quote, QuoteProvider};
use buenbit_ticker::store::{MemoryStore, SampleStore};
use buenbit_ticker::ticker::TickerService;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Replays a fixed script of fetch outcomes, one per call
struct ScriptedQuotes {
    script: Vec<Result<Quote, &'static str>>,
    cursor: AtomicUsize,
}

impl ScriptedQuotes {
    fn new(script: Vec<Result<Quote, &'static str>>) -> Self {
        Self {
            script,
            cursor: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl QuoteProvider for ScriptedQuotes {
    async fn fetch(&self, _market: &str) -> Result<Quote, TickerError> {
        let index = self.cursor.fetch_add(1, Ordering::SeqCst);
        match self.script.get(index) {
            Some(Ok(quote)) => Ok(*quote),
            Some(Err(msg)) => Err(TickerError::MalformedResponse((*msg).to_string())),
            None => Err(TickerError::MalformedResponse("script ended".to_string())),
        }
    }
}

fn quote(price: f64, timestamp: i64) -> Result<Quote, &'static str> {
    Ok(Quote { price, timestamp })
}

#[tokio::test]
async fn test_full_cycle_preserves_order_and_content() {
    let store = Arc::new(MemoryStore::new());
    let quotes = Arc::new(ScriptedQuotes::new(vec![
        quote(82000000.0, 100),
        quote(78000000.0, 110),
        quote(85000000.0, 120),
    ]));
    let service = TickerService::new(store, quotes);

    for _ in 0..3 {
        service.ingest("btcars").await.unwrap();
    }

    let all = service.get_list(None, None).await.unwrap();
    let timestamps: Vec<i64> = all.iter().map(|s| s.timestamp).collect();
    assert_eq!(timestamps, vec![100, 110, 120]);

    let average = service.get_average(100.0, 120.0).await.unwrap();
    assert_eq!(average, 81666666.67);

    let sample = service.get_price(110.0).await.unwrap().unwrap();
    assert_eq!(sample.price, 78000000.0);
}

#[tokio::test]
async fn test_failed_ticks_do_not_pollute_the_store() {
    let store = Arc::new(MemoryStore::new());
    let quotes = Arc::new(ScriptedQuotes::new(vec![
        quote(100.0, 10),
        Err("market btcars absent from ticker body"),
        quote(200.0, 30),
    ]));
    let service = TickerService::new(store, quotes);

    assert!(service.ingest("btcars").await.is_ok());
    assert!(matches!(
        service.ingest("btcars").await,
        Err(TickerError::MalformedResponse(_))
    ));
    assert!(service.ingest("btcars").await.is_ok());

    let all = service.get_list(None, None).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].price, 100.0);
    assert_eq!(all[1].price, 200.0);
}

#[tokio::test]
async fn test_bounded_queries_filter_the_full_range() {
    let store = Arc::new(MemoryStore::new());
    for ts in 1..=10 {
        store.insert(ts, ts as f64).await.unwrap();
    }
    let service = TickerService::new(store, Arc::new(ScriptedQuotes::new(vec![])));

    let full = service.get_list(None, None).await.unwrap();
    let window = service.get_list(Some(3.0), Some(7.0)).await.unwrap();

    let expected: Vec<_> = full
        .iter()
        .filter(|s| 3 <= s.timestamp && s.timestamp <= 7)
        .copied()
        .collect();
    assert_eq!(window, expected);

    // Repeated calls observe the same result.
    let again = service.get_list(Some(3.0), Some(7.0)).await.unwrap();
    assert_eq!(window, again);
}

#[tokio::test]
async fn test_concurrent_readers_during_writes() {
    let store = Arc::new(MemoryStore::new());
    let writer_store = Arc::clone(&store);

    let writer = tokio::spawn(async move {
        for ts in 0..200 {
            writer_store.insert(ts, ts as f64).await.unwrap();
        }
    });

    let reader_store: Arc<dyn SampleStore> = store.clone();
    let reader = tokio::spawn(async move {
        for _ in 0..50 {
            let snapshot = reader_store
                .range_query(f64::NEG_INFINITY, f64::INFINITY)
                .await
                .unwrap();
            // Whatever the snapshot, it is internally ordered.
            for pair in snapshot.windows(2) {
                assert!(pair[0].timestamp <= pair[1].timestamp);
            }
        }
    });

    writer.await.unwrap();
    reader.await.unwrap();

    let all = store
        .range_query(f64::NEG_INFINITY, f64::INFINITY)
        .await
        .unwrap();
    assert_eq!(all.len(), 200);
}
