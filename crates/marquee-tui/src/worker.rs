//! Background worker for OMDb searches.
//!
//! The UI thread never blocks on the network. It sends a [`WorkerCommand`]
//! per query change; the worker waits out the debounce window, keeps only
//! the newest search of a burst, runs it and reports back with the id it
//! was issued under.

use marquee_core::{MovieSearch, SearchOutcome};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

pub enum WorkerCommand {
    Search { id: u64, query: String },
    Quit,
}

pub enum WorkerEvent {
    SearchFinished {
        id: u64,
        query: String,
        outcome: Result<SearchOutcome, String>,
    },
}

pub fn start_worker(
    searcher: Box<dyn MovieSearch>,
    debounce: Duration,
    cmd_rx: Receiver<WorkerCommand>,
    evt_tx: Sender<WorkerEvent>,
) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || worker_loop(searcher.as_ref(), debounce, cmd_rx, evt_tx))
}

fn worker_loop(
    searcher: &dyn MovieSearch,
    debounce: Duration,
    cmd_rx: Receiver<WorkerCommand>,
    evt_tx: Sender<WorkerEvent>,
) {
    loop {
        let mut pending = match cmd_rx.recv() {
            Ok(WorkerCommand::Search { id, query }) => (id, query),
            Ok(WorkerCommand::Quit) | Err(_) => break,
        };

        // Coalesce bursts: keep only the latest search.
        while let Ok(cmd) = cmd_rx.try_recv() {
            match cmd {
                WorkerCommand::Search { id, query } => pending = (id, query),
                WorkerCommand::Quit => return,
            }
        }

        // Debounce: restart the quiet period on every newer search.
        if !debounce.is_zero() {
            loop {
                match cmd_rx.recv_timeout(debounce) {
                    Ok(WorkerCommand::Search { id, query }) => pending = (id, query),
                    Ok(WorkerCommand::Quit) => return,
                    Err(RecvTimeoutError::Timeout) => break,
                    Err(RecvTimeoutError::Disconnected) => return,
                }
            }
        }

        let (id, query) = pending;
        let outcome = match searcher.search(&query) {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                tracing::warn!("Search for {:?} failed: {}", query, e);
                Err(format!("Search error: {e}"))
            }
        };

        if evt_tx
            .send(WorkerEvent::SearchFinished { id, query, outcome })
            .is_err()
        {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::{Error, Movie};
    use std::sync::mpsc;
    use std::sync::{Arc, Mutex};

    struct FakeSearch {
        seen: Arc<Mutex<Vec<String>>>,
    }

    impl MovieSearch for FakeSearch {
        fn search(&self, query: &str) -> marquee_core::Result<SearchOutcome> {
            self.seen.lock().unwrap().push(query.to_string());
            match query {
                "offline" => Err(Error::Other("connection refused".to_string())),
                "" => Ok(SearchOutcome::NoResults {
                    reason: Some("Incorrect IMDb ID.".to_string()),
                }),
                _ => Ok(SearchOutcome::Found {
                    movies: vec![Movie {
                        title: query.to_string(),
                        year: "2000".to_string(),
                        imdb_id: format!("tt-{query}"),
                        kind: "movie".to_string(),
                        poster: "N/A".to_string(),
                    }],
                    total: Some(1),
                }),
            }
        }
    }

    #[test]
    fn burst_is_coalesced_to_latest_query() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (evt_tx, evt_rx) = mpsc::channel();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for (id, query) in [(1, "b"), (2, "ba"), (3, "bat")] {
            cmd_tx
                .send(WorkerCommand::Search {
                    id,
                    query: query.to_string(),
                })
                .unwrap();
        }
        cmd_tx.send(WorkerCommand::Quit).unwrap();

        let handle = start_worker(
            Box::new(FakeSearch { seen: seen.clone() }),
            Duration::ZERO,
            cmd_rx,
            evt_tx,
        );
        handle.join().unwrap();

        // Quit arrived in the same burst, so nothing ran.
        assert!(seen.lock().unwrap().is_empty());
        assert!(evt_rx.try_recv().is_err());
    }

    #[test]
    fn latest_search_runs_and_reports_its_id() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (evt_tx, evt_rx) = mpsc::channel();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for (id, query) in [(1, "b"), (2, "ba"), (3, "bat")] {
            cmd_tx
                .send(WorkerCommand::Search {
                    id,
                    query: query.to_string(),
                })
                .unwrap();
        }

        let handle = start_worker(
            Box::new(FakeSearch { seen: seen.clone() }),
            Duration::ZERO,
            cmd_rx,
            evt_tx,
        );

        let event = evt_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        let WorkerEvent::SearchFinished { id, query, outcome } = event;
        assert_eq!(id, 3);
        assert_eq!(query, "bat");
        assert!(matches!(outcome, Ok(SearchOutcome::Found { .. })));
        assert_eq!(*seen.lock().unwrap(), vec!["bat".to_string()]);

        cmd_tx.send(WorkerCommand::Quit).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn debounce_waits_for_quiet_period() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (evt_tx, evt_rx) = mpsc::channel();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let handle = start_worker(
            Box::new(FakeSearch { seen: seen.clone() }),
            Duration::from_millis(200),
            cmd_rx,
            evt_tx,
        );

        cmd_tx
            .send(WorkerCommand::Search {
                id: 1,
                query: "sta".to_string(),
            })
            .unwrap();
        std::thread::sleep(Duration::from_millis(20));
        cmd_tx
            .send(WorkerCommand::Search {
                id: 2,
                query: "star".to_string(),
            })
            .unwrap();

        let WorkerEvent::SearchFinished { id, .. } =
            evt_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(id, 2);
        assert_eq!(*seen.lock().unwrap(), vec!["star".to_string()]);

        drop(cmd_tx);
        handle.join().unwrap();
    }

    #[test]
    fn empty_query_is_sent_and_failures_are_reported() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (evt_tx, evt_rx) = mpsc::channel();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let handle = start_worker(
            Box::new(FakeSearch { seen: seen.clone() }),
            Duration::ZERO,
            cmd_rx,
            evt_tx,
        );

        cmd_tx
            .send(WorkerCommand::Search {
                id: 1,
                query: String::new(),
            })
            .unwrap();
        let WorkerEvent::SearchFinished { outcome, .. } =
            evt_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(matches!(outcome, Ok(SearchOutcome::NoResults { .. })));

        cmd_tx
            .send(WorkerCommand::Search {
                id: 2,
                query: "offline".to_string(),
            })
            .unwrap();
        let WorkerEvent::SearchFinished { id, outcome, .. } =
            evt_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(id, 2);
        let message = outcome.unwrap_err();
        assert!(message.contains("connection refused"));

        assert_eq!(
            *seen.lock().unwrap(),
            vec![String::new(), "offline".to_string()]
        );

        cmd_tx.send(WorkerCommand::Quit).unwrap();
        handle.join().unwrap();
    }
}
