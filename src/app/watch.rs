use super::events::Event;
use crate::options::FileOptionsStore;
use std::time::Duration;
use tokio::sync::mpsc;

/// Poll the options file and report every change of its modification time.
///
/// The task ends when the receiving side goes away.
pub fn spawn_options_watcher(
    store: FileOptionsStore,
    interval: Duration,
    tx: mpsc::Sender<Event>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        let mut last = store.fingerprint();

        loop {
            ticker.tick().await;
            let current = store.fingerprint();
            if current == last {
                continue;
            }
            last = current;
            tracing::debug!("Options changed: {}", store.path().display());
            if tx.send(Event::OptionsChanged).await.is_err() {
                break;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{OptionsStore, ThemeOptions};

    #[tokio::test]
    async fn test_reports_change() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileOptionsStore::new(dir.path().join("options.toml"));
        let (tx, mut rx) = mpsc::channel(4);
        let handle = spawn_options_watcher(store.clone(), Duration::from_millis(10), tx);
        // Let the watcher take its first reading before the file appears.
        tokio::time::sleep(Duration::from_millis(50)).await;

        store.save(&ThemeOptions::default()).unwrap();
        let ev = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .unwrap();
        assert_eq!(ev, Some(Event::OptionsChanged));

        drop(rx);
        handle.abort();
    }
}
