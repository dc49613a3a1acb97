//! Driving an async task while draining its event channel.

use std::future::Future;

use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};

/// Upper bound on draining after the task completes, in case a sender
/// outlives it.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Run `task` to completion, calling `on_event` for each event received on
/// `event_rx`. Returns the task's result once the channel is drained.
pub(crate) async fn run_with_events<F, E, R>(
    task: F,
    mut event_rx: mpsc::UnboundedReceiver<E>,
    mut on_event: impl FnMut(E),
) -> R
where
    F: Future<Output = R>,
{
    tokio::pin!(task);

    let result = loop {
        tokio::select! {
            r = &mut task => break Some(r),
            event = event_rx.recv() => match event {
                Some(e) => on_event(e),
                None => break None,
            },
        }
    };

    let Some(result) = result else {
        // Channel closed first; nothing more to drain.
        return task.await;
    };

    let deadline = Instant::now() + DRAIN_TIMEOUT;
    loop {
        match tokio::time::timeout_at(deadline, event_rx.recv()).await {
            Ok(Some(e)) => on_event(e),
            Ok(None) => break,
            Err(_) => {
                log::debug!("Event drain timed out after {}s", DRAIN_TIMEOUT.as_secs());
                break;
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delivers_events_sent_before_completion() {
        let (tx, rx) = mpsc::unbounded_channel();
        let task = async move {
            for i in 0..3 {
                let _ = tx.send(i);
            }
            "done"
        };

        let mut seen = Vec::new();
        let result = run_with_events(task, rx, |e| seen.push(e)).await;

        assert_eq!(result, "done");
        assert_eq!(seen, [0, 1, 2]);
    }
}
