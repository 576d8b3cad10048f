use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Fire-and-forget effects that run after a delay on their own task and are
/// aborted when the session shuts down.
#[derive(Clone, Default)]
pub struct DeferredTasks {
    handles: Arc<Mutex<Vec<JoinHandle<()>>>>,
}

impl DeferredTasks {
    pub fn schedule<F>(&self, delay: Duration, effect: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        // The deadline is fixed now, not when the task first gets polled.
        let sleep = tokio::time::sleep(delay);
        let handle = tokio::spawn(async move {
            sleep.await;
            effect.await;
        });
        let mut handles = self.handles.lock().unwrap_or_else(PoisonError::into_inner);
        handles.retain(|handle| !handle.is_finished());
        handles.push(handle);
    }

    pub fn pending(&self) -> usize {
        self.handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    pub fn abort_all(&self) {
        let mut handles = self.handles.lock().unwrap_or_else(PoisonError::into_inner);
        for handle in handles.drain(..) {
            handle.abort();
        }
    }
}
