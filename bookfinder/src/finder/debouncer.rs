use std::{pin::Pin, time::Duration};
use tokio::time::{Instant, Sleep};

// NOTE: `settled` is cancellation safe; dropping it before the deadline keeps the pending value
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<T>,
    sleep: Pin<Box<Sleep>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            sleep: Box::pin(tokio::time::sleep(delay)),
        }
    }

    pub fn schedule(&mut self, value: T) {
        self.pending = Some(value);
        self.sleep.as_mut().reset(Instant::now() + self.delay);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub async fn settled(&mut self) -> T {
        if self.pending.is_none() {
            return std::future::pending().await;
        }

        self.sleep.as_mut().await;

        match self.pending.take() {
            Some(value) => value,
            None => std::future::pending().await,
        }
    }
}
