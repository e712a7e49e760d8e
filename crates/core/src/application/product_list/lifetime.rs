// View lifetime signal
// Async completions check liveness before touching view state

use tokio::sync::watch;

/// Observes whether the owning view is still mounted
#[derive(Clone)]
pub struct LivenessToken {
    rx: watch::Receiver<bool>,
}

impl LivenessToken {
    /// Check if the view has been unmounted
    pub fn is_unmounted(&self) -> bool {
        *self.rx.borrow()
    }

    /// Wait until the view is unmounted
    pub async fn unmounted(&mut self) {
        let _ = self.rx.wait_for(|gone| *gone).await;
    }
}

/// Unmount trigger held by the view
pub struct UnmountHandle {
    tx: watch::Sender<bool>,
}

impl UnmountHandle {
    /// Mark the view as gone (idempotent)
    pub fn unmount(&self) {
        self.tx.send_replace(true);
    }
}

/// Create a lifetime pair for a freshly constructed view
pub fn view_lifetime() -> (UnmountHandle, LivenessToken) {
    let (tx, rx) = watch::channel(false);
    (UnmountHandle { tx }, LivenessToken { rx })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_unmount_wakes_waiter() {
        let (handle, token) = view_lifetime();
        let mut waiter = token.clone();

        let task = tokio::spawn(async move {
            waiter.unmounted().await;
        });

        assert!(!token.is_unmounted());
        handle.unmount();

        tokio::time::timeout(Duration::from_secs(1), task)
            .await
            .unwrap()
            .unwrap();
        assert!(token.is_unmounted());
    }

    #[tokio::test]
    async fn test_wait_after_unmount_returns_immediately() {
        let (handle, mut token) = view_lifetime();
        handle.unmount();
        handle.unmount();

        tokio::time::timeout(Duration::from_millis(100), token.unmounted())
            .await
            .unwrap();
    }
}
