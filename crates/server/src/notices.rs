// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Timed dismissal of save notifications.
//!
//! At most one dismissal task is pending at a time. Scheduling a new one
//! aborts the previous task, and the ticket check in
//! `App::dismiss_notification` keeps a late task from clearing a newer
//! notification.

use staffdesk_api::{App, NoticeTicket};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

/// Schedules the automatic dismissal of notifications.
pub struct NoticeScheduler {
    /// How long a notification stays visible.
    ttl: Duration,
    /// The pending dismissal task, if any.
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl NoticeScheduler {
    /// Creates a scheduler with the given display time.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            pending: Mutex::new(None),
        }
    }

    /// Dismisses the notification identified by `ticket` once the display
    /// time has elapsed.
    pub async fn schedule(&self, app: Arc<Mutex<App>>, ticket: NoticeTicket) {
        let ttl: Duration = self.ttl;
        let task: JoinHandle<()> = tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let dismissed: bool = app.lock().await.dismiss_notification(ticket);
            debug!(
                generation = ticket.generation(),
                dismissed, "Notification timer fired"
            );
        });

        let mut pending = self.pending.lock().await;
        if let Some(previous) = pending.replace(task) {
            previous.abort();
        }
    }

    /// Aborts the pending dismissal, if any.
    pub async fn cancel(&self) {
        if let Some(task) = self.pending.lock().await.take() {
            task.abort();
            debug!("Cancelled pending notification timer");
        }
    }
}
