// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The global notification area.
//!
//! At most one notification is shown at a time. Each one is stamped with a
//! generation number; a dismissal carries the ticket of the notification it
//! was scheduled for and is ignored once a newer notification (or a
//! navigation) has replaced it.

use serde::Serialize;

/// The kind of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// Something was saved.
    Success,
    /// Neutral information.
    Info,
    /// Something went wrong.
    Error,
}

impl NoticeKind {
    /// Returns the CSS class of the alert box.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Info => "alert-info",
            Self::Error => "alert-danger",
        }
    }
}

/// A visible notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// The kind.
    pub kind: NoticeKind,
    /// The text.
    pub message: String,
}

/// Identifies one shown notification for a later dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeTicket {
    generation: u64,
}

impl NoticeTicket {
    /// Returns the generation this ticket was issued for.
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.generation
    }
}

/// Holds the current notification, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationArea {
    current: Option<Notice>,
    generation: u64,
}

impl NotificationArea {
    /// Creates an empty notification area.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: None,
            generation: 0,
        }
    }

    /// Replaces any visible notification and returns the ticket that may dismiss it.
    pub fn show(&mut self, kind: NoticeKind, message: String) -> NoticeTicket {
        self.generation = self.generation.wrapping_add(1);
        self.current = Some(Notice { kind, message });
        NoticeTicket {
            generation: self.generation,
        }
    }

    /// Clears the notification immediately. Outstanding tickets become stale.
    pub fn clear(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.current = None;
    }

    /// Clears the notification if `ticket` still refers to it.
    ///
    /// Returns `true` if a notification was removed.
    pub fn dismiss(&mut self, ticket: NoticeTicket) -> bool {
        if ticket.generation != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    /// Returns the visible notification.
    #[must_use]
    pub const fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}
