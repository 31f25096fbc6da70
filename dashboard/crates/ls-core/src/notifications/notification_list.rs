use crate::{DisplayNotification, NotificationId};

use std::collections::VecDeque;

use chrono::{DateTime, Utc};

/// Maximum notifications kept; older entries are evicted on push.
pub const NOTIFICATION_CAPACITY: usize = 20;

/// Most-recent-first notification feed behind the bell icon.
#[derive(Debug, Clone, Default)]
pub struct NotificationList {
    items: VecDeque<DisplayNotification>,
}

impl NotificationList {
    pub fn new() -> Self {
        Self {
            items: VecDeque::with_capacity(NOTIFICATION_CAPACITY),
        }
    }

    /// Prepend, evicting the oldest entries beyond capacity.
    pub fn push(&mut self, notification: DisplayNotification) {
        self.items.push_front(notification);
        self.items.truncate(NOTIFICATION_CAPACITY);
    }

    /// No-op when `id` is not in the list.
    pub fn mark_read(&mut self, id: NotificationId) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.read = true;
        }
    }

    pub fn mark_all_read(&mut self) {
        self.items.iter_mut().for_each(|item| item.read = true);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|item| !item.read).count()
    }

    pub fn get(&self, id: NotificationId) -> Option<&DisplayNotification> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &DisplayNotification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn refresh_relative_times(&mut self, now: DateTime<Utc>) {
        self.items
            .iter_mut()
            .for_each(|item| item.refresh_relative_time(now));
    }
}
