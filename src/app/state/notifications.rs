use crate::domain::models::{NotificationId, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Entering, // Drawn off-screen for one frame
    Shown,
    Leaving, // Exit animation, removal pending
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub text: String,
    pub severity: Severity,
    pub phase: NotificationPhase,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlashContainer {
    pub items: Vec<Notification>,
}

/// Stack of flash messages. The container only exists once something has
/// been shown.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotificationQueue {
    container: Option<FlashContainer>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn push(&mut self, text: &str, severity: Severity) -> NotificationId {
        self.next_id += 1;
        let id = NotificationId(self.next_id);
        self.container
            .get_or_insert_with(FlashContainer::default)
            .items
            .push(Notification {
                id,
                text: text.to_string(),
                severity,
                phase: NotificationPhase::Entering,
            });
        id
    }

    /// Starts the exit animation. Returns `false` if the notification is
    /// gone or already leaving.
    pub fn begin_dismiss(&mut self, id: NotificationId) -> bool {
        match self.get_mut(id) {
            Some(n) if n.phase != NotificationPhase::Leaving => {
                n.phase = NotificationPhase::Leaving;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: NotificationId) -> bool {
        let Some(container) = &mut self.container else {
            return false;
        };
        let before = container.items.len();
        container.items.retain(|n| n.id != id);
        container.items.len() != before
    }

    /// Moves every entering notification into view.
    pub fn settle(&mut self) {
        if let Some(container) = &mut self.container {
            for n in &mut container.items {
                if n.phase == NotificationPhase::Entering {
                    n.phase = NotificationPhase::Shown;
                }
            }
        }
    }

    #[must_use]
    pub fn items(&self) -> &[Notification] {
        self.container.as_ref().map_or(&[], |c| c.items.as_slice())
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.items().iter().find(|n| n.id == id)
    }

    #[must_use]
    pub fn has_container(&self) -> bool {
        self.container.is_some()
    }

    fn get_mut(&mut self, id: NotificationId) -> Option<&mut Notification> {
        self.container
            .as_mut()
            .and_then(|c| c.items.iter_mut().find(|n| n.id == id))
    }
}
