//! Message update handlers - thin dispatcher delegating to submodules

mod dial;
mod navigation;
mod stagger;
mod vertical;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_navigation(&message) {
            return task;
        }
        if let Some(task) = self.handle_dial(&message) {
            return task;
        }
        if let Some(task) = self.handle_stagger(&message) {
            return task;
        }
        if let Some(task) = self.handle_vertical(&message) {
            return task;
        }

        // Default: no task
        Task::none()
    }
}
