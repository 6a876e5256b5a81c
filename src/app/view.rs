// src/app/view.rs
//! Application view rendering

use iced::widget::{column, container, scrollable};
use iced::{Element, Fill, Padding};

use super::App;
use super::message::Message;
use crate::ui::components::{Screen, screen_tabs};
use crate::ui::{pages, theme};

impl App {
    /// Build the view for the active screen
    pub fn view(&self) -> Element<'_, Message> {
        let palette = self.theme();

        let page = match self.ui.screen {
            Screen::Dial => pages::dial::view(&self.dial, &palette),
            Screen::Stagger => pages::stagger::view(&self.stagger, &palette),
            Screen::Vertical => pages::vertical::view(&self.vertical, &palette),
        };

        let content = column![
            container(screen_tabs::view(self.ui.screen)).center_x(Fill),
            scrollable(container(page).padding(Padding::new(8.0).bottom(24.0))).height(Fill),
        ]
        .spacing(20)
        .padding(Padding::new(24.0).top(20.0));

        container(content)
            .width(Fill)
            .height(Fill)
            .style(theme::main_content)
            .into()
    }
}
