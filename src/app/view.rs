// SPDX-License-Identifier: MPL-2.0
//! Demo control panel, with the toast overlay stacked on top.

use super::{App, Message};
use crate::toast::{Intent, Position};
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, checkbox, pick_list, text, Column, Container, Row, Stack};
use iced::{Element, Length};

impl App {
    pub(crate) fn view(&self) -> Element<'_, Message> {
        let controls = Column::new()
            .spacing(spacing::SM)
            .push(text("Toast playground").size(typography::TITLE_SM))
            .push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(pick_list(
                        Intent::ALL,
                        Some(self.intent),
                        Message::IntentSelected,
                    ))
                    .push(pick_list(
                        Position::ALL,
                        Some(self.position),
                        Message::PositionSelected,
                    ))
                    .push(checkbox(self.filled).label("Filled").on_toggle(Message::FilledToggled)),
            )
            .push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(button(text("Show toast")).on_press(Message::SpawnToast))
                    .push(button(text("Bare text toast")).on_press(Message::SpawnBare)),
            )
            .push(
                text(format!(
                    "Store updates observed: {}",
                    self.mutations.get()
                ))
                .size(typography::CAPTION),
            );

        let base = Container::new(controls)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG);

        Stack::new()
            .push(base)
            .push(self.overlay.view().map(Message::Overlay))
            .into()
    }
}
