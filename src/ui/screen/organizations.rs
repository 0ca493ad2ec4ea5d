// ui/screen/organizations.rs - Organization Directory
//
// Read-only list with substring search and a decorative revenue sparkline
// per row. The directory is synthesized once when the screen mounts.

use iced::widget::{canvas, column, container, horizontal_space, row, text, text_input};
use iced::{Element, Length, Padding};

use lottodesk::models::organization::{search, seed_organizations};
use lottodesk::models::LotteryOrganization;

use crate::ui::palette::Palette;
use crate::ui::sparkline::Sparkline;
use crate::ui::style;

#[derive(Debug)]
pub struct State {
    query: String,
    organizations: Vec<LotteryOrganization>,
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
}

impl State {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            organizations: seed_organizations(),
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::QueryChanged(query) => self.query = query,
        }
    }

    pub fn view(&self, palette: &'static Palette) -> Element<'_, Message> {
        let matches = search(&self.organizations, &self.query);
        let total = self.organizations.len();

        let search_box = text_input("Search by name or state", &self.query)
            .padding(10)
            .size(14)
            .on_input(Message::QueryChanged);

        let mut list = column![].spacing(8);
        if matches.is_empty() {
            list = list.push(
                container(
                    text(format!("No organizations match {:?}", self.query.trim()))
                        .size(13)
                        .color(palette.text_secondary),
                )
                .padding(16)
                .width(Length::Fill)
                .style(style::card(palette)),
            );
        }
        for org in matches.iter().copied() {
            list = list.push(org_row(palette, org));
        }

        column![
            search_box,
            text(format!("{} of {total} organizations", matches.len()))
                .size(11)
                .color(palette.text_muted),
            list,
        ]
        .spacing(10)
        .into()
    }
}

fn org_row<'a>(
    palette: &'static Palette,
    org: &'a LotteryOrganization,
) -> Element<'a, Message> {
    let status_badge = container(
        text(org.status.label())
            .size(10)
            .color(palette.status_color(org.status)),
    )
    .padding(Padding::from([2, 8]))
    .style(move |_| container::Style {
        background: Some(iced::Background::Color(palette.bg_raised)),
        border: iced::Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    let header = row![
        text(org.name.as_str()).size(14).color(palette.text_primary),
        text(org.state_code.as_str()).size(11).color(palette.text_muted),
        horizontal_space(),
        status_badge,
    ]
    .spacing(8)
    .align_y(iced::Alignment::Center);

    let detail = row![
        text(format!("{} stores", org.store_count))
            .size(12)
            .color(palette.text_secondary),
        text(org.revenue_label()).size(12).color(palette.text_secondary),
        horizontal_space(),
        canvas(Sparkline::new(&org.trend, palette.accent))
            .width(Length::Fixed(96.0))
            .height(Length::Fixed(28.0)),
    ]
    .spacing(16)
    .align_y(iced::Alignment::Center);

    container(column![header, detail].spacing(8))
        .padding(14)
        .width(Length::Fill)
        .style(style::card(palette))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_filters_the_directory() {
        let mut state = State::new();
        state.update(Message::QueryChanged("ny".to_string()));
        let matches = search(&state.organizations, &state.query);
        assert!(!matches.is_empty());
        assert!(matches.len() < state.organizations.len());
        for org in matches {
            let name = org.name.to_lowercase();
            let code = org.state_code.to_lowercase();
            assert!(name.contains("ny") || code.contains("ny"), "{}", org.name);
        }
    }
}
