// ui/screen/payments.rs - Payment Methods
//
// Card list with set-default and delete, plus the add-card form. The card
// number input reformats as the user types; validation runs on submit and
// blocks with the first failing field. Deleting goes through a destructive
// confirmation owned by the app.

use iced::widget::{button, checkbox, column, container, horizontal_space, row, text, text_input};
use iced::{Element, Length, Padding};

use lottodesk::models::payment::{format_card_number, sanitize_digits};
use lottodesk::models::{CardBrand, CardForm, PaymentBook, PaymentMethod};

use crate::ui::palette::Palette;
use crate::ui::style;

#[derive(Debug)]
pub struct State {
    book: PaymentBook,
    form: CardForm,
    form_open: bool,
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleForm,
    NumberChanged(String),
    HolderChanged(String),
    ExpiryChanged(String),
    CvvChanged(String),
    MakeDefaultToggled(bool),
    Submit,
    SetDefault(u32),
    RequestDelete(u32),
}

pub enum Event {
    /// A card passed validation and was stored.
    Added { holder: String },
    /// The user asked to delete; the app must confirm first.
    ConfirmDelete { id: u32, label: String },
}

impl State {
    pub fn new() -> Self {
        let mut book = PaymentBook::new();
        // Seeded demo card so the list is never empty on first visit.
        book.add(
            PaymentMethod {
                id: 0,
                brand: CardBrand::Visa,
                last4: "4242".to_string(),
                exp_month: 8,
                exp_year: 2031,
                holder: "Dana Reyes".to_string(),
                is_default: false,
            },
            true,
        );
        Self {
            book,
            form: CardForm::default(),
            form_open: false,
            error: None,
        }
    }

    /// Called by the app once the destructive dialog is confirmed.
    pub fn remove(&mut self, id: u32) {
        self.book.remove(id);
    }

    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::ToggleForm => {
                self.form_open = !self.form_open;
                if !self.form_open {
                    self.form = CardForm::default();
                    self.error = None;
                }
            }
            Message::NumberChanged(raw) => {
                let typed = sanitize_digits(&raw, 19);
                let cap = CardBrand::detect(&typed).number_len();
                self.form.number = format_card_number(&sanitize_digits(&typed, cap));
            }
            Message::HolderChanged(value) => self.form.holder = value,
            Message::ExpiryChanged(raw) => {
                let digits = sanitize_digits(&raw, 4);
                self.form.expiry = if digits.len() > 2 {
                    format!("{}/{}", &digits[..2], &digits[2..])
                } else {
                    digits
                };
            }
            Message::CvvChanged(raw) => self.form.cvv = sanitize_digits(&raw, 4),
            Message::MakeDefaultToggled(value) => self.form.make_default = value,
            Message::Submit => match self.form.validate() {
                Ok(card) => {
                    let holder = card.holder.clone();
                    self.book.add(card, self.form.make_default);
                    self.form = CardForm::default();
                    self.form_open = false;
                    self.error = None;
                    return Some(Event::Added { holder });
                }
                Err(message) => self.error = Some(message),
            },
            Message::SetDefault(id) => {
                self.book.set_default(id);
            }
            Message::RequestDelete(id) => {
                if let Some(card) = self.book.cards().iter().find(|c| c.id == id) {
                    return Some(Event::ConfirmDelete {
                        id,
                        label: format!("{} {}", card.brand, card.masked_number()),
                    });
                }
            }
        }
        None
    }

    pub fn view(&self, palette: &'static Palette) -> Element<'_, Message> {
        let mut list = column![].spacing(8);
        if self.book.is_empty() {
            list = list.push(
                container(
                    text("No payment methods yet")
                        .size(13)
                        .color(palette.text_secondary),
                )
                .padding(16)
                .width(Length::Fill)
                .style(style::card(palette)),
            );
        }
        for card in self.book.cards() {
            list = list.push(card_row(palette, card));
        }

        let toggle_label = if self.form_open { "Close" } else { "Add card" };
        let toggle = button(text(toggle_label).size(13))
            .padding(Padding::from([10, 18]))
            .style(style::ghost_button(palette))
            .on_press(Message::ToggleForm);

        let mut content = column![
            row![
                text("Saved cards").size(12).color(palette.text_muted),
                horizontal_space(),
                toggle,
            ]
            .align_y(iced::Alignment::Center),
            list,
        ]
        .spacing(10);

        if self.form_open {
            content = content.push(self.view_form(palette));
        }

        content.into()
    }

    fn view_form(&self, palette: &'static Palette) -> Element<'_, Message> {
        let brand = self.form.brand();
        let brand_hint: Element<'_, Message> = if brand == CardBrand::Unknown {
            text("").size(11).into()
        } else {
            text(brand.label()).size(11).color(palette.accent).into()
        };

        let form = container(
            column![
                row![
                    text("Card number").size(12).color(palette.text_secondary),
                    horizontal_space(),
                    brand_hint,
                ],
                text_input("4242 4242 4242 4242", &self.form.number)
                    .padding(10)
                    .size(14)
                    .on_input(Message::NumberChanged),
                text("Cardholder name").size(12).color(palette.text_secondary),
                text_input("Name as printed", &self.form.holder)
                    .padding(10)
                    .size(14)
                    .on_input(Message::HolderChanged),
                row![
                    column![
                        text("Expiry").size(12).color(palette.text_secondary),
                        text_input("MM/YY", &self.form.expiry)
                            .padding(10)
                            .size(14)
                            .on_input(Message::ExpiryChanged),
                    ]
                    .spacing(4)
                    .width(Length::FillPortion(1)),
                    column![
                        text("CVV").size(12).color(palette.text_secondary),
                        text_input("123", &self.form.cvv)
                            .secure(true)
                            .padding(10)
                            .size(14)
                            .on_input(Message::CvvChanged),
                    ]
                    .spacing(4)
                    .width(Length::FillPortion(1)),
                ]
                .spacing(12),
                checkbox("Use as default", self.form.make_default)
                    .on_toggle(Message::MakeDefaultToggled)
                    .size(18)
                    .spacing(10),
            ]
            .spacing(8),
        )
        .padding(16)
        .width(Length::Fill)
        .style(style::card(palette));

        let mut section = column![form].spacing(12);
        if let Some(error) = &self.error {
            section = section.push(text(format!("! {error}")).size(12).color(palette.danger));
        }
        section
            .push(
                button(text("Save card").size(14))
                    .width(Length::Fill)
                    .padding(Padding::from([12, 0]))
                    .style(style::primary_button(palette))
                    .on_press(Message::Submit),
            )
            .into()
    }
}

fn card_row<'a>(palette: &'static Palette, card: &'a PaymentMethod) -> Element<'a, Message> {
    let default_badge: Element<'a, Message> = if card.is_default {
        container(text("Default").size(10).color(palette.text_on_accent))
            .padding(Padding::from([2, 8]))
            .style(move |_| container::Style {
                background: Some(iced::Background::Color(palette.accent)),
                border: iced::Border {
                    radius: 8.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            })
            .into()
    } else {
        button(text("Set default").size(11))
            .padding(Padding::from([4, 10]))
            .style(style::ghost_button(palette))
            .on_press(Message::SetDefault(card.id))
            .into()
    };

    let delete = button(text("Remove").size(11))
        .padding(Padding::from([4, 10]))
        .style(move |_, status| {
            let text_color = match status {
                iced::widget::button::Status::Hovered => palette.danger_hover,
                _ => palette.danger,
            };
            iced::widget::button::Style {
                background: None,
                text_color,
                ..Default::default()
            }
        })
        .on_press(Message::RequestDelete(card.id));

    container(
        column![
            row![
                text(card.brand.label()).size(13).color(palette.text_primary),
                text(card.masked_number()).size(13).color(palette.text_secondary),
                horizontal_space(),
                default_badge,
            ]
            .spacing(10)
            .align_y(iced::Alignment::Center),
            row![
                text(format!("{}  ·  exp {}", card.holder, card.expiry_label()))
                    .size(11)
                    .color(palette.text_muted),
                horizontal_space(),
                delete,
            ]
            .align_y(iced::Alignment::Center),
        ]
        .spacing(6),
    )
    .padding(14)
    .width(Length::Fill)
    .style(style::card(palette))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form(state: &mut State) {
        state.update(Message::ToggleForm);
        state.update(Message::NumberChanged("4000056655665556".to_string()));
        state.update(Message::HolderChanged("Ada Lovelace".to_string()));
        state.update(Message::ExpiryChanged("1239".to_string()));
        state.update(Message::CvvChanged("321".to_string()));
    }

    #[test]
    fn number_input_reformats_live() {
        let mut state = State::new();
        state.update(Message::NumberChanged("4242-4242-4242-4242".to_string()));
        assert_eq!(state.form.number, "4242 4242 4242 4242");
    }

    #[test]
    fn expiry_input_inserts_separator() {
        let mut state = State::new();
        state.update(Message::ExpiryChanged("1239".to_string()));
        assert_eq!(state.form.expiry, "12/39");
        state.update(Message::ExpiryChanged("12".to_string()));
        assert_eq!(state.form.expiry, "12");
    }

    #[test]
    fn submit_adds_card_and_resets_form() {
        let mut state = State::new();
        filled_form(&mut state);
        match state.update(Message::Submit) {
            Some(Event::Added { holder }) => assert_eq!(holder, "Ada Lovelace"),
            _ => panic!("expected add event"),
        }
        assert_eq!(state.book.len(), 2);
        assert!(!state.form_open);
        assert!(state.form.number.is_empty());
    }

    #[test]
    fn invalid_submit_blocks_with_message() {
        let mut state = State::new();
        filled_form(&mut state);
        state.update(Message::CvvChanged("12".to_string()));
        assert!(state.update(Message::Submit).is_none());
        assert!(state.error.as_deref().unwrap().contains("Security code"));
        assert_eq!(state.book.len(), 1);
    }

    #[test]
    fn delete_goes_through_confirmation() {
        let mut state = State::new();
        let id = state.book.cards()[0].id;
        match state.update(Message::RequestDelete(id)) {
            Some(Event::ConfirmDelete { id: got, label }) => {
                assert_eq!(got, id);
                assert!(label.contains("Visa"));
            }
            _ => panic!("expected confirm event"),
        }
        // Nothing removed until the app confirms.
        assert_eq!(state.book.len(), 1);
        state.remove(id);
        assert!(state.book.is_empty());
    }
}
