// models/payment.rs - Payment Methods
//
// In-memory card collection with a single-default invariant, plus the
// add-card form with its ad-hoc validation. Nothing here touches a payment
// processor; cards live only for the process lifetime.

use std::fmt;

use chrono::{Datelike, Local};

/// Card network detected from the number prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardBrand {
    Visa,
    Mastercard,
    Amex,
    Discover,
    Unknown,
}

impl CardBrand {
    /// Detect the brand from the leading digits of a sanitized number.
    pub fn detect(digits: &str) -> Self {
        let prefix2: u32 = digits.get(..2).and_then(|p| p.parse().ok()).unwrap_or(0);
        let prefix4: u32 = digits.get(..4).and_then(|p| p.parse().ok()).unwrap_or(0);
        if digits.starts_with('4') {
            CardBrand::Visa
        } else if (51..=55).contains(&prefix2) || (22..=27).contains(&prefix2) {
            CardBrand::Mastercard
        } else if prefix2 == 34 || prefix2 == 37 {
            CardBrand::Amex
        } else if prefix4 == 6011 || prefix2 == 65 {
            CardBrand::Discover
        } else {
            CardBrand::Unknown
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CardBrand::Visa => "Visa",
            CardBrand::Mastercard => "Mastercard",
            CardBrand::Amex => "American Express",
            CardBrand::Discover => "Discover",
            CardBrand::Unknown => "Card",
        }
    }

    /// Expected length of the card number for this brand.
    pub fn number_len(self) -> usize {
        match self {
            CardBrand::Amex => 15,
            _ => 16,
        }
    }

    /// Expected length of the security code for this brand.
    pub fn cvv_len(self) -> usize {
        match self {
            CardBrand::Amex => 4,
            _ => 3,
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Keep only ASCII digits, capped at the longest accepted number.
pub fn sanitize_digits(input: &str, max_len: usize) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(max_len)
        .collect()
}

/// Group a sanitized number for display: 4-4-4-4, or 4-6-5 for amex.
pub fn format_card_number(digits: &str) -> String {
    let brand = CardBrand::detect(digits);
    let groups: &[usize] = match brand {
        CardBrand::Amex => &[4, 6, 5],
        _ => &[4, 4, 4, 4],
    };
    let mut out = String::with_capacity(digits.len() + groups.len());
    let mut rest = digits;
    for &len in groups {
        if rest.is_empty() {
            break;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        let take = len.min(rest.len());
        out.push_str(&rest[..take]);
        rest = &rest[take..];
    }
    out
}

/// A stored payment method. `last4` is all we keep of the number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentMethod {
    pub id: u32,
    pub brand: CardBrand,
    pub last4: String,
    pub exp_month: u32,
    pub exp_year: u32,
    pub holder: String,
    pub is_default: bool,
}

impl PaymentMethod {
    pub fn masked_number(&self) -> String {
        format!("\u{2022}\u{2022}\u{2022}\u{2022} {}", self.last4)
    }

    pub fn expiry_label(&self) -> String {
        format!("{:02}/{:02}", self.exp_month, self.exp_year % 100)
    }
}

/// Card collection. Invariant: at most one entry has `is_default` set, and
/// after an add or set-default on a non-empty book exactly one does.
#[derive(Debug, Clone, Default)]
pub struct PaymentBook {
    cards: Vec<PaymentMethod>,
    next_id: u32,
}

impl PaymentBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[PaymentMethod] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn default_card(&self) -> Option<&PaymentMethod> {
        self.cards.iter().find(|c| c.is_default)
    }

    /// Insert a card, assigning its id. The first card always becomes the
    /// default; otherwise `make_default` decides.
    pub fn add(&mut self, mut card: PaymentMethod, make_default: bool) -> u32 {
        self.next_id += 1;
        card.id = self.next_id;
        card.is_default = make_default || self.cards.is_empty();
        if card.is_default {
            for existing in &mut self.cards {
                existing.is_default = false;
            }
        }
        self.cards.push(card);
        self.next_id
    }

    /// Remove a card. If the default was removed, the first remaining card
    /// is promoted so checkout flows always have a selection.
    pub fn remove(&mut self, id: u32) -> Option<PaymentMethod> {
        let idx = self.cards.iter().position(|c| c.id == id)?;
        let removed = self.cards.remove(idx);
        if removed.is_default {
            if let Some(first) = self.cards.first_mut() {
                first.is_default = true;
            }
        }
        Some(removed)
    }

    pub fn set_default(&mut self, id: u32) -> bool {
        if !self.cards.iter().any(|c| c.id == id) {
            return false;
        }
        for card in &mut self.cards {
            card.is_default = card.id == id;
        }
        true
    }
}

/// Local add-card form state. Inputs are kept as the user typed them (after
/// light sanitizing); validation happens on submit.
#[derive(Debug, Clone, Default)]
pub struct CardForm {
    pub number: String,
    pub holder: String,
    pub expiry: String,
    pub cvv: String,
    pub make_default: bool,
}

impl CardForm {
    /// Brand implied by the digits typed so far.
    pub fn brand(&self) -> CardBrand {
        CardBrand::detect(&sanitize_digits(&self.number, 16))
    }

    /// Validate the form and build the method to store.
    ///
    /// Returns the first failing field as a user-facing message, matching the
    /// blocking-alert behavior of the screens.
    pub fn validate(&self) -> Result<PaymentMethod, String> {
        let digits = sanitize_digits(&self.number, 19);
        let brand = CardBrand::detect(&digits);
        if digits.len() != brand.number_len() {
            return Err(format!(
                "Card number must be {} digits",
                brand.number_len()
            ));
        }
        if self.holder.trim().is_empty() {
            return Err("Cardholder name is required".to_string());
        }
        let (exp_month, exp_year) = parse_expiry(&self.expiry)?;
        let cvv = sanitize_digits(&self.cvv, 4);
        if cvv.len() != brand.cvv_len() {
            return Err(format!("Security code must be {} digits", brand.cvv_len()));
        }
        Ok(PaymentMethod {
            id: 0,
            brand,
            last4: digits[digits.len() - 4..].to_string(),
            exp_month,
            exp_year,
            holder: self.holder.trim().to_string(),
            is_default: false,
        })
    }
}

/// Parse an `MM/YY` expiry and reject dates already past.
pub fn parse_expiry(input: &str) -> Result<(u32, u32), String> {
    let (month_raw, year_raw) = input
        .trim()
        .split_once('/')
        .ok_or_else(|| "Expiry must be in MM/YY format".to_string())?;
    let month: u32 = month_raw
        .parse()
        .map_err(|_| "Expiry must be in MM/YY format".to_string())?;
    let year2: u32 = year_raw
        .trim()
        .parse()
        .map_err(|_| "Expiry must be in MM/YY format".to_string())?;
    if !(1..=12).contains(&month) || year_raw.trim().len() != 2 {
        return Err("Expiry must be in MM/YY format".to_string());
    }
    let year = 2000 + year2;
    let now = Local::now();
    if year < now.year() as u32 || (year == now.year() as u32 && month < now.month()) {
        return Err("Card has expired".to_string());
    }
    Ok((month, year))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(holder: &str) -> PaymentMethod {
        PaymentMethod {
            id: 0,
            brand: CardBrand::Visa,
            last4: "4242".to_string(),
            exp_month: 12,
            exp_year: 2039,
            holder: holder.to_string(),
            is_default: false,
        }
    }

    fn default_count(book: &PaymentBook) -> usize {
        book.cards().iter().filter(|c| c.is_default).count()
    }

    #[test]
    fn detects_brands_from_prefix() {
        assert_eq!(CardBrand::detect("4242424242424242"), CardBrand::Visa);
        assert_eq!(CardBrand::detect("5500005555555559"), CardBrand::Mastercard);
        assert_eq!(CardBrand::detect("2221000000000009"), CardBrand::Mastercard);
        assert_eq!(CardBrand::detect("378282246310005"), CardBrand::Amex);
        assert_eq!(CardBrand::detect("6011000990139424"), CardBrand::Discover);
        assert_eq!(CardBrand::detect("9999888877776666"), CardBrand::Unknown);
    }

    #[test]
    fn formats_visa_in_groups_of_four() {
        assert_eq!(format_card_number("4242424242424242"), "4242 4242 4242 4242");
        assert_eq!(format_card_number("42424"), "4242 4");
    }

    #[test]
    fn formats_amex_four_six_five() {
        assert_eq!(format_card_number("378282246310005"), "3782 822463 10005");
    }

    #[test]
    fn first_card_becomes_default() {
        let mut book = PaymentBook::new();
        book.add(card("Ada"), false);
        assert_eq!(default_count(&book), 1);
        assert_eq!(book.default_card().unwrap().holder, "Ada");
    }

    #[test]
    fn add_and_set_default_keep_exactly_one_default() {
        let mut book = PaymentBook::new();
        let a = book.add(card("Ada"), false);
        let b = book.add(card("Grace"), true);
        assert_eq!(default_count(&book), 1);
        assert_eq!(book.default_card().unwrap().id, b);

        book.set_default(a);
        assert_eq!(default_count(&book), 1);
        assert_eq!(book.default_card().unwrap().id, a);

        book.add(card("Edsger"), false);
        assert_eq!(default_count(&book), 1);
    }

    #[test]
    fn removing_default_promotes_another() {
        let mut book = PaymentBook::new();
        let a = book.add(card("Ada"), false);
        book.add(card("Grace"), false);
        book.remove(a);
        assert_eq!(default_count(&book), 1);
    }

    #[test]
    fn removing_last_card_leaves_empty_book() {
        let mut book = PaymentBook::new();
        let a = book.add(card("Ada"), false);
        book.remove(a);
        assert!(book.is_empty());
        assert!(book.default_card().is_none());
    }

    #[test]
    fn set_default_on_unknown_id_is_a_no_op() {
        let mut book = PaymentBook::new();
        let a = book.add(card("Ada"), false);
        assert!(!book.set_default(a + 99));
        assert_eq!(book.default_card().unwrap().id, a);
    }

    #[test]
    fn short_number_and_cvv_are_rejected_then_accepted() {
        let mut form = CardForm {
            number: "4242 4242 4242 424".to_string(), // 15 digits, visa wants 16
            holder: "Ada Lovelace".to_string(),
            expiry: "12/39".to_string(),
            cvv: "123".to_string(),
            ..CardForm::default()
        };
        let err = form.validate().unwrap_err();
        assert!(err.contains("16 digits"), "got: {err}");

        form.number = "4242 4242 4242 4242".to_string();
        let method = form.validate().expect("valid after correction");
        assert_eq!(method.brand, CardBrand::Visa);
        assert_eq!(method.last4, "4242");
    }

    #[test]
    fn validation_names_the_first_failing_field() {
        let form = CardForm {
            number: "4242424242424242".to_string(),
            holder: "  ".to_string(),
            expiry: "12/39".to_string(),
            cvv: "123".to_string(),
            ..CardForm::default()
        };
        assert_eq!(form.validate().unwrap_err(), "Cardholder name is required");
    }

    #[test]
    fn expiry_parsing_rejects_bad_shapes() {
        assert!(parse_expiry("1239").is_err());
        assert!(parse_expiry("13/39").is_err());
        assert!(parse_expiry("00/39").is_err());
        assert!(parse_expiry("12/2039").is_err());
        assert!(parse_expiry("01/20").is_err(), "past date must be rejected");
        assert_eq!(parse_expiry("12/39"), Ok((12, 2039)));
        assert_eq!(parse_expiry(" 06/33 "), Ok((6, 2033)));
    }
}
