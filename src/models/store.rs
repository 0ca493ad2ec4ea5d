// models/store.rs - Store Profile
//
// The editable retailer record passed to the edit screen via navigation
// params. Edits stay local; "save" only validates and confirms.

/// Retailer profile fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreProfile {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub manager: String,
    pub license: String,
    pub active: bool,
}

impl StoreProfile {
    /// The demo store used as the navigation payload when no backend exists.
    pub fn sample() -> Self {
        Self {
            name: "Quick Stop Lotto".to_string(),
            address: "148 Delancey St, New York, NY 10002".to_string(),
            phone: "(212) 555-0147".to_string(),
            email: "owner@quickstoplotto.com".to_string(),
            manager: "Dana Reyes".to_string(),
            license: "NY-LOT-88214".to_string(),
            active: true,
        }
    }

    /// Validate the edit form, reporting the first failing field.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Store name is required".to_string());
        }
        if self.address.trim().is_empty() {
            return Err("Address is required".to_string());
        }
        if self.phone.trim().is_empty() {
            return Err("Phone number is required".to_string());
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err("A valid email address is required".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_store_is_valid() {
        assert!(StoreProfile::sample().validate().is_ok());
    }

    #[test]
    fn first_failing_field_is_reported() {
        let mut store = StoreProfile::sample();
        store.name = "  ".to_string();
        store.email = "not-an-email".to_string();
        // Name fails before email does.
        assert_eq!(store.validate().unwrap_err(), "Store name is required");

        store.name = "Quick Stop Lotto".to_string();
        assert_eq!(
            store.validate().unwrap_err(),
            "A valid email address is required"
        );
    }

    #[test]
    fn email_needs_an_at_sign() {
        let mut store = StoreProfile::sample();
        store.email = "ownerquickstoplotto.com".to_string();
        assert!(store.validate().is_err());
        store.email = "owner@quickstoplotto.com".to_string();
        assert!(store.validate().is_ok());
    }
}
