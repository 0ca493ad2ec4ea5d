// models/mod.rs - Domain Records
//
// Everything here is plain data with local rules: no persistence, no
// networking. Screens own instances of these types for the duration of a
// mount.

pub mod organization;
pub mod payment;
pub mod store;

pub use organization::{LotteryOrganization, OrgStatus};
pub use payment::{CardBrand, CardForm, PaymentBook, PaymentMethod};
pub use store::StoreProfile;
