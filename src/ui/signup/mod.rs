//! Early-access signup: reactive form state and the form component

mod context;
mod form;

pub use context::SignupForm;
pub use form::EarlyAccessForm;
