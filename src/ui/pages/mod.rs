//! Application pages module
//!
//! - Home (the coming-soon page)
//! - Not found (404 fallback)

mod home;
mod not_found;

pub use home::HomePage;
pub use not_found::NotFoundPage;
