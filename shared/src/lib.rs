pub mod error;
pub mod locale;
pub mod types;

pub use error::NavbarError;
pub use locale::{locale_of, switch_locale_url};
pub use types::*;
