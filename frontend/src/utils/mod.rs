pub mod locale;
pub mod session_flags;
pub mod subscription;
pub mod theme;

pub use locale::{BrowserNavigator, LocaleSwitcher, Navigator};
pub use session_flags::{SessionFlagWatcher, UserAttributes, UserStream};
pub use subscription::Subscription;
pub use theme::{BodyClass, LocalThemeStorage, ThemeController, ThemeRoot, ThemeStorage};
