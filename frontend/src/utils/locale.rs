use shared::{locale_of, switch_locale_url, Locale, NavbarError};
use std::cell::Cell;

/// Access to the page URL.
pub trait Navigator {
    /// Path, query and fragment of the current page, without the origin.
    fn current_url(&self) -> String;

    /// Load `url` as a fresh document.
    fn navigate_full(&self, url: &str) -> Result<(), NavbarError>;
}

/// `window.location` backed navigator. Navigation goes through
/// `location.assign`, so the whole application (and its localized bundles)
/// is reloaded.
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn current_url(&self) -> String {
        let Some(location) = web_sys::window().map(|w| w.location()) else {
            return String::new();
        };

        let pathname = location.pathname().unwrap_or_default();
        let search = location.search().unwrap_or_default();
        let hash = location.hash().unwrap_or_default();
        format!("{}{}{}", pathname, search, hash)
    }

    fn navigate_full(&self, url: &str) -> Result<(), NavbarError> {
        web_sys::window()
            .ok_or_else(|| NavbarError::Navigation("no window".to_string()))?
            .location()
            .assign(url)
            .map_err(|e| NavbarError::Navigation(format!("{:?}", e)))
    }
}

pub struct LocaleSwitcher<N> {
    navigator: N,
    locale: Cell<Locale>,
}

impl<N: Navigator> LocaleSwitcher<N> {
    /// Derive the active locale from the navigator's current URL.
    pub fn new(navigator: N) -> Self {
        let locale = locale_of(&navigator.current_url());
        Self {
            navigator,
            locale: Cell::new(locale),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    /// Move the current page to the other locale.
    ///
    /// The tracked locale follows the URL handed to the navigator even when
    /// the navigation itself reports an error.
    pub fn switch(&self) -> Result<String, NavbarError> {
        let current = self.locale.get();
        let (url, target) = switch_locale_url(&self.navigator.current_url(), current);
        self.locale.set(target);

        log::info!("Switching locale {} -> {}: {}", current.as_str(), target.as_str(), url);
        self.navigator.navigate_full(&url).map_err(|err| {
            log::error!("Failed to navigate to {}: {}", url, err);
            err
        })?;

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeNavigator {
        url: Rc<RefCell<String>>,
        visited: Rc<RefCell<Vec<String>>>,
        blocked: bool,
    }

    impl FakeNavigator {
        fn at(url: &str) -> Self {
            let navigator = Self::default();
            *navigator.url.borrow_mut() = url.to_string();
            navigator
        }
    }

    impl Navigator for FakeNavigator {
        fn current_url(&self) -> String {
            self.url.borrow().clone()
        }

        fn navigate_full(&self, url: &str) -> Result<(), NavbarError> {
            if self.blocked {
                return Err(NavbarError::Navigation("blocked".to_string()));
            }
            self.visited.borrow_mut().push(url.to_string());
            *self.url.borrow_mut() = url.to_string();
            Ok(())
        }
    }

    #[test]
    fn test_initial_locale_from_url() {
        assert_eq!(LocaleSwitcher::new(FakeNavigator::at("/en/courses")).locale(), Locale::En);
        assert_eq!(LocaleSwitcher::new(FakeNavigator::at("/ar/courses")).locale(), Locale::Ar);
        assert_eq!(LocaleSwitcher::new(FakeNavigator::at("/courses")).locale(), Locale::Ar);
        assert_eq!(LocaleSwitcher::new(FakeNavigator::at("/")).locale(), Locale::Ar);
    }

    #[test]
    fn test_switch_navigates_with_query() {
        let navigator = FakeNavigator::at("/en/courses/1?x=2");
        let switcher = LocaleSwitcher::new(navigator.clone());

        assert_eq!(switcher.switch().unwrap(), "/ar/courses/1?x=2");
        assert_eq!(switcher.locale(), Locale::Ar);
        assert_eq!(*navigator.visited.borrow(), vec!["/ar/courses/1?x=2".to_string()]);
    }

    #[test]
    fn test_switch_inserts_locale_segment() {
        let navigator = FakeNavigator::at("/courses/1");
        let switcher = LocaleSwitcher::new(navigator.clone());

        assert_eq!(switcher.switch().unwrap(), "/en/courses/1");
        assert_eq!(switcher.locale(), Locale::En);
    }

    #[test]
    fn test_switch_from_root() {
        let switcher = LocaleSwitcher::new(FakeNavigator::at("/"));
        assert_eq!(switcher.switch().unwrap(), "/en");
    }

    #[test]
    fn test_switch_twice_returns_to_start() {
        let navigator = FakeNavigator::at("/ar/profile");
        let switcher = LocaleSwitcher::new(navigator.clone());

        switcher.switch().unwrap();
        switcher.switch().unwrap();

        assert_eq!(switcher.locale(), Locale::Ar);
        assert_eq!(
            *navigator.visited.borrow(),
            vec!["/en/profile".to_string(), "/ar/profile".to_string()]
        );
    }

    #[test]
    fn test_failed_navigation_is_reported() {
        let navigator = FakeNavigator {
            blocked: true,
            ..FakeNavigator::at("/en/x")
        };
        let switcher = LocaleSwitcher::new(navigator);

        assert_eq!(
            switcher.switch(),
            Err(NavbarError::Navigation("blocked".to_string()))
        );
        assert_eq!(switcher.locale(), Locale::Ar);
    }
}
