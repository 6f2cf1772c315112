use leptos::*;
use leptos_router::*;
use shared::{Locale, SessionFlags};

use crate::api::{ApiClient, AuthState, HttpUserAttributes};
use crate::config::NavbarConfig;
use crate::utils::{
    BodyClass, BrowserNavigator, LocalThemeStorage, LocaleSwitcher, Navigator,
    SessionFlagWatcher, ThemeController,
};

/// Links unlocked by the user's attribute flags, as `(path, label)`.
fn role_links(flags: SessionFlags) -> Vec<(&'static str, &'static str)> {
    let mut links = Vec::new();
    if flags.is_admin {
        links.push(("/admin", "Admin"));
    }
    if flags.is_staff {
        links.push(("/staff", "Staff"));
    }
    links
}

fn toggle_menu(open: &mut bool) {
    *open = !*open;
}

/// Close the menu and move the page to the other locale. Returns the locale
/// the navbar shows from now on.
fn switch_language<N: Navigator>(switcher: &LocaleSwitcher<N>, menu_open: &mut bool) -> Locale {
    *menu_open = false;
    if switcher.switch().is_err() {
        log::debug!("Staying on the current page after a failed locale switch");
    }
    switcher.locale()
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth_state = expect_context::<AuthState>();
    let config = use_context::<NavbarConfig>().unwrap_or_default();
    let navigate = use_navigate();

    let menu_open = create_rw_signal(false);

    // Theme
    let theme = ThemeController::new(
        LocalThemeStorage::new(config.theme_storage_key.clone()),
        BodyClass::new(config.dark_theme_class.clone()),
    );
    let dark = create_rw_signal(theme.init().is_dark());

    // Locale
    let switcher = LocaleSwitcher::new(BrowserNavigator);
    let locale = create_rw_signal(switcher.locale());

    // Session flags follow the signed-in user until the navbar goes away
    let flags = create_rw_signal(SessionFlags::default());
    let watcher = SessionFlagWatcher::new(HttpUserAttributes::new(ApiClient::new(
        config.api_base.clone(),
    )));
    let mut subscription = watcher.watch(
        &auth_state,
        |lookup| wasm_bindgen_futures::spawn_local(lookup),
        move |next| {
            flags.try_set(next);
        },
    );
    on_cleanup(move || subscription.unsubscribe());

    let on_toggle_menu = move |_| menu_open.update(toggle_menu);

    let on_toggle_theme = move |_| dark.set(theme.toggle().is_dark());

    let on_switch_language = move |_| {
        let mut open = menu_open.get_untracked();
        let next = switch_language(&switcher, &mut open);
        menu_open.set(open);
        locale.set(next);
    };

    let user = auth_state.user;
    let on_logout = move |_| {
        auth_state.logout();
        navigate(&format!("/{}", locale.get_untracked().as_str()), Default::default());
    };

    let localized = move |path: &str| format!("/{}{}", locale.get().as_str(), path);

    view! {
        <nav
            class="navbar"
            dir=move || if locale.get() == Locale::Ar { "rtl" } else { "ltr" }
        >
            <div class="container navbar-content">
                <a href=move || localized("") class="navbar-brand">"Academy"</a>
                <button class="navbar-toggle" aria-label="Menu" on:click=on_toggle_menu>
                    "☰"
                </button>
                <div class="navbar-links" class:open=move || menu_open.get()>
                    {move || {
                        role_links(flags.get())
                            .into_iter()
                            .map(|(path, label)| view! { <a href=localized(path)>{label}</a> })
                            .collect_view()
                    }}
                    <Show when=move || flags.get().is_disabled>
                        <span class="badge badge-warning">"Account disabled"</span>
                    </Show>
                    <button class="btn btn-outline" on:click=on_toggle_theme>
                        {move || if dark.get() { "☀" } else { "☾" }}
                    </button>
                    <button class="btn btn-outline" on:click=on_switch_language>
                        {move || locale.get().opposite().native_name()}
                    </button>
                    <Show
                        when=move || user.with(|u| u.is_some())
                        fallback=move || {
                            view! {
                                <a href=move || localized("/login") class="btn btn-outline">
                                    "Login"
                                </a>
                            }
                        }
                    >
                        <span class="navbar-user">
                            {move || user.with(|u| u.as_ref().map(|u| u.username.clone()))}
                        </span>
                        <button class="btn btn-outline" on:click=on_logout.clone()>
                            "Logout"
                        </button>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
