use leptos::*;
use leptos_router::*;

use crate::api::{ApiClient, AuthState};
use crate::components::navbar::Navbar;
use crate::config::NavbarConfig;

#[component]
pub fn App() -> impl IntoView {
    let auth_state = AuthState::new();
    provide_context(auth_state.clone());

    let config = NavbarConfig::default();
    provide_context(config.clone());

    // Restore the signed-in user behind a stored token
    if auth_state.is_authenticated() {
        let client = ApiClient::new(config.api_base);
        wasm_bindgen_futures::spawn_local(async move {
            match client.get_current_user().await {
                Ok(user) => auth_state.set_user(user),
                Err(err) => {
                    log::warn!("Stored session is no longer valid: {}", err);
                    auth_state.logout();
                }
            }
        });
    }

    view! {
        <Router>
            <Navbar />
            <main>
                <Routes>
                    <Route path="/*any" view=|| () />
                </Routes>
            </main>
        </Router>
    }
}
