//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::site_header::SiteHeader;
use crate::config::SiteConfig;
use crate::pages::{home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::chrome::ChromeState;
use crate::state::session::SessionContext;
use crate::util::session_reflector::SessionReflector;

/// Root application component.
///
/// Loads the site config, wires the session context to the header chrome,
/// starts the identity provider, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::load();
    let session = SessionContext::new();
    let chrome = RwSignal::new(ChromeState::default());
    session.subscribe(Arc::new(SessionReflector::new(chrome, &config)));

    #[cfg(feature = "csr")]
    {
        use crate::net::identity::{FirebaseIdentity, IdentityProvider as _};

        match FirebaseIdentity::init(&config.identity) {
            Ok(identity) => {
                identity.watch_session(session.clone());
                provide_context(identity);
            }
            Err(e) => log::error!("federated sign-in disabled: {e}"),
        }
    }

    provide_context(config);
    provide_context(session);
    provide_context(chrome);

    view! {
        <Title text="Tin tức"/>

        <Router>
            <SiteHeader/>
            <main class="page-content">
                <Routes fallback=|| "Không tìm thấy trang.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=RegisterPage/>
                    <Route path=StaticSegment("home") view=HomePage/>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}
