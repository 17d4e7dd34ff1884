//! Post-login landing page.

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::state::session::{SessionContext, UserSignal};

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let session = expect_context::<SessionContext>();

    let user = RwSignal::new(session.current_user());
    let subscription = session.subscribe(Arc::new(UserSignal::new(user)));
    on_cleanup(move || session.unsubscribe(subscription));

    let fallback_name = config.fallback_display_name;
    let greeting_name = move || {
        user.with(|u| {
            u.as_ref()
                .and_then(|u| u.display_name.clone())
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| fallback_name.clone())
        })
    };

    view! {
        <section class="home-page">
            <Show
                when=move || user.with(Option::is_some)
                fallback=|| view! { <h1>"Tin tức hôm nay"</h1> }
            >
                <h1>"Xin chào, " {greeting_name.clone()}</h1>
            </Show>
        </section>
    }
}
