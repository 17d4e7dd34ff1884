//! Login page supporting email + password and Google popup sign-in.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::util::form_submit::LOGIN_FORM_ID;

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    #[cfg(feature = "csr")]
    let identity = use_context::<crate::net::identity::FirebaseIdentity>();

    let submit_config = config.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "csr")]
        {
            let Some(payload) = crate::util::form_submit::payload_from_submit(&ev) else {
                return;
            };
            let adapter = crate::util::form_submit::FormAdapter::login(&submit_config);
            leptos::task::spawn_local(async move {
                adapter
                    .submit(&crate::net::api::GlooBackend, &crate::util::page::BrowserPage, payload)
                    .await;
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &submit_config;
        }
    };

    let on_google = move |_| {
        #[cfg(feature = "csr")]
        {
            use crate::util::page::PageEffects as _;

            let page = crate::util::page::BrowserPage;
            let Some(identity) = identity else {
                page.alert(&crate::util::auth::sign_in_failure_message(
                    &config,
                    &crate::net::identity::IdentityError::NotConfigured,
                ));
                return;
            };
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let _ = crate::util::auth::sign_in_with_popup(&identity, &page, &config).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &config;
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Đăng nhập"</h1>
                <form id=LOGIN_FORM_ID class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        name="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        required
                    />
                    <input
                        class="login-input"
                        type="password"
                        name="password"
                        placeholder="Mật khẩu"
                        autocomplete="current-password"
                        required
                    />
                    <button class="login-button" type="submit">
                        "Đăng nhập"
                    </button>
                </form>
                <div class="login-divider"></div>
                <button class="social-btn google" type="button" on:click=on_google>
                    "Đăng nhập với Google"
                </button>
                <p class="login-card__subtitle">
                    "Chưa có tài khoản? "
                    <a href="/signup">"Đăng ký"</a>
                </p>
            </div>
        </div>
    }
}
