//! Site header: navigation fragment, hamburger toggle, sign-up affordance and
//! the profile dropdown.
//!
//! The element ids and classes here are the contract the site stylesheet and
//! the navigation controller rely on.

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::state::chrome::ChromeState;
use crate::util::session_reflector::SessionReflector;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let chrome = expect_context::<RwSignal<ChromeState>>();
    let breakpoint = config.compact_breakpoint_px;

    #[cfg(feature = "csr")]
    let identity = use_context::<crate::net::identity::FirebaseIdentity>();

    // Relocate on mount and on every resize; element lookups are repeated so
    // a missing element is reported each time, as the controller is inert.
    #[cfg(feature = "csr")]
    {
        use crate::util::nav_layout::{ElementNav, NavController, viewport_width};

        let relocate = move || {
            let controller = NavController::attach(ElementNav::from_window(), breakpoint);
            if let Some(width) = viewport_width() {
                controller.relocate(width);
            }
        };
        Effect::new(move || relocate());
        let _resize = window_event_listener(leptos::ev::resize, move |_| relocate());
    }

    let on_hamburger = move |_| {
        #[cfg(feature = "csr")]
        {
            use crate::util::nav_layout::{ElementNav, NavController};
            NavController::attach(ElementNav::from_window(), breakpoint).toggle_menu();
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = breakpoint;
        }
    };

    let hover = Arc::new(SessionReflector::new(chrome, &config));
    let hover_leave = Arc::clone(&hover);

    let on_logout = move |_| {
        #[cfg(feature = "csr")]
        {
            let Some(identity) = identity else {
                log::error!("sign-out unavailable: identity provider not initialized");
                return;
            };
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let _ = crate::util::auth::sign_out(&identity, &crate::util::page::BrowserPage, &config).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &config;
        }
    };

    view! {
        <header class="site-header">
            <div class="top-bar">
                <button class="hamburger-menu" type="button" aria-label="Menu" on:click=on_hamburger>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class="nav-topbar">
                    <a href="/home">"Trang chủ"</a>
                    <a href="/all_posts">"Tất cả bài viết"</a>
                    <a href="/signin_author">"Trở thành tác giả"</a>
                </nav>
                <div class="header-actions">
                    <a
                        id="signup-btn"
                        class="signup-btn"
                        href="/signup"
                        style:display=move || chrome.with(ChromeState::signup_display)
                    >
                        "Đăng ký"
                    </a>
                    <div
                        id="user-profile"
                        class=move || chrome.with(ChromeState::profile_class)
                        on:mouseenter=move |_| hover.on_profile_enter()
                        on:mouseleave=move |_| hover_leave.on_profile_leave()
                    >
                        <img
                            id="user-avatar"
                            class="user-avatar"
                            alt="avatar"
                            src=move || chrome.with(|c| c.avatar_src.clone())
                        />
                        <span id="user-name" class="user-name">
                            {move || chrome.with(|c| c.display_name.clone())}
                        </span>
                        <div id="menu-content" class=move || chrome.with(ChromeState::menu_class)>
                            <a href="/home">"Trang cá nhân"</a>
                            <button id="logout-btn" type="button" on:click=on_logout>
                                "Đăng xuất"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
            <div class="main-nav"></div>
        </header>
    }
}
