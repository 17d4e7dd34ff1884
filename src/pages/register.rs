//! Registration page posting a multipart form to the backend.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::util::form_submit::REGISTER_FORM_ID;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "csr")]
        {
            let Some(payload) = crate::util::form_submit::payload_from_submit(&ev) else {
                return;
            };
            let adapter = crate::util::form_submit::FormAdapter::registration(&config);
            leptos::task::spawn_local(async move {
                adapter
                    .submit(&crate::net::api::GlooBackend, &crate::util::page::BrowserPage, payload)
                    .await;
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
                <h1>"Đăng ký tài khoản"</h1>
                <form id=REGISTER_FORM_ID class="login-form" on:submit=on_submit>
                    <div class="login-form__row">
                        <input class="login-input" type="text" name="first_name" placeholder="Tên" required/>
                        <input class="login-input" type="text" name="last_name" placeholder="Họ" required/>
                    </div>
                    <input
                        class="login-input"
                        type="email"
                        name="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        required
                    />
                    <input class="login-input" type="tel" name="phone" placeholder="Số điện thoại"/>
                    <input
                        class="login-input"
                        type="password"
                        name="password"
                        placeholder="Mật khẩu"
                        autocomplete="new-password"
                        required
                    />
                    <label class="login-check">
                        <input type="checkbox" name="newsletter" value="true"/>
                        "Nhận bản tin qua email"
                    </label>
                    <label class="login-check">
                        <input type="checkbox" name="terms" value="true" required/>
                        "Tôi đồng ý với điều khoản sử dụng"
                    </label>
                    <button class="login-button" type="submit">
                        "Đăng ký"
                    </button>
                </form>
                <p class="login-card__subtitle">
                    "Đã có tài khoản? "
                    <a href="/login">"Đăng nhập"</a>
                </p>
            </div>
        </div>
    }
}
