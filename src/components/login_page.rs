//! Login Page
//!
//! Email/password sign-in with a register mode. A successful login
//! stores the bearer token and moves to the dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::context::{AppContext, Route};
use crate::error::ApiError;
use crate::models::Credentials;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let client = use_context::<ApiClient>().expect("ApiClient should be provided");

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (registering, set_registering) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials {
            email: email.get(),
            password: password.get(),
        };
        if credentials.email.is_empty() || credentials.password.is_empty() {
            return;
        }
        let register_mode = registering.get();
        let client = client.clone();
        set_error.set(None);
        set_notice.set(None);
        spawn_local(async move {
            if register_mode {
                match client.register(&credentials).await {
                    Ok(ack) => {
                        set_notice.set(Some(ack.message));
                        set_registering.set(false);
                    }
                    Err(e) => set_error.set(Some(describe_auth_failure(&e))),
                }
            } else {
                match client.login(&credentials).await {
                    Ok(()) => ctx.navigate(Route::Dashboard),
                    Err(e) => set_error.set(Some(describe_auth_failure(&e))),
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <h1>"Stockdeck"</h1>
            <form class="login-form" on:submit=on_submit>
                <h2>{move || if registering.get() { "Create Account" } else { "Sign In" }}</h2>
                {move || notice.get().map(|message| view! { <p class="notice">{message}</p> })}
                {move || error.get().map(|message| view! { <p class="error-banner">{message}</p> })}
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    required
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    required
                />
                <button type="submit">
                    {move || if registering.get() { "Register" } else { "Sign In" }}
                </button>
                <button
                    type="button"
                    class="link-btn"
                    on:click=move |_| {
                        set_error.set(None);
                        set_notice.set(None);
                        set_registering.update(|r| *r = !*r);
                    }
                >
                    {move || if registering.get() {
                        "Have an account? Sign in"
                    } else {
                        "Need an account? Register"
                    }}
                </button>
            </form>
        </div>
    }
}

/// A 401 on the login endpoint means bad credentials, not an expired
/// session.
fn describe_auth_failure(error: &ApiError) -> String {
    match error {
        ApiError::RequestFailed(401) => "Invalid credentials".to_string(),
        other => other.to_string(),
    }
}
