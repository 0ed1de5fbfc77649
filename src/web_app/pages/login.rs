// web_app/pages/login.rs - Admin login
//
// Navigation after a successful sign-in is driven by the auth-change
// subscription, not the submit handler, so a sign-in completed from
// anywhere moves this page along. A visitor who already has a session
// is redirected away on mount.

use crate::web_app::auth::{AuthChangeEvent, AuthClient};
use crate::web_app::components::common::{Alert, Button, TextInput};
use leptos::leptos_dom::helpers::set_timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use std::time::Duration;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthClient>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Already signed in? Straight to the enquiry list.
    Effect::new(move |_| {
        let navigate = use_navigate();
        spawn_local(async move {
            if let Ok(Some(_)) = auth.get_session().await {
                navigate("/enquiry-list", NavigateOptions::default());
            }
        });
    });

    // Sign-in from this form (or anywhere else) moves us along.
    let navigate = use_navigate();
    let subscription = auth.on_auth_state_change(Callback::new(move |(event, _)| {
        if event == AuthChangeEvent::SignedIn {
            let navigate = navigate.clone();
            set_timeout(
                move || navigate("/enquiry-list", NavigateOptions::default()),
                Duration::ZERO,
            );
        }
    }));
    on_cleanup(move || subscription.unsubscribe());

    let handle_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        error.set(None);
        submitting.set(true);
        spawn_local(async move {
            let result = auth
                .sign_in(&email.get_untracked(), &password.get_untracked())
                .await;
            if let Err(e) = result {
                // The email stays; only the outcome is reported.
                error.set(Some(e.to_string()));
            }
            submitting.set(false);
        });
    };

    view! {
        <Title text="Admin Login - Little Scholars"/>
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-purple-50 flex items-center justify-center p-4">
            <div class="bg-white rounded-2xl shadow-xl p-8 w-full max-w-md">
                <div class="text-center mb-8">
                    <span class="text-4xl">"🎓"</span>
                    <h1 class="text-2xl font-bold text-gray-900 mt-2">"Admin Login"</h1>
                    <p class="text-sm text-gray-500">"Little Scholars enquiry dashboard"</p>
                </div>

                {move || error.get().map(|message| view! {
                    <div class="mb-4">
                        <Alert message=message on_dismiss=Callback::new(move |_| error.set(None))/>
                    </div>
                })}

                <form class="space-y-4" on:submit=handle_submit>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Email"</label>
                        <TextInput value=email input_type="email" placeholder="admin@littlescholars.com"/>
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Password"</label>
                        <div class="relative">
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                placeholder="Password"
                                class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent outline-none shadow-sm pr-12"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="absolute right-3 top-1/2 -translate-y-1/2 text-gray-400 hover:text-gray-600"
                                title="Show or hide password"
                                on:click=move |_| show_password.update(|s| *s = !*s)
                            >
                                {move || if show_password.get() { "🙈" } else { "👁" }}
                            </button>
                        </div>
                    </div>
                    <Button
                        button_type="submit"
                        class="w-full"
                        disabled=Signal::derive(move || {
                            submitting.get()
                                || email.get().trim().is_empty()
                                || password.get().is_empty()
                        })
                    >
                        {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                    </Button>
                </form>

                <a href="/" class="block text-center text-sm text-gray-400 hover:text-blue-600 mt-6">
                    "← Back to website"
                </a>
            </div>
        </div>
    }
}
