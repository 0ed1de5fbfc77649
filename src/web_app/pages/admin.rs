// web_app/pages/admin.rs - Enquiry list dashboard
//
// Session-gated. On mount the session is checked first; only then are
// enquiries loaded. Search and CSV export run entirely client-side on
// the already-fetched rows; a manual refresh keeps the current rows on
// screen until the new result lands. A sign-out observed through the
// auth subscription redirects to the login page from any state.

use crate::web_app::auth::{AuthChangeEvent, AuthClient};
use crate::web_app::components::common::{Alert, Badge, Button, Loading, SecondaryButton, TextInput};
use crate::web_app::model::{
    excited_count, export_csv, filter_enquiries, submitted_this_month, Enquiry, Excitement,
};
use crate::web_app::store;
use chrono::Utc;
use leptos::leptos_dom::helpers::set_timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use std::time::Duration;

fn excitement_badge(excitement: Option<Excitement>) -> (&'static str, &'static str) {
    match excitement {
        Some(Excitement::Yes) => ("green", "Yes"),
        Some(Excitement::VeryExcited) => ("purple", "Very Excited"),
        Some(Excitement::NeedInfo) => ("yellow", "Need Info"),
        None => ("gray", "—"),
    }
}

#[cfg(feature = "hydrate")]
fn download_csv(csv: &str) {
    use web_sys::js_sys;
    use web_sys::wasm_bindgen::{JsCast, JsValue};

    fn inner(csv: &str) -> Option<()> {
        let parts = js_sys::Array::new();
        parts.push(&JsValue::from_str(csv));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/csv;charset=utf-8");
        let blob =
            web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).ok()?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).ok()?;

        let document = web_sys::window()?.document()?;
        let anchor: web_sys::HtmlAnchorElement =
            document.create_element("a").ok()?.dyn_into().ok()?;
        anchor.set_href(&url);
        anchor.set_download(&format!("enquiries-{}.csv", Utc::now().format("%Y-%m-%d")));
        anchor.click();
        let _ = web_sys::Url::revoke_object_url(&url);
        Some(())
    }

    if inner(csv).is_none() {
        tracing::error!("CSV download failed");
    }
}

#[cfg(not(feature = "hydrate"))]
fn download_csv(_csv: &str) {}

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<AuthClient>();

    let auth_checked = RwSignal::new(false);
    let admin_email = RwSignal::new(String::new());
    let enquiries = RwSignal::new(Vec::<Enquiry>::new());
    let loading = RwSignal::new(true);
    let refreshing = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());

    let filtered = Memo::new(move |_| filter_enquiries(&enquiries.get(), &search.get()));

    let fetch = move |initial: bool| {
        if initial {
            loading.set(true);
        } else {
            // Keep the rows on screen until the new result lands.
            refreshing.set(true);
        }
        spawn_local(async move {
            match store::list_enquiries(&auth).await {
                Ok(rows) => {
                    enquiries.set(rows);
                    error.set(None);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
            refreshing.set(false);
        });
    };

    // Gate on the session before loading anything.
    Effect::new(move |_| {
        let navigate = use_navigate();
        spawn_local(async move {
            match auth.get_session().await {
                Ok(Some(session)) => {
                    admin_email.set(session.email);
                    auth_checked.set(true);
                    fetch(true);
                }
                Ok(None) | Err(_) => navigate("/login", NavigateOptions::default()),
            }
        });
    });

    // A sign-out from anywhere kicks us back to the login page.
    let navigate = use_navigate();
    let subscription = auth.on_auth_state_change(Callback::new(move |(event, _)| {
        if event == AuthChangeEvent::SignedOut {
            let navigate = navigate.clone();
            set_timeout(
                move || navigate("/login", NavigateOptions::default()),
                Duration::ZERO,
            );
        }
    }));
    on_cleanup(move || subscription.unsubscribe());

    let handle_logout = Callback::new(move |_: ()| {
        spawn_local(async move {
            if let Err(e) = auth.sign_out().await {
                tracing::warn!("Sign-out reported: {}", e);
            }
        });
    });

    let handle_export = Callback::new(move |_: ()| {
        download_csv(&export_csv(&filtered.get_untracked()));
    });

    view! {
        <Title text="Enquiries - Little Scholars Admin"/>
        <div class="min-h-screen bg-gray-50">
            <Show
                when=move || auth_checked.get()
                fallback=|| view! { <Loading message="Checking session..."/> }
            >
                <header class="bg-white shadow-sm">
                    <div class="max-w-6xl mx-auto px-4 py-4 flex items-center justify-between">
                        <div>
                            <h1 class="text-xl font-bold text-gray-900">"Admission Enquiries"</h1>
                            <p class="text-sm text-gray-500">
                                {move || format!("Signed in as {}", admin_email.get())}
                            </p>
                        </div>
                        <div class="flex items-center gap-3">
                            <SecondaryButton
                                on_click=Callback::new(move |_| fetch(false))
                                disabled=Signal::derive(move || refreshing.get() || loading.get())
                            >
                                {move || if refreshing.get() { "Refreshing..." } else { "Refresh" }}
                            </SecondaryButton>
                            <SecondaryButton on_click=handle_export>
                                "Export CSV"
                            </SecondaryButton>
                            <Button on_click=handle_logout>"Logout"</Button>
                        </div>
                    </div>
                </header>

                <main class="max-w-6xl mx-auto px-4 py-8">
                    {move || error.get().map(|message| view! {
                        <div class="mb-6">
                            <Alert message=message on_dismiss=Callback::new(move |_| error.set(None))/>
                        </div>
                    })}

                    // Stat cards
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-8">
                        <div class="bg-white rounded-xl shadow-sm p-5">
                            <div class="text-sm text-gray-500">"Total Enquiries"</div>
                            <div class="text-3xl font-bold text-gray-900">
                                {move || enquiries.get().len()}
                            </div>
                        </div>
                        <div class="bg-white rounded-xl shadow-sm p-5">
                            <div class="text-sm text-gray-500">"This Month"</div>
                            <div class="text-3xl font-bold text-blue-600">
                                {move || submitted_this_month(&enquiries.get(), Utc::now())}
                            </div>
                        </div>
                        <div class="bg-white rounded-xl shadow-sm p-5">
                            <div class="text-sm text-gray-500">"Excited to Join"</div>
                            <div class="text-3xl font-bold text-green-600">
                                {move || excited_count(&enquiries.get())}
                            </div>
                        </div>
                    </div>

                    <div class="mb-6 max-w-md">
                        <TextInput
                            value=search
                            input_type="search"
                            placeholder="Search by name, location, phone or class..."
                        />
                    </div>

                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <Loading message="Loading enquiries..."/> }
                    >
                        <Show
                            when=move || !filtered.get().is_empty()
                            fallback=move || view! {
                                <div class="bg-white rounded-xl shadow-sm p-12 text-center">
                                    <div class="text-5xl mb-4">"📭"</div>
                                    <p class="text-gray-500 mb-6">"No enquiries found."</p>
                                    <SecondaryButton on_click=Callback::new(move |_| fetch(false))>
                                        "Refresh"
                                    </SecondaryButton>
                                </div>
                            }
                        >
                            <div class="bg-white rounded-xl shadow-sm overflow-x-auto">
                                <table class="w-full text-left text-sm">
                                    <thead class="bg-gray-50 text-gray-500 uppercase text-xs">
                                        <tr>
                                            <th class="px-4 py-3">"Student"</th>
                                            <th class="px-4 py-3">"Parent"</th>
                                            <th class="px-4 py-3">"Location"</th>
                                            <th class="px-4 py-3">"Phone"</th>
                                            <th class="px-4 py-3">"Class"</th>
                                            <th class="px-4 py-3">"Excitement"</th>
                                            <th class="px-4 py-3">"Submitted"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        <For
                                            each=move || filtered.get()
                                            key=|e| e.id
                                            children=move |e: Enquiry| {
                                                let (variant, label) = excitement_badge(e.excitement);
                                                view! {
                                                    <tr class="border-t border-gray-100 hover:bg-gray-50">
                                                        <td class="px-4 py-3 font-medium text-gray-900">{e.student_name}</td>
                                                        <td class="px-4 py-3 text-gray-600">{e.parent_name}</td>
                                                        <td class="px-4 py-3 text-gray-600">{e.location}</td>
                                                        <td class="px-4 py-3 text-gray-600">{e.phone_number}</td>
                                                        <td class="px-4 py-3">
                                                            <Badge variant="blue">{e.class.label()}</Badge>
                                                        </td>
                                                        <td class="px-4 py-3">
                                                            <Badge variant=variant>{label}</Badge>
                                                        </td>
                                                        <td class="px-4 py-3 text-gray-500">
                                                            {e.date_submitted.format("%d %b %Y").to_string()}
                                                        </td>
                                                    </tr>
                                                }
                                            }
                                        />
                                    </tbody>
                                </table>
                            </div>
                        </Show>
                    </Show>
                </main>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_variant_per_excitement() {
        assert_eq!(excitement_badge(Some(Excitement::Yes)).0, "green");
        assert_eq!(excitement_badge(Some(Excitement::VeryExcited)).0, "purple");
        assert_eq!(excitement_badge(Some(Excitement::NeedInfo)).0, "yellow");
        assert_eq!(excitement_badge(None), ("gray", "—"));
    }
}
