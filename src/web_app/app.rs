// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing, global state, and the component tree.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::auth::AuthClient;
use crate::web_app::pages::admin::AdminPage;
use crate::web_app::pages::home::HomePage;
use crate::web_app::pages::login::LoginPage;

/// Root application component
///
/// Sets up:
/// - Meta tags for SEO
/// - Router with routes
/// - The shared auth client, provided via context
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    // One auth client for the whole app; pages pull it from context.
    provide_context(AuthClient::new());

    view! {
        // HTML meta tags
        <Title text="Little Scholars Preschool" />
        <Meta name="description" content="Little Scholars preschool in Navi Mumbai - creative, play-based learning for nursery, LKG, UKG and playgroup" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        // Stylesheet link (Tailwind CSS)
        <Stylesheet id="leptos" href="/pkg/little_scholars.css" />

        // Router setup
        <Router>
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/enquiry-list") view=AdminPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "Back to Home"
                </a>
            </div>
        </div>
    }
}
