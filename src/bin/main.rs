// Leptos web application server
//
// This binary starts the web server with:
// - Actix-web for HTTP serving
// - Leptos for SSR (server-side rendering)
// - PostgreSQL connection pool with schema bootstrap and admin seeding
// - Static file serving

#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use leptos::prelude::*;
    use leptos_actix::{generate_route_list, handle_server_fns, LeptosRoutes};
    use leptos_meta::MetaTags;
    use little_scholars::web_app::api::{auth, db};
    use little_scholars::web_app::app::App as WebApp;
    use std::env;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_max_level(tracing::Level::INFO)
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    // Create PostgreSQL connection pool
    let pool = db::create_pool()
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    tracing::info!("Connected to database");

    // Initialize global pool for server functions
    db::init_db(pool.clone());

    // Bootstrap the schema and the admin account
    db::ensure_schema(&pool)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    match (env::var("ADMIN_EMAIL"), env::var("ADMIN_PASSWORD")) {
        (Ok(email), Ok(password)) => {
            if let Err(e) = auth::ensure_admin_user(&pool, &email, &password).await {
                tracing::error!("Failed to seed admin account: {}", e);
            }
        }
        _ => {
            tracing::warn!("ADMIN_EMAIL/ADMIN_PASSWORD not set, skipping admin seeding");
        }
    }

    // Leptos configuration
    let conf = leptos_config::get_configuration(None)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    tracing::info!("Starting server at http://{}", addr);

    HttpServer::new(move || {
        // Generate the list of routes in the Leptos App
        let routes = generate_route_list(WebApp);
        let leptos_options_inner = leptos_options.clone();
        let site_root_str = site_root.clone().to_string();
        let pool_data = web::Data::new(pool.clone());

        App::new()
            // Share database pool across all handlers
            .app_data(pool_data.clone())
            // Also share raw pool for direct access if needed
            .app_data(pool.clone())
            // Explicitly handle server functions
            .route("/api/{tail:.*}", handle_server_fns())
            // Serve JS/WASM/CSS from pkg directory
            .service(Files::new("/pkg", format!("{site_root_str}/pkg")))
            // Leptos routes for SSR with proper shell
            .leptos_routes(routes, {
                let leptos_options = leptos_options_inner.clone();
                move || {
                    view! {
                        <!DOCTYPE html>
                        <html lang="en">
                            <head>
                                <meta charset="utf-8"/>
                                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                                <AutoReload options=leptos_options.clone() />
                                <HydrationScripts options=leptos_options.clone()/>
                                <MetaTags/>
                            </head>
                            <body>
                                <WebApp/>
                            </body>
                        </html>
                    }
                }
            })
            .app_data(web::Data::new(leptos_options_inner.clone()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
fn main() {
    panic!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
}
