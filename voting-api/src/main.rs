mod device;

use axum::{
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
use serde_json::json;
use tower_http::compression::CompressionLayer;
use tower_sessions::cookie::SameSite;
use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};
use voting_app::domain::UserSession;
use voting_app::AppContext;
use voting_ui::pages::{
    CastVoteFn, DashboardFn, DeviceIdentityFn, LoginFn, OAuthLoginFn, RegisterFn, ResetVotesFn,
    UserStatsFn,
};
use voting_ui::session::{CurrentUserFn, LogoutFn, USER_SESSION_KEY};
use voting_ui::App;

/// Device ids outlive a single visit; they expire after a month without use.
const SESSION_INACTIVITY_DAYS: i64 = 30;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let conf = get_configuration(Some("Cargo.toml")).expect("Failed to load Leptos config");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app_context = match AppContext::from_env() {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    let routes = generate_route_list(App);

    server_fn::axum::register_explicit::<CurrentUserFn>();
    server_fn::axum::register_explicit::<LogoutFn>();
    server_fn::axum::register_explicit::<LoginFn>();
    server_fn::axum::register_explicit::<RegisterFn>();
    server_fn::axum::register_explicit::<OAuthLoginFn>();
    server_fn::axum::register_explicit::<DeviceIdentityFn>();
    server_fn::axum::register_explicit::<CastVoteFn>();
    server_fn::axum::register_explicit::<DashboardFn>();
    server_fn::axum::register_explicit::<UserStatsFn>();
    server_fn::axum::register_explicit::<ResetVotesFn>();
    tracing::info!("Registered server functions");

    let secure_cookies = std::env::var("VOTING_SECURE_COOKIES")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);

    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Strict)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(
            SESSION_INACTIVITY_DAYS,
        )));

    let app = Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route("/auth/me", get(auth_me))
        .route("/api/{*fn_name}", post({
            let ctx = app_context.clone();
            move |req| {
                let ctx = ctx.clone();
                async move {
                    handle_server_fns_with_context(
                        move || provide_context(ctx.clone()),
                        req
                    ).await
                }
            }
        }))
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let ctx = app_context.clone();
                move || provide_context(ctx.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(middleware::from_fn(device::ensure_device_identity))
        .layer(session_layer)
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    tracing::info!("Listening on http://{}", addr);
    tracing::info!("Voting API: {}", app_context.api_base_url);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

async fn auth_me(session: Session) -> impl IntoResponse {
    let user = session
        .get::<UserSession>(USER_SESSION_KEY)
        .await
        .ok()
        .flatten()
        .map(|s| s.user);

    Json(json!({
        "authenticated": user.is_some(),
        "user": user,
    }))
}

fn shell(options: LeptosOptions) -> impl IntoView {
    use leptos_meta::*;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" type="image/svg+xml" href="/favicon.svg"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}
