use crate::components::{ErrorDisplay, ResultTile, StatusMessage, UserBadge};
use crate::session::error_text;
use leptos::prelude::*;
use server_fn::ServerFnError;
use voting_app::domain::{
    Category, DashboardSnapshot, LiveResults, UserStats, VoteCounts, POLL_INTERVAL,
};

#[server(DashboardFn, "/api", endpoint = "dashboard")]
pub async fn dashboard() -> Result<DashboardSnapshot, ServerFnError> {
    use crate::session::ssr;

    let ctx = ssr::app_context()?;
    ctx.fetch_dashboard.execute().await.map_err(|e| {
        tracing::error!("Dashboard refresh failed: {}", e);
        e.into_server_error()
    })
}

#[server(UserStatsFn, "/api", endpoint = "user_stats")]
pub async fn user_stats() -> Result<UserStats, ServerFnError> {
    use crate::session::ssr;

    let ctx = ssr::app_context()?;
    ctx.fetch_user_stats
        .execute()
        .await
        .map_err(|e| e.into_server_error())
}

#[server(ResetVotesFn, "/api", endpoint = "reset_votes")]
pub async fn reset_votes() -> Result<VoteCounts, ServerFnError> {
    use crate::session::ssr;

    let ctx = ssr::app_context()?;
    ctx.reset_votes
        .execute()
        .await
        .map_err(|e| e.into_server_error())
}

#[component]
pub fn ResultsPage() -> impl IntoView {
    let refresh = ServerAction::<DashboardFn>::new();
    let stats = ServerAction::<UserStatsFn>::new();
    let reset_action = ServerAction::<ResetVotesFn>::new();

    let snapshot = RwSignal::new(DashboardSnapshot::empty());
    let poll_error = RwSignal::new(None::<String>);
    let confirming_reset = RwSignal::new(false);

    // Poll while mounted; the interval is cleared with the page.
    Effect::new(move |_| {
        refresh.dispatch(DashboardFn {});
        stats.dispatch(UserStatsFn {});
        match set_interval_with_handle(
            move || {
                refresh.dispatch(DashboardFn {});
                stats.dispatch(UserStatsFn {});
            },
            POLL_INTERVAL,
        ) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(_) => leptos::logging::error!("Failed to start dashboard polling"),
        }
    });

    // A failed poll keeps the last snapshot on screen.
    Effect::new(move |_| match refresh.value().get() {
        Some(Ok(latest)) => {
            snapshot.set(latest);
            poll_error.set(None);
        }
        Some(Err(e)) => {
            leptos::logging::warn!("Error fetching dashboard: {}", e);
            poll_error.set(Some(error_text(&e)));
        }
        None => {}
    });

    Effect::new(move |_| {
        if let Some(Ok(counts)) = reset_action.value().get() {
            snapshot.set(DashboardSnapshot::new(counts, LiveResults::default()));
            confirming_reset.set(false);
        }
    });

    let snapshot_signal: Signal<DashboardSnapshot> = snapshot.into();
    let last_update = move || {
        snapshot.with(|s| {
            s.fetched_at
                .with_timezone(&chrono::Local)
                .format("%H:%M:%S")
                .to_string()
        })
    };

    view! {
        <header class="page-header">
            <h1 class="hero__title">"Live Results Dashboard"</h1>
            <div class="live">
                <span class="live__dot" class:live__dot--pulse=move || refresh.pending().get()></span>
                <span class="live__text">"Live · Last updated: " {last_update}</span>
            </div>
            <nav class="page-header__nav">
                <a href="/vote" class="nav-link">"Back to Voting"</a>
            </nav>
            <UserBadge/>
        </header>

        {move || poll_error.get().map(|message| view! {
            <ErrorDisplay
                message=message
                on_retry=Callback::new(move |_| { refresh.dispatch(DashboardFn {}); })
            />
        })}

        <div class="results-grid">
            {Category::ALL.into_iter().map(|category| view! {
                <ResultTile category=category snapshot=snapshot_signal/>
            }).collect::<Vec<_>>()}
        </div>

        <div class="total">
            <h2 class="total__title">"Total Votes"</h2>
            <p class="total__count">{move || snapshot.with(|s| s.counts.total())}</p>
            {move || stats.value().get().and_then(|r| r.ok()).map(|s| view! {
                <p class="total__online">{format!("{} people voting right now", s.concurrent_users)}</p>
            })}
        </div>

        <div class="reset">
            <Show
                when=move || confirming_reset.get()
                fallback=move || view! {
                    <button class="reset__button" on:click=move |_| confirming_reset.set(true)>
                        "Reset All Votes"
                    </button>
                }
            >
                <p class="reset__warning">
                    "Are you sure you want to reset all votes? This cannot be undone!"
                </p>
                <button
                    class="reset__button reset__button--danger"
                    disabled=move || reset_action.pending().get()
                    on:click=move |_| { reset_action.dispatch(ResetVotesFn {}); }
                >
                    "Yes, reset everything"
                </button>
                <button class="reset__button" on:click=move |_| confirming_reset.set(false)>
                    "Cancel"
                </button>
            </Show>
            {move || reset_action.value().get().map(|result| match result {
                Ok(_) => view! {
                    <StatusMessage success=true message="All votes have been reset!"/>
                }.into_any(),
                Err(e) => view! {
                    <StatusMessage success=false message=format!("Error resetting votes: {}", error_text(&e))/>
                }.into_any(),
            })}
        </div>

        <p class="footer">"Auto-refreshing every 2 seconds"</p>
    }
}
