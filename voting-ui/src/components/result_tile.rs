use leptos::prelude::*;
use voting_app::domain::{Category, CategoryResult, DashboardSnapshot};

/// Count, share and leading candidate of one category.
#[component]
pub fn ResultTile(category: Category, snapshot: Signal<DashboardSnapshot>) -> impl IntoView {
    let count = move || snapshot.with(|s| s.counts.get(category));
    let share = move || snapshot.with(|s| s.counts.share_percent(category));
    let bar_width = move || {
        let ratio = snapshot.with(|s| s.counts.share_ratio(category));
        format!("width: {:.1}%", ratio * 100.0)
    };
    let leader = move || snapshot.with(|s| s.results.get(category).cloned());

    view! {
        <div class="result-tile">
            <h3 class="result-tile__title">{category.as_str()}</h3>
            <p class="result-tile__count">{count}</p>
            <p class="result-tile__share">{move || format!("{}%", share())}</p>
            <div class="result-tile__bar">
                <div class="result-tile__fill" style=bar_width></div>
            </div>
            {move || leader().map(|result| view! { <LeaderLine result=result/> })}
        </div>
    }
}

#[component]
fn LeaderLine(result: CategoryResult) -> impl IntoView {
    let runners_up: Vec<String> = result
        .ranked_candidates()
        .into_iter()
        .skip(1)
        .take(3)
        .map(|(name, votes)| format!("{name} ({votes})"))
        .collect();

    view! {
        <div class="result-tile__leader">
            <p class="result-tile__leader-name" class:result-tile__leader-name--tie=result.is_tie()>
                {result.leading_candidate.clone()}
            </p>
            <p class="result-tile__leader-votes">{format!("{} votes", result.votes)}</p>
            {(!runners_up.is_empty()).then(|| view! {
                <p class="result-tile__runners-up">{runners_up.join(", ")}</p>
            })}
        </div>
    }
}
