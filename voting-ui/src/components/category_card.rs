use super::StatusMessage;
use crate::pages::CastVoteFn;
use crate::session::error_text;
use leptos::prelude::*;
use voting_app::domain::Category;

/// One contest: a name input and a vote button with its own result line.
#[component]
pub fn CategoryCard(category: Category, #[prop(into)] session_key: String) -> impl IntoView {
    let vote_action = ServerAction::<CastVoteFn>::new();
    let candidate = RwSignal::new(String::new());

    // Clear the input once the vote is in.
    Effect::new(move |_| {
        if let Some(Ok(outcome)) = vote_action.value().get() {
            if outcome.is_recorded() {
                candidate.set(String::new());
            }
        }
    });

    view! {
        <div class="category-card">
            <h3 class="category-card__title">{category.as_str()}</h3>
            <ActionForm action=vote_action attr:class="category-card__form">
                <input type="hidden" name="category" value=category.as_str()/>
                <input type="hidden" name="session_key" value=session_key/>
                <input
                    type="text"
                    name="candidate_name"
                    class="category-card__input"
                    placeholder="Enter candidate name"
                    prop:value=move || candidate.get()
                    on:input=move |ev| candidate.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="category-card__button"
                    disabled=move || vote_action.pending().get()
                >
                    {move || if vote_action.pending().get() { "Sending..." } else { "VOTE" }}
                </button>
            </ActionForm>
            {move || vote_action.value().get().map(|result| match result {
                Ok(outcome) => view! {
                    <StatusMessage success=outcome.is_recorded() message=outcome.message()/>
                }.into_any(),
                Err(e) => view! { <StatusMessage success=false message=error_text(&e)/> }.into_any(),
            })}
        </div>
    }
}
