use crate::components::{CategoryCard, ErrorDisplay, LoadingSpinner, UserBadge};
use crate::session::error_text;
use leptos::prelude::*;
use server_fn::ServerFnError;
use voting_app::domain::{Category, SecurityData, VoteOutcome};

#[server(DeviceIdentityFn, "/api", endpoint = "device_identity")]
pub async fn device_identity() -> Result<SecurityData, ServerFnError> {
    use crate::session::ssr;
    use voting_app::infrastructure::security::DeviceIdentityManager;

    let session = ssr::session().await?;
    let identity = ssr::load_device(&session).await?;
    Ok(DeviceIdentityManager::security_data(&identity))
}

#[server(CastVoteFn, "/api", endpoint = "cast_vote")]
pub async fn cast_vote(
    category: String,
    candidate_name: String,
    session_key: String,
) -> Result<VoteOutcome, ServerFnError> {
    use crate::session::ssr;
    use voting_app::infrastructure::security::DeviceIdentityManager;
    use voting_errors::AppError;

    let ctx = ssr::app_context()?;
    let session = ssr::session().await?;
    let identity = ssr::load_device(&session).await?;

    DeviceIdentityManager::verify_session(&identity, &session_key)
        .map_err(|e| e.into_server_error())?;

    let category = category
        .parse::<Category>()
        .map_err(|e| AppError::Validation(e.to_string()).into_server_error())?;

    ctx.cast_vote
        .execute(&identity.device_id, category, &candidate_name)
        .await
        .map_err(|e| e.into_server_error())
}

#[component]
pub fn VotingPage() -> impl IntoView {
    let device = Resource::new(|| (), |_| device_identity());

    view! {
        <header class="page-header">
            <h1 class="hero__title">"Cast Your Votes"</h1>
            <nav class="page-header__nav">
                <a href="/results" class="nav-link">"View Results Dashboard"</a>
            </nav>
            <UserBadge/>
        </header>

        <Suspense fallback=move || view! { <LoadingSpinner/> }>
            {move || device.get().map(|result| match result {
                Ok(security) => {
                    let session_key = security.session_key.clone();
                    view! {
                        <div class="category-grid">
                            {Category::ALL.into_iter().map(|category| view! {
                                <CategoryCard category=category session_key=session_key.clone()/>
                            }).collect::<Vec<_>>()}
                        </div>
                        <p class="device-note">
                            "One vote per category from this device ("
                            <code>{security.device_id}</code>
                            ")"
                        </p>
                    }.into_any()
                }
                Err(e) => view! { <ErrorDisplay message=error_text(&e)/> }.into_any(),
            })}
        </Suspense>
    }
}
