use crate::components::{ErrorDisplay, StatusMessage};
use crate::session::error_text;
use leptos::prelude::*;
use server_fn::ServerFnError;
use voting_app::domain::{AuthProvider, User};

#[server(LoginFn, "/api", endpoint = "login")]
pub async fn login(email: String, password: String) -> Result<User, ServerFnError> {
    use crate::session::ssr;

    let ctx = ssr::app_context()?;
    let session = ssr::session().await?;

    let user_session = ctx
        .authenticate
        .login(&email, &password)
        .await
        .map_err(|e| e.into_server_error())?;

    ssr::store_user(&session, &user_session).await?;
    leptos_axum::redirect("/vote");
    Ok(user_session.user)
}

#[server(RegisterFn, "/api", endpoint = "register")]
pub async fn register(
    email: String,
    password: String,
    name: String,
) -> Result<String, ServerFnError> {
    use crate::session::ssr;

    let ctx = ssr::app_context()?;
    ctx.authenticate
        .register(&email, &password, &name)
        .await
        .map_err(|e| e.into_server_error())
}

#[server(OAuthLoginFn, "/api", endpoint = "oauth_login")]
pub async fn oauth_login(provider: String) -> Result<User, ServerFnError> {
    use crate::session::ssr;
    use voting_errors::AppError;

    let ctx = ssr::app_context()?;
    let session = ssr::session().await?;

    let provider = provider
        .parse::<AuthProvider>()
        .map_err(|e| AppError::Validation(e).into_server_error())?;

    let user_session = ctx
        .authenticate
        .oauth_login(provider)
        .map_err(|e| e.into_server_error())?;

    ssr::store_user(&session, &user_session).await?;
    leptos_axum::redirect("/vote");
    Ok(user_session.user)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let login_action = ServerAction::<LoginFn>::new();
    let register_action = ServerAction::<RegisterFn>::new();
    let oauth_action = ServerAction::<OAuthLoginFn>::new();
    let is_login = RwSignal::new(true);

    // A successful registration flips back to the login form.
    Effect::new(move |_| {
        if let Some(Ok(_)) = register_action.value().get() {
            is_login.set(true);
        }
    });

    let busy = move || {
        login_action.pending().get()
            || register_action.pending().get()
            || oauth_action.pending().get()
    };

    view! {
        <div class="hero">
            <h1 class="hero__title">"Fresher Welcome Voting"</h1>
            <p class="hero__subtitle">"Sign in to cast your votes"</p>
        </div>

        <div class="auth-card">
            <div class="auth-card__tabs">
                <button
                    class="auth-card__tab"
                    class:auth-card__tab--active=move || is_login.get()
                    on:click=move |_| is_login.set(true)
                >
                    "Login"
                </button>
                <button
                    class="auth-card__tab"
                    class:auth-card__tab--active=move || !is_login.get()
                    on:click=move |_| is_login.set(false)
                >
                    "Register"
                </button>
            </div>

            <Show
                when=move || is_login.get()
                fallback=move || view! {
                    <ActionForm action=register_action attr:class="auth-form">
                        <input type="text" name="name" class="auth-form__input" placeholder="Full name" required/>
                        <input type="email" name="email" class="auth-form__input" placeholder="Email" required/>
                        <input type="password" name="password" class="auth-form__input" placeholder="Password (min 6 characters)" required/>
                        <button type="submit" class="auth-form__button" disabled=busy>
                            {move || if register_action.pending().get() { "Creating account..." } else { "Create account" }}
                        </button>
                    </ActionForm>
                }
            >
                <ActionForm action=login_action attr:class="auth-form">
                    <input type="email" name="email" class="auth-form__input" placeholder="Email" required/>
                    <input type="password" name="password" class="auth-form__input" placeholder="Password" required/>
                    <button type="submit" class="auth-form__button" disabled=busy>
                        {move || if login_action.pending().get() { "Signing in..." } else { "Login" }}
                    </button>
                </ActionForm>
            </Show>

            {move || register_action.value().get().map(|result| match result {
                Ok(message) => view! { <StatusMessage success=true message=message/> }.into_any(),
                Err(e) => view! { <ErrorDisplay message=error_text(&e)/> }.into_any(),
            })}
            {move || login_action.value().get().and_then(|result| result.err()).map(|e| view! {
                <ErrorDisplay message=error_text(&e)/>
            })}

            <div class="auth-card__divider">"or continue with"</div>

            <div class="oauth-buttons">
                {AuthProvider::OAUTH.into_iter().map(|provider| view! {
                    <ActionForm action=oauth_action attr:class="oauth-buttons__form">
                        <input type="hidden" name="provider" value=provider.as_str()/>
                        <button type="submit" class="oauth-buttons__button" disabled=busy>
                            {provider.display_name()}
                        </button>
                    </ActionForm>
                }).collect::<Vec<_>>()}
            </div>
            {move || oauth_action.value().get().and_then(|result| result.err()).map(|e| view! {
                <ErrorDisplay message=error_text(&e)/>
            })}

            <p class="auth-card__skip">
                <a href="/vote">"Continue without an account"</a>
            </p>
        </div>
    }
}
