use crate::session::{current_user, LogoutFn};
use leptos::prelude::*;

/// Who is signed in, with a logout button, or a login link for guests.
#[component]
pub fn UserBadge() -> impl IntoView {
    let logout_action = ServerAction::<LogoutFn>::new();
    let user = Resource::new(move || logout_action.version().get(), |_| current_user());

    view! {
        <Suspense fallback=|| ()>
            {move || user.get().map(|result| match result {
                Ok(Some(user)) => view! {
                    <div class="user-info">
                        {user.picture.map(|src| view! {
                            <img src=src alt="Avatar" class="user-info__avatar"/>
                        })}
                        <div class="user-info__details">
                            <span class="user-info__name">{user.name}</span>
                            <span class="user-info__email">
                                {user.email} " · " {user.provider.display_name()}
                            </span>
                        </div>
                        <ActionForm action=logout_action attr:class="logout-form">
                            <button type="submit" class="logout-btn">"Logout"</button>
                        </ActionForm>
                    </div>
                }.into_any(),
                _ => view! {
                    <a href="/" class="nav-link">"Login"</a>
                }.into_any(),
            })}
        </Suspense>
    }
}
