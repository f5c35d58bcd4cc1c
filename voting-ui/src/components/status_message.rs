use leptos::prelude::*;

/// Inline outcome line shown next to the control that produced it.
#[component]
pub fn StatusMessage(success: bool, #[prop(into)] message: String) -> impl IntoView {
    let (class, icon) = if success {
        ("status status--ok", "✅")
    } else {
        ("status status--fail", "❌")
    };

    view! {
        <p class=class role="status">
            <span class="status__icon">{icon}</span>
            " "
            {message}
        </p>
    }
}
