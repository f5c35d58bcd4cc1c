pub mod components;
pub mod pages;
pub mod session;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use pages::{LoginPage, ResultsPage, VotingPage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Fresher Welcome Voting"/>
        <Meta name="description" content="Vote for King, Queen, Prince, Princess and the costume and performance awards"/>
        <Stylesheet id="leptos" href="/pkg/voting-dashboard.css"/>

        <Router>
            <main class="container">
                <Routes fallback=|| "Page not found">
                    <Route path=path!("/") view=LoginPage/>
                    <Route path=path!("/vote") view=VotingPage/>
                    <Route path=path!("/results") view=ResultsPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
