use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1 class="text-2xl font-bold mb-4 text-center">{"Automated Docker Image Creation"}</h1>
        </header>
    }
}
