use super::super::Model;
use shared::Phase;
use yew::prelude::*;

pub fn render_busy_indicator(model: &Model) -> Html {
    if !model.form.is_busy() {
        return html! {};
    }

    html! {
        <div class="mt-4 text-center">
            <div class="inline-block animate-spin rounded-full h-8 w-8 border-t-2 border-b-2 border-blue-500"></div>
            <p class="mt-2 text-blue-600">{"Processing your file..."}</p>
        </div>
    }
}

pub fn render_results(model: &Model) -> Html {
    if model.form.phase() != Phase::Succeeded {
        return html! {};
    }
    let urls = model.form.result_urls();

    html! {
        <div class="mt-4 bg-green-100 border border-green-400 text-green-700 px-4 py-3 rounded relative">
            <h2 class="text-xl font-semibold mb-2">{"Success!"}</h2>
            <p>{"Your Python file Image has been created and Containerized successfully."}</p>
            { for urls.iter().enumerate().filter(|(_, url)| !url.is_empty()).map(|(index, url)| html! {
                <div key={index.to_string()} class="mt-4">
                    <p class="mt-2 break-all">
                        {"Docker image URL: "}
                        <a
                            href={url.clone()}
                            class="text-blue-500 hover:underline"
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            { url }
                        </a>
                    </p>
                </div>
            })}
        </div>
    }
}
