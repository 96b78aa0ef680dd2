use super::super::Model;
use super::super::Msg;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const INPUT_CLASS: &str =
    "w-full px-3 py-2 border rounded-md focus:outline-none focus:ring-2 focus:ring-blue-400";

pub fn render_form_fields(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let on_image_name = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::ImageNameChanged(input.value())
    });

    let on_endpoint = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::EndpointChanged(input.value())
    });

    html! {
        <>
            <div>
                <label class="block text-gray-700" for="image-name">{"Image Name"}</label>
                <input
                    id="image-name"
                    type="text"
                    class={INPUT_CLASS}
                    value={model.form.image_name().to_string()}
                    oninput={on_image_name}
                    required=true
                />
            </div>

            <div>
                <label class="block text-gray-700" for="api-endpoint">{"API Endpoint"}</label>
                <input
                    id="api-endpoint"
                    type="number"
                    class={INPUT_CLASS}
                    value={model.form.endpoint().to_string()}
                    oninput={on_endpoint}
                    required=true
                />
            </div>
        </>
    }
}

pub fn render_submit_button(model: &Model) -> Html {
    let busy = model.form.is_busy();

    html! {
        <button
            type="submit"
            class={classes!(
                "w-full", "py-2", "mt-4", "bg-gradient-to-r", "from-blue-400", "to-blue-600",
                "text-white", "font-bold", "rounded-md", "shadow-lg", "transform",
                "hover:scale-105", "hover:from-blue-500", "hover:to-blue-700", "transition", "duration-300",
                busy.then_some(classes!("opacity-50", "cursor-not-allowed"))
            )}
            disabled={!model.form.submit_enabled()}
        >
            { if busy { "Processing..." } else { "Submit" } }
        </button>
    }
}
