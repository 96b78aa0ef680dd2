use super::super::Model;
use super::super::Msg;
use super::utils::first_file;
use crate::api::UploadFile;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <>
            { render_drop_zone(model, ctx) }
            { render_file_error(model) }
        </>
    }
}

fn render_drop_zone(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FileSelected(first_file(input.files()))
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);

    html! {
        <div
            id="drop-zone"
            class={classes!(
                "flex", "justify-center", "items-center", "rounded-lg", "border-2", "border-dashed",
                "border-gray-400", "p-4", "cursor-pointer", "hover:bg-gray-200", "transition", "duration-300",
                if model.is_dragging { "bg-gray-200" } else { "bg-gray-100" }
            )}
            ondragover={handle_drag_over}
            ondragleave={handle_drag_leave}
            ondrop={handle_drop}
        >
            // The picker filter is advisory; the build service does the real check.
            <input
                type="file"
                id="file-input"
                class="hidden"
                accept=".py"
                onchange={handle_change}
            />
            <label for="file-input" class="flex flex-col items-center justify-center cursor-pointer">
                <svg
                    class="w-10 h-10 text-blue-500"
                    fill="none"
                    stroke="currentColor"
                    viewBox="0 0 24 24"
                    xmlns="http://www.w3.org/2000/svg"
                >
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d="M7 16V8a4 4 0 014-4h2a4 4 0 014 4v8m-5 4h.01"
                    />
                </svg>
                <span class="mt-2 text-gray-600">{"Drag and drop a file or click to upload"}</span>
                {
                    if let Some(file) = model.form.selected_file() {
                        html! { <span class="mt-1 text-blue-500">{ file.file_name() }</span> }
                    } else {
                        html! {}
                    }
                }
            </label>
        </div>
    }
}

fn render_file_error(model: &Model) -> Html {
    match model.form.file_error() {
        Some(message) => html! {
            <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative" role="alert">
                <span class="block sm:inline">{ message }</span>
            </div>
        },
        None => html! {},
    }
}
