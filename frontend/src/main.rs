mod api;
mod components;
mod config;
mod error;
mod form;
#[cfg(test)]
mod test_support;

use api::{HttpSender, RequestSender};
use components::form_fields::{render_form_fields, render_submit_button};
use components::handlers;
use components::header::render_header;
use components::results::{render_busy_indicator, render_results};
use components::upload_section::render_upload_section;
use components::utils::render_error_message;
use config::SenderConfig;
use error::SubmitError;
use form::UploadForm;
use gloo_file::File as GlooFile;
use shared::Uuid;
use std::rc::Rc;
use web_sys::{DragEvent, SubmitEvent};
use yew::prelude::*;

// Yew msg components
enum Msg {
    // Form inputs
    FileSelected(Option<GlooFile>),
    ImageNameChanged(String),
    EndpointChanged(String),

    // Request lifecycle
    Submit,
    Settled(Uuid, Result<Vec<String>, SubmitError>),

    // Drop zone
    SetDragging(bool),
    HandleDrop(DragEvent),
}

// Main component
struct Model {
    form: UploadForm<GlooFile>,
    sender: Rc<dyn RequestSender<File = GlooFile>>,
    is_dragging: bool,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = SenderConfig::default();
        log::debug!("Build requests go to {}", config.build_url);

        Self {
            form: UploadForm::new(),
            sender: Rc::new(HttpSender::new(config)),
            is_dragging: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileSelected(file) => handlers::handle_file_selected(self, file),
            Msg::ImageNameChanged(value) => {
                self.form.set_image_name(value);
                true
            }
            Msg::EndpointChanged(value) => {
                self.form.set_endpoint(value);
                true
            }

            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::Settled(attempt, outcome) => handlers::handle_settled(self, attempt, outcome),

            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::HandleDrop(event) => handlers::handle_drop(self, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="flex flex-col items-center justify-center min-h-screen bg-gray-100">
                <div class="bg-white p-6 rounded-lg shadow-md w-full max-w-2xl">
                    { render_header() }

                    <form onsubmit={onsubmit} class="space-y-4">
                        { render_form_fields(self, ctx) }
                        { render_upload_section(self, ctx) }
                        { render_submit_button(self) }
                    </form>

                    { render_busy_indicator(self) }
                    { render_results(self) }
                    { render_error_message(self) }
                </div>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Upload form starting...");
    yew::Renderer::<Model>::new().render();
}
