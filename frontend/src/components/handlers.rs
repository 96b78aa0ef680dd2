use super::super::Model;
use super::super::Msg;
use super::utils::first_file;
use crate::api::submit_build;
use crate::error::SubmitError;
use gloo_file::File as GlooFile;
use shared::Uuid;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::DragEvent;
use yew::prelude::*;

pub fn handle_file_selected(model: &mut Model, file: Option<GlooFile>) -> bool {
    model.form.on_file_change(file);
    true
}

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>) -> bool {
    match model.form.on_submit() {
        Ok(submission) => {
            let link = ctx.link().clone();
            let sender = Rc::clone(&model.sender);
            let attempt = submission.attempt;

            spawn_local(async move {
                let outcome = submit_build(&*sender, submission.request).await;
                link.send_message(Msg::Settled(attempt, outcome));
            });

            true
        }
        Err(SubmitError::Busy) => false,
        Err(_) => true,
    }
}

pub fn handle_settled(
    model: &mut Model,
    attempt: Uuid,
    outcome: Result<Vec<String>, SubmitError>,
) -> bool {
    if let Err(err) = &outcome {
        gloo_console::error!(format!("API Error: {}", err));
    }
    let changed = model.form.on_settled(attempt, outcome);
    log::debug!("Form state after settlement: {:?}", model.form.state());
    changed
}

pub fn handle_drop(model: &mut Model, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    let dropped = event.data_transfer().and_then(|data_transfer| data_transfer.files());
    match first_file(dropped) {
        Some(file) => handle_file_selected(model, Some(file)),
        None => {
            log::warn!("Drop contained no files");
            true
        }
    }
}
