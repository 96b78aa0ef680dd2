use super::super::Model;
use gloo_file::File as GlooFile;
use web_sys::FileList;
use yew::prelude::*;

/// The form takes a single file; anything past the first is ignored.
pub fn first_file(file_list: Option<FileList>) -> Option<GlooFile> {
    file_list
        .and_then(|files| files.item(0))
        .map(GlooFile::from)
}

pub fn render_error_message(model: &Model) -> Html {
    if let Some(error_msg) = model.form.error_message() {
        html! {
            <div class="mt-4 bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative overflow-hidden" role="alert">
                <h2 class="text-xl font-semibold mb-2">{"Error"}</h2>
                <p class="break-words">{ error_msg }</p>
            </div>
        }
    } else {
        html! {}
    }
}
