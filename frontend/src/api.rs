use crate::config::SenderConfig;
use crate::error::{GENERIC_SERVER_MESSAGE, SubmitError};
use futures::FutureExt;
use futures::future::LocalBoxFuture;
use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::{
    BuildResponse, EndpointValue, ErrorResponse, FIELD_ENDPOINT, FIELD_FILE, FIELD_IMAGE_NAME,
    ImageName,
};
use wasm_bindgen::JsValue;
use web_sys::FormData;

/// A file handle the form can hold and upload.
pub trait UploadFile: Clone {
    fn file_name(&self) -> String;
}

impl UploadFile for GlooFile {
    fn file_name(&self) -> String {
        self.name()
    }
}

/// The three multipart fields sent to the build service.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildRequest<F> {
    pub file: F,
    pub image_name: ImageName,
    pub endpoint: EndpointValue,
}

impl<F> BuildRequest<F> {
    pub fn text_fields(&self) -> [(&'static str, &str); 2] {
        [
            (FIELD_IMAGE_NAME, self.image_name.as_str()),
            (FIELD_ENDPOINT, self.endpoint.as_str()),
        ]
    }
}

/// Whatever HTTP response came back, before interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawReply {
    pub status: u16,
    pub body: String,
}

impl RawReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Capability to deliver a build request. Errors returned here are limited to
/// `RequestConstruction` (nothing left the browser) and `NoResponse` (the
/// request went out but nothing came back).
pub trait RequestSender {
    type File;

    fn send(
        &self,
        request: BuildRequest<Self::File>,
    ) -> LocalBoxFuture<'static, Result<RawReply, SubmitError>>;
}

pub struct HttpSender {
    config: SenderConfig,
}

impl HttpSender {
    pub fn new(config: SenderConfig) -> Self {
        Self { config }
    }
}

impl RequestSender for HttpSender {
    type File = GlooFile;

    fn send(
        &self,
        request: BuildRequest<GlooFile>,
    ) -> LocalBoxFuture<'static, Result<RawReply, SubmitError>> {
        let url = self.config.build_url.clone();

        async move {
            let form_data = to_form_data(&request)?;

            // No explicit Content-Type: the browser adds the multipart boundary.
            let response = Request::post(&url)
                .body(form_data)
                .map_err(|err| SubmitError::RequestConstruction(err.to_string()))?
                .send()
                .await
                .map_err(|err| SubmitError::NoResponse(err.to_string()))?;

            let status = response.status();
            let body = response.text().await.unwrap_or_else(|err| {
                log::warn!("Failed to read response body (status {}): {}", status, err);
                String::new()
            });

            Ok::<_, SubmitError>(RawReply { status, body })
        }
        .boxed_local()
    }
}

fn to_form_data(request: &BuildRequest<GlooFile>) -> Result<FormData, SubmitError> {
    let construction = |err: JsValue| SubmitError::RequestConstruction(format!("{:?}", err));

    let form_data = FormData::new().map_err(construction)?;
    form_data
        .append_with_blob_and_filename(FIELD_FILE, request.file.as_ref(), &request.file.name())
        .map_err(construction)?;
    for (name, value) in request.text_fields() {
        form_data.append_with_str(name, value).map_err(construction)?;
    }

    Ok(form_data)
}

/// Maps an HTTP reply onto the result URLs or a server error. A 2xx reply
/// must carry at least one non-empty URL to count as a success.
pub fn classify_reply(reply: RawReply) -> Result<Vec<String>, SubmitError> {
    if reply.is_success() {
        let generic = || SubmitError::Server {
            status: reply.status,
            message: GENERIC_SERVER_MESSAGE.to_string(),
        };

        let urls = serde_json::from_str::<BuildResponse>(&reply.body)
            .map(|parsed| parsed.urls)
            .map_err(|err| {
                log::warn!("Unexpected success body from build service: {}", err);
                generic()
            })?;

        if urls.iter().all(|url| url.is_empty()) {
            log::warn!("Build service reported success without any URLs");
            return Err(generic());
        }
        return Ok(urls);
    }

    let message = serde_json::from_str::<ErrorResponse>(&reply.body)
        .ok()
        .and_then(|body| body.message().map(str::to_owned))
        .unwrap_or_else(|| GENERIC_SERVER_MESSAGE.to_string());

    Err(SubmitError::Server {
        status: reply.status,
        message,
    })
}

pub async fn submit_build<S>(
    sender: &S,
    request: BuildRequest<S::File>,
) -> Result<Vec<String>, SubmitError>
where
    S: RequestSender + ?Sized,
{
    let reply = sender.send(request).await?;
    classify_reply(reply)
}
