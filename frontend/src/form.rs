use crate::api::{BuildRequest, UploadFile};
use crate::error::SubmitError;
use shared::{EndpointValue, ImageName, Phase, RequestState, Uuid};
use std::mem;

/// A request the form has committed to; the caller must deliver it and report
/// back through [`UploadForm::on_settled`] with the same attempt id.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<F> {
    pub attempt: Uuid,
    pub request: BuildRequest<F>,
}

/// Client-side state of the upload form.
///
/// Never touches the DOM or the network, so the whole submission lifecycle
/// can be driven without a browser.
#[derive(Debug, Clone)]
pub struct UploadForm<F> {
    file: Option<F>,
    image_name: ImageName,
    endpoint: EndpointValue,
    state: RequestState,
    file_error: Option<String>,
}

impl<F> Default for UploadForm<F> {
    fn default() -> Self {
        Self {
            file: None,
            image_name: ImageName::default(),
            endpoint: EndpointValue::default(),
            state: RequestState::Idle,
            file_error: None,
        }
    }
}

impl<F: UploadFile> UploadForm<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cancelled picker reports `None`, which clears the selection.
    pub fn on_file_change(&mut self, file: Option<F>) {
        match &file {
            Some(file) => log::debug!("Selected file: {}", file.file_name()),
            None => log::debug!("File selection cleared"),
        }
        self.file = file;
        self.file_error = None;
    }

    pub fn set_image_name(&mut self, value: String) {
        self.image_name = ImageName::from(value);
    }

    pub fn set_endpoint(&mut self, value: String) {
        self.endpoint = EndpointValue::from(value);
    }

    pub fn on_submit(&mut self) -> Result<Submission<F>, SubmitError> {
        if self.state.is_in_flight() {
            log::debug!("Submit ignored, a request is already in flight");
            return Err(SubmitError::Busy);
        }

        let previous = mem::replace(&mut self.state, RequestState::Validating);

        let Some(file) = self.file.clone() else {
            self.state = previous;
            self.file_error = Some(SubmitError::MissingFile.user_message());
            log::warn!("Submit rejected: no file selected");
            return Err(SubmitError::MissingFile);
        };

        let attempt = Uuid::new_v4();
        self.state = RequestState::InFlight { attempt };
        log::info!(
            "Submitting {} as image '{}' (attempt {})",
            file.file_name(),
            self.image_name,
            attempt
        );

        Ok(Submission {
            attempt,
            request: BuildRequest {
                file,
                image_name: self.image_name.clone(),
                endpoint: self.endpoint.clone(),
            },
        })
    }

    /// Applies the outcome of `attempt`. Returns `false`, leaving the state
    /// untouched, when that attempt is not the one in flight.
    pub fn on_settled(&mut self, attempt: Uuid, outcome: Result<Vec<String>, SubmitError>) -> bool {
        if self.state.attempt() != Some(attempt) {
            log::warn!("Ignoring outcome of stale attempt {}", attempt);
            return false;
        }

        self.state = match outcome {
            Ok(urls) => {
                log::info!("Attempt {} succeeded with {} url(s)", attempt, urls.len());
                RequestState::Succeeded { urls }
            }
            Err(err) => {
                log::error!("Attempt {} failed: {}", attempt, err);
                RequestState::Failed {
                    message: err.user_message(),
                }
            }
        };

        true
    }

    pub fn selected_file(&self) -> Option<&F> {
        self.file.as_ref()
    }
}

impl<F> UploadForm<F> {
    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn image_name(&self) -> &ImageName {
        &self.image_name
    }

    pub fn endpoint(&self) -> &EndpointValue {
        &self.endpoint
    }

    pub fn file_error(&self) -> Option<&str> {
        self.file_error.as_deref()
    }

    pub fn result_urls(&self) -> &[String] {
        self.state.result_urls()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.state.error_message()
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_in_flight()
    }

    pub fn submit_enabled(&self) -> bool {
        !self.is_busy()
    }
}
