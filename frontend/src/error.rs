use thiserror::Error;

pub const FILE_REQUIRED_MESSAGE: &str = "Please upload a Python file!";
pub const GENERIC_SERVER_MESSAGE: &str = "An error occurred while processing your request.";
pub const NO_RESPONSE_MESSAGE: &str =
    "No response received from the server. Please try again later.";
pub const SEND_FAILED_MESSAGE: &str =
    "An error occurred while sending the request. Please try again.";

/// Every way a submission can end without result URLs.
///
/// The `Display` text carries the developer-facing detail that goes to the
/// log; [`SubmitError::user_message`] is what the form shows.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("no file selected")]
    MissingFile,

    #[error("a submission is already in flight")]
    Busy,

    #[error("server responded with status {status}: {message}")]
    Server { status: u16, message: String },

    #[error("no response received: {0}")]
    NoResponse(String),

    #[error("failed to build request: {0}")]
    RequestConstruction(String),
}

impl SubmitError {
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::MissingFile => FILE_REQUIRED_MESSAGE.to_string(),
            // Never displayed: the submit button is disabled while in flight.
            SubmitError::Busy => String::new(),
            SubmitError::Server { message, .. } => message.clone(),
            SubmitError::NoResponse(_) => NO_RESPONSE_MESSAGE.to_string(),
            SubmitError::RequestConstruction(_) => SEND_FAILED_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_shows_its_own_message() {
        let err = SubmitError::Server { status: 400, message: "bad image name".into() };
        assert_eq!(err.user_message(), "bad image name");
        assert_eq!(err.to_string(), "server responded with status 400: bad image name");
    }

    #[test]
    fn transport_errors_hide_their_detail_from_the_user() {
        let no_response = SubmitError::NoResponse("connection refused".into());
        assert_eq!(no_response.user_message(), NO_RESPONSE_MESSAGE);
        assert!(no_response.to_string().contains("connection refused"));

        let construction = SubmitError::RequestConstruction("FormData unavailable".into());
        assert_eq!(construction.user_message(), SEND_FAILED_MESSAGE);
        assert_ne!(construction.user_message(), no_response.user_message());
    }

    #[test]
    fn busy_has_no_user_message() {
        assert_eq!(SubmitError::Busy.user_message(), "");
    }

    #[test]
    fn missing_file_uses_the_fixed_prompt() {
        assert_eq!(SubmitError::MissingFile.user_message(), "Please upload a Python file!");
    }
}
