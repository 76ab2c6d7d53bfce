//! Error codes returned in the `errorCode` field and the messages shown for
//! them.

/// Codes the API puts in [`ErrorResponse::error_code`].
///
/// [`ErrorResponse::error_code`]: api_types::error::ErrorResponse::error_code
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    GeneralError = 10,
    InvalidRequest = 11,
}

impl ErrorCode {
    pub fn code(self) -> i32 {
        self as i32
    }
}

const GENERAL_ERROR_MESSAGE: &str =
    "A general error occurred against which no details can be collected.";
const INVALID_REQUEST_MESSAGE: &str = "The request is malformed or is missing required fields.";

/// Message for an error code. Codes without a dedicated message get the
/// general one.
pub fn error_message(code: i32) -> &'static str {
    match code {
        c if c == ErrorCode::InvalidRequest.code() => INVALID_REQUEST_MESSAGE,
        _ => GENERAL_ERROR_MESSAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_error_has_general_message() {
        assert_eq!(
            error_message(ErrorCode::GeneralError.code()),
            "A general error occurred against which no details can be collected."
        );
    }

    #[test]
    fn unknown_code_falls_back_to_general_message() {
        assert_eq!(error_message(999), error_message(10));
        assert_eq!(error_message(-1), GENERAL_ERROR_MESSAGE);
    }

    #[test]
    fn invalid_request_message() {
        assert_eq!(ErrorCode::InvalidRequest.code(), 11);
        assert_eq!(error_message(11), INVALID_REQUEST_MESSAGE);
    }
}
