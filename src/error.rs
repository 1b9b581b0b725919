use std::io::Cursor;

use rocket::{
    http::{ContentType, Status},
    response::{self, Responder},
    serde::json::json,
    Request, Response,
};
use thiserror::Error;

/// Every way a request handler can fail, mapped onto the HTTP status and
/// JSON `{"error": ...}` body clients expect.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Both english and myanmar texts are required")]
    MissingTranslationFields,
    #[error("{0}")]
    Store(#[from] sqlx::Error),
}

impl Error {
    fn status(&self) -> Status {
        match self {
            Error::MissingTranslationFields => Status::BadRequest,
            Error::Store(_) => Status::InternalServerError,
        }
    }
}

impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        let body = json!({ "error": self.to_string() }).to_string();
        Response::build()
            .status(status)
            .header(ContentType::JSON)
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_is_bad_request() {
        let error = Error::MissingTranslationFields;
        assert_eq!(error.status(), Status::BadRequest);
        assert_eq!(
            error.to_string(),
            "Both english and myanmar texts are required"
        );
    }

    #[test]
    fn test_store_errors_are_internal() {
        let error = Error::Store(sqlx::Error::PoolClosed);
        assert_eq!(error.status(), Status::InternalServerError);
    }
}
