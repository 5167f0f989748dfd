use crate::common::*;

/// Status code and fully-read body of one cluster response.
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct EsResponse {
    status: u16,
    body: String,
}

impl EsResponse {
    /// Statuses >= 400 are failures for every operation.
    pub fn is_error(&self) -> bool {
        self.status >= 400
    }

    /// Consumes the response, yielding the body text.
    pub fn into_body(self) -> String {
        self.body
    }
}
