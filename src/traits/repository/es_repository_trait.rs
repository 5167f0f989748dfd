use crate::common::*;

use crate::enums::request_method::*;
use crate::model::es_response::*;

#[async_trait]
pub trait EsRepository {
    /// Single authenticated request against `endpoint + path`, no retries.
    ///
    /// Returns the raw status and body even for statuses >= 400; judging
    /// the status is up to the caller. Aborts with `AdminError::Cancelled`
    /// once `cancel` fires.
    async fn send_request(
        &self,
        cancel: &CancellationToken,
        method: RequestMethod,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> anyhow::Result<EsResponse>;
}
