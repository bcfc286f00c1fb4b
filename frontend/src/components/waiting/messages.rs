use common::jobs::BulkJob;

use crate::api::ApiError;

pub enum Msg {
    /// Timer tick (or the immediate first poll).
    Tick,
    /// A status request resolved.
    StatusFetched(Result<BulkJob, ApiError>),
    /// Rotate the idle quote.
    NextQuote,
}
