/// Data Transfer Objects for application layer
///
/// DTOs carry requests from the CLI into the use cases and summaries back,
/// keeping the domain layer isolated.
mod analysis_request;
mod generation_request;
mod generation_response;
mod selection_request;
mod selection_response;

pub use analysis_request::{AnalysisRequest, AnalysisResponse};
pub use generation_request::GenerationRequest;
pub use generation_response::{GenerationResponse, SeedOutcome};
pub use selection_request::{parse_frame_date, SelectionRequest};
pub use selection_response::SelectionResponse;
