pub mod assignment;
pub mod exclusion;
pub mod participant;
pub mod request;
pub mod response;

pub use assignment::Assignment;
pub use exclusion::ExclusionRule;
pub use participant::Participant;
pub use request::DrawRequest;
pub use response::DrawResponse;
