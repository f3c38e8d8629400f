pub mod canned;
pub mod classifier;
pub mod gateway;
pub mod providers;

pub use canned::CannedResponses;
pub use classifier::{classify, ErrorCategory};
pub use gateway::QuestionGateway;
