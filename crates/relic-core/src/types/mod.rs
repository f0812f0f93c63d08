pub mod id;
pub mod timestamp;

pub use id::{ActorId, CompanyId, RecordId};
pub use timestamp::Timestamp;
