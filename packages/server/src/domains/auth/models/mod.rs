pub mod coordinator;
pub mod member;

pub use coordinator::Coordinator;
pub use member::Member;
