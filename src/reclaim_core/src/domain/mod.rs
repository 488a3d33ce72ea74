pub mod link;
pub mod recovery;
pub mod session;
