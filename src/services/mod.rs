pub mod minimize;
pub mod pronunciation;
pub mod response;
