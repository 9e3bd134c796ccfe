pub mod admin;
pub mod dispatch;
pub mod plan;
pub mod report;
pub mod search;
pub mod session;
