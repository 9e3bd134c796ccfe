pub mod admin;
pub mod plan;
pub mod report;
pub mod search;
pub mod session;

pub use admin::AdminCommands;
pub use plan::{GenerateArgs, NormalizeArgs, PlanCommands};
pub use report::ReportCommands;
pub use search::SearchArgs;
pub use session::{LoginArgs, SessionCommands};
