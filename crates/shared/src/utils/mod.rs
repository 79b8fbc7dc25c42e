mod deadline;
mod gracefullshutdown;
mod logs;
mod metrics;

pub use self::deadline::{ContextTimeout, Deadline};
pub use self::gracefullshutdown::shutdown_signal;
pub use self::logs::init_logger;
pub use self::metrics::{Method, Metrics, Status};
