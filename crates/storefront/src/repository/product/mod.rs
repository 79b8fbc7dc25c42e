mod command;
mod query;

pub use self::command::*;
pub use self::query::*;
