mod api;

pub use self::api::{ApiResponse, EntriesResponse};
