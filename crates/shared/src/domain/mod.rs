mod nullable;
pub mod responses;

pub use self::nullable::Nullable;
