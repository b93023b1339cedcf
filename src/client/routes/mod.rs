pub mod board;
pub mod not_found;

pub use board::Board;
pub use not_found::NotFound;
