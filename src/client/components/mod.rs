pub mod board;
pub mod navbar;
pub mod page;
pub mod toast;

pub use navbar::Navbar;
pub use page::Page;
pub use toast::ToastStack;
