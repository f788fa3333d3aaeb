pub mod filter;
pub mod layout;
pub mod toast;

pub use toast::Notifier;
