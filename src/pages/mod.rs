mod chat;
mod create_account;
mod home;
mod not_found;
mod notifications;
mod profile;

pub use chat::Chat;
pub use create_account::CreateAccount;
pub use home::Home;
pub use not_found::NotFound;
pub use notifications::Notifications;
pub use profile::ProfileDetail;
