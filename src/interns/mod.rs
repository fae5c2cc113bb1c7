pub mod credentials;
pub mod models;

pub use credentials::{generate_password, generate_username};
pub use models::{default_groups, InternAccount, InternRoster, SupportGroup};
