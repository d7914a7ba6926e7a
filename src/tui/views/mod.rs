//! Render functions for each screen of the dashboard.

mod account;
mod analysis;
mod chat;
mod home;
mod lists;
mod modals;
mod radar;
mod shell;

pub use account::{render_profile, render_settings};
pub use analysis::render_analysis;
pub use chat::render_chat;
pub use home::render_home;
pub use lists::{render_case_detail, render_cases, render_catalog, render_history};
pub use modals::render_modal;
pub use radar::render_radar;
pub use shell::{render_login, render_sidebar};
