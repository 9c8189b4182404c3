//! UI components for the portfolio.

pub mod app;
pub mod navbar;
pub mod footer;
pub mod background;
pub mod icons;
pub mod about;
pub mod skills;
pub mod projects;
pub mod experience;
pub mod contact;
pub mod not_found;
pub mod page_title;
