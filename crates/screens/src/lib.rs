//! Screen controllers: each screen binds fields through a `ViewPort`,
//! runs the validation engine, calls the API client and renders the
//! outcome. No controller touches a concrete UI directly.

pub mod errors;
pub mod view;
pub mod state;
pub mod hooks;
pub mod register;
pub mod login;
pub mod categories;
pub mod term;

/// Navigation targets the screens hand to `ViewPort::navigate`.
pub const LOGIN_TARGET: &str = "login";
pub const CATEGORIES_TARGET: &str = "categorias";
