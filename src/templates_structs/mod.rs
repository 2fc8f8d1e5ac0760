// Template context structures for askama templates, organized by page.

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::get_user_name;

pub const APP_NAME: &str = "Acme Invoices";

/// Common context shared by all authenticated pages.
/// Templates access these as `ctx.user_name`, `ctx.csrf_token`, etc.
pub struct PageContext {
    pub user_name: String,
    pub avatar_initial: String,
    pub app_name: &'static str,
    pub csrf_token: String,
}

impl PageContext {
    pub fn build(session: &Session) -> Self {
        let user_name = get_user_name(session);
        let avatar_initial = user_name
            .chars()
            .next()
            .unwrap_or('?')
            .to_uppercase()
            .to_string();
        let csrf_token = csrf::get_or_create_token(session);
        Self { user_name, avatar_initial, app_name: APP_NAME, csrf_token }
    }
}

mod common;
mod invoice;

pub use common::*;
pub use invoice::*;
