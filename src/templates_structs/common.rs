use askama::Template;

use super::APP_NAME;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub email: String,
    pub csrf_token: String,
}

impl LoginTemplate {
    pub fn app_name(&self) -> &'static str {
        APP_NAME
    }
}
