use axum::response::Html;
use minijinja::Environment;
use serde::Serialize;

use super::api_entities::api_error::ApiError;

const PAGES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../../../templates/base.html")),
    ("index.html", include_str!("../../../../templates/index.html")),
    ("upload.html", include_str!("../../../../templates/upload.html")),
    ("results.html", include_str!("../../../../templates/results.html")),
    ("style.html", include_str!("../../../../templates/style.html")),
    ("chat.html", include_str!("../../../../templates/chat.html")),
];

/// Page templates compiled into the binary
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in PAGES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<Html<String>, ApiError> {
        let template = self.env.get_template(name)?;
        Ok(Html(template.render(ctx)?))
    }
}
