use crate::utils::output::OutputStyle;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Classify a template engine failure raised while loading or rendering `name`
    ///
    /// A not-found error names the template that is actually missing, which
    /// differs from `name` when an included template is absent.
    pub fn from_template(err: minijinja::Error, name: &str) -> Self {
        match err.kind() {
            minijinja::ErrorKind::TemplateNotFound => {
                let missing = err
                    .detail()
                    .and_then(|detail| detail.split('"').nth(1))
                    .unwrap_or(name);
                AppError::TemplateNotFound(missing.to_string())
            }
            _ => AppError::Template(err.to_string()),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");

        let body = Html(
            "<!DOCTYPE html>\n<html><head><title>Server Error (500)</title></head>\
             <body><h1>Server Error (500)</h1></body></html>\n",
        );
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

pub fn report_error(err: &AppError) {
    match err {
        AppError::TemplateNotFound(name) => {
            eprintln!(
                "❌ {}",
                OutputStyle::error(&format!("Template '{}' not found", name))
            );
        }
        AppError::Template(msg) => {
            eprintln!("❌ {}", OutputStyle::error(&format!("Template: {}", msg)));
        }
        AppError::Config(msg) => {
            eprintln!("⚠️  {}", OutputStyle::warning(&format!("Config: {}", msg)));
        }
        AppError::Io(msg) | AppError::Server(msg) => {
            eprintln!("❌ {}", OutputStyle::error(msg));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_kind_maps_to_template_not_found() {
        let env = minijinja::Environment::new();
        let err = env.get_template("missing.html").err().expect("template is missing");

        match AppError::from_template(err, "missing.html") {
            AppError::TemplateNotFound(name) => assert_eq!(name, "missing.html"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_include_names_the_include() {
        let mut env = minijinja::Environment::new();
        env.add_template("home.html", "<nav>{% include \"nav.html\" %}</nav>")
            .unwrap();
        let err = env
            .get_template("home.html")
            .unwrap()
            .render(())
            .err()
            .expect("include is missing");

        match AppError::from_template(err, "home.html") {
            AppError::TemplateNotFound(name) => assert_eq!(name, "nav.html"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_syntax_error_maps_to_template() {
        let mut env = minijinja::Environment::new();
        let err = env.add_template("broken.html", "{% for %}").err().expect("syntax error");

        assert!(matches!(
            AppError::from_template(err, "broken.html"),
            AppError::Template(_)
        ));
    }

    #[test]
    fn test_into_response_is_server_error() {
        let response = AppError::TemplateNotFound("home.html".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
