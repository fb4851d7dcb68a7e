use std::fmt;

use crate::domain::{AppError, NoticeKind};

/// The single user-visible notification produced for a failed action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: &'static str,
    pub message: String,
}

impl Notice {
    pub fn from_error(error: &AppError) -> Self {
        let kind = error.notice_kind();
        let title = match kind {
            NoticeKind::Validation => "Missing input",
            NoticeKind::Connectivity => "Backend unreachable",
            NoticeKind::Api => "Generation failed",
            NoticeKind::EmptyResult => "Nothing to show",
            NoticeKind::Other => "Error",
        };
        Self { kind, title, message: error.to_string() }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_failure_is_titled_and_keeps_body() {
        let notice = Notice::from_error(&AppError::Api {
            status: Some(500),
            message: "server error".into(),
        });
        assert_eq!(notice.kind, NoticeKind::Api);
        assert_eq!(notice.to_string(), "Generation failed: API error 500: server error");
    }

    #[test]
    fn empty_result_is_distinct_from_connectivity() {
        let empty = Notice::from_error(&AppError::EmptyResult { what: "prompts".into() });
        let offline = Notice::from_error(&AppError::Connectivity {
            base_url: "http://localhost:8000".into(),
            details: "refused".into(),
        });
        assert_ne!(empty.kind, offline.kind);
        assert_ne!(empty.title, offline.title);
    }
}
