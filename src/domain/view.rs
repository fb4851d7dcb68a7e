//! View selection and the location surface that mirrors it.

use std::fmt;

use url::{ParseError, Url, form_urlencoded};

use super::AppError;

/// Query parameter carrying the selected view.
pub const VIEW_PARAM: &str = "view";
/// Value of [`VIEW_PARAM`] selecting the working view.
pub const WORKING_VIEW_VALUE: &str = "prompt";

const LEGACY_WORKING_PATH: &str = "/prompt";
const LOCAL_ORIGIN: &str = "http://localhost/";

/// Which top-level view is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Landing,
    Working,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Landing => "landing",
            View::Working => "working",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An application location, absolute (`http://host/?view=prompt`) or
/// origin-relative (`/?view=prompt`). Relative locations print back relative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    url: Url,
    relative: bool,
}

impl Location {
    /// The bare application root, `/`.
    pub fn root() -> Self {
        Self { url: local_origin(), relative: true }
    }

    pub fn parse(input: &str) -> Result<Self, AppError> {
        let trimmed = input.trim();
        match Url::parse(trimmed) {
            Ok(url) => Ok(Self { url, relative: false }),
            Err(ParseError::RelativeUrlWithoutBase) => {
                if has_authority(trimmed) {
                    return Err(AppError::validation(format!(
                        "Invalid location '{}': relative locations cannot name a host",
                        trimmed
                    )));
                }
                let url = local_origin().join(trimmed).map_err(|e| invalid_location(trimmed, e))?;
                Ok(Self { url, relative: true })
            }
            Err(e) => Err(invalid_location(trimmed, e)),
        }
    }

    /// Rewrite the legacy `/prompt` path into the query-parameter form.
    pub fn normalized(mut self) -> Self {
        if self.url.path().trim_end_matches('/') == LEGACY_WORKING_PATH {
            self.url.set_path("/");
            return self.with_working_view();
        }
        self
    }

    /// Whether the location explicitly asks for the working view.
    pub fn requests_working_view(&self) -> bool {
        self.url.query_pairs().any(|(key, value)| key == VIEW_PARAM && value == WORKING_VIEW_VALUE)
    }

    pub fn with_working_view(&self) -> Self {
        self.rebuild_query(Some(WORKING_VIEW_VALUE))
    }

    pub fn without_view(&self) -> Self {
        self.rebuild_query(None)
    }

    /// Replace the view parameter, keeping every other pair exactly as written.
    fn rebuild_query(&self, view: Option<&str>) -> Self {
        let mut segments: Vec<String> = self
            .url
            .query()
            .unwrap_or_default()
            .split('&')
            .filter(|segment| !segment.is_empty() && !is_view_segment(segment))
            .map(str::to_string)
            .collect();
        if let Some(value) = view {
            segments.push(format!("{}={}", VIEW_PARAM, value));
        }

        let mut url = self.url.clone();
        if segments.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&segments.join("&")));
        }
        Self { url, relative: self.relative }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.relative {
            return f.write_str(self.url.as_str());
        }
        f.write_str(self.url.path())?;
        if let Some(query) = self.url.query() {
            write!(f, "?{}", query)?;
        }
        Ok(())
    }
}

fn is_view_segment(segment: &str) -> bool {
    form_urlencoded::parse(segment.as_bytes()).any(|(key, _)| key == VIEW_PARAM)
}

/// `//host/...` (or its backslash spellings) would replace the origin on join.
fn has_authority(input: &str) -> bool {
    let mut chars = input.chars();
    matches!((chars.next(), chars.next()), (Some('/' | '\\'), Some('/' | '\\')))
}

fn local_origin() -> Url {
    Url::parse(LOCAL_ORIGIN).expect("static origin URL is valid")
}

fn invalid_location(input: &str, err: ParseError) -> AppError {
    AppError::validation(format!("Invalid location '{}': {}", input, err))
}
