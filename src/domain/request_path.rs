//! Classification of public request paths.

/// Suffix that turns a redirect path into a stats path.
pub const STATS_SUFFIX: &str = "/stats";

/// What a public `GET` path asks for.
///
/// Classification is purely by shape; the carried code is not checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestPath<'a> {
    /// `/<code>`: follow the link and count the click.
    Redirect(&'a str),
    /// `/<code>/stats`: show the counter without touching it.
    Stats(&'a str),
}

impl<'a> RequestPath<'a> {
    /// Classifies a raw URI path. Every input maps to exactly one variant.
    pub fn classify(path: &'a str) -> Self {
        let path = path.strip_prefix('/').unwrap_or(path);

        match path.strip_suffix(STATS_SUFFIX) {
            Some(code) => RequestPath::Stats(code),
            None => RequestPath::Redirect(path),
        }
    }

    /// The code part of the path.
    pub fn code(&self) -> &'a str {
        match self {
            RequestPath::Redirect(code) | RequestPath::Stats(code) => code,
        }
    }
}
