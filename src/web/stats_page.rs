//! Link statistics page.

use askama::Template;
use askama_web::WebTemplate;

use crate::application::services::StatsView;

/// Template for the public statistics page.
///
/// Renders `templates/stats.html` with the original URL, the click count
/// and the short URL. All values are HTML-escaped by Askama.
#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsPage {
    pub short_code: String,
    pub original_url: String,
    pub clicks: i64,
    pub short_url: String,
}

impl From<StatsView> for StatsPage {
    fn from(view: StatsView) -> Self {
        Self {
            short_code: view.short_code,
            original_url: view.original_url,
            clicks: view.clicks,
            short_url: view.short_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(original_url: &str, clicks: i64) -> StatsPage {
        StatsPage::from(StatsView {
            short_code: "abc123".to_string(),
            original_url: original_url.to_string(),
            clicks,
            short_url: "http://127.0.0.1:8000/abc123".to_string(),
        })
    }

    #[test]
    fn test_render_contains_fields() {
        let html = page("https://example.com/path", 42).render().unwrap();

        assert!(html.contains("URL Stats"));
        assert!(html.contains("Original URL: https://example.com/path"));
        assert!(html.contains("Clicks: 42"));
        assert!(html.contains("Short URL: http://127.0.0.1:8000/abc123"));
    }

    #[test]
    fn test_render_escapes_url() {
        let html = page("https://evil.test/<script>alert(1)</script>", 0)
            .render()
            .unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
