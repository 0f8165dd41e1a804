//! HTML projection of articles. Every function here is pure: same input,
//! same bytes out.

use ng_core::{Article, Category};

pub const SITE_NAME: &str = "News Grid";
const STYLESHEET: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// Responsive column counts per Bootstrap breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridColumns {
    pub xs: u8,
    pub sm: u8,
    pub xl: u8,
}

impl Default for GridColumns {
    fn default() -> Self {
        Self { xs: 1, sm: 2, xl: 3 }
    }
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// A single article card.
pub fn article_unit(article: &Article) -> String {
    let mut html = String::from("<div class=\"card h-100\">");
    if let Some(image) = &article.url_to_image {
        html.push_str(&format!(
            "<img src=\"{}\" class=\"card-img-top\" alt=\"\" loading=\"lazy\">",
            escape(image)
        ));
    }
    html.push_str("<div class=\"card-body\">");
    html.push_str(&format!(
        "<h5 class=\"card-title\"><a href=\"{}\">{}</a></h5>",
        escape(&article.url),
        escape(&article.title)
    ));
    if let Some(description) = &article.description {
        html.push_str(&format!("<p class=\"card-text\">{}</p>", escape(description)));
    }
    let published = match article.published() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M UTC").to_string(),
        None => article.published_at.clone(),
    };
    html.push_str(&format!(
        "<p class=\"card-text\"><small class=\"text-muted\">{} &middot; {}</small></p>",
        escape(&article.source.name),
        escape(&published)
    ));
    html.push_str("</div></div>");
    html
}

/// Lays out `articles` in input order, one column per article keyed by its url.
pub fn article_grid(articles: &[Article], columns: GridColumns) -> String {
    let mut html = format!(
        "<div class=\"row row-cols-{} row-cols-sm-{} row-cols-xl-{} g-4\">",
        columns.xs, columns.sm, columns.xl
    );
    for article in articles {
        html.push_str(&format!("<div class=\"col\" data-key=\"{}\">", escape(&article.url)));
        html.push_str(&article_unit(article));
        html.push_str("</div>");
    }
    html.push_str("</div>");
    html
}

fn navigation() -> String {
    let mut html = format!(
        "<nav class=\"navbar navbar-expand bg-body-tertiary mb-4\"><div class=\"container\"><a class=\"navbar-brand\" href=\"/\">{}</a><ul class=\"navbar-nav\">",
        SITE_NAME
    );
    html.push_str("<li class=\"nav-item\"><a class=\"nav-link\" href=\"/\">Breaking</a></li>");
    for category in Category::ALL {
        html.push_str(&format!(
            "<li class=\"nav-item\"><a class=\"nav-link\" href=\"{}\">{}</a></li>",
            category.path(),
            category
        ));
    }
    html.push_str("</ul></div></nav>");
    html
}

/// Full HTML document around `main`.
pub fn layout(title: &str, main: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"><title>{} - {}</title><link rel=\"stylesheet\" href=\"{}\"></head><body>{}<main class=\"container\">{}</main></body></html>",
        escape(title),
        SITE_NAME,
        STYLESHEET,
        navigation(),
        main
    )
}

pub fn news_page(heading: &str, notice: &str, articles: &[Article], columns: GridColumns) -> String {
    let main = format!(
        "<h1>{}</h1><div class=\"alert alert-primary\" role=\"alert\">{}</div>{}",
        escape(heading),
        escape(notice),
        article_grid(articles, columns)
    );
    layout(heading, &main)
}

pub fn not_found_page(path: &str) -> String {
    let main = format!(
        "<h1>Page not found</h1><p>Nothing lives at <code>{}</code>.</p>",
        escape(path)
    );
    layout("Not found", &main)
}

pub fn error_page() -> String {
    layout(
        "Unavailable",
        "<h1>Headlines unavailable</h1><p>The news service could not be reached. Please try again later.</p>",
    )
}
