//! Generated head markup
//!
//! The main page gets a complete `<head>` built from the site info and the
//! locale table. Other pages only get the three baseline lines.

use std::fmt::Write;

use crate::config::{LocaleTable, SiteInfo};
use crate::error::Result;

/// Comment identifying heads touched by this tool
pub const GENERATOR_COMMENT: &str = "<!-- head metadata restored by sitepatch -->";

pub const CHARSET_META: &str = r#"<meta charset="utf-8">"#;

pub const VIEWPORT_META: &str =
    r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#;

/// Icon links as (rel, type, sizes, file)
const ICONS: [(&str, Option<&str>, &str, &str); 6] = [
    ("icon", None, "any", "favicon.ico"),
    ("icon", Some("image/png"), "32x32", "favicon-32x32.png"),
    ("icon", Some("image/png"), "16x16", "favicon-16x16.png"),
    ("apple-touch-icon", None, "180x180", "apple-touch-icon.png"),
    ("icon", Some("image/png"), "192x192", "android-chrome-192x192.png"),
    ("icon", Some("image/png"), "512x512", "android-chrome-512x512.png"),
];

/// Escape text for use inside a double-quoted attribute or element text
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

/// Charset, viewport and generator lines injected into non-main heads
///
/// Each line is preceded by a newline so the block can follow `<head>`
/// directly.
pub fn baseline_lines() -> String {
    format!("\n{CHARSET_META}\n{VIEWPORT_META}\n{GENERATOR_COMMENT}")
}

/// Full replacement `<head>` for the main page of the `tag` document set
pub fn main_head(site: &SiteInfo, locales: &LocaleTable, stylesheet: &str, tag: &str) -> Result<String> {
    let locale = locales.require(tag)?;
    let title = escape(&format!("{} | {}", site.name, locale.title_suffix));
    let description = escape(&locale.description);
    let url = escape(&locale.url);
    let image = escape(&site.image_url);
    let image_alt = escape(&site.image_alt);
    let og_locale = escape(&locale.og_locale);
    let handle = escape(&site.twitter_handle);

    let mut head = String::from("<head>");
    head.push_str(&baseline_lines());
    head.push('\n');

    let _ = writeln!(head, "<title>{title}</title>");
    for (name, value) in [
        ("description", locale.description.as_str()),
        ("keywords", site.keywords.as_str()),
        ("author", site.author.as_str()),
        ("robots", site.robots.as_str()),
    ] {
        let _ = writeln!(head, r#"<meta name="{name}" content="{}">"#, escape(value));
    }

    for (rel, mime, sizes, file) in ICONS {
        let mime = mime.map(|m| format!(r#" type="{m}""#)).unwrap_or_default();
        let _ = writeln!(head, r#"<link rel="{rel}"{mime} sizes="{sizes}" href="{file}">"#);
    }

    for (property, value) in [
        ("og:type", "website"),
        ("og:title", title.as_str()),
        ("og:description", description.as_str()),
        ("og:url", url.as_str()),
        ("og:image", image.as_str()),
        ("og:locale", og_locale.as_str()),
        ("og:image:alt", image_alt.as_str()),
    ] {
        let _ = writeln!(head, r#"<meta property="{property}" content="{value}">"#);
    }

    for (name, value) in [
        ("twitter:card", "summary_large_image"),
        ("twitter:site", handle.as_str()),
        ("twitter:creator", handle.as_str()),
        ("twitter:title", title.as_str()),
        ("twitter:description", description.as_str()),
        ("twitter:image", image.as_str()),
        ("twitter:image:alt", image_alt.as_str()),
    ] {
        let _ = writeln!(head, r#"<meta name="{name}" content="{value}">"#);
    }

    for (hreflang, href) in [
        (locales.primary.tag.as_str(), locales.primary.url.as_str()),
        (locales.secondary.tag.as_str(), locales.secondary.url.as_str()),
        ("x-default", locales.primary.url.as_str()),
    ] {
        let _ = writeln!(
            head,
            r#"<link rel="alternate" hreflang="{}" href="{}">"#,
            escape(hreflang),
            escape(href)
        );
    }

    let _ = writeln!(head, r#"<link rel="stylesheet" href="{}">"#, escape(stylesheet));
    head.push_str("</head>");
    Ok(head)
}
