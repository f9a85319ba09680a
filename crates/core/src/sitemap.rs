//! `sitemap.xml` and `robots.txt` generation from a catalog snapshot.

use std::fmt::Write;

use chrono::SecondsFormat;

use crate::dataset::Dataset;
use crate::types::Timestamp;

/// Site sections with their sitemap priority.
const STATIC_PAGES: &[(&str, &str)] = &[
    ("", "1.0"),
    ("/tools", "0.9"),
    ("/categories", "0.8"),
    ("/alternatives", "0.8"),
    ("/vs", "0.8"),
    ("/deals", "0.7"),
    ("/submit", "0.6"),
    ("/about", "0.5"),
    ("/contact", "0.5"),
    ("/privacy", "0.3"),
    ("/terms", "0.3"),
];

const TOOL_PRIORITY: &str = "0.8";
const ALTERNATIVE_PRIORITY: &str = "0.7";
const COMPARISON_PRIORITY: &str = "0.7";

struct SitemapUrl {
    loc: String,
    lastmod: Timestamp,
    priority: &'static str,
}

/// Render the sitemap. Static pages use `now` as their last modification.
pub fn generate_sitemap(base_url: &str, dataset: &Dataset, now: Timestamp) -> String {
    let base = base_url.trim_end_matches('/');

    let mut urls: Vec<SitemapUrl> = STATIC_PAGES
        .iter()
        .map(|(path, priority)| SitemapUrl {
            loc: format!("{base}{path}"),
            lastmod: now,
            priority,
        })
        .collect();

    urls.extend(
        dataset
            .tools
            .iter()
            .filter(|t| t.is_published())
            .map(|t| SitemapUrl {
                loc: format!("{base}/tools/{}", t.slug),
                lastmod: t.updated_at,
                priority: TOOL_PRIORITY,
            }),
    );
    urls.extend(dataset.alternatives.iter().map(|a| SitemapUrl {
        loc: format!("{base}/alternatives/{}", a.page_slug()),
        lastmod: a.updated_at,
        priority: ALTERNATIVE_PRIORITY,
    }));
    urls.extend(dataset.comparisons.iter().map(|c| SitemapUrl {
        loc: format!("{base}/vs/{}", c.page_slug()),
        lastmod: c.updated_at,
        priority: COMPARISON_PRIORITY,
    }));

    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for url in &urls {
        // Writing into a String cannot fail.
        let _ = write!(
            xml,
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <priority>{}</priority>\n  </url>\n",
            escape_xml(&url.loc),
            url.lastmod.to_rfc3339_opts(SecondsFormat::Secs, true),
            url.priority,
        );
    }
    xml.push_str("</urlset>\n");
    xml
}

pub fn generate_robots(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    format!(
        "User-agent: *\n\
         Allow: /\n\
         \n\
         # Disallow admin and private pages\n\
         Disallow: /admin/\n\
         Disallow: /_next/\n\
         Disallow: /api/auth/\n\
         \n\
         Sitemap: {base}/sitemap.xml\n\
         \n\
         Crawl-delay: 1\n"
    )
}

fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{epoch, ToolBuilder};
    use crate::tool::ToolStatus;

    #[test]
    fn sitemap_lists_static_and_dynamic_pages() {
        let ds = Dataset::embedded().unwrap();
        let xml = generate_sitemap("https://rect.one/", &ds, epoch());

        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<loc>https://rect.one</loc>"));
        assert!(xml.contains("<loc>https://rect.one/terms</loc>"));
        assert!(xml.contains("<loc>https://rect.one/tools/chatgpt</loc>"));
        assert!(xml.contains("<loc>https://rect.one/alternatives/chatgpt-alternatives</loc>"));
        assert!(xml.contains("<loc>https://rect.one/vs/chatgpt-vs-claude</loc>"));
        assert!(xml.contains("<lastmod>2024-01-15T00:00:00Z</lastmod>"));
        assert_eq!(
            xml.matches("<url>").count(),
            STATIC_PAGES.len() + ds.tools.len() + ds.alternatives.len() + ds.comparisons.len()
        );
    }

    #[test]
    fn sitemap_skips_unpublished_and_escapes() {
        let ds = Dataset {
            tools: vec![
                ToolBuilder::new("a&b").build(),
                ToolBuilder::new("hidden").status(ToolStatus::Draft).build(),
            ],
            ..Dataset::default()
        };
        let xml = generate_sitemap("https://rect.one", &ds, epoch());
        assert!(xml.contains("/tools/a&amp;b</loc>"));
        assert!(!xml.contains("hidden"));
    }

    #[test]
    fn robots_links_the_sitemap() {
        let robots = generate_robots("https://rect.one");
        assert!(robots.starts_with("User-agent: *\nAllow: /\n"));
        assert!(robots.contains("Disallow: /api/auth/\n"));
        assert!(robots.contains("Sitemap: https://rect.one/sitemap.xml\n"));
        assert!(robots.trim_end().ends_with("Crawl-delay: 1"));
    }
}
