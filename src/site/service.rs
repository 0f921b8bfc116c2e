use chrono::{DateTime, Utc};

use crate::{
    config::SiteConfig,
    site::model::{ChangeFrequency, SitemapEntry},
    utils::time::iso_millis,
};

/// Every statically published page, relative to the site root.
pub const STATIC_PATHS: &[&str] = &[
    "",
    "/story",
    "/updates",
    "/updates/solana-bridge-paused",
    "/updates/solana-bridge-live",
    "/updates/macos-mining-app-released",
    "/updates/mainnet-milestone-3-3m-blocks",
    "/updates/grants-program-launched",
];

pub fn robots_txt(site: &SiteConfig) -> String {
    format!(
        "User-Agent: *\nAllow: /\nDisallow: /api/\n\nSitemap: {}/sitemap.xml\n",
        site.url.trim_end_matches('/')
    )
}

pub fn sitemap_entries(site: &SiteConfig, now: DateTime<Utc>) -> Vec<SitemapEntry> {
    let base = site.url.trim_end_matches('/');

    STATIC_PATHS
        .iter()
        .map(|path| {
            let (change_frequency, priority) = match *path {
                "" => (ChangeFrequency::Weekly, 1.0),
                "/story" => (ChangeFrequency::Weekly, 0.9),
                "/updates" => (ChangeFrequency::Weekly, 0.8),
                _ => (ChangeFrequency::Monthly, 0.7),
            };

            SitemapEntry {
                url: format!("{}{}", base, path),
                last_modified: now,
                change_frequency,
                priority,
            }
        })
        .collect()
}

pub fn sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for entry in entries {
        xml.push_str("<url>\n");
        xml.push_str(&format!("<loc>{}</loc>\n", escape_xml(&entry.url)));
        xml.push_str(&format!("<lastmod>{}</lastmod>\n", iso_millis(&entry.last_modified)));
        xml.push_str(&format!("<changefreq>{}</changefreq>\n", entry.change_frequency.as_str()));
        xml.push_str(&format!("<priority>{:.1}</priority>\n", entry.priority));
        xml.push_str("</url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
