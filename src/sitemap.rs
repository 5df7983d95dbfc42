//! # Sitemap
//!
//! Builds `sitemap.xml` for the site: the fixed top-level pages followed by
//! one entry per blog post.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{fmt, io::Cursor};

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use quick_xml::{
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
    Writer,
};

use crate::content::Post;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
        }
    }
}

/// One `<url>` element
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Builds the entries for `base_url` (no trailing slash).
///
/// Static pages carry `now` as their modification time; posts carry their date.
pub fn build_entries(base_url: &str, posts: &[Post], now: DateTime<Utc>) -> Vec<SitemapEntry> {
    let page = |path: &str, change_frequency: ChangeFrequency, priority: f32| SitemapEntry {
        url: format!("{base_url}{path}"),
        last_modified: now,
        change_frequency,
        priority,
    };

    let mut entries = vec![
        page("", ChangeFrequency::Weekly, 1.0),
        page("/blog", ChangeFrequency::Weekly, 0.9),
        page("/works", ChangeFrequency::Monthly, 0.8),
        page("/about", ChangeFrequency::Monthly, 0.7),
    ];

    entries.extend(posts.iter().map(|post| SitemapEntry {
        url: format!("{base_url}/blog/{}", post.meta.slug),
        last_modified: post.meta.date,
        change_frequency: ChangeFrequency::Monthly,
        priority: 0.8,
    }));

    entries
}

fn write_text_element<W: std::io::Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Renders entries as sitemap XML.
pub fn render(entries: &[SitemapEntry]) -> Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(
        BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NS)]),
    ))?;

    for entry in entries {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        write_text_element(&mut writer, "loc", &entry.url)?;
        write_text_element(
            &mut writer,
            "lastmod",
            &entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true),
        )?;
        write_text_element(&mut writer, "changefreq", &entry.change_frequency.to_string())?;
        write_text_element(&mut writer, "priority", &format!("{:.1}", entry.priority))?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;

    let mut xml = String::from_utf8(writer.into_inner().into_inner())
        .context("Sitemap is not valid UTF-8")?;
    xml.push('\n');
    Ok(xml)
}
