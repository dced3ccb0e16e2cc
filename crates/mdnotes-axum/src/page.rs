//! HTML page assembly for directory and note views.
//!
//! Listings arrive unsorted and, for merged directories, may name the same
//! subdirectory once per root. Pages sort them and show each directory once.

use std::fmt::Write as _;

use mdnotes_core::{Breadcrumb, Listing};

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;display:flex;min-height:100vh}\
nav.side{width:16rem;padding:1rem;border-right:1px solid #ddd;background:#fafafa}\
nav.side ul{list-style:none;padding-left:0}\
main{flex:1;padding:1rem 2rem;max-width:60rem}\
.crumbs a{text-decoration:none}\
.crumbs span.sep{color:#999;margin:0 .25rem}";

/// Escape text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Percent-encode each segment of a slash-separated logical link.
pub fn encode_link(link: &str) -> String {
    link.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Link of the directory the breadcrumbs end in.
fn current_dir(breadcrumbs: &[Breadcrumb]) -> &str {
    breadcrumbs.last().map_or("/", |crumb| crumb.link.as_str())
}

/// Link of the directory above the one the breadcrumbs end in.
fn parent_dir(breadcrumbs: &[Breadcrumb]) -> &str {
    match breadcrumbs {
        [.., parent, _] => parent.link.as_str(),
        _ => "/",
    }
}

fn display_listing(listing: Listing) -> Listing {
    let mut listing = listing.sorted();
    listing.dirs.dedup();
    listing
}

fn push_breadcrumbs(out: &mut String, breadcrumbs: &[Breadcrumb], current_file: Option<&str>) {
    out.push_str("<div class=\"crumbs\"><a href=\"/\">/</a>");
    for crumb in breadcrumbs {
        let _ = write!(
            out,
            "<a href=\"{}\">{}</a><span class=\"sep\">/</span>",
            escape_html(&encode_link(&crumb.link)),
            escape_html(&crumb.name)
        );
    }
    if let Some(name) = current_file {
        let _ = write!(out, "<strong>{}</strong>", escape_html(name));
    }
    out.push_str("</div>\n");
}

fn push_listing(
    out: &mut String,
    breadcrumbs: &[Breadcrumb],
    listing: &Listing,
    current_file: Option<&str>,
) {
    let dir_link = current_dir(breadcrumbs);
    out.push_str("<nav class=\"side\"><ul>\n");
    if !breadcrumbs.is_empty() {
        let _ = writeln!(
            out,
            "<li><a href=\"{}\">..</a></li>",
            escape_html(&encode_link(parent_dir(breadcrumbs)))
        );
    }
    for dir in &listing.dirs {
        let href = encode_link(&format!("{dir_link}{dir}/"));
        let _ = writeln!(
            out,
            "<li><a href=\"{}\">{}/</a></li>",
            escape_html(&href),
            escape_html(dir)
        );
    }
    for file in &listing.files {
        let href = encode_link(&format!("{dir_link}{file}"));
        let label = escape_html(file);
        if current_file == Some(file.as_str()) {
            let _ = writeln!(out, "<li><strong>{label}</strong></li>");
        } else {
            let _ = writeln!(out, "<li><a href=\"{}\">{label}</a></li>", escape_html(&href));
        }
    }
    out.push_str("</ul></nav>\n");
}

fn page_head(out: &mut String, title: &str) {
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n",
        escape_html(title)
    );
}

/// Page for a (possibly merged) directory.
pub fn directory_page(breadcrumbs: &[Breadcrumb], listing: Listing) -> String {
    let listing = display_listing(listing);
    let dir_link = current_dir(breadcrumbs);

    let mut out = String::new();
    page_head(&mut out, dir_link);
    push_listing(&mut out, breadcrumbs, &listing, None);
    out.push_str("<main>\n");
    push_breadcrumbs(&mut out, breadcrumbs, None);
    if listing.is_empty() {
        out.push_str("<p><em>This directory is empty.</em></p>\n");
    }
    out.push_str("</main>\n</body>\n</html>\n");
    out
}

/// Page for a rendered note, with its siblings in the side listing.
pub fn note_page(
    breadcrumbs: &[Breadcrumb],
    name: &str,
    rendered_html: &str,
    listing: Listing,
) -> String {
    let listing = display_listing(listing);

    let mut out = String::new();
    page_head(&mut out, name);
    push_listing(&mut out, breadcrumbs, &listing, Some(name));
    out.push_str("<main>\n");
    push_breadcrumbs(&mut out, breadcrumbs, Some(name));
    out.push_str("<article>\n");
    out.push_str(rendered_html);
    out.push_str("</article>\n</main>\n</body>\n</html>\n");
    out
}
