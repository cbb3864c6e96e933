//! HTML writer serializing the abstract render tree for the browser.
//!
//! The markup leans on Bootstrap classes for all visual styling; the
//! writer itself only decides structure.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::escape::escape;
use crate::config::{BOOTSTRAP_CSS_URL, PAGE_TITLE};
use crate::error::Result;
use crate::page::Page;
use crate::render::RenderNode;

/// Inline style of the page content wrapper.
const CONTENT_STYLE: &str = "margin-left: 3rem; margin-right: 3rem; padding: 2rem 1rem;";

/// Serialize a page into a complete HTML document.
#[must_use]
pub fn write_page(page: &Page) -> String {
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape(PAGE_TITLE)));
    out.push_str(&format!(
        "<link href=\"{BOOTSTRAP_CSS_URL}\" rel=\"stylesheet\">\n"
    ));
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<div style=\"{CONTENT_STYLE}\">\n"));

    for node in &page.body {
        write_node(&mut out, node);
        out.push('\n');
    }

    out.push_str("</div>\n</body>\n</html>\n");
    out
}

/// Serialize one node into the output buffer.
fn write_node(out: &mut String, node: &RenderNode) {
    match node {
        RenderNode::Empty => out.push_str("<p></p>"),
        RenderNode::Text(text) => {
            out.push_str("<p>");
            out.push_str(&escape(text));
            out.push_str("</p>");
        }
        RenderNode::Heading(text) => {
            out.push_str("<h1>");
            out.push_str(&escape(text));
            out.push_str("</h1>");
        }
        RenderNode::SubHeading(text) => {
            out.push_str("<h3>");
            out.push_str(&escape(text));
            out.push_str("</h3>");
        }
        RenderNode::Badge { label, tone } => {
            out.push_str(&format!(
                "<span class=\"badge {} ms-1\">{}</span>",
                tone.css_class(),
                escape(label)
            ));
        }
        RenderNode::LinkBadge { label, href } => {
            out.push_str(&format!(
                "<a class=\"badge bg-primary ms-1\" href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
                escape(href),
                escape(label)
            ));
        }
        RenderNode::Progress { value } => {
            out.push_str(&format!(
                "<div class=\"progress\"><div class=\"progress-bar\" role=\"progressbar\" \
                 style=\"width: {value}%\" aria-valuenow=\"{value}\" aria-valuemin=\"0\" \
                 aria-valuemax=\"100\"></div></div>"
            ));
        }
        RenderNode::Image { src } => {
            out.push_str(&format!(
                "<div class=\"card\"><img class=\"img-fluid rounded-start\" src=\"{}\" alt=\"\"></div>",
                escape(src)
            ));
        }
        RenderNode::ButtonPair { label, value, href } => {
            out.push_str("<div class=\"mb-2\"><div class=\"btn-group\" role=\"group\">");
            out.push_str(&format!(
                "<button type=\"button\" class=\"btn btn-primary\">{}</button>",
                escape(label)
            ));
            match href {
                Some(href) => out.push_str(&format!(
                    "<a class=\"btn btn-outline-primary\" href=\"{}\" target=\"_blank\" \
                     rel=\"noopener\">{}</a>",
                    escape(href),
                    escape(value)
                )),
                None => out.push_str(&format!(
                    "<button type=\"button\" class=\"btn btn-outline-primary\">{}</button>",
                    escape(value)
                )),
            }
            out.push_str("</div></div>");
        }
        RenderNode::Separator => out.push_str("<hr class=\"my-2\">"),
        RenderNode::Row(cells) => {
            out.push_str("<div class=\"row\">");
            for cell in cells {
                write_node(out, cell);
            }
            out.push_str("</div>");
        }
        RenderNode::Column { width, children } => {
            match width {
                Some(width) => out.push_str(&format!("<div class=\"col-{width}\">")),
                None => out.push_str("<div class=\"col\">"),
            }
            for child in children {
                write_node(out, child);
            }
            out.push_str("</div>");
        }
        RenderNode::Card { header, body } => {
            out.push_str("<div class=\"card\">");
            if !header.is_empty() {
                out.push_str("<div class=\"card-header\">");
                for child in header {
                    write_node(out, child);
                }
                out.push_str("</div>");
            }
            out.push_str("<div class=\"card-body\">");
            for child in body {
                write_node(out, child);
            }
            out.push_str("</div></div>");
        }
        RenderNode::Container(children) => {
            out.push_str("<div>");
            for child in children {
                write_node(out, child);
            }
            out.push_str("</div>");
        }
    }
}

/// Write a page to an HTML file, creating parent directories as needed.
///
/// # Returns
/// The path written to.
pub fn save_html(page: &Page, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = File::create(path)?;
    file.write_all(write_page(page).as_bytes())?;

    Ok(path.to_path_buf())
}
