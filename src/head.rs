//! Renders the service page document shell from resolved metadata.

use crate::models::PageMetadata;
use std::fmt::Write;

/// Escapes text for use inside HTML element content or a quoted attribute.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn meta_name(out: &mut String, name: &str, content: &str) {
    let _ = writeln!(
        out,
        r#"    <meta name="{}" content="{}">"#,
        name,
        escape_html(content)
    );
}

fn meta_property(out: &mut String, property: &str, content: &str) {
    let _ = writeln!(
        out,
        r#"    <meta property="{}" content="{}">"#,
        property,
        escape_html(content)
    );
}

/// Renders the `<head>` tags for a metadata record.
pub fn render_head(meta: &PageMetadata) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "    <title>{}</title>", escape_html(&meta.title));
    meta_name(&mut out, "description", &meta.description);
    meta_name(&mut out, "robots", &meta.robots);
    let _ = writeln!(
        out,
        r#"    <link rel="canonical" href="{}">"#,
        escape_html(meta.canonical_url())
    );

    let og = &meta.open_graph;
    meta_property(&mut out, "og:locale", &og.locale);
    meta_property(&mut out, "og:site_name", &og.site_name);
    meta_property(&mut out, "og:type", &og.kind);
    meta_property(&mut out, "og:title", &og.title);
    meta_property(&mut out, "og:description", &og.description);
    meta_property(&mut out, "og:url", &og.url);
    for image in &og.images {
        meta_property(&mut out, "og:image", &image.url);
        meta_property(&mut out, "og:image:secure_url", &image.secure_url);
        meta_property(&mut out, "og:image:width", &image.width.to_string());
        meta_property(&mut out, "og:image:height", &image.height.to_string());
        meta_property(&mut out, "og:image:alt", &image.alt);
    }

    let card = &meta.twitter;
    meta_name(&mut out, "twitter:card", &card.card);
    meta_name(&mut out, "twitter:site", &card.site);
    meta_name(&mut out, "twitter:creator", &card.creator);
    meta_name(&mut out, "twitter:title", &card.title);
    meta_name(&mut out, "twitter:description", &card.description);
    for image in &card.images {
        meta_name(&mut out, "twitter:image", image);
    }

    out
}

/// Renders the full store detail document: metadata head plus the mount
/// point the client-side detail view hydrates into.
pub fn render_document(meta: &PageMetadata, service_name: &str, service_id: &str) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("    <meta charset=\"UTF-8\">\n");
    out.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    out.push_str(&render_head(meta));
    out.push_str("</head>\n<body>\n");
    let _ = writeln!(
        out,
        r#"    <div class="w-full h-auto" id="stores-detail" data-service-name="{}" data-service-id="{}"></div>"#,
        escape_html(service_name),
        escape_html(service_id)
    );
    out.push_str("</body>\n</html>\n");
    out
}
