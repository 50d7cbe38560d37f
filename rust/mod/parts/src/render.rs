//! HTML rendering for catalog pages.
//!
//! Pages are plain `format!` templates. Every string that comes from the
//! catalog goes through [`escape_html`] before it reaches the markup.

use partyard_catalog::Part;

const STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:960px;margin:0 auto;padding:1rem}\
img{max-width:100%}\
.tags span{display:inline-block;margin-right:.5rem;padding:0 .4rem;border:1px solid #ccc;border-radius:4px}\
ul.parts{list-style:none;padding:0}\
ul.parts li{margin-bottom:1rem}";

/// Escape the five HTML-significant characters.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Percent-encode an id so it stays a single URL path segment.
pub fn part_href_segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
<html lang=\"en\">\n\
<head>\n\
<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{title}</title>\n\
<style>{STYLE}</style>\n\
</head>\n\
<body>\n\
{body}\n\
</body>\n\
</html>\n",
        title = escape_html(title),
    )
}

/// Detail page for a single part.
pub fn part_page(part: &Part, site_title: &str) -> String {
    let tags: String = part
        .tags
        .iter()
        .map(|t| format!("<span>{}</span>", escape_html(t)))
        .collect();

    let body = format!(
        "<nav><a href=\"/\">{site}</a></nav>\n\
<article class=\"part\">\n\
<h1>{name}</h1>\n\
<img src=\"{image}\" alt=\"{name}\">\n\
<p class=\"price\">{price}</p>\n\
<p class=\"summary\">{short}</p>\n\
<dl>\n\
<dt>Category</dt><dd>{category}</dd>\n\
<dt>Condition</dt><dd>{condition}</dd>\n\
<dt>Model</dt><dd>{model}</dd>\n\
<dt>Year</dt><dd>{year}</dd>\n\
<dt>Mileage</dt><dd>{mileage}</dd>\n\
</dl>\n\
<div class=\"description\">{full}</div>\n\
<div class=\"tags\">{tags}</div>\n\
</article>",
        site = escape_html(site_title),
        name = escape_html(&part.name),
        image = escape_html(&part.image),
        price = format_price(part.price),
        short = escape_html(&part.short_description),
        category = escape_html(&part.category),
        condition = escape_html(&part.condition),
        model = escape_html(&part.model),
        year = escape_html(&part.year),
        mileage = part.mileage,
        full = escape_html(&part.full_description),
    );

    layout(&format!("{} | {}", part.name, site_title), &body)
}

/// Index page listing every part in catalog order.
pub fn index_page(parts: &[Part], site_title: &str) -> String {
    let items: String = parts
        .iter()
        .map(|p| {
            format!(
                "<li><a href=\"/parts/{id}\">{name}</a> <span class=\"price\">{price}</span><br>{short}</li>\n",
                id = escape_html(&part_href_segment(&p.id)),
                name = escape_html(&p.name),
                price = format_price(p.price),
                short = escape_html(&p.short_description),
            )
        })
        .collect();

    let body = if parts.is_empty() {
        format!("<h1>{}</h1>\n<p>No parts listed.</p>", escape_html(site_title))
    } else {
        format!(
            "<h1>{}</h1>\n<ul class=\"parts\">\n{}</ul>",
            escape_html(site_title),
            items
        )
    };

    layout(site_title, &body)
}

/// Error page, e.g. the 404 for an unknown part.
pub fn error_page(status: u16, message: &str, site_title: &str) -> String {
    let body = format!(
        "<nav><a href=\"/\">{site}</a></nav>\n<h1>{status}</h1>\n<p>{message}</p>",
        site = escape_html(site_title),
        message = escape_html(message),
    );
    layout(&format!("{} | {}", message, site_title), &body)
}
