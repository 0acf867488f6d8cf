//! HTML rendering for all pages
//!
//! The site is small enough that every page is a plain function building a
//! `String`, handlers pass the rows to render as arguments

use crate::cruises::Cruise;
use crate::destinations::Destination;

/// Render the landing page
pub fn index() -> String {
    layout(
        "ReleCloud",
        r#"
        <h1>Welcome to ReleCloud</h1>
        <p>Cruise the solar system with ReleCloud. Relax in your cabin while
        we take you to the most spectacular places space has to offer.</p>
        <p><a href="/destinations">Browse our destinations</a> or
        <a href="/info_request">request more information</a>.</p>"#,
    )
}

/// Render the about page
pub fn about() -> String {
    layout(
        "About ReleCloud",
        r#"
        <h1>About ReleCloud</h1>
        <p>ReleCloud has been organizing cruises beyond the atmosphere since
        its founding. Our fleet visits suns, moons and everything in
        between.</p>"#,
    )
}

/// Render the list of all destinations
pub fn destinations(destinations: &[Destination]) -> String {
    let mut items = String::new();

    for destination in destinations {
        items.push_str(&format!(
            r#"<li><a href="/destination/{}">{}</a></li>"#,
            destination.id,
            escape(&destination.name),
        ));
    }

    layout(
        "Destinations",
        &format!(
            r"
        <h1>Destinations</h1>
        <ul>{items}</ul>"
        ),
    )
}

/// Render a destination with the cruises that visit it
pub fn destination_detail(destination: &Destination, cruises: &[Cruise]) -> String {
    let mut body = format!("<h1>{}</h1>", escape(&destination.name));

    if let Some(subtitle) = &destination.subtitle {
        body.push_str(&format!("<h2>{}</h2>", escape(subtitle)));
    }

    if let Some(description) = &destination.description {
        body.push_str(&format!("<p>{}</p>", escape(description)));
    }

    body.push_str("<h2>Cruises</h2><ul>");

    for cruise in cruises {
        body.push_str(&format!(
            r#"<li><a href="/cruise/{}">{}</a></li>"#,
            cruise.id,
            escape(&cruise.name),
        ));
    }

    body.push_str("</ul>");

    layout(&destination.name, &body)
}

/// Render a cruise with the destinations it visits
pub fn cruise_detail(cruise: &Cruise, destinations: &[Destination]) -> String {
    let mut body = format!("<h1>{}</h1>", escape(&cruise.name));

    if let Some(subtitle) = &cruise.subtitle {
        body.push_str(&format!("<h2>{}</h2>", escape(subtitle)));
    }

    if let Some(description) = &cruise.description {
        body.push_str(&format!("<p>{}</p>", escape(description)));
    }

    body.push_str("<h2>Destinations</h2><ul>");

    for destination in destinations {
        body.push_str(&format!(
            r#"<li><a href="/destination/{}">{}</a></li>"#,
            destination.id,
            escape(&destination.name),
        ));
    }

    body.push_str(r#"</ul><p><a href="/info_request">Request more information</a></p>"#);

    layout(&cruise.name, &body)
}

/// Render the info request form
///
/// The optional message is the post-submit confirmation echoed back through
/// the `message` query parameter
pub fn info_request(cruises: &[Cruise], message: Option<&str>) -> String {
    let mut body = String::from("<h1>Request Info</h1>");

    if let Some(message) = message {
        body.push_str(&format!(r#"<p class="message">{}</p>"#, escape(message)));
    }

    let mut options = String::new();

    for cruise in cruises {
        options.push_str(&format!(
            r#"<option value="{}">{}</option>"#,
            cruise.id,
            escape(&cruise.name),
        ));
    }

    body.push_str(&format!(
        r#"
        <form method="post" action="/info_request">
            <label for="name">Name</label>
            <input type="text" id="name" name="name" required>
            <label for="email">Email</label>
            <input type="email" id="email" name="email" required>
            <label for="notes">Notes</label>
            <textarea id="notes" name="notes"></textarea>
            <label for="cruise_id">Cruise</label>
            <select id="cruise_id" name="cruise_id">{options}</select>
            <button type="submit">Send</button>
        </form>"#
    ));

    layout("Request Info", &body)
}

/// Render an error page
pub fn error(title: &str, message: &str) -> String {
    layout(
        title,
        &format!("<h1>{}</h1><p>{}</p>", escape(title), escape(message)),
    )
}

/// The shared page chrome around every body
fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{} - ReleCloud</title>
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/about">About</a>
        <a href="/destinations">Destinations</a>
        <a href="/info_request">Request Info</a>
    </nav>
    <main>{body}</main>
</body>
</html>
"#,
        escape(title),
    )
}

/// Escape text for interpolation into HTML
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            ch => escaped.push(ch),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("The Sun"), "The Sun".to_string());
        assert_eq!(
            escape(r#"<script>"a" & 'b'</script>"#),
            "&lt;script&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/script&gt;".to_string()
        );
    }
}
