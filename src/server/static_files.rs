//! Serve index page assets from the static/ directory.

use std::fs;
use std::path::Path;

use super::routes::HttpResponse;

/// Try to serve a file under /static/. Returns None for non-GET methods,
/// non-static paths, or missing files so the router can fall through.
pub fn try_serve_static(method: &str, path: &str) -> Option<HttpResponse> {
    if method != "GET" {
        return None;
    }
    let rest = path.strip_prefix("/static/")?;
    let rest = rest.split('?').next().unwrap_or(rest);
    if rest.is_empty() || rest.contains("..") {
        return None;
    }

    let file_path = Path::new("static").join(rest);
    let body = fs::read_to_string(&file_path).ok()?;

    Some(HttpResponse {
        status_code: 200,
        status_text: "OK",
        content_type: content_type_for_path(rest),
        body,
    })
}

fn content_type_for_path(path: &str) -> &'static str {
    if path.ends_with(".html") {
        "text/html; charset=utf-8"
    } else if path.ends_with(".js") {
        "application/javascript; charset=utf-8"
    } else if path.ends_with(".css") {
        "text/css; charset=utf-8"
    } else if path.ends_with(".json") {
        "application/json; charset=utf-8"
    } else {
        "text/plain; charset=utf-8"
    }
}
