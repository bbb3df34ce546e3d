use crate::config::ServerConfig;
use crate::server::static_files;
use crate::worlddata::transform::transform_csv_file;
use crate::worlddata::WorldDataOutcome;

/// The literal body returned when no world data is available. Distinct from a
/// document whose dataRows list is empty.
pub const EMPTY_JSON: &str = "{}";

pub struct HttpResponse {
    pub status_code: u16,
    pub status_text: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpResponse {
    pub fn to_http_string(&self) -> String {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status_code,
            self.status_text,
            self.content_type,
            self.body.len(),
            self.body
        )
    }
}

pub fn route_request(method: &str, path: &str, config: &ServerConfig) -> HttpResponse {
    if let Some(response) = static_files::try_serve_static(method, path) {
        return response;
    }
    match (method, path) {
        ("GET", "/") => HttpResponse {
            status_code: 200,
            status_text: "OK",
            content_type: "text/html; charset=utf-8",
            body: index_html(),
        },
        ("GET", "/worlddata") => world_data_response(config),
        _ => error_response(404, "Not Found", "Route not found"),
    }
}

fn world_data_response(config: &ServerConfig) -> HttpResponse {
    match transform_csv_file(&config.csv_path) {
        Ok(WorldDataOutcome::Unavailable(_)) => HttpResponse {
            status_code: 200,
            status_text: "OK",
            content_type: "application/json",
            body: EMPTY_JSON.to_string(),
        },
        Ok(WorldDataOutcome::Document(document)) => match serde_json::to_string(&document) {
            Ok(payload) => HttpResponse {
                status_code: 200,
                status_text: "OK",
                content_type: "application/json",
                body: payload,
            },
            Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
        },
        Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
    }
}

fn error_response(status_code: u16, status_text: &'static str, message: &str) -> HttpResponse {
    HttpResponse {
        status_code,
        status_text,
        content_type: "application/json",
        body: format!(
            "{{\n  \"status\": \"error\",\n  \"message\": {}\n}}",
            serde_json::to_string(message).unwrap_or_else(|_| "\"Unknown error\"".to_string())
        ),
    }
}

fn index_html() -> String {
    r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>World Population Data</title>
  <style>
    body { font-family: Arial, sans-serif; max-width: 960px; margin: 24px auto; padding: 0 12px; }
    h1 { margin-bottom: 8px; }
    #status { color: #666; margin: 12px 0; }
    table { border-collapse: collapse; width: 100%; }
    th, td { border: 1px solid #ddd; padding: 6px 10px; text-align: right; }
    th { background: #f4f4f4; }
    td:first-child, td:nth-child(2), th:first-child, th:nth-child(2) { text-align: left; }
  </style>
</head>
<body>
  <h1>World Population Data</h1>
  <p id="status">Loading&hellip;</p>
  <table id="world-table" hidden>
    <thead><tr id="header-row"></tr></thead>
    <tbody id="data-rows"></tbody>
  </table>
  <script src="/static/main.js"></script>
</body>
</html>
"#
    .to_string()
}
