//! Server-rendered pages. Every page shares one shell: navigation, an
//! optional notice banner, and the page body.

pub mod books;
pub mod chart;
pub mod customers;
pub mod dashboard;
pub mod sales;

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Dashboard,
    Books,
    Customers,
    Sales,
}

impl Nav {
    const ALL: [Nav; 4] = [Nav::Dashboard, Nav::Books, Nav::Customers, Nav::Sales];

    fn href(self) -> &'static str {
        match self {
            Nav::Dashboard => "/",
            Nav::Books => "/books",
            Nav::Customers => "/customers",
            Nav::Sales => "/sales",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Nav::Dashboard => "Dashboard",
            Nav::Books => "Books",
            Nav::Customers => "Customers",
            Nav::Sales => "Sales",
        }
    }
}

/// The banner shown above the page body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    fn render(&self) -> String {
        let (kind, prefix, message) = match self {
            Notice::Success(message) => ("ok", "Success", message),
            Notice::Error(message) => ("error", "Error", message),
        };
        format!(
            r#"<div class="status" role="alert" data-type="{kind}">{prefix}: {}</div>"#,
            escape_html(message)
        )
    }
}

pub fn render_page(title: &str, active: Nav, notice: Option<&Notice>, body: &str) -> String {
    let nav: String = Nav::ALL
        .iter()
        .map(|item| {
            let class = if *item == active { "tab active" } else { "tab" };
            format!(
                r#"<a class="{class}" href="{}">{}</a>"#,
                item.href(),
                item.label()
            )
        })
        .collect();

    let title = escape_html(title);
    let notice = notice.map(Notice::render).unwrap_or_default();
    fill_layout(|slot| match slot {
        "TITLE" => Some(title.as_str()),
        "NAV" => Some(nav.as_str()),
        "NOTICE" => Some(notice.as_str()),
        "BODY" => Some(body),
        _ => None,
    })
}

/// Single pass over the layout; inserted text is never scanned again.
fn fill_layout<'a>(value: impl Fn(&str) -> Option<&'a str>) -> String {
    let mut out = String::with_capacity(LAYOUT_HTML.len());
    let mut rest = LAYOUT_HTML;
    while let Some(start) = rest.find("{{") {
        let Some(len) = rest[start + 2..].find("}}") else {
            break;
        };
        let slot = &rest[start + 2..start + 2 + len];
        out.push_str(&rest[..start]);
        match value(slot) {
            Some(text) => out.push_str(text),
            None => out.push_str(&rest[start..start + len + 4]),
        }
        rest = &rest[start + len + 4..];
    }
    out.push_str(rest);
    out
}

pub fn escape_html(unsafe_text: &str) -> String {
    let mut out = String::with_capacity(unsafe_text.len());
    for c in unsafe_text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn format_money(value: f64) -> String {
    format!("${value:.2}")
}

/// `YYYY-MM-DD` when the value starts with a calendar date, otherwise as sent.
pub fn format_date(raw: &str) -> String {
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        .map(|date| date.to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// A table body holding one full-width message row.
pub(crate) fn message_row(colspan: usize, message: &str, error: bool) -> String {
    let class = if error { "center error" } else { "center" };
    format!(
        r#"<tr><td colspan="{colspan}" class="{class}">{}</td></tr>"#,
        escape_html(message)
    )
}

pub(crate) fn form_error(error: Option<&str>) -> Option<Notice> {
    error.map(Notice::error)
}

const LAYOUT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}} · Bookstore Admin</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      justify-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1080px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
      margin: 0;
    }

    h2 {
      margin: 0;
      font-size: 1.3rem;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
    }

    .tab {
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #6b645d;
      text-decoration: none;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat, .card {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .charts {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
      gap: 16px;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      background: white;
      border-radius: 18px;
      overflow: hidden;
    }

    th, td {
      padding: 10px 12px;
      text-align: left;
      border-bottom: 1px solid rgba(47, 72, 88, 0.08);
    }

    th {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #8b857d;
    }

    td.center {
      text-align: center;
    }

    td.error {
      color: #c63b2b;
    }

    .actions {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .button, button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      cursor: pointer;
      text-decoration: none;
      display: inline-flex;
      align-items: center;
      background: var(--accent-2);
      color: white;
    }

    .button.primary, button.primary {
      background: var(--accent);
    }

    .button.danger, button.danger {
      background: #c63b2b;
    }

    .button.quiet {
      background: rgba(47, 72, 88, 0.12);
      color: var(--accent-2);
    }

    form.card label {
      display: grid;
      gap: 6px;
      font-weight: 500;
    }

    input, select {
      font: inherit;
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.2);
    }

    dl {
      display: grid;
      grid-template-columns: max-content 1fr;
      gap: 8px 18px;
      margin: 0;
    }

    dt {
      color: #8b857d;
    }

    dd {
      margin: 0;
    }

    svg.chart {
      width: 100%;
      height: 260px;
      display: block;
    }

    svg.chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-bar {
      fill: rgba(54, 162, 235, 0.8);
    }

    .chart-line {
      fill: none;
      stroke-width: 3;
    }

    .chart-line.series-0, .chart-point.series-0 {
      stroke: rgba(54, 162, 235, 1);
    }

    .chart-line.series-1, .chart-point.series-1 {
      stroke: rgba(255, 99, 132, 1);
    }

    .chart-point {
      fill: white;
      stroke-width: 2;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-label {
      fill: #7a746d;
      font-size: 11px;
    }

    .status {
      font-size: 0.95rem;
      padding: 12px 16px;
      border-radius: 14px;
      background: white;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>{{TITLE}}</h1>
      <nav class="tabs">{{NAV}}</nav>
    </header>
    {{NOTICE}}
    {{BODY}}
  </main>
</body>
</html>
"#;
