//! HTML pages served next to the JSON API.
//!
//! Pages are small enough to be assembled with `format!`; every piece of
//! user-supplied text goes through [`escape_html`] first.

use std::fmt::Write as _;

use crate::{database::models::job, jobs::submission::has_download_scheme};

/// Title, heading and body of a rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    pub title: &'a str,
    pub header: &'a str,
    /// Already-rendered HTML, inserted verbatim.
    pub content: String,
}

impl Page<'_> {
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<h1>{header}</h1>
{content}
<nav><a href="/">Home</a> | <a href="/getjobs?view=html">Jobs</a> | <a href="/schedule">Schedule a job</a></nav>
</body>
</html>
"#,
            title = escape_html(self.title),
            header = escape_html(self.header),
            content = self.content,
        )
    }
}

#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[must_use]
pub fn home_page() -> String {
    Page {
        title: "Job scheduler",
        header: "Welcome to the home page!",
        content: "<p>Submit download jobs and review what has been scheduled.</p>".to_string(),
    }
    .render()
}

/// Only download URLs become links; anything else is shown as text.
fn url_cell(url: &str) -> String {
    let escaped = escape_html(url);
    if has_download_scheme(url) {
        format!(r#"<a href="{escaped}">{escaped}</a>"#)
    } else {
        escaped
    }
}

#[must_use]
pub fn job_list_page(jobs: &[job::Model]) -> String {
    let content = if jobs.is_empty() {
        "<p>No jobs scheduled.</p>".to_string()
    } else {
        let mut rows = String::new();
        for job in jobs {
            let _ = writeln!(
                rows,
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&job.name),
                escape_html(&job.scheduled_time),
                url_cell(&job.url),
            );
        }
        format!(
            "<table>\n<thead><tr><th>Name</th><th>Time</th><th>URL</th></tr></thead>\n<tbody>\n{rows}</tbody>\n</table>"
        )
    };

    Page {
        title: "Scheduled jobs",
        header: "Scheduled jobs",
        content,
    }
    .render()
}

const SCHEDULE_FORM: &str = r#"<form id="schedule">
<label>Name <input name="name" required></label>
<label>Time <input name="time" placeholder="1970-01-01 13:37:00"></label>
<label>URL <input name="url" type="url" required></label>
<button type="submit">Schedule</button>
</form>
<pre id="result"></pre>
<script>
document.getElementById("schedule").addEventListener("submit", async (event) => {
  event.preventDefault();
  const form = new FormData(event.target);
  const response = await fetch("/schedule", {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    body: JSON.stringify(Object.fromEntries(form)),
  });
  document.getElementById("result").textContent = await response.text();
});
</script>"#;

#[must_use]
pub fn schedule_page() -> String {
    Page {
        title: "Schedule a job",
        header: "Schedule a job",
        content: SCHEDULE_FORM.to_string(),
    }
    .render()
}
