//! HTML pages for the symptom form.
//!
//! Pages are small enough to build with `format!`. Anything that can come from a request body
//! goes through [`escape`] before it is written into markup.

use symptom_core::ScoreReport;

const STYLE: &str = "body{font-family:sans-serif;max-width:40rem;margin:2rem auto;padding:0 1rem}\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #ccc;padding:.4rem;text-align:left}\
.best{background:#eef7ee;padding:.6rem}\
.message{background:#fff4e5;padding:.6rem}\
.disclaimer{color:#666;font-size:.85rem}";

const DISCLAIMER: &str =
    "This tool is for learning purposes only and is not medical advice. See a doctor if you are unwell.";

/// Escapes text for use in element content and double-quoted attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\
         <p class=\"disclaimer\">{DISCLAIMER}</p>\n</body>\n</html>\n",
        title = escape(title),
    )
}

/// The checklist form, one checkbox per catalog entry.
pub fn render_index(catalog: &[&str]) -> String {
    let mut body = String::from(
        "<h1>Symptom Checker</h1>\n<p>Tick every symptom you have, then press Check.</p>\n\
         <form method=\"post\" action=\"/results\">\n",
    );
    for symptom in catalog {
        let symptom = escape(symptom);
        body.push_str(&format!(
            "<label><input type=\"checkbox\" name=\"symptoms\" value=\"{symptom}\"> {symptom}</label><br>\n"
        ));
    }
    body.push_str("<button type=\"submit\">Check</button>\n</form>\n");
    page("Symptom Checker", &body)
}

/// The results page for a scored (or empty) selection.
pub fn render_results(report: &ScoreReport) -> String {
    let mut body = String::from("<h1>Results</h1>\n");

    if !report.message.is_empty() {
        body.push_str(&format!(
            "<p class=\"message\">{}</p>\n",
            escape(&report.message)
        ));
    }

    if !report.chosen.is_empty() {
        body.push_str("<h2>You selected</h2>\n<ul>\n");
        for symptom in &report.chosen {
            body.push_str(&format!("<li>{}</li>\n", escape(symptom)));
        }
        body.push_str("</ul>\n");
    }

    if !report.best.is_empty() {
        let names: Vec<String> = report.best.iter().map(|n| escape(n)).collect();
        let label = if names.len() == 1 {
            "Best match"
        } else {
            "Best matches"
        };
        body.push_str(&format!(
            "<p class=\"best\"><strong>{label}:</strong> {}</p>\n",
            names.join(", ")
        ));
    }

    if !report.results.is_empty() {
        body.push_str(
            "<table>\n<tr><th>Illness</th><th>Matching symptoms</th><th>Match</th></tr>\n",
        );
        for r in &report.results {
            body.push_str(&format!(
                "<tr><td>{}</td><td>{} of {}</td><td>{:.1}%</td></tr>\n",
                escape(&r.name),
                r.match_count,
                r.total,
                r.percent
            ));
        }
        body.push_str("</table>\n");
    } else if !report.is_no_selection() {
        body.push_str("<p>None of the selected symptoms match a known illness.</p>\n");
    }

    body.push_str("<p><a href=\"/\">Check again</a></p>\n");
    page("Symptom Checker Results", &body)
}
