//! Page shell and HTML helpers shared by both views.

const STYLE: &str = r#"
    body { font-family: system-ui, sans-serif; margin: 0; background: #f6f7f9; color: #1d2430; }
    nav { background: #1d4d2b; padding: 12px 24px; }
    nav a { color: #fff; margin-right: 20px; text-decoration: none; font-weight: 600; }
    main { max-width: 960px; margin: 24px auto; padding: 0 24px; }
    table { border-collapse: collapse; width: 100%; background: #fff; }
    th, td { border: 1px solid #d5d9e0; padding: 6px 10px; text-align: left; }
    th { background: #eef1f4; }
    input[type=text], select { width: 100%; box-sizing: border-box; }
    .actions { margin: 12px 0; }
    .banner { padding: 10px 14px; border-radius: 6px; margin: 12px 0; }
    .banner.error { background: #fde8e8; border: 1px solid #f5b5b5; }
    .banner.notice { background: #e8f1fd; border: 1px solid #b5cdf5; }
    textarea { width: 100%; min-height: 90px; }
"#;

/// Escape text for use in element content and quoted attribute values.
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

/// Wrap `body` (already-escaped HTML) in the document shell.
pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title} - keiba-predict</title>
<style>{STYLE}</style>
</head>
<body>
<nav><a href="/races">Races</a><a href="/predict">Predict</a></nav>
<main>
<h1>{title}</h1>
{body}
</main>
</body>
</html>
"#,
        title = escape_html(title),
    )
}

pub fn error_banner(message: &str) -> String {
    format!(r#"<div class="banner error">{}</div>"#, escape_html(message))
}

pub fn notice_banner(message: &str) -> String {
    format!(r#"<div class="banner notice">{}</div>"#, escape_html(message))
}
