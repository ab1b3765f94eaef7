//! HTML pages served alongside the prediction API.
//!
//! Pure presentation: the profession page interpolates a query parameter
//! and nothing else carries state.

/// Escape a string for safe interpolation into HTML body text.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render the landing page.
pub fn home_page() -> String {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Sibyl</title>
</head>
<body>
    <h1>Sibyl</h1>
    <p>Profession prediction service.</p>
    <p><a href="/index">Choose a profession</a></p>
</body>
</html>"#
        .to_string()
}

/// Render the profession page, interpolating the selected profession if
/// one was given.
pub fn profession_page(profession: Option<&str>) -> String {
    let heading = match profession {
        Some(p) => format!("Selected profession: {}", html_escape(p)),
        None => "Select a profession".to_string(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Sibyl</title>
</head>
<body>
    <h1>{}</h1>
    <p>POST a feature vector to <code>/predict</code> to get a prediction.</p>
</body>
</html>"#,
        heading
    )
}
