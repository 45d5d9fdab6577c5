//! Small pure helpers shared by the view services

use dpss_core::domain::Affected;

use crate::domain::Link;

/// `DD_MM_YYYY_HH_MM_SS` to `DD.MM.YYYY HH:MM:SS`.
///
/// Malformed input is joined as far as it goes, never rejected.
pub fn fix_date_string(raw: &str) -> String {
    let parts: Vec<&str> = raw.split('_').collect();
    let split = parts.len().min(3);
    format!("{} {}", parts[..split].join("."), parts[split..].join(":"))
}

/// Vulnerable version range in bracket notation, e.g. `[1.0, 2.0)`.
pub fn vulnerable_interval(affected: &Affected) -> String {
    let open = if affected.start_condition == "gte" { '[' } else { '(' };
    let close = if affected.end_condition == "lte" { ']' } else { ')' };
    format!(
        "{open}{}, {}{close}",
        affected.start_value, affected.end_value
    )
}

/// Navigation link; shows the URL itself when no text is given.
pub fn gen_link(url: &str, text: Option<&str>) -> Link {
    let text = text.filter(|t| !t.is_empty()).unwrap_or(url);
    Link::go_to(text, url)
}
