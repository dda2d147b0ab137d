//! Race listing view.

use std::fmt::Write;

use keiba_common::Race;

use super::layout::{self, escape_html};

const TITLE: &str = "Races";

/// Render the races as a static table, in the order received.
pub fn render(races: &[Race]) -> String {
    if races.is_empty() {
        return layout::page(TITLE, &layout::notice_banner("No races are available."));
    }

    let mut body = String::from(
        "<table>\n<thead><tr><th>ID</th><th>Race</th><th>Venue</th><th>Date</th></tr></thead>\n<tbody>\n",
    );
    for race in races {
        let date = match race.parsed_date() {
            Some(date) => date.format("%Y/%m/%d").to_string(),
            None => race.date.clone(),
        };
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            race.id,
            escape_html(&race.name),
            escape_html(&race.venue),
            escape_html(&date),
        );
    }
    body.push_str("</tbody>\n</table>\n");

    layout::page(TITLE, &body)
}

pub fn render_error(message: &str) -> String {
    layout::page(
        TITLE,
        &layout::error_banner(&format!("Could not load races: {}", message)),
    )
}
