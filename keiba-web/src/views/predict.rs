//! Prediction form and results.

use std::fmt::Write;

use keiba_common::{sort_descending, Prediction, Sex};

use super::layout::{self, escape_html};
use crate::form::{EntryRow, PredictForm, MAX_ROWS};

const TITLE: &str = "Prediction";

/// What to show under the form.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Outcome {
    #[default]
    Empty,
    Notice(String),
    Invalid(Vec<String>),
    Predictions(Vec<Prediction>),
    BackendError(String),
}

pub fn render(form: &PredictForm, outcome: Outcome) -> String {
    let mut body = render_form(form);

    match outcome {
        Outcome::Empty => {}
        Outcome::Notice(message) => body.push_str(&layout::notice_banner(&message)),
        Outcome::Invalid(errors) => {
            body.push_str(r#"<div class="banner error"><p>Please fix the following:</p><ul>"#);
            for error in &errors {
                let _ = write!(body, "<li>{}</li>", escape_html(error));
            }
            body.push_str("</ul></div>\n");
        }
        Outcome::Predictions(mut predictions) => {
            sort_descending(&mut predictions);
            body.push_str(&render_predictions(&predictions));
        }
        Outcome::BackendError(message) => body.push_str(&layout::error_banner(&format!(
            "Prediction failed: {}",
            message
        ))),
    }

    layout::page(TITLE, &body)
}

fn render_form(form: &PredictForm) -> String {
    let mut html = String::from(r#"<form method="post" action="/predict">"#);
    // First submit button in the form is the one Enter triggers.
    html.push_str(r#"<button type="submit" name="action" value="predict" hidden></button>"#);
    html.push_str(
        "\n<table>\n<thead><tr><th>#</th><th>Waku</th><th>Umaban</th><th>Jockey weight</th>\
         <th>Horse weight</th><th>Sex</th><th>Age</th><th></th></tr></thead>\n<tbody>\n",
    );
    for (i, row) in form.rows.iter().enumerate() {
        html.push_str(&render_row(i, row, form.rows.len() > 1));
    }
    html.push_str("</tbody>\n</table>\n<div class=\"actions\">");
    if form.rows.len() < MAX_ROWS {
        html.push_str(r#"<button type="submit" name="action" value="add">Add horse</button> "#);
    }
    html.push_str(r#"<button type="submit" name="action" value="predict">Predict</button></div>"#);

    let _ = write!(
        html,
        "\n<h2>Import race card</h2>\n\
         <p>One horse per line: waku, umaban, sex/age (e.g. 牡4), jockey weight, horse weight (e.g. 480(+2)). \
         Tab-separated rows copied from a netkeiba race card also work.</p>\n\
         <textarea name=\"card\">{}</textarea>\n\
         <div class=\"actions\"><button type=\"submit\" name=\"action\" value=\"import\">Import</button></div>\n\
         </form>\n",
        escape_html(&form.card)
    );
    html
}

fn render_row(index: usize, row: &EntryRow, removable: bool) -> String {
    let input = |name: &str, value: &str| {
        format!(
            r#"<td><input type="text" name="{}" value="{}"></td>"#,
            name,
            escape_html(value)
        )
    };

    let mut sex_options = String::new();
    let raw_sex = row.sex.trim();
    // Keep an unrecognised value on screen so it is resubmitted as typed.
    if !Sex::ALL.iter().any(|sex| sex.code().to_string() == raw_sex) {
        let _ = write!(
            sex_options,
            r#"<option value="{0}" selected>{0}</option>"#,
            escape_html(&row.sex)
        );
    }
    for sex in Sex::ALL {
        let code = sex.code().to_string();
        let selected = if raw_sex == code { " selected" } else { "" };
        let _ = write!(
            sex_options,
            r#"<option value="{}"{}>{} ({})</option>"#,
            code,
            selected,
            sex.symbol(),
            sex.label()
        );
    }

    let remove = if removable {
        format!(
            r#"<button type="submit" name="action" value="remove-{}">Remove</button>"#,
            index
        )
    } else {
        String::new()
    };

    format!(
        "<tr><td>{}</td>{}{}{}{}<td><select name=\"sex\">{}</select></td>{}<td>{}</td></tr>\n",
        index + 1,
        input("waku", &row.waku),
        input("umaban", &row.umaban),
        input("jockey_weight", &row.jockey_weight),
        input("horse_weight", &row.horse_weight),
        sex_options,
        input("age", &row.age),
        remove,
    )
}

/// `predictions` must already be sorted.
fn render_predictions(predictions: &[Prediction]) -> String {
    if predictions.is_empty() {
        return layout::notice_banner("The model returned no predictions.");
    }

    let mut html = String::from(
        "<h2>Results</h2>\n<table>\n<thead><tr><th>Rank</th><th>Umaban</th><th>Probability</th></tr></thead>\n<tbody>\n",
    );
    for (rank, prediction) in predictions.iter().enumerate() {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{:.1}%</td></tr>",
            rank + 1,
            prediction.umaban,
            prediction.probability * 100.0
        );
    }
    html.push_str("</tbody>\n</table>\n");
    html
}
