use maud::{html, Markup};
use std::collections::BTreeSet;

/// A labelled multi-select; options in `selected` come back pre-selected.
pub fn multi_select(
    id: &str,
    name: &str,
    label: &str,
    options: &[String],
    selected: &BTreeSet<String>,
) -> Markup {
    html! {
        div class="filter" {
            label for=(id) { (label) }
            select id=(id) name=(name) multiple {
                @for value in options {
                    option value=(value) selected[selected.contains(value)] { (value) }
                }
            }
        }
    }
}
