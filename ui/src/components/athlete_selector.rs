use dioxus::prelude::*;

use crate::context::{use_analytics_client, use_athlete_session};

/// Most names the dropdown ever lists at once.
pub const DISPLAY_LIMIT: usize = 50;

/// Case-insensitive substring match over the athlete list, capped at [`DISPLAY_LIMIT`].
/// An empty query lists everyone (still capped).
pub fn filter_athletes<'a>(athletes: &'a [String], query: &str) -> Vec<&'a str> {
    let needle = query.to_lowercase();
    athletes
        .iter()
        .map(String::as_str)
        .filter(|name| needle.is_empty() || name.to_lowercase().contains(&needle))
        .take(DISPLAY_LIMIT)
        .collect()
}

/// Searchable athlete picker. The only place the selection is written.
#[component]
pub fn AthleteSelector() -> Element {
    let mut session = use_athlete_session();
    let client = use_analytics_client();
    let mut query = use_signal(String::new);
    let mut open = use_signal(|| false);

    let athletes = use_resource(move || {
        let client = client.clone();
        async move { client.athletes().await }
    });

    let mut choose = move |athlete: Option<String>| {
        if session.write().select(athlete) {
            tracing::debug!(athlete = ?session.peek().selected(), "athlete selection changed");
        }
        query.set(String::new());
        open.set(false);
    };

    let selected = session.read().selected().map(str::to_string);
    let input_value = if open() {
        query()
    } else {
        selected.clone().unwrap_or_default()
    };

    let listing = athletes.read_unchecked();
    let (names, error): (Vec<String>, Option<String>) = match &*listing {
        None => {
            return rsx! {
                div { class: "athlete-selector",
                    span { class: "athlete-selector__label", "Athlete" }
                    div { class: "athlete-selector__input athlete-selector__input--loading", "Loading..." }
                }
            };
        }
        Some(Ok(all)) => (
            filter_athletes(all, &query())
                .into_iter()
                .map(str::to_string)
                .collect(),
            None,
        ),
        Some(Err(err)) => (Vec::new(), Some(err.to_string())),
    };

    rsx! {
        div { class: "athlete-selector",
            label { class: "athlete-selector__label", r#for: "athlete-search", "Athlete" }
            div { class: "athlete-selector__field",
                span { class: "athlete-selector__icon", aria_hidden: "true", "⌕" }
                input {
                    id: "athlete-search",
                    class: "athlete-selector__input",
                    r#type: "search",
                    autocomplete: "off",
                    placeholder: "Search athletes",
                    value: "{input_value}",
                    onfocus: move |_| open.set(true),
                    oninput: move |evt: FormEvent| {
                        query.set(evt.value());
                        open.set(true);
                    },
                }
                if selected.is_some() {
                    button {
                        r#type: "button",
                        class: "athlete-selector__clear",
                        aria_label: "Clear selection",
                        onclick: move |_| choose(None),
                        "×"
                    }
                }
                button {
                    r#type: "button",
                    class: "athlete-selector__toggle",
                    aria_label: "Show athletes",
                    onclick: move |_| open.set(!open()),
                    "⇅"
                }
            }

            if let Some(message) = error {
                p { class: "athlete-selector__error", "{message}" }
            }

            if open() && !names.is_empty() {
                ul { class: "athlete-selector__options", role: "listbox",
                    for name in names {
                        {render_option(name, selected.as_deref(), choose)}
                    }
                }
            }
        }
    }
}

fn render_option(
    name: String,
    selected: Option<&str>,
    mut choose: impl FnMut(Option<String>) + 'static,
) -> Element {
    let is_selected = selected == Some(name.as_str());
    let class = if is_selected {
        "athlete-selector__option athlete-selector__option--selected"
    } else {
        "athlete-selector__option"
    };
    let value = name.clone();

    rsx! {
        li { key: "{name}", role: "option", aria_selected: is_selected,
            button {
                r#type: "button",
                class: "{class}",
                onclick: move |_| choose(Some(value.clone())),
                if is_selected {
                    span { class: "athlete-selector__check", aria_hidden: "true", "✓" }
                }
                "{name}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn matches_anywhere_ignoring_case() {
        let athletes = roster(&["Li Wei", "Chen Yu", "Wei Ling"]);
        assert_eq!(filter_athletes(&athletes, "wei"), vec!["Li Wei", "Wei Ling"]);
        assert_eq!(filter_athletes(&athletes, "CHEN"), vec!["Chen Yu"]);
        assert!(filter_athletes(&athletes, "zhang").is_empty());
    }

    #[test]
    fn empty_query_lists_everyone_in_order() {
        let athletes = roster(&["B", "A"]);
        assert_eq!(filter_athletes(&athletes, ""), vec!["B", "A"]);
    }

    #[test]
    fn listing_is_capped() {
        let athletes: Vec<String> = (0..120).map(|i| format!("Swimmer {i}")).collect();
        assert_eq!(filter_athletes(&athletes, "").len(), DISPLAY_LIMIT);
        assert_eq!(filter_athletes(&athletes, "swimmer 1").len(), 31);
    }
}
