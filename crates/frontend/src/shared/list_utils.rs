/// Shared list helpers: sorting, match highlighting, debounced search box.
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Rows that can be ordered by a named column
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort in place by `field`; stable, so equal rows keep their fetched order.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Case-insensitive comparison for text columns.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

pub fn compare_number(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Current column ordering of a table.
#[derive(Clone, Copy)]
pub struct SortState {
    pub field: RwSignal<String>,
    pub ascending: RwSignal<bool>,
}

impl SortState {
    pub fn new(field: &str) -> Self {
        Self {
            field: RwSignal::new(field.to_string()),
            ascending: RwSignal::new(true),
        }
    }

    /// Same column flips direction; another column sorts ascending.
    pub fn toggle(&self, field: &str) {
        if self.field.get_untracked() == field {
            self.ascending.update(|v| *v = !*v);
        } else {
            self.field.set(field.to_string());
            self.ascending.set(true);
        }
    }

    pub fn indicator(&self, field: &str) -> &'static str {
        get_sort_indicator(&self.field.get(), field, self.ascending.get())
    }

    pub fn apply<T: Sortable>(&self, items: &mut [T]) {
        sort_list(items, &self.field.get(), self.ascending.get());
    }
}

/// Header suffix for a sortable column
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Byte ranges of case-insensitive occurrences of `needle` in `text`.
/// Only ranges whose lowercase form keeps the byte length are returned, so
/// they are valid slice bounds of the original text.
pub fn match_ranges(text: &str, needle: &str) -> Vec<(usize, usize)> {
    let needle = needle.trim().to_lowercase();
    let text_lower = text.to_lowercase();
    if needle.is_empty() || text_lower.len() != text.len() {
        return Vec::new();
    }
    let mut ranges = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&needle) {
        let start = last_pos + pos;
        let end = start + needle.len();
        ranges.push((start, end));
        last_pos = end;
    }
    ranges
}

/// Text with search matches wrapped in `<mark>`.
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-match">{text[start..end].to_string()}</mark> }.into_any());
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search box with debounce and clear button
#[component]
pub fn SearchInput(
    /// Current committed search value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new value after typing pauses
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(into)]
    placeholder: Signal<String>,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(value.get_untracked());

    let debounce = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        // Replacing the handle drops (cancels) the previous timer.
        debounce.set_value(Some(Timeout::new(300, move || {
            on_change.run(new_value);
        })));
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        debounce.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class=move || if is_filter_active() { "search-input__field search-input__field--active" } else { "search-input__field" }
                placeholder=move || placeholder.get()
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button class="search-input__clear" on:click=clear_filter>
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct School {
        name: &'static str,
        students: f64,
    }

    impl Sortable for School {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "students" => compare_number(self.students, other.students),
                _ => compare_text(self.name, other.name),
            }
        }
    }

    #[test]
    fn test_sort_list_both_directions() {
        let mut schools = vec![
            School { name: "lycée de Biyem-Assi", students: 1200.0 },
            School { name: "Collège Vogt", students: 800.0 },
            School { name: "Institut Siantou", students: 1500.0 },
        ];
        sort_list(&mut schools, "name", true);
        assert_eq!(schools[0].name, "Collège Vogt");
        sort_list(&mut schools, "students", false);
        assert_eq!(schools[0].students, 1500.0);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "email", true), " ⇅");
    }

    #[test]
    fn test_match_ranges() {
        assert_eq!(match_ranges("Marie Ngono", "ngo"), vec![(6, 9)]);
        assert_eq!(match_ranges("abcabc", "BC"), vec![(1, 3), (4, 6)]);
        assert!(match_ranges("abc", "").is_empty());
        assert!(match_ranges("abc", "z").is_empty());
    }
}
