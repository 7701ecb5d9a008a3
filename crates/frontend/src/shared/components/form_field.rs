//! Labelled inputs of the details forms.
//!
//! Fields are controlled: `value` reads from the form signal and every
//! keystroke goes back through `on_input`.

use leptos::prelude::*;

#[component]
pub fn TextField(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
    /// Marks the label with an asterisk
    #[prop(optional)]
    required: bool,
    /// `text` unless given, e.g. `email`, `date`, `number`
    #[prop(optional, into)]
    input_type: Option<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label class:form-group__label--required=required>{label}</label>
            <input
                type=input_type.unwrap_or_else(|| "text".to_string())
                class="form-input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <textarea
                class="form-input"
                rows="3"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Select over `(code, label)` pairs; `value` holds the selected code
#[component]
pub fn SelectField(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    options: Vec<(&'static str, &'static str)>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <select
                class="form-input"
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(code, text)| {
                        view! {
                            <option value=code selected=move || value.get() == code>
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

/// Empty input means "no value"
pub fn to_optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Amount typed by the user; unparsable text becomes 0 and is rejected by
/// the form validation
pub fn to_amount(value: &str) -> f64 {
    contracts::shared::money::parse_money(value).unwrap_or(0.0)
}

/// Amount as shown inside an input: no grouping, blank for zero
pub fn amount_input_value(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_optional() {
        assert_eq!(to_optional("   ".into()), None);
        assert_eq!(to_optional("Calle 10".into()), Some("Calle 10".into()));
    }

    #[test]
    fn test_amount_helpers() {
        assert_eq!(to_amount("45.000"), 45.0);
        assert_eq!(to_amount("45000"), 45_000.0);
        assert_eq!(to_amount("1.250.000,50"), 1_250_000.5);
        assert_eq!(to_amount("abc"), 0.0);
        assert_eq!(amount_input_value(0.0), "");
        assert_eq!(amount_input_value(45_000.0), "45000");
        assert_eq!(amount_input_value(12.5), "12.5");
    }
}
