use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{
        parse_frame_size,
        pricing::{non_negative, positive},
        AppState, PricingError, RateDefaults,
    },
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let initial = state.with(|st| st.rates.clone());

    let mut frame_size_input = use_signal(|| initial.frame_size.clone());
    let mut kol_price_input = use_signal(|| initial.kol_price.to_string());
    let mut labour_cost_input = use_signal(|| initial.labour_cost.to_string());
    let mut sqft_price_input = use_signal(|| initial.sqft_price.to_string());

    let on_apply = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let parsed = parse_rates(
                frame_size_input(),
                kol_price_input(),
                labour_cost_input(),
                sqft_price_input(),
            );

            match parsed {
                Ok(rates) => {
                    state.with_mut(|st| st.rates = rates);
                    persist_user_state(&state);
                    push_toast(
                        toasts.clone(),
                        ToastKind::Success,
                        "Saved default rates for new doors.",
                    );
                }
                Err(message) => {
                    push_toast(toasts.clone(), ToastKind::Error, message);
                }
            }
        }
    };

    let on_reset = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let defaults = RateDefaults::default();
            frame_size_input.set(defaults.frame_size.clone());
            kol_price_input.set(defaults.kol_price.to_string());
            labour_cost_input.set(defaults.labour_cost.to_string());
            sqft_price_input.set(defaults.sqft_price.to_string());
            state.with_mut(|st| st.rates = defaults);
            persist_user_state(&state);
            push_toast(
                toasts.clone(),
                ToastKind::Info,
                "Restored the sample rates.",
            );
        }
    };

    rsx! {
        section {
            class: "{theme::panel()}",
            div {
                class: "panel-header",
                h2 { class: "{theme::panel_title()}", "Default rates" }
            }
            p { class: "muted", "New doors added to the estimator start with these values." }
            div { class: "form-grid",
                div {
                    label { class: "field-label", "Frame size (A*B)" }
                    input {
                        class: "field-input",
                        value: frame_size_input(),
                        oninput: move |evt| frame_size_input.set(evt.value()),
                    }
                }
                div {
                    label { class: "field-label", "Kol price (₹)" }
                    input {
                        class: "field-input",
                        value: kol_price_input(),
                        oninput: move |evt| kol_price_input.set(evt.value()),
                    }
                }
                div {
                    label { class: "field-label", "Labour cost (₹)" }
                    input {
                        class: "field-input",
                        value: labour_cost_input(),
                        oninput: move |evt| labour_cost_input.set(evt.value()),
                    }
                }
                div {
                    label { class: "field-label", "Sqft price (₹)" }
                    input {
                        class: "field-input",
                        value: sqft_price_input(),
                        oninput: move |evt| sqft_price_input.set(evt.value()),
                    }
                }
            }
            div { class: "actions",
                button { class: "{theme::btn_primary()}", onclick: on_apply, "Apply" }
                button { class: "{theme::btn_secondary()}", onclick: on_reset, "Reset Defaults" }
            }
        }
    }
}

fn parse_rates(
    frame_size: String,
    kol_price: String,
    labour_cost: String,
    sqft_price: String,
) -> Result<RateDefaults, String> {
    let frame_size = frame_size.trim().to_string();
    let checked = || -> Result<RateDefaults, PricingError> {
        let frame = parse_frame_size(&frame_size)?;
        positive("frame size side", frame.first)?;
        positive("frame size side", frame.second)?;
        Ok(RateDefaults {
            frame_size: frame_size.clone(),
            kol_price: positive("kol price", rate("kol price", &kol_price)?)?,
            labour_cost: non_negative("labour cost", rate("labour cost", &labour_cost)?)?,
            sqft_price: non_negative("sqft price", rate("sqft price", &sqft_price)?)?,
        })
    };
    checked().map_err(|err| err.to_string())
}

fn rate(field: &'static str, text: &str) -> Result<f64, PricingError> {
    text.trim()
        .parse()
        .map_err(|_| PricingError::NotANumber {
            field,
            value: text.trim().to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{price_door, DoorSpec};

    fn parse(frame: &str, kol: &str, labour: &str, sqft: &str) -> Result<RateDefaults, String> {
        parse_rates(frame.into(), kol.into(), labour.into(), sqft.into())
    }

    #[test]
    fn accepts_valid_rates() {
        let rates = parse(" 6*3 ", "175", "0", "95.5").unwrap();
        assert_eq!(
            rates,
            RateDefaults {
                frame_size: "6*3".to_string(),
                kol_price: 175.0,
                labour_cost: 0.0,
                sqft_price: 95.5,
            }
        );
    }

    #[test]
    fn rejects_bad_rates() {
        assert!(parse("abc", "150", "300", "80").is_err());
        assert!(parse("0*3", "150", "300", "80").is_err());
        assert!(parse("5*2.5", "0", "300", "80").is_err());
        assert!(parse("5*2.5", "150", "-1", "80").is_err());
        assert!(parse("5*2.5", "150", "300", "lots").is_err());
    }

    #[test]
    fn rate_errors_read_like_row_errors() {
        let mut spec = DoorSpec {
            kol_price: 0.0,
            ..DoorSpec::default()
        };
        let row_message = price_door(&spec, 1).unwrap_err().to_string();
        assert_eq!(parse("5*2.5", "0", "300", "80").unwrap_err(), row_message);

        spec.kol_price = 150.0;
        spec.labour_cost = -1.0;
        let row_message = price_door(&spec, 1).unwrap_err().to_string();
        assert_eq!(parse("5*2.5", "150", "-1", "80").unwrap_err(), row_message);

        spec.labour_cost = 300.0;
        spec.frame_size = "0*3".to_string();
        let row_message = price_door(&spec, 1).unwrap_err().to_string();
        assert_eq!(parse("0*3", "150", "300", "80").unwrap_err(), row_message);
    }

    #[test]
    fn non_numeric_rate_names_the_field() {
        assert_eq!(
            parse("5*2.5", "150", "300", "lots").unwrap_err(),
            "sqft price must be a number, got `lots`"
        );
    }
}
