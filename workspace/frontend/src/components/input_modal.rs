use common::{format_signed_percent, CustomInputSet};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api_client::location::lookup_location;
use crate::common::toast::ToastContext;
use crate::session;
use crate::settings;
use crate::validator::{classify_query, ensure_submittable, Debouncer, QueryAction, ValidationState};

#[derive(Properties, PartialEq)]
pub struct InputModalProps {
    pub show: bool,
    /// First-time users get a welcome banner at the top of the form.
    pub first_visit: bool,
    pub on_close: Callback<()>,
    pub on_submit: Callback<CustomInputSet>,
}

#[function_component(InputModal)]
pub fn input_modal(props: &InputModalProps) -> Html {
    let validation = use_state(ValidationState::default);
    let debouncer = use_mut_ref(Debouncer::default);
    let is_submitting = use_state(|| false);
    let toast_ctx = use_context::<ToastContext>().unwrap();

    let location_ref = use_node_ref();
    let cases_ref = use_node_ref();
    let hospitalizations_ref = use_node_ref();
    let density_ref = use_node_ref();

    let stringency = use_state(|| 50i32);
    let mobility = use_state(|| 0i32);
    let vaccination = use_state(|| 50i32);

    // Restore the last submitted values whenever the modal opens. Closing
    // never resets the form.
    {
        let validation = validation.clone();
        let location_ref = location_ref.clone();
        let cases_ref = cases_ref.clone();
        let hospitalizations_ref = hospitalizations_ref.clone();
        let density_ref = density_ref.clone();
        let stringency = stringency.clone();
        let mobility = mobility.clone();
        let vaccination = vaccination.clone();

        use_effect_with(props.show, move |show| {
            if *show {
                if let Some(saved) = session::load() {
                    log::debug!("Restoring previous custom input for: {}", saved.location);
                    if let Some(input) = location_ref.cast::<HtmlInputElement>() {
                        input.set_value(&saved.location);
                    }
                    if let Some(input) = cases_ref.cast::<HtmlInputElement>() {
                        input.set_value(&saved.previous_week_cases.to_string());
                    }
                    if let Some(input) = hospitalizations_ref.cast::<HtmlInputElement>() {
                        if let Some(count) = saved.hospitalizations {
                            input.set_value(&count.to_string());
                        }
                    }
                    if let Some(input) = density_ref.cast::<HtmlInputElement>() {
                        if let Some(density) = saved.population_density {
                            input.set_value(&density.to_string());
                        }
                    }
                    stringency.set(saved.stringency_index as i32);
                    mobility.set(saved.mobility);
                    vaccination.set(saved.vaccination_rate as i32);
                    validation.set(ValidationState::Valid(saved.location_data));
                }
            }
            || ()
        });
    }

    // Debounced validation: each keystroke cancels the pending timer; only
    // the last keystroke of a burst fires a lookup. Too-short input clears
    // the message instead.
    let on_location_input = {
        let validation = validation.clone();
        let debouncer = debouncer.clone();

        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let settings = settings::get_settings();

            match classify_query(&value, settings.min_location_query_len) {
                QueryAction::Clear => {
                    debouncer.borrow_mut().cancel();
                    validation.set(ValidationState::Idle);
                }
                QueryAction::Schedule => {
                    let validation = validation.clone();
                    debouncer.borrow_mut().schedule(
                        settings.validation_debounce_ms,
                        move || {
                            validation.set(ValidationState::Pending);
                            wasm_bindgen_futures::spawn_local(async move {
                                match lookup_location(&value).await {
                                    Ok(matched) => {
                                        validation.set(ValidationState::Valid(matched))
                                    }
                                    Err(e) => {
                                        log::warn!("Location validation failed: {}", e);
                                        validation.set(ValidationState::Invalid);
                                    }
                                }
                            });
                        },
                    );
                }
            }
        })
    };

    let on_submit = {
        let validation = validation.clone();
        let is_submitting = is_submitting.clone();
        let location_ref = location_ref.clone();
        let cases_ref = cases_ref.clone();
        let hospitalizations_ref = hospitalizations_ref.clone();
        let density_ref = density_ref.clone();
        let stringency = stringency.clone();
        let mobility = mobility.clone();
        let vaccination = vaccination.clone();
        let on_submit = props.on_submit.clone();
        let toast_ctx = toast_ctx.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *is_submitting {
                return;
            }

            let location_text = location_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();

            let previous_week_cases = match cases_ref
                .cast::<HtmlInputElement>()
                .and_then(|input| input.value().parse::<u64>().ok())
            {
                Some(cases) => cases,
                None => {
                    toast_ctx
                        .show_error("Please enter the previous week's case count.".to_string());
                    return;
                }
            };
            let hospitalizations = hospitalizations_ref
                .cast::<HtmlInputElement>()
                .and_then(|input| input.value().parse::<u64>().ok());
            let population_density = density_ref
                .cast::<HtmlInputElement>()
                .and_then(|input| input.value().parse::<u32>().ok());

            let stringency_index = (*stringency).clamp(0, 100) as u8;
            let mobility_value = *mobility;
            let vaccination_rate = (*vaccination).clamp(0, 100) as u8;

            let validation = validation.clone();
            let is_submitting = is_submitting.clone();
            let on_submit = on_submit.clone();
            let toast_ctx = toast_ctx.clone();

            is_submitting.set(true);

            // Re-validate on submission; a stale accepted match for a
            // different input value must not slip through.
            wasm_bindgen_futures::spawn_local(async move {
                let accepted = match lookup_location(&location_text).await {
                    Ok(matched) => {
                        validation.set(ValidationState::Valid(matched.clone()));
                        Some(matched)
                    }
                    Err(e) => {
                        log::warn!("Submission-time validation failed: {}", e);
                        validation.set(ValidationState::Invalid);
                        None
                    }
                };

                let matched = match ensure_submittable(accepted.as_ref()) {
                    Ok(matched) => matched,
                    Err(message) => {
                        toast_ctx.show_error(message);
                        is_submitting.set(false);
                        return;
                    }
                };

                let input = CustomInputSet {
                    location: matched.name.clone(),
                    location_data: matched,
                    previous_week_cases,
                    hospitalizations,
                    stringency_index,
                    mobility: mobility_value,
                    vaccination_rate,
                    population_density,
                };

                is_submitting.set(false);
                on_submit.emit(input);
            });
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        let is_submitting = *is_submitting;
        Callback::from(move |_: MouseEvent| {
            if !is_submitting {
                on_close.emit(());
            }
        })
    };

    let on_slider = |handle: &UseStateHandle<i32>| {
        let handle = handle.clone();
        Callback::from(move |e: InputEvent| {
            if let Ok(value) = e.target_unchecked_into::<HtmlInputElement>().value().parse() {
                handle.set(value);
            }
        })
    };

    html! {
        <dialog class={classes!("modal", props.show.then_some("modal-open"))} id="input_modal">
            <div class="modal-box w-11/12 max-w-2xl">
                <h3 class="font-bold text-lg">{"Custom Location & Parameters"}</h3>

                <form onsubmit={on_submit} class="py-4 space-y-4">
                    {if props.first_visit {
                        html! {
                            <div class="alert alert-info">
                                <div>
                                    <p class="font-semibold">{"👋 Welcome to ViralCast!"}</p>
                                    <p class="text-sm">
                                        {"To get started, please enter your location and current \
                                          COVID-19 parameters below."}
                                    </p>
                                </div>
                            </div>
                        }
                    } else {
                        html! {}
                    }}

                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Location"}</span></label>
                        <input
                            ref={location_ref}
                            type="text"
                            class="input input-bordered w-full"
                            placeholder="e.g. France"
                            required={true}
                            disabled={*is_submitting}
                            oninput={on_location_input}
                        />
                        {if let Some(message) = validation.message() {
                            html! { <span class={validation.css_class()}>{message}</span> }
                        } else {
                            html! {}
                        }}
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{"Previous Week Cases"}</span>
                            </label>
                            <input
                                ref={cases_ref}
                                type="number"
                                min="0"
                                class="input input-bordered w-full"
                                required={true}
                                disabled={*is_submitting}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{"Hospitalizations (Optional)"}</span>
                            </label>
                            <input
                                ref={hospitalizations_ref}
                                type="number"
                                min="0"
                                class="input input-bordered w-full"
                                disabled={*is_submitting}
                            />
                        </div>
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Stringency Index"}</span>
                            <span class="label-text-alt">{*stringency}</span>
                        </label>
                        <input
                            type="range"
                            min="0"
                            max="100"
                            value={stringency.to_string()}
                            class="range range-primary"
                            disabled={*is_submitting}
                            oninput={on_slider(&stringency)}
                        />
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Mobility vs Baseline"}</span>
                            <span class="label-text-alt">{format_signed_percent(*mobility)}</span>
                        </label>
                        <input
                            type="range"
                            min="-50"
                            max="50"
                            value={mobility.to_string()}
                            class="range range-primary"
                            disabled={*is_submitting}
                            oninput={on_slider(&mobility)}
                        />
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Vaccination Rate"}</span>
                            <span class="label-text-alt">{format!("{}%", *vaccination)}</span>
                        </label>
                        <input
                            type="range"
                            min="0"
                            max="100"
                            value={vaccination.to_string()}
                            class="range range-primary"
                            disabled={*is_submitting}
                            oninput={on_slider(&vaccination)}
                        />
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Population Density (Optional)"}</span>
                        </label>
                        <input
                            ref={density_ref}
                            type="number"
                            min="0"
                            class="input input-bordered w-full"
                            placeholder="people per km²"
                            disabled={*is_submitting}
                        />
                    </div>

                    <div class="modal-action">
                        <button
                            type="button"
                            class="btn btn-ghost"
                            disabled={*is_submitting}
                            onclick={on_close.clone()}
                        >
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                            {if *is_submitting {
                                html! { <span class="loading loading-spinner loading-sm"></span> }
                            } else {
                                html! { {"Generate Prediction"} }
                            }}
                        </button>
                    </div>
                </form>
            </div>
            <div class="modal-backdrop" onclick={on_close}></div>
        </dialog>
    }
}
