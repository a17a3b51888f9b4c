//! Contact dialog
//!
//! The whole form lives in one `FormState` signal and every input goes
//! through its methods. Country search is debounced with a browser timeout
//! that is cleared and re-armed on each keystroke.

use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use thrive_core::controller::SUBMIT_FAILED_MESSAGE;
use thrive_core::{
    ContactConfig, ContactForm, Country, FormField, FormState, LeadSink, PendingSubmission, Rejection,
    RequiredField, Service, SheetsClient, ValidatedField,
};

const INPUT_CLASS: &str =
    "w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-emerald-500 focus:border-emerald-500";

async fn send_lead(config: ContactConfig, form: ContactForm) -> Result<(), String> {
    let client = SheetsClient::new(&config).map_err(|e| e.to_string())?;
    let ack = client.submit(&form).await.map_err(|e| e.to_string())?;
    tracing::info!("Form submitted successfully: {}", ack);
    Ok(())
}

#[component]
pub fn ContactDialog(open: RwSignal<bool>, success_open: RwSignal<bool>) -> impl IntoView {
    let config = ContactConfig::default();
    let debounce = config.debounce();
    let state = create_rw_signal(FormState::default());
    let search_timer = store_value(None::<TimeoutHandle>);

    let cancel_search = move || {
        search_timer.update_value(|timer| {
            if let Some(handle) = timer.take() {
                handle.clear();
            }
        });
    };

    // Fresh form every time the dialog opens
    create_effect(move |_| {
        if open.get() {
            cancel_search();
            state.update(FormState::reset);
        }
    });

    // Each answer carries the id of the submission it belongs to
    let submit = create_action(move |pending: &PendingSubmission| {
        let id = pending.id();
        let request = send_lead(config.clone(), pending.clone().into_form());
        async move { (id, request.await) }
    });

    create_effect(move |_| {
        let Some((id, result)) = submit.value().get() else {
            return;
        };

        let succeeded = result.is_ok();
        let settled = result.map_err(|message| {
            tracing::error!("Error submitting form: {}", message);
            SUBMIT_FAILED_MESSAGE.to_string()
        });

        if !state.try_update(|s| s.finish_submit(id, settled)).unwrap_or(false) {
            tracing::warn!("Dropping result of abandoned submission #{}", id);
            return;
        }

        if succeeded {
            cancel_search();
            open.set(false);
            success_open.set(true);
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match state.try_update(FormState::begin_submit) {
            Some(Ok(pending)) => submit.dispatch(pending),
            Some(Err(Rejection::AlreadySubmitting)) | None => {}
            Some(Err(rejection)) => tracing::debug!("Submit blocked: {:?}", rejection),
        }
    };

    let on_clear = move |_: ev::MouseEvent| {
        if state.with_untracked(FormState::is_submitting) {
            return;
        }
        cancel_search();
        state.update(FormState::reset);
    };

    let on_cancel = move |_: ev::MouseEvent| {
        cancel_search();
        state.update(FormState::reset);
        open.set(false);
    };

    let on_search = move |ev: ev::Event| {
        let text = event_target_value(&ev);
        if state.try_update(|s| s.set_search_query(text)) != Some(true) {
            return;
        }
        cancel_search();
        let handle = set_timeout_with_handle(move || state.update(FormState::apply_filter), debounce);
        search_timer.set_value(handle.ok());
    };

    // Number keys never reach the search box
    let on_search_keydown = move |ev: ev::KeyboardEvent| {
        let key = ev.key();
        if key.len() == 1 && key.chars().all(|c| c.is_ascii_digit()) {
            ev.prevent_default();
        }
    };

    let submitting = move || state.with(FormState::is_submitting);

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50">
                <div class="bg-white rounded-xl shadow-lg p-8 max-w-md w-full max-h-[90vh] overflow-y-auto">
                    <h2 class="text-2xl font-bold text-gray-900 mb-6">"Form Details"</h2>

                    <form on:submit=on_submit class="space-y-6">
                        <TextField state=state field=FormField::Name/>
                        <TextField state=state field=FormField::Surname/>
                        <TextField state=state field=FormField::Email input_type="email"/>

                        // Country with search
                        <div class="flex items-start gap-4">
                            <label for="country" class="w-1/3 text-sm font-medium text-gray-700">"Country"</label>
                            <div class="flex-1 space-y-2">
                                <div class="flex items-center px-2 py-1 border rounded-md">
                                    <span class="mr-2 text-gray-400">"🔍"</span>
                                    <input
                                        class="w-full border-none outline-none bg-transparent placeholder:text-gray-400"
                                        placeholder="Search countries..."
                                        prop:value=move || state.with(|s| s.search_query().to_string())
                                        on:input=on_search
                                        on:keydown=on_search_keydown
                                    />
                                </div>
                                <Show
                                    when=move || state.with(|s| !s.filtered_countries().is_empty())
                                    fallback=|| view! { <p class="text-sm text-gray-500 p-2">"No countries found"</p> }
                                >
                                    <select
                                        id="country"
                                        name="country"
                                        required
                                        class=INPUT_CLASS
                                        prop:value=move || state.with(|s| s.form().country.clone())
                                        on:change=move |ev| {
                                            let name = event_target_value(&ev);
                                            state.update(|s| {
                                                s.select_country(&name);
                                            });
                                        }
                                    >
                                        <option value="" disabled>"Select a country"</option>
                                        <For
                                            each=move || state.with(|s| s.filtered_countries().to_vec())
                                            key=|country| country.code.clone()
                                            children=move |country: Country| view! {
                                                <option value=country.name.clone()>
                                                    {format!("{} {}", country.emoji, country.name)}
                                                </option>
                                            }
                                        />
                                    </select>
                                </Show>
                                <RequiredError state=state field=RequiredField::Country/>
                            </div>
                        </div>

                        // Dial code and number
                        <div>
                            <div class="flex items-center gap-4">
                                <label for="contactNumber" class="w-1/3 text-sm font-medium text-gray-700">
                                    {FormField::ContactNumber.label()}
                                </label>
                                <div class="flex flex-1 space-x-2">
                                    <select
                                        name="dialCode"
                                        class="w-28 px-2 py-2 border border-gray-300 rounded-lg"
                                        prop:value=move || state.with(|s| s.form().dial_code.clone())
                                        on:change=move |ev| state.update(|s| s.select_dial_code(event_target_value(&ev)))
                                    >
                                        <option value="" disabled>"Code"</option>
                                        {state.with_untracked(|s| {
                                            s.catalog()
                                                .all()
                                                .iter()
                                                .map(|country| view! {
                                                    <option value=country.dial_code.clone()>
                                                        {format!("{} {}", country.emoji, country.dial_code)}
                                                    </option>
                                                })
                                                .collect_view()
                                        })}
                                    </select>
                                    <input
                                        id="contactNumber"
                                        name="contactNumber"
                                        type="tel"
                                        required
                                        class=INPUT_CLASS
                                        prop:value=move || state.with(|s| s.form().contact_number.clone())
                                        on:input=move |ev| {
                                            state.update(|s| s.update_field(FormField::ContactNumber, event_target_value(&ev)))
                                        }
                                    />
                                </div>
                            </div>
                            <RequiredError state=state field=RequiredField::ContactNumber/>
                            <FieldError state=state field=ValidatedField::ContactNumber/>
                        </div>

                        // Services
                        <div>
                            <p class="block text-sm font-medium text-gray-700">"Services Interested (Select Multiple)"</p>
                            <div class="flex flex-col gap-2 mt-2">
                                {Service::ALL
                                    .into_iter()
                                    .map(|service| view! {
                                        <label class="flex items-center space-x-2">
                                            <input
                                                type="checkbox"
                                                value=service.label()
                                                prop:checked=move || state.with(|s| s.form().is_interested_in(service))
                                                on:change=move |_| state.update(|s| s.toggle_service(service))
                                            />
                                            <span>{service.label()}</span>
                                        </label>
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        {move || {
                            state
                                .with(|s| s.submit_error().map(str::to_string))
                                .map(|message| view! {
                                    <p class="text-sm text-red-600" role="alert">{message}</p>
                                })
                        }}

                        <div class="flex justify-end space-x-4">
                            <button
                                type="button"
                                class="px-4 py-2 border border-gray-300 rounded-lg disabled:opacity-50"
                                disabled=submitting
                                on:click=on_clear
                            >
                                "Clear Fields"
                            </button>
                            <button
                                type="button"
                                class="px-4 py-2 border border-gray-300 rounded-lg"
                                on:click=on_cancel
                            >
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                class="px-4 py-2 bg-emerald-600 hover:bg-emerald-700 text-white font-semibold rounded-lg disabled:opacity-50"
                                disabled=submitting
                            >
                                {move || if submitting() { "Submitting..." } else { "Submit" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

/// Labelled free-text input bound to one form field
#[component]
fn TextField(
    state: RwSignal<FormState>,
    field: FormField,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <div class="flex items-center gap-4">
                <label for=field.as_str() class="w-1/3 text-sm font-medium text-gray-700">{field.label()}</label>
                <input
                    id=field.as_str()
                    name=field.as_str()
                    type=input_type
                    required
                    class=INPUT_CLASS
                    prop:value=move || state.with(|s| s.form().field(field).to_string())
                    on:input=move |ev| state.update(|s| s.update_field(field, event_target_value(&ev)))
                />
            </div>
            <RequiredError state=state field=RequiredField::from(field)/>
            {ValidatedField::for_field(field).map(|validated| view! { <FieldError state=state field=validated/> })}
        </div>
    }
}

#[component]
fn FieldError(state: RwSignal<FormState>, field: ValidatedField) -> impl IntoView {
    move || {
        state
            .with(|s| s.error_for(field).map(str::to_string))
            .map(|message| view! { <p class="text-sm text-red-600 mt-1">{message}</p> })
    }
}

#[component]
fn RequiredError(state: RwSignal<FormState>, field: RequiredField) -> impl IntoView {
    move || {
        state
            .with(|s| s.required_error_for(field))
            .map(|message| view! { <p class="text-sm text-red-600 mt-1">{message}</p> })
    }
}
