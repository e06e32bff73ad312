use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use crate::app_state::{close_overlay, finish_volunteer, use_app_state, use_modal, Overlay};
use crate::i18n::{use_i18n, t, t_string};
use crate::icons::close_icon;
use webdata::site::modal::{Availability, Interest, SubmitStatus, VolunteerForm};

fn availability_from_id(id: &str) -> Availability {
    match id {
        "weekends" => Availability::Weekends,
        "flexible" => Availability::Flexible,
        _ => Availability::Weekdays,
    }
}

/// Volunteer sign-up. Nothing is sent anywhere: the submit always succeeds
/// after a short delay and the dialog closes itself.
#[component]
pub fn VolunteerModal() -> impl IntoView {
    let i18n = use_i18n();
    let state = use_app_state();
    let modal = use_modal(Overlay::Volunteer);
    let status = Memo::new(move |_| state.site.with(|s| s.submission.status()));

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let interest = RwSignal::new(Interest::Unselected);
    let availability = RwSignal::new(Availability::Weekdays);
    let (invalid, set_invalid) = signal(false);

    let clear = move || {
        name.set(String::new());
        email.set(String::new());
        phone.set(String::new());
        message.set(String::new());
        interest.set(Interest::Unselected);
        availability.set(Availability::Weekdays);
        set_invalid.set(false);
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = VolunteerForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            interest: interest.get_untracked(),
            availability: availability.get_untracked(),
            message: message.get_untracked(),
        };
        if !form.missing_fields().is_empty() {
            set_invalid.set(true);
            return;
        }
        set_invalid.set(false);
        let Some((delay, attempt)) = state
            .site
            .try_update(|s| s.submission.submit().map(|d| (d, s.submission.attempt())))
            .flatten()
        else {
            return;
        };
        leptos::logging::log!("Volunteer application from {} ({})", form.name, form.interest.id());
        set_timeout(move || {
            if let Some(close_delay) = state.site.try_update(|s| s.submission.complete()).flatten() {
                set_timeout(move || {
                    if finish_volunteer(state, attempt) {
                        clear();
                    }
                }, close_delay);
            }
        }, delay);
    };

    let close = move |_| close_overlay(state, Overlay::Volunteer);

    view! {
        <Show when=move || modal.get().is_mounted()>
            <div
                class="fixed inset-0 z-[100] flex items-center justify-center p-4 bg-black/60 transition-opacity duration-300"
                class:opacity-0=move || !modal.get().is_visible()
                class:opacity-100=move || modal.get().is_visible()
                on:click=close
            >
                <div class="relative w-full max-w-lg p-6 overflow-y-auto bg-white shadow-2xl max-h-[90vh] rounded-2xl" on:click=|ev| ev.stop_propagation()>
                    <button class="absolute btn btn-sm btn-circle btn-ghost right-3 top-3" aria-label="close" on:click=close>
                        {close_icon()}
                    </button>
                    <h2 class="text-2xl font-bold text-teal-700">{t!(i18n, volunteer_title)}</h2>
                    <p class="mb-4 text-gray-600">{t!(i18n, volunteer_subtitle)}</p>

                    {move || if status.get() == SubmitStatus::Success {
                        view! {
                            <div class="alert alert-success"><span>{t!(i18n, form_success)}</span></div>
                        }.into_any()
                    } else {
                        view! {
                            <form class="space-y-3" on:submit=on_submit>
                                <Show when=move || invalid.get()>
                                    <div class="alert alert-warning"><span>{t!(i18n, form_required)}</span></div>
                                </Show>
                                <label class="w-full form-control">
                                    <span class="label-text">{t!(i18n, form_name)} " *"</span>
                                    <input type="text" class="w-full input input-bordered" bind:value=name />
                                </label>
                                <label class="w-full form-control">
                                    <span class="label-text">{t!(i18n, form_email)} " *"</span>
                                    <input type="email" class="w-full input input-bordered" bind:value=email />
                                </label>
                                <label class="w-full form-control">
                                    <span class="label-text">{t!(i18n, form_phone)} " *"</span>
                                    <input type="tel" class="w-full input input-bordered" bind:value=phone />
                                </label>
                                <label class="w-full form-control">
                                    <span class="label-text">{t!(i18n, form_interest)} " *"</span>
                                    <select class="w-full select select-bordered"
                                        prop:value=move || interest.get().id()
                                        on:change=move |ev| interest.set(Interest::from_id(&event_target_value(&ev)))>
                                        <option value="">{move || t_string!(i18n, interest_select)}</option>
                                        <option value="education">{move || t_string!(i18n, interest_education)}</option>
                                        <option value="health">{move || t_string!(i18n, interest_health)}</option>
                                        <option value="social">{move || t_string!(i18n, interest_social)}</option>
                                        <option value="digital">{move || t_string!(i18n, interest_digital)}</option>
                                        <option value="other">{move || t_string!(i18n, interest_other)}</option>
                                    </select>
                                </label>
                                <label class="w-full form-control">
                                    <span class="label-text">{t!(i18n, form_availability)}</span>
                                    <select class="w-full select select-bordered"
                                        on:change=move |ev| availability.set(availability_from_id(&event_target_value(&ev)))>
                                        <option value="weekdays">{move || t_string!(i18n, availability_weekdays)}</option>
                                        <option value="weekends">{move || t_string!(i18n, availability_weekends)}</option>
                                        <option value="flexible">{move || t_string!(i18n, availability_flexible)}</option>
                                    </select>
                                </label>
                                <label class="w-full form-control">
                                    <span class="label-text">{t!(i18n, form_message)}</span>
                                    <textarea class="w-full textarea textarea-bordered" rows="3" bind:value=message></textarea>
                                </label>
                                <button type="submit" class="w-full btn btn-accent" disabled=move || status.get() == SubmitStatus::Submitting>
                                    {move || if status.get() == SubmitStatus::Submitting {
                                        view! { <span class="loading loading-spinner loading-sm"></span>{t!(i18n, form_submitting)} }.into_any()
                                    } else {
                                        view! { {t!(i18n, form_submit)} }.into_any()
                                    }}
                                </button>
                            </form>
                        }.into_any()
                    }}
                </div>
            </div>
        </Show>
    }
}
