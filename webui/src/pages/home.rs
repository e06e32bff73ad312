use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use crate::app_state::{open_overlay, use_app_state, use_lang, Overlay};
use crate::components::hero_carousel::HeroCarousel;
use crate::i18n::{use_i18n, t, t_string};
use crate::icons::{clock_icon, location_icon, people_icon, play_icon};
use webdata::site::content::{ABOUT_VIDEO, ACTIVITIES, IMPACT_METRICS, MEDIA, PROGRAMS};
use webdata::site::i18n::localize_digits;
use webdata::site::modal::ContactForm;

fn section_heading(title: impl IntoView, subtitle: impl IntoView) -> impl IntoView {
    view! {
        <div class="mb-10 text-center">
            <h2 class="pb-2 mx-auto mb-3 text-4xl font-bold text-gray-800 border-b-4 border-yellow-500 w-fit">{title}</h2>
            <p class="text-gray-600">{subtitle}</p>
        </div>
    }
}

#[component]
fn About() -> impl IntoView {
    let i18n = use_i18n();
    let state = use_app_state();
    view! {
        <section id="about" class="container px-4 py-16 mx-auto">
            {section_heading(t!(i18n, about_title), t!(i18n, site_subtitle))}
            <div class="grid items-center grid-cols-1 gap-10 md:grid-cols-2">
                <div class="space-y-6">
                    <p class="text-lg leading-relaxed text-gray-700">{t!(i18n, about_body)}</p>
                    <div class="shadow card bg-base-100">
                        <div class="card-body">
                            <h3 class="card-title text-teal-700">{t!(i18n, mission_title)}</h3>
                            <p>{t!(i18n, mission_body)}</p>
                        </div>
                    </div>
                    <div class="shadow card bg-base-100">
                        <div class="card-body">
                            <h3 class="card-title text-teal-700">{t!(i18n, vision_title)}</h3>
                            <p>{t!(i18n, vision_body)}</p>
                        </div>
                    </div>
                    <button class="btn btn-outline btn-accent" on:click=move |_| open_overlay(state, Overlay::Founder)>
                        {t!(i18n, founder_cta)}
                    </button>
                </div>
                <div class="overflow-hidden shadow-xl aspect-video rounded-2xl">
                    <iframe class="w-full h-full" src=ABOUT_VIDEO title="Shomajgori Foundation" allowfullscreen=true></iframe>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Programs() -> impl IntoView {
    let i18n = use_i18n();
    let lang = use_lang();
    view! {
        <section id="programs" class="py-16 bg-gray-50">
            <div class="container px-4 mx-auto">
                {section_heading(t!(i18n, programs_title), t!(i18n, programs_subtitle))}
                <div class="grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-4">
                    {PROGRAMS.iter().map(|program| {
                        let title = program.title;
                        let description = program.description;
                        let features = program.features;
                        view! {
                            <div class=format!("shadow-xl card bg-base-100 border-t-4 border-{}", program.category.color())>
                                <div class="card-body">
                                    <h3 class="text-2xl card-title">{move || title.get(lang.get())}</h3>
                                    <p class="text-gray-600">{move || description.get(lang.get())}</p>
                                    <ul class="mt-2 space-y-1 text-sm list-disc list-inside">
                                        {features.iter().map(|f| {
                                            let f = *f;
                                            view! { <li>{move || f.get(lang.get())}</li> }
                                        }).collect_view()}
                                    </ul>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>

                <h3 class="mt-16 mb-2 text-3xl font-bold text-center text-gray-800">{t!(i18n, activities_title)}</h3>
                <p class="mb-8 text-center text-gray-600">{t!(i18n, activities_subtitle)}</p>
                <div class="grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-3">
                    {ACTIVITIES.iter().map(|activity| {
                        let title = activity.title;
                        let description = activity.description;
                        let location = activity.location;
                        let schedule = activity.schedule;
                        let category = activity.category;
                        let participants = activity.participants;
                        view! {
                            <div class="shadow card bg-base-100">
                                <div class="card-body">
                                    <span class=format!("badge badge-outline text-{}", activity.color)>{move || category.get(lang.get())}</span>
                                    <h4 class="text-xl card-title">{move || title.get(lang.get())}</h4>
                                    <p class="text-gray-600">{move || description.get(lang.get())}</p>
                                    <div class="mt-2 space-y-1 text-sm text-gray-700">
                                        <div class="flex items-center gap-2">{location_icon()}<span>{move || location.get(lang.get())}</span></div>
                                        <div class="flex items-center gap-2">{clock_icon()}<span>{move || schedule.get(lang.get())}</span></div>
                                        <div class="flex items-center gap-2">
                                            {people_icon()}
                                            <span>{move || localize_digits(&participants.to_string(), lang.get())}" "{t!(i18n, participants)}</span>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Impact() -> impl IntoView {
    let i18n = use_i18n();
    let lang = use_lang();
    view! {
        <section id="impact" class="py-16 text-white bg-teal-700">
            <div class="container px-4 mx-auto">
                <div class="mb-10 text-center">
                    <h2 class="mb-3 text-4xl font-bold">{t!(i18n, impact_title)}</h2>
                    <p class="text-teal-100">{t!(i18n, impact_subtitle)}</p>
                </div>
                <div class="grid grid-cols-2 gap-6 md:grid-cols-4">
                    {IMPACT_METRICS.iter().map(|metric| {
                        let value = metric.value;
                        let label = metric.label;
                        view! {
                            <div class="text-center">
                                <div class="text-5xl font-bold">{move || localize_digits(value, lang.get())}</div>
                                <div class="mt-2 text-teal-100">{move || label.get(lang.get())}</div>
                            </div>
                        }
                    }).collect_view()}
                </div>
                <div class="flex justify-center mt-10">
                    <A href="/analytics" attr:class="btn bg-white text-teal-800 border-white">{t!(i18n, nav_analytics)}</A>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Photos() -> impl IntoView {
    let i18n = use_i18n();
    let lang = use_lang();
    view! {
        <section id="photos" class="container px-4 py-16 mx-auto">
            {section_heading(t!(i18n, photos_title), t!(i18n, photos_subtitle))}
            <div class="grid grid-cols-2 gap-4 md:grid-cols-3">
                {MEDIA.iter().map(|item| {
                    let title = item.title;
                    let video = item.is_video();
                    view! {
                        <A href="/gallery" attr:class="relative block overflow-hidden shadow rounded-xl group">
                            <img src=item.src alt=item.title.en class="object-cover w-full h-48 transition-transform duration-300 group-hover:scale-105" />
                            <Show when=move || video>
                                <div class="absolute inset-0 flex items-center justify-center text-white bg-black/30">{play_icon()}</div>
                            </Show>
                            <div class="absolute inset-x-0 bottom-0 p-2 text-sm text-white bg-black/50">{move || title.get(lang.get())}</div>
                        </A>
                    }
                }).collect_view()}
            </div>
            <div class="flex justify-center mt-8">
                <A href="/gallery" attr:class="btn btn-accent">{t!(i18n, view_gallery)}</A>
            </div>
        </section>
    }
}

#[component]
fn Contact() -> impl IntoView {
    let i18n = use_i18n();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let (invalid, set_invalid) = signal(false);
    let (sent, set_sent) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        if !form.missing_fields().is_empty() {
            set_invalid.set(true);
            return;
        }
        leptos::logging::log!("Contact message from {}", form.name);
        set_invalid.set(false);
        set_sent.set(true);
        name.set(String::new());
        email.set(String::new());
        message.set(String::new());
    };

    view! {
        <section id="contact" class="py-16 bg-gray-50">
            <div class="container max-w-2xl px-4 mx-auto">
                {section_heading(t!(i18n, contact_title), t!(i18n, contact_subtitle))}
                <p class="flex items-center justify-center gap-2 mb-6 text-gray-700">{location_icon()}{t!(i18n, contact_address)}</p>
                <Show when=move || sent.get()>
                    <div class="mb-4 alert alert-success"><span>{t!(i18n, contact_sent)}</span></div>
                </Show>
                <Show when=move || invalid.get()>
                    <div class="mb-4 alert alert-warning"><span>{t!(i18n, form_required)}</span></div>
                </Show>
                <form class="space-y-3" on:submit=on_submit>
                    <input type="text" class="w-full input input-bordered" bind:value=name placeholder=move || t_string!(i18n, form_name) />
                    <input type="email" class="w-full input input-bordered" bind:value=email placeholder=move || t_string!(i18n, form_email) />
                    <textarea class="w-full textarea textarea-bordered" rows="4" bind:value=message placeholder=move || t_string!(i18n, form_message)></textarea>
                    <button type="submit" class="w-full btn btn-accent">{t!(i18n, contact_send)}</button>
                </form>
            </div>
        </section>
    }
}

/// Single scrolling page; header links jump to the section ids.
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <HeroCarousel />
        <About />
        <Programs />
        <Impact />
        <Photos />
        <Contact />
    }
}
