use leptos::prelude::*;
use crate::app_state::{open_overlay, use_app_state, use_lang, Overlay};
use crate::i18n::{use_i18n, t};
use crate::icons::{chevron_left_icon, chevron_right_icon};
use webdata::site::carousel::{Carousel, HERO_ADVANCE};
use webdata::site::content::HERO_SLIDES;
use webdata::site::routes::section_href;

/// Full-width slideshow. Auto-advances on a fixed timer; arrows and dots
/// jump without touching the timer.
#[component]
pub fn HeroCarousel() -> impl IntoView {
    let i18n = use_i18n();
    let state = use_app_state();
    let lang = use_lang();
    let carousel = RwSignal::new(Carousel::new(HERO_SLIDES.len()));

    let timer = set_interval_with_handle(move || carousel.update(|c| c.advance()), HERO_ADVANCE).ok();
    on_cleanup(move || {
        if let Some(handle) = timer {
            handle.clear();
        }
    });

    let current = move || carousel.with(|c| c.index());

    view! {
        <section id="home" class="relative h-[70vh] min-h-[420px] overflow-hidden">
            {HERO_SLIDES.iter().enumerate().map(|(i, slide)| {
                let title = slide.title;
                let description = slide.description;
                view! {
                    <div class="absolute inset-0 transition-opacity duration-1000"
                        class:opacity-100=move || current() == i
                        class:opacity-0=move || current() != i>
                        <img src=slide.src alt=slide.title.en class="object-cover w-full h-full" />
                        <div class="absolute inset-0 bg-gradient-to-t from-black/70 to-black/10"></div>
                        <div class="absolute inset-x-0 text-center text-white bottom-24">
                            <h2 class="mb-3 text-4xl font-bold md:text-6xl">{move || title.get(lang.get())}</h2>
                            <p class="text-lg md:text-2xl">{move || description.get(lang.get())}</p>
                        </div>
                    </div>
                }
            }).collect_view()}

            <div class="absolute inset-x-0 flex justify-center gap-3 bottom-10">
                <a href=section_href("about") class="btn btn-accent">{t!(i18n, learn_more)}</a>
                <button class="text-white border-white btn btn-outline" on:click=move |_| open_overlay(state, Overlay::Volunteer)>
                    {t!(i18n, volunteer_cta)}
                </button>
            </div>

            <button class="absolute text-white -translate-y-1/2 btn btn-circle btn-ghost left-4 top-1/2" aria-label="previous"
                on:click=move |_| carousel.update(|c| c.prev())>
                {chevron_left_icon()}
            </button>
            <button class="absolute text-white -translate-y-1/2 btn btn-circle btn-ghost right-4 top-1/2" aria-label="next"
                on:click=move |_| carousel.update(|c| c.next())>
                {chevron_right_icon()}
            </button>

            <div class="absolute inset-x-0 flex justify-center gap-2 bottom-3">
                {(0..HERO_SLIDES.len()).map(|i| view! {
                    <button
                        class=move || if current() == i { "w-3 h-3 rounded-full bg-white" } else { "w-3 h-3 rounded-full bg-white/50" }
                        aria-label=format!("slide {}", i + 1)
                        on:click=move |_| carousel.update(|c| c.go_to(i))></button>
                }).collect_view()}
            </div>
        </section>
    }
}
