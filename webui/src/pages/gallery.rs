use leptos::prelude::*;
use crate::app_state::use_lang;
use crate::i18n::{use_i18n, t, t_string};
use crate::icons::{chevron_left_icon, chevron_right_icon, close_icon, play_icon};
use webdata::site::content::{Category, MediaKind};
use webdata::site::gallery::{filtered, GalleryFilter, Lightbox};
use webdata::site::i18n::localize_digits;

#[component]
pub fn GalleryView() -> impl IntoView {
    let i18n = use_i18n();
    let lang = use_lang();
    let filter = RwSignal::new(GalleryFilter::All);
    let lightbox = RwSignal::new(Lightbox::default());
    let items = Memo::new(move |_| filtered(filter.get()));

    let select = move |next: GalleryFilter| {
        filter.set(next);
        lightbox.update(|lb| lb.close());
    };
    let len = move || items.with(|i| i.len());

    let filter_button = move |target: GalleryFilter, label: AnyView| view! {
        <button
            class=move || if filter.get() == target { "btn btn-sm btn-accent" } else { "btn btn-sm btn-outline" }
            on:click=move |_| select(target)>
            {label}
        </button>
    };

    view! {
        <div class="container p-4 mx-auto">
            <div class="mb-8 text-center">
                <h2 class="pb-2 mx-auto mb-3 text-4xl font-bold text-gray-800 border-b-4 border-yellow-500 w-fit">{t!(i18n, gallery_title)}</h2>
                <p class="text-gray-600">{t!(i18n, gallery_subtitle)}</p>
            </div>

            <div class="flex flex-wrap justify-center gap-2 mb-8">
                {filter_button(GalleryFilter::All, view! { {t!(i18n, filter_all)} }.into_any())}
                {Category::ALL.into_iter().map(|c| {
                    let label = c.label();
                    filter_button(GalleryFilter::Only(c), view! { {move || label.get(lang.get())} }.into_any())
                }).collect_view()}
            </div>

            <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3">
                {move || items.get().into_iter().enumerate().map(|(index, item)| {
                    let title = item.title;
                    let description = item.description;
                    let video = item.is_video();
                    view! {
                        <div class="overflow-hidden shadow-xl cursor-pointer card bg-base-100 group"
                            on:click=move |_| lightbox.update(|lb| lb.open(index, len()))>
                            <figure class="relative">
                                <img src=item.src alt=item.title.en class="object-cover w-full h-56 transition-transform duration-300 group-hover:scale-105" />
                                <Show when=move || video>
                                    <div class="absolute inset-0 flex items-center justify-center text-white bg-black/30">{play_icon()}</div>
                                </Show>
                            </figure>
                            <div class="card-body">
                                <h3 class="card-title">{move || title.get(lang.get())}</h3>
                                <p class="text-sm text-gray-600">{move || description.get(lang.get())}</p>
                                <p class="text-xs text-gray-400">{move || localize_digits(item.date, lang.get())}</p>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>

            {move || {
                let current = items.with(|list| lightbox.get().current(list));
                current.map(|item| {
                    let title = item.title;
                    let media = match item.kind {
                        MediaKind::Video { embed_url } => view! {
                            <iframe class="w-full aspect-video" src=embed_url title=item.title.en allowfullscreen=true></iframe>
                        }.into_any(),
                        MediaKind::Photo => view! {
                            <img src=item.src alt=item.title.en class="object-contain w-full max-h-[75vh]" />
                        }.into_any(),
                    };
                    view! {
                        <div class="fixed inset-0 z-[100] flex items-center justify-center p-4 bg-black/90"
                            on:click=move |_| lightbox.update(|lb| lb.close())>
                            <button class="absolute text-white btn btn-circle btn-ghost right-4 top-4" aria-label="close">
                                {close_icon()}
                            </button>
                            <button class="absolute text-white btn btn-circle btn-ghost left-4" aria-label=move || t_string!(i18n, previous)
                                on:click=move |ev| { ev.stop_propagation(); lightbox.update(|lb| lb.prev(len())); }>
                                {chevron_left_icon()}
                            </button>
                            <div class="w-full max-w-4xl" on:click=|ev| ev.stop_propagation()>
                                {media}
                                <p class="mt-3 text-center text-white">{move || title.get(lang.get())}</p>
                            </div>
                            <button class="absolute text-white btn btn-circle btn-ghost right-4" aria-label=move || t_string!(i18n, next)
                                on:click=move |ev| { ev.stop_propagation(); lightbox.update(|lb| lb.next(len())); }>
                                {chevron_right_icon()}
                            </button>
                        </div>
                    }
                })
            }}
        </div>
    }
}
