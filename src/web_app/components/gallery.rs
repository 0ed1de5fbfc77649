// web_app/components/gallery.rs - Photo gallery with category filter
//
// The lightbox navigates within the currently filtered subset, so
// "next" from the last sports photo wraps to the first sports photo.

use crate::web_app::content::{
    filtered_images, neighbor_image, GalleryCategory, NavDirection, GALLERY_IMAGES,
};
use leptos::prelude::*;

#[component]
pub fn PhotoGallery() -> impl IntoView {
    let filter = RwSignal::new(None::<GalleryCategory>);
    let selected = RwSignal::new(None::<u32>);

    let navigate = move |direction: NavDirection| {
        if let Some(id) = selected.get_untracked() {
            let visible = filtered_images(filter.get_untracked());
            if let Some(next) = neighbor_image(&visible, id, direction) {
                selected.set(Some(next));
            }
        }
    };

    let filter_button = move |value: Option<GalleryCategory>, label: &'static str| {
        view! {
            <button
                class=move || if filter.get() == value {
                    "px-4 py-2 rounded-full font-medium bg-blue-600 text-white"
                } else {
                    "px-4 py-2 rounded-full font-medium bg-gray-100 text-gray-600 hover:bg-gray-200"
                }
                on:click=move |_| filter.set(value)
            >
                {label}
            </button>
        }
    };

    view! {
        <section id="gallery" class="py-16 bg-white">
            <div class="max-w-6xl mx-auto px-4">
                <h2 class="text-3xl font-bold text-center text-gray-900 mb-8">"Photo Gallery"</h2>

                <div class="flex flex-wrap justify-center gap-3 mb-10">
                    {filter_button(None, "All")}
                    {GalleryCategory::ALL
                        .iter()
                        .map(|c| filter_button(Some(*c), c.label()))
                        .collect_view()}
                </div>

                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    {move || {
                        filtered_images(filter.get()).into_iter().map(|img| {
                            let id = img.id;
                            view! {
                                <button
                                    class="aspect-square rounded-2xl bg-gradient-to-br from-blue-100 to-purple-100 flex flex-col items-center justify-center hover:scale-105 transition-transform"
                                    on:click=move |_| selected.set(Some(id))
                                >
                                    <span class="text-5xl mb-2">{img.emoji}</span>
                                    <span class="text-sm text-gray-600 px-2 text-center">{img.caption}</span>
                                </button>
                            }
                        }).collect_view()
                    }}
                </div>
            </div>

            // Lightbox
            {move || selected.get().and_then(|id| {
                let image = GALLERY_IMAGES.iter().find(|img| img.id == id)?;
                Some(view! {
                    <div class="fixed inset-0 z-50 flex items-center justify-center">
                        <div
                            class="absolute inset-0 bg-gray-900/80"
                            on:click=move |_| selected.set(None)
                        ></div>
                        <div
                            class="relative bg-white rounded-2xl p-10 text-center max-w-lg w-full mx-4"
                            on:click=|ev| ev.stop_propagation()
                        >
                            <div class="text-8xl mb-4">{image.emoji}</div>
                            <div class="text-xl font-bold text-gray-900">{image.caption}</div>
                            <div class="text-sm text-gray-500 mt-1">{image.category.label()}</div>
                            <button
                                class="absolute top-3 right-3 text-gray-400 hover:text-gray-600 text-xl"
                                title="Close"
                                on:click=move |_| selected.set(None)
                            >
                                "✕"
                            </button>
                            <button
                                class="absolute left-3 top-1/2 -translate-y-1/2 text-3xl text-gray-400 hover:text-gray-700"
                                title="Previous photo"
                                on:click=move |_| navigate(NavDirection::Prev)
                            >
                                "‹"
                            </button>
                            <button
                                class="absolute right-3 top-1/2 -translate-y-1/2 text-3xl text-gray-400 hover:text-gray-700"
                                title="Next photo"
                                on:click=move |_| navigate(NavDirection::Next)
                            >
                                "›"
                            </button>
                        </div>
                    </div>
                })
            })}
        </section>
    }
}
