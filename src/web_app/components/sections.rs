// web_app/components/sections.rs - Landing page sections
//
// Header, hero carousel, about, events carousel, testimonials,
// contact/map, footer and the floating action buttons. All content
// comes from `content`; the carousels only own their current index.

use crate::web_app::components::enquiry::EnquiryForm;
use crate::web_app::content::{
    advance, retreat, EVENT_VIDEOS, HERO_INTERVAL_SECS, HERO_SLIDES, SCHOOL_ADDRESS, SCHOOL_EMAIL,
    SCHOOL_NAME, SCHOOL_PHONE, SCHOOL_TAGLINE, TESTIMONIALS, WHATSAPP_URL,
};
use leptos::leptos_dom::helpers::set_interval_with_handle;
use leptos::prelude::*;
use std::time::Duration;

/// Site header with in-page navigation and a mobile menu toggle.
#[component]
pub fn Header() -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let links = [
        ("#about", "About"),
        ("#events", "Events"),
        ("#gallery", "Gallery"),
        ("#testimonials", "Testimonials"),
        ("#contact", "Contact"),
    ];

    view! {
        <header class="fixed top-0 inset-x-0 z-40 bg-white/95 backdrop-blur shadow-sm">
            <div class="max-w-6xl mx-auto px-4 py-3 flex items-center justify-between">
                <a href="/" class="flex items-center gap-2">
                    <span class="text-2xl">"🎓"</span>
                    <div>
                        <div class="font-bold text-gray-900">{SCHOOL_NAME}</div>
                        <div class="text-xs text-gray-500">{SCHOOL_TAGLINE}</div>
                    </div>
                </a>

                <nav class="hidden md:flex items-center gap-6">
                    {links.iter().map(|(href, label)| view! {
                        <a href=*href class="text-gray-600 hover:text-blue-600 font-medium">{*label}</a>
                    }).collect_view()}
                    <a href="/login" class="text-sm text-gray-400 hover:text-blue-600">"Admin"</a>
                </nav>

                <button
                    class="md:hidden text-gray-600 text-2xl"
                    title="Menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="md:hidden border-t border-gray-100 bg-white px-4 py-3 flex flex-col gap-3">
                    {links.iter().map(|(href, label)| view! {
                        <a
                            href=*href
                            class="text-gray-600 hover:text-blue-600 font-medium"
                            on:click=move |_| menu_open.set(false)
                        >
                            {*label}
                        </a>
                    }).collect_view()}
                    <a href="/login" class="text-sm text-gray-400">"Admin"</a>
                </nav>
            </Show>
        </header>
    }
}

/// Hero carousel: auto-advances every 5 s, wraps, manual arrows and
/// dot navigation. The interval is cleared on unmount.
#[component]
pub fn HeroCarousel(on_enquire: Callback<()>) -> impl IntoView {
    let current = RwSignal::new(0usize);
    let len = HERO_SLIDES.len();

    Effect::new(move |_| {
        let handle = set_interval_with_handle(
            move || current.update(|i| *i = advance(*i, len)),
            Duration::from_secs(HERO_INTERVAL_SECS),
        );
        if let Ok(handle) = handle {
            on_cleanup(move || handle.clear());
        }
    });

    view! {
        <section class="relative h-[70vh] min-h-[420px] overflow-hidden">
            {HERO_SLIDES.iter().enumerate().map(|(idx, slide)| {
                let backdrop = slide.backdrop;
                view! {
                    <div
                        class=move || format!(
                            "absolute inset-0 flex items-center justify-center text-center {} {}",
                            backdrop,
                            if current.get() == idx { "opacity-100" } else { "opacity-0" },
                        )
                        style="transition: opacity 0.7s"
                    >
                        <div class="text-white px-6">
                            <h1 class="text-4xl md:text-6xl font-bold mb-4">{slide.title}</h1>
                            <p class="text-xl md:text-2xl mb-8 opacity-90">{slide.subtitle}</p>
                            <button
                                class="bg-yellow-400 text-gray-900 font-bold px-8 py-3 rounded-full hover:bg-yellow-300 transition-colors"
                                on:click=move |_| on_enquire.run(())
                            >
                                "Enquire Now"
                            </button>
                        </div>
                    </div>
                }
            }).collect_view()}

            <button
                class="absolute left-4 top-1/2 -translate-y-1/2 text-white text-3xl bg-black/30 rounded-full w-12 h-12 hover:bg-black/50"
                title="Previous slide"
                on:click=move |_| current.update(|i| *i = retreat(*i, len))
            >
                "‹"
            </button>
            <button
                class="absolute right-4 top-1/2 -translate-y-1/2 text-white text-3xl bg-black/30 rounded-full w-12 h-12 hover:bg-black/50"
                title="Next slide"
                on:click=move |_| current.update(|i| *i = advance(*i, len))
            >
                "›"
            </button>

            <div class="absolute bottom-6 inset-x-0 flex justify-center gap-2">
                {(0..len).map(|idx| view! {
                    <button
                        class=move || if current.get() == idx {
                            "w-3 h-3 rounded-full transition-colors bg-white"
                        } else {
                            "w-3 h-3 rounded-full transition-colors bg-white/40"
                        }
                        title=format!("Slide {}", idx + 1)
                        on:click=move |_| current.set(idx)
                    ></button>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    let highlights = [
        ("🎨", "Creative Learning", "Art, music and hands-on activities every day"),
        ("👩‍🏫", "Caring Teachers", "Experienced educators with small class sizes"),
        ("🏫", "Safe Campus", "Child-proofed classrooms and secure entry"),
        ("🌱", "Holistic Growth", "Social, emotional and cognitive development"),
    ];

    view! {
        <section id="about" class="py-16 bg-white">
            <div class="max-w-6xl mx-auto px-4">
                <h2 class="text-3xl font-bold text-center text-gray-900 mb-4">
                    "About " {SCHOOL_NAME}
                </h2>
                <p class="text-center text-gray-600 max-w-2xl mx-auto mb-12">
                    "A nurturing preschool where every child discovers the joy of
                     learning through play, creativity and care."
                </p>
                <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                    {highlights.iter().map(|(emoji, title, text)| view! {
                        <div class="text-center p-6 rounded-2xl bg-gray-50 hover:shadow-md transition-shadow">
                            <div class="text-4xl mb-3">{*emoji}</div>
                            <h3 class="font-bold text-gray-900 mb-2">{*title}</h3>
                            <p class="text-sm text-gray-600">{*text}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Events carousel: manual navigation only, wraps at both ends.
#[component]
pub fn EventsCarousel() -> impl IntoView {
    let current = RwSignal::new(0usize);
    let len = EVENT_VIDEOS.len();

    view! {
        <section id="events" class="py-16 bg-blue-50">
            <div class="max-w-4xl mx-auto px-4">
                <h2 class="text-3xl font-bold text-center text-gray-900 mb-12">"School Events"</h2>
                <div class="relative">
                    <div class="bg-white rounded-2xl shadow-lg p-12 text-center">
                        <div class="text-7xl mb-6">
                            {move || EVENT_VIDEOS[current.get()].emoji}
                        </div>
                        <h3 class="text-2xl font-bold text-gray-900">
                            {move || EVENT_VIDEOS[current.get()].title}
                        </h3>
                        <p class="text-gray-400 mt-4 text-sm">
                            {move || format!("{} / {}", current.get() + 1, len)}
                        </p>
                    </div>
                    <button
                        class="absolute left-0 top-1/2 -translate-y-1/2 -translate-x-4 bg-white shadow rounded-full w-12 h-12 text-2xl text-gray-600 hover:text-blue-600"
                        title="Previous event"
                        on:click=move |_| current.update(|i| *i = retreat(*i, len))
                    >
                        "‹"
                    </button>
                    <button
                        class="absolute right-0 top-1/2 -translate-y-1/2 translate-x-4 bg-white shadow rounded-full w-12 h-12 text-2xl text-gray-600 hover:text-blue-600"
                        title="Next event"
                        on:click=move |_| current.update(|i| *i = advance(*i, len))
                    >
                        "›"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    view! {
        <section id="testimonials" class="py-16 bg-white">
            <div class="max-w-6xl mx-auto px-4">
                <h2 class="text-3xl font-bold text-center text-gray-900 mb-12">"What Parents Say"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    {TESTIMONIALS.iter().map(|t| view! {
                        <div class="bg-gray-50 rounded-2xl p-6">
                            <p class="text-gray-700 italic mb-4">"\u{201c}" {t.quote} "\u{201d}"</p>
                            <div class="font-bold text-gray-900">{t.parent_name}</div>
                            <div class="text-sm text-gray-500">
                                {format!("Parent of {} ({})", t.child_name, t.class)}
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Contact section: enquiry form next to the contact/map cards.
#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-16 bg-blue-50">
            <div class="max-w-6xl mx-auto px-4 grid grid-cols-1 lg:grid-cols-2 gap-10">
                <div class="bg-white rounded-2xl shadow-lg p-8">
                    <h2 class="text-2xl font-bold text-gray-900 mb-6">"Admission Enquiry"</h2>
                    <EnquiryForm/>
                </div>

                <div class="space-y-6">
                    <div class="bg-white rounded-2xl shadow p-6">
                        <h3 class="font-bold text-gray-900 mb-3">"Visit Us"</h3>
                        <p class="text-gray-600">{SCHOOL_ADDRESS}</p>
                        <div class="mt-4 h-48 rounded-xl bg-gray-200 flex items-center justify-center text-gray-500">
                            "🗺️ Map"
                        </div>
                    </div>
                    <div class="bg-white rounded-2xl shadow p-6">
                        <h3 class="font-bold text-gray-900 mb-3">"Get in Touch"</h3>
                        <p class="text-gray-600">"📞 " {SCHOOL_PHONE}</p>
                        <p class="text-gray-600">"✉️ " {SCHOOL_EMAIL}</p>
                    </div>
                    <div class="bg-white rounded-2xl shadow p-6">
                        <h3 class="font-bold text-gray-900 mb-3">"School Hours"</h3>
                        <p class="text-gray-600">"Monday to Friday: 9:00 AM - 1:00 PM"</p>
                        <p class="text-gray-600">"Office: 9:00 AM - 5:00 PM"</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-gray-300 py-12">
            <div class="max-w-6xl mx-auto px-4 grid grid-cols-1 md:grid-cols-3 gap-8">
                <div>
                    <div class="text-xl font-bold text-white mb-2">{SCHOOL_NAME}</div>
                    <p class="text-sm">{SCHOOL_TAGLINE}</p>
                    <p class="text-sm mt-2">{SCHOOL_ADDRESS}</p>
                </div>
                <div>
                    <h4 class="font-bold text-white mb-3">"Quick Links"</h4>
                    <ul class="space-y-1 text-sm">
                        <li><a href="#about" class="hover:text-white">"About"</a></li>
                        <li><a href="#gallery" class="hover:text-white">"Gallery"</a></li>
                        <li><a href="#contact" class="hover:text-white">"Contact"</a></li>
                    </ul>
                </div>
                <div>
                    <h4 class="font-bold text-white mb-3">"Follow Us"</h4>
                    <div class="flex gap-4 text-2xl">
                        <a href="#" title="Facebook">"📘"</a>
                        <a href="#" title="Instagram">"📸"</a>
                        <a href="#" title="YouTube">"▶️"</a>
                    </div>
                </div>
            </div>
            <div class="text-center text-xs text-gray-500 mt-8">
                {format!("© 2025 {}. All rights reserved.", SCHOOL_NAME)}
            </div>
        </footer>
    }
}

/// Floating WhatsApp link and enquiry-modal trigger, always visible.
#[component]
pub fn FloatingButtons(on_enquire: Callback<()>) -> impl IntoView {
    view! {
        <div class="fixed bottom-6 right-6 z-40 flex flex-col gap-3">
            <a
                href=WHATSAPP_URL
                target="_blank"
                rel="noopener"
                title="Chat on WhatsApp"
                class="bg-green-500 hover:bg-green-600 text-white rounded-full w-14 h-14 flex items-center justify-center text-2xl shadow-lg"
            >
                "💬"
            </a>
            <button
                title="Admission enquiry"
                class="bg-blue-600 hover:bg-blue-700 text-white rounded-full w-14 h-14 flex items-center justify-center text-2xl shadow-lg"
                on:click=move |_| on_enquire.run(())
            >
                "📝"
            </button>
        </div>
    }
}
