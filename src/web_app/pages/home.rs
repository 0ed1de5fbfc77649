// web_app/pages/home.rs - Public landing page
//
// Composes the marketing sections. The only page-level state is
// whether the enquiry modal is open; both the hero CTA and the
// floating button open it.

use crate::web_app::components::enquiry::EnquiryModal;
use crate::web_app::components::gallery::PhotoGallery;
use crate::web_app::components::sections::{
    AboutSection, ContactSection, EventsCarousel, FloatingButtons, Footer, Header, HeroCarousel,
    TestimonialsSection,
};
use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn HomePage() -> impl IntoView {
    let modal_open = RwSignal::new(false);
    let open_modal = Callback::new(move |_: ()| modal_open.set(true));

    view! {
        <Title text="Little Scholars - Preschool in Navi Mumbai"/>
        <Header/>
        <main class="pt-16">
            <HeroCarousel on_enquire=open_modal/>
            <AboutSection/>
            <EventsCarousel/>
            <PhotoGallery/>
            <TestimonialsSection/>
            <ContactSection/>
        </main>
        <Footer/>
        <FloatingButtons on_enquire=open_modal/>
        <EnquiryModal open=modal_open/>
    }
}
