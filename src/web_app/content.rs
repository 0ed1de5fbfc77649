// web_app/content.rs - Static site content and selection helpers
//
// Every carousel, filter and lightbox on the public site is an
// independent, restartable finite selection over one of these
// catalogs. The helpers here are pure so the wrap-around semantics
// can be unit tested without a DOM.

/// Seconds between automatic hero slide advances.
pub const HERO_INTERVAL_SECS: u64 = 5;
/// How long the standalone form shows its success message.
pub const STANDALONE_SUCCESS_SECS: u64 = 5;
/// How long the modal stays open after a successful submit.
pub const MODAL_CLOSE_SECS: u64 = 2;

/// Hero carousel slide.
pub struct HeroSlide {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Tailwind gradient classes for the slide backdrop.
    pub backdrop: &'static str,
}

pub const HERO_SLIDES: [HeroSlide; 3] = [
    HeroSlide {
        title: "Creative Learning Environment",
        subtitle: "Where imagination meets education",
        backdrop: "bg-gradient-to-r from-blue-900 to-purple-800",
    },
    HeroSlide {
        title: "Play-Based Learning",
        subtitle: "Learning through fun and exploration",
        backdrop: "bg-gradient-to-r from-purple-900 to-pink-800",
    },
    HeroSlide {
        title: "Nurturing Growth",
        subtitle: "Building confident young minds",
        backdrop: "bg-gradient-to-r from-indigo-900 to-blue-800",
    },
];

/// Event video card in the events carousel.
pub struct EventVideo {
    pub title: &'static str,
    pub emoji: &'static str,
}

pub const EVENT_VIDEOS: [EventVideo; 4] = [
    EventVideo { title: "Annual Day Celebration 2024", emoji: "🎭" },
    EventVideo { title: "Sports Day Highlights", emoji: "🏅" },
    EventVideo { title: "Art & Craft Workshop", emoji: "🎨" },
    EventVideo { title: "Science Exhibition", emoji: "🔬" },
];

pub struct Testimonial {
    pub parent_name: &'static str,
    pub child_name: &'static str,
    pub class: &'static str,
    pub quote: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        parent_name: "Priya Sharma",
        child_name: "Aarav",
        class: "UKG",
        quote: "Little Scholars has been amazing for Aarav's development. \
                The teachers are so caring and the activities are perfectly \
                designed for young minds.",
    },
    Testimonial {
        parent_name: "Rajesh Kumar",
        child_name: "Ananya",
        class: "LKG",
        quote: "The creative approach to learning has made Ananya excited \
                about going to school every day. Highly recommended!",
    },
    Testimonial {
        parent_name: "Sneha Patel",
        child_name: "Arjun",
        class: "Nursery",
        quote: "Excellent infrastructure and wonderful teachers. Arjun has \
                grown so much in confidence since joining.",
    },
    Testimonial {
        parent_name: "Amit Joshi",
        child_name: "Kavya",
        class: "UKG",
        quote: "The holistic development approach and individual attention \
                given to each child makes Little Scholars stand out.",
    },
];

/// Photo gallery categories, a fixed closed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryCategory {
    Events,
    Classrooms,
    Sports,
    Celebrations,
}

impl GalleryCategory {
    pub const ALL: [GalleryCategory; 4] = [
        GalleryCategory::Events,
        GalleryCategory::Classrooms,
        GalleryCategory::Sports,
        GalleryCategory::Celebrations,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GalleryCategory::Events => "Events",
            GalleryCategory::Classrooms => "Classrooms",
            GalleryCategory::Sports => "Sports",
            GalleryCategory::Celebrations => "Celebrations",
        }
    }
}

pub struct GalleryImage {
    pub id: u32,
    pub caption: &'static str,
    pub emoji: &'static str,
    pub category: GalleryCategory,
}

pub const GALLERY_IMAGES: [GalleryImage; 12] = [
    GalleryImage { id: 1, caption: "Annual Day Performance", emoji: "🎭", category: GalleryCategory::Events },
    GalleryImage { id: 2, caption: "Colorful Classroom", emoji: "🖍️", category: GalleryCategory::Classrooms },
    GalleryImage { id: 3, caption: "Sports Day Activities", emoji: "🏃", category: GalleryCategory::Sports },
    GalleryImage { id: 4, caption: "Birthday Celebration", emoji: "🎂", category: GalleryCategory::Celebrations },
    GalleryImage { id: 5, caption: "Science Exhibition", emoji: "🔭", category: GalleryCategory::Events },
    GalleryImage { id: 6, caption: "Art Corner", emoji: "🎨", category: GalleryCategory::Classrooms },
    GalleryImage { id: 7, caption: "Playground Fun", emoji: "🛝", category: GalleryCategory::Sports },
    GalleryImage { id: 8, caption: "Festival Celebration", emoji: "🪔", category: GalleryCategory::Celebrations },
    GalleryImage { id: 9, caption: "Parent-Teacher Meeting", emoji: "🧑‍🏫", category: GalleryCategory::Events },
    GalleryImage { id: 10, caption: "Reading Corner", emoji: "📚", category: GalleryCategory::Classrooms },
    GalleryImage { id: 11, caption: "Yoga Session", emoji: "🧘", category: GalleryCategory::Sports },
    GalleryImage { id: 12, caption: "Graduation Day", emoji: "🎓", category: GalleryCategory::Celebrations },
];

/// Images visible under a filter; `None` means "all".
pub fn filtered_images(filter: Option<GalleryCategory>) -> Vec<&'static GalleryImage> {
    GALLERY_IMAGES
        .iter()
        .filter(|img| filter.map(|c| img.category == c).unwrap_or(true))
        .collect()
}

/// Next slide index, wrapping at the end.
pub fn advance(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index + 1) % len
}

/// Previous slide index, wrapping at the start.
pub fn retreat(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index + len - 1) % len
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavDirection {
    Prev,
    Next,
}

/// Id of the neighboring image within the currently filtered subset,
/// wrapping at both ends. Returns `None` if the selected image is not
/// part of the subset.
pub fn neighbor_image(
    filtered: &[&'static GalleryImage],
    selected_id: u32,
    direction: NavDirection,
) -> Option<u32> {
    let current = filtered.iter().position(|img| img.id == selected_id)?;
    let next = match direction {
        NavDirection::Next => advance(current, filtered.len()),
        NavDirection::Prev => retreat(current, filtered.len()),
    };
    Some(filtered[next].id)
}

/// External chat link opened by the floating WhatsApp button.
pub const WHATSAPP_URL: &str = "https://wa.me/919876543210";

pub const SCHOOL_NAME: &str = "Little Scholars";
pub const SCHOOL_TAGLINE: &str = "Preschool, Navi Mumbai";
pub const SCHOOL_PHONE: &str = "+91 98765 43210";
pub const SCHOOL_EMAIL: &str = "info@littlescholars.com";
pub const SCHOOL_ADDRESS: &str = "123 Education Street, Vashi, Navi Mumbai - 400703";
