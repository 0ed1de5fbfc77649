// tests/site_content_tests.rs - Logic tests for the static site content
//
// Walks through the carousel and gallery interactions the landing page
// offers, using the same pure helpers the components call.

use little_scholars::web_app::content::*;

#[test]
fn hero_auto_advance_cycles_through_every_slide() {
    let len = HERO_SLIDES.len();
    let mut index = 0;
    let mut seen = vec![index];
    // One interval tick per slide brings us back to the start.
    for _ in 0..len {
        index = advance(index, len);
        seen.push(index);
    }
    assert_eq!(index, 0);
    for slide in 0..len {
        assert!(seen.contains(&slide), "slide {} never shown", slide);
    }
}

#[test]
fn manual_navigation_is_inverse_of_auto_advance() {
    let len = EVENT_VIDEOS.len();
    for start in 0..len {
        assert_eq!(retreat(advance(start, len), len), start);
        assert_eq!(advance(retreat(start, len), len), start);
    }
}

#[test]
fn dot_jump_targets_are_valid_indices() {
    // Dots map 1:1 onto slides; any dot index is a valid state to
    // advance from.
    let len = HERO_SLIDES.len();
    for dot in 0..len {
        assert!(advance(dot, len) < len);
        assert!(retreat(dot, len) < len);
    }
}

#[test]
fn gallery_filter_partitions_the_catalog() {
    let mut total = 0;
    for category in GalleryCategory::ALL {
        let subset = filtered_images(Some(category));
        assert!(!subset.is_empty());
        assert!(subset.iter().all(|img| img.category == category));
        total += subset.len();
    }
    assert_eq!(total, GALLERY_IMAGES.len());
}

#[test]
fn lightbox_navigation_stays_inside_the_sports_filter() {
    // Filter to sports, open the last sports image, press "next":
    // the viewer wraps to the first sports image, not to the first
    // image of the whole catalog.
    let sports = filtered_images(Some(GalleryCategory::Sports));
    let opened = sports.last().unwrap().id;

    let next = neighbor_image(&sports, opened, NavDirection::Next).unwrap();
    assert_eq!(next, sports.first().unwrap().id);
    assert_ne!(next, GALLERY_IMAGES[0].id);

    // And walking forward `len` times returns to the opened image.
    let mut current = opened;
    for _ in 0..sports.len() {
        current = neighbor_image(&sports, current, NavDirection::Next).unwrap();
    }
    assert_eq!(current, opened);
}

#[test]
fn lightbox_handles_the_unfiltered_catalog_too() {
    let all = filtered_images(None);
    let first = all.first().unwrap().id;
    assert_eq!(
        neighbor_image(&all, first, NavDirection::Prev),
        Some(all.last().unwrap().id)
    );
}

#[test]
fn catalog_ids_are_unique() {
    let mut ids: Vec<u32> = GALLERY_IMAGES.iter().map(|img| img.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), GALLERY_IMAGES.len());
}

#[test]
fn testimonials_and_events_are_nonempty() {
    assert!(!TESTIMONIALS.is_empty());
    assert!(!EVENT_VIDEOS.is_empty());
    assert!(TESTIMONIALS.iter().all(|t| !t.quote.is_empty()));
}
