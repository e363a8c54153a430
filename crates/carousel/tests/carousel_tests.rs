//! Integration tests for carousel pagination

use readshelf_carousel::{Carousel, Navigation, PageSizePolicy, ViewportClass};
use readshelf_config::{CarouselConfig, NavigationKind};

fn titles(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Book {}", i)).collect()
}

#[test]
fn test_page_count_and_last_page() {
    let mut carousel = Carousel::from_config(titles(23), &CarouselConfig::default(), 1200);

    assert_eq!(carousel.class(), ViewportClass::Large);
    assert_eq!(carousel.page_size(), 10);
    assert_eq!(carousel.total_pages(), 3);

    carousel.go_to_page(2);
    assert_eq!(carousel.current_window().len(), 3);
    assert_eq!(carousel.current_window()[0], "Book 21");
}

#[test]
fn test_next_cycles_back_to_start() {
    for n in [1usize, 2, 9, 10, 11, 23, 40] {
        for width in [300u32, 800, 1300] {
            let mut carousel = Carousel::from_config(titles(n), &CarouselConfig::default(), width);
            carousel.go_to_page(1);
            let start = carousel.current_page();

            for _ in 0..carousel.total_pages() {
                carousel.next();
            }
            assert_eq!(carousel.current_page(), start, "n={} width={}", n, width);

            for _ in 0..carousel.total_pages() {
                carousel.prev();
            }
            assert_eq!(carousel.current_page(), start, "n={} width={}", n, width);
        }
    }
}

#[test]
fn test_windows_cover_every_item_once() {
    let items = titles(23);
    let mut carousel = Carousel::from_config(items.clone(), &CarouselConfig::default(), 700);

    let mut seen = Vec::new();
    for _ in 0..carousel.total_pages() {
        seen.extend(carousel.current_window().iter().cloned());
        carousel.next();
    }
    assert_eq!(seen, items);
}

#[test]
fn test_resize_shrinks_page_and_clamps() {
    let mut carousel = Carousel::from_config(titles(23), &CarouselConfig::default(), 1200);
    assert_eq!(carousel.total_pages(), 3);
    carousel.go_to_page(2);

    carousel.resize(500);
    assert_eq!(carousel.class(), ViewportClass::Small);
    assert_eq!(carousel.page_size(), 2);
    assert_eq!(carousel.total_pages(), 12);
    assert_eq!(carousel.current_page(), 2);

    carousel.go_to_page(50);
    assert_eq!(carousel.current_page(), 11);
    assert_eq!(carousel.current_window(), &["Book 23".to_string()]);

    carousel.resize(1200);
    assert_eq!(carousel.total_pages(), 3);
    assert_eq!(carousel.current_page(), 2);
}

#[test]
fn test_position_clamped_when_items_shrink() {
    let mut carousel = Carousel::from_config(titles(40), &CarouselConfig::default(), 1200);
    carousel.go_to_page(3);

    carousel.set_items(titles(15));
    assert_eq!(carousel.total_pages(), 2);
    assert_eq!(carousel.current_page(), 1);

    carousel.set_items(Vec::new());
    assert_eq!(carousel.total_pages(), 0);
    assert_eq!(carousel.current_page(), 0);
    assert!(carousel.current_window().is_empty());
}

#[test]
fn test_custom_breakpoints_from_config() {
    let config = CarouselConfig {
        medium_min_width: 500,
        large_min_width: 900,
        small_page_size: 1,
        medium_page_size: 3,
        large_page_size: 6,
        ..CarouselConfig::default()
    };
    let carousel = Carousel::from_config(titles(7), &config, 600);
    assert_eq!(carousel.class(), ViewportClass::Medium);
    assert_eq!(carousel.total_pages(), 3);
}

#[test]
fn test_stepped_mode_from_config() {
    let config = CarouselConfig {
        navigation: NavigationKind::Stepped,
        step: 2,
        ..CarouselConfig::default()
    };
    let mut carousel = Carousel::from_config(titles(5), &config, 300);
    assert_eq!(carousel.navigation(), Navigation::Stepped { step: 2 });

    for _ in 0..5 {
        carousel.next();
    }
    // 5 steps of 2 over 5 items lands back at the start
    assert_eq!(carousel.start(), 0);
    assert_eq!(
        carousel.window(),
        vec![&"Book 1".to_string(), &"Book 2".to_string()]
    );
}

#[test]
fn test_state_snapshot() {
    let carousel = Carousel::new(
        titles(9),
        PageSizePolicy::default(),
        Navigation::Paged,
        640,
    );
    let state = carousel.state();
    assert_eq!(state.class, ViewportClass::Medium);
    assert_eq!(state.page_size, 4);
    assert_eq!(state.total_pages, 3);
    assert_eq!(state.current_page, 0);
    assert_eq!(state.len, 9);
}
