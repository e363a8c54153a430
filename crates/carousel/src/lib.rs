//! Readshelf Carousel
//!
//! Responsive, wrap-around pagination for book lists. The viewport width
//! picks a page size; navigation moves by whole pages or by a fixed step.

pub mod engine;
pub mod viewport;

pub use engine::{Carousel, CarouselState, Navigation};
pub use viewport::{PageSizePolicy, ViewportClass, ViewportClassifier};
