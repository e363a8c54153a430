//! Carousel breakpoints and page sizes

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};

/// Largest page size accepted from a config file
const MAX_PAGE_SIZE: usize = 100;

/// How a carousel advances
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavigationKind {
    /// Whole pages at a time
    #[default]
    Paged,
    /// A fixed number of items at a time, wrapping per item
    Stepped,
}

impl std::fmt::Display for NavigationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NavigationKind::Paged => write!(f, "paged"),
            NavigationKind::Stepped => write!(f, "stepped"),
        }
    }
}

/// Viewport breakpoints and the page size used in each class
///
/// Widths below `medium_min_width` are small; widths at or above
/// `large_min_width` are large.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CarouselConfig {
    pub medium_min_width: u32,
    pub large_min_width: u32,
    pub small_page_size: usize,
    pub medium_page_size: usize,
    pub large_page_size: usize,
    pub navigation: NavigationKind,
    /// Items advanced per step in stepped navigation
    pub step: usize,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            medium_min_width: 640,
            large_min_width: 1024,
            small_page_size: 2,
            medium_page_size: 4,
            large_page_size: 10,
            navigation: NavigationKind::Paged,
            step: 5,
        }
    }
}

impl ConfigSection for CarouselConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Validator::for_section(self)
            .in_range("small_page_size", self.small_page_size, 1, MAX_PAGE_SIZE)
            .in_range("medium_page_size", self.medium_page_size, 1, MAX_PAGE_SIZE)
            .in_range("large_page_size", self.large_page_size, 1, MAX_PAGE_SIZE)
            .below(
                "medium_min_width",
                self.medium_min_width,
                "large_min_width",
                self.large_min_width,
            )
            .in_range("step", self.step, 1, MAX_PAGE_SIZE)
            .finish()
    }

    fn merge(&mut self, other: Self) {
        self.medium_min_width = other.medium_min_width;
        self.large_min_width = other.large_min_width;
        self.small_page_size = other.small_page_size;
        self.medium_page_size = other.medium_page_size;
        self.large_page_size = other.large_page_size;
        self.navigation = other.navigation;
        self.step = other.step;
    }

    fn section_name(&self) -> &'static str {
        "carousel"
    }
}
