//! Viewport classes and the page size used in each

use readshelf_config::CarouselConfig;
use serde::{Deserialize, Serialize};

/// Display width bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    Small,
    Medium,
    #[default]
    Large,
}

impl std::fmt::Display for ViewportClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewportClass::Small => write!(f, "small"),
            ViewportClass::Medium => write!(f, "medium"),
            ViewportClass::Large => write!(f, "large"),
        }
    }
}

/// Maps a display width to a viewport class
pub trait ViewportClassifier {
    fn classify(&self, width: u32) -> ViewportClass;
}

/// Breakpoints plus page size per class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizePolicy {
    medium_min_width: u32,
    large_min_width: u32,
    small: usize,
    medium: usize,
    large: usize,
}

impl Default for PageSizePolicy {
    fn default() -> Self {
        Self::from_config(&CarouselConfig::default())
    }
}

impl PageSizePolicy {
    /// Page sizes below one are raised to one
    pub fn new(
        medium_min_width: u32,
        large_min_width: u32,
        small: usize,
        medium: usize,
        large: usize,
    ) -> Self {
        Self {
            medium_min_width,
            large_min_width,
            small: small.max(1),
            medium: medium.max(1),
            large: large.max(1),
        }
    }

    pub fn from_config(config: &CarouselConfig) -> Self {
        Self::new(
            config.medium_min_width,
            config.large_min_width,
            config.small_page_size,
            config.medium_page_size,
            config.large_page_size,
        )
    }

    pub fn page_size(&self, class: ViewportClass) -> usize {
        match class {
            ViewportClass::Small => self.small,
            ViewportClass::Medium => self.medium,
            ViewportClass::Large => self.large,
        }
    }
}

impl ViewportClassifier for PageSizePolicy {
    fn classify(&self, width: u32) -> ViewportClass {
        if width >= self.large_min_width {
            ViewportClass::Large
        } else if width >= self.medium_min_width {
            ViewportClass::Medium
        } else {
            ViewportClass::Small
        }
    }
}
