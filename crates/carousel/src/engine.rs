//! Wrap-around pagination over an ordered collection

use crate::viewport::{PageSizePolicy, ViewportClass, ViewportClassifier};
use log::debug;
use readshelf_config::{CarouselConfig, NavigationKind};
use serde::{Deserialize, Serialize};

/// How `next`/`prev` move through the items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Navigation {
    /// Whole pages at a time
    Paged,
    /// `step` items at a time, each window starting at any item
    Stepped { step: usize },
}

impl Default for Navigation {
    fn default() -> Self {
        Self::Paged
    }
}

impl Navigation {
    pub fn from_config(config: &CarouselConfig) -> Self {
        match config.navigation {
            NavigationKind::Paged => Navigation::Paged,
            NavigationKind::Stepped => Navigation::Stepped {
                step: config.step.max(1),
            },
        }
    }
}

/// Snapshot of a carousel's position, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselState {
    pub class: ViewportClass,
    pub page_size: usize,
    pub total_pages: usize,
    pub current_page: usize,
    /// First visible item in stepped navigation
    pub start: usize,
    pub len: usize,
}

/// Paginated view over `items`
///
/// `current_page < total_pages` whenever `total_pages > 0`, and
/// `start < len` whenever `len > 0`.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    policy: PageSizePolicy,
    navigation: Navigation,
    class: ViewportClass,
    page_size: usize,
    total_pages: usize,
    current_page: usize,
    start: usize,
}

impl<T> Carousel<T> {
    pub fn new(items: Vec<T>, policy: PageSizePolicy, navigation: Navigation, width: u32) -> Self {
        let class = policy.classify(width);
        let mut carousel = Self {
            items: Vec::new(),
            policy,
            navigation,
            class,
            page_size: policy.page_size(class),
            total_pages: 0,
            current_page: 0,
            start: 0,
        };
        carousel.recompute(items, class);
        carousel
    }

    pub fn from_config(items: Vec<T>, config: &CarouselConfig, width: u32) -> Self {
        Self::new(
            items,
            PageSizePolicy::from_config(config),
            Navigation::from_config(config),
            width,
        )
    }

    /// Replaces the items and viewport class, then clamps the position
    pub fn recompute(&mut self, items: Vec<T>, class: ViewportClass) {
        self.items = items;
        self.class = class;
        self.page_size = self.policy.page_size(class);

        let len = self.items.len();
        self.total_pages = len.div_ceil(self.page_size);
        self.current_page = if self.total_pages == 0 {
            0
        } else {
            self.current_page.min(self.total_pages - 1)
        };
        self.start = if len == 0 {
            0
        } else {
            self.start.min(len - 1)
        };

        debug!(
            "Carousel recomputed: {} items, class {}, {} per page, page {}/{}",
            len,
            class,
            self.page_size,
            self.current_page + 1,
            self.total_pages
        );
    }

    /// Reclassifies `width` and recomputes with the current items
    pub fn resize(&mut self, width: u32) {
        let class = self.policy.classify(width);
        let items = std::mem::take(&mut self.items);
        self.recompute(items, class);
    }

    /// Swaps in new items under the current viewport class
    pub fn set_items(&mut self, items: Vec<T>) {
        self.recompute(items, self.class);
    }

    /// Items on the current page
    pub fn current_window(&self) -> &[T] {
        let begin = (self.current_page * self.page_size).min(self.items.len());
        let end = (begin + self.page_size).min(self.items.len());
        &self.items[begin..end]
    }

    /// `count` items from `start`, wrapping past the end; empty when there are no items
    pub fn visible_window(&self, start: usize, count: usize) -> Vec<&T> {
        let len = self.items.len();
        if len == 0 {
            return Vec::new();
        }
        let base = start % len;
        (0..count).map(|i| &self.items[(base + i % len) % len]).collect()
    }

    /// What the current navigation mode shows
    pub fn window(&self) -> Vec<&T> {
        match self.navigation {
            Navigation::Paged => self.current_window().iter().collect(),
            Navigation::Stepped { .. } => self.visible_window(self.start, self.page_size),
        }
    }

    pub fn next(&mut self) {
        match self.navigation {
            Navigation::Paged => {
                if self.total_pages > 1 {
                    self.current_page = (self.current_page + 1) % self.total_pages;
                }
            }
            Navigation::Stepped { step } => {
                let len = self.items.len();
                if len > 1 {
                    self.start = (self.start + step % len) % len;
                }
            }
        }
    }

    pub fn prev(&mut self) {
        match self.navigation {
            Navigation::Paged => {
                if self.total_pages > 1 {
                    self.current_page =
                        (self.current_page + self.total_pages - 1) % self.total_pages;
                }
            }
            Navigation::Stepped { step } => {
                let len = self.items.len();
                if len > 1 {
                    self.start = (self.start + len - step % len) % len;
                }
            }
        }
    }

    /// Jumps to `page`, clamped into range
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.min(self.total_pages.saturating_sub(1));
    }

    /// Same position as `steps` calls to [`next`](Self::next), in constant time
    pub fn advance(&mut self, steps: usize) {
        let Navigation::Stepped { step } = self.navigation else {
            let pages = self.total_pages;
            if pages > 1 {
                self.current_page = (self.current_page + steps % pages) % pages;
            }
            return;
        };
        let len = self.items.len();
        if len > 1 {
            let offset = (steps as u128 * (step % len) as u128) % len as u128;
            self.start = (self.start + offset as usize) % len;
        }
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            class: self.class,
            page_size: self.page_size,
            total_pages: self.total_pages,
            current_page: self.current_page,
            start: self.start,
            len: self.items.len(),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn navigation(&self) -> Navigation {
        self.navigation
    }

    pub fn class(&self) -> ViewportClass {
        self.class
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn start(&self) -> usize {
        self.start
    }
}
