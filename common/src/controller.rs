//! Page navigation for the multi-page viewer.
//!
//! The controller owns the current page index and an indexed table of
//! [`Page`]s. Navigation wraps in both directions, so the index is always in
//! `[0, total)`:
//!
//! - `next`: `0 → 1 → … → total-1 → 0`
//! - `previous`: `0 → total-1 → … → 1 → 0`
//!
//! The table is validated against the declared page count when the
//! controller is built; a mismatch is a startup error, never a render-time
//! no-op.

use heapless::Vec;
use log::debug;

use crate::config::MAX_PAGES;
use crate::error::Error;
use crate::layout::Layout;
use crate::pages::Page;

/// Current page plus the renderer for every page.
pub struct PageController<Dsp, Dev> {
    pages: Vec<Page<Dsp, Dev>, MAX_PAGES>,
    current: usize,
}

impl<Dsp, Dev> PageController<Dsp, Dev> {
    /// Build a controller for `total_pages` pages, starting at page 0.
    ///
    /// Fails if `total_pages` is zero, exceeds [`MAX_PAGES`], or differs from
    /// the number of pages supplied.
    pub fn new(
        total_pages: usize,
        pages: &[Page<Dsp, Dev>],
    ) -> Result<Self, Error> {
        if total_pages == 0 {
            return Err(Error::NoPages);
        }
        if total_pages > MAX_PAGES {
            return Err(Error::TooManyPages {
                declared: total_pages,
                max: MAX_PAGES,
            });
        }
        if pages.len() != total_pages {
            return Err(Error::PageCountMismatch {
                declared: total_pages,
                registered: pages.len(),
            });
        }

        let pages = Vec::from_slice(pages).map_err(|_| Error::TooManyPages {
            declared: total_pages,
            max: MAX_PAGES,
        })?;
        Ok(Self { pages, current: 0 })
    }

    /// Index of the current page.
    #[inline]
    pub const fn current(&self) -> usize { self.current }

    /// Total number of pages.
    #[inline]
    pub fn total(&self) -> usize { self.pages.len() }

    /// Title of the current page.
    pub fn current_title(&self) -> &'static str { self.pages[self.current].title }

    /// Advance to the next page, wrapping to the first.
    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.total();
        debug!("page -> {} ({})", self.current, self.current_title());
    }

    /// Go back to the previous page, wrapping to the last.
    pub fn previous(&mut self) {
        let total = self.total();
        self.current = (self.current + total - 1) % total;
        debug!("page -> {} ({})", self.current, self.current_title());
    }

    /// Paint the current page.
    pub fn render_current(
        &self,
        display: &mut Dsp,
        layout: &Layout,
        device: &Dev,
    ) {
        (self.pages[self.current].render)(display, layout, device);
    }

    /// Repaint the current page without changing it.
    pub fn render(
        &self,
        display: &mut Dsp,
        layout: &Layout,
        device: &Dev,
    ) {
        self.render_current(display, layout, device);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
