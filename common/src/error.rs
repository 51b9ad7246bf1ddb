//! Configuration errors raised while assembling the viewer.
//!
//! All variants carry only fixed-size data so the type stays `Copy` and usable
//! without `alloc`. Data read failures are a separate, recoverable type:
//! [`crate::device::DeviceError`].

use core::fmt;

/// Startup error: the page table does not match the declared page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A page controller needs at least one page.
    NoPages,

    /// Declared page count and registered renderers disagree.
    PageCountMismatch {
        /// Page count the controller was asked to manage.
        declared: usize,
        /// Number of renderers actually supplied.
        registered: usize,
    },

    /// More pages than the renderer table can hold.
    TooManyPages {
        /// Page count the controller was asked to manage.
        declared: usize,
        /// Capacity of the renderer table.
        max: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::NoPages => f.write_str("page controller needs at least one page"),
            Self::PageCountMismatch { declared, registered } => {
                write!(f, "{declared} pages declared but {registered} renderers registered")
            }
            Self::TooManyPages { declared, max } => {
                write!(f, "{declared} pages declared, at most {max} supported")
            }
        }
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(Error::NoPages.to_string(), "page controller needs at least one page");
        assert_eq!(
            Error::PageCountMismatch {
                declared: 3,
                registered: 2
            }
            .to_string(),
            "3 pages declared but 2 renderers registered"
        );
        assert_eq!(
            Error::TooManyPages { declared: 9, max: 8 }.to_string(),
            "9 pages declared, at most 8 supported"
        );
    }
}
