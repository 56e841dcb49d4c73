#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Offset above which the navbar switches to its compact look.
pub const COMPACT_THRESHOLD: f64 = 100.0;

/// Offset below which the navbar never hides and the back-to-top button
/// stays out of the way.
pub const HIDE_THRESHOLD: f64 = 300.0;

/// Margin above each section top inside which the section already counts
/// as active, compensating for the fixed header.
pub const SECTION_MARGIN: f64 = 100.0;

/// State derived from a single scroll sample.
///
/// The three flags are independent functions of the same sample; none of
/// them feeds back into the others.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollFrame {
    /// Raw vertical offset the frame was derived from.
    pub offset: f64,
    /// Navbar compact look (`offset > 100`).
    pub compact: bool,
    /// Navbar translated out of view (scrolling down past 300).
    pub hidden: bool,
    /// Back-to-top button visible (`offset > 300`).
    pub back_to_top: bool,
}

/// Keeps the previous scroll sample so direction can be derived.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollTracker {
    last_offset: f64,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the frame for one raw scroll sample.
    ///
    /// `hidden` requires both a downward movement relative to the previous
    /// sample and an offset past [`HIDE_THRESHOLD`]; any upward sample shows
    /// the navbar again regardless of magnitude.
    pub fn sample(&mut self, offset: f64) -> ScrollFrame {
        let frame = ScrollFrame {
            offset,
            compact: offset > COMPACT_THRESHOLD,
            hidden: offset > self.last_offset && offset > HIDE_THRESHOLD,
            back_to_top: offset > HIDE_THRESHOLD,
        };
        self.last_offset = offset;
        frame
    }
}

/// Cached geometry for one `section[id]` element, measured at load and
/// refreshed on (debounced) resize rather than re-queried per scroll event.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Which section the viewport is currently in, if any.
///
/// A section is active iff `offset` falls within
/// `(top - SECTION_MARGIN, top - SECTION_MARGIN + height]`. Sections are
/// scanned in document order and a later match wins, mirroring how the
/// highlight classes would be applied in sequence.
pub fn active_section(offset: f64, sections: &[SectionBounds]) -> Option<&str> {
    let mut active = None;
    for section in sections {
        let top = section.top - SECTION_MARGIN;
        if offset > top && offset <= top + section.height {
            active = Some(section.id.as_str());
        }
    }
    active
}
