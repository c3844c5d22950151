//! Named row sections of the character-sheet template
//!
//! The upstream spreadsheet template places each logical section at fixed
//! row offsets; there are no header rows to discover them from. These
//! constants are the contract with that layout: moving a section in the
//! template is a breaking change here.

/// A named, contiguous half-open row range `[start, end)` within a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Human-readable section name
    pub name: &'static str,
    /// First row index, inclusive
    pub start: usize,
    /// Last row index, exclusive
    pub end: usize,
}

impl Section {
    /// Number of rows this section spans in a full-length grid
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True if the section spans no rows
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True if the given row index falls inside this section
    pub fn contains(&self, row: usize) -> bool {
        (self.start..self.end).contains(&row)
    }
}

/// Character name, race, profession and similar header fields
pub const CHARACTER_INFO: Section = Section {
    name: "Character Info",
    start: 0,
    end: 10,
};

/// The seven editable base attributes
pub const BASE_ATTRIBUTES: Section = Section {
    name: "Base Attributes",
    start: 15,
    end: 22,
};

/// Values computed by the template from the base attributes
pub const DERIVED_STATS: Section = Section {
    name: "Derived Stats",
    start: 22,
    end: 35,
};

/// Rows between Character Info and Base Attributes with no assigned meaning
///
/// The template leaves these rows unused. They belong to no section and are
/// deliberately never surfaced; they are also not an error when present.
pub const UNUSED_GAP: Section = Section {
    name: "(unused)",
    start: 10,
    end: 15,
};

/// The three sections surfaced to callers, in template order
pub const ALL_SECTIONS: [Section; 3] = [CHARACTER_INFO, BASE_ATTRIBUTES, DERIVED_STATS];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_do_not_overlap() {
        for row in 0..40 {
            let hits = ALL_SECTIONS.iter().filter(|s| s.contains(row)).count();
            assert!(hits <= 1, "row {} claimed by {} sections", row, hits);
        }
    }

    #[test]
    fn test_gap_rows_belong_to_no_section() {
        for row in UNUSED_GAP.start..UNUSED_GAP.end {
            assert!(ALL_SECTIONS.iter().all(|s| !s.contains(row)));
        }
    }

    #[test]
    fn test_template_offsets() {
        assert_eq!((CHARACTER_INFO.start, CHARACTER_INFO.end), (0, 10));
        assert_eq!((BASE_ATTRIBUTES.start, BASE_ATTRIBUTES.end), (15, 22));
        assert_eq!((DERIVED_STATS.start, DERIVED_STATS.end), (22, 35));
    }
}
