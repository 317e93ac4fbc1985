//! Header visibility policy

use super::viewport::ScrollOffset;

/// Whether the fixed header is on screen or slid off the top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Shown,
    Hidden,
}

impl Visibility {
    /// Vertical translation of the header surface for this directive
    #[inline]
    pub fn translate_y(self, hide_offset: i16) -> i16 {
        match self {
            Visibility::Shown => 0,
            Visibility::Hidden => hide_offset,
        }
    }

    #[inline]
    pub fn is_shown(self) -> bool {
        self == Visibility::Shown
    }
}

/// Decide header visibility from two consecutive scroll offsets.
///
/// Scrolling down hides the header; scrolling up, staying put, or being
/// at the very top shows it. Reaching offset 0 always shows the header,
/// whatever the direction.
#[inline]
pub fn decide(previous: ScrollOffset, current: ScrollOffset) -> Visibility {
    if current > previous && current > 0 {
        Visibility::Hidden
    } else {
        Visibility::Shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolling_down_hides() {
        for (previous, current) in [(1, 2), (10, 400), (0, 5), (299, 300)] {
            assert_eq!(decide(previous, current), Visibility::Hidden, "{previous} -> {current}");
        }
    }

    #[test]
    fn test_scrolling_up_shows() {
        for (previous, current) in [(2, 1), (400, 10), (5, 0), (300, 299)] {
            assert_eq!(decide(previous, current), Visibility::Shown, "{previous} -> {current}");
        }
    }

    #[test]
    fn test_top_of_page_always_shows() {
        for previous in [0, 1, 17, ScrollOffset::MAX] {
            assert_eq!(decide(previous, 0), Visibility::Shown);
        }
    }

    #[test]
    fn test_equal_offsets_show() {
        for x in [0, 1, 15, ScrollOffset::MAX] {
            assert_eq!(decide(x, x), Visibility::Shown);
        }
    }

    #[test]
    fn test_translate_y() {
        assert_eq!(Visibility::Shown.translate_y(-3), 0);
        assert_eq!(Visibility::Hidden.translate_y(-3), -3);
    }
}
