//! Destructive color filters and their fixed composition order.
//!
//! Filters run in the order of [`ColorFilter::ALL`], each one reading the
//! output of the previous one:
//!
//! ```text
//!   red    → G = 0, B = 0
//!   blue   → R = 0, G = 0
//!   yellow → B = 0
//!   green  → R = 0, B = 0
//!   orange → B = 0, G = G / 2 (truncated)
//! ```
//!
//! Enabling several filters is mostly destructive (red + blue leaves black).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EditError;
use crate::image::{ImageBuffer, Rgba8};
use crate::parallel;

/// A named channel-zeroing color filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFilter {
    Red,
    Blue,
    Yellow,
    Green,
    Orange,
}

impl ColorFilter {
    /// All filters in composition order.
    pub const ALL: [ColorFilter; 5] = [
        ColorFilter::Red,
        ColorFilter::Blue,
        ColorFilter::Yellow,
        ColorFilter::Green,
        ColorFilter::Orange,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Orange => "orange",
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }

    /// Apply this filter alone to one pixel. Alpha passes through.
    #[inline]
    pub fn apply(self, px: Rgba8) -> Rgba8 {
        match self {
            Self::Red => Rgba8 { g: 0, b: 0, ..px },
            Self::Blue => Rgba8 { r: 0, g: 0, ..px },
            Self::Yellow => Rgba8 { b: 0, ..px },
            Self::Green => Rgba8 { r: 0, b: 0, ..px },
            Self::Orange => Rgba8 {
                g: px.g / 2,
                b: 0,
                ..px
            },
        }
    }
}

impl fmt::Display for ColorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ColorFilter {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|filter| filter.label().eq_ignore_ascii_case(name))
            .ok_or_else(|| EditError::UnknownFilter(s.to_string()))
    }
}

/// The set of enabled filters.
///
/// Only membership matters: iteration always follows [`ColorFilter::ALL`],
/// whatever order filters were enabled in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<ColorFilter>", into = "Vec<ColorFilter>")]
pub struct FilterSet {
    bits: u8,
}

impl FilterSet {
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Enable `filter`. Returns `true` if it was not already enabled.
    pub fn insert(&mut self, filter: ColorFilter) -> bool {
        let added = !self.contains(filter);
        self.bits |= filter.bit();
        added
    }

    /// Disable `filter`. Returns `true` if it was enabled.
    pub fn remove(&mut self, filter: ColorFilter) -> bool {
        let removed = self.contains(filter);
        self.bits &= !filter.bit();
        removed
    }

    /// Flip `filter`. Returns the new state.
    pub fn toggle(&mut self, filter: ColorFilter) -> bool {
        self.bits ^= filter.bit();
        self.contains(filter)
    }

    /// Enable or disable `filter`. Returns `true` if membership changed.
    pub fn set(&mut self, filter: ColorFilter, enabled: bool) -> bool {
        if enabled {
            self.insert(filter)
        } else {
            self.remove(filter)
        }
    }

    pub const fn contains(&self, filter: ColorFilter) -> bool {
        self.bits & filter.bit() != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Enabled filters in composition order.
    pub fn iter(&self) -> impl Iterator<Item = ColorFilter> + '_ {
        ColorFilter::ALL
            .into_iter()
            .filter(move |filter| self.contains(*filter))
    }
}

impl FromIterator<ColorFilter> for FilterSet {
    fn from_iter<I: IntoIterator<Item = ColorFilter>>(iter: I) -> Self {
        let mut set = Self::empty();
        for filter in iter {
            set.insert(filter);
        }
        set
    }
}

impl From<Vec<ColorFilter>> for FilterSet {
    fn from(filters: Vec<ColorFilter>) -> Self {
        filters.into_iter().collect()
    }
}

impl From<FilterSet> for Vec<ColorFilter> {
    fn from(set: FilterSet) -> Self {
        set.iter().collect()
    }
}

/// Run every enabled filter over one pixel, in composition order.
#[inline]
pub fn apply_filters(px: Rgba8, filters: &FilterSet) -> Rgba8 {
    filters.iter().fold(px, |acc, filter| filter.apply(acc))
}

/// Apply the enabled filters to every pixel of `source`.
///
/// An empty set yields an exact copy. `source` is not modified.
pub fn composite(source: &ImageBuffer, filters: &FilterSet) -> Result<ImageBuffer, EditError> {
    parallel::map_pixels(source, |px| apply_filters(px, filters))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_image() -> ImageBuffer {
        let pixels = (0..64u8)
            .map(|i| Rgba8::rgba(i * 4, 255 - i * 3, i.wrapping_mul(37), 128 + i))
            .collect();
        ImageBuffer::new(8, 8, pixels).unwrap()
    }

    #[test]
    fn test_single_filters() {
        let px = Rgba8::rgba(200, 133, 60, 77);
        assert_eq!(ColorFilter::Red.apply(px), Rgba8::rgba(200, 0, 0, 77));
        assert_eq!(ColorFilter::Blue.apply(px), Rgba8::rgba(0, 0, 60, 77));
        assert_eq!(ColorFilter::Yellow.apply(px), Rgba8::rgba(200, 133, 0, 77));
        assert_eq!(ColorFilter::Green.apply(px), Rgba8::rgba(0, 133, 0, 77));
        assert_eq!(ColorFilter::Orange.apply(px), Rgba8::rgba(200, 66, 0, 77));
    }

    #[test]
    fn test_empty_set_is_identity() {
        let image = make_test_image();
        let result = composite(&image, &FilterSet::empty()).unwrap();
        assert_eq!(result, image);
    }

    #[test]
    fn test_red_and_blue_produce_black() {
        let filters: FilterSet = [ColorFilter::Blue, ColorFilter::Red].into_iter().collect();
        let result = composite(&make_test_image(), &filters).unwrap();
        assert!(result.pixels().iter().all(|px| px.channels() == [0, 0, 0]));
    }

    #[test]
    fn test_red_then_orange_regardless_of_insertion_order() {
        let a: FilterSet = [ColorFilter::Red, ColorFilter::Orange].into_iter().collect();
        let b: FilterSet = [ColorFilter::Orange, ColorFilter::Red].into_iter().collect();
        assert_eq!(a, b);

        let image = make_test_image();
        let expected: Vec<Rgba8> = image
            .pixels()
            .iter()
            .map(|&px| ColorFilter::Orange.apply(ColorFilter::Red.apply(px)))
            .collect();
        assert_eq!(composite(&image, &a).unwrap().pixels(), expected.as_slice());
        assert_eq!(composite(&image, &b).unwrap().pixels(), expected.as_slice());
    }

    #[test]
    fn test_yellow_then_green_keeps_only_green() {
        let filters: FilterSet = [ColorFilter::Green, ColorFilter::Yellow].into_iter().collect();
        let px = Rgba8::rgb(10, 20, 30);
        assert_eq!(apply_filters(px, &filters), Rgba8::rgb(0, 20, 0));
    }

    #[test]
    fn test_all_filters_compose_to_black() {
        let filters: FilterSet = ColorFilter::ALL.into_iter().collect();
        assert_eq!(filters.len(), 5);
        assert_eq!(apply_filters(Rgba8::rgb(255, 255, 255), &filters), Rgba8::rgb(0, 0, 0));
    }

    #[test]
    fn test_orange_truncates_odd_green() {
        assert_eq!(ColorFilter::Orange.apply(Rgba8::rgb(0, 255, 0)).g, 127);
        assert_eq!(ColorFilter::Orange.apply(Rgba8::rgb(0, 1, 0)).g, 0);
    }

    #[test]
    fn test_filter_set_membership() {
        let mut set = FilterSet::empty();
        assert!(set.is_empty());
        assert!(set.insert(ColorFilter::Green));
        assert!(!set.insert(ColorFilter::Green));
        assert!(set.toggle(ColorFilter::Red));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![ColorFilter::Red, ColorFilter::Green]);
        assert!(!set.toggle(ColorFilter::Red));
        assert!(set.set(ColorFilter::Green, false));
        assert!(!set.set(ColorFilter::Green, false));
        assert!(set.is_empty());
    }

    #[test]
    fn test_parse_filter_names() {
        assert_eq!("red".parse::<ColorFilter>().unwrap(), ColorFilter::Red);
        assert_eq!(" Orange ".parse::<ColorFilter>().unwrap(), ColorFilter::Orange);
        assert_eq!(
            "purple".parse::<ColorFilter>(),
            Err(EditError::UnknownFilter("purple".to_string()))
        );
    }

    #[test]
    fn test_filter_set_serializes_in_priority_order() {
        let set: FilterSet = [ColorFilter::Orange, ColorFilter::Blue].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["blue","orange"]"#);
        let back: FilterSet = serde_json::from_str(r#"["orange","blue","orange"]"#).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn test_composite_preserves_dimensions() {
        let image = ImageBuffer::new(5, 2, vec![Rgba8::rgb(9, 9, 9); 10]).unwrap();
        let filters: FilterSet = [ColorFilter::Yellow].into_iter().collect();
        assert_eq!(composite(&image, &filters).unwrap().dimensions(), (5, 2));
    }
}
