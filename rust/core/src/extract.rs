// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scanline rectangle extraction
//!
//! Walks the classified grid row by row, gathering maximal floor runs and
//! merging vertically adjacent runs with identical column spans into
//! maximal constant-width rectangles.

use crate::error::{Error, Result};
use crate::raster::FloorMask;
use crate::types::{FloorRect, Span};

/// The floor spans found on one row.
struct RowSpans {
    y: u32,
    spans: Vec<Span>,
}

/// A rectangle still growing downward.
///
/// The column span is fixed for the region's lifetime; `y_current` advances
/// by exactly one per matched layer.
struct OpenRegion {
    x_start: u32,
    x_end: u32,
    y_start: u32,
    y_current: u32,
}

impl OpenRegion {
    fn seed(span: Span, y: u32) -> Self {
        Self {
            x_start: span.x_start,
            x_end: span.x_end,
            y_start: y,
            y_current: y,
        }
    }

    fn matches(&self, span: &Span) -> bool {
        self.x_start == span.x_start && self.x_end == span.x_end
    }

    fn close(self) -> FloorRect {
        FloorRect::new(self.x_start, self.y_start, self.x_end, self.y_current)
    }
}

/// Extract every maximal constant-width floor rectangle from the mask.
///
/// Single deterministic top-to-bottom pass. Rectangles come out in the
/// order their regions stopped growing, followed by the regions still open
/// when the scan ended, in creation order.
///
/// # Errors
///
/// Returns [`Error::EmptyGrid`] when the mask has zero rows; the scan needs
/// at least one row to seed from.
pub fn extract_rects(mask: &FloorMask) -> Result<Vec<FloorRect>> {
    if mask.height() == 0 {
        return Err(Error::EmptyGrid);
    }

    Ok(merge_layers(gather_layers(mask)))
}

/// Collect the floor spans of each row; rows without any produce nothing.
fn gather_layers(mask: &FloorMask) -> Vec<RowSpans> {
    let mut layers = Vec::new();
    for y in 0..mask.height() {
        let spans = scan_row(mask, y);
        if !spans.is_empty() {
            layers.push(RowSpans { y, spans });
        }
    }

    layers
}

/// Find the maximal floor runs of one row.
///
/// A run opens at its first floor pixel and closes at the next background
/// pixel. A run still open when the row ends is dropped, not closed: only
/// an observed background pixel terminates a span, so a run flush against
/// the right edge never becomes geometry. Layouts keep such runs by
/// carrying a background border.
fn scan_row(mask: &FloorMask, y: u32) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut open: Option<u32> = None;

    for x in 0..mask.width() {
        match (open, mask.is_floor(x, y)) {
            (None, true) => open = Some(x),
            (Some(x_start), false) => {
                spans.push(Span::new(x_start, x));
                open = None;
            }
            _ => {}
        }
    }

    spans
}

/// Merge the span layers into maximal rectangles.
///
/// Matching is by exact column-span equality, first match wins; geometric
/// adjacency is never considered. Rows that produced no spans take no part
/// in matching, so a span reappearing after fully-empty rows re-matches
/// its old region and `y_current` advances by one even though the grid row
/// advanced further. Consumers of the emitted geometry depend on this
/// matching rule staying exactly as it is.
fn merge_layers(layers: Vec<RowSpans>) -> Vec<FloorRect> {
    let Some((first, rest)) = layers.split_first() else {
        return Vec::new();
    };

    let mut open: Vec<OpenRegion> = first
        .spans
        .iter()
        .map(|&span| OpenRegion::seed(span, first.y))
        .collect();
    let mut closed: Vec<FloorRect> = Vec::new();

    for layer in rest {
        let mut consumed = vec![false; layer.spans.len()];
        let mut survivors: Vec<OpenRegion> = Vec::with_capacity(open.len() + layer.spans.len());

        // Grow matched regions, close the rest. Building the next working
        // set instead of deleting in place keeps the traversal order stable.
        for mut region in open {
            let hit = layer
                .spans
                .iter()
                .enumerate()
                .find(|(n, span)| !consumed[*n] && region.matches(span))
                .map(|(n, _)| n);

            match hit {
                Some(n) => {
                    consumed[n] = true;
                    region.y_current += 1;
                    survivors.push(region);
                }
                None => closed.push(region.close()),
            }
        }

        // Unmatched spans open new regions behind the survivors.
        for (n, &span) in layer.spans.iter().enumerate() {
            if !consumed[n] {
                survivors.push(OpenRegion::seed(span, layer.y));
            }
        }

        open = survivors;
    }

    closed.extend(open.into_iter().map(OpenRegion::close));
    closed
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a mask from rows of `#` (floor) and `.` (background).
    fn mask(rows: &[&str]) -> FloorMask {
        let cells: Vec<Vec<bool>> = rows
            .iter()
            .map(|row| row.chars().map(|c| c == '#').collect())
            .collect();
        FloorMask::from_rows(&cells).unwrap()
    }

    #[test]
    fn test_empty_grid_rejected() {
        let empty = FloorMask::from_rows(&[]).unwrap();
        assert_eq!(extract_rects(&empty).unwrap_err(), Error::EmptyGrid);
    }

    #[test]
    fn test_all_background_yields_nothing() {
        let rects = extract_rects(&mask(&["....", "...."])).unwrap();
        assert!(rects.is_empty());
    }

    #[test]
    fn test_single_terminated_run() {
        let rects = extract_rects(&mask(&["###.", "...."])).unwrap();
        assert_eq!(rects, vec![FloorRect::new(0, 0, 3, 0)]);
    }

    #[test]
    fn test_run_flush_to_row_end_is_dropped() {
        // No background pixel ever closes the run, so nothing is emitted.
        let rects = extract_rects(&mask(&["####", "####"])).unwrap();
        assert!(rects.is_empty());
    }

    #[test]
    fn test_two_runs_on_one_row() {
        let rects = extract_rects(&mask(&["##.##.", "......"])).unwrap();
        assert_eq!(
            rects,
            vec![FloorRect::new(0, 0, 2, 0), FloorRect::new(3, 0, 5, 0)]
        );
    }

    #[test]
    fn test_vertical_merge_closes_after_last_matched_row() {
        // Rows 0 and 1 carry [2,5); row 2 is empty. One rectangle spanning
        // rows 0..=1.
        let rects = extract_rects(&mask(&["..###.", "..###.", "......"])).unwrap();
        assert_eq!(rects, vec![FloorRect::new(2, 0, 5, 1)]);
    }

    #[test]
    fn test_span_change_splits_regions() {
        // Row 1 narrows the run, so the row-0 region closes and a fresh
        // region opens; closed regions are emitted first.
        let rects = extract_rects(&mask(&["####.", "###..", "....."])).unwrap();
        assert_eq!(
            rects,
            vec![FloorRect::new(0, 0, 4, 0), FloorRect::new(0, 1, 3, 1)]
        );
    }

    #[test]
    fn test_rematch_across_empty_gap_row() {
        // The empty row produces no layer, so the reappearing [2,5) span
        // re-matches the old region instead of opening a new one, and the
        // region height grows by one row only. Surprising, but the matching
        // rule is span equality, not adjacency, and it must stay that way.
        let rects = extract_rects(&mask(&["..###.", "......", "..###."])).unwrap();
        assert_eq!(rects, vec![FloorRect::new(2, 0, 5, 1)]);
    }

    #[test]
    fn test_shifted_span_does_not_match() {
        // Same width, different columns: two separate rectangles.
        let rects = extract_rects(&mask(&["###...", ".###..", "......"])).unwrap();
        assert_eq!(
            rects,
            vec![FloorRect::new(0, 0, 3, 0), FloorRect::new(1, 1, 4, 1)]
        );
    }

    #[test]
    fn test_closure_order_before_survivors() {
        // Left column ends at row 1, right column survives to the end of
        // the scan; the earlier closure is emitted first.
        let rects = extract_rects(&mask(&["#.#.", "..#.", "..#."])).unwrap();
        assert_eq!(
            rects,
            vec![FloorRect::new(0, 0, 1, 0), FloorRect::new(2, 0, 3, 2)]
        );
    }

    #[test]
    fn test_zero_width_grid() {
        let rows: Vec<Vec<bool>> = vec![Vec::new(), Vec::new()];
        let empty_rows = FloorMask::from_rows(&rows).unwrap();
        assert!(extract_rects(&empty_rows).unwrap().is_empty());
    }
}
