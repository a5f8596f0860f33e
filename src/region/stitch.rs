use crate::error::RegionError;
use crate::math::coincident;
use crate::math::polygon_2d::shoelace_terms;

use super::SimplifiedEdge;

/// Fewest edges a region loop may have.
pub const MIN_REGION_EDGES: usize = 4;

/// How a stitched loop relates to the order its edges were supplied in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopOrientation {
    /// The first edge had to be reversed to connect to the second.
    pub first_edge_swapped: bool,
    /// The loop runs clockwise, so side tests must be negated.
    pub reverse_winding: bool,
}

/// Reorients `edges` in place so that every edge ends where the next one
/// starts, closing back onto the first.
///
/// The first pair may need either or both edges reversed depending on which
/// vertex they share. Every later pair only ever reverses the next edge, since
/// the current edge's start is already fixed by its predecessor. Shoelace
/// terms are accumulated along the way to decide the loop's orientation.
///
/// # Errors
///
/// Returns [`RegionError::MalformedRegion`] if fewer than
/// [`MIN_REGION_EDGES`] edges are given or the edges do not form a single
/// closed loop.
pub fn stitch_edge_loop(edges: &mut [SimplifiedEdge]) -> Result<LoopOrientation, RegionError> {
    let n = edges.len();
    if n < MIN_REGION_EDGES {
        return Err(RegionError::MalformedRegion(format!(
            "a region needs at least {MIN_REGION_EDGES} edges, got {n}"
        )));
    }

    let mut orientation = LoopOrientation::default();
    let mut addition = 0.0;
    let mut subtraction = 0.0;

    for i in 0..n {
        let j = (i + 1) % n;
        let (cur_start, cur_end) = (edges[i].start(), edges[i].end());
        let (next_start, next_end) = (edges[j].start(), edges[j].end());

        if i == 0 {
            if coincident(&cur_end, &next_start) {
                // connected as given
            } else if coincident(&cur_start, &next_start) {
                edges[i].swap();
                orientation.first_edge_swapped = true;
            } else if coincident(&cur_start, &next_end) {
                edges[i].swap();
                edges[j].swap();
                orientation.first_edge_swapped = true;
            } else if coincident(&cur_end, &next_end) {
                edges[j].swap();
            }
        } else if coincident(&cur_end, &next_end) {
            edges[j].swap();
        }

        let (add, sub) = shoelace_terms(&edges[i].start(), &edges[i].end());
        addition += add;
        subtraction += sub;
    }

    if let Some(gap) = (0..n).find(|&i| !coincident(&edges[i].end(), &edges[(i + 1) % n].start())) {
        tracing::debug!(edge = gap, count = n, "region edges do not close");
        return Err(RegionError::MalformedRegion(format!(
            "edge {gap} does not connect to edge {}",
            (gap + 1) % n
        )));
    }

    orientation.reverse_winding = subtraction > addition;
    tracing::trace!(
        first_swapped = orientation.first_edge_swapped,
        reverse = orientation.reverse_winding,
        "region loop stitched"
    );
    Ok(orientation)
}
