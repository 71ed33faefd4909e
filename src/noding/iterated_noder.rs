use super::{BasicSegmentString, IntersectionAdder, McIndexNoder, Noder, NodingError};
use crate::utils::{LineIntersector, PrecisionModel};
use alloc::vec::Vec;

/// The default maximum number of passes of an [`IteratedNoder`] before it may report a
/// failure.
pub const DEFAULT_MAX_ITERATIONS: usize = 5;

/// Nodes a set of chains by repeating single noding passes until no new interior
/// intersection is found.
///
/// A single pass may not produce a fully noded result if intersection points are rounded,
/// since rounding moves nodes slightly and may create new intersections. Iterating is not
/// guaranteed to converge though: once the maximum number of iterations is exceeded, noding
/// fails as soon as a pass does not find fewer intersections than the previous one.
#[derive(Clone, Debug)]
pub struct IteratedNoder<D> {
    li: LineIntersector,
    max_iterations: usize,
    iteration_count: usize,
    noded_strings: Vec<BasicSegmentString<D>>,
}

impl<D> Default for IteratedNoder<D> {
    fn default() -> Self {
        Self::new(PrecisionModel::Floating)
    }
}

impl<D> IteratedNoder<D> {
    /// An iterated noder rounding intersection points with `precision_model`.
    pub fn new(precision_model: PrecisionModel) -> Self {
        Self {
            li: LineIntersector::with_precision_model(precision_model),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            iteration_count: 0,
            noded_strings: Vec::new(),
        }
    }

    /// Sets the number of passes after which a non-decreasing intersection count is a failure.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// The number of passes after which a non-decreasing intersection count is a failure.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// The number of passes performed by the last call to [`Noder::compute_nodes`].
    pub fn iteration_count(&self) -> usize {
        self.iteration_count
    }
}

/// Performs a single noding pass, returning the resulting chains and the number of interior
/// intersections found.
fn node_once<D: Clone>(
    li: &LineIntersector,
    strings: Vec<BasicSegmentString<D>>,
) -> (Vec<BasicSegmentString<D>>, usize) {
    let mut noder = McIndexNoder::new(IntersectionAdder::new(li.clone()));
    let mut noded = super::to_noded_strings(strings);
    noder.process(&mut noded);
    let num_interior = noder.intersector().num_interior_intersections;
    (super::noded_substrings(&noded), num_interior)
}

impl<D> IteratedNoder<D> {
    /// Is the `iteration`-th pass, which created `nodes_created` nodes after the previous one
    /// created `last_nodes_created`, a failure to converge?
    fn is_diverging(
        &self,
        last_nodes_created: Option<usize>,
        nodes_created: usize,
        iteration: usize,
    ) -> bool {
        matches!(last_nodes_created, Some(last) if last > 0 && nodes_created >= last)
            && iteration > self.max_iterations
    }

    /// Repeats `pass` until it creates no node.
    ///
    /// Nothing is kept from the passes if the iteration fails to converge.
    fn iterate<F>(
        &mut self,
        strings: Vec<BasicSegmentString<D>>,
        mut pass: F,
    ) -> Result<(), NodingError>
    where
        F: FnMut(Vec<BasicSegmentString<D>>) -> (Vec<BasicSegmentString<D>>, usize),
    {
        self.noded_strings = strings;
        self.iteration_count = 0;
        let mut last_nodes_created = None;

        loop {
            let strings = core::mem::take(&mut self.noded_strings);
            let (noded, nodes_created) = pass(strings);
            self.noded_strings = noded;
            self.iteration_count += 1;

            log::debug!(
                "Iterated noding pass {} found {} interior intersections.",
                self.iteration_count,
                nodes_created
            );

            if self.is_diverging(last_nodes_created, nodes_created, self.iteration_count) {
                log::warn!(
                    "Iterated noding did not converge after {} passes ({} new intersections).",
                    self.iteration_count,
                    nodes_created
                );
                self.noded_strings.clear();
                return Err(NodingError::NonConvergence {
                    iterations: self.iteration_count,
                    coordinate: None,
                });
            }

            last_nodes_created = Some(nodes_created);
            if nodes_created == 0 {
                return Ok(());
            }
        }
    }
}

impl<D: Clone> Noder<D> for IteratedNoder<D> {
    fn compute_nodes(&mut self, strings: Vec<BasicSegmentString<D>>) -> Result<(), NodingError> {
        let li = self.li.clone();
        self.iterate(strings, |strings| node_once(&li, strings))
    }

    fn noded_substrings(&self) -> Vec<BasicSegmentString<D>> {
        self.noded_strings.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point;
    use crate::noding::SegmentString;

    #[test]
    fn pre_noded_input_converges_in_one_pass() {
        let strings = vec![
            BasicSegmentString::new(vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)], ()),
            BasicSegmentString::new(vec![Point::new(5.0, 5.0), Point::new(10.0, 0.0)], ()),
        ];

        let mut noder = IteratedNoder::default();
        let result = noder.node(strings.clone()).unwrap();
        assert_eq!(noder.iteration_count(), 1);
        assert_eq!(result, strings);
    }

    #[test]
    fn crossing_converges_in_two_passes() {
        let strings = vec![
            BasicSegmentString::new(vec![Point::new(0.0, 0.0), Point::new(10.0, 3.0)], 0),
            BasicSegmentString::new(vec![Point::new(0.0, 3.0), Point::new(10.0, 0.0)], 1),
            BasicSegmentString::new(vec![Point::new(4.0, 0.0), Point::new(6.0, 4.0)], 2),
        ];

        let mut noder = IteratedNoder::new(PrecisionModel::fixed(1.0));
        let result = noder.node(strings).unwrap();
        assert!(noder.iteration_count() >= 2);
        assert!(result
            .iter()
            .flat_map(|s| s.points())
            .all(|p| p.x.fract() == 0.0 && p.y.fract() == 0.0));
    }

    #[test]
    fn divergence_rule() {
        let noder = IteratedNoder::<()>::default().with_max_iterations(2);
        assert!(!noder.is_diverging(None, 3, 1));
        assert!(!noder.is_diverging(Some(3), 2, 3));
        assert!(!noder.is_diverging(Some(3), 3, 2));
        assert!(!noder.is_diverging(Some(0), 0, 3));
        assert!(noder.is_diverging(Some(3), 3, 3));
        assert!(noder.is_diverging(Some(3), 4, 5));
    }

    #[test]
    fn non_convergence_keeps_no_partial_result() {
        let strings = vec![BasicSegmentString::new(
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)],
            (),
        )];

        // A pass that always finds the same number of new intersections never converges.
        let mut noder = IteratedNoder::default().with_max_iterations(2);
        let err = noder.iterate(strings, |strings| (strings, 3)).unwrap_err();

        assert_eq!(
            err,
            NodingError::NonConvergence {
                iterations: 3,
                coordinate: None
            }
        );
        assert_eq!(noder.iteration_count(), 3);
        assert!(noder.noded_substrings().is_empty());
    }
}
