use super::{BasicSegmentString, NodingError};
use alloc::boxed::Box;
use alloc::vec::Vec;

/// Computes the noding of a set of chains.
///
/// Noding is computed by [`Noder::compute_nodes`], and the resulting chains are then read with
/// [`Noder::noded_substrings`]. Every resulting chain carries the payload of the input chain it
/// was split from. Depending on the implementation, the result may not be fully noded: noders
/// rounding intersection points may introduce new intersections.
pub trait Noder<D> {
    /// Computes the noding of `strings`.
    fn compute_nodes(&mut self, strings: Vec<BasicSegmentString<D>>) -> Result<(), NodingError>;

    /// The chains resulting from the last call to [`Noder::compute_nodes`].
    fn noded_substrings(&self) -> Vec<BasicSegmentString<D>>;

    /// Computes the noding of `strings` and returns the resulting chains.
    fn node(
        &mut self,
        strings: Vec<BasicSegmentString<D>>,
    ) -> Result<Vec<BasicSegmentString<D>>, NodingError> {
        self.compute_nodes(strings)?;
        Ok(self.noded_substrings())
    }
}

impl<D, N: Noder<D> + ?Sized> Noder<D> for Box<N> {
    fn compute_nodes(&mut self, strings: Vec<BasicSegmentString<D>>) -> Result<(), NodingError> {
        (**self).compute_nodes(strings)
    }

    fn noded_substrings(&self) -> Vec<BasicSegmentString<D>> {
        (**self).noded_substrings()
    }
}
