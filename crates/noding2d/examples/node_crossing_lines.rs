use noding2d::math::Point;
use noding2d::noding::snapround::SnapRoundingNoder;
use noding2d::noding::{
    wkt_linestring, BasicSegmentString, FastNodingValidator, McIndexNoder, Noder, NodingError,
    ScaledNoder, SegmentString,
};
use noding2d::utils::PrecisionModel;

fn main() -> Result<(), NodingError> {
    let lines = vec![
        BasicSegmentString::new(vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)], "a"),
        BasicSegmentString::new(vec![Point::new(0.0, 10.0), Point::new(10.0, 0.0)], "b"),
        BasicSegmentString::new(
            vec![Point::new(0.0, 3.3), Point::new(5.0, 3.3), Point::new(10.0, 7.1)],
            "c",
        ),
    ];

    /*
     * Floating-point noding.
     */
    let noded = McIndexNoder::default().node(lines.clone())?;
    println!("Floating noding: {} chains.", noded.len());
    for chain in &noded {
        println!("  {}: {}", chain.data(), wkt_linestring(chain.points()));
    }

    /*
     * Snap-rounding on a grid of size 0.5.
     */
    let snap_rounder = SnapRoundingNoder::new(PrecisionModel::fixed(1.0))?;
    let mut noder = ScaledNoder::new(snap_rounder, 2.0)?;
    let rounded = noder.node(lines)?;
    println!("Snap-rounded noding: {} chains.", rounded.len());
    for chain in &rounded {
        println!("  {}: {}", chain.data(), wkt_linestring(chain.points()));
    }

    FastNodingValidator::new(&rounded).check_valid()?;
    println!("The snap-rounded result is correctly noded.");
    Ok(())
}
