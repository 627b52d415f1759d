//! Reference fixtures: a small 3x3x4 volume with two no-data cells per
//! level and the four 2D layers it must slice into.
//!
//! Extent: north 12, south 9, east 21, west 18, top 8, bottom 4, with
//! unit resolution in all three dimensions. Non-null cells are integers
//! in `[0, 10]`.

/// 3D-ASCII text of the reference volume, nsbt order, `*` = no-data.
pub const VOLUME_3X3X4: &str = "\
version: grass7
order: nsbt
north: 12
south: 9
east: 21
west: 18
top: 8
bottom: 4
rows: 3
cols: 3
levels: 4
6 5 1
0 * 5
1 7 *
8 2 *
* 4 2
8 5 6
1 2 8
1 5 *
1 1 *
1 8 3
6 * *
5 1 7
";

/// 2D-ASCII text of the four reference layers, bottommost first.
pub const LAYERS_3X3X4: [&str; 4] = [
    "\
north: 12
south: 9
east: 21
west: 18
rows: 3
cols: 3
6 5 1
0 * 5
1 7 *
",
    "\
north: 12
south: 9
east: 21
west: 18
rows: 3
cols: 3
8 2 *
* 4 2
8 5 6
",
    "\
north: 12
south: 9
east: 21
west: 18
rows: 3
cols: 3
1 2 8
1 5 *
1 1 *
",
    "\
north: 12
south: 9
east: 21
west: 18
rows: 3
cols: 3
1 8 3
6 * *
5 1 7
",
];

/// Number of no-data cells in every reference layer.
pub const NULLS_PER_LAYER: usize = 2;
