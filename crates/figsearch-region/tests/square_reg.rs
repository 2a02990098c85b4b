//! Square detection regression test
//!
//! Largest solid square on the fixture bitmaps, plus solidity and
//! maximality checks on the detected squares.

use figsearch_core::Point;
use figsearch_region::{Square, format_square, is_solid_square, largest_square};
use figsearch_test::{RegParams, load_test_bitmap};

#[test]
fn square_reg() {
    let mut rp = RegParams::new("square");

    let cases = [
        ("full3.txt", "0 0 2 2"),
        ("row5.txt", "0 0 0 0"),
        ("zeros4.txt", "Not found"),
        ("dot5.txt", "2 2 2 2"),
        ("diag2.txt", "0 0 0 0"),
        ("cross.txt", "2 4 4 6"),
        ("ring5.txt", "0 0 0 0"),
    ];
    for (name, expected) in cases {
        let bitmap = load_test_bitmap(name).expect("load fixture");
        let square = largest_square(&bitmap).expect("scan");
        let actual = format_square(square.as_ref()).to_string();
        eprintln!("  square {}: {}", name, actual);
        rp.compare_strings(expected.as_bytes(), actual.as_bytes());

        if let Some(sq) = square {
            // The result is solid and cannot grow by one in any direction
            rp.compare_values(1.0, is_solid_square(&bitmap, &sq) as u8 as f64, 0.0);
            let grown = [
                Square::new(sq.top_left, sq.side() + 1),
                Square::from_bottom_right(sq.bottom_right, sq.side() + 1),
                Square::new(sq.top_left.offset(-1, 0), sq.side() + 1),
                Square::new(sq.top_left.offset(0, -1), sq.side() + 1),
            ];
            let any_grown = grown.iter().any(|g| is_solid_square(&bitmap, g));
            rp.compare_values(0.0, any_grown as u8 as f64, 0.0);
        }
    }

    // The ring's hole rules out every square larger than one cell
    let ring = load_test_bitmap("ring5.txt").expect("load ring");
    let outline = Square::new(Point::new(0, 0), 5);
    rp.compare_values(0.0, is_solid_square(&ring, &outline) as u8 as f64, 0.0);

    let cross = load_test_bitmap("cross.txt").expect("load cross");
    let sq = largest_square(&cross).expect("scan").expect("square");
    rp.compare_values(3.0, sq.side() as f64, 0.0);
    rp.compare_values(9.0, sq.area() as f64, 0.0);

    assert!(rp.cleanup());
}
