//! Line detection regression test
//!
//! Longest horizontal and vertical runs on the fixture bitmaps, checked
//! through the `x1 y1 x2 y2` report format.

use figsearch_region::{Orientation, find_all_runs, format_line, longest_run};
use figsearch_test::{RegParams, load_test_bitmap};

fn report(name: &str, orientation: Orientation) -> String {
    let bitmap = load_test_bitmap(name).expect("load fixture");
    let run = longest_run(&bitmap, orientation).expect("scan");
    format_line(run.as_ref()).to_string()
}

#[test]
fn lines_reg() {
    let mut rp = RegParams::new("lines");

    let mut summary = String::new();

    // --- Horizontal ---
    let cases = [
        ("full3.txt", "0 0 0 2"),
        ("row5.txt", "0 0 0 1"),
        ("zeros4.txt", "Not found"),
        ("dot5.txt", "2 2 2 2"),
        ("diag2.txt", "0 0 0 0"),
        ("cross.txt", "1 0 1 4"),
        ("ring5.txt", "0 0 0 4"),
    ];
    for (name, expected) in cases {
        let actual = report(name, Orientation::Horizontal);
        eprintln!("  hline {}: {}", name, actual);
        summary.push_str(&format!("hline {} {}\n", name, actual));
        rp.compare_strings(expected.as_bytes(), actual.as_bytes());
    }

    // --- Vertical ---
    let cases = [
        ("full3.txt", "0 0 2 0"),
        ("row5.txt", "0 0 0 0"),
        ("zeros4.txt", "Not found"),
        ("dot5.txt", "2 2 2 2"),
        ("diag2.txt", "0 0 0 0"),
        ("cross.txt", "0 2 4 2"),
        ("ring5.txt", "0 0 4 0"),
    ];
    for (name, expected) in cases {
        let actual = report(name, Orientation::Vertical);
        eprintln!("  vline {}: {}", name, actual);
        summary.push_str(&format!("vline {} {}\n", name, actual));
        rp.compare_strings(expected.as_bytes(), actual.as_bytes());
    }

    // --- Run enumeration ---
    let cross = load_test_bitmap("cross.txt").expect("load cross");
    let hruns = find_all_runs(&cross, Orientation::Horizontal).expect("hruns");
    rp.compare_values(8.0, hruns.len() as f64, 0.0);
    let total: u32 = hruns.iter().map(|r| r.length).sum();
    rp.compare_values(cross.count_ones() as f64, total as f64, 0.0);

    let vruns = find_all_runs(&cross, Orientation::Vertical).expect("vruns");
    rp.compare_values(7.0, vruns.len() as f64, 0.0);
    let total: u32 = vruns.iter().map(|r| r.length).sum();
    rp.compare_values(cross.count_ones() as f64, total as f64, 0.0);

    // Plain PBM input scans the same as text
    let pbm = load_test_bitmap("cross.pbm").expect("load cross.pbm");
    rp.compare_bitmaps(&cross, &pbm);

    // Every report above, kept as a golden listing
    rp.write_data_and_check(summary.as_bytes(), "txt")
        .expect("write lines summary");

    assert!(rp.cleanup());
}
