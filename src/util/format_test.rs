use super::*;

// =============================================================
// File sizes
// =============================================================

#[test]
fn file_sizes_pick_the_right_unit() {
    assert_eq!(format_file_size(512), "512 B");
    assert_eq!(format_file_size(2_560), "2.5 KB");
    assert_eq!(format_file_size(3 * 1024 * 1024), "3.0 MB");
}

#[test]
fn boundary_sizes_round_trip_units() {
    assert_eq!(format_file_size(1023), "1023 B");
    assert_eq!(format_file_size(1024), "1.0 KB");
}

// =============================================================
// Timestamps
// =============================================================

#[test]
fn timestamps_render_like_the_lists_expect() {
    assert_eq!(format_timestamp("2025-03-01T10:00:00"), "Mar 1, 2025, 10:00 AM");
}

#[test]
fn afternoon_times_use_pm() {
    assert_eq!(format_timestamp("2025-12-31T15:05:00"), "Dec 31, 2025, 3:05 PM");
}

#[test]
fn unparsable_timestamps_fall_back_to_raw() {
    assert_eq!(format_timestamp("soon"), "soon");
}
