use super::*;

// =============================================================
// Upload progress
// =============================================================

#[test]
fn progress_percent_tracks_loaded_over_total() {
    assert_eq!(progress_percent(50.0, 100.0), Some(50));
    assert_eq!(progress_percent(100.0, 100.0), Some(100));
}

#[test]
fn progress_percent_unknown_total_is_none() {
    assert_eq!(progress_percent(10.0, 0.0), None);
}

#[test]
fn progress_percent_caps_at_one_hundred() {
    assert_eq!(progress_percent(150.0, 100.0), Some(100));
}

// =============================================================
// URLs
// =============================================================

#[test]
fn download_url_joins_base_and_id() {
    let client = ApiClient::new("/api");
    assert_eq!(client.download_url(42), "/api/files/42/download");
}
