use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn xpozctl() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("xpozctl");
    cmd.env_remove("XPOZ_CONFIG")
        .env_remove("XPOZ_CAROUSEL_SPACING")
        .env_remove("XPOZ_CAROUSEL_WINDOW")
        .env_remove("XPOZ_CAROUSEL_ZOOMED_SCALE")
        .env_remove("XPOZ_CAROUSEL_SWIPE_THRESHOLD")
        .env("RUST_LOG", "warn");
    cmd
}

#[test]
fn route_resolves_album_paths() {
    xpozctl()
        .args(["route", "/album/abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("album abc"));
}

#[test]
fn unknown_route_fails() {
    xpozctl()
        .args(["route", "/settings/profile"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no screen for path"));
}

#[test]
fn layout_fits_landscape_asset() {
    xpozctl()
        .args(["layout", "--viewport", "1000x500", "--asset", "2000x1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fitted   1000x500 at top 0 left 0"));
}

#[test]
fn layout_json_places_later_slides_along_the_track() {
    let output = xpozctl()
        .args([
            "--json",
            "layout",
            "--viewport",
            "500x1000",
            "--asset",
            "2000x1000",
            "--index",
            "4",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(report["width"].as_f64(), Some(500.0));
    assert_eq!(report["height"].as_f64(), Some(250.0));
    assert_eq!(report["top"].as_f64(), Some(375.0));
    assert_eq!(report["pos"].as_u64(), Some(1));
    assert_eq!(report["jumps"].as_i64(), Some(1));
    // 4 * (500 + 20)
    assert_eq!(report["x"].as_f64(), Some(2080.0));
    assert_eq!(report["track_offset"].as_f64(), Some(-2080.0));
}

#[test]
fn layout_rejects_sub_pixel_assets() {
    xpozctl()
        .args(["layout", "--viewport", "1000x500", "--asset", "0.4x10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1x1 pixels"));
}

#[test]
fn debug_logging_reports_loaded_configuration() {
    xpozctl()
        .env("RUST_LOG", "xpozctl=debug")
        .env("NO_COLOR", "1")
        .args(["layout", "--viewport", "1000x500", "--asset", "2000x1000"])
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded configuration"));
}

#[test]
fn layout_rejects_malformed_sizes() {
    xpozctl()
        .args(["layout", "--viewport", "wide", "--asset", "2000x1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("WIDTHxHEIGHT"));
}
