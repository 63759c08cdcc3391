mod common;

use assert_cmd::Command;
use common::write_test_image;
use image::GenericImageView;
use predicates::prelude::*;
use std::io::Cursor;
use tempfile::TempDir;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("img-enhance").unwrap();
    cmd.arg("--help");
    cmd.assert().success();
}

#[test]
fn test_enhance_help() {
    let mut cmd = Command::cargo_bin("img-enhance").unwrap();
    cmd.args(["enhance", "--help"]);
    cmd.assert().success();
}

#[test]
fn test_batch_help() {
    let mut cmd = Command::cargo_bin("img-enhance").unwrap();
    cmd.args(["batch", "--help"]);
    cmd.assert().success();
}

#[test]
fn test_enhance_missing_args() {
    let mut cmd = Command::cargo_bin("img-enhance").unwrap();
    cmd.args(["enhance"]);
    cmd.assert().failure();
}

#[test]
fn test_batch_missing_args() {
    let mut cmd = Command::cargo_bin("img-enhance").unwrap();
    cmd.args(["batch"]);
    cmd.assert().failure();
}

#[test]
fn test_enhance_nonexistent_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out.png");

    let mut cmd = Command::cargo_bin("img-enhance").unwrap();
    cmd.arg("enhance").arg("nonexistent.png").arg(&output);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_enhance_rejects_out_of_range_scale() {
    let mut cmd = Command::cargo_bin("img-enhance").unwrap();
    cmd.args(["enhance", "photo.png", "-s", "11"]);
    cmd.assert().failure();

    let mut cmd = Command::cargo_bin("img-enhance").unwrap();
    cmd.args(["enhance", "photo.png", "-s", "0"]);
    cmd.assert().failure();
}

#[test]
fn test_enhance_rejects_out_of_range_factor() {
    let mut cmd = Command::cargo_bin("img-enhance").unwrap();
    cmd.args(["enhance", "photo.png", "--color", "3.5"]);
    cmd.assert().failure();
}

#[test]
fn test_enhance_writes_scaled_png() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_test_image(temp_dir.path(), "input.jpg", 10, 10);
    let output = temp_dir.path().join("out.png");

    let mut cmd = Command::cargo_bin("img-enhance").unwrap();
    cmd.arg("enhance")
        .arg(&input)
        .arg(&output)
        .args(["-s", "2", "--quiet"]);
    cmd.assert().success();

    let bytes = std::fs::read(&output).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!(decoded.dimensions(), (20, 20));
}

#[test]
fn test_enhance_quiet_suppresses_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_test_image(temp_dir.path(), "input.png", 4, 4);
    let output = temp_dir.path().join("out.png");

    let mut cmd = Command::cargo_bin("img-enhance").unwrap();
    cmd.arg("enhance").arg(&input).arg(&output).arg("--quiet");
    cmd.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn test_enhance_auto_flag() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_test_image(temp_dir.path(), "input.png", 5, 7);
    let output = temp_dir.path().join("out.png");

    let mut cmd = Command::cargo_bin("img-enhance").unwrap();
    cmd.arg("enhance")
        .arg(&input)
        .arg(&output)
        .args(["--auto", "--color", "0.1", "--quiet"]);
    cmd.assert().success();

    let bytes = std::fs::read(&output).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!(decoded.dimensions(), (10, 14));
}

#[test]
fn test_batch_writes_zip_archive() {
    let temp_dir = TempDir::new().unwrap();
    write_test_image(temp_dir.path(), "a.png", 8, 8);
    write_test_image(temp_dir.path(), "b.jpg", 6, 10);
    let output = temp_dir.path().join("enhanced.zip");

    let mut cmd = Command::cargo_bin("img-enhance").unwrap();
    cmd.arg("batch")
        .arg(temp_dir.path())
        .arg("-o")
        .arg(&output)
        .arg("--quiet");
    cmd.assert().success();

    let bytes = std::fs::read(&output).unwrap();
    let mut zip = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    assert_eq!(zip.len(), 2);
    assert!(zip.by_name("a.png").is_ok());
    assert!(zip.by_name("b.jpg").is_ok());
}

#[test]
fn test_batch_no_images_found() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("enhanced.zip");

    let mut cmd = Command::cargo_bin("img-enhance").unwrap();
    cmd.arg("batch")
        .arg(temp_dir.path())
        .arg("-o")
        .arg(&output);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No image files found"));
}

#[test]
fn test_batch_aborts_on_undecodable_file() {
    let temp_dir = TempDir::new().unwrap();
    write_test_image(temp_dir.path(), "good.png", 4, 4);
    std::fs::write(temp_dir.path().join("bad.png"), b"not an image").unwrap();
    let output = temp_dir.path().join("enhanced.zip");

    let mut cmd = Command::cargo_bin("img-enhance").unwrap();
    cmd.arg("batch")
        .arg(temp_dir.path())
        .arg("-o")
        .arg(&output)
        .arg("--quiet");
    cmd.assert().failure();
    assert!(!output.exists());
}
