//! Integration tests for survey archive loading.

use oiconvert_core::data::project::{entries, Project, DEFAULT_PROJECT_TITLE};
use oiconvert_core::{ArchiveError, Error, EsxArchive};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

fn write_archive(path: &Path, archive_entries: &[(&str, &str)]) {
    let file = File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default();
    for (name, body) in archive_entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(body.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
}

const FLOORS: &str = r#"{"floorPlans": [
    {"id": "floor-1", "name": "Ground", "width": 400, "height": 300, "metersPerUnit": 0.05},
    {"id": "floor-2", "name": "Upper", "cropMaxX": 640.4, "cropMaxY": 480.2}
]}"#;

const SEGMENTS: &str = r#"{"wallSegments": [
    {"id": "seg-1", "wallPoints": ["pt-1", "pt-2"], "wallTypeId": "wt-1"}
]}"#;

const POINTS: &str = r#"{"wallPoints": [
    {"id": "pt-1", "location": {"floorPlanId": "floor-1", "coord": {"x": 10, "y": 20}}},
    {"id": "pt-2", "location": {"floorPlanId": "floor-1", "coord": {"x": 30, "y": 40}}}
]}"#;

const TYPES: &str = r##"{"wallTypes": [
    {"id": "wt-1", "name": "Drywall", "color": "#c0c0c0", "thickness": 0.12,
     "propagationProperties": [{"band": "FIVE", "attenuationFactor": 3.2}]}
]}"##;

fn mandatory() -> Vec<(&'static str, &'static str)> {
    vec![
        (entries::FLOOR_PLANS, FLOORS),
        (entries::WALL_SEGMENTS, SEGMENTS),
        (entries::WALL_POINTS, POINTS),
        (entries::WALL_TYPES, TYPES),
    ]
}

#[test]
fn test_load_full_archive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("survey.esx");
    let mut all = mandatory();
    all.push((
        entries::ACCESS_POINTS,
        r#"{"accessPoints": [{"name": "AP-01", "vendor": "Cisco", "model": "C9120"}]}"#,
    ));
    all.push((
        entries::SIMULATED_RADIOS,
        r#"{"simulatedRadios": [{"id": "radio-1", "accessPointId": "ap-1"}]}"#,
    ));
    all.push((entries::PROJECT, r#"{"project": {"title": "Office Survey"}}"#));
    write_archive(&path, &all);

    let mut archive = EsxArchive::open(&path).unwrap();
    let project = Project::load(&mut archive).unwrap();

    assert_eq!(project.title, "Office Survey");
    assert_eq!(project.floors.len(), 2);
    assert_eq!(project.wall_segments.len(), 1);
    assert_eq!(project.wall_points.len(), 2);
    assert_eq!(project.wall_types.len(), 1);
    assert_eq!(project.access_points.len(), 1);
    assert_eq!(project.simulated_radios.len(), 1);

    assert_eq!(project.floor_name("floor-1"), Some("Ground"));
    assert_eq!(project.floor_name("floor-9"), None);
    assert_eq!(project.scale_for("floor-1"), 0.05);
    assert_eq!(project.scale_for("floor-2"), 0.0);
    assert_eq!(project.scale_for("floor-9"), 0.0);
    assert!(project.wall_type("wt-1").is_some());
    assert!(project.wall_type("wt-9").is_none());
}

#[test]
fn test_missing_mandatory_entry_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("survey.esx");
    let partial: Vec<_> = mandatory()
        .into_iter()
        .filter(|(name, _)| *name != entries::WALL_TYPES)
        .collect();
    write_archive(&path, &partial);

    let mut archive = EsxArchive::open(&path).unwrap();
    let err = Project::load(&mut archive).unwrap_err();
    assert!(err.is_missing_entry());
    assert!(err.to_string().contains(entries::WALL_TYPES));
}

#[test]
fn test_optional_entries_degrade_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("survey.esx");
    write_archive(&path, &mandatory());

    let mut archive = EsxArchive::open(&path).unwrap();
    let project = Project::load(&mut archive).unwrap();
    assert_eq!(project.title, DEFAULT_PROJECT_TITLE);
    assert!(project.access_points.is_empty());
    assert!(project.simulated_radios.is_empty());
}

#[test]
fn test_malformed_optional_entry_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("survey.esx");
    let mut all = mandatory();
    all.push((entries::ACCESS_POINTS, "this is not json"));
    all.push((entries::PROJECT, "{\"project\": 42}"));
    write_archive(&path, &all);

    let mut archive = EsxArchive::open(&path).unwrap();
    let project = Project::load(&mut archive).unwrap();
    assert!(project.access_points.is_empty());
    assert_eq!(project.title, DEFAULT_PROJECT_TITLE);
}

#[test]
fn test_malformed_mandatory_entry_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("survey.esx");
    let mut all = mandatory();
    all.retain(|(name, _)| *name != entries::FLOOR_PLANS);
    all.push((entries::FLOOR_PLANS, "{broken"));
    write_archive(&path, &all);

    let mut archive = EsxArchive::open(&path).unwrap();
    let err = Project::load(&mut archive).unwrap_err();
    assert!(matches!(
        err,
        Error::Archive(ArchiveError::MalformedEntry { .. })
    ));
}

#[test]
fn test_title_falls_back_to_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("survey.esx");
    let mut all = mandatory();
    all.push((entries::PROJECT, r#"{"project": {"title": "", "name": "Backup"}}"#));
    write_archive(&path, &all);

    let mut archive = EsxArchive::open(&path).unwrap();
    let project = Project::load(&mut archive).unwrap();
    assert_eq!(project.title, "Backup");
}

#[test]
fn test_not_a_zip_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("survey.esx");
    std::fs::write(&path, b"definitely not a zip container").unwrap();

    let err = EsxArchive::open(&path).unwrap_err();
    assert!(matches!(
        err,
        Error::Archive(ArchiveError::MalformedArchive { .. })
    ));
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.esx");

    let err = EsxArchive::open(&path).unwrap_err();
    assert!(matches!(err, Error::Archive(ArchiveError::NotFound { .. })));
}
