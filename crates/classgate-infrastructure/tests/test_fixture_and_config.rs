use classgate_core::config::ReviewConfig;
use classgate_core::schedule::{ApprovalStatus, SchedulingService, SessionTeachers};
use classgate_infrastructure::{ConfigService, FixtureFile, InMemorySchedulingService};
use tempfile::TempDir;

const FIXTURE: &str = r#"{
  "classes": [
    {
      "class": {
        "classId": "ENG-101",
        "className": "English 101",
        "schedulingStatus": "SCHEDULED",
        "approvalStatus": "PENDING",
        "scheduleDays": [1, 3, 8],
        "submittedAt": "2026-09-01T08:00:00Z"
      },
      "sessions": [
        {
          "sessionId": "s1",
          "sequenceNumber": 1,
          "date": "2026-09-07",
          "dayOfWeek": 1,
          "timeSlot": { "info": { "startTime": "08:00", "endTime": "09:30" } },
          "resourceName": "Room 12",
          "teachers": [{ "id": 5, "fullName": "Bao Tran" }]
        },
        {
          "sessionId": "s2",
          "sequenceNumber": 2,
          "date": "2026-09-09",
          "teachers": "Bao Tran, Linh Do"
        }
      ]
    }
  ]
}"#;

#[tokio::test]
async fn test_load_fixture_and_serve_it() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("classes.json");
    tokio::fs::write(&path, FIXTURE).await.unwrap();

    let fixture = FixtureFile::load(&path).await.expect("Should load fixture");
    assert_eq!(fixture.classes.len(), 1);
    let sessions = &fixture.classes[0].listing.sessions;
    assert!(matches!(sessions[0].teachers, Some(SessionTeachers::Structured(_))));
    assert!(matches!(sessions[1].teachers, Some(SessionTeachers::NameList(_))));

    let service = InMemorySchedulingService::from_fixture(fixture);
    let class = service.get_class_overview("ENG-101").await.unwrap();
    assert_eq!(class.approval_status, ApprovalStatus::Pending);
    assert_eq!(service.get_sessions("ENG-101").await.unwrap().sessions.len(), 2);
}

#[tokio::test]
async fn test_save_fixture_after_decision() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("classes.json");

    let service = InMemorySchedulingService::from_fixture(FixtureFile::from_json_str(FIXTURE).unwrap());
    service.approve_class("ENG-101").await.unwrap();
    service.snapshot().await.save(&path).await.unwrap();

    let reloaded = FixtureFile::load(&path).await.unwrap();
    let class = &reloaded.classes[0].class;
    assert_eq!(class.approval_status, ApprovalStatus::Approved);
    assert!(class.decided_at.is_some());
    assert!(class.submitted_at <= class.decided_at);
}

#[tokio::test]
async fn test_missing_fixture_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = FixtureFile::load(&temp_dir.path().join("absent.json"))
        .await
        .unwrap_err();
    assert!(matches!(err, classgate_core::ClassgateError::Io { .. }));
}

#[test]
fn test_config_defaults_when_file_missing() {
    let temp_dir = TempDir::new().unwrap();
    let service = ConfigService::with_path(temp_dir.path().join("config.toml"));
    assert_eq!(service.get_config().unwrap(), ReviewConfig::default());
}

#[test]
fn test_config_save_and_reload() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.toml");
    let service = ConfigService::with_path(&path);

    let mut config = ReviewConfig::default();
    config.rejection_reason.min_chars = 20;
    config.display.unassigned_label = "TBA".to_string();
    service.save_config(&config).unwrap();

    let loaded = service.get_config().unwrap();
    assert_eq!(loaded.rejection_reason.min_chars, 20);
    assert_eq!(loaded.display.unassigned_label, "TBA");
    assert!(!path.with_extension("toml.tmp").exists());
}

#[test]
fn test_config_save_replaces_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[display]\nunassigned_label = \"Old\"\n").unwrap();
    let service = ConfigService::with_path(&path);
    assert_eq!(service.get_config().unwrap().display.unassigned_label, "Old");

    let mut config = ReviewConfig::default();
    config.display.unassigned_label = "New".to_string();
    service.save_config(&config).unwrap();

    assert_eq!(service.get_config().unwrap().display.unassigned_label, "New");
    let entries: Vec<_> = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("config.toml")]);
}

#[test]
fn test_invalid_config_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[rejection_reason]\nmin_chars = 0\n").unwrap();

    let err = ConfigService::with_path(&path).get_config().unwrap_err();
    assert!(err.is_config());
}

#[test]
fn test_cache_invalidation_picks_up_changes() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    let service = ConfigService::with_path(&path);
    assert_eq!(service.get_config().unwrap().display.list_separator, ", ");

    std::fs::write(&path, "[display]\nlist_separator = \" / \"\n").unwrap();
    assert_eq!(service.get_config().unwrap().display.list_separator, ", ");

    service.invalidate_cache();
    assert_eq!(service.get_config().unwrap().display.list_separator, " / ");
}
