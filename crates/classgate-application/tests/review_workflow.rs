use classgate_application::ClassReviewUseCase;
use classgate_core::config::ReviewConfig;
use classgate_core::schedule::{
    ApprovalStatus, ClassSchedule, RawId, SchedulingService, Session, SessionListing,
    SessionTeachers, TeacherRef, TimeSlotRef,
};
use classgate_infrastructure::{ClassFixture, InMemorySchedulingService};
use std::sync::Arc;

fn session(id: &str, seq: u32, slot: bool, resource: Option<&str>) -> Session {
    let mut s = Session::new(id, seq);
    if slot {
        s.time_slot = Some(TimeSlotRef {
            display_name: Some(format!("Period {}", seq)),
            ..TimeSlotRef::default()
        });
    }
    s.resource_name = resource.map(str::to_string);
    s.teachers = Some(SessionTeachers::Structured(vec![TeacherRef {
        id: Some(RawId::Number(5)),
        full_name: Some("Bao Tran".into()),
        ..TeacherRef::default()
    }]));
    s
}

async fn seeded_service() -> Arc<InMemorySchedulingService> {
    let mut class = ClassSchedule::new("MATH-7");
    class.schedule_days = Some(vec![2, 4]);
    class.submitted_at = Some(chrono::Utc::now());

    let service = Arc::new(InMemorySchedulingService::new());
    service
        .insert(ClassFixture {
            class,
            listing: SessionListing {
                sessions: vec![
                    session("s1", 1, true, Some("Room 12")),
                    session("s2", 2, true, Some("Room 12")),
                    session("s3", 3, true, None),
                    session("s4", 4, false, None),
                ],
                weeks: Vec::new(),
            },
        })
        .await;
    service
}

#[tokio::test]
async fn test_review_then_approve() {
    let service = seeded_service().await;
    let usecase = ClassReviewUseCase::new(service.clone(), ReviewConfig::default());

    let review = usecase.load_review("MATH-7").await.unwrap();
    assert_eq!(review.readiness.total, 4);
    assert_eq!(review.readiness.with_time_slot, 3);
    assert_eq!(review.readiness.with_resource, 2);
    assert_eq!(review.readiness.with_teacher, 4);
    assert_eq!(review.class.approval_status, ApprovalStatus::Pending);
    assert!(review.actions_available);
    assert_eq!(review.teachers.len(), 1);
    assert_eq!(review.teachers[0].session_count, 4);
    assert_eq!(review.resources_display, "Room 12");
    assert_eq!(review.schedule_days_display, "Tue, Thu");

    let receipt = usecase.approve("MATH-7").await.unwrap();
    assert_eq!(receipt.message, "Class MATH-7 approved");

    let review = usecase.load_review("MATH-7").await.unwrap();
    assert_eq!(review.class.approval_status, ApprovalStatus::Approved);
    assert!(review.class.decided_at.is_some());
    assert!(!review.actions_available);
}

#[tokio::test]
async fn test_repeat_approve_conflicts_and_keeps_decided_at() {
    let service = seeded_service().await;
    let usecase = ClassReviewUseCase::new(service.clone(), ReviewConfig::default());

    usecase.approve("MATH-7").await.unwrap();
    let decided_at = service
        .get_class_overview("MATH-7")
        .await
        .unwrap()
        .decided_at;

    let err = usecase.approve("MATH-7").await.unwrap_err();
    assert!(err.is_state_conflict());
    let after = service.get_class_overview("MATH-7").await.unwrap();
    assert_eq!(after.decided_at, decided_at);
}

#[tokio::test]
async fn test_reject_resubmit_approve_cycle() {
    let service = seeded_service().await;
    let usecase = ClassReviewUseCase::new(service.clone(), ReviewConfig::default());

    let err = usecase.reject("MATH-7", "short").await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(
        service.get_class_overview("MATH-7").await.unwrap().approval_status,
        ApprovalStatus::Pending
    );

    usecase
        .reject("MATH-7", "Sessions 3 and 4 still need rooms")
        .await
        .unwrap();
    let review = usecase.load_review("MATH-7").await.unwrap();
    assert_eq!(review.class.approval_status, ApprovalStatus::Rejected);
    assert!(!review.actions_available);

    service.resubmit("MATH-7").await.unwrap();
    usecase.approve("MATH-7").await.unwrap();

    let class = service.get_class_overview("MATH-7").await.unwrap();
    assert_eq!(class.approval_status, ApprovalStatus::Approved);
    assert_eq!(
        class.rejection_reason.as_deref(),
        Some("Sessions 3 and 4 still need rooms")
    );
    assert_eq!(class.decision_history.len(), 1);
    assert!(class.submitted_at <= class.decided_at);
}
