use crate::Target;
use crate::commands::open_service;
use anyhow::Result;
use classgate_application::ClassReviewUseCase;
use classgate_core::ClassReview;
use classgate_core::config::ReviewConfig;

pub async fn run(target: &Target, config: ReviewConfig, json: bool) -> Result<()> {
    let service = open_service(&target.fixture, &config).await?;
    let usecase = ClassReviewUseCase::new(service, config);
    let review = usecase.load_review(&target.class_id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&review)?);
        return Ok(());
    }

    print_review(&review, usecase.config());
    Ok(())
}

fn print_review(review: &ClassReview, config: &ReviewConfig) {
    let class = &review.class;
    let readiness = &review.readiness;

    println!(
        "📋 {} {}",
        class.class_id,
        class.class_name.as_deref().unwrap_or_default()
    );
    println!("  Scheduling: {}", class.scheduling_status);
    println!("  Approval:   {}", class.approval_status);
    if let Some(reason) = &class.rejection_reason {
        println!("  Last rejection: {}", reason);
    }
    println!("  Days:       {}", review.schedule_days_display);
    println!("  Teachers:   {}", review.teachers_display);
    println!("  Resources:  {}", review.resources_display);

    println!("\n📊 Readiness ({} sessions)", readiness.total);
    println!(
        "  Time slot: {} set, {} pending",
        readiness.with_time_slot,
        readiness.pending_time_slot()
    );
    println!(
        "  Resource:  {} set, {} pending",
        readiness.with_resource,
        readiness.pending_resource()
    );
    println!(
        "  Teacher:   {} set, {} pending",
        readiness.with_teacher,
        readiness.pending_teacher()
    );
    if let Some(err) = &review.sessions_error {
        println!("  ⚠ Sessions unavailable: {}", err);
    }

    if !review.teachers.is_empty() {
        println!("\n👥 Teachers");
        for teacher in &review.teachers {
            println!(
                "  - {} ({}): {} session(s)",
                teacher.full_name, teacher.id, teacher.session_count
            );
        }
    }

    for week in &review.weeks {
        println!("\n🗓  Week {} ({})", week.week_number, week.week_range);
        for session_id in &week.session_ids {
            let Some(session) = review.sessions.iter().find(|s| &s.session_id == session_id) else {
                continue;
            };
            let slot = ClassReview::slot_label(session, &config.display)
                .unwrap_or_else(|| config.display.unassigned_label.clone());
            let resource = session
                .resource_label()
                .unwrap_or(config.display.unassigned_label.as_str());
            println!(
                "  #{} {}  {}  {}",
                session.sequence_number, session.session_id, slot, resource
            );
        }
    }

    if review.actions_available {
        println!("\n💡 Awaiting decision: classgate approve | classgate reject --reason \"...\"");
    }
}
