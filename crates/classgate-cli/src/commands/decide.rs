use crate::Target;
use crate::commands::{open_service, write_back};
use anyhow::Result;
use classgate_application::ClassReviewUseCase;
use classgate_core::config::ReviewConfig;

pub async fn approve(target: &Target, config: ReviewConfig, write: bool) -> Result<()> {
    let service = open_service(&target.fixture, &config).await?;
    let usecase = ClassReviewUseCase::new(service.clone(), config);

    let receipt = usecase.approve(&target.class_id).await?;
    println!("✅ {}", receipt.message);

    if write {
        write_back(&service, &target.fixture).await?;
    }
    Ok(())
}

pub async fn reject(target: &Target, config: ReviewConfig, reason: &str, write: bool) -> Result<()> {
    let service = open_service(&target.fixture, &config).await?;
    let usecase = ClassReviewUseCase::new(service.clone(), config);

    let receipt = usecase.reject(&target.class_id, reason).await?;
    println!("❌ {}", receipt.message);

    if write {
        write_back(&service, &target.fixture).await?;
    }
    Ok(())
}

pub async fn resubmit(target: &Target, config: ReviewConfig, write: bool) -> Result<()> {
    let service = open_service(&target.fixture, &config).await?;

    let receipt = service.resubmit(&target.class_id).await?;
    println!("📤 {}", receipt.message);

    if write {
        write_back(&service, &target.fixture).await?;
    }
    Ok(())
}
