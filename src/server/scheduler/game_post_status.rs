use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::game_post::GamePostService};

/// Starts the game post status scheduler.
///
/// Runs every minute and moves game posts along by time:
/// - `OPEN`/`FULL` posts whose start time has passed become `IN_PROGRESS`
/// - `IN_PROGRESS` posts that started six hours ago become `COMPLETED`
///
/// # Returns
/// - `Ok(JobScheduler)` - The running scheduler; dropping it does not stop the job
/// - `Err(AppError::SchedulerErr)` - The job could not be created or started
pub async fn start_scheduler(db: DatabaseConnection) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = advance_game_posts(&db).await {
                tracing::error!("Error advancing game post status: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Game post status scheduler started");

    Ok(scheduler)
}

async fn advance_game_posts(db: &DatabaseConnection) -> Result<(), AppError> {
    let summary = GamePostService::new(db).advance(Utc::now()).await?;

    if summary.started.is_empty() && summary.completed.is_empty() {
        tracing::debug!("No game posts due");
        return Ok(());
    }

    tracing::info!(
        "Started {} game post(s) {:?}, completed {} game post(s) {:?}",
        summary.started.len(),
        summary.started,
        summary.completed.len(),
        summary.completed
    );

    Ok(())
}
