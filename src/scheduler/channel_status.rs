use std::{sync::Arc, time::Duration};

use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    service::channel_status::ChannelStatusService,
};

/// Delay before the first publish of each task.
const FIRST_RUN_DELAY: Duration = Duration::from_secs(1);

/// Starts one publish job per channel status service.
///
/// Every service runs once shortly after start and then at its own interval.
/// The first run still waits for the gateway to become ready, so starting the
/// scheduler before the bot connects is fine.
///
/// # Arguments
/// - `tasks` - Each service paired with the interval between its publishes
///
/// # Returns
/// - `Ok(JobScheduler)` - The running scheduler, to be shut down on exit
/// - `Err(AppError::SchedulerErr)` - A job could not be created or the scheduler failed to start
pub async fn start_scheduler(
    tasks: Vec<(Arc<ChannelStatusService>, Duration)>,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    for (service, interval) in tasks {
        let first_run = service.clone();
        let job = Job::new_one_shot_async(FIRST_RUN_DELAY, move |_uuid, _lock| {
            let service = first_run.clone();

            Box::pin(async move {
                run_publish(&service).await;
            })
        })?;
        scheduler.add(job).await?;

        let repeated = service.clone();
        let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
            let service = repeated.clone();

            Box::pin(async move {
                run_publish(&service).await;
            })
        })?;
        scheduler.add(job).await?;

        tracing::info!(
            "Scheduled {} statistics every {}s",
            service.dimension(),
            interval.as_secs()
        );
    }

    scheduler.start().await?;

    tracing::info!("Channel status scheduler started");

    Ok(scheduler)
}

/// Runs one publish tick, logging instead of propagating failures.
async fn run_publish(service: &ChannelStatusService) {
    match service.publish().await {
        Ok(_) => {}
        Err(e @ (AppError::NotFound(_) | AppError::FormatErr(_))) => {
            tracing::warn!("Skipping {} statistics update: {}", service.dimension(), e);
        }
        Err(e) => {
            tracing::error!("Error updating {} statistics: {}", service.dimension(), e);
        }
    }
}
