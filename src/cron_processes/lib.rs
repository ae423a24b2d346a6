use common::{db::init_db, settings::types::Settings};
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{event, instrument, Level};

mod account_deletions;
mod email_verifications;

/// sec min hour day month weekday
const DUE_DELETIONS_SCHEDULE: &str = "0 0 * * * *";
const EXPIRED_VERIFICATIONS_SCHEDULE: &str = "0 */10 * * * *";

#[instrument(skip_all)]
pub async fn run_cron_processes(settings: Settings) -> Result<(), ()> {
    let db = match init_db(&settings).await {
        Ok(db) => db,
        Err(e) => {
            event!(Level::ERROR, "{:?}", e);
            return Err(());
        }
    };

    let scheduler = match JobScheduler::new().await {
        Ok(scheduler) => scheduler,
        Err(e) => {
            event!(Level::ERROR, "{:?}", e);
            return Err(());
        }
    };

    let deletions_db = db.clone();
    let due_deletions_job = match Job::new_async(DUE_DELETIONS_SCHEDULE, move |_, _| {
        let db = deletions_db.clone();
        Box::pin(async move { account_deletions::complete_due_deletions(&db).await })
    }) {
        Ok(job) => job,
        Err(e) => {
            event!(Level::ERROR, "{:?}", e);
            return Err(());
        }
    };

    let verifications_db = db.clone();
    let expired_verifications_job =
        match Job::new_async(EXPIRED_VERIFICATIONS_SCHEDULE, move |_, _| {
            let db = verifications_db.clone();
            Box::pin(async move { email_verifications::cleanup_expired_verifications(&db).await })
        }) {
            Ok(job) => job,
            Err(e) => {
                event!(Level::ERROR, "{:?}", e);
                return Err(());
            }
        };

    for job in [due_deletions_job, expired_verifications_job] {
        if let Err(e) = scheduler.add(job).await {
            event!(Level::ERROR, "{:?}", e);
            return Err(());
        };
    }

    if let Err(e) = scheduler.start().await {
        event!(Level::ERROR, "{:?}", e);
        return Err(());
    }

    Ok(())
}
