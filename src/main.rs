mod appsettings;

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use renewly_notify::{ChannelSenders, NotificationDispatcher};
use renewly_scheduler::ReminderScheduler;
use renewly_storage::memory::{
    InMemoryReminderLogStorage, InMemoryRenewalStorage, InMemoryUserStorage,
};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    pretty_env_logger::init();

    let settings = appsettings::get();

    let renewals = Arc::new(InMemoryRenewalStorage::new());
    let users = Arc::new(InMemoryUserStorage::new());
    let reminder_logs = Arc::new(InMemoryReminderLogStorage::new());

    let dispatcher = Arc::new(NotificationDispatcher::new(
        users,
        reminder_logs,
        ChannelSenders::log_only(),
    ));
    let scheduler = ReminderScheduler::new(renewals, dispatcher);

    let cancellation = CancellationToken::new();
    let shutdown = cancellation.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.cancel();
        }
    });

    log::info!(
        "Starting reminder scheduler, tick every {}s",
        settings.scheduler.tick_interval_secs
    );

    let mut tick = tokio::time::interval(Duration::from_secs(settings.scheduler.tick_interval_secs));
    loop {
        tokio::select! {
            _ = cancellation.cancelled() => break,
            _ = tick.tick() => {
                let today = Utc::now().date_naive();
                match scheduler.run_tick(today).await {
                    Ok(summary) => log::info!(
                        "Reminder tick complete. {} renewals dispatched, {} logs created, {} failed.",
                        summary.renewals_due,
                        summary.logs_created,
                        summary.failed_renewals
                    ),
                    Err(err) => log::error!("Reminder tick failed: {err}"),
                }
            }
        }
    }

    log::info!("Shutting down");
    Ok(())
}
