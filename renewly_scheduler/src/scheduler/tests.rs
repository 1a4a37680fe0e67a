use renewly_models::chrono::NaiveDate;
use renewly_models::renewal::Renewal;
use renewly_notify::ChannelSenders;
use renewly_storage::memory::{
    InMemoryReminderLogStorage, InMemoryRenewalStorage, InMemoryUserStorage,
};
use renewly_storage::renewal::NewRenewal;
use renewly_storage::user::NewUser;

use super::*;

struct TestContext {
    renewals: Arc<InMemoryRenewalStorage>,
    users: Arc<InMemoryUserStorage>,
    logs: Arc<InMemoryReminderLogStorage>,
    scheduler:
        ReminderScheduler<InMemoryRenewalStorage, InMemoryUserStorage, InMemoryReminderLogStorage>,
}

impl TestContext {
    fn new() -> Self {
        let renewals = Arc::new(InMemoryRenewalStorage::new());
        let users = Arc::new(InMemoryUserStorage::new());
        let logs = Arc::new(InMemoryReminderLogStorage::new());
        let dispatcher = Arc::new(NotificationDispatcher::new(
            Arc::clone(&users),
            Arc::clone(&logs),
            ChannelSenders::log_only(),
        ));
        let scheduler = ReminderScheduler::new(Arc::clone(&renewals), dispatcher);

        Self {
            renewals,
            users,
            logs,
            scheduler,
        }
    }

    async fn add_user(&self) -> i64 {
        self.users
            .insert(NewUser {
                email: "owner@example.com".to_owned(),
                phone_number: Some("+15550100".to_owned()),
                email_enabled: true,
                sms_enabled: true,
                in_app_enabled: true,
            })
            .await
            .id
    }

    async fn add_renewal(
        &self,
        user_id: i64,
        end_date: NaiveDate,
        reminder_days_before: Option<u32>,
    ) -> Renewal {
        self.renewals
            .insert(NewRenewal {
                user_id,
                item_name: "Widget Plan".to_owned(),
                category: "software".to_owned(),
                vendor: None,
                start_date: date(2025, 1, 1),
                end_date,
                reminder_days_before,
                notes: None,
                cost: None,
            })
            .await
            .unwrap()
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn tick_dispatches_due_renewals_across_all_channels() {
    let ctx = TestContext::new();
    let user_id = ctx.add_user().await;
    let renewal = ctx.add_renewal(user_id, date(2025, 6, 15), Some(7)).await;

    let summary = ctx.scheduler.run_tick(date(2025, 6, 8)).await.unwrap();

    assert_eq!(
        summary,
        TickSummary {
            renewals_due: 1,
            logs_created: 3,
            failed_renewals: 0,
        }
    );
    let logs = ctx.logs.list_for_renewal(renewal.id).await.unwrap();
    assert_eq!(logs.len(), 3);
    assert!(logs.iter().all(|log| log
        .notes
        .contains("Your Widget Plan service will expire in 7 days (on 2025-06-15).")));
}

#[tokio::test]
async fn tick_skips_renewals_that_are_not_due() {
    let ctx = TestContext::new();
    let user_id = ctx.add_user().await;
    ctx.add_renewal(user_id, date(2025, 6, 15), Some(7)).await;

    // One day late: six days out is not a qualifying day.
    let summary = ctx.scheduler.run_tick(date(2025, 6, 9)).await.unwrap();

    assert_eq!(summary, TickSummary::default());
}

#[tokio::test]
async fn tick_applies_default_offsets() {
    let ctx = TestContext::new();
    let user_id = ctx.add_user().await;
    ctx.add_renewal(user_id, date(2025, 6, 15), None).await;

    let summary = ctx.scheduler.run_tick(date(2025, 5, 16)).await.unwrap();

    assert_eq!(summary.renewals_due, 1);
    assert_eq!(summary.logs_created, 3);
}

#[tokio::test]
async fn cancelled_renewals_are_not_candidates() {
    let ctx = TestContext::new();
    let user_id = ctx.add_user().await;
    let mut renewal = ctx.add_renewal(user_id, date(2025, 6, 15), Some(7)).await;
    renewal.status = renewly_models::renewal::RenewalStatus::Cancelled;
    ctx.renewals.update(renewal).await.unwrap();

    let summary = ctx.scheduler.run_tick(date(2025, 6, 8)).await.unwrap();

    assert_eq!(summary, TickSummary::default());
}

#[tokio::test]
async fn one_failing_renewal_does_not_abort_the_tick() {
    let ctx = TestContext::new();
    let user_id = ctx.add_user().await;
    // Owner 99 does not exist; its dispatch fails, the other proceeds.
    ctx.add_renewal(99, date(2025, 6, 15), Some(7)).await;
    let ok_renewal = ctx.add_renewal(user_id, date(2025, 6, 15), Some(7)).await;

    let summary = ctx.scheduler.run_tick(date(2025, 6, 8)).await.unwrap();

    assert_eq!(
        summary,
        TickSummary {
            renewals_due: 1,
            logs_created: 3,
            failed_renewals: 1,
        }
    );
    assert_eq!(ctx.logs.list_for_renewal(ok_renewal.id).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_trigger_returns_created_logs() {
    let ctx = TestContext::new();
    let user_id = ctx.add_user().await;
    let renewal = ctx.add_renewal(user_id, date(2025, 6, 15), Some(7)).await;

    let logs = ctx
        .scheduler
        .send_test_reminder(renewal.id, 14)
        .await
        .unwrap();

    assert_eq!(logs.len(), 3);
    assert!(logs[0]
        .notes
        .contains("Your Widget Plan service will expire in 14 days (on 2025-06-15)."));
}

#[tokio::test]
async fn test_trigger_for_missing_renewal_fails() {
    let ctx = TestContext::new();

    let err = ctx.scheduler.send_test_reminder(7, 7).await.unwrap_err();

    assert!(matches!(err, SchedulerError::MissingRenewal(7)));
}
