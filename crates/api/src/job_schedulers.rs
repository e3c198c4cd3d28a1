use crate::{reminder::SendRemindersUseCase, shared::usecase::execute};
use actix_web::rt::{
    task::JoinHandle,
    time::{interval_at, Instant},
};
use healthsphere_infra::HealthContext;
use std::time::Duration;
use tracing::{error, info};

const MILLIS_PER_MINUTE: i64 = 1000 * 60;

pub fn get_start_delay(now_ts: usize, secs_before_min: usize) -> usize {
    let secs_to_next_minute = 60 - (now_ts / 1000) % 60;
    if secs_to_next_minute > secs_before_min {
        secs_to_next_minute - secs_before_min
    } else {
        secs_to_next_minute + (60 - secs_before_min)
    }
}

/// Minutes (as minutes since the epoch) a tick should deliver reminders for.
///
/// Every minute is evaluated at most once. A tick in a minute that was already
/// evaluated does nothing, and a late tick catches up on at most
/// `catch_up_minutes` skipped minutes before `now_minute`.
pub fn get_minutes_to_evaluate(
    last_evaluated_minute: Option<i64>,
    now_minute: i64,
    catch_up_minutes: i64,
) -> Vec<i64> {
    match last_evaluated_minute {
        None => vec![now_minute],
        Some(last) if now_minute <= last => Vec::new(),
        Some(last) => {
            let first = (last + 1).max(now_minute - catch_up_minutes);
            (first..=now_minute).collect()
        }
    }
}

/// Starts the minutely reminder job. The first tick is aligned to the next
/// wall clock minute. The job runs until the returned handle is aborted.
pub fn start_send_reminders_job(ctx: HealthContext) -> JoinHandle<()> {
    actix_web::rt::spawn(async move {
        let now = ctx.sys.get_timestamp_millis();
        let secs_to_next_run = get_start_delay(now as usize, 0);
        let start = Instant::now() + Duration::from_secs(secs_to_next_run as u64);

        let mut minutely_interval = interval_at(start, Duration::from_secs(60));
        let mut last_evaluated_minute = None;
        loop {
            minutely_interval.tick().await;
            run_tick(&mut last_evaluated_minute, &ctx).await;
        }
    })
}

/// Delivers reminders for every minute up to now that has not been evaluated yet
async fn run_tick(last_evaluated_minute: &mut Option<i64>, ctx: &HealthContext) {
    let now_minute = ctx.sys.get_timestamp_millis() / MILLIS_PER_MINUTE;
    let minutes = get_minutes_to_evaluate(
        *last_evaluated_minute,
        now_minute,
        ctx.config.catch_up_minutes,
    );
    if minutes.len() > 1 {
        info!(
            "Reminder job was late, catching up on {} minutes",
            minutes.len() - 1
        );
    }
    for minute in minutes {
        // A panic while sending only takes down this task
        let context = ctx.clone();
        let tick = actix_web::rt::spawn(async move {
            send_reminders(minute * MILLIS_PER_MINUTE, &context).await
        });
        if let Err(e) = tick.await {
            error!("Scheduler error while sending reminders: {}", e);
        }
    }
    let evaluated = last_evaluated_minute.map_or(now_minute, |last| last.max(now_minute));
    *last_evaluated_minute = Some(evaluated);
}

async fn send_reminders(minute_ts: i64, context: &HealthContext) {
    let usecase = SendRemindersUseCase { minute_ts };
    match execute(usecase, context).await {
        Ok(res) if res.due > 0 => {
            info!(
                "Reminders due: {}, sent: {}, failed: {}",
                res.due, res.sent, res.failed
            );
        }
        Ok(_) => {}
        Err(e) => error!("Scheduler error while sending reminders: {:?}", e),
    }
}
