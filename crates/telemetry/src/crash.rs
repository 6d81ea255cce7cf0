//! Crash reporter that gates on consent and queues reports in memory.
//!
//! Reports are serialized and held in a bounded outbox; shipping them
//! anywhere is left to whoever drains it.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use logbridge_kernel::settings::{Environment, TelemetrySettings};
use logbridge_kernel::{CrashReporter, Extra, LogCategory, LogLevel};
use once_cell::sync::OnceCell;
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::{Timestamp, Uuid};

const CRASH_TARGET: &str = "logbridge::crash";

/// One queued crash report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrashReport {
    pub id: Uuid,
    pub timestamp: String,
    pub environment: Environment,
    pub message: String,
    pub category: LogCategory,
    pub level: LogLevel,
    pub extra: Extra,
}

#[derive(Debug)]
pub struct DefaultCrashReporter {
    dsn: Option<String>,
    environment: Environment,
    capacity: usize,
    crashed_last_launch: bool,
    send_usage_data: OnceCell<bool>,
    outbox: Mutex<VecDeque<CrashReport>>,
}

impl DefaultCrashReporter {
    pub fn new(settings: &TelemetrySettings, environment: Environment) -> Self {
        Self {
            dsn: settings.dsn.clone().filter(|dsn| !dsn.trim().is_empty()),
            environment,
            capacity: settings.outbox_capacity.max(1),
            crashed_last_launch: settings.crashed_last_launch,
            send_usage_data: OnceCell::new(),
            outbox: Mutex::new(VecDeque::new()),
        }
    }

    /// Consent recorded by [`CrashReporter::setup`], `None` until then.
    pub fn send_usage_data(&self) -> Option<bool> {
        self.send_usage_data.get().copied()
    }

    /// Reporting requires both a DSN and an explicit opt-in.
    pub fn is_enabled(&self) -> bool {
        self.dsn.is_some() && self.send_usage_data() == Some(true)
    }

    pub fn should_send_event_for(&self, level: LogLevel) -> bool {
        self.is_enabled() && level.is_at_least(LogLevel::Fatal)
    }

    pub fn pending_reports(&self) -> Vec<CrashReport> {
        self.outbox().iter().cloned().collect()
    }

    pub fn drain_reports(&self) -> Vec<CrashReport> {
        self.outbox().drain(..).collect()
    }

    fn outbox(&self) -> MutexGuard<'_, VecDeque<CrashReport>> {
        self.outbox.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn enqueue(&self, report: CrashReport) {
        let mut outbox = self.outbox();
        if outbox.len() == self.capacity {
            if let Some(dropped) = outbox.pop_front() {
                tracing::warn!(
                    target: CRASH_TARGET,
                    report_id = %dropped.id,
                    capacity = self.capacity,
                    "crash outbox full; dropping oldest report"
                );
            }
        }
        outbox.push_back(report);
    }
}

impl CrashReporter for DefaultCrashReporter {
    fn crashed_last_launch(&self) -> bool {
        self.crashed_last_launch
    }

    fn setup(&self, send_usage_data: bool) {
        if self.send_usage_data.set(send_usage_data).is_err() {
            tracing::warn!(
                target: CRASH_TARGET,
                requested = send_usage_data,
                recorded = ?self.send_usage_data(),
                "usage data preference already recorded; ignoring"
            );
            return;
        }

        tracing::info!(
            target: CRASH_TARGET,
            send_usage_data,
            has_dsn = self.dsn.is_some(),
            enabled = self.is_enabled(),
            "crash reporter configured"
        );
    }

    fn send(&self, message: &str, category: LogCategory, level: LogLevel, extra_events: &Extra) {
        if !self.should_send_event_for(level) {
            return;
        }

        let now = OffsetDateTime::now_utc();
        let report = CrashReport {
            id: Uuid::new_v7(Timestamp::now(uuid::NoContext)),
            timestamp: now.format(&Rfc3339).unwrap_or_else(|_| now.to_string()),
            environment: self.environment.clone(),
            message: message.to_string(),
            category,
            level,
            extra: extra_events.clone(),
        };

        match serde_json::to_string(&report) {
            Ok(payload) => tracing::error!(
                target: CRASH_TARGET,
                report_id = %report.id,
                %payload,
                "crash report queued"
            ),
            Err(e) => tracing::warn!(
                target: CRASH_TARGET,
                report_id = %report.id,
                error = %e,
                "crash report could not be serialized"
            ),
        }

        self.enqueue(report);
    }
}
