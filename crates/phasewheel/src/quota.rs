//! Per-pair monthly generation allowance with a temporary password unlock.
//!
//! Each planetary pair gets a small number of free report generations per
//! calendar month (UTC). A shared password lifts the limit for a fixed window.
//! The ledger is plain data; callers load and save it explicitly.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_MAX_FREE_GENERATIONS: u32 = 2;
pub const DEFAULT_UNLOCK_MINUTES: i64 = 60;

#[derive(Error, Debug)]
pub enum QuotaError {
    #[error("Incorrect unlock password")]
    WrongPassword,
    #[error("No unlock password configured")]
    UnlockDisabled,
    #[error("No generations left for {pair_id} this month")]
    Exhausted { pair_id: String },
    #[error("Ledger I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("Ledger is not valid JSON: {0}")]
    InvalidLedger(#[from] serde_json::Error),
}

/// Limits applied by a ledger
#[derive(Debug, Clone)]
pub struct QuotaPolicy {
    pub max_free_generations: u32,
    pub unlock_duration: Duration,
    /// `None` disables unlocking entirely
    pub unlock_password: Option<String>,
}

impl Default for QuotaPolicy {
    fn default() -> Self {
        Self {
            max_free_generations: DEFAULT_MAX_FREE_GENERATIONS,
            unlock_duration: Duration::minutes(DEFAULT_UNLOCK_MINUTES),
            unlock_password: None,
        }
    }
}

/// Usage for one pair within one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRecord {
    pub count: u32,
    /// "YYYY-MM"
    pub month: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_until: Option<DateTime<Utc>>,
}

impl GenerationRecord {
    fn fresh(month: String) -> Self {
        Self {
            count: 0,
            month,
            unlocked_until: None,
        }
    }
}

/// Snapshot reported to callers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaStatus {
    pub count: u32,
    pub remaining: u32,
    pub can_generate: bool,
    pub is_unlocked: bool,
    pub max_generations: u32,
}

/// Per-pair records, serialized as a JSON object keyed by pair id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenerationLedger {
    records: HashMap<String, GenerationRecord>,
}

pub fn month_key(now: DateTime<Utc>) -> String {
    now.format("%Y-%m").to_string()
}

impl GenerationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, QuotaError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, QuotaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a ledger file; a missing file yields an empty ledger.
    pub fn load(path: &Path) -> Result<Self, QuotaError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_json(&text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No ledger at {}, starting empty", path.display());
                Ok(Self::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), QuotaError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn record(&self, pair_id: &str) -> Option<&GenerationRecord> {
        self.records.get(pair_id)
    }

    /// Current record for `pair_id`, reset when the month has rolled over.
    fn current_mut(&mut self, pair_id: &str, now: DateTime<Utc>) -> &mut GenerationRecord {
        let month = month_key(now);
        let record = self
            .records
            .entry(pair_id.to_string())
            .or_insert_with(|| GenerationRecord::fresh(month.clone()));
        if record.month != month {
            log::info!("Generation count for {} reset for {}", pair_id, month);
            *record = GenerationRecord::fresh(month);
        }
        record
    }

    pub fn status(&mut self, pair_id: &str, policy: &QuotaPolicy, now: DateTime<Utc>) -> QuotaStatus {
        let record = self.current_mut(pair_id, now);
        let is_unlocked = record.unlocked_until.map_or(false, |until| until > now);
        let remaining = policy.max_free_generations.saturating_sub(record.count);

        QuotaStatus {
            count: record.count,
            remaining,
            can_generate: is_unlocked || remaining > 0,
            is_unlocked,
            max_generations: policy.max_free_generations,
        }
    }

    /// Count one generation, refusing when neither allowance nor unlock remains.
    pub fn record_generation(
        &mut self,
        pair_id: &str,
        policy: &QuotaPolicy,
        now: DateTime<Utc>,
    ) -> Result<QuotaStatus, QuotaError> {
        if !self.status(pair_id, policy, now).can_generate {
            return Err(QuotaError::Exhausted {
                pair_id: pair_id.to_string(),
            });
        }
        self.current_mut(pair_id, now).count += 1;
        Ok(self.status(pair_id, policy, now))
    }

    /// Lift the limit for `pair_id` until `now + policy.unlock_duration`.
    pub fn unlock(
        &mut self,
        pair_id: &str,
        password: &str,
        policy: &QuotaPolicy,
        now: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, QuotaError> {
        let expected = policy.unlock_password.as_deref().ok_or(QuotaError::UnlockDisabled)?;
        if password != expected {
            log::warn!("Rejected unlock attempt for {}", pair_id);
            return Err(QuotaError::WrongPassword);
        }

        let until = now + policy.unlock_duration;
        self.current_mut(pair_id, now).unlocked_until = Some(until);
        Ok(until)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_month_key() {
        assert_eq!(month_key(at(2024, 3, 9)), "2024-03");
    }

    #[test]
    fn test_fresh_pair_has_full_allowance() {
        let mut ledger = GenerationLedger::new();
        let status = ledger.status("sun-moon", &QuotaPolicy::default(), at(2024, 1, 1));
        assert_eq!(status.count, 0);
        assert_eq!(status.remaining, 2);
        assert!(status.can_generate);
        assert!(!status.is_unlocked);
    }

    #[test]
    fn test_pairs_are_independent() {
        let policy = QuotaPolicy::default();
        let now = at(2024, 1, 1);
        let mut ledger = GenerationLedger::new();
        ledger.record_generation("sun-moon", &policy, now).unwrap();
        ledger.record_generation("sun-moon", &policy, now).unwrap();
        assert_eq!(ledger.status("mars-venus", &policy, now).remaining, 2);
    }
}
