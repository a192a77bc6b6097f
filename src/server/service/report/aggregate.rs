//! In-memory reductions behind the reports.
//!
//! Repositories load tenant-scoped rows; these functions fold them into totals and
//! rankings. Keys are kept in `BTreeMap`s so ties always resolve to the smallest key.

use std::collections::BTreeMap;

use crate::server::model::{
    appointment::{Appointment, AppointmentStatus},
    report::AppointmentSummary,
};

/// Counts appointments by status, modality and payer.
pub fn summarize(appointments: &[Appointment]) -> AppointmentSummary {
    let mut summary = AppointmentSummary {
        total: appointments.len() as u64,
        ..Default::default()
    };

    for appointment in appointments {
        match appointment.status {
            AppointmentStatus::Scheduled => summary.scheduled += 1,
            AppointmentStatus::Confirmed => summary.confirmed += 1,
            AppointmentStatus::Completed => summary.completed += 1,
            AppointmentStatus::Cancelled => summary.cancelled += 1,
            AppointmentStatus::NoShow => summary.no_show += 1,
        }

        if appointment.telemedicine {
            summary.telemedicine += 1;
        } else {
            summary.in_person += 1;
        }

        if appointment.insurance_plan_id.is_some() {
            summary.insurance += 1;
        } else {
            summary.private += 1;
        }
    }

    summary
}

/// Sums appointment prices, treating a missing price as zero.
pub fn total_price(appointments: &[Appointment]) -> f64 {
    appointments.iter().filter_map(|a| a.price).sum()
}

/// Counts occurrences of each key, ordered by key.
pub fn count_by_key<K: Ord>(keys: impl IntoIterator<Item = K>) -> Vec<(K, u64)> {
    let mut counts = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}

/// Sums values per key, ordered by key.
pub fn sum_by_key<K: Ord>(pairs: impl IntoIterator<Item = (K, f64)>) -> Vec<(K, f64)> {
    let mut sums = BTreeMap::new();
    for (key, value) in pairs {
        *sums.entry(key).or_insert(0.0) += value;
    }
    sums.into_iter().collect()
}

/// Picks the entry with the highest value. On ties the first entry wins, which for the
/// key-ordered output of `count_by_key`/`sum_by_key` is the smallest key.
pub fn top<K: Copy, V: PartialOrd + Copy>(totals: &[(K, V)]) -> Option<(K, V)> {
    totals.iter().fold(None, |best, &(key, value)| match best {
        Some((_, best_value)) if best_value >= value => best,
        _ => Some((key, value)),
    })
}

/// Mean duration in hours per professional over appointments that have an end time.
///
/// Returns `(professional_id, hours)` ordered by professional ID, rounded to two decimals.
pub fn average_hours(appointments: &[Appointment]) -> Vec<(i32, f64)> {
    let mut totals: BTreeMap<i32, (f64, u32)> = BTreeMap::new();

    for appointment in appointments {
        if let Some(hours) = appointment.duration_hours() {
            let entry = totals.entry(appointment.professional_id).or_insert((0.0, 0));
            entry.0 += hours;
            entry.1 += 1;
        }
    }

    totals
        .into_iter()
        .map(|(id, (hours, count))| (id, round2(hours / f64::from(count))))
        .collect()
}

/// Share of `converted` in `total` as a percentage with two decimals; zero when empty.
pub fn conversion_rate(converted: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(converted as f64 / total as f64 * 100.0)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
