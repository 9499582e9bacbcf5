//! Attendance tally functionality.
//!
//! Turns raw attendance marks into per-employee present-day counts for a
//! month.

use std::collections::BTreeMap;

use crate::models::{AttendanceEntry, AttendanceTally, PayMonth};

/// Counts attendance marks per employee for the given month.
///
/// Marks from other months are ignored. Tallies are returned ordered by
/// employee id; employees with no marks in the month get no tally.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::tally_attendance;
/// use payroll_engine::models::{AttendanceEntry, PayMonth};
/// use chrono::NaiveDate;
///
/// let entries = vec![
///     AttendanceEntry { employee_id: "1".into(), date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap() },
///     AttendanceEntry { employee_id: "1".into(), date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap() },
///     AttendanceEntry { employee_id: "2".into(), date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap() },
/// ];
/// let tallies = tally_attendance(&entries, "Jan".parse::<PayMonth>().unwrap());
/// assert_eq!(tallies.len(), 1);
/// assert_eq!(tallies[0].present_days, 2);
/// ```
pub fn tally_attendance(entries: &[AttendanceEntry], month: PayMonth) -> Vec<AttendanceTally> {
    let mut counts: BTreeMap<&str, u32> = BTreeMap::new();

    for entry in entries.iter().filter(|e| e.month() == month) {
        *counts.entry(entry.employee_id.as_str()).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(employee_id, present_days)| AttendanceTally {
            employee_id: employee_id.to_string(),
            month,
            present_days,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(employee_id: &str, month: u32, day: u32) -> AttendanceEntry {
        AttendanceEntry {
            employee_id: employee_id.to_string(),
            date: NaiveDate::from_ymd_opt(2024, month, day).unwrap(),
        }
    }

    fn month(label: &str) -> PayMonth {
        label.parse().unwrap()
    }

    #[test]
    fn test_counts_per_employee() {
        let entries = vec![
            entry("2", 3, 1),
            entry("1", 3, 1),
            entry("2", 3, 2),
            entry("2", 3, 3),
        ];
        let tallies = tally_attendance(&entries, month("Mar"));

        assert_eq!(tallies.len(), 2);
        assert_eq!(tallies[0].employee_id, "1");
        assert_eq!(tallies[0].present_days, 1);
        assert_eq!(tallies[1].employee_id, "2");
        assert_eq!(tallies[1].present_days, 3);
    }

    #[test]
    fn test_other_months_are_ignored() {
        let entries = vec![entry("1", 3, 31), entry("1", 4, 1)];
        let tallies = tally_attendance(&entries, month("Apr"));

        assert_eq!(tallies.len(), 1);
        assert_eq!(tallies[0].present_days, 1);
        assert_eq!(tallies[0].month, month("Apr"));
    }

    #[test]
    fn test_full_month_of_marks() {
        let entries: Vec<_> = (1..=25).map(|day| entry("9", 5, day)).collect();
        let tallies = tally_attendance(&entries, month("May"));

        assert!(tallies[0].is_full_month());
    }

    #[test]
    fn test_no_entries_gives_no_tallies() {
        assert!(tally_attendance(&[], month("Jan")).is_empty());
    }
}
