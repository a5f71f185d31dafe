use crate::models::Availability;

/// Fraction of the requester's weekly slots that the volunteer also covers
///
/// Overlap is requester-centric: only days in the requester's map count
/// toward the denominator, and slot labels must match exactly.
///
/// # Returns
/// A value in [0, 1]; 0 when the requester declares no slots at all
pub fn availability_overlap(volunteer: &Availability, requester: &Availability) -> f64 {
    let mut total = 0usize;
    let mut matched = 0usize;

    for (day, slots) in requester {
        total += slots.len();

        if let Some(volunteer_slots) = volunteer.get(day) {
            matched += slots
                .iter()
                .filter(|slot| volunteer_slots.contains(*slot))
                .count();
        }
    }

    if total == 0 {
        return 0.0;
    }

    matched as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn availability(days: &[(&str, &[&str])]) -> Availability {
        days.iter()
            .map(|(day, slots)| {
                (
                    day.to_string(),
                    slots.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_requester_is_zero() {
        let volunteer = availability(&[("Monday", &["morning"])]);
        assert_eq!(availability_overlap(&volunteer, &Availability::new()), 0.0);

        let requester = availability(&[("Monday", &[])]);
        assert_eq!(availability_overlap(&volunteer, &requester), 0.0);
    }

    #[test]
    fn test_full_coverage_is_one() {
        let volunteer = availability(&[
            ("Monday", &["morning", "evening"]),
            ("Tuesday", &["afternoon"]),
        ]);
        let requester = availability(&[("Monday", &["morning"]), ("Tuesday", &["afternoon"])]);

        assert_eq!(availability_overlap(&volunteer, &requester), 1.0);
    }

    #[test]
    fn test_partial_overlap() {
        let volunteer = availability(&[("Monday", &["morning"])]);
        let requester = availability(&[
            ("Monday", &["morning", "evening"]),
            ("Friday", &["morning", "evening"]),
        ]);

        assert!((availability_overlap(&volunteer, &requester) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_volunteer_only_days_ignored() {
        let volunteer = availability(&[("Monday", &["morning"]), ("Sunday", &["morning", "evening"])]);
        let requester = availability(&[("Monday", &["morning", "evening"])]);

        assert!((availability_overlap(&volunteer, &requester) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_slot_labels_compared_exactly() {
        let volunteer = availability(&[("Monday", &["Morning"])]);
        let requester = availability(&[("Monday", &["morning"])]);

        assert_eq!(availability_overlap(&volunteer, &requester), 0.0);
    }
}
