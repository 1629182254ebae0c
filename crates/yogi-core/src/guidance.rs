//! Fixed practice guidance shown alongside every routine.

use crate::models::TimeOfDay;

/// General tips, as (headline, detail) pairs.
pub const PRACTICE_TIPS: [(&str, &str); 5] = [
    ("Breathe deeply", "through your nose throughout the practice"),
    ("Listen to your body", "and modify poses as needed"),
    ("Use props", "like blocks, straps, or blankets for support"),
    ("Stay hydrated", "before and after practice"),
    ("Create space", "with minimal distractions"),
];

impl TimeOfDay {
    /// One-line emphasis for a practice at this time of day.
    pub const fn practice_note(&self) -> &'static str {
        match self {
            Self::Morning => {
                "Morning practice: Focus on energizing poses and gentle stretches to wake up the body"
            }
            Self::Midday => "Midday practice: Balance energy with grounding poses",
            Self::Evening => {
                "Evening practice: Emphasize relaxation and gentle movements to wind down"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_time_of_day_has_its_own_note() {
        for tod in TimeOfDay::ALL {
            assert!(
                tod.practice_note().starts_with(tod.as_str()),
                "note for {tod} should lead with its name"
            );
        }
    }

    #[test]
    fn five_tips() {
        assert_eq!(PRACTICE_TIPS.len(), 5);
        assert_eq!(PRACTICE_TIPS[0].0, "Breathe deeply");
    }
}
