use serde::{Deserialize, Serialize};

/// Final summary derived from a finished (or in-progress) game state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub total_carbon_footprint: u32,
    pub total_popularity_score: u32,
    pub total_cost: i32,
    pub average_student_carbon_footprint: u32,
    /// Not clamped; negative when the footprint exceeds the baseline.
    pub percentage_reduction: f64,
    pub reflection_message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflectionTier {
    Champion,
    Great,
    Good,
    AboveAverage,
}

impl ReflectionTier {
    /// Thresholds are inclusive and checked from the top down.
    pub fn from_reduction(percentage_reduction: f64) -> Self {
        if percentage_reduction >= 50.0 {
            ReflectionTier::Champion
        } else if percentage_reduction >= 25.0 {
            ReflectionTier::Great
        } else if percentage_reduction >= 0.0 {
            ReflectionTier::Good
        } else {
            ReflectionTier::AboveAverage
        }
    }

    pub fn message(self, rounded_percentage: i64) -> String {
        match self {
            ReflectionTier::Champion => format!(
                "Amazing! You made incredibly thoughtful decisions and reduced your prom's impact by {rounded_percentage}% compared to the average student! You're a sustainability champion!"
            ),
            ReflectionTier::Great => format!(
                "Great job! You made thoughtful decisions and reduced your prom's impact by {rounded_percentage}% compared to the average student. Every choice matters!"
            ),
            ReflectionTier::Good => format!(
                "Good effort! You reduced your prom's impact by {rounded_percentage}% compared to the average student. There's always room to improve!"
            ),
            ReflectionTier::AboveAverage => "Your prom choices had a higher environmental impact than average. Consider more sustainable options next time - every small change helps!".to_string(),
        }
    }
}

/// Letter grade shown on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarbonGrade {
    APlus,
    A,
    B,
    C,
    D,
}

impl CarbonGrade {
    pub fn from_footprint(carbon_footprint: u32) -> Self {
        match carbon_footprint {
            0..=20 => CarbonGrade::APlus,
            21..=40 => CarbonGrade::A,
            41..=60 => CarbonGrade::B,
            61..=80 => CarbonGrade::C,
            _ => CarbonGrade::D,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CarbonGrade::APlus => "A+",
            CarbonGrade::A => "A",
            CarbonGrade::B => "B",
            CarbonGrade::C => "C",
            CarbonGrade::D => "D",
        }
    }
}

/// Traffic-light band for the running stats panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatBand {
    Good,
    Caution,
    Poor,
}

impl StatBand {
    pub fn for_carbon(carbon_footprint: u32) -> Self {
        match carbon_footprint {
            0..=20 => StatBand::Good,
            21..=50 => StatBand::Caution,
            _ => StatBand::Poor,
        }
    }

    pub fn for_budget(budget_remaining: i32) -> Self {
        if budget_remaining >= 200 {
            StatBand::Good
        } else if budget_remaining >= 100 {
            StatBand::Caution
        } else {
            StatBand::Poor
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflection_thresholds_are_inclusive() {
        assert_eq!(ReflectionTier::from_reduction(50.0), ReflectionTier::Champion);
        assert_eq!(ReflectionTier::from_reduction(49.999), ReflectionTier::Great);
        assert_eq!(ReflectionTier::from_reduction(25.0), ReflectionTier::Great);
        assert_eq!(ReflectionTier::from_reduction(24.9), ReflectionTier::Good);
        assert_eq!(ReflectionTier::from_reduction(0.0), ReflectionTier::Good);
        assert_eq!(ReflectionTier::from_reduction(-0.1), ReflectionTier::AboveAverage);
    }

    #[test]
    fn reflection_message_interpolates_percentage() {
        let msg = ReflectionTier::Great.message(33);
        assert!(msg.starts_with("Great job!"));
        assert!(msg.contains("by 33% compared"));

        let msg = ReflectionTier::AboveAverage.message(-40);
        assert!(!msg.contains('%'));
    }

    #[test]
    fn grade_boundaries() {
        assert_eq!(CarbonGrade::from_footprint(20).label(), "A+");
        assert_eq!(CarbonGrade::from_footprint(21).label(), "A");
        assert_eq!(CarbonGrade::from_footprint(40).label(), "A");
        assert_eq!(CarbonGrade::from_footprint(60).label(), "B");
        assert_eq!(CarbonGrade::from_footprint(80).label(), "C");
        assert_eq!(CarbonGrade::from_footprint(81).label(), "D");
    }

    #[test]
    fn stat_bands() {
        assert_eq!(StatBand::for_carbon(20), StatBand::Good);
        assert_eq!(StatBand::for_carbon(50), StatBand::Caution);
        assert_eq!(StatBand::for_carbon(51), StatBand::Poor);

        assert_eq!(StatBand::for_budget(200), StatBand::Good);
        assert_eq!(StatBand::for_budget(100), StatBand::Caution);
        assert_eq!(StatBand::for_budget(-5), StatBand::Poor);
    }
}
