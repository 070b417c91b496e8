use crate::model::catalog::Catalog;
use crate::model::game_result::{GameResult, ReflectionTier};
use crate::model::game_state::GameState;

/// Rounds half-way values toward positive infinity, so -2.5 becomes -2.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

pub fn percentage_reduction(carbon_footprint: u32, average: u32) -> f64 {
    let average = f64::from(average);
    (average - f64::from(carbon_footprint)) / average * 100.0
}

pub fn compute_result(state: &GameState, catalog: &Catalog) -> GameResult {
    let average = catalog.average_student_carbon_footprint;
    let reduction = percentage_reduction(state.carbon_footprint, average);
    let reflection_message =
        ReflectionTier::from_reduction(reduction).message(round_half_up(reduction));

    GameResult {
        total_carbon_footprint: state.carbon_footprint,
        total_popularity_score: state.popularity_score,
        total_cost: state.total_cost(catalog.initial_budget),
        average_student_carbon_footprint: average,
        percentage_reduction: reduction,
        reflection_message,
    }
}

/// One-line comparison against the average student, e.g.
/// "You saved 91% less CO₂ than average!".
pub fn comparison_line(result: &GameResult) -> String {
    let magnitude = round_half_up(result.percentage_reduction).abs();
    if result.percentage_reduction >= 0.0 {
        format!("You saved {magnitude}% less CO₂ than average!")
    } else {
        format!("You used {magnitude}% more CO₂ than average!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(carbon: u32, popularity: u32, budget: i32) -> (GameState, Catalog) {
        let catalog = Catalog::builtin().unwrap();
        let mut state = GameState::started(&catalog);
        state.carbon_footprint = carbon;
        state.popularity_score = popularity;
        state.budget_remaining = budget;
        (state, catalog)
    }

    #[test]
    fn green_run_summary() {
        let (state, catalog) = state_with(11, 27, 430);
        let result = compute_result(&state, &catalog);

        assert_eq!(result.total_carbon_footprint, 11);
        assert_eq!(result.total_popularity_score, 27);
        assert_eq!(result.total_cost, 70);
        assert_eq!(result.average_student_carbon_footprint, 120);
        assert!((result.percentage_reduction - 90.8333).abs() < 0.001);
        assert_eq!(
            result.reflection_message,
            "Amazing! You made incredibly thoughtful decisions and reduced your prom's impact by 91% compared to the average student! You're a sustainability champion!"
        );
        assert_eq!(comparison_line(&result), "You saved 91% less CO₂ than average!");
    }

    #[test]
    fn exact_threshold_boundaries() {
        // 60 of 120 is exactly 50%, 90 is 25%, 120 is 0%
        let (state, catalog) = state_with(60, 0, 500);
        assert!(compute_result(&state, &catalog)
            .reflection_message
            .starts_with("Amazing!"));

        let (state, catalog) = state_with(90, 0, 500);
        assert!(compute_result(&state, &catalog)
            .reflection_message
            .starts_with("Great job!"));

        let (state, catalog) = state_with(120, 0, 500);
        let result = compute_result(&state, &catalog);
        assert_eq!(result.percentage_reduction, 0.0);
        assert!(result.reflection_message.starts_with("Good effort!"));
        assert!(result.reflection_message.contains("by 0%"));
    }

    #[test]
    fn above_baseline_is_not_clamped() {
        let (state, catalog) = state_with(123, 33, -250);
        let result = compute_result(&state, &catalog);

        assert!((result.percentage_reduction + 2.5).abs() < 1e-9);
        assert_eq!(result.total_cost, 750);
        assert!(result
            .reflection_message
            .starts_with("Your prom choices had a higher environmental impact"));
        // half-up: round(-2.5) == -2
        assert_eq!(comparison_line(&result), "You used 2% more CO₂ than average!");
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(round_half_up(90.5), 91);
        assert_eq!(round_half_up(90.49), 90);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.51), -3);
    }
}
