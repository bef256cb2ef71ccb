use hydroloss_core::adjustments::{
    age_adjustment, calculate_adjustments, sweating_adjustment, tachypnea_adjustment,
    temperature_adjustment,
};
use hydroloss_core::losses::calculate_insensible_losses;
use proptest::prelude::*;

proptest! {
    #[test]
    fn total_is_base_plus_adjustments(
        weight in 1.0f64..500.0,
        hours in 1u32..=24,
        temperature in 34.0f64..=42.0,
        rate in 5u32..=50,
        sweating in -5i32..10,
        hydration in 0i32..=1,
        age in 0u32..=120,
    ) {
        let report = calculate_insensible_losses(weight, hours, temperature, rate, sweating, hydration, age);
        let adjustments = &report.adjustments;
        let sum = adjustments.temperature_adjustment
            + adjustments.tachypnea_adjustment
            + adjustments.sweating_adjustment
            + adjustments.hydration_adjustment
            + adjustments.age_adjustment;
        prop_assert_eq!(report.base_loss_ml, 0.5 * weight * hours as f64);
        prop_assert_eq!(report.total_loss_ml, report.base_loss_ml + sum);
    }

    #[test]
    fn adjustments_are_never_negative(
        temperature in 34.0f64..=42.0,
        rate in 0u32..=100,
        sweating in any::<i32>(),
        hydration in any::<i32>(),
        age in 0u32..=150,
    ) {
        let set = calculate_adjustments(temperature, rate, sweating, hydration, age);
        prop_assert_eq!(set.entries().len(), 5);
        for (kind, value) in set.entries() {
            prop_assert!(value >= 0.0, "{} was {}", kind.key(), value);
        }
    }

    #[test]
    fn temperature_adjustment_rises_with_fever(a in 1u32..=50, step in 1u32..=50) {
        let lower = 37.0 + a as f64 * 0.1;
        let higher = lower + step as f64 * 0.1;
        prop_assert!(temperature_adjustment(lower) > 0.0);
        prop_assert!(temperature_adjustment(higher) > temperature_adjustment(lower));
    }

    #[test]
    fn no_temperature_adjustment_without_fever(temperature in 34.0f64..=37.0) {
        prop_assert_eq!(temperature_adjustment(temperature), 0.0);
    }

    #[test]
    fn tachypnea_matches_its_formula(rate in 0u32..=200) {
        let expected = if rate <= 20 { 0.0 } else { (rate - 20) as f64 * 5.0 };
        prop_assert_eq!(tachypnea_adjustment(rate), expected);
    }

    #[test]
    fn sweating_falls_back_to_zero_off_table(grade in any::<i32>()) {
        let expected = match grade {
            0 => 0.0,
            1 => 100.0,
            2 => 200.0,
            3 => 300.0,
            _ => 0.0,
        };
        prop_assert_eq!(sweating_adjustment(grade), expected);
    }

    #[test]
    fn adults_up_to_sixty_five_have_no_age_adjustment(age in 1u32..=65) {
        prop_assert_eq!(age_adjustment(age), 0.0);
    }
}
