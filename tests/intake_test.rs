use assert_float_eq::*;

use macro_tracker_rs::catalog::Catalog;
use macro_tracker_rs::error::TrackerError;
use macro_tracker_rs::models::{DailyTotals, Nutrient};
use macro_tracker_rs::state::Session;

#[test]
fn test_add_food_scales_every_catalog_entry() {
    let catalog = Catalog::builtin();

    for (name, fact) in catalog.iter() {
        for grams in [1.0, 37.5, 100.0, 250.0] {
            let mut session = Session::new(&catalog);
            session.add_food(name, grams).unwrap();

            for nutrient in Nutrient::ALL {
                let expected = fact.get(nutrient) * grams / 100.0;
                assert_float_absolute_eq!(session.totals().get(nutrient), expected, 1e-9);
            }
        }
    }
}

#[test]
fn test_banana_example() {
    let catalog = Catalog::builtin();
    let mut session = Session::new(&catalog);
    session.add_food("banana", 200.0).unwrap();

    let totals = session.totals();
    assert_float_absolute_eq!(totals.calories, 178.0, 1e-9);
    assert_float_absolute_eq!(totals.protein, 2.2, 1e-9);
    assert_float_absolute_eq!(totals.carbs, 46.0, 1e-9);
    assert_float_absolute_eq!(totals.fat, 0.6, 1e-9);
    assert_float_absolute_eq!(totals.sugar, 24.0, 1e-9);
}

#[test]
fn test_totals_accumulate_across_foods() {
    let catalog = Catalog::builtin();
    let mut session = Session::new(&catalog);

    session.add_food("nasi lemak", 300.0).unwrap();
    session.add_food("Teh Tarik", 250.0).unwrap();
    session.add_food("roti canai", 100.0).unwrap();

    // 558 + 207.5 + 301
    assert_float_absolute_eq!(session.totals().calories, 1066.5, 1e-9);
    // 6 + 30 + 2
    assert_float_absolute_eq!(session.totals().sugar, 38.0, 1e-9);
    assert_eq!(session.entries().len(), 3);
    assert_eq!(session.entries()[1].food, "teh tarik");
}

#[test]
fn test_zero_and_negative_grams_rejected() {
    let catalog = Catalog::builtin();
    let mut session = Session::new(&catalog);
    session.add_food("egg", 50.0).unwrap();
    let before = *session.totals();

    for grams in [0.0, -0.0, -1.0, -100.0] {
        let err = session.add_food("egg", grams).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidInput(_)));
    }

    assert_eq!(*session.totals(), before);
}

#[test]
fn test_reset_zeroes_totals() {
    let catalog = Catalog::builtin();
    let mut session = Session::new(&catalog);

    session.reset();
    assert_eq!(*session.totals(), DailyTotals::default());

    session.add_food("durian", 400.0).unwrap();
    session.add_food("cendol", 200.0).unwrap();
    session.reset();
    assert_eq!(*session.totals(), DailyTotals::default());
    assert!(session.advice().is_empty());
}
