// ABOUTME: Integration tests for 4-week box assembly
// ABOUTME: Grid completeness, allergy safety, display defaults, fallback, and repeat spreading
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod common;

use common::{catalog, dish, profile_with_origin};
use mealbox::models::{BoxMeal, Dish, MealSlot, UserProfile, WeeklyBox};
use mealbox_intelligence::{BoxAssembler, ConstantRandom, IntelligenceConfig, SeededRandom};
use std::collections::HashSet;

fn all_meals(boxes: &[WeeklyBox]) -> Vec<&BoxMeal> {
    boxes.iter().flat_map(WeeklyBox::meals).collect()
}

fn distinct_dishes(boxes: &[WeeklyBox]) -> usize {
    all_meals(boxes)
        .iter()
        .map(|meal| meal.dish_id.as_str())
        .collect::<HashSet<_>>()
        .len()
}

// ============================================================================
// Grid shape
// ============================================================================

#[test]
fn test_box_has_112_complete_meals() {
    common::init_test_logging();
    let assembler = BoxAssembler::default();
    let profile = profile_with_origin("Italienne");

    for seed in [1, 7, 99] {
        let boxes = assembler.assemble(&catalog(30), Some(&profile), &mut SeededRandom::new(seed));
        assert_eq!(boxes.len(), 4);
        for (index, weekly_box) in boxes.iter().enumerate() {
            assert_eq!(usize::from(weekly_box.week), index + 1);
            assert_eq!(weekly_box.days.len(), 7);
            for day in &weekly_box.days {
                assert_eq!(day.meals.len(), 4);
                let slots: Vec<MealSlot> = day.meals.iter().map(|meal| meal.slot).collect();
                assert_eq!(slots, MealSlot::ALL);
            }
        }

        let meals = all_meals(&boxes);
        assert_eq!(meals.len(), 112);
        for meal in &meals {
            assert!(!meal.name.is_empty());
            assert!(!meal.cooking_time.is_empty());
            assert!(meal.calories > 0.0);
            assert!(!meal.image.is_empty());
            assert!(!meal.match_reason.is_empty());
        }
    }
}

#[test]
fn test_meal_ids_follow_the_grid() {
    let boxes = BoxAssembler::default().assemble(&catalog(10), None, &mut SeededRandom::new(3));
    let ids: HashSet<&str> = all_meals(&boxes).iter().map(|meal| meal.id.as_str()).collect();
    assert_eq!(ids.len(), 112);
    assert!(ids.contains("w1-d1-breakfast"));
    assert!(ids.contains("w4-d7-dinner"));
    assert_eq!(boxes[1].day(3).unwrap().meal(MealSlot::Snack).unwrap().id, "w2-d3-snack");
}

#[test]
fn test_empty_catalog_yields_no_box() {
    let boxes = BoxAssembler::default().assemble(&[], None, &mut SeededRandom::new(1));
    assert!(boxes.is_empty());
}

#[test]
fn test_single_dish_fills_every_cell() {
    let only = vec![dish("solo", "Couscous", "Plat", "Marocaine", 400.0)];
    let boxes = BoxAssembler::default().assemble(&only, None, &mut SeededRandom::new(5));
    let meals = all_meals(&boxes);
    assert_eq!(meals.len(), 112);
    assert!(meals.iter().all(|meal| meal.name == "Couscous"));
}

// ============================================================================
// Allergy safety
// ============================================================================

#[test]
fn test_allergen_never_appears_in_box() {
    let mut dishes = catalog(12);
    dishes.push(dish("peanut", "Poulet aux arachides", "Plat", "Thaïlandaise", 550.0));
    let profile = UserProfile {
        allergies: "arachide".into(),
        ..UserProfile::default()
    };

    for seed in 0..5 {
        let boxes =
            BoxAssembler::default().assemble(&dishes, Some(&profile), &mut SeededRandom::new(seed));
        assert_eq!(all_meals(&boxes).len(), 112);
        assert!(all_meals(&boxes)
            .iter()
            .all(|meal| meal.name != "Poulet aux arachides"));
    }
}

#[test]
fn test_all_excluded_catalog_falls_back_to_unfiltered() {
    let dishes = vec![
        dish("1", "Riz au lait", "Dessert", "Française", 320.0),
        dish("2", "Gratin au lait", "Plat", "Française", 600.0),
    ];
    let profile = UserProfile {
        allergies: "lait".into(),
        ..UserProfile::default()
    };

    let boxes = BoxAssembler::default().assemble(&dishes, Some(&profile), &mut SeededRandom::new(1));
    assert_eq!(all_meals(&boxes).len(), 112);

    let mut strict = IntelligenceConfig::default();
    strict.layout.fallback_to_unfiltered = false;
    let boxes =
        BoxAssembler::new(&strict).assemble(&dishes, Some(&profile), &mut SeededRandom::new(1));
    assert!(boxes.is_empty());
}

// ============================================================================
// Display defaults and presentation
// ============================================================================

#[test]
fn test_missing_fields_degrade_to_defaults() {
    let bare = vec![Dish::new("bare", "Velouté de potiron", "Soupe", "")];
    let boxes = BoxAssembler::default().assemble(&bare, None, &mut ConstantRandom::zero());
    let meal = boxes[0].days[0].meals[0].clone();

    assert_eq!(meal.cooking_time, "20 min");
    assert!((meal.calories - 450.0).abs() < f64::EPSILON);
    assert!(meal.image.starts_with("https://placehold.co/"));
    assert!(meal.image.ends_with("Velout%C3%A9%20de%20potiron"));
}

#[test]
fn test_catalog_values_are_kept() {
    let rich = vec![dish("1", "Tajine", "Plat", "Marocaine", 520.0)
        .with_cooking_time("1 h 30")
        .with_image_url("https://img.example/tajine.jpg")
        .with_recipe("Mijoter longuement.")];
    let boxes = BoxAssembler::default().assemble(&rich, None, &mut ConstantRandom::zero());
    let meal = &boxes[2].days[4].meals[3];

    assert_eq!(meal.cooking_time, "1 h 30");
    assert!((meal.calories - 520.0).abs() < f64::EPSILON);
    assert_eq!(meal.image, "https://img.example/tajine.jpg");
    assert_eq!(meal.recipe.as_deref(), Some("Mijoter longuement."));
    assert_eq!(meal.dish_id, "1");
}

#[test]
fn test_titles_depend_only_on_profile() {
    let profile = UserProfile {
        main_objective: "prise de masse".into(),
        country: "Liban".into(),
        ..UserProfile::default()
    };
    let assembler = BoxAssembler::default();
    let first = assembler.assemble(&catalog(20), Some(&profile), &mut SeededRandom::new(1));
    let second = assembler.assemble(&catalog(20), Some(&profile), &mut SeededRandom::new(2));

    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.title, b.title);
        assert_eq!(a.theme, b.theme);
    }
    assert!(first[0].title.starts_with("Semaine 1"));
    assert!(first[3].theme.contains("Liban"));
}

// ============================================================================
// Repeat spreading
// ============================================================================

#[test]
fn test_doubling_catalog_never_reduces_variety() {
    let assembler = BoxAssembler::default();
    let profile = profile_with_origin("Française");
    let sizes = [1, 2, 3, 5, 8, 13, 21, 30, 40, 61, 80];

    for size in sizes {
        let small = assembler.assemble(&catalog(size), Some(&profile), &mut ConstantRandom::zero());
        let large =
            assembler.assemble(&catalog(size * 2), Some(&profile), &mut ConstantRandom::zero());
        assert!(
            distinct_dishes(&large) >= distinct_dishes(&small),
            "catalog {size}: {} distinct, doubled: {}",
            distinct_dishes(&small),
            distinct_dishes(&large)
        );

        let cold_small = assembler.assemble(&catalog(size), None, &mut ConstantRandom::zero());
        let cold_large = assembler.assemble(&catalog(size * 2), None, &mut ConstantRandom::zero());
        assert!(distinct_dishes(&cold_large) >= distinct_dishes(&cold_small));
    }
}

#[test]
fn test_short_pool_is_spread_across_weeks() {
    let boxes = BoxAssembler::default().assemble(&catalog(40), None, &mut ConstantRandom::zero());
    // one week covers 28 positions, the weekly offset reaches further
    assert_eq!(distinct_dishes(&boxes[..1]), 28);
    assert!(distinct_dishes(&boxes) > 28);
}
