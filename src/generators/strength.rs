// src/generators/strength.rs
use std::collections::HashSet;

use crate::models::{CharacterClass, StrengthReport, StrengthTier};

/// Evaluate a password. Pure: the same input always yields the same report.
pub fn evaluate(password: &str) -> StrengthReport {
    let length = password.chars().count();
    let classes: Vec<CharacterClass> = CharacterClass::ALL
        .into_iter()
        .filter(|class| password.chars().any(|c| class.contains(c)))
        .collect();
    let class_count = classes.len();
    let unique_chars = password.chars().collect::<HashSet<_>>().len();

    let tier = tier_for(length, class_count);

    let mut score: usize = 0;
    let mut feedback = Vec::new();

    // Length (up to 40 points)
    if length >= 16 {
        score += 40;
        feedback.push("Good length".to_string());
    } else if length >= 12 {
        score += 30;
        feedback.push("Acceptable length".to_string());
    } else {
        score += 15;
        feedback.push("Too short".to_string());
    }

    // Class variety (up to 40 points)
    score += class_count * 10;
    for class in CharacterClass::ALL {
        if !classes.contains(&class) {
            feedback.push(format!("Add {}", class.describe()));
        }
    }

    // Diversity (up to 20 points)
    if length > 0 {
        score += (unique_chars * 20 / length).min(20);
    }
    if unique_chars * 2 < length {
        feedback.push("Add more variety of characters".to_string());
    }

    StrengthReport {
        length,
        classes,
        class_count,
        unique_chars,
        score: score.min(100) as u8,
        tier,
        feedback,
    }
}

pub fn tier_for(length: usize, class_count: usize) -> StrengthTier {
    if length >= 16 && class_count >= 4 {
        StrengthTier::VeryStrong
    } else if length >= 12 && class_count >= 3 {
        StrengthTier::Strong
    } else if length >= 8 && class_count >= 2 {
        StrengthTier::Moderate
    } else {
        StrengthTier::Weak
    }
}
