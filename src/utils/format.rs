// src/utils/format.rs
use crate::models::StrengthReport;

pub const RULE_WIDTH: usize = 50;

// Horizontal separator line
pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn generated_heading(count: usize) -> String {
    format!("Generated {} password(s):", count)
}

// "Strength: Strong (85/100)"
pub fn strength_line(report: &StrengthReport) -> String {
    format!("Strength: {} ({}/100)", report.tier, report.score)
}

pub fn class_summary(report: &StrengthReport) -> String {
    if report.classes.is_empty() {
        return format!("Length {}, no recognised character classes", report.length);
    }
    let names: Vec<String> = report.classes.iter().map(|c| c.to_string()).collect();
    format!(
        "Length {}, {} class(es): {}",
        report.length,
        report.class_count,
        names.join(", ")
    )
}
