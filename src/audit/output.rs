use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::audit::evaluation::AuditSummary;
use crate::error::Result;

/// Round a float to n decimal places.
fn truncate(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Write one row per audited plan to a CSV file.
pub fn write_csv(summary: &AuditSummary, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "run",
        "weeks",
        "lunch_items",
        "dinner_items",
        "avg_cooking_minutes",
        "fish_first_weeks",
        "protein_repeat_weeks",
        "uncovered_dinner_days",
    ])?;

    for m in &summary.runs {
        wtr.write_record([
            m.run.to_string(),
            m.weeks.to_string(),
            m.lunch_items.to_string(),
            m.dinner_items.to_string(),
            format!("{:.1}", m.avg_cooking_minutes),
            m.fish_first_weeks.to_string(),
            m.protein_repeat_weeks.to_string(),
            m.uncovered_dinner_days.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the aggregate figures and pick counts to a JSON file.
pub fn write_summary_json(summary: &AuditSummary, path: &Path) -> Result<()> {
    let json = serde_json::json!({
        "iterations": summary.iterations,
        "seed": summary.seed,
        "metrics": {
            "avg_cooking_minutes": truncate(summary.avg_cooking_minutes, 1),
            "avg_lunch_items": truncate(summary.avg_lunch_items, 2),
            "avg_dinner_items": truncate(summary.avg_dinner_items, 2),
            "configured_dinners": summary.configured_dinners,
            "fish_first_share": truncate(summary.fish_first_share, 3),
            "protein_repeat_weeks": summary.protein_repeat_weeks,
            "uncovered_dinner_days": summary.uncovered_dinner_days,
        },
        "picks": summary.pick_counts.iter().map(|(id, count)| {
            serde_json::json!({ "recipe": id, "count": count })
        }).collect::<Vec<_>>(),
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}

/// Print the aggregate figures.
pub fn print_summary(summary: &AuditSummary) {
    println!(
        "\n=== Audit of {} plans (seed {}) ===\n",
        summary.iterations, summary.seed
    );
    println!("Avg cooking time/week: {:.1} min", summary.avg_cooking_minutes);
    println!("Avg lunch batches:     {:.2} per week", summary.avg_lunch_items);
    println!(
        "Avg dinner batches:    {:.2} per week ({} configured)",
        summary.avg_dinner_items, summary.configured_dinners
    );
    println!("Fish-first weeks:      {:.1}%", summary.fish_first_share * 100.0);
    println!("Protein repeat weeks:  {}", summary.protein_repeat_weeks);
    println!("Uncovered dinner days: {}", summary.uncovered_dinner_days);
}

/// Print the k most picked recipes.
pub fn print_top_recipes(summary: &AuditSummary, k: usize) {
    let total: usize = summary.pick_counts.iter().map(|(_, c)| c).sum();

    println!(
        "\n=== Top {} Recipes (by picks) ===\n",
        k.min(summary.pick_counts.len())
    );
    for (i, (id, count)) in summary.pick_counts.iter().take(k).enumerate() {
        let share = if total > 0 {
            *count as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        println!("#{}: {} picked {} times ({:.1}%)", i + 1, id, count, share);
    }
    println!();
}
