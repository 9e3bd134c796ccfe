use std::fmt::Write as _;

use serde::Serialize;
use serde_json::Value;
use sio_core::StudyPlan;

use crate::cli::OutputFormat;

const EMPTY_PLAN_HINT: &str =
    "No tasks were returned. Try refining your goal (e.g., add timeframe, topic, or level).";

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Text => render_text(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Render a study plan; the text view is a day-by-day listing.
pub fn render_plan(plan: &StudyPlan, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(plan_text(plan)),
        OutputFormat::Json | OutputFormat::Raw => render(plan, format),
    }
}

pub fn output_plan(plan: &StudyPlan, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render_plan(plan, format)?;
    println!("{rendered}");
    Ok(())
}

fn plan_text(plan: &StudyPlan) -> String {
    let mut out = String::new();
    if let Some(week_start) = &plan.week_start {
        let _ = writeln!(out, "Week of {week_start}");
    }
    if let Some(goals) = &plan.goals {
        let _ = writeln!(out, "Goals: {goals}");
    }
    if !out.is_empty() {
        out.push('\n');
    }

    if plan.is_empty() {
        out.push_str(EMPTY_PLAN_HINT);
        return out;
    }

    for (index, task) in plan.tasks.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let day = if task.day.is_empty() { "-" } else { &task.day };
        let _ = writeln!(out, "{day}  {}", task.title);
        for step in &task.steps {
            let _ = writeln!(out, "  - {step}");
        }
    }
    out.truncate(out.trim_end().len());
    out
}

fn render_text<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    Ok(match value {
        Value::Array(items) if items.is_empty() => String::from("(no rows)"),
        Value::Array(items) => items
            .iter()
            .map(text_block)
            .collect::<Vec<_>>()
            .join("\n\n"),
        other => text_block(&other),
    })
}

fn text_block(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let mut entries = map.iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            entries
                .into_iter()
                .map(|(key, value)| format!("{key}: {}", value_to_cell(value)))
                .collect::<Vec<_>>()
                .join("\n")
        }
        scalar => value_to_cell(scalar),
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
