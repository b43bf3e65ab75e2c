use serde_json::json;

use crate::app::palette::{bar_percent, ColorClass, ANSI_RESET};
use crate::config::DisplayConfig;
use crate::core::codec::to_severity;
use crate::domain::model::{Direction, Row, SummaryStats};
use crate::utils::error::Result;

/// Distribution chart order, highest severity first.
const CHART_ORDER: [i8; 5] = [2, 1, 0, -1, -2];

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub color: bool,
    pub bar_width: usize,
    pub chart_glyph: String,
}

impl RenderOptions {
    pub fn new(display: &DisplayConfig, no_color: bool) -> Self {
        Self {
            color: display.color() && !no_color,
            bar_width: display.bar_width(),
            chart_glyph: display.chart_glyph(),
        }
    }
}

fn paint(text: &str, class: ColorClass, opts: &RenderOptions) -> String {
    if opts.color {
        format!("{}{}{}", class.ansi(), text, ANSI_RESET)
    } else {
        text.to_string()
    }
}

fn bar(severity: i8, opts: &RenderOptions) -> String {
    let filled = bar_percent(severity) as usize * opts.bar_width / 100;
    let glyph = &opts.chart_glyph;
    let body = format!(
        "{}{}",
        glyph.repeat(filled),
        "░".repeat(opts.bar_width - filled)
    );
    paint(&body, ColorClass::for_severity(severity), opts)
}

/// One progress-bar line per neurotransmitter, in row order.
pub fn bar_lines(row: &Row, opts: &RenderOptions) -> Vec<String> {
    row.iter()
        .map(|(nt, direction)| {
            let severity = to_severity(*direction);
            format!("{:>14}  {} {}", nt.name(), bar(severity, opts), direction)
        })
        .collect()
}

/// Summary metrics plus the level-distribution chart.
pub fn summary_lines(stats: &SummaryStats, opts: &RenderOptions) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Increased: {}   Decreased: {}   Neutral: {}",
            stats.increased, stats.decreased, stats.neutral
        ),
        String::new(),
        "Level Distribution".to_string(),
    ];
    for severity in CHART_ORDER {
        // Safe: CHART_ORDER only holds in-range severities.
        let count = stats.bucket_count(severity).unwrap_or(0);
        let glyph = match severity {
            2 => "↑↑",
            1 => "↑",
            0 => "→",
            -1 => "↓",
            _ => "↓↓",
        };
        let body = opts.chart_glyph.repeat(count * 3);
        lines.push(format!(
            "{:>3}  {} {}",
            glyph,
            paint(&body, ColorClass::for_severity(severity), opts),
            count
        ));
    }
    lines
}

pub fn legend_lines() -> Vec<String> {
    Direction::ALL
        .iter()
        .rev()
        .map(|direction| format!("{:>3}  {}", direction.glyph(), direction.label()))
        .collect()
}

/// Assemble the full text report for one disorder.
pub fn render_text(
    name: &str,
    description: &str,
    row: &Row,
    stats: &SummaryStats,
    opts: &RenderOptions,
) -> String {
    let mut sections = vec![
        format!("=== {} ===", name),
        description.to_string(),
        String::new(),
        "Neurotransmitter Levels".to_string(),
    ];
    sections.extend(bar_lines(row, opts));
    sections.push(String::new());
    sections.extend(summary_lines(stats, opts));
    sections.push(String::new());
    sections.push("Legend".to_string());
    sections.extend(legend_lines());
    sections.join("\n")
}

/// Machine-readable variant of the report.
pub fn render_json(name: &str, description: &str, row: &Row, stats: &SummaryStats) -> Result<String> {
    let value = json!({
        "disorder": name,
        "description": description,
        "levels": row,
        "summary": stats,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}
