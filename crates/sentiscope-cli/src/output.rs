//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use sentiscope_domain::ColorBucket;
use sentiscope_sdk::{DisplayResult, ErrorInfo, ExampleSet, RequestState, SentimentScale};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Width of a 100% chart bar, in cells
const BAR_WIDTH: usize = 40;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Render a request state.
    pub fn format_state(&self, state: &RequestState, detailed: bool) -> Result<String> {
        match state {
            RequestState::Idle => Ok(self.info("No analysis yet.")),
            RequestState::Loading => Ok(self.info("Analyzing...")),
            RequestState::Success(result) => self.format_result(result, detailed),
            RequestState::Failed(info) => self.format_failure(info),
        }
    }

    /// Render one analysis result.
    pub fn format_result(&self, result: &DisplayResult, detailed: bool) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Quiet => Ok(format!("{} {}", result.score.signed(), result.label)),
            OutputFormat::Table => Ok(self.format_result_card(result, detailed)),
        }
    }

    /// Render a failed request.
    pub fn format_failure(&self, info: &ErrorInfo) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(info)?),
            _ => Ok(self.error(&info.message)),
        }
    }

    /// Result card, metrics and probability chart.
    fn format_result_card(&self, result: &DisplayResult, detailed: bool) -> String {
        let mut lines = Vec::new();

        let headline = format!(
            "{}  {}  {}",
            result.score_display(),
            result.emoji,
            result.label
        );
        lines.push(self.paint(&headline, result.color_bucket, true));
        lines.push(format!(
            "Confidence: {}%   Category: {}   Scale: 7-Point",
            result.confidence_percentage, result.category
        ));
        lines.push(String::new());
        lines.push("Probability Distribution".to_string());

        let key_width = result.chart.iter().map(|p| p.key.len()).max().unwrap_or(0);
        for point in &result.chart {
            let cells = ((point.probability * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
            let bar = "█".repeat(cells);
            let bar = match point.color {
                Some(bucket) => self.paint(&bar, bucket, false),
                None => bar,
            };
            // pad by cell count; escape codes would throw off a format width
            lines.push(format!(
                "  {:>width$} {}{} {:>5}%",
                point.key,
                bar,
                " ".repeat(BAR_WIDTH - cells),
                point.percentage,
                width = key_width,
            ));
        }

        if detailed {
            lines.push(String::new());
            lines.push(self.format_detailed_table(result));
        }

        lines.join("\n")
    }

    /// 2-decimal probability table.
    fn format_detailed_table(&self, result: &DisplayResult) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Label", "Probability"]);
        for point in &result.chart {
            builder.push_record([
                point.full_label.clone(),
                format!("{}%", point.detailed_percentage),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Render batch results.
    pub fn format_batch(&self, texts: &[String], results: &[DisplayResult]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
            OutputFormat::Quiet => Ok(results
                .iter()
                .map(|r| format!("{} {}", r.score.signed(), r.label))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if results.is_empty() {
                    return Ok(self.warning("No results."));
                }

                let mut builder = Builder::default();
                builder.push_record(["Text", "Score", "Label", "Confidence", "Category"]);
                for (text, result) in texts.iter().zip(results) {
                    builder.push_record([
                        truncate(result.text.as_deref().unwrap_or(text), 48),
                        result.score_display(),
                        format!("{} {}", result.emoji, result.label),
                        format!("{}%", result.confidence_percentage),
                        result.category.to_string(),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Render the example set.
    pub fn format_examples(&self, examples: &ExampleSet) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(examples)?),
            OutputFormat::Quiet => Ok(examples
                .iter()
                .flat_map(|(_, texts)| texts.iter().cloned())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if examples.is_empty() {
                    return Ok(self.warning("No examples available."));
                }

                let mut builder = Builder::default();
                builder.push_record(["Score", "Example"]);
                for (score, texts) in examples.iter() {
                    for text in texts {
                        builder.push_record([format!("{}/3", score), text.clone()]);
                    }
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Render the sentiment scale.
    pub fn format_scale(&self, scale: &SentimentScale) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(scale)?),
            OutputFormat::Quiet => Ok(scale
                .values()
                .map(|entry| entry.label.clone())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if scale.is_empty() {
                    return Ok(
                        self.warning("The service reported an empty scale (model not loaded?).")
                    );
                }

                let mut builder = Builder::default();
                builder.push_record(["Score", "Emoji", "Label"]);
                for (score, entry) in scale {
                    let score = if *score > 0 {
                        format!("+{}", score)
                    } else {
                        score.to_string()
                    };
                    builder.push_record([score, entry.emoji.clone(), entry.label.clone()]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Connectivity banner.
    pub fn health_banner(&self, connected: bool, base_url: &str) -> String {
        if connected {
            self.success(&format!("API connected at {}", base_url))
        } else {
            self.error(&format!(
                "Backend API is not responding at {}. Please ensure the server is running.",
                base_url
            ))
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }

    /// Paint text in a bucket's chart color.
    fn paint(&self, text: &str, bucket: ColorBucket, bold: bool) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        let (r, g, b) = bucket_rgb(bucket);
        let painted = text.truecolor(r, g, b);
        if bold {
            painted.bold().to_string()
        } else {
            painted.to_string()
        }
    }
}

/// RGB triple of a bucket's hex color.
pub fn bucket_rgb(bucket: ColorBucket) -> (u8, u8, u8) {
    let hex = bucket.hex().trim_start_matches('#');
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
    (channel(0), channel(2), channel(4))
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}
