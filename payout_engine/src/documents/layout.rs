use nps_common::format_minor_units;

use crate::engine_api::payout_objects::{fee_percentage, PayoutSummary};

pub const COURTESY_MESSAGE: &str =
    "Courtesy Message: Thank you for being a valued partner. We appreciate your hard work and dedication!";

const TITLE_SIZE: f32 = 25.0;
const BODY_SIZE: f32 = 14.0;
const NOTE_SIZE: f32 = 10.0;
const NOTE_LINE_WIDTH: usize = 90;

/// A single line of text on the summary page.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub size: f32,
    pub bold: bool,
    pub centered: bool,
    /// Extra vertical space above this line, in points
    pub space_before: f32,
}

impl TextLine {
    fn body(text: String) -> Self {
        Self { text, size: BODY_SIZE, bold: false, centered: false, space_before: 0.0 }
    }
}

/// The text content of a payout summary page, top to bottom.
pub fn summary_lines(summary: &PayoutSummary) -> Vec<TextLine> {
    let mut lines = vec![
        TextLine { text: "Payout Summary".into(), size: TITLE_SIZE, bold: true, centered: true, space_before: 0.0 },
        TextLine { space_before: 12.0, ..TextLine::body(format!("Vendor: {}", summary.vendor)) },
        TextLine::body(format!("Total Orders: {}", summary.total_orders)),
        TextLine::body(format!("Total Amount: {}", format_minor_units(summary.total_amount))),
        TextLine::body(format!("Platform Fee ({}%): {}", fee_percentage(), format_minor_units(summary.platform_fee))),
        TextLine::body(format!("Net Payout: {}", format_minor_units(summary.net_payout))),
    ];
    let note = wrap(COURTESY_MESSAGE, NOTE_LINE_WIDTH).into_iter().enumerate().map(|(i, text)| TextLine {
        text,
        size: NOTE_SIZE,
        bold: false,
        centered: false,
        space_before: if i == 0 { 12.0 } else { 0.0 },
    });
    lines.extend(note);
    lines
}

/// Greedy word wrap. Words longer than `width` are kept whole on their own line.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
