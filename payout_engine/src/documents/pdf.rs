use log::*;
use printpdf::{BuiltinFont, Mm, PdfDocument};

use super::{layout::summary_lines, DocumentRenderer, RenderError};
use crate::engine_api::payout_objects::PayoutSummary;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
const MM_PER_PT: f32 = 0.352_778;
/// Rough average glyph width of Helvetica, as a fraction of the font size
const AVG_GLYPH_WIDTH: f32 = 0.55;
const LINE_SPACING: f32 = 1.5;

/// Renders payout summaries as a single A4 page PDF using the built-in Helvetica fonts.
#[derive(Debug, Clone, Default)]
pub struct PdfRenderer;

impl PdfRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentRenderer for PdfRenderer {
    fn filename(&self) -> &str {
        "payout_summary.pdf"
    }

    fn content_type(&self) -> &str {
        "application/pdf"
    }

    async fn render(&self, summary: &PayoutSummary) -> Result<Vec<u8>, RenderError> {
        let summary = summary.clone();
        let vendor = summary.vendor.clone();
        // printpdf is synchronous and CPU bound, so keep it off the async workers
        let bytes = tokio::task::spawn_blocking(move || render_pdf(&summary))
            .await
            .map_err(|e| RenderError::TaskFailed(e.to_string()))??;
        debug!("📄️ Rendered a {} byte payout summary for {vendor}", bytes.len());
        Ok(bytes)
    }
}

/// Lays out and serialises the summary page.
pub fn render_pdf(summary: &PayoutSummary) -> Result<Vec<u8>, RenderError> {
    let (doc, page, layer) = PdfDocument::new("Payout Summary", Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(|e| RenderError::PdfError(e.to_string()))?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(|e| RenderError::PdfError(e.to_string()))?;
    let canvas = doc.get_page(page).get_layer(layer);

    let mut y = PAGE_HEIGHT - MARGIN;
    for line in summary_lines(summary) {
        y -= (line.space_before + line.size * LINE_SPACING) * MM_PER_PT;
        let x = if line.centered {
            let width = line.text.chars().count() as f32 * line.size * AVG_GLYPH_WIDTH * MM_PER_PT;
            ((PAGE_WIDTH - width) / 2.0).max(MARGIN)
        } else {
            MARGIN
        };
        let font = if line.bold { &bold } else { &regular };
        canvas.use_text(line.text, line.size, Mm(x), Mm(y), font);
    }
    doc.save_to_bytes().map_err(|e| RenderError::PdfError(e.to_string()))
}
