use lopdf::content::{Content, Operation};
use lopdf::{Document as LoDocument, Object};

use search_core::Region;

use super::error::PdfError;

// Width estimate per glyph as a fraction of the font size. A glyph-metric
// walk would be exact; for highlight boxes the average advance is enough.
const GLYPH_WIDTH_FACTOR: f32 = 0.5;
const DEFAULT_FONT_SIZE: f32 = 12.0;

/// One positioned run of text, emitted per show-text operator.
#[derive(Debug, Clone)]
pub struct TextSpan {
    pub text: String,
    pub region: Region,
}

/// Text plus geometry for one page, decoded from its content stream. The
/// page text is the spans joined in emission order; geometry lookup is an
/// exact-substring scan within each span, so a match never crosses a
/// show-text boundary.
pub struct PageLayer {
    spans: Vec<TextSpan>,
    text: String,
}

impl PageLayer {
    pub fn build(doc: &LoDocument, page_id: (u32, u16)) -> Result<Self, PdfError> {
        let data = doc.get_page_content(page_id)?;
        let content = Content::decode(&data)?;
        Ok(Self::from_operations(&content.operations))
    }

    pub fn from_operations(operations: &[Operation]) -> Self {
        let mut spans = Vec::new();
        let mut x = 0.0_f32;
        let mut y = 0.0_f32;
        // Start of the current line; next-line operators return the cursor
        // here rather than to wherever the last show left it.
        let mut line_x = 0.0_f32;
        let mut size = DEFAULT_FONT_SIZE;
        let mut leading = DEFAULT_FONT_SIZE;
        for op in operations {
            match op.operator.as_str() {
                "BT" => {
                    x = 0.0;
                    y = 0.0;
                    line_x = 0.0;
                }
                "Tf" => {
                    if let Some(s) = op.operands.get(1).and_then(number) {
                        size = s;
                        leading = leading.max(s);
                    }
                }
                "TL" => {
                    if let Some(l) = op.operands.first().and_then(number) {
                        leading = l;
                    }
                }
                "Td" => {
                    if let (Some(dx), Some(dy)) = (
                        op.operands.first().and_then(number),
                        op.operands.get(1).and_then(number),
                    ) {
                        line_x += dx;
                        x = line_x;
                        y += dy;
                    }
                }
                "TD" => {
                    if let (Some(dx), Some(dy)) = (
                        op.operands.first().and_then(number),
                        op.operands.get(1).and_then(number),
                    ) {
                        line_x += dx;
                        x = line_x;
                        y += dy;
                        leading = -dy;
                    }
                }
                "Tm" => {
                    if let (Some(e), Some(f)) = (
                        op.operands.get(4).and_then(number),
                        op.operands.get(5).and_then(number),
                    ) {
                        line_x = e;
                        x = e;
                        y = f;
                    }
                }
                "T*" => {
                    y -= leading;
                    x = line_x;
                }
                "Tj" | "'" => {
                    if op.operator == "'" {
                        y -= leading;
                        x = line_x;
                    }
                    if let Some(text) = op.operands.first().and_then(string_operand) {
                        x = push_span(&mut spans, text, x, y, size);
                    }
                }
                "\"" => {
                    y -= leading;
                    x = line_x;
                    if let Some(text) = op.operands.get(2).and_then(string_operand) {
                        x = push_span(&mut spans, text, x, y, size);
                    }
                }
                "TJ" => {
                    if let Some(Object::Array(items)) = op.operands.first() {
                        let mut text = String::new();
                        for item in items {
                            if let Some(part) = string_operand(item) {
                                text.push_str(&part);
                            }
                        }
                        x = push_span(&mut spans, text, x, y, size);
                    }
                }
                _ => {}
            }
        }
        Self::from_spans(spans)
    }

    pub fn from_spans(spans: Vec<TextSpan>) -> Self {
        let mut text = String::new();
        let mut prev_y: Option<f32> = None;
        for span in &spans {
            if span.text.is_empty() {
                continue;
            }
            if !text.is_empty() {
                let same_line = prev_y.is_some_and(|py| (py - span.region.y0).abs() < 0.1);
                text.push(if same_line { ' ' } else { '\n' });
            }
            text.push_str(&span.text);
            prev_y = Some(span.region.y0);
        }
        Self { spans, text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn spans(&self) -> &[TextSpan] {
        &self.spans
    }

    /// Every occurrence of an exact substring, in span emission order.
    /// Regions are proportional horizontal slices of the containing span.
    pub fn locate(&self, needle: &str) -> Vec<Region> {
        let mut out = Vec::new();
        if needle.is_empty() {
            return out;
        }
        let needle_chars = needle.chars().count();
        for span in &self.spans {
            let total_chars = span.text.chars().count();
            if total_chars == 0 {
                continue;
            }
            let per_glyph = span.region.width() / total_chars as f32;
            let mut from = 0;
            while let Some(pos) = span.text[from..].find(needle) {
                let at = from + pos;
                let lead_chars = span.text[..at].chars().count();
                let x0 = span.region.x0 + per_glyph * lead_chars as f32;
                let x1 = x0 + per_glyph * needle_chars as f32;
                out.push(Region::new(x0, span.region.y0, x1, span.region.y1));
                from = at + needle.len();
            }
        }
        out
    }
}

fn push_span(spans: &mut Vec<TextSpan>, text: String, x: f32, y: f32, size: f32) -> f32 {
    if text.is_empty() {
        return x;
    }
    let width = text.chars().count() as f32 * size * GLYPH_WIDTH_FACTOR;
    spans.push(TextSpan {
        text,
        region: Region::new(x, y, x + width, y + size),
    });
    x + width
}

fn number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r as f32),
        _ => None,
    }
}

fn string_operand(obj: &Object) -> Option<String> {
    match obj {
        Object::String(bytes, _) => Some(decode_string_bytes(bytes)),
        _ => None,
    }
}

// UTF-16BE when BOM-prefixed, otherwise byte-per-char (close enough to
// PDFDocEncoding for textual content without consulting font tables).
fn decode_string_bytes(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        bytes.iter().map(|&b| b as char).collect()
    }
}
