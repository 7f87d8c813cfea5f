//! printpdf back end
//!
//! Converts the top-left millimetre coordinates used by the layout code into PDF
//! points with a bottom-left origin. Card text is written with the bundled font
//! programs registered as embedded fonts, so any glyph the face carries is encoded by
//! glyph id rather than through a single-byte encoding.

use log::debug;
use printpdf::{
    Color as PdfColor, FontId, Line, LineDashPattern, LinePoint, Mm, Op, PaintMode,
    PdfDocument, PdfPage, PdfSaveOptions, Point, Polygon, PolygonRing, Pt, Rgb, TextItem,
    WindingOrder,
};

use crate::constants::{BEZIER_CIRCLE_FACTOR, mm_to_pt};
use crate::layout::{Corner, Rect};
use crate::types::{Color, FlashcardError, FontFamily, Result};

use super::{DashStyle, DocumentSink, TextBlock};

struct PageInProgress {
    width_mm: f32,
    height_mm: f32,
    ops: Vec<Op>,
}

impl PageInProgress {
    /// Page-space point for a top-left based millimetre coordinate
    fn point(&self, x_mm: f32, y_mm: f32) -> Point {
        Point {
            x: Mm(x_mm).into_pt(),
            y: Mm(self.height_mm - y_mm).into_pt(),
        }
    }

    fn corner_point(&self, x_mm: f32, y_mm: f32) -> LinePoint {
        LinePoint {
            p: self.point(x_mm, y_mm),
            bezier: false,
        }
    }

    fn control_point(&self, x_mm: f32, y_mm: f32) -> LinePoint {
        LinePoint {
            p: self.point(x_mm, y_mm),
            bezier: true,
        }
    }

    fn rect_points(&self, rect: &Rect) -> Vec<LinePoint> {
        vec![
            self.corner_point(rect.x, rect.y),
            self.corner_point(rect.right(), rect.y),
            self.corner_point(rect.right(), rect.bottom()),
            self.corner_point(rect.x, rect.bottom()),
        ]
    }

    fn fill(&mut self, points: Vec<LinePoint>, color: Color) {
        self.ops.push(Op::SetFillColor {
            col: pdf_color(color),
        });
        self.ops.push(Op::DrawPolygon {
            polygon: Polygon {
                rings: vec![PolygonRing { points }],
                mode: PaintMode::Fill,
                winding_order: WindingOrder::NonZero,
            },
        });
    }
}

/// Renders cards into a printpdf document
pub struct PdfSink {
    doc: PdfDocument,
    pages: Vec<PdfPage>,
    fonts: Vec<(FontFamily, FontId)>,
    current: Option<PageInProgress>,
}

impl PdfSink {
    pub fn new(title: &str) -> Self {
        Self {
            doc: PdfDocument::new(title),
            pages: Vec::new(),
            fonts: Vec::new(),
            current: None,
        }
    }

    /// Font resource for `family`, registered on first use
    fn font_id(&mut self, family: FontFamily) -> Result<FontId> {
        if let Some((_, id)) = self.fonts.iter().find(|(f, _)| *f == family) {
            return Ok(id.clone());
        }

        let font = family.parsed_font()?;
        let id = self.doc.add_font(&font);
        debug!("Registered font {:?}", family);
        self.fonts.push((family, id.clone()));
        Ok(id)
    }

    fn page(&mut self) -> Result<&mut PageInProgress> {
        self.current
            .as_mut()
            .ok_or_else(|| FlashcardError::Pdf("Drawing before the first page".to_string()))
    }

    fn flush_page(&mut self) {
        if let Some(page) = self.current.take() {
            self.pages.push(PdfPage::new(
                Mm(page.width_mm),
                Mm(page.height_mm),
                page.ops,
            ));
        }
    }
}

impl DocumentSink for PdfSink {
    type Output = Vec<u8>;

    fn begin_page(&mut self, width_mm: f32, height_mm: f32) -> Result<()> {
        self.flush_page();
        self.current = Some(PageInProgress {
            width_mm,
            height_mm,
            ops: Vec::new(),
        });
        Ok(())
    }

    fn fill_rect(&mut self, rect: &Rect, color: Color) -> Result<()> {
        let page = self.page()?;
        let points = page.rect_points(rect);
        page.fill(points, color);
        Ok(())
    }

    fn fill_quarter_circle(
        &mut self,
        cell: &Rect,
        corner: Corner,
        radius_mm: f32,
        color: Color,
    ) -> Result<()> {
        let page = self.page()?;
        let r = radius_mm.min(cell.width).min(cell.height);
        let k = r * BEZIER_CIRCLE_FACTOR;
        let (cx, cy) = corner.point_of(cell);

        // Direction from the corner into the cell along each axis
        let (dx, dy) = match corner {
            Corner::TopLeft => (1.0, 1.0),
            Corner::TopRight => (-1.0, 1.0),
            Corner::BottomLeft => (1.0, -1.0),
            Corner::BottomRight => (-1.0, -1.0),
        };

        let points = vec![
            page.corner_point(cx, cy),
            page.corner_point(cx + dx * r, cy),
            page.control_point(cx + dx * r, cy + dy * k),
            page.control_point(cx + dx * k, cy + dy * r),
            page.corner_point(cx, cy + dy * r),
        ];
        page.fill(points, color);
        Ok(())
    }

    fn stroke_dashed_rect(&mut self, rect: &Rect, style: &DashStyle) -> Result<()> {
        let page = self.page()?;
        let dash = mm_to_pt(style.dash_mm).round().max(1.0) as i64;
        let points = page.rect_points(rect);

        page.ops.push(Op::SetOutlineColor {
            col: pdf_color(style.color),
        });
        page.ops.push(Op::SetOutlineThickness {
            pt: Mm(style.line_width_mm).into_pt(),
        });
        page.ops.push(Op::SetLineDashPattern {
            dash: LineDashPattern {
                dash_1: Some(dash),
                gap_1: Some(dash),
                ..Default::default()
            },
        });
        page.ops.push(Op::DrawLine {
            line: Line {
                points,
                is_closed: true,
            },
        });
        page.ops.push(Op::SetLineDashPattern {
            dash: LineDashPattern::default(),
        });
        Ok(())
    }

    fn draw_text(&mut self, block: &TextBlock) -> Result<()> {
        let font = self.font_id(block.family)?;
        let widths = block.family.glyph_widths();
        let page = self.page()?;

        page.ops.push(Op::SetFillColor {
            col: pdf_color(block.color),
        });

        for (line, baseline) in block.lines.iter().zip(block.baselines()) {
            let width_mm = widths.text_width_mm(line, block.size_pt);
            let pos = page.point(block.center_x_mm - width_mm / 2.0, baseline);

            page.ops.push(Op::StartTextSection);
            page.ops.push(Op::SetTextCursor { pos });
            page.ops.push(Op::SetFontSize {
                font: font.clone(),
                size: Pt(block.size_pt),
            });
            page.ops.push(Op::WriteText {
                items: vec![TextItem::Text(line.clone())],
                font: font.clone(),
            });
            page.ops.push(Op::EndTextSection);
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Self::Output> {
        self.flush_page();
        self.doc.pages = self.pages;

        let mut warnings = Vec::new();
        let bytes = self.doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            debug!("PDF writer reported {} warnings", warnings.len());
        }

        Ok(bytes)
    }
}

fn pdf_color(color: Color) -> PdfColor {
    PdfColor::Rgb(Rgb::new(
        f32::from(color.r) / 255.0,
        f32::from(color.g) / 255.0,
        f32::from(color.b) / 255.0,
        None,
    ))
}
