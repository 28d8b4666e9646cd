// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF writer — lays out a site-visit report with `lopdf`.
//
// Pages are built as lists of content-stream `Operation`s. Text uses the
// standard Helvetica fonts with WinAnsi encoding, and every evidence photo
// is embedded as its normalized JPEG bytes in a `/DCTDecode` image XObject.

use std::io::Cursor;

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};
use tracing::{debug, info, instrument};
use visita_core::error::{Result, VisitaError};
use visita_core::{PaperSize, PipelineConfig, ReportData};

use super::renderer::DocumentRenderer;
use crate::image::embed::from_embeddable;

const PT_PER_MM: f32 = 72.0 / 25.4;
const MARGIN_MM: f32 = 20.0;
const TITLE_SIZE_PT: f32 = 16.0;
const HEADING_SIZE_PT: f32 = 12.0;
const BODY_SIZE_PT: f32 = 10.0;
const LINE_SPACING: f32 = 1.35;
const SECTION_GAP_PT: f32 = 10.0;

const REGULAR_FONT: &str = "F1";
const BOLD_FONT: &str = "F2";

/// Renders a site-visit report to PDF: header block, narrative sections,
/// then one evidence slot per photo.
pub struct PdfReportWriter {
    /// Paper size for every page.
    paper_size: PaperSize,
    /// Resolution at which evidence photos are placed.
    dpi: f32,
    /// Evidence slots a single document may hold.
    max_images: usize,
}

/// A normalized photo ready to be placed, still in its JPEG encoding.
struct EvidencePhoto {
    jpeg: Vec<u8>,
    width: u32,
    height: u32,
}

impl PdfReportWriter {
    /// Create a new writer targeting the given paper size.
    pub fn new(paper_size: PaperSize) -> Self {
        let defaults = PipelineConfig::default();
        Self {
            paper_size,
            dpi: defaults.pdf_dpi,
            max_images: defaults.max_images_per_document,
        }
    }

    /// Create a new writer defaulting to A4.
    pub fn a4() -> Self {
        Self::new(PaperSize::A4)
    }

    /// Create a writer from the pipeline configuration.
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            paper_size: config.paper_size,
            dpi: config.pdf_dpi,
            max_images: config.max_images_per_document,
        }
    }

    /// Cap the number of evidence slots.
    pub fn with_max_images(mut self, max_images: usize) -> Self {
        self.max_images = max_images;
        self
    }

    /// Paper dimensions in points.
    fn page_dimensions_pt(&self) -> (f32, f32) {
        let (w_mm, h_mm) = self.paper_size.dimensions_mm();
        (w_mm as f32 * PT_PER_MM, h_mm as f32 * PT_PER_MM)
    }

    /// Recover one embedded photo and read its dimensions from the JPEG header.
    fn decode_slot(&self, slot: usize, uri: &str) -> Result<EvidencePhoto> {
        let position = slot + 1;
        let jpeg = from_embeddable(uri)
            .map_err(|err| VisitaError::Render(format!("evidence {position}: {err}")))?;

        let reader = ::image::ImageReader::new(Cursor::new(jpeg.as_slice()))
            .with_guessed_format()
            .map_err(|err| VisitaError::Render(format!("evidence {position}: {err}")))?;
        if reader.format() != Some(::image::ImageFormat::Jpeg) {
            return Err(VisitaError::Render(format!(
                "evidence {position} is not a JPEG image"
            )));
        }
        let (width, height) = reader.into_dimensions().map_err(|err| {
            VisitaError::Render(format!("evidence {position} could not be decoded: {err}"))
        })?;

        Ok(EvidencePhoto {
            jpeg,
            width,
            height,
        })
    }
}

impl DocumentRenderer for PdfReportWriter {
    #[instrument(skip(self, report, images), fields(images = images.len(), visit = report.visit_number))]
    fn render(&self, report: &ReportData, images: &[String]) -> Result<Vec<u8>> {
        require_field("plant_name", &report.plant_name)?;
        require_field("project_id", &report.project_id)?;
        if images.len() > self.max_images {
            return Err(VisitaError::Render(format!(
                "{} evidence photos exceed the limit of {} per document",
                images.len(),
                self.max_images
            )));
        }

        let photos = images
            .iter()
            .enumerate()
            .map(|(slot, uri)| self.decode_slot(slot, uri))
            .collect::<Result<Vec<_>>>()?;

        let (page_w, page_h) = self.page_dimensions_pt();
        info!(paper = ?self.paper_size, "Rendering site visit report");

        let mut layout = Layout::new(page_w, page_h);
        write_header(&mut layout, report);
        write_narrative(&mut layout, report);

        if !photos.is_empty() {
            layout.gap(SECTION_GAP_PT);
            layout.heading(&format!("Evidencia fotográfica ({} fotos)", photos.len()));
            let total = photos.len();
            for (slot, photo) in photos.iter().enumerate() {
                layout.evidence(
                    &format!("Evidencia {} de {}", slot + 1, total),
                    &image_name(slot),
                    (photo.width, photo.height),
                    self.dpi,
                );
            }
        }

        if !report.elaboration_place.trim().is_empty() {
            layout.gap(SECTION_GAP_PT);
            layout.body(&format!(
                "Elaborado en {}, {}",
                report.elaboration_place,
                report.date.as_deref().unwrap_or("-")
            ));
        }

        let pages = layout.finish();
        debug!(pages = pages.len(), "Report layout complete");

        let title = format!("Reporte de visita de obra: {}", report.plant_name);
        build_document(&title, (page_w, page_h), pages, &photos)
    }
}

fn require_field(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(VisitaError::Render(format!("required field {name} is empty")));
    }
    Ok(())
}

fn image_name(slot: usize) -> String {
    format!("Im{}", slot + 1)
}

// -- Document assembly --------------------------------------------------------

/// Serialise laid-out pages plus their shared fonts and photos.
fn build_document(
    title: &str,
    (page_w, page_h): (f32, f32),
    pages: Vec<Vec<Operation>>,
    photos: &[EvidencePhoto],
) -> Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(standard_font("Helvetica"));
    let bold_id = doc.add_object(standard_font("Helvetica-Bold"));

    let mut xobjects = Dictionary::new();
    for (slot, photo) in photos.iter().enumerate() {
        let mut stream = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => Object::Integer(i64::from(photo.width)),
                "Height" => Object::Integer(i64::from(photo.height)),
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => Object::Integer(8),
                "Filter" => "DCTDecode",
            },
            photo.jpeg.clone(),
        );
        // The payload is already JPEG; never deflate it again.
        stream.allows_compression = false;
        let id = doc.add_object(stream);
        xobjects.set(image_name(slot), Object::Reference(id));
    }

    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            REGULAR_FONT => Object::Reference(regular_id),
            BOLD_FONT => Object::Reference(bold_id),
        },
        "XObject" => xobjects,
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations }
            .encode()
            .map_err(|err| VisitaError::Render(format!("content stream encoding failed: {err}")))?;
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "Contents" => Object::Reference(content_id),
            "Resources" => Object::Reference(resources_id),
            "MediaBox" => vec![0.into(), 0.into(), page_w.into(), page_h.into()],
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => Object::Integer(count),
        }),
    );
    let catalog_id: ObjectId = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::String(utf16_text_string(title), StringFormat::Hexadecimal),
        "Producer" => Object::string_literal("visita"),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));
    doc.trailer.set("Info", Object::Reference(info_id));
    doc.compress();

    let mut output = Vec::new();
    doc.save_to(&mut output)
        .map_err(|err| VisitaError::Render(format!("failed to write PDF: {err}")))?;
    Ok(output)
}

fn standard_font(base_font: &str) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    }
}

/// PDF text string in UTF-16BE with a byte-order mark.
fn utf16_text_string(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    bytes
}

// -- Report sections ----------------------------------------------------------

fn write_header(layout: &mut Layout, report: &ReportData) {
    layout.title("REPORTE DE VISITA DE OBRA");
    layout.body(&format!(
        "Visita no. {}   |   Proyecto {}",
        report.visit_number, report.project_id
    ));
    layout.gap(SECTION_GAP_PT);

    let on_schedule = if report.on_schedule { "Sí" } else { "No" };
    let fields: [(&str, &str); 9] = [
        ("Planta", &report.plant_name),
        ("ID de proyecto", &report.project_id),
        ("Ubicación", &report.location),
        ("Responsable interno", &report.internal_responsible),
        ("Responsable de obra", &report.site_responsible),
        ("Fecha", report.date.as_deref().unwrap_or("-")),
        ("Hora de entrada", &report.entry_time),
        ("Hora de salida", &report.exit_time),
        ("Avances conforme a cronograma", on_schedule),
    ];
    for (label, value) in fields {
        layout.body(&format!("{label}: {value}"));
    }
}

fn write_narrative(layout: &mut Layout, report: &ReportData) {
    layout.gap(SECTION_GAP_PT);
    layout.heading("Motivo de la visita");
    layout.body(&report.visit_reason);

    if !report.on_schedule {
        layout.gap(SECTION_GAP_PT);
        layout.heading("Razón por la que no se cumple el cronograma");
        if report.non_conformance_reason.trim().is_empty() {
            layout.body("(no especificada)");
        } else {
            layout.body(&report.non_conformance_reason);
        }
    }

    if !report.agreements.trim().is_empty() {
        layout.gap(SECTION_GAP_PT);
        layout.heading("Acuerdos");
        layout.body(&report.agreements);
    }
}

// -- Flowing page layout ------------------------------------------------------

/// Top-to-bottom flow over as many pages as the content needs.
struct Layout {
    page_h_pt: f32,
    margin_pt: f32,
    usable_w_pt: f32,
    usable_h_pt: f32,
    /// Distance already consumed below the top margin of the current page.
    cursor_pt: f32,
    ops: Vec<Operation>,
    pages: Vec<Vec<Operation>>,
}

impl Layout {
    fn new(page_w_pt: f32, page_h_pt: f32) -> Self {
        let margin_pt = MARGIN_MM * PT_PER_MM;
        Self {
            page_h_pt,
            margin_pt,
            usable_w_pt: page_w_pt - 2.0 * margin_pt,
            usable_h_pt: page_h_pt - 2.0 * margin_pt,
            cursor_pt: 0.0,
            ops: Vec::new(),
            pages: Vec::new(),
        }
    }

    fn break_page(&mut self) {
        let ops = std::mem::take(&mut self.ops);
        self.pages.push(ops);
        self.cursor_pt = 0.0;
    }

    /// Start a new page unless `height_pt` still fits on this one.
    fn ensure_space(&mut self, height_pt: f32) {
        if self.cursor_pt > 0.0 && self.cursor_pt + height_pt > self.usable_h_pt {
            self.break_page();
        }
    }

    fn gap(&mut self, height_pt: f32) {
        self.cursor_pt = (self.cursor_pt + height_pt).min(self.usable_h_pt);
    }

    fn title(&mut self, text: &str) {
        self.text(text, TITLE_SIZE_PT, BOLD_FONT);
    }

    fn heading(&mut self, text: &str) {
        self.text(text, HEADING_SIZE_PT, BOLD_FONT);
    }

    fn body(&mut self, text: &str) {
        self.text(text, BODY_SIZE_PT, REGULAR_FONT);
    }

    /// Word-wrapped text at the current cursor.
    fn text(&mut self, text: &str, size_pt: f32, font: &str) {
        // Average Helvetica glyph width is roughly half the font size.
        let max_chars = ((self.usable_w_pt / (0.5 * size_pt)) as usize).max(1);
        let line_height = size_pt * LINE_SPACING;

        for line in wrap_text(text, max_chars) {
            self.ensure_space(line_height);
            let y_pt = self.page_h_pt - self.margin_pt - self.cursor_pt - size_pt;

            self.ops.push(Operation::new("BT", vec![]));
            self.ops
                .push(Operation::new("Tf", vec![font.into(), size_pt.into()]));
            self.ops
                .push(Operation::new("Td", vec![self.margin_pt.into(), y_pt.into()]));
            self.ops.push(Operation::new(
                "Tj",
                vec![Object::String(encode_win_ansi(&line), StringFormat::Literal)],
            ));
            self.ops.push(Operation::new("ET", vec![]));

            self.cursor_pt += line_height;
        }
    }

    /// A captioned photo, scaled to the usable width and at most half the
    /// usable height, never upscaled, centred horizontally.
    fn evidence(&mut self, caption: &str, name: &str, (px_w, px_h): (u32, u32), dpi: f32) {
        let img_w_pt = px_w as f32 / dpi * 72.0;
        let img_h_pt = px_h as f32 / dpi * 72.0;
        let max_h_pt = self.usable_h_pt / 2.0;
        let scale = (self.usable_w_pt / img_w_pt)
            .min(max_h_pt / img_h_pt)
            .min(1.0);
        let rendered_w_pt = img_w_pt * scale;
        let rendered_h_pt = img_h_pt * scale;

        // Keep caption and photo on the same page.
        let caption_h = BODY_SIZE_PT * LINE_SPACING;
        self.ensure_space(caption_h + rendered_h_pt + SECTION_GAP_PT);
        self.gap(SECTION_GAP_PT);
        self.body(caption);

        let x_offset = self.margin_pt + (self.usable_w_pt - rendered_w_pt) / 2.0;
        let y_offset = self.page_h_pt - self.margin_pt - self.cursor_pt - rendered_h_pt;
        self.ops.push(Operation::new("q", vec![]));
        self.ops.push(Operation::new(
            "cm",
            vec![
                rendered_w_pt.into(),
                0.into(),
                0.into(),
                rendered_h_pt.into(),
                x_offset.into(),
                y_offset.into(),
            ],
        ));
        self.ops
            .push(Operation::new("Do", vec![Object::Name(name.as_bytes().to_vec())]));
        self.ops.push(Operation::new("Q", vec![]));
        self.cursor_pt += rendered_h_pt;
    }

    fn finish(mut self) -> Vec<Vec<Operation>> {
        if !self.ops.is_empty() || self.pages.is_empty() {
            self.break_page();
        }
        self.pages
    }
}

// -- Text helpers -------------------------------------------------------------

/// Transcode to WinAnsi (Windows-1252) for the standard fonts. Characters
/// outside the code page become `?`.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            '\t' => b' ',
            '\u{0020}'..='\u{007E}' | '\u{00A0}'..='\u{00FF}' => ch as u8,
            '\u{20AC}' => 0x80,
            '\u{201A}' => 0x82,
            '\u{0192}' => 0x83,
            '\u{201E}' => 0x84,
            '\u{2026}' => 0x85,
            '\u{2020}' => 0x86,
            '\u{2021}' => 0x87,
            '\u{02C6}' => 0x88,
            '\u{2030}' => 0x89,
            '\u{0160}' => 0x8A,
            '\u{2039}' => 0x8B,
            '\u{0152}' => 0x8C,
            '\u{017D}' => 0x8E,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{02DC}' => 0x98,
            '\u{2122}' => 0x99,
            '\u{0161}' => 0x9A,
            '\u{203A}' => 0x9B,
            '\u{0153}' => 0x9C,
            '\u{017E}' => 0x9E,
            '\u{0178}' => 0x9F,
            _ => b'?',
        })
        .collect()
}

/// Wrap a multi-line string so that no line exceeds `max_width` characters.
///
/// Splits on existing line breaks (`\n` or `\r\n`) first, then performs
/// simple word-wrap within each paragraph. Words longer than `max_width` are
/// force-broken on character boundaries.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut result = Vec::new();

    for paragraph in text.lines() {
        let words: Vec<&str> = paragraph.split_whitespace().collect();
        if words.is_empty() {
            result.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        let mut current_len = 0usize;

        for word in words {
            let word_len = word.chars().count();
            if word_len > max_width {
                if !current_line.is_empty() {
                    result.push(std::mem::take(&mut current_line));
                    current_len = 0;
                }
                let chars: Vec<char> = word.chars().collect();
                let mut chunks = chars.chunks(max_width).peekable();
                while let Some(chunk) = chunks.next() {
                    if chunks.peek().is_some() {
                        result.push(chunk.iter().collect());
                    } else {
                        current_line = chunk.iter().collect();
                        current_len = chunk.len();
                    }
                }
            } else if current_line.is_empty() {
                current_line.push_str(word);
                current_len = word_len;
            } else if current_len + 1 + word_len <= max_width {
                current_line.push(' ');
                current_line.push_str(word);
                current_len += 1 + word_len;
            } else {
                result.push(std::mem::take(&mut current_line));
                current_line.push_str(word);
                current_len = word_len;
            }
        }

        if !current_line.is_empty() {
            result.push(current_line);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::embed::to_embeddable;
    use image::{DynamicImage, Rgb, RgbImage};

    fn report() -> ReportData {
        ReportData {
            plant_name: "Planta Querétaro Ñandú".into(),
            project_id: "NMHJJ".into(),
            location: "Dirección del proyecto".into(),
            internal_responsible: "José Pérez".into(),
            site_responsible: "Juan Pérez".into(),
            visit_number: 33,
            entry_time: "08:09".into(),
            exit_time: "10:09".into(),
            visit_reason: "Revisión de avance".into(),
            on_schedule: false,
            non_conformance_reason: "Retraso en entrega de paneles".into(),
            agreements: "Revisar entrega de materiales la próxima semana".into(),
            date: Some("25/02/2025".into()),
            elaboration_place: "Querétaro".into(),
        }
    }

    fn jpeg_photo(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([90, 140, 200]));
        let mut buffer = std::io::Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut buffer, ::image::ImageFormat::Jpeg)
            .unwrap();
        buffer.into_inner()
    }

    fn embedded_photo(width: u32, height: u32) -> String {
        to_embeddable(&jpeg_photo(width, height))
    }

    fn page_count(pdf: &[u8]) -> usize {
        Document::load_mem(pdf).unwrap().get_pages().len()
    }

    fn image_streams(pdf: &[u8]) -> Vec<(Vec<u8>, Vec<u8>)> {
        let doc = Document::load_mem(pdf).unwrap();
        doc.objects
            .values()
            .filter_map(|obj| obj.as_stream().ok())
            .filter(|stream| {
                stream.dict.get(b"Subtype").and_then(Object::as_name).ok() == Some(b"Image".as_slice())
            })
            .map(|stream| {
                let filter = stream.dict.get(b"Filter").unwrap().as_name().unwrap().to_vec();
                (filter, stream.content.clone())
            })
            .collect()
    }

    #[test]
    fn report_without_photos_fits_one_page() {
        let pdf = PdfReportWriter::a4().render(&report(), &[]).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
        assert_eq!(page_count(&pdf), 1);
    }

    #[test]
    fn accented_fields_survive_as_text() {
        let pdf = PdfReportWriter::a4()
            .render(&report(), &[embedded_photo(40, 30)])
            .unwrap();
        let text = Document::load_mem(&pdf).unwrap().extract_text(&[1]).unwrap();

        for expected in [
            "Planta Querétaro Ñandú",
            "José Pérez",
            "Revisión de avance",
            "Ubicación",
            "Evidencia 1 de 1",
        ] {
            assert!(text.contains(expected), "missing {expected:?} in {text:?}");
        }
    }

    #[test]
    fn normalized_jpeg_is_embedded_unchanged() {
        let photos = [jpeg_photo(120, 80), jpeg_photo(64, 64)];
        let uris: Vec<String> = photos.iter().map(|p| to_embeddable(p)).collect();
        let pdf = PdfReportWriter::a4().render(&report(), &uris).unwrap();

        let streams = image_streams(&pdf);
        assert_eq!(streams.len(), 2);
        for (filter, content) in &streams {
            assert_eq!(filter.as_slice(), b"DCTDecode");
            assert!(photos.iter().any(|p| p == content));
        }
    }

    #[test]
    fn photos_flow_onto_further_pages() {
        let photos: Vec<String> = (0..6).map(|_| embedded_photo(400, 300)).collect();
        let with_photos = PdfReportWriter::a4().render(&report(), &photos).unwrap();
        let without = PdfReportWriter::a4().render(&report(), &[]).unwrap();

        assert!(page_count(&with_photos) >= 3);
        assert!(with_photos.len() > without.len());
    }

    #[test]
    fn missing_plant_name_is_a_render_error() {
        let mut data = report();
        data.plant_name = "  ".into();
        let result = PdfReportWriter::a4().render(&data, &[]);
        assert!(matches!(result, Err(VisitaError::Render(_))));
    }

    #[test]
    fn image_ceiling_is_enforced() {
        let photos: Vec<String> = (0..3).map(|_| embedded_photo(8, 8)).collect();
        let result = PdfReportWriter::a4().with_max_images(2).render(&report(), &photos);
        assert!(matches!(result, Err(VisitaError::Render(_))));
    }

    #[test]
    fn undecodable_slot_names_its_position() {
        let photos = vec![embedded_photo(8, 8), "data:image/jpeg;base64,AAAA".to_string()];
        let err = PdfReportWriter::a4().render(&report(), &photos).unwrap_err();
        assert!(err.to_string().contains("evidence 2"), "{err}");
    }

    #[test]
    fn win_ansi_covers_spanish_letters() {
        assert_eq!(encode_win_ansi("Año"), vec![b'A', 0xF1, b'o']);
        assert_eq!(encode_win_ansi("Ñ€"), vec![0xD1, 0x80]);
        assert_eq!(encode_win_ansi("a\u{4E2D}"), vec![b'a', b'?']);
    }

    #[test]
    fn wrap_respects_width_and_paragraphs() {
        let lines = wrap_text("uno dos tres cuatro\n\ncinco", 9);
        assert_eq!(lines, vec!["uno dos", "tres", "cuatro", "", "cinco"]);
    }

    #[test]
    fn wrap_drops_carriage_returns() {
        let lines = wrap_text("primera línea\r\nsegunda\r\n", 40);
        assert_eq!(lines, vec!["primera línea", "segunda"]);
    }

    #[test]
    fn wrap_breaks_long_words_on_char_boundaries() {
        let lines = wrap_text("ñññññññ", 3);
        assert_eq!(lines, vec!["ñññ", "ñññ", "ñ"]);
    }
}
