// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer — loads configuration, reads report data and photos
// from disk, and drives the assembler.
//
// The assembler is shared behind an `Arc` so the async entry point can move
// it onto the blocking pool while the CLI keeps listening for Ctrl-C.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};
use visita_core::error::{Result, VisitaError};
use visita_core::validation::{parse_report_json, validate_upload};
use visita_core::{
    DocumentArtifact, ImageMediaType, PipelineConfig, PreviewEstimate, RawImage, ReportData,
    ServiceInfo,
};
use visita_document::{PdfReportWriter, ReportAssembler};

/// Shared report-generation services for one CLI invocation.
#[derive(Clone)]
pub struct ReportService {
    assembler: Arc<ReportAssembler<PdfReportWriter>>,
}

impl ReportService {
    /// Build the service from an optional JSON config file plus environment
    /// overrides.
    pub fn init(config_path: Option<&Path>) -> Result<Self> {
        let config = load_config(config_path)?;
        Self::with_config(config)
    }

    pub fn with_config(config: PipelineConfig) -> Result<Self> {
        let writer = PdfReportWriter::from_config(&config);
        let assembler = ReportAssembler::new(config, writer)?;
        info!(
            max_width = assembler.config().max_image_width,
            quality = assembler.config().image_quality,
            "report service initialised"
        );
        Ok(Self {
            assembler: Arc::new(assembler),
        })
    }

    pub fn info(&self) -> ServiceInfo {
        ServiceInfo::from(self.assembler.config())
    }

    /// Normalize, render and write `{filename}.pdf` into `out_dir`.
    pub async fn generate(
        &self,
        report: ReportData,
        images: Vec<RawImage>,
        out_dir: &Path,
    ) -> Result<(DocumentArtifact, PathBuf)> {
        let artifact = Arc::clone(&self.assembler)
            .assemble_async(report, images)
            .await?;
        let path = out_dir.join(artifact.pdf_file_name());
        tokio::fs::write(&path, &artifact.bytes).await?;
        info!(path = %path.display(), bytes = artifact.bytes.len(), "report written");
        Ok((artifact, path))
    }

    pub fn preview(&self, report: &ReportData, sizes: &[usize]) -> Result<PreviewEstimate> {
        self.assembler.preview(report, sizes)
    }
}

/// Defaults, then the JSON file if given, then environment overrides.
pub fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    let config = match path {
        Some(path) => PipelineConfig::from_json_file(path)?,
        None => PipelineConfig::default(),
    };
    let config = config.with_env_overrides()?;
    config.validate()?;
    Ok(config)
}

/// Read and validate the report form JSON.
pub fn read_report(path: &Path) -> Result<ReportData> {
    let json = std::fs::read_to_string(path)?;
    parse_report_json(&json)
}

/// Read photos in order, checking each one's type by extension.
pub fn read_uploads(paths: &[PathBuf]) -> Result<Vec<RawImage>> {
    paths
        .iter()
        .enumerate()
        .map(|(index, path)| {
            let content_type = check_upload(index, path)?;
            let bytes = std::fs::read(path)?;
            Ok(RawImage::new(bytes, content_type))
        })
        .collect()
}

/// Byte sizes of the photos, without reading their contents.
pub fn upload_sizes(paths: &[PathBuf]) -> Result<Vec<usize>> {
    paths
        .iter()
        .enumerate()
        .map(|(index, path)| {
            check_upload(index, path)?;
            let len = std::fs::metadata(path)?.len();
            usize::try_from(len).map_err(|_| {
                VisitaError::InvalidUpload(format!("file {} is too large to read", index + 1))
            })
        })
        .collect()
}

fn check_upload(index: usize, path: &Path) -> Result<&'static str> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let content_type = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(ImageMediaType::from_extension)
        .map(|t| t.mime_type())
        .unwrap_or("application/octet-stream");
    validate_upload(index, content_type, file_name).inspect_err(|err| {
        warn!(file = %path.display(), error = %err, "upload rejected");
    })?;
    Ok(content_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

    const FORM: &str = r#"{
        "nombre_planta": "Planta Solar!!",
        "id_proyecto": "NMHJJ",
        "persona_responsable_interna": "Juan Perez",
        "responsable_obra": "Ana Lopez",
        "numero_visita": 33,
        "hora_entrada": "8:09",
        "hora_salida": "10:09",
        "motivo_visita": "Revision de avance",
        "fecha": "25/02/2025",
        "lugar_elaboracion": "Queretaro"
    }"#;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([10, 200, 30])))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();
        path
    }

    fn service() -> ReportService {
        ReportService::with_config(PipelineConfig {
            worker_threads: Some(2),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn form_file_is_parsed_and_validated() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("report.json");
        std::fs::write(&path, FORM).unwrap();
        let report = read_report(&path).unwrap();
        assert_eq!(report.entry_time, "08:09");
        assert_eq!(report.location, "NA");
    }

    #[test]
    fn unsupported_extension_names_position() {
        let tmp = tempfile::tempdir().unwrap();
        let good = write_png(tmp.path(), "a.png", 4, 4);
        let bad = tmp.path().join("notes.gif");
        std::fs::write(&bad, b"GIF89a").unwrap();

        let err = read_uploads(&[good, bad]).unwrap_err();
        assert!(matches!(err, VisitaError::InvalidUpload(_)));
        assert!(err.to_string().contains("file 2"), "{err}");
    }

    #[test]
    fn sizes_come_from_metadata() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_png(tmp.path(), "a.PNG", 8, 8);
        let expected = std::fs::metadata(&path).unwrap().len() as usize;
        assert_eq!(upload_sizes(&[path]).unwrap(), vec![expected]);
    }

    #[test]
    fn config_file_is_layered_over_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, r#"{ "max_image_width": 640 }"#).unwrap();
        let config = PipelineConfig::from_json_file(&path).unwrap();
        assert_eq!(config.max_image_width, 640);
        assert_eq!(config.image_quality, 85);
    }

    #[test]
    fn info_reports_public_settings() {
        let info = service().info();
        assert_eq!(info.max_image_width, 800);
        assert_eq!(info.supported_formats.len(), 3);
    }

    #[tokio::test]
    async fn generate_writes_named_pdf() {
        let tmp = tempfile::tempdir().unwrap();
        let report = parse_report_json(FORM).unwrap();
        let photo = write_png(tmp.path(), "site.png", 1200, 600);
        let images = read_uploads(&[photo]).unwrap();

        let (artifact, path) = service()
            .generate(report, images, tmp.path())
            .await
            .unwrap();

        assert_eq!(
            path.file_name().unwrap(),
            "visita_obra_33_Planta_Solar___25-02-2025.pdf"
        );
        assert_eq!(std::fs::read(&path).unwrap(), artifact.bytes);
        assert_eq!(artifact.images[0].final_dimensions, (800, 400));
    }
}
