// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Boundary validation — turns the submitted form JSON and upload metadata
// into trusted values before anything reaches the pipeline.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, VisitaError};
use crate::types::{ImageMediaType, ReportData};

const MAX_NAME_CHARS: usize = 200;
const MAX_PROJECT_ID_CHARS: usize = 50;
const MAX_TEXT_CHARS: usize = 2000;

/// The report form exactly as submitted, keyed by its wire names.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportForm {
    pub nombre_planta: String,
    pub id_proyecto: String,
    #[serde(default = "default_location")]
    pub ubicacion: String,
    pub persona_responsable_interna: String,
    pub responsable_obra: String,
    pub numero_visita: i64,
    pub hora_entrada: String,
    pub hora_salida: String,
    pub motivo_visita: String,
    #[serde(default = "default_true")]
    pub avances_conforme_cronograma: bool,
    #[serde(default)]
    pub razon_no_conforme: Option<String>,
    #[serde(default)]
    pub acuerdos: Option<String>,
    #[serde(default)]
    pub fecha: Option<String>,
    #[serde(default)]
    pub lugar_elaboracion: Option<String>,
}

fn default_location() -> String {
    "NA".to_string()
}

fn default_true() -> bool {
    true
}

impl ReportForm {
    /// Check lengths, ranges, and time formats, producing a [`ReportData`].
    pub fn validate(self) -> Result<ReportData> {
        check_length("nombre_planta", &self.nombre_planta, 1, MAX_NAME_CHARS)?;
        check_length("id_proyecto", &self.id_proyecto, 1, MAX_PROJECT_ID_CHARS)?;
        check_length("ubicacion", &self.ubicacion, 0, MAX_NAME_CHARS)?;
        check_length(
            "persona_responsable_interna",
            &self.persona_responsable_interna,
            0,
            MAX_NAME_CHARS,
        )?;
        check_length("responsable_obra", &self.responsable_obra, 0, MAX_NAME_CHARS)?;
        check_length("motivo_visita", &self.motivo_visita, 0, MAX_TEXT_CHARS)?;

        let non_conformance_reason = self.razon_no_conforme.unwrap_or_default();
        check_length("razon_no_conforme", &non_conformance_reason, 0, MAX_TEXT_CHARS)?;
        let agreements = self.acuerdos.unwrap_or_default();
        check_length("acuerdos", &agreements, 0, MAX_TEXT_CHARS)?;

        let visit_number = u32::try_from(self.numero_visita)
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| {
                VisitaError::InvalidReportData(format!(
                    "numero_visita must be at least 1, got {}",
                    self.numero_visita
                ))
            })?;

        Ok(ReportData {
            plant_name: self.nombre_planta,
            project_id: self.id_proyecto,
            location: self.ubicacion,
            internal_responsible: self.persona_responsable_interna,
            site_responsible: self.responsable_obra,
            visit_number,
            entry_time: normalize_time(&self.hora_entrada)?,
            exit_time: normalize_time(&self.hora_salida)?,
            visit_reason: self.motivo_visita,
            on_schedule: self.avances_conforme_cronograma,
            non_conformance_reason,
            agreements,
            date: self.fecha.filter(|d| !d.trim().is_empty()),
            elaboration_place: self.lugar_elaboracion.unwrap_or_default(),
        })
    }
}

/// Decode the form JSON and validate it in one step.
pub fn parse_report_json(json: &str) -> Result<ReportData> {
    let form: ReportForm = serde_json::from_str(json)
        .map_err(|e| VisitaError::InvalidReportData(format!("invalid JSON: {e}")))?;
    form.validate()
}

/// Parse `H:M` / `HH:MM` and return it zero-padded as `HH:MM`.
pub fn normalize_time(value: &str) -> Result<String> {
    let invalid =
        || VisitaError::InvalidReportData(format!("invalid time format: {value:?}, use HH:MM"));

    let (hour, minute) = value.trim().split_once(':').ok_or_else(invalid)?;
    let hour: u8 = hour.trim().parse().map_err(|_| invalid())?;
    let minute: u8 = minute.trim().parse().map_err(|_| invalid())?;
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }
    Ok(format!("{hour:02}:{minute:02}"))
}

/// Check an upload's declared content type and file name.
///
/// `index` is zero-based; messages use the 1-based position the user sees.
pub fn validate_upload(index: usize, content_type: &str, file_name: &str) -> Result<ImageMediaType> {
    let position = index + 1;
    let allowed_types = ImageMediaType::ALL
        .iter()
        .map(|t| t.mime_type())
        .collect::<Vec<_>>()
        .join(", ");

    let media_type = ImageMediaType::from_content_type(content_type).ok_or_else(|| {
        VisitaError::InvalidUpload(format!(
            "file {position} is not a valid image; allowed formats: {allowed_types}"
        ))
    })?;

    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    if ImageMediaType::from_extension(extension).is_none() {
        return Err(VisitaError::InvalidUpload(format!(
            "file {position} has an invalid extension; allowed extensions: .jpeg, .jpg, .png, .webp"
        )));
    }

    Ok(media_type)
}

fn check_length(field: &str, value: &str, min: usize, max: usize) -> Result<()> {
    let chars = value.chars().count();
    if chars < min || chars > max {
        return Err(VisitaError::InvalidReportData(format!(
            "{field} must be between {min} and {max} characters, got {chars}"
        )));
    }
    Ok(())
}
