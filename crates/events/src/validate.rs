//! Event form validation.
//!
//! Pure: the record is never mutated and every violated field is reported in
//! one pass, so a form can paint all of its errors simultaneously. Messages
//! are the user-facing Spanish ones the screens render as-is.

use campus_core::FieldErrors;

use crate::EventRecord;
use crate::audience::Audience;

/// Catalog of event types offered by the registration form.
pub const EVENT_TYPES: &[&str] = &["Conferencia", "Taller", "Seminario", "Concurso"];

/// Catalog of education programs for the conditional program field.
pub const EDUCATION_PROGRAMS: &[&str] = &[
    "Ingeniería en Ciencias de la Computación",
    "Licenciatura en Ciencias de la Computación",
    "Ingeniería en Tecnologías de la Información",
];

const MAX_DESCRIPTION_LEN: usize = 300;
const MAX_CAPACITY: u32 = 999;

/// Validate an event record before submission.
///
/// `is_editing` distinguishes the update flow, where a persisted id must be
/// present; every other rule is identical in both modes.
pub fn validate(record: &EventRecord, is_editing: bool) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if is_editing && record.id.is_none() {
        errors.insert("id", "El evento a actualizar no tiene identificador");
    }

    if record.name.trim().is_empty() {
        errors.insert("nombre_evento", "El nombre del evento es obligatorio");
    } else if !record.name.chars().all(is_name_char) {
        errors.insert("nombre_evento", "Solo se permiten letras, números y espacios");
    }

    if record.kind.trim().is_empty() {
        errors.insert("tipo_evento", "Debe seleccionar un tipo de evento");
    } else if !EVENT_TYPES.contains(&record.kind.as_str()) {
        errors.insert("tipo_evento", "Tipo de evento no reconocido");
    }

    if record.date.is_none() {
        errors.insert("fecha_realizacion", "La fecha de realización es obligatoria");
    }

    if record.start_time.is_none() {
        errors.insert("hora_inicio", "La hora de inicio es obligatoria");
    }
    if record.end_time.is_none() {
        errors.insert("hora_fin", "La hora de fin es obligatoria");
    }
    if let (Some(start), Some(end)) = (record.start_time, record.end_time) {
        // Strict: equal times are rejected too.
        if start >= end {
            errors.insert(
                "hora_fin",
                "La hora de fin debe ser posterior a la hora de inicio",
            );
        }
    }

    if record.place.trim().is_empty() {
        errors.insert("lugar", "El lugar es obligatorio");
    } else if !record.place.chars().all(is_name_char) {
        errors.insert("lugar", "Solo se permiten caracteres alfanuméricos y espacios");
    }

    if record.audience.is_empty() {
        errors.insert("audiencia", "Debe seleccionar al menos un público objetivo");
    }

    // Only required when the event targets students.
    if record.audience.contains(&Audience::Students) {
        if record.education_program.trim().is_empty() {
            errors.insert("programa_educativo", "Debe seleccionar un programa educativo");
        } else if !EDUCATION_PROGRAMS.contains(&record.education_program.as_str()) {
            errors.insert("programa_educativo", "Programa educativo no reconocido");
        }
    }

    if record.manager.is_none() {
        errors.insert("responsable", "Debe seleccionar un responsable");
    }

    if record.description.trim().is_empty() {
        errors.insert("descripcion", "La descripción es obligatoria");
    } else if record.description.chars().count() > MAX_DESCRIPTION_LEN {
        errors.insert("descripcion", "La descripción no puede exceder 300 caracteres");
    } else if !record.description.chars().all(is_description_char) {
        errors.insert(
            "descripcion",
            "Solo se permiten letras, números y signos de puntuación básicos",
        );
    }

    match record.capacity {
        None => errors.insert("cupo_maximo", "El cupo máximo es obligatorio"),
        Some(0) => errors.insert("cupo_maximo", "El cupo debe ser mayor a 0"),
        Some(n) if n > MAX_CAPACITY => errors.insert(
            "cupo_maximo",
            "El cupo debe ser un número entero de hasta 3 dígitos",
        ),
        Some(_) => {}
    }

    errors
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_whitespace()
}

fn is_description_char(c: char) -> bool {
    is_name_char(c) || matches!(c, '.' | ',' | ';' | ':' | '(' | ')' | '¿' | '?' | '¡' | '!' | '-')
}
