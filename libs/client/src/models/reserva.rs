//! Reserva model and related payloads

use serde::{Deserialize, Serialize};

use super::horario::TipoHorario;

/// Reserva as returned by the API
///
/// `fecha` travels as a display-format string (`dd/mm/yyyy`); use
/// [`crate::dates`] at form boundaries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reserva {
    pub id: i64,
    pub fecha: String,
    pub motivo: String,
    pub asistentes: i32,
    #[serde(default)]
    pub aula: Option<ReservaAula>,
    #[serde(default)]
    pub horario: Option<ReservaHorario>,
    #[serde(default)]
    pub usuario: Option<ReservaUsuario>,
}

/// Aula summary nested in a reserva
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservaAula {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub capacidad: Option<i32>,
    #[serde(default)]
    pub ordenadores: Option<bool>,
}

/// Horario summary nested in a reserva
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservaHorario {
    pub id: i64,
    pub inicio: String,
    pub fin: String,
    #[serde(default)]
    pub tipo: Option<TipoHorario>,
}

/// Usuario summary nested in a reserva
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservaUsuario {
    pub id: i64,
    #[serde(default)]
    pub nombre: Option<String>,
}

/// New reserva creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReserva {
    pub usuario_id: i64,
    pub aula_id: i64,
    pub horario_id: i64,
    /// Display-format date (`dd/mm/yyyy`)
    pub fecha: String,
    pub motivo: String,
    pub asistentes: i32,
}

/// Reserva update payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReserva {
    pub usuario_id: Option<i64>,
    pub aula_id: Option<i64>,
    pub horario_id: Option<i64>,
    pub fecha: Option<String>,
    pub motivo: Option<String>,
    pub asistentes: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserva_deserializes_with_nested_summaries() {
        let body = r#"{
            "id": 11,
            "fecha": "25/12/2024",
            "motivo": "Examen final",
            "asistentes": 25,
            "aula": {"id": 2, "nombre": "Aula 2", "capacidad": 30, "ordenadores": true},
            "horario": {"id": 4, "inicio": "09:00:00", "fin": "10:00:00", "tipo": "LECTIVA"},
            "usuario": {"id": 7, "nombre": "Isaac"}
        }"#;

        let reserva: Reserva = serde_json::from_str(body).expect("deserialize failed");
        assert_eq!(reserva.fecha, "25/12/2024");
        assert_eq!(reserva.aula.as_ref().map(|a| a.id), Some(2));
        assert_eq!(
            reserva.horario.as_ref().and_then(|h| h.tipo),
            Some(TipoHorario::Lectiva)
        );
        assert_eq!(
            reserva.usuario.as_ref().and_then(|u| u.nombre.clone()),
            Some("Isaac".to_string())
        );
    }

    #[test]
    fn test_reserva_tolerates_missing_relations() {
        let body = r#"{"id": 1, "fecha": "01/01/2024", "motivo": "Claustro", "asistentes": 10}"#;
        let reserva: Reserva = serde_json::from_str(body).expect("deserialize failed");
        assert_eq!(reserva.aula, None);
        assert_eq!(reserva.horario, None);
        assert_eq!(reserva.usuario, None);
    }

    #[test]
    fn test_new_reserva_serializes_with_camel_case_ids() {
        let payload = NewReserva {
            usuario_id: 7,
            aula_id: 2,
            horario_id: 4,
            fecha: "25/12/2024".to_string(),
            motivo: "Examen final".to_string(),
            asistentes: 25,
        };

        let value = serde_json::to_value(&payload).expect("serialize failed");
        assert_eq!(value["usuarioId"], 7);
        assert_eq!(value["aulaId"], 2);
        assert_eq!(value["horarioId"], 4);
        assert_eq!(value["fecha"], "25/12/2024");
    }
}
