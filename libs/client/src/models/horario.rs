//! Horario model and related payloads

use serde::{Deserialize, Serialize};

/// Day of the week as the schedule API spells it
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum DiaSemana {
    Lunes,
    Martes,
    Miercoles,
    Jueves,
    Viernes,
    Sabado,
    Domingo,
}

impl DiaSemana {
    /// Get the wire name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            DiaSemana::Lunes => "LUNES",
            DiaSemana::Martes => "MARTES",
            DiaSemana::Miercoles => "MIERCOLES",
            DiaSemana::Jueves => "JUEVES",
            DiaSemana::Viernes => "VIERNES",
            DiaSemana::Sabado => "SABADO",
            DiaSemana::Domingo => "DOMINGO",
        }
    }

    /// Parse a weekday name, case-insensitively
    ///
    /// Accepts the names produced by [`crate::dates::day_of_week_name`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_uppercase().as_str() {
            "LUNES" => Some(DiaSemana::Lunes),
            "MARTES" => Some(DiaSemana::Martes),
            "MIERCOLES" => Some(DiaSemana::Miercoles),
            "JUEVES" => Some(DiaSemana::Jueves),
            "VIERNES" => Some(DiaSemana::Viernes),
            "SABADO" => Some(DiaSemana::Sabado),
            "DOMINGO" => Some(DiaSemana::Domingo),
            _ => None,
        }
    }
}

/// Kind of schedule slot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TipoHorario {
    Lectiva,
    Recreo,
    Mediodia,
}

/// Horario as returned by the API
///
/// `inicio` and `fin` travel as `HH:MM:SS` strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Horario {
    pub id: i64,
    pub dia: DiaSemana,
    pub tipo: TipoHorario,
    pub inicio: String,
    pub fin: String,
    #[serde(default)]
    pub session: Option<i32>,
}

/// New horario creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHorario {
    pub dia: DiaSemana,
    pub tipo: TipoHorario,
    pub inicio: String,
    pub fin: String,
    pub session: i32,
}

/// Horario update payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateHorario {
    pub dia: Option<DiaSemana>,
    pub tipo: Option<TipoHorario>,
    pub inicio: Option<String>,
    pub fin: Option<String>,
    pub session: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::day_of_week_name;

    #[test]
    fn test_dia_semana_wire_names() {
        let json = serde_json::to_string(&DiaSemana::Miercoles).expect("serialize failed");
        assert_eq!(json, r#""MIERCOLES""#);

        let parsed: DiaSemana =
            serde_json::from_str(r#""LUNES""#).expect("deserialize failed");
        assert_eq!(parsed, DiaSemana::Lunes);
    }

    #[test]
    fn test_dia_semana_matches_bridge_output() {
        // 2024-12-23 through 2024-12-29 is a Monday..Sunday week
        for (date, expected) in [
            ("2024-12-23", DiaSemana::Lunes),
            ("2024-12-25", DiaSemana::Miercoles),
            ("2024-12-29", DiaSemana::Domingo),
        ] {
            let name = day_of_week_name(date);
            assert_eq!(DiaSemana::from_name(&name), Some(expected));
            assert_eq!(expected.as_str(), name);
        }

        assert_eq!(DiaSemana::from_name(""), None);
        assert_eq!(DiaSemana::from_name("FERIADO"), None);
    }

    #[test]
    fn test_horario_deserializes_from_api_shape() {
        let body = r#"{
            "id": 4,
            "dia": "VIERNES",
            "tipo": "LECTIVA",
            "inicio": "09:00:00",
            "fin": "10:00:00",
            "session": 2
        }"#;

        let horario: Horario = serde_json::from_str(body).expect("deserialize failed");
        assert_eq!(horario.dia, DiaSemana::Viernes);
        assert_eq!(horario.tipo, TipoHorario::Lectiva);
        assert_eq!(horario.inicio, "09:00:00");
        assert_eq!(horario.session, Some(2));
    }
}
