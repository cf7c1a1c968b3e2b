//! Data transfer models for the reservation API
//!
//! Field names follow the API's Spanish wire vocabulary; updates use
//! all-optional payloads because the backend patches only non-null fields.

pub mod aula;
pub mod horario;
pub mod reserva;
pub mod usuario;

// Re-export for convenience
pub use aula::{Aula, NewAula, UpdateAula};
pub use horario::{DiaSemana, Horario, NewHorario, TipoHorario, UpdateHorario};
pub use reserva::{NewReserva, Reserva, UpdateReserva};
pub use usuario::{NewUsuario, UpdateUsuario, Usuario};
