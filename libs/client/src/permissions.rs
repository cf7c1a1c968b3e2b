//! Role-derived capability flags
//!
//! A fixed table of booleans the UI consults to decide what to render.
//! These flags are advisory: the backend re-checks every request, so a
//! wrong flag here can only hide or gray out a control, never grant access.

use serde::Serialize;

use crate::roles::RoleSet;

/// Capability flags for the current session
///
/// Serialized with the camelCase names the UI layer keys on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    pub view_usuarios: bool,
    pub create_usuario: bool,
    pub update_usuario: bool,
    pub delete_usuario: bool,

    pub view_aulas: bool,
    pub create_aula: bool,
    pub update_aula: bool,
    pub delete_aula: bool,

    pub view_horarios: bool,
    pub create_horario: bool,
    pub update_horario: bool,
    pub delete_horario: bool,

    pub view_reservas: bool,
    pub create_reserva: bool,
    pub update_reserva: bool,
    pub delete_reserva: bool,
}

impl Permissions {
    /// No capabilities; the anonymous state
    pub fn none() -> Self {
        Self::default()
    }

    /// Compute the table from the current roles
    ///
    /// Recomputed whenever the role set changes; never cached across a
    /// session transition.
    pub fn from_roles(roles: &RoleSet) -> Self {
        let is_admin = roles.has_role("ADMIN");
        let can_view = roles.has_any_role(&["PROFESOR", "ADMIN"]);

        Permissions {
            // Usuarios: ADMIN only
            view_usuarios: is_admin,
            create_usuario: is_admin,
            update_usuario: is_admin,
            delete_usuario: is_admin,

            // Aulas: ADMIN modifies, PROFESOR and ADMIN view
            view_aulas: can_view,
            create_aula: is_admin,
            update_aula: is_admin,
            delete_aula: is_admin,

            // Horarios: ADMIN modifies, PROFESOR and ADMIN view
            view_horarios: can_view,
            create_horario: is_admin,
            update_horario: is_admin,
            delete_horario: is_admin,

            // Reservas: PROFESOR and ADMIN for everything
            view_reservas: can_view,
            create_reserva: can_view,
            update_reserva: can_view,
            delete_reserva: can_view,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(names: &[&str]) -> RoleSet {
        RoleSet::new(names.iter().map(|n| n.to_string()).collect())
    }

    #[test]
    fn test_admin_gets_every_flag() {
        let permissions = Permissions::from_roles(&roles(&["ROLE_ADMIN"]));
        assert!(permissions.view_usuarios);
        assert!(permissions.create_usuario);
        assert!(permissions.update_usuario);
        assert!(permissions.delete_usuario);
        assert!(permissions.view_aulas);
        assert!(permissions.create_aula);
        assert!(permissions.update_aula);
        assert!(permissions.delete_aula);
        assert!(permissions.view_horarios);
        assert!(permissions.create_horario);
        assert!(permissions.update_horario);
        assert!(permissions.delete_horario);
        assert!(permissions.view_reservas);
        assert!(permissions.create_reserva);
        assert!(permissions.update_reserva);
        assert!(permissions.delete_reserva);
    }

    #[test]
    fn test_profesor_views_and_manages_reservas_only() {
        let permissions = Permissions::from_roles(&roles(&["PROFESOR"]));

        assert!(!permissions.view_usuarios);
        assert!(!permissions.create_usuario);

        assert!(permissions.view_aulas);
        assert!(!permissions.create_aula);
        assert!(!permissions.update_aula);
        assert!(!permissions.delete_aula);

        assert!(permissions.view_horarios);
        assert!(!permissions.create_horario);

        assert!(permissions.view_reservas);
        assert!(permissions.create_reserva);
        assert!(permissions.update_reserva);
        assert!(permissions.delete_reserva);
    }

    #[test]
    fn test_no_roles_means_no_flags() {
        let permissions = Permissions::from_roles(&RoleSet::default());
        assert_eq!(permissions, Permissions::none());
        assert!(!permissions.view_aulas);
        assert!(!permissions.create_reserva);
    }

    #[test]
    fn test_unknown_roles_grant_nothing() {
        let permissions = Permissions::from_roles(&roles(&["GESTOR"]));
        assert_eq!(permissions, Permissions::none());
    }

    #[test]
    fn test_serializes_with_camel_case_names() {
        let permissions = Permissions::from_roles(&roles(&["admin"]));
        let value = serde_json::to_value(permissions).expect("serialization failed");
        assert_eq!(value["viewUsuarios"], true);
        assert_eq!(value["createReserva"], true);
        assert_eq!(value["deleteHorario"], true);
    }
}
