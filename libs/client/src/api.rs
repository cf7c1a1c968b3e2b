//! Typed client for the reservation API
//!
//! Wraps the backend REST endpoints behind typed methods. Every request
//! except login/register carries the stored bearer token when one is
//! present; the backend decides what the token may actually do.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::{
    Aula, Horario, NewAula, NewHorario, NewReserva, NewUsuario, Reserva, UpdateAula,
    UpdateHorario, UpdateReserva, UpdateUsuario, Usuario,
};
use crate::session::{SessionManager, SessionState};
use crate::validation::{validate_email, validate_nombre, validate_password};

/// Request for user login
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response for user login
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

/// Request for user registration
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub nombre: String,
    pub email: String,
    pub password: String,
}

/// Request for a password change
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// Typed API client over the reservation backend
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionManager,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: ClientConfig, session: SessionManager) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: config.base_url,
            session,
        }
    }

    /// The session this client stores issued tokens into
    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // Authenticated request: attach the stored token when one is present.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, self.url(path));
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    // Auth endpoints

    /// Log in and start a session with the issued token
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<SessionState> {
        info!("Login attempt for {}", email);

        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self.http.post(self.url("/auth/login")).json(&body).send().await?;
        let auth: AuthResponse = parse(response).await?;

        Ok(self.session.login(&auth.token)?)
    }

    /// Register a new account
    pub async fn register(&self, nombre: &str, email: &str, password: &str) -> ClientResult<()> {
        validate_nombre(nombre).map_err(ClientError::Validation)?;
        validate_email(email).map_err(ClientError::Validation)?;
        validate_password(password).map_err(ClientError::Validation)?;

        info!("Registering account for {}", email);

        let body = RegisterRequest {
            nombre: nombre.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .http
            .post(self.url("/auth/register"))
            .json(&body)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    /// Fetch the authenticated user's profile
    pub async fn perfil(&self) -> ClientResult<Usuario> {
        let response = self.request(Method::GET, "/auth/perfil").send().await?;
        parse(response).await
    }

    /// Change the authenticated user's password
    pub async fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> ClientResult<()> {
        validate_password(new_password).map_err(ClientError::Validation)?;

        let body = ChangePasswordRequest {
            old_password: old_password.to_string(),
            new_password: new_password.to_string(),
        };
        let response = self
            .request(Method::PATCH, "/auth/cambiar-pass")
            .json(&body)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    // Usuarios endpoints

    /// List all usuarios
    pub async fn usuarios(&self) -> ClientResult<Vec<Usuario>> {
        self.get_json("/usuarios").await
    }

    /// Fetch a usuario by id
    pub async fn usuario(&self, id: i64) -> ClientResult<Usuario> {
        self.get_json(&format!("/usuarios/{}", id)).await
    }

    /// Create a usuario
    pub async fn create_usuario(&self, payload: &NewUsuario) -> ClientResult<Usuario> {
        info!("Creating usuario {}", payload.email);
        self.post_json("/usuarios", payload).await
    }

    /// Update a usuario
    pub async fn update_usuario(&self, id: i64, payload: &UpdateUsuario) -> ClientResult<Usuario> {
        self.put_json(&format!("/usuarios/{}", id), payload).await
    }

    /// Delete a usuario
    pub async fn delete_usuario(&self, id: i64) -> ClientResult<()> {
        self.delete_resource(&format!("/usuarios/{}", id)).await
    }

    // Aulas endpoints

    /// List all aulas
    pub async fn aulas(&self) -> ClientResult<Vec<Aula>> {
        self.get_json("/aulas").await
    }

    /// Fetch an aula by id
    pub async fn aula(&self, id: i64) -> ClientResult<Aula> {
        self.get_json(&format!("/aulas/{}", id)).await
    }

    /// Create an aula
    pub async fn create_aula(&self, payload: &NewAula) -> ClientResult<Aula> {
        info!("Creating aula {}", payload.nombre);
        self.post_json("/aulas", payload).await
    }

    /// Update an aula
    pub async fn update_aula(&self, id: i64, payload: &UpdateAula) -> ClientResult<Aula> {
        self.put_json(&format!("/aulas/{}", id), payload).await
    }

    /// Delete an aula
    pub async fn delete_aula(&self, id: i64) -> ClientResult<()> {
        self.delete_resource(&format!("/aulas/{}", id)).await
    }

    // Horarios endpoints

    /// List all horarios
    pub async fn horarios(&self) -> ClientResult<Vec<Horario>> {
        self.get_json("/horarios").await
    }

    /// Fetch a horario by id
    pub async fn horario(&self, id: i64) -> ClientResult<Horario> {
        self.get_json(&format!("/horarios/{}", id)).await
    }

    /// Create a horario
    pub async fn create_horario(&self, payload: &NewHorario) -> ClientResult<Horario> {
        self.post_json("/horarios", payload).await
    }

    /// Update a horario
    pub async fn update_horario(&self, id: i64, payload: &UpdateHorario) -> ClientResult<Horario> {
        self.put_json(&format!("/horarios/{}", id), payload).await
    }

    /// Delete a horario
    pub async fn delete_horario(&self, id: i64) -> ClientResult<()> {
        self.delete_resource(&format!("/horarios/{}", id)).await
    }

    // Reservas endpoints

    /// List all reservas
    pub async fn reservas(&self) -> ClientResult<Vec<Reserva>> {
        self.get_json("/reservas").await
    }

    /// Fetch a reserva by id
    pub async fn reserva(&self, id: i64) -> ClientResult<Reserva> {
        self.get_json(&format!("/reservas/{}", id)).await
    }

    /// Create a reserva
    pub async fn create_reserva(&self, payload: &NewReserva) -> ClientResult<Reserva> {
        info!("Creating reserva for aula {}", payload.aula_id);
        self.post_json("/reservas", payload).await
    }

    /// Update a reserva
    pub async fn update_reserva(&self, id: i64, payload: &UpdateReserva) -> ClientResult<Reserva> {
        self.put_json(&format!("/reservas/{}", id), payload).await
    }

    /// Delete a reserva
    pub async fn delete_reserva(&self, id: i64) -> ClientResult<()> {
        self.delete_resource(&format!("/reservas/{}", id)).await
    }

    // Shared request plumbing

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.request(Method::GET, path).send().await?;
        parse(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.request(Method::POST, path).json(body).send().await?;
        parse(response).await
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.request(Method::PUT, path).json(body).send().await?;
        parse(response).await
    }

    async fn delete_resource(&self, path: &str) -> ClientResult<()> {
        let response = self.request(Method::DELETE, path).send().await?;
        check(response).await?;
        Ok(())
    }
}

/// Pass a successful response through; turn anything else into an API error
///
/// The backend reports failures as `{"message": …}`; fall back to the status
/// reason when the body has no message.
async fn check(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| body.get("message").and_then(Value::as_str).map(String::from))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        });

    error!("API request failed with {}: {}", status, message);
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

async fn parse<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let response = check(response).await?;
    Ok(response.json::<T>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_password_request_uses_camel_case() {
        let body = ChangePasswordRequest {
            old_password: "vieja123x".to_string(),
            new_password: "nueva456y".to_string(),
        };
        let value = serde_json::to_value(&body).expect("serialize failed");
        assert_eq!(value["oldPassword"], "vieja123x");
        assert_eq!(value["newPassword"], "nueva456y");
    }

    #[test]
    fn test_auth_response_reads_token_field() {
        let auth: AuthResponse =
            serde_json::from_str(r#"{"token": "aaa.bbb.ccc"}"#).expect("deserialize failed");
        assert_eq!(auth.token, "aaa.bbb.ccc");
    }
}
