use log::{error, info};
use reqwest::multipart::{Form, Part};
use serde::Serialize;

use crate::client::{ApiError, Client, Payload, Reply};
use crate::session::Session;
use crate::types::employee::{Employee, EmployeeForm, EmployeeId, ProfileUpdate};
use crate::types::request::{EmployeeIdRequest, LoginRequest};
use crate::validate;

pub const ALL_EMPLOYEE_PATH: &str = "/all-employee";
pub const SINGLE_EMPLOYEE_PATH: &str = "/single-employee";
pub const GET_EMPLOYEE_PATH: &str = "/get-employee";
pub const ADD_EMPLOYEE_PATH: &str = "/add-employee";
pub const LOGIN_EMPLOYEE_PATH: &str = "/login-employee";
pub const DELETE_EMPLOYEE_PATH: &str = "/delete-employee";
pub const EDIT_EMPLOYEE_PATH: &str = "/edit-employee";

/// Named operations of the employee API.
///
/// Each operation returns either its payload or an [`ApiError`] telling which
/// kind of failure happened: refused input, a server-side refusal carrying the
/// server's message, or a transport problem. Failures other than refused input
/// are logged before they are returned. Mutating operations return the
/// server's message on success.
pub struct Api {
    client: Client,
}

impl Api {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn session(&self) -> &Session {
        self.client.session()
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let result: Result<Vec<Employee>, ApiError> =
            async { self.client.get(ALL_EMPLOYEE_PATH).await?.json() }.await;
        log_failure("list employees", result)
    }

    /// The employee owning the session token.
    pub async fn get_current_employee(&self) -> Result<Employee, ApiError> {
        let result: Result<Employee, ApiError> =
            async { self.client.get(SINGLE_EMPLOYEE_PATH).await?.json() }.await;
        log_failure("get current employee", result)
    }

    pub async fn get_employee_by_id(&self, id: &EmployeeId) -> Result<Employee, ApiError> {
        let req = EmployeeIdRequest {
            employee_id: id.clone(),
        };
        let result: Result<Employee, ApiError> =
            async { self.post_json(GET_EMPLOYEE_PATH, &req).await?.json() }.await;
        log_failure("get employee", result)
    }

    pub async fn register_employee(&self, form: &EmployeeForm) -> Result<String, ApiError> {
        let result: Result<String, ApiError> = async {
            validate::validate_employee(form).map_err(ApiError::Validation)?;
            let envelope = self.post_json(ADD_EMPLOYEE_PATH, form).await?.envelope()?;
            Ok(envelope.message)
        }
        .await;
        log_failure("register employee", result)
    }

    /// Logs in and keeps the issued token in the session.
    pub async fn login_employee(&self, req: &LoginRequest) -> Result<String, ApiError> {
        let result: Result<String, ApiError> = async {
            validate::validate_login(req).map_err(ApiError::Validation)?;
            let envelope = self.post_json(LOGIN_EMPLOYEE_PATH, req).await?.envelope()?;
            let token = match envelope.access_token {
                Some(token) if !token.is_empty() => token,
                _ => return Err(ApiError::Unexpected("server didn't return access token")),
            };
            self.session().set(&token)?;
            info!("Login success, save token to session");
            Ok(envelope.message)
        }
        .await;
        log_failure("login employee", result)
    }

    pub async fn delete_employee(&self, id: &EmployeeId) -> Result<String, ApiError> {
        let req = EmployeeIdRequest {
            employee_id: id.clone(),
        };
        let result: Result<String, ApiError> = async {
            let envelope = self.post_json(DELETE_EMPLOYEE_PATH, &req).await?.envelope()?;
            Ok(envelope.message)
        }
        .await;
        log_failure("delete employee", result)
    }

    pub async fn update_employee(&self, form: &EmployeeForm) -> Result<String, ApiError> {
        let result: Result<String, ApiError> = async {
            validate::validate_employee(form).map_err(ApiError::Validation)?;
            let envelope = self.post_json(EDIT_EMPLOYEE_PATH, form).await?.envelope()?;
            Ok(envelope.message)
        }
        .await;
        log_failure("update employee", result)
    }

    /// Same endpoint as [`Api::update_employee`], sent as a multipart form so a
    /// new profile picture can travel with the fields.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<String, ApiError> {
        let result: Result<String, ApiError> = async {
            validate::validate_employee(&update.form).map_err(ApiError::Validation)?;
            if let Some(ref image) = update.image {
                validate::validate_image(image).map_err(ApiError::Validation)?;
            }

            let mut form = Form::new();
            for (name, value) in update.form.text_parts() {
                form = form.text(name, value);
            }
            if let Some(ref image) = update.image {
                let part = Part::bytes(image.data.clone()).file_name(image.name.clone());
                form = form.part("image", part);
            }

            let reply = self
                .client
                .post(EDIT_EMPLOYEE_PATH, Payload::Multipart(form))
                .await?;
            Ok(reply.envelope()?.message)
        }
        .await;
        log_failure("update profile", result)
    }

    /// Ends the session. The whole storage scope holding the token is cleared.
    pub fn logout(&self) -> Result<(), ApiError> {
        self.session().clear()?;
        info!("Logged out, session cleared");
        Ok(())
    }

    async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Result<Reply, ApiError> {
        let json = match serde_json::to_string(body) {
            Ok(json) => json,
            Err(e) => return Err(ApiError::Client(format!("encode request body: {e}"))),
        };
        self.client.post(path, Payload::Json(json)).await
    }
}

fn log_failure<T>(op: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(ref err) = result {
        if !err.is_validation() {
            error!("Failed to {op}: {err}");
        }
    }
    result
}
