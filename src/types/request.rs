use std::fmt;

use serde::{Deserialize, Serialize};

use super::employee::EmployeeId;

/// Body of the login endpoint
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email_id: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email_id", &self.email_id)
            .field("password", &"<hidden>")
            .finish()
    }
}

/// Body of the endpoints addressing a single employee by id
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeIdRequest {
    pub employee_id: EmployeeId,
}
