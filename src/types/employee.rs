use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::display::TerminalDisplay;

/// Server-assigned employee identifier.
///
/// Servers hand ids out either as JSON numbers or strings; the original form is
/// kept so it can be echoed back unchanged. Two ids are equal when they render
/// the same, so `7` and `"7"` name the same employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmployeeId {
    Number(u64),
    Text(String),
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmployeeId::Number(id) => write!(f, "{id}"),
            EmployeeId::Text(id) => write!(f, "{id}"),
        }
    }
}

impl PartialEq for EmployeeId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (EmployeeId::Number(a), EmployeeId::Number(b)) => a == b,
            (EmployeeId::Text(a), EmployeeId::Text(b)) => a == b,
            _ => self.to_string() == other.to_string(),
        }
    }
}

impl Eq for EmployeeId {}

impl Hash for EmployeeId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl FromStr for EmployeeId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Only canonical numbers become `Number`, "007" stays text
        Ok(match s.parse::<u64>() {
            Ok(id) if id.to_string() == s => EmployeeId::Number(id),
            _ => EmployeeId::Text(s.to_string()),
        })
    }
}

impl Default for EmployeeId {
    fn default() -> Self {
        EmployeeId::Text(String::new())
    }
}

/// Employee record as returned by the server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,

    #[serde(default)]
    pub employee_code: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub email_id: String,

    /// 10-digit numeric string
    #[serde(default)]
    pub contact_no: String,

    #[serde(default)]
    pub department: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Employee fields submitted by the create and edit operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeForm {
    /// Absent when creating, required by the server when editing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EmployeeId>,

    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email_id: String,
    pub contact_no: String,
    pub department: String,
}

impl From<Employee> for EmployeeForm {
    fn from(employee: Employee) -> Self {
        Self {
            id: Some(employee.id),
            employee_code: employee.employee_code,
            first_name: employee.first_name,
            last_name: employee.last_name,
            email_id: employee.email_id,
            contact_no: employee.contact_no,
            department: employee.department,
        }
    }
}

impl EmployeeForm {
    /// Text parts of the multipart profile update, in submission order.
    pub fn text_parts(&self) -> Vec<(&'static str, String)> {
        let id = self.id.as_ref().map(|id| id.to_string()).unwrap_or_default();
        vec![
            ("id", id),
            ("employeeCode", self.employee_code.clone()),
            ("firstName", self.first_name.clone()),
            ("lastName", self.last_name.clone()),
            ("emailId", self.email_id.clone()),
            ("contactNo", self.contact_no.clone()),
            ("department", self.department.clone()),
        ]
    }
}

/// Profile picture attached to a profile update
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub name: String,
    pub data: Vec<u8>,
}

impl ImageFile {
    pub fn load(path: &Path) -> Result<Self> {
        let data =
            std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("image"));
        Ok(Self { name, data })
    }
}

/// Update of the logged-in employee's own profile, optionally replacing the
/// profile picture.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub form: EmployeeForm,
    pub image: Option<ImageFile>,
}

impl TerminalDisplay for Employee {
    fn table_titles() -> Vec<&'static str> {
        vec![
            "ID",
            "Code",
            "First Name",
            "Last Name",
            "Email",
            "Contact",
            "Department",
        ]
    }

    fn table_row(self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.employee_code,
            self.first_name,
            self.last_name,
            self.email_id,
            self.contact_no,
            self.department,
        ]
    }

    fn csv_titles() -> Vec<&'static str> {
        vec![
            "id",
            "employee_code",
            "first_name",
            "last_name",
            "email_id",
            "contact_no",
            "department",
            "image_url",
        ]
    }

    fn csv_row(self) -> HashMap<&'static str, String> {
        vec![
            ("id", self.id.to_string()),
            ("employee_code", self.employee_code),
            ("first_name", self.first_name),
            ("last_name", self.last_name),
            ("email_id", self.email_id),
            ("contact_no", self.contact_no),
            ("department", self.department),
            ("image_url", self.image_url.unwrap_or_default()),
        ]
        .into_iter()
        .collect()
    }
}
