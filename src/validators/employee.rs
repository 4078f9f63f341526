//! Employee-related custom validators.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

use crate::constants::{
    ERR_INVALID_DATE_FORMAT, ERR_INVALID_EMPLOYEE_NUMBER, ERR_INVALID_ORDER, ERR_INVALID_ROLE,
    ERR_INVALID_STATUS,
};
use crate::models::{EmploymentStatus, Role};
use crate::pagination::Order;

lazy_static! {
    static ref EMPLOYEE_NUMBER: Regex = Regex::new(r"^[A-Z0-9-]+$").unwrap();
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Sort order must be `ASC` or `DESC` (any case).
pub fn validate_order(order: &str) -> Result<(), ValidationError> {
    match Order::parse(order) {
        Some(_) => Ok(()),
        None => Err(invalid("invalid_order", ERR_INVALID_ORDER)),
    }
}

pub fn validate_status(status: &str) -> Result<(), ValidationError> {
    match EmploymentStatus::parse(status) {
        Some(_) => Ok(()),
        None => Err(invalid("invalid_status", ERR_INVALID_STATUS)),
    }
}

pub fn validate_role(role: &str) -> Result<(), ValidationError> {
    match Role::parse(role) {
        Some(_) => Ok(()),
        None => Err(invalid("invalid_role", ERR_INVALID_ROLE)),
    }
}

pub fn validate_employee_number(number: &str) -> Result<(), ValidationError> {
    if EMPLOYEE_NUMBER.is_match(number) {
        Ok(())
    } else {
        Err(invalid("invalid_employee_number", ERR_INVALID_EMPLOYEE_NUMBER))
    }
}

/// Calendar date in `YYYY-MM-DD` form.
pub fn validate_date(date: &str) -> Result<(), ValidationError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| invalid("invalid_date", ERR_INVALID_DATE_FORMAT))
}
