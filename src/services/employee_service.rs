//! Employee service: cursor-paginated listing, lookup, creation and removal.

use chrono::NaiveDate;
use log::{debug, info, warn};
use mongodb::bson::{doc, oid::ObjectId, DateTime, Document, Regex};
use std::sync::Arc;

use crate::config::{Config, CONFIG};
use crate::constants::{
    CODE_EMAIL_EXISTS, CODE_EMPLOYEE_NOT_FOUND, CODE_EMPLOYEE_NUMBER_EXISTS,
    CODE_INVALID_EMPLOYEE_ID, CODE_INVALID_SORT_KEY, CODE_VALIDATION_FAILED, EMPLOYEE_SORT_KEYS,
    ERR_EMAIL_EXISTS, ERR_EMPLOYEE_NOT_FOUND, ERR_EMPLOYEE_NUMBER_EXISTS, ERR_INVALID_DATE_FORMAT,
    ERR_INVALID_EMPLOYEE_ID, IDENTITY_KEY,
};
use crate::errors::ApiError;
use crate::models::{
    CreateEmployeeRequest, Employee, EmployeeListQuery, EmployeeResponse, EmploymentStatus, Role,
};
use crate::pagination::{KeyKind, Order, PageSource, Paginator, PagingResult};
use crate::repositories::EmployeeRepository;

pub struct EmployeeService {
    repository: Arc<EmployeeRepository>,
}

impl EmployeeService {
    /// Create a new EmployeeService over a shared repository.
    pub fn with_repository(repository: Arc<EmployeeRepository>) -> Self {
        Self { repository }
    }

    /// One page of employees matching the query's filters.
    pub async fn list_employees(
        &self,
        query: &EmployeeListQuery,
    ) -> Result<PagingResult<EmployeeResponse>, ApiError> {
        let filter = build_list_filter(query);
        debug!("Listing employees with filter: {:?}", filter);

        let mut paginator = self.repository.paginator();
        apply_page_query(&mut paginator, query, &CONFIG)?;

        let page = paginator.paginate::<Employee>(filter).await?;
        Ok(page.map(EmployeeResponse::from))
    }

    pub async fn get_employee(&self, id: &str) -> Result<Employee, ApiError> {
        let object_id = parse_employee_id(id)?;

        self.repository
            .find_by_id(object_id)
            .await?
            .ok_or_else(|| ApiError::not_found(CODE_EMPLOYEE_NOT_FOUND, ERR_EMPLOYEE_NOT_FOUND))
    }

    pub async fn create_employee(&self, req: CreateEmployeeRequest) -> Result<Employee, ApiError> {
        let email = req.email.to_lowercase();

        if self.repository.find_by_email(&email).await?.is_some() {
            warn!("Create failed: email already registered");
            return Err(ApiError::conflict(CODE_EMAIL_EXISTS, ERR_EMAIL_EXISTS));
        }

        if self
            .repository
            .find_by_employee_number(&req.employee_number)
            .await?
            .is_some()
        {
            warn!(
                "Create failed: employee number {} already in use",
                req.employee_number
            );
            return Err(ApiError::conflict(
                CODE_EMPLOYEE_NUMBER_EXISTS,
                ERR_EMPLOYEE_NUMBER_EXISTS,
            ));
        }

        let manager_id = req.manager_id.as_deref().map(parse_employee_id).transpose()?;
        let hired_at = parse_hire_date(&req.hired_at)?;
        let role = req
            .role
            .as_deref()
            .and_then(Role::parse)
            .unwrap_or_default();

        let now = DateTime::now();
        let employee = Employee {
            id: None,
            employee_number: req.employee_number,
            first_name: req.first_name,
            last_name: req.last_name,
            email,
            department: req.department,
            position: req.position,
            role,
            status: EmploymentStatus::Active,
            manager_id,
            hired_at,
            created_at: now,
            updated_at: now,
        };

        let id = self.repository.insert(&employee).await?;
        info!(
            "Employee created: {} ({})",
            employee.employee_number,
            employee.full_name()
        );

        Ok(Employee {
            id: Some(id),
            ..employee
        })
    }

    pub async fn delete_employee(&self, id: &str) -> Result<(), ApiError> {
        let object_id = parse_employee_id(id)?;

        if !self.repository.delete(object_id).await? {
            warn!("Delete failed: Employee not found with id: {}", id);
            return Err(ApiError::not_found(
                CODE_EMPLOYEE_NOT_FOUND,
                ERR_EMPLOYEE_NOT_FOUND,
            ));
        }

        info!("Employee deleted: {}", id);
        Ok(())
    }
}

fn parse_employee_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id)
        .map_err(|_| ApiError::bad_request(CODE_INVALID_EMPLOYEE_ID, ERR_INVALID_EMPLOYEE_ID))
}

/// Midnight UTC of a `YYYY-MM-DD` date.
fn parse_hire_date(date: &str) -> Result<DateTime, ApiError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|d| DateTime::from_millis(d.and_utc().timestamp_millis()))
        .ok_or_else(|| ApiError::bad_request(CODE_VALIDATION_FAILED, ERR_INVALID_DATE_FORMAT))
}

/// Filter document for the department, status and search parameters.
pub fn build_list_filter(query: &EmployeeListQuery) -> Document {
    let mut filter = doc! {};

    if let Some(department) = query.department.as_deref().map(str::trim) {
        if !department.is_empty() {
            filter.insert("department", department);
        }
    }

    if let Some(status) = query.status.as_deref().and_then(EmploymentStatus::parse) {
        filter.insert("status", status.to_string());
    }

    if let Some(search) = query.search.as_deref().map(str::trim) {
        if !search.is_empty() {
            let search_regex = Regex {
                pattern: regex::escape(search),
                options: "i".to_string(),
            };
            filter.insert(
                "$or",
                vec![
                    doc! { "first_name": { "$regex": search_regex.clone() } },
                    doc! { "last_name": { "$regex": search_regex.clone() } },
                    doc! { "email": { "$regex": search_regex.clone() } },
                    doc! { "employee_number": { "$regex": search_regex.clone() } },
                ],
            );
        }
    }

    filter
}

/// Resolve a comma-separated sort parameter into pagination keys.
///
/// Unknown keys are rejected. `_id` always ends the list so every page
/// boundary is unique.
pub fn parse_sort_keys(sort: Option<&str>) -> Result<Vec<String>, ApiError> {
    let mut keys: Vec<String> = Vec::new();

    for key in sort.unwrap_or_default().split(',').map(str::trim) {
        if key.is_empty() || key == IDENTITY_KEY {
            continue;
        }
        if key_kind(key).is_none() {
            let allowed: Vec<&str> = EMPLOYEE_SORT_KEYS.iter().map(|(name, _)| *name).collect();
            return Err(ApiError::bad_request(
                CODE_INVALID_SORT_KEY,
                format!(
                    "Cannot sort by '{}'; allowed keys: {}",
                    key,
                    allowed.join(", ")
                ),
            ));
        }
        if !keys.iter().any(|k| k == key) {
            keys.push(key.to_string());
        }
    }

    keys.push(IDENTITY_KEY.to_string());
    Ok(keys)
}

/// How cursor values of a sortable employee field are read back, or `None`
/// for fields that cannot be sorted on.
fn key_kind(key: &str) -> Option<KeyKind> {
    EMPLOYEE_SORT_KEYS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, kind)| *kind)
}

/// Apply the sort, order, limit and cursor parameters to a paginator.
pub fn apply_page_query<S: PageSource>(
    paginator: &mut Paginator<S>,
    query: &EmployeeListQuery,
    config: &Config,
) -> Result<(), ApiError> {
    let order = query
        .order
        .as_deref()
        .and_then(Order::parse)
        .unwrap_or_default();

    let keys = parse_sort_keys(query.sort.as_deref())?;
    for key in &keys {
        if let Some(kind) = key_kind(key) {
            paginator.set_key_kind(key.as_str(), kind);
        }
    }

    paginator
        .set_pagination_keys(keys)
        .set_limit(config.page_limit(query.limit))
        .set_order(order);

    if let Some(after) = query.after.as_deref().filter(|c| !c.is_empty()) {
        paginator.set_after_cursor(after);
    }
    if let Some(before) = query.before.as_deref().filter(|c| !c.is_empty()) {
        paginator.set_before_cursor(before);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::memory::MemorySource;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    fn config() -> Config {
        Config {
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            mongodb_uri: "mongodb://localhost:27017".to_string(),
            database_name: "test".to_string(),
            jwt_secret: "secret".to_string(),
            default_page_limit: 2,
            max_page_limit: 3,
        }
    }

    fn staff() -> MemorySource {
        let rows = [
            (1, "Sales", "Zhang"),
            (2, "Engineering", "Abbott"),
            (3, "Sales", "Baker"),
            (4, "Sales", "Abbott"),
            (5, "Engineering", "Young"),
        ];
        MemorySource::new(
            rows.iter()
                .map(|(id, department, last_name)| {
                    doc! { "_id": *id, "department": *department, "last_name": *last_name }
                })
                .collect(),
        )
    }

    fn ids(page: &PagingResult<Document>) -> Vec<i32> {
        page.data.iter().map(|d| d.get_i32("_id").unwrap()).collect()
    }

    #[test]
    fn test_sort_keys_default_to_identity() {
        assert_eq!(parse_sort_keys(None).unwrap(), vec!["_id"]);
        assert_eq!(parse_sort_keys(Some(" , ")).unwrap(), vec!["_id"]);
    }

    #[test]
    fn test_sort_keys_end_with_identity() {
        assert_eq!(
            parse_sort_keys(Some("_id, last_name,hired_at,last_name")).unwrap(),
            vec!["last_name", "hired_at", "_id"]
        );
    }

    #[test]
    fn test_unknown_sort_key_is_rejected() {
        let err = parse_sort_keys(Some("last_name,salary")).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), CODE_INVALID_SORT_KEY);
    }

    #[test]
    fn test_list_filter() {
        let query = EmployeeListQuery {
            department: Some(" Sales ".to_string()),
            status: Some("ON_LEAVE".to_string()),
            ..Default::default()
        };
        assert_eq!(
            build_list_filter(&query),
            doc! { "department": "Sales", "status": "on_leave" }
        );
        assert_eq!(build_list_filter(&EmployeeListQuery::default()), doc! {});
    }

    #[test]
    fn test_search_is_escaped_and_case_insensitive() {
        let query = EmployeeListQuery {
            search: Some("o'neil (jr.)".to_string()),
            ..Default::default()
        };
        let filter = build_list_filter(&query);
        let branches = filter.get_array("$or").unwrap();
        assert_eq!(branches.len(), 4);

        let regex = branches[0]
            .as_document()
            .and_then(|d| d.get_document("first_name").ok())
            .and_then(|d| d.get("$regex"))
            .unwrap();
        assert_eq!(
            regex,
            &mongodb::bson::Bson::RegularExpression(Regex {
                pattern: r"o'neil \(jr\.\)".to_string(),
                options: "i".to_string(),
            })
        );
    }

    #[test]
    fn test_hire_date_is_midnight_utc() {
        let date = parse_hire_date("2023-04-01").unwrap();
        assert_eq!(date.timestamp_millis(), 1_680_307_200_000);
        assert!(parse_hire_date("01/04/2023").is_err());
    }

    #[test]
    fn test_invalid_employee_id() {
        let err = parse_employee_id("not-an-id").unwrap_err();
        assert_eq!(err.code(), CODE_INVALID_EMPLOYEE_ID);
    }

    #[actix_web::test]
    async fn test_page_query_walks_sorted_department() {
        let source = staff();
        let filter = doc! { "department": "Sales" };
        let query = EmployeeListQuery {
            sort: Some("last_name".to_string()),
            ..Default::default()
        };

        let mut paginator = Paginator::new(&source);
        apply_page_query(&mut paginator, &query, &config()).unwrap();
        let first = paginator.paginate::<Document>(filter.clone()).await.unwrap();
        assert_eq!(ids(&first), vec![4, 3]);
        assert!(first.cursor.before_cursor.is_none());

        let next = EmployeeListQuery {
            after: first.cursor.after_cursor.clone(),
            ..query
        };
        let mut paginator = Paginator::new(&source);
        apply_page_query(&mut paginator, &next, &config()).unwrap();
        let second = paginator.paginate::<Document>(filter).await.unwrap();
        assert_eq!(ids(&second), vec![1]);
        assert!(second.cursor.after_cursor.is_none());
        assert!(second.cursor.before_cursor.is_some());
    }

    async fn walk_all(source: &MemorySource, sort: &str, order: &str) -> Vec<i32> {
        let mut seen = Vec::new();
        let mut after: Option<String> = None;

        loop {
            let query = EmployeeListQuery {
                sort: Some(sort.to_string()),
                order: Some(order.to_string()),
                after: after.clone(),
                ..Default::default()
            };
            let mut paginator = Paginator::new(source);
            apply_page_query(&mut paginator, &query, &config()).unwrap();
            let page = paginator.paginate::<Document>(doc! {}).await.unwrap();

            seen.extend(ids(&page));
            match page.cursor.after_cursor {
                Some(next) => after = Some(next),
                None => return seen,
            }
        }
    }

    #[actix_web::test]
    async fn test_digit_only_employee_numbers_page_past_first_page() {
        let source = MemorySource::new(
            ["0042", "10001", "10002", "10003", "10004"]
                .iter()
                .zip(1..)
                .map(|(number, id)| doc! { "_id": id, "employee_number": *number })
                .collect(),
        );

        assert_eq!(walk_all(&source, "employee_number", "ASC").await, vec![1, 2, 3, 4, 5]);
        assert_eq!(walk_all(&source, "employee_number", "DESC").await, vec![5, 4, 3, 2, 1]);
    }

    #[actix_web::test]
    async fn test_pre_2001_hire_dates_page_past_first_page() {
        // 1990-01-01 onward, one year apart.
        let source = MemorySource::new(
            (1..=5)
                .map(|i| {
                    let hired_at = DateTime::from_millis(631_152_000_000 + i as i64 * 31_536_000_000);
                    doc! { "_id": i, "hired_at": hired_at }
                })
                .collect(),
        );

        assert_eq!(walk_all(&source, "hired_at", "asc").await, vec![1, 2, 3, 4, 5]);
        assert_eq!(walk_all(&source, "hired_at", "desc").await, vec![5, 4, 3, 2, 1]);
    }

    #[actix_web::test]
    async fn test_page_query_caps_limit_and_ignores_empty_cursors() {
        let source = staff();
        let query = EmployeeListQuery {
            limit: Some(50),
            order: Some("desc".to_string()),
            after: Some(String::new()),
            before: Some(String::new()),
            ..Default::default()
        };

        let mut paginator = Paginator::new(&source);
        apply_page_query(&mut paginator, &query, &config()).unwrap();
        let page = paginator.paginate::<Document>(doc! {}).await.unwrap();

        assert_eq!(ids(&page), vec![5, 4, 3]);
        assert!(page.cursor.after_cursor.is_some());
        assert!(page.cursor.before_cursor.is_none());
        assert_eq!(source.queries()[0].2, 4);
    }
}
