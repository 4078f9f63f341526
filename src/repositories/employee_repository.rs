//! Employee repository for all MongoDB operations on the employees collection.

use log::{debug, info};
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};

use crate::constants::{COLLECTION_EMPLOYEES, ERR_FAILED_FETCH_EMPLOYEE};
use crate::errors::ApiError;
use crate::models::Employee;
use crate::pagination::Paginator;

/// Repository for employee-related database operations.
pub struct EmployeeRepository {
    collection: Collection<Employee>,
    documents: Collection<Document>,
}

impl EmployeeRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_EMPLOYEES),
            documents: db.collection(COLLECTION_EMPLOYEES),
        }
    }

    /// Create database indexes for commonly queried fields.
    ///
    /// Called once during application startup. Besides the uniqueness
    /// constraints, every sortable field gets a compound index ending in
    /// `_id` so cursor queries on it stay index-backed:
    /// - Unique index on `email`
    /// - Unique index on `employee_number`
    /// - Compound indexes `department/_id`, `last_name/_id`, `hired_at/_id`
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for employees collection...");

        let unique = || IndexOptions::builder().unique(true).build();

        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "email": 1 })
                .options(unique())
                .build(),
            IndexModel::builder()
                .keys(doc! { "employee_number": 1 })
                .options(unique())
                .build(),
            IndexModel::builder()
                .keys(doc! { "department": 1, "_id": 1 })
                .build(),
            IndexModel::builder()
                .keys(doc! { "last_name": 1, "_id": 1 })
                .build(),
            IndexModel::builder()
                .keys(doc! { "hired_at": 1, "_id": 1 })
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        info!("Database indexes created successfully");
        Ok(())
    }

    /// Insert a new employee, returning its generated id.
    pub async fn insert(&self, employee: &Employee) -> Result<ObjectId, ApiError> {
        let result = self.collection.insert_one(employee).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| ApiError::internal(ERR_FAILED_FETCH_EMPLOYEE))
    }

    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<Employee>, ApiError> {
        debug!("Repository: Finding employee by ID: {}", id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Find an employee by email address (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, ApiError> {
        debug!("Repository: Finding employee by email");
        Ok(self
            .collection
            .find_one(doc! { "email": email.to_lowercase() })
            .await?)
    }

    pub async fn find_by_employee_number(
        &self,
        employee_number: &str,
    ) -> Result<Option<Employee>, ApiError> {
        debug!("Repository: Finding employee by number: {}", employee_number);
        Ok(self
            .collection
            .find_one(doc! { "employee_number": employee_number })
            .await?)
    }

    /// Delete an employee, returning whether a document was removed.
    pub async fn delete(&self, id: ObjectId) -> Result<bool, ApiError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    /// A fresh paginator over the raw employee documents.
    ///
    /// Cursors are built from raw documents, so paging reads the untyped
    /// collection and the caller deserializes each page.
    pub fn paginator(&self) -> Paginator<&Collection<Document>> {
        Paginator::new(&self.documents)
    }
}
