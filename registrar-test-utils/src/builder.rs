//! Declarative test builder for Phase 1 setup.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestSetup};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables
/// and record fixtures. Methods can be chained together and finalized with
/// `build()` to create a complete test setup.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_school_tables: bool,

    // Database fixtures to insert
    campuses: Vec<(String, String)>, // (name, city)
    counters: Vec<(String, i64)>,    // (key, starting value)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    ///
    /// # Returns
    /// - `TestBuilder` - A new builder instance ready for configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_school_tables: false,
            campuses: Vec::new(),
            counters: Vec::new(),
        }
    }

    /// Add the full set of school tables to the test database.
    ///
    /// Creates every table the registrar works with: campuses, user accounts,
    /// staff, classrooms and their parents, students, counters, transfer
    /// requests, identifier history, and attendance records.
    ///
    /// # Arguments
    /// - `self` - The builder instance
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_school_tables(mut self) -> Self {
        self.include_school_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```no_run
    /// use registrar_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), registrar_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Campus)
    ///     .with_table(GlobalCounter)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a campus fixture into the database.
    ///
    /// Queues a campus record to be inserted during `build()`. The campus is
    /// created without a code; campus names must be distinct within one test.
    ///
    /// # Arguments
    /// - `name` - The campus name
    /// - `city` - The city the campus operates in
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_campus(mut self, name: impl Into<String>, city: impl Into<String>) -> Self {
        self.campuses.push((name.into(), city.into()));
        self
    }

    /// Seed a sequence counter at an arbitrary value.
    ///
    /// Queues a counter record to be inserted during `build()`. Subsequent
    /// allocations from that key continue above the seeded value.
    ///
    /// # Arguments
    /// - `key` - The counter key, such as `"student"` or `"employee"`
    /// - `value` - The last value already handed out
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_counter(mut self, key: impl Into<String>, value: i64) -> Self {
        self.counters.push((key.into(), value));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (school tables if specified, then custom tables)
    /// 2. Inserts database fixtures (campuses, then counters)
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_school_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Campus),
                schema.create_table_from_entity(entity::prelude::UserAccount),
                schema.create_table_from_entity(entity::prelude::Coordinator),
                schema.create_table_from_entity(entity::prelude::Level),
                schema.create_table_from_entity(entity::prelude::Grade),
                schema.create_table_from_entity(entity::prelude::Teacher),
                schema.create_table_from_entity(entity::prelude::Classroom),
                schema.create_table_from_entity(entity::prelude::Principal),
                schema.create_table_from_entity(entity::prelude::Student),
                schema.create_table_from_entity(entity::prelude::GlobalCounter),
                schema.create_table_from_entity(entity::prelude::TransferRequest),
                schema.create_table_from_entity(entity::prelude::IdHistory),
                schema.create_table_from_entity(entity::prelude::Attendance),
                schema.create_table_from_entity(entity::prelude::AttendanceSummary),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures (using existing fixture methods)
        for (name, city) in self.campuses {
            setup.school().insert_campus(&name, &city).await?;
        }

        for (key, value) in self.counters {
            setup.school().insert_counter(&key, value).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
