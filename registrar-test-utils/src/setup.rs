use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

pub struct TestSetup {
    pub db: DatabaseConnection,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        // One shared in-memory database; sea-orm pins the pool to a single
        // connection for `sqlite::memory:` so every query sees the same tables.
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup { db })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_school_tables {
    // Pattern 1: No entities provided
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
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
                schema.create_table_from_entity(entity::prelude::AttendanceSummary)
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
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
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
