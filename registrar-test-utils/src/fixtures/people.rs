use chrono::Utc;
use entity::enums::{Shift, UserRole};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{CoordinatorModel, PrincipalModel, StudentModel, TeacherModel, UserAccountModel},
    TestSetup,
};

impl TestSetup {
    pub fn people<'a>(&'a mut self) -> PeopleFixtures<'a> {
        PeopleFixtures { setup: self }
    }
}

pub struct PeopleFixtures<'a> {
    setup: &'a mut TestSetup,
}

/// Login email derived from a person's name. Emails are unique, so staff
/// fixtures inserted in one test must use distinct names.
fn derived_email(name: &str) -> String {
    format!("{}@example.test", name.to_lowercase().replace(' ', "."))
}

impl<'a> PeopleFixtures<'a> {
    pub async fn insert_user_account(
        &self,
        email: &str,
        name: &str,
        role: UserRole,
    ) -> Result<UserAccountModel, TestError> {
        Ok(
            entity::prelude::UserAccount::insert(entity::user_account::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                name: ActiveValue::Set(name.to_string()),
                role: ActiveValue::Set(role),
                is_active: ActiveValue::Set(true),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts a teacher along with a login account, without an employee code.
    pub async fn insert_teacher(
        &self,
        campus_id: i32,
        name: &str,
        shift: Shift,
    ) -> Result<TeacherModel, TestError> {
        let account = self
            .insert_user_account(&derived_email(name), name, UserRole::Teacher)
            .await?;

        Ok(
            entity::prelude::Teacher::insert(entity::teacher::ActiveModel {
                campus_id: ActiveValue::Set(campus_id),
                user_account_id: ActiveValue::Set(account.id),
                name: ActiveValue::Set(name.to_string()),
                shift: ActiveValue::Set(shift),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts a teacher that already carries an employee code.
    pub async fn insert_coded_teacher(
        &self,
        campus_id: i32,
        name: &str,
        shift: Shift,
        code: &str,
    ) -> Result<TeacherModel, TestError> {
        let account = self
            .insert_user_account(&derived_email(name), name, UserRole::Teacher)
            .await?;

        Ok(
            entity::prelude::Teacher::insert(entity::teacher::ActiveModel {
                campus_id: ActiveValue::Set(campus_id),
                user_account_id: ActiveValue::Set(account.id),
                name: ActiveValue::Set(name.to_string()),
                shift: ActiveValue::Set(shift),
                employee_code: ActiveValue::Set(Some(code.to_string())),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_coordinator(
        &self,
        campus_id: i32,
        name: &str,
        shift: Shift,
    ) -> Result<CoordinatorModel, TestError> {
        let account = self
            .insert_user_account(&derived_email(name), name, UserRole::Coordinator)
            .await?;

        Ok(
            entity::prelude::Coordinator::insert(entity::coordinator::ActiveModel {
                campus_id: ActiveValue::Set(campus_id),
                user_account_id: ActiveValue::Set(account.id),
                name: ActiveValue::Set(name.to_string()),
                shift: ActiveValue::Set(shift),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts a principal on the morning shift along with a login account.
    pub async fn insert_principal(
        &self,
        campus_id: i32,
        name: &str,
    ) -> Result<PrincipalModel, TestError> {
        let account = self
            .insert_user_account(&derived_email(name), name, UserRole::Principal)
            .await?;

        Ok(
            entity::prelude::Principal::insert(entity::principal::ActiveModel {
                campus_id: ActiveValue::Set(campus_id),
                user_account_id: ActiveValue::Set(account.id),
                name: ActiveValue::Set(name.to_string()),
                shift: ActiveValue::Set(Shift::Morning),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts a student without a login account or student code.
    pub async fn insert_student(
        &self,
        campus_id: i32,
        classroom_id: Option<i32>,
        name: &str,
        shift: Shift,
    ) -> Result<StudentModel, TestError> {
        Ok(
            entity::prelude::Student::insert(entity::student::ActiveModel {
                campus_id: ActiveValue::Set(campus_id),
                classroom_id: ActiveValue::Set(classroom_id),
                name: ActiveValue::Set(name.to_string()),
                guardian_name: ActiveValue::Set(format!("Guardian of {name}")),
                shift: ActiveValue::Set(shift),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts a student that already carries a student code.
    pub async fn insert_coded_student(
        &self,
        campus_id: i32,
        classroom_id: Option<i32>,
        name: &str,
        shift: Shift,
        code: &str,
    ) -> Result<StudentModel, TestError> {
        Ok(
            entity::prelude::Student::insert(entity::student::ActiveModel {
                campus_id: ActiveValue::Set(campus_id),
                classroom_id: ActiveValue::Set(classroom_id),
                name: ActiveValue::Set(name.to_string()),
                guardian_name: ActiveValue::Set(format!("Guardian of {name}")),
                shift: ActiveValue::Set(shift),
                student_code: ActiveValue::Set(Some(code.to_string())),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
