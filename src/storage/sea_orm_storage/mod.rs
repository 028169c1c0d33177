//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod categories;
mod enrollments;
mod gradebook;
mod offerings;
mod submissions;

use crate::config::AppConfig;
use crate::errors::{LmsError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 根据给定配置连接数据库并运行迁移
    pub async fn connect(config: &AppConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| LmsError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| LmsError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5))
            .pragma("temp_store", "memory");

        // 内存数据库不使用 WAL
        if !url.contains(":memory:") {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("cache_size", "-64000")
                .pragma("mmap_size", "536870912")
                .pragma("wal_autocheckpoint", "1000");
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| LmsError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| LmsError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(LmsError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    coursework::{
        entities::{Assignment, AssignmentCategory, Submission},
        requests::{CreateAssignmentRequest, CreateCategoryRequest},
    },
    enrollments::entities::Enrollment,
    grades::entities::{ClassGrader, LetterGrade, RecomputeOutcome, Rescore},
    offerings::entities::{ClassOffering, Course, OfferingSlot},
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 开课模块
    async fn get_course_by_subject_and_number(
        &self,
        subject: &str,
        number: i32,
    ) -> Result<Option<Course>> {
        self.get_course_by_subject_and_number_impl(subject, number)
            .await
    }

    async fn get_offering_by_id(&self, class_id: i64) -> Result<Option<ClassOffering>> {
        self.get_offering_by_id_impl(class_id).await
    }

    async fn list_term_offerings(&self, season: &str, year: i32) -> Result<Vec<ClassOffering>> {
        self.list_term_offerings_impl(season, year).await
    }

    async fn create_offering(&self, course_id: i64, slot: OfferingSlot) -> Result<ClassOffering> {
        self.create_offering_impl(course_id, slot).await
    }

    async fn list_instructor_offerings(
        &self,
        instructor_uid: &str,
    ) -> Result<Vec<(ClassOffering, Course)>> {
        self.list_instructor_offerings_impl(instructor_uid).await
    }

    // 分类模块
    async fn get_category_by_name(
        &self,
        class_id: i64,
        name: &str,
    ) -> Result<Option<AssignmentCategory>> {
        self.get_category_by_name_impl(class_id, name).await
    }

    async fn create_category(&self, req: CreateCategoryRequest) -> Result<AssignmentCategory> {
        self.create_category_impl(req).await
    }

    async fn list_class_categories_with_assignments(
        &self,
        class_id: i64,
    ) -> Result<Vec<(AssignmentCategory, Vec<Assignment>)>> {
        self.list_class_categories_with_assignments_impl(class_id)
            .await
    }

    // 作业模块
    async fn get_assignment_by_name(
        &self,
        category_id: i64,
        name: &str,
    ) -> Result<Option<Assignment>> {
        self.get_assignment_by_name_impl(category_id, name).await
    }

    async fn create_assignment(
        &self,
        category_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        self.create_assignment_impl(category_id, req).await
    }

    // 提交模块
    async fn get_submission(
        &self,
        assignment_id: i64,
        student_uid: &str,
    ) -> Result<Option<Submission>> {
        self.get_submission_impl(assignment_id, student_uid).await
    }

    async fn upsert_submission(
        &self,
        assignment_id: i64,
        student_uid: &str,
        contents: &str,
    ) -> Result<Submission> {
        self.upsert_submission_impl(assignment_id, student_uid, contents)
            .await
    }

    async fn update_submission_score(
        &self,
        submission_id: i64,
        score: f64,
    ) -> Result<Option<Submission>> {
        self.update_submission_score_impl(submission_id, score)
            .await
    }

    async fn list_assignment_submissions(&self, assignment_id: i64) -> Result<Vec<Submission>> {
        self.list_assignment_submissions_impl(assignment_id).await
    }

    async fn list_student_submissions(
        &self,
        student_uid: &str,
        assignment_ids: &[i64],
    ) -> Result<Vec<Submission>> {
        self.list_student_submissions_impl(student_uid, assignment_ids)
            .await
    }

    // 选课模块
    async fn get_enrollment(
        &self,
        class_id: i64,
        student_uid: &str,
    ) -> Result<Option<Enrollment>> {
        self.get_enrollment_impl(class_id, student_uid).await
    }

    async fn create_enrollment(&self, class_id: i64, student_uid: &str) -> Result<Enrollment> {
        self.create_enrollment_impl(class_id, student_uid).await
    }

    async fn list_class_enrollments(&self, class_id: i64) -> Result<Vec<Enrollment>> {
        self.list_class_enrollments_impl(class_id).await
    }

    async fn list_student_enrollments(&self, student_uid: &str) -> Result<Vec<Enrollment>> {
        self.list_student_enrollments_impl(student_uid).await
    }

    async fn list_student_classes(
        &self,
        student_uid: &str,
    ) -> Result<Vec<(Enrollment, ClassOffering, Course)>> {
        self.list_student_classes_impl(student_uid).await
    }

    // 成绩模块
    async fn recompute_class_grades(
        &self,
        class_id: i64,
        rescore: Option<Rescore>,
        grader: &ClassGrader,
    ) -> Result<RecomputeOutcome> {
        self.recompute_class_grades_impl(class_id, rescore, grader)
            .await
    }

    async fn update_enrollment_grades(
        &self,
        class_id: i64,
        grades: &[(String, LetterGrade)],
    ) -> Result<u64> {
        self.update_enrollment_grades_impl(class_id, grades).await
    }
}
