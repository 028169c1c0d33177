use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::services::{CourseworkService, EnrollmentService, GradeService, OfferingService};
use crate::storage::Storage;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub offerings: OfferingService,
    pub coursework: CourseworkService,
    pub enrollments: EnrollmentService,
    pub grades: Arc<GradeService>,
}

/// 准备运行上下文
/// 连接存储、完成迁移，并构建共享同一存储的各个服务
pub async fn prepare_startup(config: &AppConfig) -> Result<StartupContext> {
    dotenv::dotenv().ok();

    warn!(
        "Preparing {} ({} v{}, {} environment)",
        config.app.system_name,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.app.environment
    );

    let started = chrono::Utc::now();

    let storage = crate::storage::create_storage(config).await?;
    warn!("Storage backend initialized and migrations completed");

    let grades = Arc::new(GradeService::new(storage.clone()));
    let context = StartupContext {
        offerings: OfferingService::new(storage.clone()),
        coursework: CourseworkService::new(storage.clone(), grades.clone()),
        enrollments: EnrollmentService::new(storage.clone()),
        grades,
        storage,
    };

    debug!(
        "Startup completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(started)
            .num_milliseconds()
    );

    Ok(context)
}
