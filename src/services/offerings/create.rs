use tracing::{info, warn};

use super::OfferingService;
use super::conflict::check_offering;
use crate::errors::{LmsError, Result};
use crate::models::offerings::{entities::ClassOffering, requests::CreateOfferingRequest};

pub async fn try_create_offering(
    service: &OfferingService,
    req: CreateOfferingRequest,
) -> Result<ClassOffering> {
    let storage = service.get_storage();

    // 课程必须存在
    let course = match storage
        .get_course_by_subject_and_number(&req.subject, req.number)
        .await?
    {
        Some(course) => course,
        None => {
            warn!(
                "Offering rejected: course {} {} does not exist",
                req.subject, req.number
            );
            return Err(LmsError::not_found("Course does not exist."));
        }
    };

    let proposed = req.slot();

    // 持有该学期该地点的锁，直到写入完成
    let lock = service.slot_lock(&proposed.season, proposed.year, &proposed.location);
    let _guard = lock.lock().await;

    let existing = storage
        .list_term_offerings(&proposed.season, proposed.year)
        .await?;
    let existing_slots: Vec<_> = existing.iter().map(|o| &o.slot).collect();

    if let Err(conflict) = check_offering(&proposed, &existing_slots) {
        warn!(
            "Offering of {} {} rejected ({} {} at {}): {}",
            course.subject,
            course.number,
            proposed.season,
            proposed.year,
            proposed.location,
            conflict.reason()
        );
        return Err(conflict.into());
    }

    let offering = storage.create_offering(course.id, proposed).await?;
    info!(
        "Class offering {} created for {} {} ({} {})",
        offering.id, course.subject, course.number, offering.slot.season, offering.slot.year
    );

    Ok(offering)
}
