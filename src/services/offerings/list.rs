use super::OfferingService;
use crate::errors::Result;
use crate::models::offerings::responses::InstructorClassItem;

pub async fn list_instructor_classes(
    service: &OfferingService,
    instructor_uid: &str,
) -> Result<Vec<InstructorClassItem>> {
    let storage = service.get_storage();

    let offerings = storage.list_instructor_offerings(instructor_uid).await?;

    Ok(offerings
        .into_iter()
        .map(|(offering, course)| InstructorClassItem {
            class_id: offering.id,
            subject: course.subject,
            number: course.number,
            name: course.name,
            season: offering.slot.season,
            year: offering.slot.year,
            location: offering.slot.location,
            start_time: offering.slot.start_time,
            end_time: offering.slot.end_time,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::super::OfferingService;
    use crate::models::offerings::requests::CreateOfferingRequest;
    use crate::storage::test_support::{seed_course, shared_memory_storage};

    fn request(
        number: i32,
        season: &str,
        location: &str,
        instructor: &str,
    ) -> CreateOfferingRequest {
        CreateOfferingRequest {
            subject: "MATH".to_string(),
            number,
            season: season.to_string(),
            year: 2025,
            start_time: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(14, 15, 0).unwrap(),
            location: location.to_string(),
            instructor_uid: instructor.to_string(),
        }
    }

    #[tokio::test]
    async fn test_lists_only_own_classes_with_course_info() {
        let (raw, storage) = shared_memory_storage().await;
        seed_course(&raw, "MATH", 1210).await;
        seed_course(&raw, "MATH", 2250).await;
        let service = OfferingService::new(storage);

        service
            .try_create_offering(request(1210, "Spring", "LCB 121", "u0000007"))
            .await
            .unwrap();
        service
            .try_create_offering(request(2250, "Fall", "LCB 215", "u0000007"))
            .await
            .unwrap();
        service
            .try_create_offering(request(1210, "Fall", "JWB 335", "u0000008"))
            .await
            .unwrap();

        let classes = service.list_instructor_classes("u0000007").await.unwrap();

        assert_eq!(classes.len(), 2);
        assert_eq!(classes[0].number, 1210);
        assert_eq!(classes[0].name, "MATH 1210");
        assert_eq!(classes[0].season, "Spring");
        assert_eq!(classes[1].number, 2250);
        assert_eq!(classes[1].location, "LCB 215");
        assert_eq!(
            classes[1].start_time,
            NaiveTime::from_hms_opt(13, 0, 0).unwrap()
        );
    }

    #[tokio::test]
    async fn test_instructor_without_classes() {
        let (_raw, storage) = shared_memory_storage().await;
        let service = OfferingService::new(storage);

        let classes = service.list_instructor_classes("u0000404").await.unwrap();
        assert!(classes.is_empty());
    }
}
