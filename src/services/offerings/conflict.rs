//! 排课冲突检测
//!
//! 纯函数，只依赖 [`OfferingSlot`]，不访问存储层。

use chrono::NaiveTime;

use crate::errors::LmsError;
use crate::models::offerings::entities::OfferingSlot;

/// 开课被拒绝的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferingConflict {
    /// 同一学期、同一教师、同一地点已有开课
    DuplicateOffering,
    /// 同一学期、同一地点的时间段重叠
    LocationConflict,
}

impl OfferingConflict {
    pub fn reason(&self) -> &'static str {
        match self {
            OfferingConflict::DuplicateOffering => {
                "Class offering already exists for this instructor and location in this semester."
            }
            OfferingConflict::LocationConflict => {
                "Another class occupies this location during the specified times."
            }
        }
    }
}

impl From<OfferingConflict> for LmsError {
    fn from(conflict: OfferingConflict) -> Self {
        match conflict {
            OfferingConflict::DuplicateOffering => LmsError::duplicate_offering(conflict.reason()),
            OfferingConflict::LocationConflict => LmsError::schedule_conflict(conflict.reason()),
        }
    }
}

/// 同一学期、同一教师、同一地点即视为重复，不比较课程本身
pub fn is_duplicate(proposed: &OfferingSlot, existing: &OfferingSlot) -> bool {
    existing.season == proposed.season
        && existing.year == proposed.year
        && existing.instructor_uid == proposed.instructor_uid
        && existing.location == proposed.location
}

/// 同一学期同一地点，且新开课的开始或结束时间落在已有时间段内（两端闭区间）
pub fn times_overlap(proposed: &OfferingSlot, existing: &OfferingSlot) -> bool {
    if existing.season != proposed.season
        || existing.year != proposed.year
        || existing.location != proposed.location
    {
        return false;
    }

    let within = |t: NaiveTime| existing.start_time <= t && t <= existing.end_time;
    within(proposed.start_time) || within(proposed.end_time)
}

/// 依次执行重复检查和时间冲突检查，遇到第一个失败即返回
pub fn check_offering(
    proposed: &OfferingSlot,
    existing: &[&OfferingSlot],
) -> Result<(), OfferingConflict> {
    if existing.iter().any(|slot| is_duplicate(proposed, slot)) {
        return Err(OfferingConflict::DuplicateOffering);
    }

    if existing.iter().any(|slot| times_overlap(proposed, slot)) {
        return Err(OfferingConflict::LocationConflict);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn slot(location: &str, instructor: &str, start: NaiveTime, end: NaiveTime) -> OfferingSlot {
        OfferingSlot {
            season: "Fall".to_string(),
            year: 2024,
            location: location.to_string(),
            start_time: start,
            end_time: end,
            instructor_uid: instructor.to_string(),
        }
    }

    #[test]
    fn test_empty_term_accepts() {
        let proposed = slot("WEB L104", "u1", hm(9, 0), hm(10, 0));
        assert_eq!(check_offering(&proposed, &[]), Ok(()));
    }

    #[test]
    fn test_back_to_back_is_conflict() {
        let existing = slot("WEB L104", "u1", hm(9, 0), hm(10, 0));
        let proposed = slot("WEB L104", "u2", hm(10, 0), hm(11, 0));
        assert_eq!(
            check_offering(&proposed, &[&existing]),
            Err(OfferingConflict::LocationConflict)
        );
    }

    #[test]
    fn test_ending_when_existing_starts_is_conflict() {
        let existing = slot("WEB L104", "u1", hm(10, 0), hm(11, 0));
        let proposed = slot("WEB L104", "u2", hm(9, 0), hm(10, 0));
        assert_eq!(
            check_offering(&proposed, &[&existing]),
            Err(OfferingConflict::LocationConflict)
        );
    }

    #[test]
    fn test_one_minute_gap_is_accepted() {
        let existing = slot("WEB L104", "u1", hm(9, 0), hm(10, 0));
        let proposed = slot("WEB L104", "u2", hm(10, 1), hm(11, 0));
        assert_eq!(check_offering(&proposed, &[&existing]), Ok(()));
    }

    #[test]
    fn test_start_inside_existing_is_conflict() {
        let existing = slot("WEB L104", "u1", hm(9, 0), hm(10, 30));
        let proposed = slot("WEB L104", "u2", hm(10, 0), hm(11, 0));
        assert!(times_overlap(&proposed, &existing));
    }

    #[test]
    fn test_enclosing_interval_is_not_detected() {
        // 只检查新时间段的两个端点，完全包住已有时间段时不判定为冲突
        let existing = slot("WEB L104", "u1", hm(9, 0), hm(10, 0));
        let proposed = slot("WEB L104", "u2", hm(8, 0), hm(12, 0));
        assert_eq!(check_offering(&proposed, &[&existing]), Ok(()));
    }

    #[test]
    fn test_other_location_or_term_never_overlaps() {
        let existing = slot("WEB L104", "u1", hm(9, 0), hm(10, 0));
        let other_room = slot("WEB L105", "u2", hm(9, 0), hm(10, 0));
        assert!(!times_overlap(&other_room, &existing));

        let mut other_term = slot("WEB L104", "u2", hm(9, 0), hm(10, 0));
        other_term.season = "Spring".to_string();
        assert!(!times_overlap(&other_term, &existing));
    }

    #[test]
    fn test_duplicate_check_ignores_course() {
        // 重复检查只比较学期、教师和地点；即便课程不同、时间不重叠也会被拒绝
        let existing = slot("WEB L104", "u1", hm(8, 0), hm(9, 0));
        let proposed = slot("WEB L104", "u1", hm(13, 0), hm(14, 0));
        assert_eq!(
            check_offering(&proposed, &[&existing]),
            Err(OfferingConflict::DuplicateOffering)
        );
    }

    #[test]
    fn test_duplicate_is_reported_before_overlap() {
        let overlapping = slot("WEB L104", "u2", hm(9, 0), hm(10, 0));
        let same_instructor = slot("WEB L104", "u1", hm(15, 0), hm(16, 0));
        let proposed = slot("WEB L104", "u1", hm(9, 30), hm(10, 30));
        assert_eq!(
            check_offering(&proposed, &[&overlapping, &same_instructor]),
            Err(OfferingConflict::DuplicateOffering)
        );
    }

    #[test]
    fn test_same_instructor_other_room_is_allowed() {
        let existing = slot("WEB L104", "u1", hm(9, 0), hm(10, 0));
        let proposed = slot("WEB L105", "u1", hm(9, 0), hm(10, 0));
        assert_eq!(check_offering(&proposed, &[&existing]), Ok(()));
    }

    #[test]
    fn test_conflict_maps_to_distinct_errors() {
        let duplicate: LmsError = OfferingConflict::DuplicateOffering.into();
        let overlap: LmsError = OfferingConflict::LocationConflict.into();
        assert_eq!(duplicate.code(), "E008");
        assert_eq!(overlap.code(), "E009");
        assert_ne!(duplicate.message(), overlap.message());
    }
}
