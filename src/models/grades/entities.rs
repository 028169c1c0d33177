use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// 字母成绩
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LetterGrade {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "D+")]
    DPlus,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "D-")]
    DMinus,
    #[serde(rename = "F")]
    F,
}

/// 百分制分数线，从高到低匹配，命中第一条即返回
const GRADE_THRESHOLDS: [(f64, LetterGrade); 11] = [
    (93.0, LetterGrade::A),
    (90.0, LetterGrade::AMinus),
    (87.0, LetterGrade::BPlus),
    (83.0, LetterGrade::B),
    (80.0, LetterGrade::BMinus),
    (77.0, LetterGrade::CPlus),
    (73.0, LetterGrade::C),
    (70.0, LetterGrade::CMinus),
    (67.0, LetterGrade::DPlus),
    (63.0, LetterGrade::D),
    (60.0, LetterGrade::DMinus),
];

impl LetterGrade {
    /// 百分制分数转换为字母成绩，分数线为闭区间下界
    pub fn from_percentage(percentage: f64) -> Self {
        GRADE_THRESHOLDS
            .iter()
            .find(|(minimum, _)| percentage >= *minimum)
            .map(|(_, letter)| *letter)
            .unwrap_or(LetterGrade::F)
    }

    /// 绩点
    pub fn points(&self) -> f64 {
        match self {
            LetterGrade::A => 4.0,
            LetterGrade::AMinus => 3.7,
            LetterGrade::BPlus => 3.3,
            LetterGrade::B => 3.0,
            LetterGrade::BMinus => 2.7,
            LetterGrade::CPlus => 2.3,
            LetterGrade::C => 2.0,
            LetterGrade::CMinus => 1.7,
            LetterGrade::DPlus => 1.3,
            LetterGrade::D => 1.0,
            LetterGrade::DMinus => 0.7,
            LetterGrade::F => 0.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::AMinus => "A-",
            LetterGrade::BPlus => "B+",
            LetterGrade::B => "B",
            LetterGrade::BMinus => "B-",
            LetterGrade::CPlus => "C+",
            LetterGrade::C => "C",
            LetterGrade::CMinus => "C-",
            LetterGrade::DPlus => "D+",
            LetterGrade::D => "D",
            LetterGrade::DMinus => "D-",
            LetterGrade::F => "F",
        }
    }
}

impl std::fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LetterGrade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(LetterGrade::A),
            "A-" => Ok(LetterGrade::AMinus),
            "B+" => Ok(LetterGrade::BPlus),
            "B" => Ok(LetterGrade::B),
            "B-" => Ok(LetterGrade::BMinus),
            "C+" => Ok(LetterGrade::CPlus),
            "C" => Ok(LetterGrade::C),
            "C-" => Ok(LetterGrade::CMinus),
            "D+" => Ok(LetterGrade::DPlus),
            "D" => Ok(LetterGrade::D),
            "D-" => Ok(LetterGrade::DMinus),
            "F" => Ok(LetterGrade::F),
            _ => Err(format!("Invalid letter grade: {s}")),
        }
    }
}

/// 成绩汇总用的作业信息
#[derive(Debug, Clone, PartialEq)]
pub struct GradebookAssignment {
    pub assignment_id: i64,
    pub max_points: f64,
}

/// 成绩汇总用的分类信息
#[derive(Debug, Clone, PartialEq)]
pub struct GradebookCategory {
    pub category_id: i64,
    pub weight: f64,
    pub assignments: Vec<GradebookAssignment>,
}

/// 某个班级的成绩快照
#[derive(Debug, Clone, Default)]
pub struct Gradebook {
    pub categories: Vec<GradebookCategory>,
    // 已选课学生
    pub students: Vec<String>,
    // student_uid -> (assignment_id -> score)
    pub scores: HashMap<String, HashMap<i64, f64>>,
}

impl Gradebook {
    /// 学生在某作业上的得分，未提交视为 0
    pub fn score_of(&self, student_uid: &str, assignment_id: i64) -> f64 {
        self.scores
            .get(student_uid)
            .and_then(|by_assignment| by_assignment.get(&assignment_id))
            .copied()
            .unwrap_or(0.0)
    }
}

/// 由成绩快照算出班级各学生的字母成绩
pub type ClassGrader = dyn Fn(&Gradebook) -> Vec<(String, LetterGrade)> + Send + Sync;

/// 重算前先写入的提交分数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rescore {
    pub submission_id: i64,
    pub score: f64,
}

/// 一次重算的结果
#[derive(Debug, Clone, PartialEq)]
pub struct RecomputeOutcome {
    // 本次写入分数后的提交
    pub rescored: Option<crate::models::coursework::entities::Submission>,
    pub enrolled: usize,
    pub updated: u64,
}
