//! Badge categories for the status and priority columns
//!
//! Matching is case-insensitive; anything unrecognized falls into `Default`.

/// Display category for a status value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    InProcess,
    NeedToStart,
    Complete,
    Blocked,
    Default,
}

/// Display category for a priority value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityCategory {
    High,
    Medium,
    Low,
    Default,
}

pub fn classify_status(value: &str) -> StatusCategory {
    match value.to_lowercase().as_str() {
        "in-process" => StatusCategory::InProcess,
        "need to start" => StatusCategory::NeedToStart,
        "complete" => StatusCategory::Complete,
        "blocked" => StatusCategory::Blocked,
        _ => StatusCategory::Default,
    }
}

pub fn classify_priority(value: &str) -> PriorityCategory {
    match value.to_lowercase().as_str() {
        "high" => PriorityCategory::High,
        "medium" => PriorityCategory::Medium,
        "low" => PriorityCategory::Low,
        _ => PriorityCategory::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_case_insensitive() {
        assert_eq!(classify_status("BLOCKED"), StatusCategory::Blocked);
        assert_eq!(classify_status("blocked"), StatusCategory::Blocked);
        assert_eq!(classify_status("Complete"), StatusCategory::Complete);
        assert_eq!(classify_status("Need To Start"), StatusCategory::NeedToStart);
        assert_eq!(classify_status("in-process"), StatusCategory::InProcess);
    }

    #[test]
    fn unknown_status_is_default() {
        assert_eq!(classify_status("unknown"), StatusCategory::Default);
        assert_eq!(classify_status(""), StatusCategory::Default);
        assert_eq!(classify_status(" blocked"), StatusCategory::Default);
    }

    #[test]
    fn priority_categories() {
        assert_eq!(classify_priority("High"), PriorityCategory::High);
        assert_eq!(classify_priority("MEDIUM"), PriorityCategory::Medium);
        assert_eq!(classify_priority("low"), PriorityCategory::Low);
        assert_eq!(classify_priority("urgent"), PriorityCategory::Default);
    }
}
