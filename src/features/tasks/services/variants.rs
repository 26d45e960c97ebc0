use crate::components::BadgeVariant;
use crate::core::models::{TaskStatus, TaskType};

pub fn type_variant(task_type: &TaskType) -> BadgeVariant {
    match task_type {
        TaskType::React => BadgeVariant::React,
        TaskType::Maintain => BadgeVariant::Maintain,
        TaskType::Improve => BadgeVariant::Improve,
        TaskType::Other(_) => BadgeVariant::Default,
    }
}

pub fn status_variant(status: &TaskStatus) -> BadgeVariant {
    match status {
        TaskStatus::ToDo => BadgeVariant::Todo,
        TaskStatus::InProgress => BadgeVariant::Progress,
        TaskStatus::Done => BadgeVariant::Done,
        TaskStatus::Other(_) => BadgeVariant::Default,
    }
}
