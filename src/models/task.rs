use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Task embedded in a user document (`users.tasks`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Tasks are written outside this service, the title is not guaranteed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, from_document};

    #[test]
    fn test_task_without_title_deserializes() {
        let task: Task = from_document(doc! { "description": "Sin titulo", "priority": 3 }).unwrap();
        assert_eq!(task.title, None);
        assert_eq!(task.description.as_deref(), Some("Sin titulo"));
        assert_eq!(task.priority, Some(3));
    }
}
