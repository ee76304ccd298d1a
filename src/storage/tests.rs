//! Tests for the storage layer composition

#[cfg(test)]
mod tests {
    use crate::config::StorageConfig;
    use crate::storage::{StorageLayer, UserStore};
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_storage_layer_survives_missing_seeds() {
        let config = StorageConfig {
            users_seed_path: PathBuf::from("/nonexistent/users.json"),
            courses_seed_path: PathBuf::from("/nonexistent/courses.json"),
        };

        let storage = StorageLayer::new(&config).await;

        assert!(storage.users.is_empty());
        assert!(storage.courses.is_empty());
    }

    #[tokio::test]
    async fn test_storage_layer_loads_fixtures() {
        let dir = tempfile::tempdir().unwrap();
        let users_path = dir.path().join("users.json");
        let courses_path = dir.path().join("courses.json");

        std::fs::write(
            &users_path,
            r#"[
                {"username": "alice", "password": "secret", "roles": ["MANAGER"], "department": "MARKETING"},
                {"username": "bob", "password": "hunter2", "roles": ["CONSULTANT"], "department": "ACCOUNTING"}
            ]"#,
        )
        .unwrap();
        std::fs::write(
            &courses_path,
            r#"[
                {"title": "Cold Calls", "topic": "Sales", "learningFormats": ["CLASSROOM"], "bestseller": false, "startDate": "2025-09-15"}
            ]"#,
        )
        .unwrap();

        let config = StorageConfig {
            users_seed_path: users_path,
            courses_seed_path: courses_path,
        };

        let storage = StorageLayer::new(&config).await;

        assert_eq!(storage.users.len(), 2);
        assert_eq!(storage.courses.len(), 1);
        assert!(storage.users.get_by_username("bob").await.is_ok());
    }
}
