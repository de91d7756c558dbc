/// Basic integration tests
use habit_store::*;
use std::time::Duration;
use tempfile::tempdir;

#[cfg(test)]
mod basic_integration_tests {
    use super::*;

    #[tokio::test]
    async fn test_store_basic_workflow() {
        let dir = tempdir().expect("Failed to create temp dir");
        let storage = FileStorage::new(dir.path()).expect("Failed to create storage");
        let mut store = HabitStore::with_seed_delay(storage, Duration::ZERO);

        // First run seeds the defaults.
        store.fetch_habits().await;
        assert_eq!(store.state().habits().len(), 2);

        let id = store
            .add_habit("Drink Water", Frequency::Daily)
            .expect("Failed to add habit")
            .id
            .clone();
        assert_eq!(store.state().habits().len(), 3);

        let day = "2024-01-01".parse().expect("Failed to parse date");
        store.toggle_habit(&id, day).expect("Failed to toggle");
        store.delete_habit(&id).expect("Failed to delete");
        assert_eq!(store.state().habits().len(), 2);
    }

    #[tokio::test]
    async fn test_habits_persist_across_stores() {
        let dir = tempdir().expect("Failed to create temp dir");

        let added_id = {
            let storage = FileStorage::new(dir.path()).expect("Failed to create storage");
            let mut store = HabitStore::with_seed_delay(storage, Duration::ZERO);
            store.fetch_habits().await;
            store
                .add_habit("Journal", Frequency::Weekly)
                .expect("Failed to add habit")
                .id
                .clone()
        };

        // A second store over the same directory sees the stored collection
        // and does not overwrite it with defaults.
        let storage = FileStorage::new(dir.path()).expect("Failed to create storage");
        let mut store = HabitStore::with_seed_delay(storage, Duration::ZERO);
        store.fetch_habits().await;

        let habits = store.state().habits();
        assert_eq!(habits.len(), 3);
        assert!(habits.iter().any(|h| h.id == added_id));
    }

    #[tokio::test]
    async fn test_completion_history_round_trips_through_disk() {
        let dir = tempdir().expect("Failed to create temp dir");
        let day = "2024-06-15".parse().expect("Failed to parse date");

        let id = {
            let storage = FileStorage::new(dir.path()).expect("Failed to create storage");
            let mut store = HabitStore::with_seed_delay(storage, Duration::ZERO);
            store.fetch_habits().await;
            let id = store.state().habits()[0].id.clone();
            store.toggle_habit(&id, day).expect("Failed to toggle");
            id
        };

        let storage = FileStorage::new(dir.path()).expect("Failed to create storage");
        let mut store = HabitStore::with_seed_delay(storage, Duration::ZERO);
        store.fetch_habits().await;

        let habit = store
            .state()
            .habits()
            .iter()
            .find(|h| h.id == id)
            .expect("Habit missing after reload");
        assert!(habit.is_completed_on(day));
    }

    #[test]
    fn test_storage_interface() {
        let dir = tempdir().expect("Failed to create temp dir");
        let storage = FileStorage::new(dir.path()).expect("Failed to create storage");

        // Test that both backends implement the HabitStorage trait
        let _: &dyn HabitStorage = &storage;
        let memory = MemoryStorage::new();
        let _: &dyn HabitStorage = &memory;
    }
}
