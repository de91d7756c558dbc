/// Basic unit tests to verify core functionality
use habit_store::*;
use std::time::Duration;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;

    #[test]
    fn test_habit_creation() {
        let habit = Habit::new("Test Habit".to_string(), Frequency::Daily);

        assert_eq!(habit.name, "Test Habit");
        assert_eq!(habit.frequency, Frequency::Daily);
        assert!(habit.completed_dates.is_empty());
    }

    #[test]
    fn test_frequency_parsing() {
        let daily: Frequency = "daily".parse().expect("Failed to parse daily");
        let weekly: Frequency = "weekly".parse().expect("Failed to parse weekly");

        assert_eq!(daily, Frequency::Daily);
        assert_eq!(weekly, Frequency::Weekly);
        assert!("hourly".parse::<Frequency>().is_err());
    }

    #[test]
    fn test_memory_storage_creation() {
        let storage = MemoryStorage::new();
        assert!(storage.load().expect("Failed to load").is_empty());
    }

    #[test]
    fn test_store_creation() {
        let store = HabitStore::new(MemoryStorage::new());
        assert!(store.state().habits().is_empty());
        assert!(!store.state().is_loading());
        assert!(store.state().error().is_none());
    }

    #[tokio::test]
    async fn test_fetch_seeds_two_default_habits() {
        let mut store = HabitStore::with_seed_delay(MemoryStorage::new(), Duration::ZERO);
        store.fetch_habits().await;

        let habits = store.state().habits();
        assert_eq!(habits.len(), 2);
        assert_eq!(habits[0].name, "Read");
        assert_eq!(habits[1].name, "Exercise");
    }

    #[test]
    fn test_persisted_layout_field_names() {
        let habit = Habit::new("Read", Frequency::Daily);
        let json = serde_json::to_value(&habit).expect("Failed to serialize");

        assert!(json.get("id").is_some());
        assert!(json.get("name").is_some());
        assert_eq!(json["frequency"], "daily");
        assert!(json.get("completedDates").is_some());
        assert!(json.get("createdAt").is_some());
    }
}
