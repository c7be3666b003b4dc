pub mod mental_health;
