pub mod quests;
