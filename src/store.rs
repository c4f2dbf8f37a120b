// src/store.rs

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::models::event::Event;
use crate::models::quiz::{Question, Quiz};
use crate::models::redemption::Redemption;
use crate::models::submission::Submission;
use crate::models::user::User;
use crate::models::video::Video;

/// Fixed storage keys. Each key backs exactly one collection file.
pub mod keys {
    pub const USERS: &str = "ecoplay_users";
    pub const QUIZZES: &str = "ecoplay_quizzes";
    pub const SUBMISSIONS: &str = "ecoplay_submissions";
    pub const EVENTS: &str = "ecoplay_events";
    pub const REDEMPTIONS: &str = "ecoplay_redemptions";
    pub const VIDEOS: &str = "ecoplay_videos";
}

/// The record store: named collections serialized as whole-collection JSON
/// blobs, one `<key>.json` file per key under the data directory.
///
/// Every mutation loads a collection wholesale, rewrites it in memory, and
/// saves it wholesale. There are no partial writes, no merges, and no
/// locks; when two writers race, the last save wins.
#[derive(Debug, Clone)]
pub struct Store {
    data_dir: PathBuf,
}

impl Store {
    /// Opens a store rooted at `data_dir`, creating the directory if needed.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }

    /// Returns the deserialized collection under `key`, or `default` when
    /// the backing file is absent or does not parse. Corruption is masked:
    /// the caller sees the default and a warning is the only trace of it.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match fs::read_to_string(self.blob_path(key)) {
            Ok(raw) => raw,
            Err(_) => return default,
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Unreadable collection '{}', using default: {}", key, e);
                default
            }
        }
    }

    /// Serializes `value` and overwrites the whole collection under `key`.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), AppError> {
        let raw = serde_json::to_string(value)?;
        fs::write(self.blob_path(key), raw)?;
        Ok(())
    }

    pub fn users(&self) -> Vec<User> {
        self.load(keys::USERS, Vec::new())
    }

    pub fn save_users(&self, users: &[User]) -> Result<(), AppError> {
        self.save(keys::USERS, &users)
    }

    pub fn quizzes(&self) -> Vec<Quiz> {
        self.load(keys::QUIZZES, Vec::new())
    }

    pub fn save_quizzes(&self, quizzes: &[Quiz]) -> Result<(), AppError> {
        self.save(keys::QUIZZES, &quizzes)
    }

    pub fn submissions(&self) -> Vec<Submission> {
        self.load(keys::SUBMISSIONS, Vec::new())
    }

    pub fn save_submissions(&self, submissions: &[Submission]) -> Result<(), AppError> {
        self.save(keys::SUBMISSIONS, &submissions)
    }

    pub fn events(&self) -> Vec<Event> {
        self.load(keys::EVENTS, Vec::new())
    }

    pub fn save_events(&self, events: &[Event]) -> Result<(), AppError> {
        self.save(keys::EVENTS, &events)
    }

    pub fn redemptions(&self) -> Vec<Redemption> {
        self.load(keys::REDEMPTIONS, Vec::new())
    }

    pub fn save_redemptions(&self, redemptions: &[Redemption]) -> Result<(), AppError> {
        self.save(keys::REDEMPTIONS, &redemptions)
    }

    pub fn videos(&self) -> Vec<Video> {
        self.load(keys::VIDEOS, Vec::new())
    }

    pub fn save_videos(&self, videos: &[Video]) -> Result<(), AppError> {
        self.save(keys::VIDEOS, &videos)
    }
}

/// Initializes every collection that does not yet hold a readable value.
///
/// A collection whose blob is missing, unparseable, or JSON `null` is
/// (re)seeded, while anything readable, including an empty list, is left
/// untouched. Restarting never duplicates the demo records.
pub fn seed(store: &Store) -> Result<(), AppError> {
    if !is_seeded(store, keys::USERS) {
        tracing::info!("Seeding demo user");
        let mut demo = User::new("demo_student", "Demo Student");
        demo.points = 120;
        demo.badges.push("Bronze Sapling".to_owned());
        store.save_users(&[demo])?;
    }

    if !is_seeded(store, keys::QUIZZES) {
        tracing::info!("Seeding starter quiz");
        store.save_quizzes(&[starter_quiz()])?;
    }

    if !is_seeded(store, keys::SUBMISSIONS) {
        store.save_submissions(&[])?;
    }
    if !is_seeded(store, keys::EVENTS) {
        store.save_events(&[])?;
    }
    if !is_seeded(store, keys::REDEMPTIONS) {
        store.save_redemptions(&[])?;
    }
    if !is_seeded(store, keys::VIDEOS) {
        store.save_videos(&[])?;
    }

    Ok(())
}

/// A collection counts as seeded when its blob holds any readable JSON
/// value other than `null`.
fn is_seeded(store: &Store, key: &str) -> bool {
    store.load::<Option<serde_json::Value>>(key, None).is_some()
}

/// The "Plant Care Basics" starter quiz seeded into an empty store.
fn starter_quiz() -> Quiz {
    Quiz::new(
        "Plant Care Basics",
        "Quick 5-question quiz about watering & planting.",
        vec![
            Question::new(
                "How often should most new saplings be watered?",
                &["Daily", "Once a week", "Once a month", "Never"],
                0,
                10,
            ),
            Question::new(
                "Which season is often best to plant trees in many regions?",
                &["Summer", "Winter", "Monsoon/Autumn", "Spring"],
                3,
                10,
            ),
            Question::new(
                "What is compost used for?",
                &["Fuel", "Fertilizer", "Shoelace", "Clothing"],
                1,
                10,
            ),
            Question::new(
                "Mulching helps:",
                &["Retain moisture", "Remove soil", "Attract pests", "Kill roots"],
                0,
                5,
            ),
            Question::new(
                "Which tool is safest for small tree planting?",
                &["Chainsaw", "Shovel", "Hammer", "Blowtorch"],
                1,
                5,
            ),
        ],
    )
}
