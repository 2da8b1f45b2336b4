//! This module provides a local, file-backed store for calendar events

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::calendar::CalendarManager;
use crate::config;
use crate::error::CacheError;
use crate::event::Event;
use crate::traits::CalendarEntry;
use crate::utils::keys_are_the_same;
use crate::values::EventId;

/// A calendar that stores its events in a local JSON file.
///
/// The file holds a list of events, each of them tagged with its type (see [`crate::event::EventType`]).
#[derive(Debug, PartialEq)]
pub struct Cache {
    backing_file: PathBuf,
    calendar: CalendarManager,
    autosave: bool,
}

impl Cache {
    /// Get the path to the cache file, as set in [`config::CACHE_FILE_NAME`]
    pub fn cache_file() -> PathBuf {
        config::read(&config::CACHE_FILE_NAME)
    }

    /// Initialize a cache from the content of a valid backing file if it exists.
    /// Returns an error otherwise
    pub fn from_file(path: &Path) -> Result<Self, CacheError> {
        let calendar = Self::read_file(path)?;
        log::debug!("Loaded {} events from {:?}", calendar.len(), path);

        Ok(Self {
            backing_file: PathBuf::from(path),
            calendar,
            autosave: config::read(&config::AUTOSAVE),
        })
    }

    /// Initialize an empty cache, that will be saved to `path`
    pub fn new(path: &Path) -> Self {
        Self {
            backing_file: PathBuf::from(path),
            calendar: CalendarManager::new(),
            autosave: config::read(&config::AUTOSAVE),
        }
    }

    /// Load the cache stored at `path`, or start an empty one in case this file does not exist yet
    pub fn open(path: &Path) -> Result<Self, CacheError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            log::debug!("No cache file at {:?}, starting with an empty calendar", path);
            Ok(Self::new(path))
        }
    }

    /// Same as [`Cache::open`], at the location given by [`Cache::cache_file`]
    pub fn open_default() -> Result<Self, CacheError> {
        Self::open(&Self::cache_file())
    }

    fn read_file(path: &Path) -> Result<CalendarManager, CacheError> {
        let file = std::fs::File::open(path)
            .map_err(|source| CacheError::Open { path: PathBuf::from(path), source })?;
        let calendar = serde_json::from_reader(std::io::BufReader::new(file))?;
        Ok(calendar)
    }

    pub fn backing_file(&self) -> &Path {
        &self.backing_file
    }

    /// Whether changes are written to the backing file as soon as they happen
    pub fn autosave(&self) -> bool {
        self.autosave
    }

    pub fn set_autosave(&mut self, autosave: bool) {
        self.autosave = autosave;
    }

    /// Read access to the events of this cache
    pub fn calendar(&self) -> &CalendarManager {
        &self.calendar
    }

    /// Store the current events to the backing file, sorted by start date
    pub fn save_to_file(&self) -> Result<(), CacheError> {
        let path = &self.backing_file;
        let file = std::fs::File::create(path)
            .map_err(|source| CacheError::Open { path: path.clone(), source })?;

        let mut writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.calendar)?;
        std::io::Write::flush(&mut writer)?;
        log::debug!("Saved {} events to {:?}", self.calendar.len(), path);
        Ok(())
    }

    /// Discard the in-memory events, and read them again from the backing file
    pub fn reload(&mut self) -> Result<(), CacheError> {
        self.calendar = Self::read_file(&self.backing_file)?;
        Ok(())
    }

    /// Add (or replace) an event
    pub fn add_event(&mut self, event: Event) {
        log::trace!("Adding {} to the cache", event.id());
        self.calendar.add(event);
        self.save_if_needed();
    }

    /// Remove an event. Returns whether such an event existed
    pub fn remove_event(&mut self, id: &EventId) -> bool {
        let removed = self.calendar.remove(id);
        if removed {
            self.save_if_needed();
        }
        removed
    }

    fn save_if_needed(&self) {
        if self.autosave == false {
            return;
        }
        if let Err(err) = self.save_to_file() {
            log::warn!("Unable to save the cache to {:?}: {}", self.backing_file, err);
        }
    }

    /// Compares two Caches to check they have the same current content
    ///
    /// This is not a complete equality test: backing files and settings may differ
    pub fn has_same_contents_than(&self, other: &Self) -> bool {
        let events_l = self.calendar.all();
        let events_r = other.calendar.all();

        let map_l: HashMap<EventId, &Event> = events_l.iter().map(|e| (e.id().clone(), *e)).collect();
        let map_r: HashMap<EventId, &Event> = events_r.iter().map(|e| (e.id().clone(), *e)).collect();

        if keys_are_the_same(&map_l, &map_r) == false {
            return false;
        }

        for (id, event_l) in map_l {
            match map_r.get(&id) {
                Some(event_r) if event_l == *event_r => (),
                _ => {
                    log::debug!("Event {} differs", id);
                    return false;
                },
            }
        }
        true
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::date::DateEvent;
    use crate::event::{MeetingEvent, PeriodicEvent, TaskEvent};
    use crate::values::{DurationEvent, FrequencyEvent, OwnerEvent, ParticipantEvent, PlaceEvent, PriorityEvent, TitleEvent};

    fn populated_cache(path: &Path) -> Cache {
        let mut cache = Cache::new(path);
        cache.set_autosave(false);

        let owner = OwnerEvent::new("John").unwrap();
        let start = DateEvent::from_ymd_hm(2023, 3, 15, 14, 0).unwrap();
        cache.add_event(MeetingEvent::new(
            TitleEvent::new("Review").unwrap(), owner.clone(), start,
            DurationEvent::new(90).unwrap(), PlaceEvent::new("Room A"), ParticipantEvent::from_csv("Alice, Bob"),
        ).into());
        cache.add_event(PeriodicEvent::new(
            TitleEvent::new("Standup").unwrap(), owner.clone(), start.plus_days(-3), FrequencyEvent::new(1).unwrap(),
        ).into());
        cache.add_event(TaskEvent::new(
            TitleEvent::new("Report").unwrap(), owner, start.plus_days(2), PriorityEvent::new("high").unwrap(),
        ).into());
        cache
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");

        let cache = populated_cache(&path);
        cache.save_to_file().unwrap();

        let retrieved = Cache::from_file(&path).unwrap();
        assert_eq!(retrieved.calendar().len(), 3);
        assert!(cache.has_same_contents_than(&retrieved));
        assert_eq!(retrieved.calendar(), cache.calendar());
    }

    #[test]
    fn test_file_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        populated_cache(&path).save_to_file().unwrap();

        let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let types: Vec<&str> = json.as_array().unwrap().iter()
            .map(|e| e["type"].as_str().unwrap())
            .collect();
        // Sorted by start date
        assert_eq!(types, vec!["PERIODIQUE", "REUNION", "TASK"]);
    }

    #[test]
    fn test_autosave() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");

        let mut cache = populated_cache(&path);
        assert!(path.exists() == false);

        cache.set_autosave(true);
        let task = TaskEvent::new(
            TitleEvent::new("Taxes").unwrap(),
            OwnerEvent::new("Jane").unwrap(),
            DateEvent::from_ymd_hm(2023, 4, 1, 0, 0).unwrap(),
            PriorityEvent::new("low").unwrap(),
        );
        let id = task.id().clone();
        cache.add_event(task.into());
        assert_eq!(Cache::from_file(&path).unwrap().calendar().len(), 4);

        assert!(cache.remove_event(&id));
        assert!(cache.remove_event(&id) == false);
        assert_eq!(Cache::from_file(&path).unwrap().calendar().len(), 3);
    }

    #[test]
    fn test_reload_discards_unsaved_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");

        let mut cache = populated_cache(&path);
        cache.save_to_file().unwrap();
        let saved = Cache::from_file(&path).unwrap();

        let some_id = cache.calendar().all()[0].id().clone();
        cache.remove_event(&some_id);
        assert!(cache.has_same_contents_than(&saved) == false);

        cache.reload().unwrap();
        assert!(cache.has_same_contents_than(&saved));
    }

    #[test]
    fn test_open_missing_or_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");

        let fresh = Cache::open(&path).unwrap();
        assert!(fresh.calendar().is_empty());
        assert_eq!(fresh.backing_file(), path.as_path());
        // Opening does not create the file
        assert!(path.exists() == false);

        let cache = populated_cache(&path);
        cache.save_to_file().unwrap();
        let reopened = Cache::open(&path).unwrap();
        assert!(reopened.has_same_contents_than(&cache));

        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(Cache::open(&path), Err(CacheError::Json(_))));
    }

    #[test]
    fn test_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.json");
        match Cache::from_file(&missing) {
            Err(CacheError::Open { path, .. }) => assert_eq!(path, missing),
            other => panic!("Unexpected result {:?}", other),
        }

        let invalid = dir.path().join("invalid.json");
        std::fs::write(&invalid, r#"[{"type": "BOGUS", "id": "x"}]"#).unwrap();
        assert!(matches!(Cache::from_file(&invalid), Err(CacheError::Json(_))));
    }
}
