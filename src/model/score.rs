use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("player name must not be empty")]
    EmptyName,
}

/// One roster line: who, and the color their name is drawn in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub color: String,
}

impl ScoreEntry {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Ordered roster for a single scene.
///
/// Entries are identified by position, so the same name may appear more than
/// once. Append-only: nothing is ever removed, and the whole registry is
/// dropped together with the scene that owns it.
#[derive(Debug, Clone, Default)]
pub struct ScoreRegistry {
    users: Vec<ScoreEntry>,
}

impl ScoreRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry at the end of the roster.
    pub fn add_user(&mut self, name: impl Into<String>, color: impl Into<String>) -> Result<(), ScoreError> {
        let name = name.into();
        if name.trim().is_empty() {
            tracing::warn!("rejected roster entry with empty name");
            return Err(ScoreError::EmptyName);
        }
        let color = color.into();
        tracing::debug!(%name, %color, index = self.users.len(), "roster entry added");
        self.users.push(ScoreEntry { name, color });
        Ok(())
    }

    /// Entries in insertion order.
    pub fn list_users(&self) -> &[ScoreEntry] {
        &self.users
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoreEntry> {
        self.users.iter()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl<'a> IntoIterator for &'a ScoreRegistry {
    type Item = &'a ScoreEntry;
    type IntoIter = std::slice::Iter<'a, ScoreEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.users.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let mut reg = ScoreRegistry::new();
        reg.add_user("test", "#123").unwrap();
        reg.add_user("test2", "#321").unwrap();
        assert_eq!(
            reg.list_users(),
            &[ScoreEntry::new("test", "#123"), ScoreEntry::new("test2", "#321")]
        );
    }

    #[test]
    fn duplicate_names_are_kept_apart() {
        let mut reg = ScoreRegistry::new();
        reg.add_user("a", "#1").unwrap();
        reg.add_user("a", "#2").unwrap();
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.list_users()[0].color, "#1");
        assert_eq!(reg.list_users()[1].color, "#2");
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut reg = ScoreRegistry::new();
        assert_eq!(reg.add_user("", "#fff"), Err(ScoreError::EmptyName));
        assert_eq!(reg.add_user("   ", "#fff"), Err(ScoreError::EmptyName));
        assert!(reg.is_empty());
    }
}
