//! Messages discovered in local translation files.

use indexmap::{IndexMap, IndexSet};

/// One identifier read out of a translation file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MessageId {
    /// A plain message text or dotted key.
    Single(String),
    /// A gettext `msgid` / `msgid_plural` pair.
    Plural { singular: String, plural: String },
}

impl MessageId {
    pub fn single(id: impl Into<String>) -> Self {
        Self::Single(id.into())
    }

    pub fn plural(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self::Plural {
            singular: singular.into(),
            plural: plural.into(),
        }
    }
}

/// A translatable string aggregated across every scanned file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEntry {
    pub id: String,
    /// Tags of every file referencing this message, in discovery order.
    pub tags: IndexSet<String>,
    /// Name of the singular entry when this entry is its plural form.
    pub plural_parent_id: Option<String>,
    /// Asset id to request on creation (key-value formats use the key itself).
    pub explicit_id: Option<String>,
}

impl MessageEntry {
    fn new(id: String) -> Self {
        Self {
            id,
            tags: IndexSet::new(),
            plural_parent_id: None,
            explicit_id: None,
        }
    }
}

/// All messages found during one extraction run, keyed by id.
///
/// Iteration follows discovery order, so a singular always precedes the
/// plural recorded with it.
#[derive(Debug, Default)]
pub struct DiscoveredMessages {
    entries: IndexMap<String, MessageEntry>,
}

impl DiscoveredMessages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `id` found in a file tagged `tag`.
    ///
    /// Tags accumulate when the same id appears in several files. `keyed`
    /// marks ids coming from key-value files, whose key doubles as the remote
    /// asset id. Blank ids are ignored.
    pub fn add(&mut self, id: MessageId, tag: &str, keyed: bool) {
        match id {
            MessageId::Single(id) => {
                if let Some(entry) = self.tag_entry(id, tag)
                    && keyed
                {
                    entry.explicit_id = Some(entry.id.clone());
                }
            }
            MessageId::Plural { singular, plural } => {
                if self.tag_entry(singular.clone(), tag).is_none() {
                    return;
                }
                if let Some(entry) = self.tag_entry(plural, tag) {
                    entry.plural_parent_id = Some(singular);
                }
            }
        }
    }

    pub fn extend(&mut self, ids: impl IntoIterator<Item = MessageId>, tag: &str, keyed: bool) {
        for id in ids {
            self.add(id, tag, keyed);
        }
    }

    fn tag_entry(&mut self, id: String, tag: &str) -> Option<&mut MessageEntry> {
        if id.trim().is_empty() {
            return None;
        }
        let entry = self
            .entries
            .entry(id)
            .or_insert_with_key(|id| MessageEntry::new(id.clone()));
        entry.tags.insert(tag.to_string());
        Some(entry)
    }

    pub fn get(&self, id: &str) -> Option<&MessageEntry> {
        self.entries.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tags(entry: &MessageEntry) -> Vec<&str> {
        entry.tags.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_tags_union_across_files() {
        let mut messages = DiscoveredMessages::new();
        messages.add(MessageId::single("hello"), "web-app", false);
        messages.add(MessageId::single("hello"), "cli-app", false);
        messages.add(MessageId::single("hello"), "web-app", false);

        assert_eq!(messages.len(), 1);
        assert_eq!(tags(messages.get("hello").unwrap()), vec!["web-app", "cli-app"]);
    }

    #[test]
    fn test_tag_union_is_order_independent() {
        let mut first = DiscoveredMessages::new();
        first.add(MessageId::single("hello"), "a", false);
        first.add(MessageId::single("hello"), "b", false);

        let mut second = DiscoveredMessages::new();
        second.add(MessageId::single("hello"), "b", false);
        second.add(MessageId::single("hello"), "a", false);

        assert_eq!(first.get("hello").unwrap().tags, second.get("hello").unwrap().tags);
    }

    #[test]
    fn test_plural_links_to_singular() {
        let mut messages = DiscoveredMessages::new();
        messages.add(MessageId::plural("%d apple", "%d apples"), "web-app", false);

        let ids: Vec<&str> = messages.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["%d apple", "%d apples"]);

        let plural = messages.get("%d apples").unwrap();
        assert_eq!(plural.plural_parent_id.as_deref(), Some("%d apple"));
        assert_eq!(tags(plural), vec!["web-app"]);
        assert!(messages.get("%d apple").unwrap().plural_parent_id.is_none());
    }

    #[test]
    fn test_blank_ids_are_skipped() {
        let mut messages = DiscoveredMessages::new();
        messages.add(MessageId::single(""), "t", false);
        messages.add(MessageId::single("   "), "t", false);
        messages.add(MessageId::plural(" ", "things"), "t", false);

        assert!(messages.is_empty());
    }

    #[test]
    fn test_keyed_ids_carry_explicit_id() {
        let mut messages = DiscoveredMessages::new();
        messages.add(MessageId::single("home.title"), "web-models", true);
        messages.add(MessageId::single("Hello"), "web-app", false);

        assert_eq!(
            messages.get("home.title").unwrap().explicit_id.as_deref(),
            Some("home.title")
        );
        assert!(messages.get("Hello").unwrap().explicit_id.is_none());
    }
}
