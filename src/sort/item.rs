use super::key::SortKey;

/// A row in the sort dialog list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayItem {
    /// A draggable sort key row
    Sort(SortKey),
    /// Section marker separating chosen keys from available ones
    Header(String),
}

impl DisplayItem {
    /// Stable identity for the list host: key id for sort rows, label for the header.
    pub fn key_of(&self) -> &str {
        match self {
            DisplayItem::Sort(key) => key.id(),
            DisplayItem::Header(title) => title,
        }
    }

    pub fn sort_key(&self) -> Option<SortKey> {
        match self {
            DisplayItem::Sort(key) => Some(*key),
            DisplayItem::Header(_) => None,
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, DisplayItem::Header(_))
    }
}
