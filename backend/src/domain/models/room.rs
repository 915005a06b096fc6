/// A bookable consulting room. Identity is the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: u32,
    pub title: String,
}

impl Room {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}
