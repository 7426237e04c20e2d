use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectRecord {
    pub key: String,
    pub size: i64,
}

/// One page of a bucket listing. `next_token` is `None` on the last page.
#[derive(Clone, Debug, Default)]
pub struct ObjectPage {
    pub objects: Vec<ObjectRecord>,
    pub next_token: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StoreError {
    pub message: String,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for StoreError {}
