use std::cell::Cell;

use crate::{adapters, model};

/// In-memory provider. Each inner vec of `pages` is one listing page; the
/// continuation token is the index of the next page.
#[derive(Default)]
pub struct MockClient {
    pub pages: Vec<Vec<String>>,
    pub fail_list_at_page: Option<usize>,
    pub fail_sign_keys: Vec<String>,
    pub list_calls: Cell<usize>,
}

impl MockClient {
    pub fn with_keys(keys: &[&str]) -> Self {
        Self::with_pages(&[keys])
    }

    pub fn with_pages(pages: &[&[&str]]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|page| page.iter().map(|key| key.to_string()).collect())
                .collect(),
            ..Default::default()
        }
    }
}

impl adapters::ObjectAdapter for MockClient {
    fn fs_list_objects_page(
        &self,
        bucket: &str,
        prefix: &str,
        continuation_token: Option<String>,
    ) -> Result<model::object::ObjectPage, model::object::StoreError> {
        self.list_calls.set(self.list_calls.get() + 1);

        let idx = continuation_token
            .map(|tok| tok.parse::<usize>().unwrap())
            .unwrap_or(0);

        if self.fail_list_at_page == Some(idx) {
            return Err(model::object::StoreError {
                message: format!("failed to list_objects at: {}, AccessDenied", bucket),
            });
        }

        let objects = self
            .pages
            .get(idx)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .filter(|key| key.starts_with(prefix))
            .map(|key| model::object::ObjectRecord {
                key,
                size: 0,
            })
            .collect();

        let next_token = if idx + 1 < self.pages.len() {
            Some((idx + 1).to_string())
        } else {
            None
        };

        Ok(model::object::ObjectPage {
            objects,
            next_token,
        })
    }

    fn fs_presign_get_object(
        &self,
        bucket: &str,
        key: &str,
        expiry_secs: u64,
    ) -> Result<String, model::object::StoreError> {
        if self.fail_sign_keys.iter().any(|k| k == key) {
            return Err(model::object::StoreError {
                message: format!("failed to presign get_object at: {}, AccessDenied", key),
            });
        }

        Ok(format!(
            "https://{}.mock.local/{}?expires={}&signature=mock",
            bucket, key, expiry_secs
        ))
    }
}
