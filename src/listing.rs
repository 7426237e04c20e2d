use std::collections::VecDeque;

use tracing::debug;

use crate::{adapters, model};

/// Lazy sequence of every non-empty key under `prefix` in a bucket. Pages are
/// requested from the provider only when the previous one is used up. A
/// listing failure is yielded once and ends the sequence.
pub struct ObjectKeys<'a> {
    client: &'a dyn adapters::ObjectAdapter,
    bucket: &'a str,
    prefix: &'a str,
    buffered: VecDeque<String>,
    next_token: Option<String>,
    exhausted: bool,
}

impl<'a> ObjectKeys<'a> {
    pub fn new(client: &'a dyn adapters::ObjectAdapter, bucket: &'a str, prefix: &'a str) -> Self {
        Self {
            client,
            bucket,
            prefix,
            buffered: VecDeque::new(),
            next_token: None,
            exhausted: false,
        }
    }
}

impl Iterator for ObjectKeys<'_> {
    type Item = Result<String, model::object::StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(key) = self.buffered.pop_front() {
                return Some(Ok(key));
            }

            if self.exhausted {
                return None;
            }

            let page = match self.client.fs_list_objects_page(
                self.bucket,
                self.prefix,
                self.next_token.take(),
            ) {
                Err(err) => {
                    self.exhausted = true;
                    return Some(Err(err));
                }
                Ok(page) => page,
            };

            debug!(
                bucket = %self.bucket,
                objects = page.objects.len(),
                bytes = page.objects.iter().map(|obj| obj.size).sum::<i64>(),
                more = page.next_token.is_some(),
                "listed page"
            );

            self.buffered.extend(
                page.objects
                    .into_iter()
                    .map(|obj| obj.key)
                    .filter(|key| !key.is_empty()),
            );

            self.next_token = page.next_token;
            if self.next_token.is_none() {
                self.exhausted = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockClient;

    #[test]
    fn test_object_keys_across_pages() {
        let client = MockClient::with_pages(&[&["a.png", "b.txt"], &[], &["c.JPEG"]]);

        let keys: Vec<String> = ObjectKeys::new(&client, "photos", "")
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(keys, vec!["a.png", "b.txt", "c.JPEG"]);
        assert_eq!(client.list_calls.get(), 3);
    }

    #[test]
    fn test_object_keys_is_lazy() {
        let client = MockClient::with_pages(&[&["a.png"], &["b.png"]]);
        let mut keys = ObjectKeys::new(&client, "photos", "");

        assert_eq!(client.list_calls.get(), 0);
        assert_eq!(keys.next(), Some(Ok("a.png".to_string())));
        assert_eq!(client.list_calls.get(), 1);
        assert_eq!(keys.next(), Some(Ok("b.png".to_string())));
        assert_eq!(client.list_calls.get(), 2);
        assert_eq!(keys.next(), None);
        assert_eq!(client.list_calls.get(), 2);
    }

    #[test]
    fn test_object_keys_skips_empty_keys() {
        let client = MockClient::with_keys(&["", "a.png", ""]);

        let keys: Vec<String> = ObjectKeys::new(&client, "photos", "")
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(keys, vec!["a.png"]);
    }

    #[test]
    fn test_object_keys_with_prefix() {
        let client = MockClient::with_keys(&["2024/a.png", "2023/b.png", "2024/c.gif"]);

        let keys: Vec<String> = ObjectKeys::new(&client, "photos", "2024/")
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(keys, vec!["2024/a.png", "2024/c.gif"]);
    }

    #[test]
    fn test_object_keys_stops_after_error() {
        let mut client = MockClient::with_pages(&[&["a.png"], &["b.png"], &["c.png"]]);
        client.fail_list_at_page = Some(1);

        let mut keys = ObjectKeys::new(&client, "photos", "");

        assert_eq!(keys.next(), Some(Ok("a.png".to_string())));
        assert!(matches!(keys.next(), Some(Err(_))));
        assert_eq!(keys.next(), None);
        assert_eq!(client.list_calls.get(), 2);
    }
}
