use std::collections::BTreeMap;

use tracing::{error, info, span, Level};

use crate::{adapters, listing, model, util};

pub const DEFAULT_EXPIRY_SECS: u64 = 3600;

/// Longest expiry S3 and GCS V4 signatures accept (one week).
pub const MAX_EXPIRY_SECS: u64 = 7 * 24 * 60 * 60;

pub struct ImageSigner {
    pub client: Box<dyn adapters::ObjectAdapter>,
    pub bucket: String,
    pub prefix: String,
}

impl ImageSigner {
    pub fn new(client: Box<dyn adapters::ObjectAdapter>, bucket: &str) -> Self {
        Self {
            client,
            bucket: bucket.to_string(),
            prefix: "".to_string(),
        }
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    /// Signs a GET URL for every image key in the bucket.
    ///
    /// `Err` means the bucket could not be listed. `Ok` with an empty map means
    /// the listing worked but held no images. Keys whose signing failed are
    /// logged and left out of the map.
    pub fn generate_presigned_urls(
        &self,
        expiry_secs: u64,
    ) -> Result<BTreeMap<String, String>, model::object::StoreError> {
        let span = span!(Level::INFO, "generate_presigned_urls", context = "presign");
        let _e = span.enter();
        info!(bucket = %self.bucket, prefix = %self.prefix, expiry_secs, "called");

        let mut presigned_urls = BTreeMap::new();

        for key in listing::ObjectKeys::new(self.client.as_ref(), &self.bucket, &self.prefix) {
            let key = match key {
                Err(err) => {
                    error!(bucket = %self.bucket, error_message = %err, error_group = "list_objects");
                    return Err(err);
                }
                Ok(key) => key,
            };

            if !util::image::is_image_key(&key) {
                continue;
            }

            match self
                .client
                .fs_presign_get_object(&self.bucket, &key, expiry_secs)
            {
                Err(err) => {
                    error!(key = %key, error_message = %err, error_group = "presign_get_object");
                }
                Ok(url) => {
                    presigned_urls.insert(key, url);
                }
            }
        }

        info!(signed = presigned_urls.len(), "done");

        Ok(presigned_urls)
    }
}

/// Text printed for each of the three outcomes of `generate_presigned_urls`.
pub fn format_report(
    bucket: &str,
    result: &Result<BTreeMap<String, String>, model::object::StoreError>,
) -> String {
    match result {
        Err(_) => "Error or no access to bucket.\n".to_string(),
        Ok(urls) if urls.is_empty() => format!("No image objects found in bucket {}.\n", bucket),
        Ok(urls) => urls
            .iter()
            .map(|(key, url)| format!("{}\n{}\n\n", key, url))
            .collect(),
    }
}
