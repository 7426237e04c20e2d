use std::time::Duration;

use aws_sdk_s3::{error::DisplayErrorContext, presigning::PresigningConfig};

use crate::{adapters, model, util};

impl adapters::ObjectAdapter for aws_sdk_s3::Client {
    fn fs_list_objects_page(
        &self,
        bucket: &str,
        prefix: &str,
        continuation_token: Option<String>,
    ) -> Result<model::object::ObjectPage, model::object::StoreError> {
        let mut req = self.list_objects_v2().bucket(bucket).prefix(prefix);

        if let Some(tok) = continuation_token {
            req = req.continuation_token(tok);
        }

        let lo = util::poll::poll_until_ready(req.send()).map_err(|err| {
            model::object::StoreError {
                message: format!(
                    "failed to list_objects at: {}, {}",
                    bucket,
                    DisplayErrorContext(&err)
                ),
            }
        })?;

        let objects = lo
            .contents()
            .iter()
            .map(|o| model::object::ObjectRecord {
                key: o.key().unwrap_or("").to_string(),
                size: o.size().unwrap_or(0),
            })
            .collect();

        Ok(model::object::ObjectPage {
            objects,
            next_token: lo.next_continuation_token().map(|tok| tok.to_string()),
        })
    }

    fn fs_presign_get_object(
        &self,
        bucket: &str,
        key: &str,
        expiry_secs: u64,
    ) -> Result<String, model::object::StoreError> {
        let presigning_config = PresigningConfig::expires_in(Duration::from_secs(expiry_secs))
            .map_err(|err| model::object::StoreError {
                message: format!("failed to build presigning config for: {}, {}", key, err),
            })?;

        let req = self
            .get_object()
            .bucket(bucket)
            .key(key)
            .presigned(presigning_config);

        let presigned = util::poll::poll_until_ready(req).map_err(|err| {
            model::object::StoreError {
                message: format!(
                    "failed to presign get_object at: {}, {}",
                    key,
                    DisplayErrorContext(&err)
                ),
            }
        })?;

        Ok(presigned.uri().to_string())
    }
}
