use std::time::Duration;

use google_cloud_storage::{
    http::objects::list::ListObjectsRequest,
    sign::{SignedURLMethod, SignedURLOptions},
};

use crate::{adapters, model, util};

fn list_request(bucket: &str, prefix: &str, continuation_token: Option<String>) -> ListObjectsRequest {
    ListObjectsRequest {
        bucket: bucket.to_string(),
        prefix: Some(prefix.to_string()),
        page_token: continuation_token,
        ..Default::default()
    }
}

fn get_url_options(expiry_secs: u64) -> SignedURLOptions {
    SignedURLOptions {
        method: SignedURLMethod::GET,
        expires: Duration::from_secs(expiry_secs),
        ..Default::default()
    }
}

impl adapters::ObjectAdapter for google_cloud_storage::client::Client {
    fn fs_list_objects_page(
        &self,
        bucket: &str,
        prefix: &str,
        continuation_token: Option<String>,
    ) -> Result<model::object::ObjectPage, model::object::StoreError> {
        let req = list_request(bucket, prefix, continuation_token);

        let lo = util::poll::poll_until_ready(self.list_objects(&req)).map_err(|err| {
            model::object::StoreError {
                message: format!("failed to list_objects at: {}, {}", bucket, err),
            }
        })?;

        let objects = lo
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|obj| model::object::ObjectRecord {
                key: obj.name,
                size: obj.size,
            })
            .collect();

        Ok(model::object::ObjectPage {
            objects,
            next_token: lo.next_page_token,
        })
    }

    fn fs_presign_get_object(
        &self,
        bucket: &str,
        key: &str,
        expiry_secs: u64,
    ) -> Result<String, model::object::StoreError> {
        let opts = get_url_options(expiry_secs);

        util::poll::poll_until_ready(self.signed_url(bucket, key, None, None, opts)).map_err(
            |err| model::object::StoreError {
                message: format!("failed to sign url at: {}, {}", key, err),
            },
        )
    }
}
