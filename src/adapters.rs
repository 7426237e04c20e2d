use crate::model;

pub mod gcs;
#[cfg(test)]
pub mod mock;
pub mod s3;

/// The two provider capabilities the signer relies on: paginated listing and
/// presigned GET URL generation. Implemented for each storage SDK client.
pub trait ObjectAdapter {
    fn fs_list_objects_page(
        &self,
        bucket: &str,
        prefix: &str,
        continuation_token: Option<String>,
    ) -> Result<model::object::ObjectPage, model::object::StoreError>;

    fn fs_presign_get_object(
        &self,
        bucket: &str,
        key: &str,
        expiry_secs: u64,
    ) -> Result<String, model::object::StoreError>;
}
