use crate::model::object::StoreError;

#[derive(Debug, PartialEq)]
pub enum Provider {
    AWS,
    GCS,
}

/// Splits `s3://bucket` or `gs://bucket` into provider and bucket name. A
/// bare bucket name is taken to be on S3.
pub fn parse_bucket_uri(bucket_uri: &str) -> Result<(Provider, &str), StoreError> {
    let (provider, bucket) = match bucket_uri.split_once("://") {
        None => (Provider::AWS, bucket_uri),
        Some(("s3", rest)) => (Provider::AWS, rest),
        Some(("gs", rest)) => (Provider::GCS, rest),
        Some(_) => {
            return Err(StoreError {
                message: format!("failed to parse provider of: {}", bucket_uri),
            })
        }
    };

    let bucket = bucket.trim_end_matches('/');
    if bucket.is_empty() {
        return Err(StoreError {
            message: format!("failed to parse bucket of: {}", bucket_uri),
        });
    }

    Ok((provider, bucket))
}
