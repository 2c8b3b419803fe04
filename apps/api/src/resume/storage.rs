use std::time::Duration;

use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;

/// Lifetime of the download links handed to the client.
pub const PRESIGNED_URL_TTL: Duration = Duration::from_secs(3600);

/// Object key for a newly uploaded resume: `resumes/<user>_<uuid>.pdf`.
pub fn resume_object_key(user_id: Uuid, upload_id: Uuid) -> String {
    format!("resumes/{user_id}_{upload_id}.pdf")
}

pub async fn put_pdf(
    s3: &aws_sdk_s3::Client,
    bucket: &str,
    key: &str,
    pdf: Bytes,
) -> Result<(), AppError> {
    s3.put_object()
        .bucket(bucket)
        .key(key)
        .body(ByteStream::from(pdf))
        .content_type("application/pdf")
        .send()
        .await
        .map_err(|e| AppError::S3(format!("upload of {key} failed: {e}")))?;

    info!("Uploaded resume to s3://{bucket}/{key}");
    Ok(())
}

pub async fn delete_pdf(s3: &aws_sdk_s3::Client, bucket: &str, key: &str) -> Result<(), AppError> {
    s3.delete_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| AppError::S3(format!("delete of {key} failed: {e}")))?;
    Ok(())
}

/// Best-effort removal of an object whose database row was never written.
/// A failed delete leaves the key in the log for manual cleanup.
pub async fn discard_orphan(s3: &aws_sdk_s3::Client, bucket: &str, key: &str) {
    match delete_pdf(s3, bucket, key).await {
        Ok(()) => info!("Removed orphaned upload s3://{bucket}/{key}"),
        Err(e) => warn!("Orphaned upload left at s3://{bucket}/{key}: {e}"),
    }
}

/// Time-limited GET URL for a stored object.
pub async fn presigned_url(
    s3: &aws_sdk_s3::Client,
    bucket: &str,
    key: &str,
) -> Result<String, AppError> {
    let presigning = PresigningConfig::expires_in(PRESIGNED_URL_TTL)
        .map_err(|e| AppError::S3(format!("invalid presigning config: {e}")))?;

    let request = s3
        .get_object()
        .bucket(bucket)
        .key(key)
        .presigned(presigning)
        .await
        .map_err(|e| AppError::S3(format!("presigning {key} failed: {e}")))?;

    Ok(request.uri().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::testing::offline_state;

    #[tokio::test]
    async fn test_delete_without_credentials_is_s3_error() {
        let state = offline_state(None);
        let err = delete_pdf(&state.s3, "resumes", "resumes/orphan.pdf")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::S3(msg) if msg.contains("resumes/orphan.pdf")));
    }

    #[tokio::test]
    async fn test_discard_orphan_swallows_delete_failure() {
        let state = offline_state(None);
        discard_orphan(&state.s3, "resumes", "resumes/orphan.pdf").await;
    }

    #[test]
    fn test_resume_object_key_layout() {
        let user = Uuid::nil();
        let upload = Uuid::from_u128(1);
        assert_eq!(
            resume_object_key(user, upload),
            "resumes/00000000-0000-0000-0000-000000000000_00000000-0000-0000-0000-000000000001.pdf"
        );
    }
}
