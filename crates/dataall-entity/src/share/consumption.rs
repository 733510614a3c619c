//! How the requester consumes shared S3 data.

use serde::{Deserialize, Serialize};

/// Result of the separate `getS3ConsumptionData` query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumptionData {
    /// Shared bucket name.
    #[serde(default, rename = "s3bucketName")]
    pub s3_bucket_name: Option<String>,
    /// Access point created for shared folders.
    #[serde(default, rename = "s3AccessPointName")]
    pub s3_access_point_name: Option<String>,
    /// Glue database holding the shared tables.
    #[serde(default, rename = "sharedGlueDatabase")]
    pub shared_glue_database: Option<String>,
}

impl ConsumptionData {
    /// `aws s3 ls` command for the shared bucket.
    pub fn bucket_command(&self) -> Option<String> {
        self.s3_bucket_name
            .as_deref()
            .map(|bucket| format!("aws s3 ls s3://{bucket}"))
    }

    /// `aws s3 ls` command for the shared folders' access point.
    pub fn access_point_command(&self, region: &str, account_id: &str) -> Option<String> {
        self.s3_access_point_name.as_deref().map(|ap| {
            format!("aws s3 ls arn:aws:s3:{region}:{account_id}:accesspoint/{ap}/SHARED_FOLDER/")
        })
    }

    /// Sample query against the shared Glue database.
    pub fn glue_query(&self) -> Option<String> {
        self.shared_glue_database
            .as_deref()
            .map(|db| format!("SELECT * FROM {db}.TABLENAME"))
    }
}
