//! Requesting principal and shared dataset references.

use serde::{Deserialize, Serialize};

use dataall_core::types::{DatasetUri, EnvironmentUri};

/// The identity a share is requested for: a team or a consumption role in
/// an environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    /// Team name or role identifier.
    pub principal_id: String,
    /// `Group` or `ConsumptionRole`.
    pub principal_type: String,
    /// Display name.
    #[serde(default)]
    pub principal_name: Option<String>,
    /// IAM role the grant is applied to.
    #[serde(default, rename = "principalIAMRoleName")]
    pub principal_iam_role_name: Option<String>,
    /// Identity-provider group of the requesting team.
    #[serde(default, rename = "SamlGroupName")]
    pub saml_group_name: Option<String>,
    /// Environment of the principal.
    #[serde(default)]
    pub environment_uri: Option<EnvironmentUri>,
    /// Environment display name.
    #[serde(default)]
    pub environment_name: Option<String>,
    /// AWS account of the environment.
    #[serde(default, rename = "AwsAccountId")]
    pub aws_account_id: Option<String>,
    /// AWS region of the environment.
    #[serde(default)]
    pub region: Option<String>,
    /// Organization of the environment.
    #[serde(default)]
    pub organization_uri: Option<String>,
    /// Organization display name.
    #[serde(default)]
    pub organization_name: Option<String>,
}

/// The dataset a share request targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetRef {
    /// Dataset identifier.
    pub dataset_uri: DatasetUri,
    /// Dataset display name.
    #[serde(default)]
    pub dataset_name: String,
    /// Owning team.
    #[serde(default, rename = "SamlAdminGroupName")]
    pub saml_admin_group_name: Option<String>,
    /// Environment hosting the dataset.
    #[serde(default)]
    pub environment_name: Option<String>,
    /// AWS account hosting the dataset.
    #[serde(default, rename = "AwsAccountId")]
    pub aws_account_id: Option<String>,
    /// AWS region hosting the dataset.
    #[serde(default)]
    pub region: Option<String>,
    /// Whether the dataset still exists.
    #[serde(default)]
    pub exists: Option<bool>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// `S3` or `Redshift`.
    #[serde(default)]
    pub dataset_type: Option<String>,
}
