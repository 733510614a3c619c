//! Share request queries and mutations.

use serde::{Deserialize, Serialize};
use serde_json::json;

use dataall_core::types::{ItemUri, Page, PageFilter, ShareItemUri, ShareUri};
use dataall_entity::share::{
    ConsumptionData, ShareObject, ShareObjectStatus, ShareSummary, ShareableType,
};

use crate::operation::Operation;
use crate::request::GraphqlRequest;

const SHARE_OBJECT_FIELDS: &str = r#"
        shareUri
        created
        owner
        status
        requestPurpose
        rejectPurpose
        userRoleForShareObject
        canViewLogs
        principal {
          principalId
          principalType
          principalName
          principalIAMRoleName
          SamlGroupName
          environmentUri
          environmentName
          AwsAccountId
          region
          organizationUri
          organizationName
        }
        items(filter: $filter) {
          count
          page
          pages
          hasNext
          hasPrevious
          nodes {
            itemUri
            shareItemUri
            itemType
            itemName
            status
            action
            healthStatus
            healthMessage
            lastVerificationTime
            attachedDataFilterUri
          }
        }
        dataset {
          datasetUri
          datasetName
          SamlAdminGroupName
          environmentName
          AwsAccountId
          region
          exists
          description
          datasetType
        }"#;

const SHARE_SUMMARY_FIELDS: &str = r#"
          count
          page
          pages
          hasNext
          hasPrevious
          nodes {
            shareUri
            owner
            created
            status
            userRoleForShareObject
            principal {
              principalId
              principalType
              principalName
              principalIAMRoleName
              SamlGroupName
              environmentUri
              environmentName
              AwsAccountId
              region
              organizationUri
              organizationName
            }
            statistics {
              sharedItems
              revokedItems
              failedItems
              pendingItems
            }
            dataset {
              datasetUri
              datasetName
              SamlAdminGroupName
              environmentName
              AwsAccountId
              region
              exists
              description
              datasetType
            }
          }"#;

/// `{ shareUri status }` returned by the state-changing share mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareStatusAck {
    /// Share the mutation applied to.
    pub share_uri: ShareUri,
    /// Status after the mutation.
    pub status: ShareObjectStatus,
}

/// `{ shareItemUri }` returned by `addSharedItem`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedItem {
    /// Identifier of the new attachment.
    pub share_item_uri: ShareItemUri,
}

fn share_status_mutation(name: &'static str, arguments: &str, call: &str) -> String {
    format!(
        "mutation {name}({arguments}) {{\n  {name}({call}) {{\n    shareUri\n    status\n  }}\n}}"
    )
}

fn selector(share_uri: &ShareUri, item_uris: &[ShareItemUri]) -> serde_json::Value {
    json!({ "shareUri": share_uri, "itemUris": item_uris })
}

/// `getShareObject`, with the items page shaped by `filter`.
pub fn get_share_object(share_uri: &ShareUri, filter: &PageFilter) -> Operation<ShareObject> {
    let query = format!(
        "query getShareObject($shareUri: String!, $filter: ShareableObjectFilter) {{\n  getShareObject(shareUri: $shareUri) {{{SHARE_OBJECT_FIELDS}\n  }}\n}}"
    );
    Operation::query(
        "getShareObject",
        GraphqlRequest::new("getShareObject", query)
            .var("shareUri", share_uri)
            .var("filter", filter),
    )
}

/// `getS3ConsumptionData`.
pub fn get_consumption_data(share_uri: &ShareUri) -> Operation<Option<ConsumptionData>> {
    let query = "query getS3ConsumptionData($shareUri: String!) {\n  getS3ConsumptionData(shareUri: $shareUri) {\n    s3bucketName\n    s3AccessPointName\n    sharedGlueDatabase\n  }\n}";
    Operation::query(
        "getS3ConsumptionData",
        GraphqlRequest::new("getS3ConsumptionData", query).var("shareUri", share_uri),
    )
}

/// `submitShareObject`.
pub fn submit_share_object(share_uri: &ShareUri) -> Operation<ShareStatusAck> {
    Operation::mutation(
        "submitShareObject",
        GraphqlRequest::new(
            "submitShareObject",
            share_status_mutation("submitShareObject", "$shareUri: String!", "shareUri: $shareUri"),
        )
        .var("shareUri", share_uri),
    )
}

/// `approveShareObject`.
pub fn approve_share_object(share_uri: &ShareUri) -> Operation<ShareStatusAck> {
    Operation::mutation(
        "approveShareObject",
        GraphqlRequest::new(
            "approveShareObject",
            share_status_mutation("approveShareObject", "$shareUri: String!", "shareUri: $shareUri"),
        )
        .var("shareUri", share_uri),
    )
}

/// `rejectShareObject`.
pub fn reject_share_object(share_uri: &ShareUri, reject_purpose: &str) -> Operation<ShareStatusAck> {
    Operation::mutation(
        "rejectShareObject",
        GraphqlRequest::new(
            "rejectShareObject",
            share_status_mutation(
                "rejectShareObject",
                "$shareUri: String!, $rejectPurpose: String",
                "shareUri: $shareUri, rejectPurpose: $rejectPurpose",
            ),
        )
        .var("shareUri", share_uri)
        .var("rejectPurpose", reject_purpose),
    )
}

/// `deleteShareObject`.
pub fn delete_share_object(share_uri: &ShareUri) -> Operation<bool> {
    Operation::mutation(
        "deleteShareObject",
        GraphqlRequest::new(
            "deleteShareObject",
            "mutation deleteShareObject($shareUri: String!) {\n  deleteShareObject(shareUri: $shareUri)\n}",
        )
        .var("shareUri", share_uri),
    )
}

/// `addSharedItem`.
pub fn add_shared_item(
    share_uri: &ShareUri,
    item_uri: &ItemUri,
    item_type: ShareableType,
) -> Operation<AddedItem> {
    Operation::mutation(
        "addSharedItem",
        GraphqlRequest::new(
            "addSharedItem",
            "mutation addSharedItem($shareUri: String!, $input: AddSharedItemInput!) {\n  addSharedItem(shareUri: $shareUri, input: $input) {\n    shareItemUri\n  }\n}",
        )
        .var("shareUri", share_uri)
        .var("input", json!({ "itemUri": item_uri, "itemType": item_type })),
    )
}

/// `removeSharedItem`.
pub fn remove_shared_item(share_item_uri: &ShareItemUri) -> Operation<bool> {
    Operation::mutation(
        "removeSharedItem",
        GraphqlRequest::new(
            "removeSharedItem",
            "mutation removeSharedItem($shareItemUri: String!) {\n  removeSharedItem(shareItemUri: $shareItemUri)\n}",
        )
        .var("shareItemUri", share_item_uri),
    )
}

fn item_selector_mutation(
    name: &'static str,
    share_uri: &ShareUri,
    item_uris: &[ShareItemUri],
) -> Operation<ShareStatusAck> {
    Operation::mutation(
        name,
        GraphqlRequest::new(
            name,
            share_status_mutation(name, "$input: ShareItemSelectorInput", "input: $input"),
        )
        .var("input", selector(share_uri, item_uris)),
    )
}

/// `revokeItemsShareObject`.
pub fn revoke_items(share_uri: &ShareUri, item_uris: &[ShareItemUri]) -> Operation<ShareStatusAck> {
    item_selector_mutation("revokeItemsShareObject", share_uri, item_uris)
}

/// `verifyItemsShareObject`.
pub fn verify_items(share_uri: &ShareUri, item_uris: &[ShareItemUri]) -> Operation<ShareStatusAck> {
    item_selector_mutation("verifyItemsShareObject", share_uri, item_uris)
}

/// `reApplyItemsShareObject`.
pub fn reapply_items(share_uri: &ShareUri, item_uris: &[ShareItemUri]) -> Operation<ShareStatusAck> {
    item_selector_mutation("reApplyItemsShareObject", share_uri, item_uris)
}

/// `updateShareRequestReason`.
pub fn update_request_purpose(share_uri: &ShareUri, request_purpose: &str) -> Operation<bool> {
    Operation::mutation(
        "updateShareRequestReason",
        GraphqlRequest::new(
            "updateShareRequestReason",
            "mutation updateShareRequestReason($shareUri: String!, $requestPurpose: String) {\n  updateShareRequestReason(shareUri: $shareUri, requestPurpose: $requestPurpose)\n}",
        )
        .var("shareUri", share_uri)
        .var("requestPurpose", request_purpose),
    )
}

/// `updateShareRejectReason`.
pub fn update_reject_purpose(share_uri: &ShareUri, reject_purpose: &str) -> Operation<bool> {
    Operation::mutation(
        "updateShareRejectReason",
        GraphqlRequest::new(
            "updateShareRejectReason",
            "mutation updateShareRejectReason($shareUri: String!, $rejectPurpose: String) {\n  updateShareRejectReason(shareUri: $shareUri, rejectPurpose: $rejectPurpose)\n}",
        )
        .var("shareUri", share_uri)
        .var("rejectPurpose", reject_purpose),
    )
}

fn listing(name: &'static str, filter: &PageFilter) -> Operation<Page<ShareSummary>> {
    let query = format!(
        "query {name}($filter: ShareObjectFilter) {{\n  {name}(filter: $filter) {{{SHARE_SUMMARY_FIELDS}\n  }}\n}}"
    );
    Operation::query(name, GraphqlRequest::new(name, query).var("filter", filter))
}

/// `getShareRequestsToMe`: requests the viewer may approve.
pub fn share_requests_to_me(filter: &PageFilter) -> Operation<Page<ShareSummary>> {
    listing("getShareRequestsToMe", filter)
}

/// `getShareRequestsFromMe`: requests the viewer's teams created.
pub fn share_requests_from_me(filter: &PageFilter) -> Operation<Page<ShareSummary>> {
    listing("getShareRequestsFromMe", filter)
}
