//! Shared test helpers for service integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::sync::mpsc;

use dataall_core::config::AppConfig;
use dataall_core::error::AppError;
use dataall_core::events::ConsoleEvent;
use dataall_core::result::AppResult;
use dataall_core::types::ShareUri;
use dataall_entity::user::SessionUser;
use dataall_graphql::request::GraphqlRequest;
use dataall_graphql::response::GraphqlResponse;
use dataall_graphql::transport::GraphqlTransport;
use dataall_service::AppContext;
use dataall_service::notify::ChannelNotifier;
use dataall_service::notify::channel::drain;
use dataall_storage::memory::MemoryStore;

pub const SHARE_URI: &str = "share-1";
pub const REQUESTER: &str = "alice@example.com";
pub const APPROVER: &str = "bob@example.com";

/// A canned reply for one call.
#[derive(Debug, Clone)]
pub enum Scripted {
    /// Return this envelope.
    Response(GraphqlResponse),
    /// Fail before producing an envelope.
    Error(AppError),
}

#[derive(Debug)]
struct BackendState {
    share: Value,
    role: String,
    next_item: u32,
    expired: bool,
    scripted: HashMap<String, VecDeque<Scripted>>,
    calls: Vec<GraphqlRequest>,
    tokens: Vec<Option<String>>,
}

/// In-process GraphQL backend holding one share request.
///
/// Mutations change the stored request the way the real backend does, so
/// a re-fetch after a mutation observes the new state.
#[derive(Debug)]
pub struct FakeBackend {
    state: Mutex<BackendState>,
}

impl FakeBackend {
    /// A backend with one Draft request without items.
    pub fn new(role: &str) -> Self {
        Self {
            state: Mutex::new(BackendState {
                share: json!({
                    "shareUri": SHARE_URI,
                    "created": "2024-05-02 10:11:12",
                    "owner": REQUESTER,
                    "status": "Draft",
                    "requestPurpose": null,
                    "rejectPurpose": null,
                    "userRoleForShareObject": role,
                    "canViewLogs": false,
                    "principal": {
                        "principalId": "team-analytics",
                        "principalType": "Group",
                        "principalName": "Analytics",
                        "SamlGroupName": "Analytics",
                        "AwsAccountId": "111122223333",
                        "region": "eu-west-1"
                    },
                    "dataset": {
                        "datasetUri": "ds-1",
                        "datasetName": "sales",
                        "SamlAdminGroupName": "SalesAdmins"
                    },
                    "items": []
                }),
                role: role.to_string(),
                next_item: 1,
                expired: false,
                scripted: HashMap::new(),
                calls: Vec::new(),
                tokens: Vec::new(),
            }),
        }
    }

    /// Switch the viewer's role.
    pub fn set_role(&self, role: &str) {
        let mut state = self.state.lock().unwrap();
        state.role = role.to_string();
        state.share["userRoleForShareObject"] = json!(role);
    }

    /// Force the request into a status.
    pub fn set_status(&self, status: &str) {
        self.state.lock().unwrap().share["status"] = json!(status);
    }

    /// Attach `n` items with the same status.
    pub fn insert_items(&self, n: usize, status: &str) -> Vec<String> {
        (0..n).map(|_| self.insert_item(status)).collect()
    }

    /// Attach an item directly.
    pub fn insert_item(&self, status: &str) -> String {
        let mut state = self.state.lock().unwrap();
        let n = state.next_item;
        state.next_item += 1;
        let uri = format!("si-{n}");
        push_item(&mut state.share, &uri, &format!("tbl-{n}"), "Table", status);
        uri
    }

    /// Every session token fails from now on (or stops failing).
    pub fn set_expired(&self, expired: bool) {
        self.state.lock().unwrap().expired = expired;
    }

    /// Queue a reply for the next call of `operation`.
    pub fn script(&self, operation: &str, reply: Scripted) {
        self.state
            .lock()
            .unwrap()
            .scripted
            .entry(operation.to_string())
            .or_default()
            .push_back(reply);
    }

    /// Operation names in call order.
    pub fn calls(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .map(|r| r.operation_name.clone())
            .collect()
    }

    /// Full requests in call order.
    pub fn requests(&self) -> Vec<GraphqlRequest> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Tokens set on the transport, in order.
    pub fn tokens(&self) -> Vec<Option<String>> {
        self.state.lock().unwrap().tokens.clone()
    }

    /// Forget recorded calls.
    pub fn reset_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    /// Current stored status.
    pub fn status(&self) -> String {
        self.state.lock().unwrap().share["status"]
            .as_str()
            .unwrap_or_default()
            .to_string()
    }

    fn handle(state: &mut BackendState, request: &GraphqlRequest) -> GraphqlResponse {
        let vars = &request.variables;
        let name = request.operation_name.as_str();
        let share = &mut state.share;

        let ack = |share: &Value, field: &str| {
            GraphqlResponse::ok(json!({
                field: {"shareUri": share["shareUri"], "status": share["status"]}
            }))
        };

        match name {
            "getShareObject" => {
                // Every stored item is attached, so `isShared` selects all of them.
                let filter = vars.get("filter").cloned().unwrap_or(Value::Null);
                let page = filter["page"].as_u64().unwrap_or(1).max(1);
                let page_size = filter["pageSize"].as_u64().unwrap_or(10).max(1);
                let all: Vec<Value> = share["items"].as_array().cloned().unwrap_or_default();
                let count = all.len() as u64;
                let pages = count.div_ceil(page_size).max(1);
                let nodes: Vec<Value> = all
                    .into_iter()
                    .skip(((page - 1) * page_size) as usize)
                    .take(page_size as usize)
                    .collect();
                let mut object = share.clone();
                object["items"] = json!({
                    "count": count,
                    "page": page,
                    "pages": pages,
                    "hasNext": page < pages,
                    "hasPrevious": page > 1,
                    "nodes": nodes
                });
                GraphqlResponse::ok(json!({ "getShareObject": object }))
            }
            "getS3ConsumptionData" => GraphqlResponse::ok(json!({
                "getS3ConsumptionData": {
                    "s3bucketName": "sales-bucket",
                    "s3AccessPointName": null,
                    "sharedGlueDatabase": "sales_shared"
                }
            })),
            "submitShareObject" => {
                share["status"] = json!("Submitted");
                ack(share, name)
            }
            "approveShareObject" => {
                share["status"] = json!("Approved");
                set_item_status(share, "PendingApproval", "Share_Approved");
                ack(share, name)
            }
            "rejectShareObject" => {
                share["status"] = json!("Rejected");
                share["rejectPurpose"] = vars.get("rejectPurpose").cloned().unwrap_or(Value::Null);
                set_item_status(share, "PendingApproval", "Share_Rejected");
                ack(share, name)
            }
            "deleteShareObject" => GraphqlResponse::ok(json!({ "deleteShareObject": true })),
            "addSharedItem" => {
                let n = state.next_item;
                state.next_item += 1;
                let uri = format!("si-{n}");
                let input = vars.get("input").cloned().unwrap_or(Value::Null);
                push_item(
                    &mut state.share,
                    &uri,
                    input["itemUri"].as_str().unwrap_or_default(),
                    input["itemType"].as_str().unwrap_or("Table"),
                    "PendingApproval",
                );
                GraphqlResponse::ok(json!({ "addSharedItem": {"shareItemUri": uri} }))
            }
            "removeSharedItem" => {
                let uri = vars.get("shareItemUri").cloned().unwrap_or(Value::Null);
                if let Some(items) = share["items"].as_array_mut() {
                    items.retain(|item| item["shareItemUri"] != uri);
                }
                GraphqlResponse::ok(json!({ "removeSharedItem": true }))
            }
            "revokeItemsShareObject" | "verifyItemsShareObject" | "reApplyItemsShareObject" => {
                let selected: Vec<Value> = vars
                    .get("input")
                    .and_then(|i| i.get("itemUris"))
                    .and_then(Value::as_array)
                    .cloned()
                    .unwrap_or_default();
                if let Some(items) = share["items"].as_array_mut() {
                    for item in items.iter_mut().filter(|i| selected.contains(&i["shareItemUri"])) {
                        match name {
                            "revokeItemsShareObject" => item["status"] = json!("Revoke_Approved"),
                            "verifyItemsShareObject" => item["healthStatus"] = json!("PendingVerify"),
                            _ => item["healthStatus"] = json!("PendingReApply"),
                        }
                    }
                }
                ack(share, name)
            }
            "updateShareRequestReason" => {
                share["requestPurpose"] = vars.get("requestPurpose").cloned().unwrap_or(Value::Null);
                GraphqlResponse::ok(json!({ name: true }))
            }
            "updateShareRejectReason" => {
                share["rejectPurpose"] = vars.get("rejectPurpose").cloned().unwrap_or(Value::Null);
                GraphqlResponse::ok(json!({ name: true }))
            }
            "getShareRequestsToMe" | "getShareRequestsFromMe" => {
                let mut summary = share.clone();
                summary["statistics"] = json!({
                    "sharedItems": 0, "revokedItems": 0, "failedItems": 0, "pendingItems": 1
                });
                GraphqlResponse::ok(json!({ name: {
                    "count": 1, "page": 1, "pages": 1, "hasNext": false, "hasPrevious": false,
                    "nodes": [summary]
                }}))
            }
            other => GraphqlResponse::error(format!("Unknown operation {other}")),
        }
    }
}

fn push_item(share: &mut Value, uri: &str, item_uri: &str, item_type: &str, status: &str) {
    if !share["items"].is_array() {
        share["items"] = json!([]);
    }
    if let Some(items) = share["items"].as_array_mut() {
        items.push(json!({
            "shareItemUri": uri,
            "itemUri": item_uri,
            "itemType": item_type,
            "itemName": format!("table_{uri}"),
            "status": status,
            "healthStatus": null
        }));
    }
}

fn set_item_status(share: &mut Value, from: &str, to: &str) {
    if let Some(items) = share["items"].as_array_mut() {
        for item in items.iter_mut().filter(|i| i["status"] == from) {
            item["status"] = json!(to);
        }
    }
}

#[async_trait]
impl GraphqlTransport for FakeBackend {
    async fn send(&self, request: &GraphqlRequest) -> AppResult<GraphqlResponse> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(request.clone());

        if let Some(reply) = state
            .scripted
            .get_mut(&request.operation_name)
            .and_then(VecDeque::pop_front)
        {
            return match reply {
                Scripted::Response(response) => Ok(response),
                Scripted::Error(error) => Err(error),
            };
        }

        if state.expired {
            return Err(AppError::auth_expired("The session has expired"));
        }

        Ok(Self::handle(&mut state, request))
    }

    async fn set_token(&self, token: Option<String>) {
        self.state.lock().unwrap().tokens.push(token);
    }
}

/// A wired console over the fake backend.
pub struct TestApp {
    pub ctx: AppContext,
    pub backend: Arc<FakeBackend>,
    pub durable: MemoryStore,
    pub events: mpsc::UnboundedReceiver<ConsoleEvent>,
}

impl TestApp {
    /// Console for a viewer with `role` on the share request.
    pub fn new(role: &str) -> Self {
        Self::with_backend(Arc::new(FakeBackend::new(role)), MemoryStore::new())
    }

    /// Console over an existing backend and durable store, as after a restart.
    pub fn with_backend(backend: Arc<FakeBackend>, durable: MemoryStore) -> Self {
        let (notifier, events) = ChannelNotifier::new();
        let ctx = AppContext::new(
            AppConfig::default(),
            backend.clone(),
            Arc::new(durable.clone()),
            Arc::new(MemoryStore::new()),
            Arc::new(notifier),
        );
        Self {
            ctx,
            backend,
            durable,
            events,
        }
    }

    /// Sign `username` in.
    pub async fn sign_in(&self, username: &str) {
        let user = SessionUser::named(username);
        self.ctx.session.initialize(user).await.unwrap();
    }

    /// Events dispatched since the last call.
    pub fn take_events(&mut self) -> Vec<ConsoleEvent> {
        drain(&mut self.events)
    }

    /// Messages of dispatched notifications since the last call.
    pub fn take_messages(&mut self) -> Vec<String> {
        self.take_events()
            .into_iter()
            .filter_map(|e| match e {
                ConsoleEvent::Notify(n) => Some(n.message),
                _ => None,
            })
            .collect()
    }

    pub fn share_uri() -> ShareUri {
        ShareUri::new(SHARE_URI)
    }
}
