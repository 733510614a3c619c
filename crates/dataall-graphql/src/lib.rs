//! # dataall-graphql
//!
//! The leaf of the console's request path. A [`GraphqlRequest`] is the
//! serializable descriptor of one query or mutation; [`Operation`] pairs it
//! with the typed shape of its result; a [`GraphqlTransport`] sends it to
//! the single API endpoint.
//!
//! Every response is checked for an `errors` array before `data` is
//! touched. The first error's `message` is the one surfaced to the user.

pub mod classify;
pub mod operation;
pub mod queries;
pub mod request;
pub mod response;
pub mod transport;

pub use operation::{Operation, OperationKind};
pub use request::GraphqlRequest;
pub use response::{GraphqlError, GraphqlResponse};
pub use transport::{GraphqlTransport, HttpTransport};
