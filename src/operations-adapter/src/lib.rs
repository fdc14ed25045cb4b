// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A uniform surface over the Google Cloud operations clients.
//!
//! Most services manage long-running operations through the
//! [Operations][longrunning::client::Operations] client. The Compute service
//! predates that protocol and publishes its own operations clients, split by
//! operation scope, each with its own request types and required parameters.
//! The types in this crate let code that polls operations treat all of them
//! the same way.

pub mod errors;

use crate::errors::{ConfigurationError, Error, MissingScopeError, UnsupportedOperationError};
use gax::options::RequestOptions;

/// A convenient alias for the forwarding call results.
pub type Result<T> = std::result::Result<T, Error>;

/// A client handle accepted by the adapter.
///
/// The generated clients use an `Arc` internally, so cloning this enum is
/// cheap and clones share the wrapped implementation.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum OperationsClient {
    /// Operations on project-global Compute resources.
    Global(compute::client::GlobalOperations),
    /// Operations on organization-scoped Compute resources.
    GlobalOrganization(compute::client::GlobalOrganizationOperations),
    /// Operations on regional Compute resources.
    Region(compute::client::RegionOperations),
    /// Operations on zonal Compute resources.
    Zone(compute::client::ZoneOperations),
    /// Operations implementing the [google.longrunning.Operations] protocol.
    ///
    /// [google.longrunning.Operations]: https://google.aip.dev/151
    Longrunning(longrunning::client::Operations),
}

/// Scope parameters applied to every forwarded request.
///
/// The Compute operations clients address operations by project, and the
/// regional and zonal clients also by region or zone. These values are fixed
/// when the adapter is created and repeated on every call, only the operation
/// name changes between calls.
///
/// Each client shape reads the parameters it needs and ignores the rest:
/// - [OperationsClient::Global] requires `project`.
/// - [OperationsClient::GlobalOrganization] requires nothing, and forwards
///   `parent_id` when set.
/// - [OperationsClient::Region] requires `project` and `region`.
/// - [OperationsClient::Zone] requires `project` and `zone`.
/// - [OperationsClient::Longrunning] requires nothing.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ScopeParameters {
    /// The project ID.
    pub project: Option<String>,

    /// The name of the region scoping the operations.
    pub region: Option<String>,

    /// The name of the zone scoping the operations.
    pub zone: Option<String>,

    /// The parent organization ID, for organization-scoped operations.
    pub parent_id: Option<String>,
}

impl ScopeParameters {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the [project][Self::project] field.
    pub fn set_project<V: Into<String>>(mut self, v: V) -> Self {
        self.project = Some(v.into());
        self
    }

    /// Set the [region][Self::region] field.
    pub fn set_region<V: Into<String>>(mut self, v: V) -> Self {
        self.region = Some(v.into());
        self
    }

    /// Set the [zone][Self::zone] field.
    pub fn set_zone<V: Into<String>>(mut self, v: V) -> Self {
        self.zone = Some(v.into());
        self
    }

    /// Set the [parent_id][Self::parent_id] field.
    pub fn set_parent_id<V: Into<String>>(mut self, v: V) -> Self {
        self.parent_id = Some(v.into());
        self
    }
}

/// An operation response returned by any of the wrapped clients.
///
/// The generic operations protocol and the Compute service use different
/// operation messages with different completion markers. This enum carries
/// either message and answers the completion question uniformly.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum OperationStatus {
    /// A response from the [Operations][longrunning::client::Operations]
    /// client.
    Longrunning(longrunning::model::Operation),
    /// A response from one of the Compute operations clients.
    Compute(compute::model::Operation),
}

impl OperationStatus {
    /// Returns `true` if the operation has completed.
    ///
    /// A generic operation is complete when its `done` flag is set. A Compute
    /// operation is complete when its status is
    /// [Done][compute::model::operation::Status::Done]. An operation without
    /// status information reports as still running.
    pub fn done(&self) -> bool {
        match self {
            Self::Longrunning(op) => op.done,
            Self::Compute(op) => op.status == Some(compute::model::operation::Status::Done),
        }
    }

    /// Returns the name of the operation, if the service assigned one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Longrunning(op) if op.name.is_empty() => None,
            Self::Longrunning(op) => Some(op.name.as_str()),
            Self::Compute(op) => op.name.as_deref(),
        }
    }
}

// The detected client shape with its validated scope parameters. Detection
// happens once, in the constructor. Every dispatch matches this enum
// exhaustively, so a new variant cannot be misrouted silently.
#[derive(Clone, Debug)]
enum Variant {
    Global {
        client: compute::client::GlobalOperations,
        project: String,
    },
    GlobalOrganization {
        client: compute::client::GlobalOrganizationOperations,
        parent_id: Option<String>,
    },
    Region {
        client: compute::client::RegionOperations,
        project: String,
        region: String,
    },
    Zone {
        client: compute::client::ZoneOperations,
        project: String,
        zone: String,
    },
    Longrunning {
        client: longrunning::client::Operations,
    },
}

impl Variant {
    fn client_name(&self) -> &'static str {
        match self {
            Variant::Global { .. } => "GlobalOperations",
            Variant::GlobalOrganization { .. } => "GlobalOrganizationOperations",
            Variant::Region { .. } => "RegionOperations",
            Variant::Zone { .. } => "ZoneOperations",
            Variant::Longrunning { .. } => "Operations",
        }
    }
}

fn required(
    value: Option<String>,
    client: &str,
    parameter: &str,
) -> std::result::Result<String, ConfigurationError> {
    value.ok_or_else(|| {
        ConfigurationError::MissingScope(
            MissingScopeError::new()
                .set_client(client)
                .set_parameter(parameter),
        )
    })
}

/// Forwards operation calls to any of the wrapped clients.
///
/// The adapter detects the client shape once, validates the scope parameters
/// that shape requires, and then forwards `get`, `delete`, `cancel`, and
/// `wait` calls with the right request type. Errors reported by the wrapped
/// client are returned unchanged.
///
/// The adapter does not poll and does not retry. Those policies belong to
/// the caller or to the request options of the wrapped client.
///
/// # Example
/// ```no_run
/// # use google_cloud_operations_adapter::*;
/// # async fn sample() -> std::result::Result<(), Box<dyn std::error::Error>> {
/// let client = compute::client::ZoneOperations::builder().build().await?;
/// let adapter = OperationsAdapter::new(
///     OperationsClient::Zone(client),
///     ScopeParameters::new()
///         .set_project("my-project")
///         .set_zone("us-central1-a"),
/// )?;
/// let mut last = None;
/// while !OperationsAdapter::is_done(last.as_ref()) {
///     last = Some(adapter.get_operation("operation-12345").await?);
/// }
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct OperationsAdapter {
    variant: Variant,
    options: RequestOptions,
}

impl OperationsAdapter {
    /// Creates an adapter over the given client.
    ///
    /// Verifies that `scope` carries the parameters the client shape
    /// requires, as described in [ScopeParameters], and captures them for all
    /// later calls. No requests are sent.
    ///
    /// # Errors
    /// Returns [ConfigurationError::MissingScope] naming the first required
    /// parameter that is absent.
    pub fn new(
        client: OperationsClient,
        scope: ScopeParameters,
    ) -> std::result::Result<Self, ConfigurationError> {
        let variant = match client {
            OperationsClient::Global(client) => Variant::Global {
                project: required(scope.project, "GlobalOperations", "project")?,
                client,
            },
            OperationsClient::GlobalOrganization(client) => Variant::GlobalOrganization {
                parent_id: scope.parent_id,
                client,
            },
            OperationsClient::Region(client) => Variant::Region {
                project: required(scope.project, "RegionOperations", "project")?,
                region: required(scope.region, "RegionOperations", "region")?,
                client,
            },
            OperationsClient::Zone(client) => Variant::Zone {
                project: required(scope.project, "ZoneOperations", "project")?,
                zone: required(scope.zone, "ZoneOperations", "zone")?,
                client,
            },
            OperationsClient::Longrunning(client) => Variant::Longrunning { client },
        };
        Ok(Self {
            variant,
            options: RequestOptions::default(),
        })
    }

    /// Creates an adapter over a type-erased client handle.
    ///
    /// Performs the same detection and validation as
    /// [new][OperationsAdapter::new], for callers that assemble clients
    /// dynamically.
    ///
    /// # Errors
    /// In addition to the [new][OperationsAdapter::new] errors, returns
    /// [ConfigurationError::UnsupportedClientType] if `client` is not one of
    /// the supported operations clients.
    pub fn from_any(
        client: Box<dyn std::any::Any + Send + Sync>,
        scope: ScopeParameters,
    ) -> std::result::Result<Self, ConfigurationError> {
        let client = match client.downcast::<compute::client::GlobalOperations>() {
            Ok(client) => return Self::new(OperationsClient::Global(*client), scope),
            Err(client) => client,
        };
        let client = match client.downcast::<compute::client::GlobalOrganizationOperations>() {
            Ok(client) => return Self::new(OperationsClient::GlobalOrganization(*client), scope),
            Err(client) => client,
        };
        let client = match client.downcast::<compute::client::RegionOperations>() {
            Ok(client) => return Self::new(OperationsClient::Region(*client), scope),
            Err(client) => client,
        };
        let client = match client.downcast::<compute::client::ZoneOperations>() {
            Ok(client) => return Self::new(OperationsClient::Zone(*client), scope),
            Err(client) => client,
        };
        match client.downcast::<longrunning::client::Operations>() {
            Ok(client) => Self::new(OperationsClient::Longrunning(*client), scope),
            Err(_) => Err(ConfigurationError::UnsupportedClientType),
        }
    }

    /// Sets the request options applied to every forwarded call.
    ///
    /// The options travel with each request exactly as if they had been set
    /// on the wrapped client's request builder.
    pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// Returns the wrapped client.
    ///
    /// The returned handle shares its implementation with the client the
    /// adapter was created over, it is not a new connection.
    pub fn operations_client(&self) -> OperationsClient {
        match &self.variant {
            Variant::Global { client, .. } => OperationsClient::Global(client.clone()),
            Variant::GlobalOrganization { client, .. } => {
                OperationsClient::GlobalOrganization(client.clone())
            }
            Variant::Region { client, .. } => OperationsClient::Region(client.clone()),
            Variant::Zone { client, .. } => OperationsClient::Zone(client.clone()),
            Variant::Longrunning { client } => OperationsClient::Longrunning(client.clone()),
        }
    }

    /// Reports whether a polled operation has completed.
    ///
    /// Accepts the last response observed by the caller's polling loop, or
    /// `None` before the first poll. Without evidence of completion the
    /// answer is `false`.
    pub fn is_done(last: Option<&OperationStatus>) -> bool {
        last.is_some_and(OperationStatus::done)
    }

    /// Fetches the current state of the named operation.
    ///
    /// # Errors
    /// Returns [Error::Transport] with the wrapped client's error, unchanged,
    /// if the call fails.
    pub async fn get_operation(&self, name: impl Into<String>) -> Result<OperationStatus> {
        let name = name.into();
        match &self.variant {
            Variant::Global { client, project } => {
                let op = client
                    .get()
                    .set_operation(name)
                    .set_project(project.as_str())
                    .with_options(self.options.clone())
                    .send()
                    .await?;
                Ok(OperationStatus::Compute(op))
            }
            Variant::GlobalOrganization { client, parent_id } => {
                let op = client
                    .get()
                    .set_operation(name)
                    .set_or_clear_parent_id(parent_id.clone())
                    .with_options(self.options.clone())
                    .send()
                    .await?;
                Ok(OperationStatus::Compute(op))
            }
            Variant::Region {
                client,
                project,
                region,
            } => {
                let op = client
                    .get()
                    .set_operation(name)
                    .set_project(project.as_str())
                    .set_region(region.as_str())
                    .with_options(self.options.clone())
                    .send()
                    .await?;
                Ok(OperationStatus::Compute(op))
            }
            Variant::Zone {
                client,
                project,
                zone,
            } => {
                let op = client
                    .get()
                    .set_operation(name)
                    .set_project(project.as_str())
                    .set_zone(zone.as_str())
                    .with_options(self.options.clone())
                    .send()
                    .await?;
                Ok(OperationStatus::Compute(op))
            }
            Variant::Longrunning { client } => {
                let op = client
                    .get_operation()
                    .set_name(name)
                    .with_options(self.options.clone())
                    .send()
                    .await?;
                Ok(OperationStatus::Longrunning(op))
            }
        }
    }

    /// Cancels the named operation.
    ///
    /// Only the [google.longrunning.Operations] protocol supports
    /// cancellation. Compute operations cannot be cancelled, on the Compute
    /// variants this fails without sending a request.
    ///
    /// [google.longrunning.Operations]: https://google.aip.dev/151
    ///
    /// # Errors
    /// Returns [Error::UnsupportedOperation] on every Compute variant, or
    /// [Error::Transport] if the forwarded call fails.
    pub async fn cancel_operation(&self, name: impl Into<String>) -> Result<()> {
        match &self.variant {
            Variant::Global { .. }
            | Variant::GlobalOrganization { .. }
            | Variant::Region { .. }
            | Variant::Zone { .. } => Err(self.unsupported("cancel")),
            Variant::Longrunning { client } => {
                client
                    .cancel_operation()
                    .set_name(name.into())
                    .with_options(self.options.clone())
                    .send()
                    .await?;
                Ok(())
            }
        }
    }

    /// Deletes the named operation.
    ///
    /// Succeeding calls for the same operation fail with a transport error,
    /// as the wrapped services report deleted operations as not found.
    ///
    /// # Errors
    /// Returns [Error::Transport] with the wrapped client's error, unchanged,
    /// if the call fails.
    pub async fn delete_operation(&self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        match &self.variant {
            Variant::Global { client, project } => {
                client
                    .delete()
                    .set_operation(name)
                    .set_project(project.as_str())
                    .with_options(self.options.clone())
                    .send()
                    .await?;
            }
            Variant::GlobalOrganization { client, parent_id } => {
                client
                    .delete()
                    .set_operation(name)
                    .set_or_clear_parent_id(parent_id.clone())
                    .with_options(self.options.clone())
                    .send()
                    .await?;
            }
            Variant::Region {
                client,
                project,
                region,
            } => {
                client
                    .delete()
                    .set_operation(name)
                    .set_project(project.as_str())
                    .set_region(region.as_str())
                    .with_options(self.options.clone())
                    .send()
                    .await?;
            }
            Variant::Zone {
                client,
                project,
                zone,
            } => {
                client
                    .delete()
                    .set_operation(name)
                    .set_project(project.as_str())
                    .set_zone(zone.as_str())
                    .with_options(self.options.clone())
                    .send()
                    .await?;
            }
            Variant::Longrunning { client } => {
                client
                    .delete_operation()
                    .set_name(name)
                    .with_options(self.options.clone())
                    .send()
                    .await?;
            }
        }
        Ok(())
    }

    /// Waits for the named operation with the service-side wait, and returns
    /// its state at the end of the wait.
    ///
    /// The Compute `wait` calls block up to a service-chosen bound, about two
    /// minutes, and may return before the operation completes. Callers must
    /// still check the returned status. The [google.longrunning.Operations]
    /// client and the organization-scoped client do not provide a wait call.
    ///
    /// [google.longrunning.Operations]: https://google.aip.dev/151
    ///
    /// # Errors
    /// Returns [Error::UnsupportedOperation] on
    /// [OperationsClient::GlobalOrganization] and
    /// [OperationsClient::Longrunning], or [Error::Transport] if the
    /// forwarded call fails.
    pub async fn wait_operation(&self, name: impl Into<String>) -> Result<OperationStatus> {
        let name = name.into();
        match &self.variant {
            Variant::Global { client, project } => {
                let op = client
                    .wait()
                    .set_operation(name)
                    .set_project(project.as_str())
                    .with_options(self.options.clone())
                    .send()
                    .await?;
                Ok(OperationStatus::Compute(op))
            }
            Variant::Region {
                client,
                project,
                region,
            } => {
                let op = client
                    .wait()
                    .set_operation(name)
                    .set_project(project.as_str())
                    .set_region(region.as_str())
                    .with_options(self.options.clone())
                    .send()
                    .await?;
                Ok(OperationStatus::Compute(op))
            }
            Variant::Zone {
                client,
                project,
                zone,
            } => {
                let op = client
                    .wait()
                    .set_operation(name)
                    .set_project(project.as_str())
                    .set_zone(zone.as_str())
                    .with_options(self.options.clone())
                    .send()
                    .await?;
                Ok(OperationStatus::Compute(op))
            }
            Variant::GlobalOrganization { .. } | Variant::Longrunning { .. } => {
                Err(self.unsupported("wait"))
            }
        }
    }

    fn unsupported(&self, operation: &str) -> Error {
        Error::UnsupportedOperation(
            UnsupportedOperationError::new()
                .set_client(self.variant.client_name())
                .set_operation(operation),
        )
    }
}
