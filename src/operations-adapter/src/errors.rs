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

/// Possible errors when creating an adapter.
///
/// The operations clients differ in the scope parameters they require. The
/// adapter verifies its configuration when it is created, so the forwarding
/// calls never fail for configuration reasons.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ConfigurationError {
    /// A scope parameter required by the wrapped client is absent.
    MissingScope(MissingScopeError),
    /// The handle is not one of the supported operations clients.
    UnsupportedClientType,
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingScope(d) => write!(
                f,
                "the {} client requires the `{}` scope parameter",
                d.client, d.parameter
            ),
            Self::UnsupportedClientType => write!(
                f,
                "unsupported client type, expected one of the Compute operations clients or the longrunning `Operations` client"
            ),
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Details about a missing scope parameter.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct MissingScopeError {
    /// The name of the client requiring the parameter.
    pub client: String,

    /// The name of the missing parameter.
    pub parameter: String,
}

impl MissingScopeError {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the [client][Self::client] field.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_operations_adapter::errors::MissingScopeError;
    /// let error = MissingScopeError::new().set_client("ZoneOperations");
    /// ```
    pub fn set_client<V: Into<String>>(mut self, v: V) -> Self {
        self.client = v.into();
        self
    }

    /// Set the [parameter][Self::parameter] field.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_operations_adapter::errors::MissingScopeError;
    /// let error = MissingScopeError::new().set_parameter("zone");
    /// ```
    pub fn set_parameter<V: Into<String>>(mut self, v: V) -> Self {
        self.parameter = v.into();
        self
    }
}

/// The error type for the adapter's forwarding calls.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The wrapped client does not provide the requested call.
    UnsupportedOperation(UnsupportedOperationError),
    /// The wrapped client reported an error.
    ///
    /// The adapter does not retry, rewrite, or otherwise interpret these
    /// errors. The value is the [gax::error::Error] produced by the wrapped
    /// client, unchanged.
    Transport(gax::error::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedOperation(d) => write!(
                f,
                "the {} client does not support `{}`",
                d.client, d.operation
            ),
            Self::Transport(e) => std::fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnsupportedOperation(_) => None,
            Self::Transport(e) => Some(e),
        }
    }
}

impl From<gax::error::Error> for Error {
    fn from(e: gax::error::Error) -> Self {
        Self::Transport(e)
    }
}

/// Details about a call the wrapped client does not provide.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UnsupportedOperationError {
    /// The name of the wrapped client.
    pub client: String,

    /// The name of the unsupported call.
    pub operation: String,
}

impl UnsupportedOperationError {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the [client][Self::client] field.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_operations_adapter::errors::UnsupportedOperationError;
    /// let error = UnsupportedOperationError::new().set_client("RegionOperations");
    /// ```
    pub fn set_client<V: Into<String>>(mut self, v: V) -> Self {
        self.client = v.into();
        self
    }

    /// Set the [operation][Self::operation] field.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_operations_adapter::errors::UnsupportedOperationError;
    /// let error = UnsupportedOperationError::new().set_operation("cancel");
    /// ```
    pub fn set_operation<V: Into<String>>(mut self, v: V) -> Self {
        self.operation = v.into();
        self
    }
}
