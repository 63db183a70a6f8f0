//! Runtime catalog of Bot API methods
//!
//! The request types are static: a caller that knows at compile time which
//! endpoint it targets just builds the struct. Some callers only learn the
//! endpoint at runtime (a webhook relay, a config-driven scheduler, an admin
//! console). The registry maps endpoint names to [`MethodDescriptor`]s so those
//! callers can look up a method's schema and validate raw JSON parameters
//! against the concrete request type.
//!
//! # Lookup
//!
//! Endpoint names are matched case-insensitively: the Bot API itself accepts
//! `unbanChatMember` and `unbanchatmember` alike.
//!
//! # Thread Safety
//!
//! Registries are cheaply cloneable (`Arc`-based) and read-only once built, so
//! they can be shared between threads without locking.
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use tgbots_methods::MethodRegistry;
//!
//! let registry = MethodRegistry::with_builtin_methods();
//! assert!(registry.has_method("unbanChatMember"));
//!
//! registry
//!     .validate_params("unbanchatmember", json!({"chat_id": "@somechannel", "user_id": 12345}))
//!     .unwrap();
//! ```

use crate::group_administration::{
    BanChatMember, DeleteChatPhoto, ExportChatInviteLink, GetChatMemberCount, LeaveChat,
    SetChatDescription, SetChatPhoto, SetChatTitle, UnbanChatMember,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tgbots_core::{codec, BotApiMethod, Error, FieldKind, FieldSpec, Result};

/// Type-erased validation entry point of one method
pub type ValidateFn = fn(Value) -> Result<()>;

/// Registry entry describing one endpoint
#[derive(Clone, Copy)]
pub struct MethodDescriptor {
    /// Endpoint name as sent to the API
    pub name: &'static str,
    /// Field schema of the request
    pub fields: &'static [FieldSpec],
    /// Whether the request carries file reference fields, and may therefore
    /// need a multipart body
    pub multipart: bool,
    /// Rust type name of the answer
    pub response: &'static str,
    /// Decode JSON parameters into the request type and validate it
    pub validate: ValidateFn,
}

impl MethodDescriptor {
    /// Describe method `M`
    pub fn of<M>() -> Self
    where
        M: BotApiMethod + DeserializeOwned + 'static,
    {
        Self {
            name: M::METHOD,
            fields: M::FIELDS,
            multipart: M::FIELDS.iter().any(|f| f.kind == FieldKind::InputFile),
            response: std::any::type_name::<M::Response>(),
            validate: validate_erased::<M>,
        }
    }

    /// Wire names of the required fields
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> {
        let fields: &'static [FieldSpec] = self.fields;
        fields.iter().filter(|f| f.required).map(|f| f.name)
    }
}

impl fmt::Debug for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodDescriptor")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .field("multipart", &self.multipart)
            .field("response", &self.response)
            .finish_non_exhaustive()
    }
}

fn validate_erased<M>(params: Value) -> Result<()>
where
    M: BotApiMethod + DeserializeOwned,
{
    let request: M = codec::decode_request(params)?;
    request.validate()
}

/// Catalog of method descriptors keyed by endpoint name
#[derive(Clone, Default)]
pub struct MethodRegistry {
    /// Lowercased endpoint name to descriptor
    methods: Arc<HashMap<String, MethodDescriptor>>,
}

impl MethodRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every method this crate defines
    pub fn with_builtin_methods() -> Self {
        let mut registry = Self::new();
        registry.register::<SetChatPhoto>();
        registry.register::<UnbanChatMember>();
        registry.register::<BanChatMember>();
        registry.register::<DeleteChatPhoto>();
        registry.register::<SetChatTitle>();
        registry.register::<SetChatDescription>();
        registry.register::<LeaveChat>();
        registry.register::<ExportChatInviteLink>();
        registry.register::<GetChatMemberCount>();
        registry
    }

    /// Register method `M`, replacing any method with the same name
    pub fn register<M>(&mut self)
    where
        M: BotApiMethod + DeserializeOwned + 'static,
    {
        let descriptor = MethodDescriptor::of::<M>();
        tracing::debug!(
            method = descriptor.name,
            fields = descriptor.fields.len(),
            multipart = descriptor.multipart,
            "Registered method"
        );
        let methods = Arc::make_mut(&mut self.methods);
        methods.insert(descriptor.name.to_lowercase(), descriptor);
    }

    /// Get the descriptor of a method
    pub fn get(&self, method: &str) -> Option<&MethodDescriptor> {
        self.methods.get(&method.to_lowercase())
    }

    /// Check if a method is registered
    pub fn has_method(&self, method: &str) -> bool {
        self.get(method).is_some()
    }

    /// Get all registered endpoint names, sorted
    pub fn methods(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.methods.values().map(|d| d.name).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered methods
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Check if no method is registered
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Validate raw JSON parameters against a method
    ///
    /// The parameters are decoded into the concrete request type, then its
    /// `validate()` runs. Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// - `Error::MethodNotFound` if no such method is registered
    /// - `Error::MissingField` if a required key is absent or `null`
    /// - `Error::Serialization` if a value has the wrong shape
    /// - `Error::Validation` if the request fails its own checks
    pub fn validate_params(&self, method: &str, params: Value) -> Result<()> {
        let descriptor = self
            .get(method)
            .ok_or_else(|| Error::MethodNotFound(method.to_string()))?;
        (descriptor.validate)(params)
    }
}

impl fmt::Debug for MethodRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodRegistry")
            .field("methods", &self.methods())
            .finish()
    }
}
