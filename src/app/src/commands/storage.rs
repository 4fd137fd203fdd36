//! Key-value storage command definitions.
//!
//! These types define the interface between the Core and the Shell for
//! persistent storage. In the browser the Shell backs them with
//! `localStorage`.

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

// Operations that the Shell needs to perform on its storage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum StorageOperation {
    Get { key: String },
    Set { key: String, value: String },
}

// The output from storage operations (shell tells us what happened)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum StorageOutput {
    /// Result of `Get`, `None` if the key is not set
    Value(Option<String>),
    /// Result of `Set`
    Saved,
    Error { message: String },
}

impl Operation for StorageOperation {
    type Output = StorageOutput;
}

/// Command-based storage API
pub struct Storage<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Storage<Effect, Event>
where
    Effect: Send + From<crux_core::Request<StorageOperation>> + 'static,
    Event: Send + 'static,
{
    /// Read the value stored under `key`
    pub fn get(key: impl Into<String>) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(StorageOperation::Get { key: key.into() })
    }

    /// Replace the value stored under `key`
    pub fn set(key: impl Into<String>, value: impl Into<String>) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(StorageOperation::Set {
            key: key.into(),
            value: value.into(),
        })
    }
}

/// Request builder for storage operations
#[must_use]
pub struct RequestBuilder<Effect, Event> {
    operation: StorageOperation,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<StorageOperation>> + 'static,
    Event: Send + 'static,
{
    fn new(operation: StorageOperation) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    /// Build the request into a Command RequestBuilder
    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = StorageOutput>>
    {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}
