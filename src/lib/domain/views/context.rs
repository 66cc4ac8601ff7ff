//! Data handed to a view while it renders

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::mail::HostContext;

/// Ordered, case-sensitive key/value data for the view.
///
/// Keys iterate in insertion order, and serialize in the same order for
/// engines that take their data as one serialized document. The same store
/// backs both access styles: entries written through [`ViewData`] are
/// readable through the [`ViewBag`] returned by
/// [`crate::domain::mail::MailerContext::bag`] and vice versa.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ViewData {
    entries: Map<String, Value>,
}

impl ViewData {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, replacing any previous entry under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Looks up a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Looks up a string value by key.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    /// Whether an entry exists under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }
}

impl std::ops::Index<&str> for ViewData {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.entries
            .get(key)
            .unwrap_or_else(|| panic!("no view data entry for key {key:?}"))
    }
}

/// Dynamic-style access to a [`ViewData`] store.
///
/// A bag is a short-lived borrow of the context's view data; setting a key
/// here and reading it back through [`ViewData::get`] (or the other way
/// round) always observes the same entry.
#[derive(Debug)]
pub struct ViewBag<'a> {
    data: &'a mut ViewData,
}

impl<'a> ViewBag<'a> {
    pub(crate) fn new(data: &'a mut ViewData) -> Self {
        Self { data }
    }

    /// Sets a value under `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.data.insert(key, value);
    }

    /// Reads the value under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }
}

/// An opaque model handed through to the view.
///
/// Cloning shares the underlying value; [`Model::ptr_eq`] observes that the
/// object reachable from a render result is the one the caller supplied.
#[derive(Clone)]
pub struct Model(Arc<dyn Any + Send + Sync>);

impl Model {
    /// Wraps a value as the view model.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Borrows the model as a concrete type, if it is one.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }

    /// Whether two handles refer to the same underlying value.
    pub fn ptr_eq(&self, other: &Model) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Model").finish()
    }
}

/// Everything a view can see while rendering.
#[derive(Debug)]
pub struct RenderContext<'a> {
    model: Option<Model>,
    view_data: &'a ViewData,
    host: &'a HostContext,
}

impl<'a> RenderContext<'a> {
    /// Builds a rendering context over the caller's live data.
    pub fn new(model: Option<Model>, view_data: &'a ViewData, host: &'a HostContext) -> Self {
        Self {
            model,
            view_data,
            host,
        }
    }

    /// The effective model, if any.
    pub fn model(&self) -> Option<&Model> {
        self.model.as_ref()
    }

    /// The caller's view data, exactly as populated before the render call.
    pub fn view_data(&self) -> &ViewData {
        self.view_data
    }

    /// The host execution context the render was invoked under.
    pub fn host(&self) -> &HostContext {
        self.host
    }
}
