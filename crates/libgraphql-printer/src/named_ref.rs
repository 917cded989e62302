use std::marker::PhantomData;

/// Represents a strongly-typed, `String`-named reference to a "resource"
/// (`TResource`) stored within some other data-store (`TSource`) without
/// holding an explicit reference to that data-store. De-referencing a
/// [NamedRef] is done via [NamedRef::deref()] by providing an explicit
/// reference to the `TSource`.
///
/// As a concrete example, [crate::types::ObjectType] stores a
/// `Vec<NamedRef<crate::schema::Schema, crate::types::GraphQLType>>` to point
/// at the [crate::types::InterfaceType]s it implements. Storing names instead
/// of direct references lets [crate::schema::Schema] own all of its types
/// without any self-references.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedRef<
    TSource,
    TResource: DerefByName<Source=TSource>,
> {
    name: String,
    #[serde(skip)]
    phantom: PhantomData<fn() -> (TSource, TResource)>,
}
impl<
    TSource,
    TResource: DerefByName<Source=TSource>,
> NamedRef<TSource, TResource> {
    pub fn deref<'a>(
        &self,
        source: &'a TSource,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(name: impl AsRef<str>) -> NamedRef<TSource, TResource> {
        NamedRef {
            name: name.as_ref().to_string(),
            phantom: PhantomData,
        }
    }
}

/// Implement this trait for any type that could be referenced by name. This
/// enables usage of [`NamedRef`] for that type.
pub trait DerefByName: Clone + core::fmt::Debug {
    type Source;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> where Self: Sized;

    fn named_ref(name: &str) -> NamedRef<Self::Source, Self> where Self: Sized {
        NamedRef::<Self::Source, Self>::new(name)
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DerefByNameError {
    #[error("No definition named `{0}` exists")]
    DanglingReference(String),
}
