use std::any::type_name;

use crate::scope::ContextDecorator;

/// Result transformation a decorator applies to what the wrapped callable returns.
///
/// Runs inside the scope, so an `Err` here reaches `exit` like any other
/// failure of the block.
pub trait Apply<R>: ContextDecorator {
    type Output;
    fn apply(&mut self, result: R) -> Result<Self::Output, Self::Error>;
}

/// Identity metadata of a wrapped callable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FnMeta {
    pub path: String,
    pub doc: Option<String>,
}

impl FnMeta {
    fn of<F>() -> Self {
        Self {
            path: type_name::<F>().to_string(),
            doc: None,
        }
    }

    /// Last path segment, e.g. `demo_function` for `my_crate::demo_function`.
    pub fn name(&self) -> &str {
        self.path.rsplit("::").next().unwrap_or(&self.path)
    }
}

/// A callable wrapped by a [`ContextDecorator`].
///
/// Arguments are passed as a single value; use a tuple for several.
pub struct Decorated<D, F> {
    decorator: D,
    func: F,
    meta: FnMeta,
}

impl<D, F> Decorated<D, F>
where
    D: ContextDecorator,
{
    pub(crate) fn new(decorator: D, func: F) -> Self {
        Self {
            decorator,
            func,
            meta: FnMeta::of::<F>(),
        }
    }

    /// Invoke the callable inside the decorator's scope and pass its result
    /// through [`Apply::apply`]. `Ok(None)` means a failure was suppressed.
    pub fn call<A, R>(&mut self, arg: A) -> Result<Option<<D as Apply<R>>::Output>, D::Error>
    where
        F: FnMut(A) -> R,
        D: Apply<R>,
    {
        let Self { decorator, func, .. } = self;
        decorator.scope(|d| d.apply(func(arg)))
    }

    /// Like [`call`](Self::call) for callables that fail with the decorator's
    /// error type. Their errors reach `exit` and may be suppressed.
    pub fn try_call<A, R>(&mut self, arg: A) -> Result<Option<<D as Apply<R>>::Output>, D::Error>
    where
        F: FnMut(A) -> Result<R, D::Error>,
        D: Apply<R>,
    {
        let Self { decorator, func, .. } = self;
        decorator.scope(|d| {
            let result = func(arg)?;
            d.apply(result)
        })
    }

    pub fn name(&self) -> &str {
        self.meta.name()
    }

    pub fn doc(&self) -> Option<&str> {
        self.meta.doc.as_deref()
    }

    pub fn meta(&self) -> &FnMeta {
        &self.meta
    }

    /// Override the recorded name, e.g. for closures.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.meta.path = name.into();
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.meta.doc = Some(doc.into());
        self
    }

    pub fn decorator(&self) -> &D {
        &self.decorator
    }

    pub fn into_inner(self) -> (D, F) {
        (self.decorator, self.func)
    }
}
