//! Partial updates where the zero value of a field means "leave unchanged".
//!
//! A request can therefore never clear a text field or set a number to zero;
//! callers that need that must write the row some other way.

/// Values with a distinguished "absent" representation.
pub trait ZeroValue {
    fn is_zero(&self) -> bool;
}

impl ZeroValue for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl ZeroValue for i64 {
    fn is_zero(&self) -> bool {
        *self == 0
    }
}

pub fn merge_field<T: ZeroValue + Clone>(current: &mut T, incoming: &T) {
    if !incoming.is_zero() {
        *current = incoming.clone();
    }
}

/// Overlay a sparse update request onto an existing row.
pub trait Merge<R> {
    fn merge(&self, request: &R) -> Self;
}

/// Implements `Merge` by copying each listed field whose request value is non-zero.
macro_rules! impl_merge {
    ($entity:ty, $request:ty, [$($field:ident),+ $(,)?]) => {
        impl $crate::services::patch::Merge<$request> for $entity {
            fn merge(&self, request: &$request) -> Self {
                let mut merged = self.clone();
                $( $crate::services::patch::merge_field(&mut merged.$field, &request.$field); )+
                merged
            }
        }
    };
}

pub(crate) use impl_merge;
