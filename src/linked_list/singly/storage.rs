//! Fallible allocation helpers.
//!
//! The global allocator is asked directly so that exhaustion surfaces as
//! [`QueueError::OutOfMemory`] instead of aborting the process.

use alloc::{alloc::Layout, boxed::Box, string::String};
use core::ptr::NonNull;

use super::error::QueueError;

/// Moves `value` into a freshly allocated heap cell.
///
/// The cell uses the layout of `T` from the global allocator, so it can be
/// released later with [`Box::from_raw`]. On failure `value` is dropped.
pub fn try_alloc<T>(value: T) -> Result<NonNull<T>, QueueError> {
    let layout = Layout::new::<T>();
    if layout.size() == 0 {
        return Ok(NonNull::from(Box::leak(Box::new(value))));
    }

    // SAFETY: the layout has a non-zero size.
    let ptr = unsafe { alloc::alloc::alloc(layout) }.cast::<T>();
    let Some(ptr) = NonNull::new(ptr) else {
        tracing::warn!(size = layout.size(), "allocation failed");
        return Err(QueueError::OutOfMemory);
    };

    unsafe { ptr.as_ptr().write(value) };
    Ok(ptr)
}

/// Like [`try_alloc`] but hands back an owning [`Box`].
pub fn try_box<T>(value: T) -> Result<Box<T>, QueueError> {
    // SAFETY: `try_alloc` uses the global allocator with `Layout::new::<T>()`.
    try_alloc(value).map(|ptr| unsafe { Box::from_raw(ptr.as_ptr()) })
}

/// Copies `text` into a new, independently owned string.
pub fn try_copy(text: &str) -> Result<String, QueueError> {
    let mut owned = String::new();
    owned.try_reserve_exact(text.len()).map_err(|_| {
        tracing::warn!(len = text.len(), "failed to reserve string storage");
        QueueError::OutOfMemory
    })?;
    owned.push_str(text);
    Ok(owned)
}

#[cfg(test)]
mod tests {
    use super::{try_box, try_copy};

    #[test]
    fn test_copy_does_not_alias() {
        let source = alloc::string::String::from("hello");
        let copy = try_copy(&source).unwrap();
        assert_eq!(copy, "hello");
        assert_ne!(copy.as_ptr(), source.as_ptr());
    }

    #[test]
    fn test_copy_empty() {
        assert_eq!(try_copy("").unwrap(), "");
    }

    #[test]
    fn test_box_round_trip() {
        let boxed = try_box([7u64; 4]).unwrap();
        assert_eq!(*boxed, [7u64; 4]);
    }
}
