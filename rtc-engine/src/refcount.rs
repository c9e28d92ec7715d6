// Copyright 2025 LiveKit, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Intrusive reference counting for engine objects.
//!
//! Every engine object lives in a heap box whose header carries an atomic
//! count, the runtime type of the payload and a type-erased destructor. The
//! box address doubles as the opaque handle handed to foreign callers, so the
//! type-erased [`add_ref`] / [`release`] work on any object without knowing
//! its concrete type.

use std::{
    any::{type_name, TypeId},
    ffi::c_void,
    fmt::Debug,
    marker::PhantomData,
    ops::Deref,
    ptr::NonNull,
    sync::atomic::{self, AtomicI32, Ordering},
};

#[repr(C)]
struct RcHeader {
    ref_count: AtomicI32,
    type_id: TypeId,
    type_name: &'static str,
    destroy: unsafe fn(NonNull<RcHeader>),
}

// The header must stay the first field so that a box pointer can be read as a
// header pointer.
#[repr(C)]
struct RcBox<T> {
    header: RcHeader,
    value: T,
}

unsafe fn destroy<T>(header: NonNull<RcHeader>) {
    drop(Box::from_raw(header.cast::<RcBox<T>>().as_ptr()));
}

unsafe fn header<'a>(ptr: *mut c_void) -> Option<&'a RcHeader> {
    NonNull::new(ptr as *mut RcHeader).map(|header| &*header.as_ptr())
}

/// Owning pointer to a ref-counted engine object.
///
/// `Clone` takes a new reference, `Drop` releases one. The object is destroyed
/// when the last reference goes away, whoever holds it (Rust code or a foreign
/// caller through a raw handle).
#[repr(transparent)]
pub struct RefCounted<T: 'static> {
    ptr: NonNull<RcBox<T>>,
    _marker: PhantomData<RcBox<T>>,
}

unsafe impl<T: Send + Sync> Send for RefCounted<T> {}
unsafe impl<T: Send + Sync> Sync for RefCounted<T> {}

impl<T: 'static> RefCounted<T> {
    /// Allocates a new object with a count of one.
    pub fn new(value: T) -> Self {
        let boxed = Box::new(RcBox {
            header: RcHeader {
                ref_count: AtomicI32::new(1),
                type_id: TypeId::of::<T>(),
                type_name: type_name::<T>(),
                destroy: destroy::<T>,
            },
            value,
        });
        Self { ptr: NonNull::from(Box::leak(boxed)), _marker: PhantomData }
    }

    /// Gives up this reference without releasing it. The returned handle owns
    /// it and must eventually go through [`release`] or [`RefCounted::from_raw`].
    pub fn into_raw(this: Self) -> *mut c_void {
        let ptr = this.ptr.as_ptr() as *mut c_void;
        std::mem::forget(this);
        ptr
    }

    /// Borrowed view of the handle, the count is unchanged.
    pub fn as_raw(this: &Self) -> *mut c_void {
        this.ptr.as_ptr() as *mut c_void
    }

    /// Adopts the reference owned by `ptr`.
    ///
    /// Returns `None` for a null handle or a handle to another object type; in
    /// that case the count is left alone.
    ///
    /// # Safety
    /// `ptr` must be null or a live handle produced by [`RefCounted::into_raw`]
    /// that owns one reference.
    pub unsafe fn from_raw(ptr: *mut c_void) -> Option<Self> {
        let header = header(ptr)?;
        if header.type_id != TypeId::of::<T>() {
            return None;
        }
        Some(Self { ptr: NonNull::new_unchecked(ptr as *mut RcBox<T>), _marker: PhantomData })
    }

    /// Takes a new reference on a handle the caller keeps owning.
    ///
    /// # Safety
    /// `ptr` must be null or a live handle produced by [`RefCounted::into_raw`].
    pub unsafe fn retain_raw(ptr: *mut c_void) -> Option<Self> {
        downcast_ref::<T>(ptr)?;
        add_ref(ptr);
        Self::from_raw(ptr)
    }

    pub fn ref_count(this: &Self) -> i32 {
        unsafe { this.ptr.as_ref().header.ref_count.load(Ordering::Acquire) }
    }

    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        this.ptr == other.ptr
    }
}

impl<T: 'static> Deref for RefCounted<T> {
    type Target = T;

    fn deref(&self) -> &T {
        unsafe { &self.ptr.as_ref().value }
    }
}

impl<T: 'static> Clone for RefCounted<T> {
    fn clone(&self) -> Self {
        unsafe {
            add_ref(Self::as_raw(self));
        }
        Self { ptr: self.ptr, _marker: PhantomData }
    }
}

impl<T: 'static> Drop for RefCounted<T> {
    fn drop(&mut self) {
        unsafe {
            release(self.ptr.as_ptr() as *mut c_void);
        }
    }
}

impl<T: 'static> Debug for RefCounted<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RefCounted<{}>({:p})", type_name::<T>(), self.ptr)
    }
}

/// Increments the count behind `ptr` and returns the new count, 0 for null.
///
/// # Safety
/// `ptr` must be null or a live handle produced by [`RefCounted::into_raw`].
pub unsafe fn add_ref(ptr: *mut c_void) -> i32 {
    match header(ptr) {
        Some(header) => header.ref_count.fetch_add(1, Ordering::Relaxed) + 1,
        None => 0,
    }
}

/// Decrements the count behind `ptr` and returns the new count, 0 for null.
/// The object is destroyed on the calling thread when the count reaches zero.
///
/// # Safety
/// `ptr` must be null or a live handle that owns the reference being released.
pub unsafe fn release(ptr: *mut c_void) -> i32 {
    let Some(header_ptr) = NonNull::new(ptr as *mut RcHeader) else {
        return 0;
    };

    let remaining = header_ptr.as_ref().ref_count.fetch_sub(1, Ordering::Release) - 1;
    if remaining == 0 {
        atomic::fence(Ordering::Acquire);
        let destroy = header_ptr.as_ref().destroy;
        destroy(header_ptr);
    }
    remaining
}

/// Borrows the object behind `ptr` if it is a `T`.
///
/// # Safety
/// `ptr` must be null or a live handle, and must stay alive for `'a`.
pub unsafe fn downcast_ref<'a, T: 'static>(ptr: *mut c_void) -> Option<&'a T> {
    let header = header(ptr)?;
    if header.type_id != TypeId::of::<T>() {
        return None;
    }
    Some(&(*(ptr as *const RcBox<T>)).value)
}

/// Type name of the object behind `ptr`, for diagnostics.
///
/// # Safety
/// `ptr` must be null or a live handle.
pub unsafe fn type_name_of(ptr: *mut c_void) -> Option<&'static str> {
    header(ptr).map(|header| header.type_name)
}
