use core::cell::Cell;
use core::marker::PhantomData;

/// Register token tag.
///
/// The tag of a register token encodes how the token may be shared; see
/// [the module level documentation](super) for details.
pub trait RegTag: Sized + Default + Send + 'static {}

/// Owned register token tag.
///
/// An owned token is the single live handle to its register that may issue
/// whole-register stores.
pub trait RegOwned: RegTag {}

/// Unique register token tag.
///
/// The only tag that permits read-modify-write, because the `!Sync` unique
/// token proves no other execution context holds a handle.
#[derive(Default)]
pub struct Uniq {
    _not_sync: PhantomData<Cell<()>>,
}

impl RegTag for Uniq {}
impl RegOwned for Uniq {}

/// Shared register token tag.
///
/// Owned, and safe to reference from multiple execution contexts; stores
/// are permitted, read-modify-write is not.
#[derive(Default)]
pub struct Shared;

impl RegTag for Shared {}
impl RegOwned for Shared {}

/// Duplicable observer register token tag.
///
/// Freely copyable. Observers may only read, or use the dedicated
/// hardware-atomic write paths (split set/reset and write-one-to-clear
/// fields), which are safe without exclusivity.
#[derive(Clone, Copy, Default)]
pub struct Dup;

impl RegTag for Dup {}
