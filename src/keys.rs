use std::fmt::Debug;

use num_traits::PrimInt;

/// The key domain of the splay tree: primitive integers with a total order.
///
/// The tree only ever compares keys, so this is a pure capability bound --
/// no byte decomposition, no hashing. Any signed or unsigned primitive
/// integer qualifies through the blanket impl; widening the domain to
/// arbitrary `Ord` types is a deliberate non-feature for now.
pub trait KeyTrait: PrimInt + Debug {}

impl<T> KeyTrait for T where T: PrimInt + Debug {}
