/*!

`RcCell<T>` is a thin wrapper around `Rc<RefCell<T>>` that gives shared, interior-mutable ownership of the values
that make up an algebra or a net: sorts, operations, variables, places, and transitions are all declared once during
setup and then shared by reference everywhere a term, arc, or rule needs to refer back to them. `WeakCell<T>` is the
matching non-owning handle, used where a back-reference would otherwise create a reference cycle.

*/

use std::cell::{RefCell, Ref, RefMut};
use std::rc::{Rc, Weak};

pub struct RcCell<T>(Rc<RefCell<T>>);

impl<T> RcCell<T> {
  pub fn new(value: T) -> Self {
    RcCell(Rc::new(RefCell::new(value)))
  }

  pub fn borrow(&self) -> Ref<'_, T> {
    self.0.borrow()
  }

  pub fn borrow_mut(&self) -> RefMut<'_, T> {
    self.0.borrow_mut()
  }

  pub fn downgrade(&self) -> WeakCell<T> {
    WeakCell(Rc::downgrade(&self.0))
  }

  pub fn ptr_eq(&self, other: &Self) -> bool {
    Rc::ptr_eq(&self.0, &other.0)
  }
}

impl<T> Clone for RcCell<T> {
  fn clone(&self) -> Self {
    RcCell(Rc::clone(&self.0))
  }
}

pub struct WeakCell<T>(Weak<RefCell<T>>);

impl<T> WeakCell<T> {
  pub fn upgrade(&self) -> Option<RcCell<T>> {
    self.0.upgrade().map(RcCell)
  }
}

impl<T> Clone for WeakCell<T> {
  fn clone(&self) -> Self {
    WeakCell(self.0.clone())
  }
}

/// Convenience constructor mirroring `RcCell::new`, useful at call sites that already `use apn_abs::rc_cell`.
#[macro_export]
macro_rules! rc_cell {
  ($value:expr) => {
    $crate::RcCell::new($value)
  };
}
