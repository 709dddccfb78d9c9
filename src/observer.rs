//! Generic publish/subscribe primitive.
//!
//! [`Subject`] keeps an ordered list of observers and notifies them
//! synchronously, in attachment order. It is generic over the event type and
//! knows nothing about tools or panels; the model layer instantiates it with
//! [`crate::model::StateEvent`].
//!
//! The crate is single-threaded by design, so observers are plain `Rc` trait
//! objects rather than `Arc`/`Mutex`. There is no weak-reference collection:
//! every observer attached to a subject must be detached before it is
//! discarded. A forgotten observer keeps receiving notifications and is kept
//! alive by the subject — a leak, never a crash.

use std::cell::RefCell;
use std::rc::Rc;

/// Receives change notifications from a [`Subject`].
///
/// `update` takes `&self`; observers that need to mutate their own state do
/// so through interior mutability. Attaching or detaching observers from
/// inside `update` is not supported and must be avoided.
pub trait Observer<E> {
    /// Called once per notification with the event that triggered it.
    fn update(&self, event: &E);
}

/// Ordered collection of distinct observers.
///
/// Attach is idempotent by reference identity, detach removes at most one
/// entry, and `notify` runs every observer to completion before returning.
pub struct Subject<E> {
    observers: RefCell<Vec<Rc<dyn Observer<E>>>>,
}

impl<E> Subject<E> {
    pub fn new() -> Self {
        Self {
            observers: RefCell::new(Vec::new()),
        }
    }

    /// Attaches an observer unless the same reference is already present.
    pub fn attach(&self, observer: Rc<dyn Observer<E>>) {
        let mut observers = self.observers.borrow_mut();
        if !observers.iter().any(|o| same_observer(o, &observer)) {
            observers.push(observer);
        }
    }

    /// Detaches an observer if present; detaching an absent observer is a
    /// no-op, so repeated cleanup is safe.
    pub fn detach(&self, observer: &Rc<dyn Observer<E>>) {
        let mut observers = self.observers.borrow_mut();
        if let Some(index) = observers.iter().position(|o| same_observer(o, observer)) {
            observers.remove(index);
        }
    }

    /// Notifies every attached observer synchronously, in attachment order.
    ///
    /// Dispatch iterates over a snapshot of the list, so the list itself
    /// stays consistent even if a callback misbehaves and mutates it.
    pub fn notify(&self, event: &E) {
        let snapshot: Vec<_> = self.observers.borrow().clone();
        for observer in snapshot {
            observer.update(event);
        }
    }

    /// Number of currently attached observers.
    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    /// Removes all observers at once.
    pub fn clear(&self) {
        self.observers.borrow_mut().clear();
    }
}

impl<E> Default for Subject<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Identity comparison on the data pointer only.
///
/// `Rc::ptr_eq` on trait objects also compares vtable pointers, which are not
/// guaranteed unique per type across codegen units.
fn same_observer<E>(a: &Rc<dyn Observer<E>>, b: &Rc<dyn Observer<E>>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Counter {
        seen: Cell<u32>,
    }

    impl Counter {
        fn new() -> Rc<Self> {
            Rc::new(Self { seen: Cell::new(0) })
        }
    }

    impl Observer<u32> for Counter {
        fn update(&self, event: &u32) {
            self.seen.set(self.seen.get() + event);
        }
    }

    #[test]
    fn notify_reaches_attached_observers() {
        let subject = Subject::new();
        let counter = Counter::new();
        subject.attach(counter.clone());

        subject.notify(&3);
        subject.notify(&4);

        assert_eq!(counter.seen.get(), 7);
    }

    #[test]
    fn duplicate_attach_delivers_once() {
        let subject = Subject::new();
        let counter = Counter::new();
        subject.attach(counter.clone());
        subject.attach(counter.clone());

        assert_eq!(subject.observer_count(), 1);
        subject.notify(&1);
        assert_eq!(counter.seen.get(), 1);
    }

    #[test]
    fn detach_stops_delivery_and_is_idempotent() {
        let subject = Subject::new();
        let counter = Counter::new();
        subject.attach(counter.clone());

        let as_observer: Rc<dyn Observer<u32>> = counter.clone();
        subject.detach(&as_observer);
        subject.detach(&as_observer);

        subject.notify(&5);
        assert_eq!(counter.seen.get(), 0);
        assert_eq!(subject.observer_count(), 0);
    }

    #[test]
    fn notification_follows_attachment_order() {
        struct Recorder {
            id: u32,
            order: Rc<RefCell<Vec<u32>>>,
        }

        impl Observer<u32> for Recorder {
            fn update(&self, _event: &u32) {
                self.order.borrow_mut().push(self.id);
            }
        }

        let subject = Subject::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for id in 0..3 {
            subject.attach(Rc::new(Recorder {
                id,
                order: order.clone(),
            }));
        }

        subject.notify(&0);
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn clear_removes_everything() {
        let subject = Subject::new();
        subject.attach(Counter::new());
        subject.attach(Counter::new());
        assert_eq!(subject.observer_count(), 2);

        subject.clear();
        assert_eq!(subject.observer_count(), 0);
    }
}
