//! Single-threaded state holders with change subscriptions.
//!
//! Every controller owns its state through a [`Store`]. Listeners are invoked
//! synchronously on the UI thread; a listener registered while an emit is in
//! progress first hears the next emit.

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::{Rc, Weak},
};

/// Handle that releases a registration when dropped.
///
/// Release runs at most once, whether through [`Subscription::release`] or
/// drop.
#[must_use = "dropping a Subscription releases it immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A handle with nothing to release.
    pub fn empty() -> Self {
        Self { release: None }
    }

    pub fn release(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

type Listener<E> = Rc<dyn Fn(&E)>;

struct ListenerSet<E> {
    entries: RefCell<Vec<(u64, Listener<E>)>>,
    next_id: Cell<u64>,
}

/// Event fan-out to subscribed listeners.
pub struct Listeners<E> {
    inner: Rc<ListenerSet<E>>,
}

impl<E: 'static> Listeners<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(ListenerSet {
                entries: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&E) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .entries
            .borrow_mut()
            .push((id, Rc::new(listener)));

        let weak: Weak<ListenerSet<E>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(set) = weak.upgrade() {
                set.entries.borrow_mut().retain(|(entry_id, _)| *entry_id != id);
            }
        })
    }

    pub fn emit(&self, event: &E) {
        // Snapshot so listeners may subscribe or unsubscribe while we iterate.
        let snapshot: Vec<Listener<E>> = self
            .inner
            .entries
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: 'static> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Listeners<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E> fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.inner.entries.borrow().len())
            .finish()
    }
}

struct StoreCell<T> {
    value: RefCell<T>,
    listeners: Listeners<T>,
}

/// Shared state holder that notifies listeners only when the value changes.
///
/// Clones share the same value.
pub struct Store<T> {
    inner: Rc<StoreCell<T>>,
}

impl<T: Clone + PartialEq + 'static> Store<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(StoreCell {
                value: RefCell::new(value),
                listeners: Listeners::new(),
            }),
        }
    }

    #[must_use]
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Replace the value. Returns whether it changed (and listeners ran).
    pub fn set(&self, value: T) -> bool {
        {
            let mut current = self.inner.value.borrow_mut();
            if *current == value {
                return false;
            }
            *current = value.clone();
        }
        self.inner.listeners.emit(&value);
        true
    }

    /// Mutate in place. Returns whether the value changed.
    pub fn update(&self, f: impl FnOnce(&mut T)) -> bool {
        let mut next = self.get();
        f(&mut next);
        self.set(next)
    }

    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        self.inner.listeners.subscribe(listener)
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("value", &*self.inner.value.borrow())
            .field("listeners", &self.inner.listeners)
            .finish()
    }
}
