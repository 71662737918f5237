use std::cell::RefCell;
use std::rc::Rc;

pub type SubId = u64;

/// Single-threaded observable value. Cloning the handle shares the cell.
#[derive(Clone)]
pub struct Signal<T: 'static>(Rc<RefCell<Inner<T>>>);

struct Inner<T> {
    value: T,
    next_sub: SubId,
    subs: Vec<(SubId, Rc<dyn Fn(&T)>)>,
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            next_sub: 0,
            subs: Vec::new(),
        })))
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().value.clone()
    }

    /// Set the value and notify subscribers. The cell borrow is released
    /// before any subscriber runs, so subscribers may read or write this
    /// signal re-entrantly.
    pub fn set(&self, v: T)
    where
        T: Clone,
    {
        let (value, subs) = {
            let mut inner = self.0.borrow_mut();
            inner.value = v;
            (inner.value.clone(), snapshot(&inner.subs))
        };
        for s in subs {
            s(&value);
        }
    }

    pub fn update<F: FnOnce(&mut T)>(&self, f: F)
    where
        T: Clone,
    {
        let (value, subs) = {
            let mut inner = self.0.borrow_mut();
            f(&mut inner.value);
            (inner.value.clone(), snapshot(&inner.subs))
        };
        for s in subs {
            s(&value);
        }
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        let mut inner = self.0.borrow_mut();
        let id = inner.next_sub;
        inner.next_sub += 1;
        inner.subs.push((id, Rc::new(f)));
        id
    }

    /// Drop a subscription. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubId) {
        self.0.borrow_mut().subs.retain(|(sid, _)| *sid != id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.0.borrow().subs.len()
    }
}

fn snapshot<T>(subs: &[(SubId, Rc<dyn Fn(&T)>)]) -> Vec<Rc<dyn Fn(&T)>> {
    subs.iter().map(|(_, s)| s.clone()).collect()
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}
