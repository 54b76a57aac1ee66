// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Continuation-passing interceptors for add/edit/remove actions.
//!
//! An action never mutates the list directly. It computes the next list,
//! wraps it in a continuation, and hands both the affected item and the
//! continuation to the configured interceptor. Only calling the
//! continuation commits; dropping it vetoes the action.

use std::fmt;
use std::rc::Rc;

/// Metadata passed along with change/blur notifications.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChangeMeta;

/// Receiver of the two-step commit signal. Implemented by the field wrapper.
pub trait FieldNotifier<T> {
    /// The field value changed.
    fn on_change(&self, value: Vec<T>, meta: ChangeMeta);
    /// The field was interacted with (marks it touched).
    fn on_blur(&self, value: Vec<T>, meta: ChangeMeta);
}

/// Terminal step shared by every action: notify change, then blur.
pub struct CommitSink<T> {
    notifier: Rc<dyn FieldNotifier<T>>,
}

impl<T> Clone for CommitSink<T> {
    fn clone(&self) -> Self {
        Self {
            notifier: Rc::clone(&self.notifier),
        }
    }
}

impl<T: Clone> CommitSink<T> {
    pub fn new(notifier: Rc<dyn FieldNotifier<T>>) -> Self {
        Self { notifier }
    }

    /// Send `list` as the new field value, followed by a blur with the same content.
    pub fn commit(&self, list: Vec<T>) {
        tracing::debug!(len = list.len(), "committing rich list value");
        self.notifier.on_change(list.clone(), ChangeMeta);
        self.notifier.on_blur(list, ChangeMeta);
    }
}

/// Continuation for add and remove: commits a precomputed list.
pub struct Proceed<T> {
    next: Vec<T>,
    sink: CommitSink<T>,
}

impl<T: Clone> Proceed<T> {
    pub fn new(next: Vec<T>, sink: CommitSink<T>) -> Self {
        Self { next, sink }
    }

    /// The list that will be committed.
    pub fn next(&self) -> &[T] {
        &self.next
    }

    /// Commit the precomputed list.
    pub fn proceed(self) {
        self.sink.commit(self.next);
    }
}

/// Continuation for edit, parameterized by the data the caller decides to write.
pub struct EditProceed<T> {
    base: Vec<T>,
    index: usize,
    proposed: T,
    sink: CommitSink<T>,
}

impl<T: Clone> EditProceed<T> {
    pub fn new(base: Vec<T>, index: usize, proposed: T, sink: CommitSink<T>) -> Self {
        Self {
            base,
            index,
            proposed,
            sink,
        }
    }

    /// Position being edited.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Data supplied by the edit trigger.
    pub fn proposed(&self) -> &T {
        &self.proposed
    }

    /// Commit the list with the edited position replaced by `data`.
    pub fn commit(self, data: T) {
        let next = super::item_list::replaced(&self.base, self.index, data);
        self.sink.commit(next);
    }

    /// Commit the data supplied by the edit trigger.
    pub fn commit_proposed(self) {
        let data = self.proposed.clone();
        self.commit(data);
    }
}

/// How a single action is intercepted before it commits.
pub enum Interceptor<T, C> {
    /// Invoke the continuation immediately.
    PassThrough,
    /// Synchronous accept/reject.
    Guard(Rc<dyn Fn(&T) -> bool>),
    /// Receive the continuation and call it now, later, or never.
    Deferred(Rc<dyn Fn(&T, C)>),
}

pub type AddInterceptor<T> = Interceptor<T, Proceed<T>>;
pub type EditInterceptor<T> = Interceptor<T, EditProceed<T>>;
pub type RemoveInterceptor<T> = Interceptor<T, Proceed<T>>;

impl<T, C> Interceptor<T, C> {
    pub fn guard(accept: impl Fn(&T) -> bool + 'static) -> Self {
        Self::Guard(Rc::new(accept))
    }

    pub fn deferred(handler: impl Fn(&T, C) + 'static) -> Self {
        Self::Deferred(Rc::new(handler))
    }
}

impl<T, C> Default for Interceptor<T, C> {
    fn default() -> Self {
        Self::PassThrough
    }
}

impl<T, C> Clone for Interceptor<T, C> {
    fn clone(&self) -> Self {
        match self {
            Self::PassThrough => Self::PassThrough,
            Self::Guard(f) => Self::Guard(Rc::clone(f)),
            Self::Deferred(f) => Self::Deferred(Rc::clone(f)),
        }
    }
}

impl<T, C> fmt::Debug for Interceptor<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PassThrough => "PassThrough",
            Self::Guard(_) => "Guard",
            Self::Deferred(_) => "Deferred",
        };
        f.write_str(name)
    }
}

impl<T: Clone> Interceptor<T, Proceed<T>> {
    /// Route `item` and its continuation through this interceptor.
    pub fn intercept(&self, item: &T, cont: Proceed<T>) {
        match self {
            Self::PassThrough => cont.proceed(),
            Self::Guard(accept) => {
                if accept(item) {
                    cont.proceed();
                } else {
                    tracing::debug!("rich list action vetoed by guard");
                }
            }
            Self::Deferred(handler) => handler(item, cont),
        }
    }
}

impl<T: Clone> Interceptor<T, EditProceed<T>> {
    /// Route an edit through this interceptor.
    ///
    /// `Deferred` receives the original item; `Guard` judges the proposed data.
    pub fn intercept(&self, original: &T, cont: EditProceed<T>) {
        match self {
            Self::PassThrough => cont.commit_proposed(),
            Self::Guard(accept) => {
                if accept(cont.proposed()) {
                    cont.commit_proposed();
                } else {
                    tracing::debug!(index = cont.index(), "rich list edit vetoed by guard");
                }
            }
            Self::Deferred(handler) => handler(original, cont),
        }
    }
}

/// The three interceptors of a rich list.
pub struct InterceptorSet<T> {
    pub on_add_item: AddInterceptor<T>,
    pub on_edit_item: EditInterceptor<T>,
    pub on_remove_item: RemoveInterceptor<T>,
}

impl<T> Default for InterceptorSet<T> {
    fn default() -> Self {
        Self {
            on_add_item: Interceptor::PassThrough,
            on_edit_item: Interceptor::PassThrough,
            on_remove_item: Interceptor::PassThrough,
        }
    }
}

impl<T> Clone for InterceptorSet<T> {
    fn clone(&self) -> Self {
        Self {
            on_add_item: self.on_add_item.clone(),
            on_edit_item: self.on_edit_item.clone(),
            on_remove_item: self.on_remove_item.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::*;

    /// Records notifications in arrival order.
    pub struct RecordingNotifier<T> {
        pub events: RefCell<Vec<(&'static str, Vec<T>)>>,
    }

    impl<T> Default for RecordingNotifier<T> {
        fn default() -> Self {
            Self {
                events: RefCell::new(Vec::new()),
            }
        }
    }

    impl<T> RecordingNotifier<T> {
        pub fn commits(&self) -> usize {
            self.events.borrow().len() / 2
        }
    }

    impl<T: Clone> RecordingNotifier<T> {
        pub fn last_value(&self) -> Option<Vec<T>> {
            self.events.borrow().last().map(|(_, v)| v.clone())
        }
    }

    impl<T> FieldNotifier<T> for RecordingNotifier<T> {
        fn on_change(&self, value: Vec<T>, _meta: ChangeMeta) {
            self.events.borrow_mut().push(("change", value));
        }

        fn on_blur(&self, value: Vec<T>, _meta: ChangeMeta) {
            self.events.borrow_mut().push(("blur", value));
        }
    }

    pub fn recording_sink<T: Clone + 'static>() -> (Rc<RecordingNotifier<T>>, CommitSink<T>) {
        let notifier = Rc::new(RecordingNotifier::default());
        let sink = CommitSink::new(notifier.clone() as Rc<dyn FieldNotifier<T>>);
        (notifier, sink)
    }
}
