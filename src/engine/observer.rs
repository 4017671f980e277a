//! Change notification for renderers.
//!
//! A renderer registers a `ViewObserver` with the engine and receives the
//! fresh `ViewState` after every change. The engine stays passive: it only
//! calls observers synchronously at the end of a state-changing operation.

use super::view::ViewState;

/// Receives view updates. Implemented for every `FnMut(&ViewState)`.
pub trait ViewObserver {
    fn on_change(&mut self, view: &ViewState);
}

impl<F> ViewObserver for F
where
    F: FnMut(&ViewState),
{
    fn on_change(&mut self, view: &ViewState) {
        self(view);
    }
}

/// Handle returned by `Game::subscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

impl std::fmt::Display for ObserverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Observer({})", self.0)
    }
}

/// Registered observers, notified in registration order.
#[derive(Default)]
pub(crate) struct ObserverRegistry {
    observers: Vec<(ObserverId, Box<dyn ViewObserver>)>,
    next_id: u64,
}

impl ObserverRegistry {
    pub(crate) fn subscribe(&mut self, observer: Box<dyn ViewObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }

    pub(crate) fn notify(&mut self, view: &ViewState) {
        for (_, observer) in &mut self.observers {
            observer.on_change(view);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::core::{Board, Mark};
    use crate::rules::GameStatus;

    fn sample_view() -> ViewState {
        ViewState {
            board: Board::empty(),
            status: GameStatus::InProgress(Mark::X),
            moves: Vec::new(),
            current_index: 0,
            winning_line: None,
        }
    }

    #[test]
    fn test_notify_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ObserverRegistry::default();

        for tag in ["first", "second", "third"] {
            let log = Rc::clone(&log);
            registry.subscribe(Box::new(move |_: &ViewState| log.borrow_mut().push(tag)));
        }

        registry.notify(&sample_view());
        assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut registry = ObserverRegistry::default();

        let counter = Rc::clone(&count);
        let id = registry.subscribe(Box::new(move |_: &ViewState| *counter.borrow_mut() += 1));
        assert_eq!(registry.len(), 1);

        registry.notify(&sample_view());
        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));
        assert!(registry.is_empty());

        registry.notify(&sample_view());
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_unsubscribe_keeps_remaining_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ObserverRegistry::default();

        let ids: Vec<_> = ["first", "second", "third"]
            .into_iter()
            .map(|tag| {
                let log = Rc::clone(&log);
                registry.subscribe(Box::new(move |_: &ViewState| log.borrow_mut().push(tag)))
            })
            .collect();

        assert!(registry.unsubscribe(ids[1]));
        registry.subscribe({
            let log = Rc::clone(&log);
            Box::new(move |_: &ViewState| log.borrow_mut().push("fourth"))
        });

        registry.notify(&sample_view());
        assert_eq!(*log.borrow(), vec!["first", "third", "fourth"]);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut registry = ObserverRegistry::default();
        let a = registry.subscribe(Box::new(|_: &ViewState| {}));
        let b = registry.subscribe(Box::new(|_: &ViewState| {}));
        assert_ne!(a, b);
    }
}
