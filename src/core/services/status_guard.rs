use std::cell::Cell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use leptos::prelude::*;

use crate::core::logging;
use crate::core::models::{StatusPatch, TaskStatus};

pub type StatusUpdateFuture = Pin<Box<dyn Future<Output = Result<(), String>>>>;

// (task_id, patch) -> settles once the caller has applied or rejected the change
pub type StatusUpdateHandler = Rc<dyn Fn(String, StatusPatch) -> StatusUpdateFuture>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
}

/// Storage for a card's in-flight flag. A signal in the browser, a `Cell` in tests.
pub trait GuardState {
    fn request_state(&self) -> RequestState;
    fn set_request_state(&self, state: RequestState);

    fn is_pending(&self) -> bool {
        self.request_state() == RequestState::Pending
    }
}

impl GuardState for RwSignal<RequestState> {
    fn request_state(&self) -> RequestState {
        // a card unmounted mid-request has a disposed signal
        self.try_get_untracked().unwrap_or_default()
    }

    fn set_request_state(&self, state: RequestState) {
        let _ = self.try_set(state);
    }
}

impl GuardState for Cell<RequestState> {
    fn request_state(&self) -> RequestState {
        self.get()
    }

    fn set_request_state(&self, state: RequestState) {
        self.set(state);
    }
}

impl<G: GuardState> GuardState for Rc<G> {
    fn request_state(&self) -> RequestState {
        self.as_ref().request_state()
    }

    fn set_request_state(&self, state: RequestState) {
        self.as_ref().set_request_state(state);
    }
}

// Holds the guard in Pending and puts it back to Idle when dropped, whichever way the request ends
struct PendingRequest<'a, G: GuardState> {
    guard: &'a G,
}

impl<'a, G: GuardState> PendingRequest<'a, G> {
    fn acquire(guard: &'a G) -> Option<Self> {
        if guard.is_pending() {
            return None;
        }
        guard.set_request_state(RequestState::Pending);
        Some(Self { guard })
    }
}

impl<G: GuardState> Drop for PendingRequest<'_, G> {
    fn drop(&mut self) {
        self.guard.set_request_state(RequestState::Idle);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusControl {
    // click on the status badge
    Cycle,
    // the checkbox in the header
    QuickComplete,
}

impl StatusControl {
    pub fn next_status(&self, current: &TaskStatus) -> TaskStatus {
        match self {
            StatusControl::Cycle => {
                if let TaskStatus::Other(label) = current {
                    logging::warn(&format!("Unrecognized task status {:?}, resetting to To Do", label));
                }
                current.cycle_next()
            }
            StatusControl::QuickComplete => current.quick_toggle(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    // another request from the same card was still in flight
    Rejected,
    Applied(TaskStatus),
    Failed(String),
}

/// Decides what a click on either status control should request, if anything.
/// No handler or a request already in flight means the click is ignored.
pub fn plan_status_change<G: GuardState>(
    handler: Option<&StatusUpdateHandler>,
    guard: &G,
    control: StatusControl,
    current: &TaskStatus,
) -> Option<(StatusUpdateHandler, TaskStatus)> {
    let handler = handler?;
    if guard.is_pending() {
        return None;
    }
    Some((handler.clone(), control.next_status(current)))
}

/// Sends one status change through `handler` unless the card already has one pending.
pub async fn run_status_update<G: GuardState>(
    guard: &G,
    handler: &StatusUpdateHandler,
    task_id: String,
    next_status: TaskStatus,
) -> UpdateOutcome {
    let Some(_pending) = PendingRequest::acquire(guard) else {
        return UpdateOutcome::Rejected;
    };

    match handler(task_id, StatusPatch::new(next_status.clone())).await {
        Ok(()) => UpdateOutcome::Applied(next_status),
        Err(e) => {
            logging::error(&format!("Failed to update task status: {}", e));
            UpdateOutcome::Failed(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Task;
    use chrono::NaiveDate;
    use futures::executor::block_on;
    use futures::FutureExt;
    use std::cell::RefCell;

    type Calls = Rc<RefCell<Vec<(String, StatusPatch)>>>;

    fn recording_handler(result: Result<(), String>) -> (StatusUpdateHandler, Calls) {
        let calls: Calls = Rc::new(RefCell::new(Vec::new()));
        let recorded = calls.clone();
        let handler: StatusUpdateHandler = Rc::new(move |id: String, patch: StatusPatch| -> StatusUpdateFuture {
            recorded.borrow_mut().push((id, patch));
            let result = result.clone();
            Box::pin(async move { result })
        });
        (handler, calls)
    }

    #[test]
    fn applies_and_returns_to_idle() {
        let guard = Cell::new(RequestState::Idle);
        let (handler, calls) = recording_handler(Ok(()));

        let outcome = block_on(run_status_update(&guard, &handler, "42".into(), TaskStatus::InProgress));

        assert_eq!(outcome, UpdateOutcome::Applied(TaskStatus::InProgress));
        assert_eq!(guard.get(), RequestState::Idle);
        assert_eq!(*calls.borrow(), vec![("42".to_string(), StatusPatch::new(TaskStatus::InProgress))]);
    }

    #[test]
    fn failure_is_reported_and_guard_released() {
        let guard = Cell::new(RequestState::Idle);
        let (handler, calls) = recording_handler(Err("backend unavailable".into()));

        let outcome = block_on(run_status_update(&guard, &handler, "1".into(), TaskStatus::Done));

        assert_eq!(outcome, UpdateOutcome::Failed("backend unavailable".into()));
        assert_eq!(guard.get(), RequestState::Idle);
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn pending_guard_rejects_without_calling_handler() {
        let guard = Cell::new(RequestState::Pending);
        let (handler, calls) = recording_handler(Ok(()));

        let outcome = block_on(run_status_update(&guard, &handler, "1".into(), TaskStatus::Done));

        assert_eq!(outcome, UpdateOutcome::Rejected);
        assert!(calls.borrow().is_empty());
        assert_eq!(guard.get(), RequestState::Pending);
    }

    #[test]
    fn guard_is_pending_while_handler_runs() {
        let guard = Rc::new(Cell::new(RequestState::Idle));
        let seen = Rc::new(Cell::new(RequestState::Idle));
        let handler: StatusUpdateHandler = {
            let guard = guard.clone();
            let seen = seen.clone();
            Rc::new(move |_: String, _: StatusPatch| -> StatusUpdateFuture {
                seen.set(guard.get());
                Box::pin(async { Ok(()) })
            })
        };

        block_on(run_status_update(&guard, &handler, "1".into(), TaskStatus::Done));

        assert_eq!(seen.get(), RequestState::Pending);
        assert_eq!(guard.get(), RequestState::Idle);
    }

    #[test]
    fn second_request_during_first_is_rejected() {
        let guard = Rc::new(Cell::new(RequestState::Idle));
        let handler: StatusUpdateHandler = Rc::new(|_: String, _: StatusPatch| -> StatusUpdateFuture { Box::pin(futures::future::pending()) });

        let mut first = Box::pin(run_status_update(&guard, &handler, "1".into(), TaskStatus::Done));
        assert!(first.as_mut().now_or_never().is_none());
        assert_eq!(guard.get(), RequestState::Pending);

        let (other_handler, calls) = recording_handler(Ok(()));
        let second = block_on(run_status_update(&guard, &other_handler, "1".into(), TaskStatus::ToDo));
        assert_eq!(second, UpdateOutcome::Rejected);
        assert!(calls.borrow().is_empty());

        drop(first);
        assert_eq!(guard.get(), RequestState::Idle);
    }

    #[test]
    fn status_badge_clicks_walk_the_ring() {
        let task = Rc::new(RefCell::new(Task {
            id: "t1".into(),
            title: "Ship".into(),
            description: String::new(),
            assignee: "Ana".into(),
            task_type: crate::core::models::TaskType::React,
            status: TaskStatus::ToDo,
            due_date: NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
        }));
        let patches = Rc::new(RefCell::new(Vec::new()));
        let handler: StatusUpdateHandler = {
            let task = task.clone();
            let patches = patches.clone();
            Rc::new(move |_: String, patch: StatusPatch| -> StatusUpdateFuture {
                task.borrow_mut().update_status(patch.status.clone());
                patches.borrow_mut().push(patch.status);
                Box::pin(async { Ok(()) })
            })
        };
        let guard = Cell::new(RequestState::Idle);

        for _ in 0..4 {
            let next = StatusControl::Cycle.next_status(&task.borrow().status);
            block_on(run_status_update(&guard, &handler, "t1".into(), next));
        }

        assert_eq!(
            *patches.borrow(),
            vec![TaskStatus::InProgress, TaskStatus::Done, TaskStatus::ToDo, TaskStatus::InProgress]
        );
    }

    #[test]
    fn quick_complete_bypasses_ring() {
        let guard = Cell::new(RequestState::Idle);
        let (handler, calls) = recording_handler(Ok(()));
        let next = StatusControl::QuickComplete.next_status(&TaskStatus::InProgress);

        block_on(run_status_update(&guard, &handler, "9".into(), next));

        assert_eq!(calls.borrow()[0].1, StatusPatch::new(TaskStatus::Done));
    }

    #[test]
    fn click_without_handler_requests_nothing() {
        let guard = Cell::new(RequestState::Idle);
        for control in [StatusControl::Cycle, StatusControl::QuickComplete] {
            assert!(plan_status_change(None, &guard, control, &TaskStatus::ToDo).is_none());
        }
        assert_eq!(guard.get(), RequestState::Idle);
    }

    #[test]
    fn click_while_pending_requests_nothing() {
        let guard = Cell::new(RequestState::Pending);
        let (handler, calls) = recording_handler(Ok(()));
        for control in [StatusControl::Cycle, StatusControl::QuickComplete] {
            assert!(plan_status_change(Some(&handler), &guard, control, &TaskStatus::ToDo).is_none());
        }
        assert!(calls.borrow().is_empty());
        assert_eq!(guard.get(), RequestState::Pending);
    }

    #[test]
    fn idle_click_plans_next_status_per_control() {
        let guard = Cell::new(RequestState::Idle);
        let (handler, calls) = recording_handler(Ok(()));

        let cycle = plan_status_change(Some(&handler), &guard, StatusControl::Cycle, &TaskStatus::InProgress);
        assert_eq!(cycle.map(|(_, next)| next), Some(TaskStatus::Done));

        let quick = plan_status_change(Some(&handler), &guard, StatusControl::QuickComplete, &TaskStatus::InProgress);
        let (planned_handler, next) = quick.unwrap();
        assert_eq!(next, TaskStatus::Done);

        // planning alone neither calls the handler nor touches the guard
        assert!(calls.borrow().is_empty());
        assert_eq!(guard.get(), RequestState::Idle);

        block_on(run_status_update(&guard, &planned_handler, "5".into(), next));
        assert_eq!(calls.borrow()[0].1, StatusPatch::new(TaskStatus::Done));
    }

    #[test]
    fn cycle_from_unknown_status_requests_todo() {
        let next = StatusControl::Cycle.next_status(&TaskStatus::Other("Blocked".into()));
        assert_eq!(next, TaskStatus::ToDo);
    }
}
