use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use yew::prelude::*;

use crate::config::Config;
use crate::services::actions::Acknowledgment;

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u32,
    pub ack: Acknowledgment,
}

/// Visible toasts, oldest first
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

impl ToastQueue {
    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
        if self.toasts.len() > Config::MAX_TOASTS {
            let overflow = self.toasts.len() - Config::MAX_TOASTS;
            self.toasts.drain(..overflow);
        }
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn contains(&self, id: u32) -> bool {
        self.toasts.iter().any(|t| t.id == id)
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(toast) => next.push(toast),
            ToastAction::Dismiss(id) => next.dismiss(id),
        }
        Rc::new(next)
    }
}

/// Handle returned by `use_toasts` hook
#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    pub queue: UseReducerHandle<ToastQueue>,
    pub push: Callback<Acknowledgment>,
    pub dismiss: Callback<u32>,
}

const MAX_TRACKED: u32 = Config::MAX_TOASTS as u32;

/// Custom hook for transient acknowledgments that dismiss themselves
#[hook]
pub fn use_toasts() -> ToastHandle {
    let queue = use_reducer(ToastQueue::default);
    let next_id = use_mut_ref(|| 0u32);
    let timers: Rc<RefCell<HashMap<u32, Timeout>>> = use_mut_ref(HashMap::new);

    // Effect: cancel pending dismissals on unmount
    {
        let timers = timers.clone();
        use_effect_with((), move |_| move || timers.borrow_mut().clear());
    }

    let push = {
        let queue = queue.clone();
        Callback::from(move |ack: Acknowledgment| {
            let id = {
                let mut next = next_id.borrow_mut();
                let id = *next;
                *next = id.wrapping_add(1);
                id
            };

            // Only the most recent MAX_TOASTS toasts can still be visible
            timers
                .borrow_mut()
                .retain(|k, _| id.wrapping_sub(*k) <= MAX_TRACKED);

            queue.dispatch(ToastAction::Push(Toast { id, ack }));

            let queue = queue.clone();
            let timeout = Timeout::new(Config::TOAST_DURATION_MS, move || {
                queue.dispatch(ToastAction::Dismiss(id));
            });
            timers.borrow_mut().insert(id, timeout);
        })
    };

    let dismiss = {
        let queue = queue.clone();
        Callback::from(move |id: u32| queue.dispatch(ToastAction::Dismiss(id)))
    };

    ToastHandle {
        queue,
        push,
        dismiss,
    }
}
