use std::cell::Cell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::state::Notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastStack {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

impl ToastStack {
    pub fn apply(&mut self, action: ToastAction) {
        match action {
            ToastAction::Push(toast) => self.toasts.push(toast),
            ToastAction::Dismiss(id) => self.toasts.retain(|toast| toast.id != id),
        }
    }
}

impl Reducible for ToastStack {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

/// Handle handed to components for raising toasts
#[derive(Clone)]
pub struct Toaster {
    dispatcher: UseReducerDispatcher<ToastStack>,
    next_id: Rc<Cell<u32>>,
    duration_ms: u32,
}

impl PartialEq for Toaster {
    fn eq(&self, other: &Self) -> bool {
        self.dispatcher == other.dispatcher && Rc::ptr_eq(&self.next_id, &other.next_id)
    }
}

impl Toaster {
    fn push(&self, kind: ToastKind, message: &str) {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        self.dispatcher.dispatch(ToastAction::Push(Toast {
            id,
            kind,
            message: message.to_string(),
        }));

        let dispatcher = self.dispatcher.clone();
        Timeout::new(self.duration_ms, move || {
            dispatcher.dispatch(ToastAction::Dismiss(id));
        })
        .forget();
    }
}

impl Notifier for Toaster {
    fn success(&self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(ToastKind::Error, message);
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub duration_ms: u32,
    #[prop_or_default]
    pub children: Html,
}

/// Provides a [`Toaster`] to descendants and renders the toast stack
#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let stack = use_reducer(ToastStack::default);
    let next_id = use_memo((), |_| Cell::new(0u32));

    let toaster = Toaster {
        dispatcher: stack.dispatcher(),
        next_id,
        duration_ms: props.duration_ms,
    };

    html! {
        <ContextProvider<Toaster> context={toaster}>
            { props.children.clone() }
            <div class="toast-container" role="status" aria-live="polite">
                {for stack.toasts.iter().map(|toast| {
                    let on_click = {
                        let dispatcher = stack.dispatcher();
                        let id = toast.id;
                        Callback::from(move |_: MouseEvent| {
                            dispatcher.dispatch(ToastAction::Dismiss(id))
                        })
                    };
                    html! {
                        <div key={toast.id} class={toast.kind.class()} onclick={on_click}>
                            { toast.message.clone() }
                        </div>
                    }
                })}
            </div>
        </ContextProvider<Toaster>>
    }
}
