use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Something that can tell the operator how an action went.
pub trait Notifier {
    fn notify_success(&self, message: &str);
    fn notify_error(&self, message: &str);
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn classes(&self) -> &'static str {
        match self {
            ToastKind::Success => "bg-emerald-500 text-white",
            ToastKind::Error => "bg-red-500 text-white",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub add_toast: Callback<(String, ToastKind)>,
    pub remove_toast: Callback<usize>,
}

impl Notifier for ToastContext {
    fn notify_success(&self, message: &str) {
        self.add_toast.emit((message.to_string(), ToastKind::Success));
    }

    fn notify_error(&self, message: &str) {
        self.add_toast.emit((message.to_string(), ToastKind::Error));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
    /// How long a toast stays up before it removes itself.
    #[prop_or(5000)]
    pub duration_ms: u32,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastList::default);

    let next_id = use_mut_ref(|| 0usize);

    let add_toast = {
        let toasts = toasts.dispatcher();
        use_callback(
            move |(message, kind): (String, ToastKind), duration_ms| {
                let id = {
                    let mut next_id = next_id.borrow_mut();
                    *next_id += 1;
                    *next_id
                };
                log::debug!("Showing {kind:?} toast #{id}: {message}");
                toasts.dispatch(ToastAction::Add(Toast { id, message, kind }));

                let toasts = toasts.clone();
                Timeout::new(*duration_ms, move || toasts.dispatch(ToastAction::Remove(id)))
                    .forget();
            },
            props.duration_ms,
        )
    };

    let remove_toast = {
        let toasts = toasts.dispatcher();
        use_callback(
            move |id: usize, _| toasts.dispatch(ToastAction::Remove(id)),
            (),
        )
    };

    let context = ToastContext {
        add_toast,
        remove_toast: remove_toast.clone(),
    };

    html! {
        <ContextProvider<ToastContext> {context}>
            { for props.children.iter() }
            <div class="fixed top-4 right-4 z-50 flex flex-col gap-2">
                { for toasts.items.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let remove_toast = remove_toast.clone();
                        Callback::from(move |_: MouseEvent| remove_toast.emit(id))
                    };
                    html! {
                        <div key={id} class={classes!("flex", "items-center", "gap-3", "px-4", "py-2", "rounded-lg", "shadow-lg", toast.kind.classes())} role="status">
                            <span>{&toast.message}</span>
                            <button class="opacity-70 hover:opacity-100" onclick={on_close}>{"×"}</button>
                        </div>
                    }
                }) }
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[derive(Default, PartialEq)]
struct ToastList {
    items: Vec<Toast>,
}

enum ToastAction {
    Add(Toast),
    Remove(usize),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut items = self.items.clone();
        match action {
            ToastAction::Add(toast) => items.push(toast),
            ToastAction::Remove(id) => items.retain(|t| t.id != id),
        }
        ToastList { items }.into()
    }
}
