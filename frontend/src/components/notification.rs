use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub title: String,
    pub message: String,
    pub duration_ms: u32,
    pub leaving: bool,
}

pub enum NoticeAction {
    Push { title: String, message: String, duration_ms: u32 },
    Leave(u32),
    Remove(u32),
}

/// Notices currently on screen, oldest first. No limit, no de-duplication.
#[derive(Default, Clone, PartialEq)]
pub struct NoticeList {
    next_id: u32,
    pub items: Vec<Notice>,
}

impl Reducible for NoticeList {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NoticeAction::Push { title, message, duration_ms } => {
                next.items.push(Notice {
                    id: next.next_id,
                    title,
                    message,
                    duration_ms,
                    leaving: false,
                });
                next.next_id = next.next_id.wrapping_add(1);
            }
            NoticeAction::Leave(id) => {
                if let Some(notice) = next.items.iter_mut().find(|n| n.id == id) {
                    notice.leaving = true;
                }
            }
            NoticeAction::Remove(id) => next.items.retain(|n| n.id != id),
        }
        next.into()
    }
}

/// Handle components use to raise notices.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    dispatcher: UseReducerDispatcher<NoticeList>,
    default_duration_ms: u32,
}

impl Notifier {
    pub fn new(dispatcher: UseReducerDispatcher<NoticeList>, default_duration_ms: u32) -> Self {
        Self { dispatcher, default_duration_ms }
    }

    pub fn notify(&self, title: &str, message: &str) {
        self.notify_for(title, message, self.default_duration_ms);
    }

    pub fn notify_for(&self, title: &str, message: &str, duration_ms: u32) {
        self.dispatcher.dispatch(NoticeAction::Push {
            title: title.to_string(),
            message: message.to_string(),
            duration_ms,
        });
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeStackProps {
    pub items: Vec<Notice>,
    pub dispatcher: UseReducerDispatcher<NoticeList>,
    pub fade_ms: u32,
}

#[function_component(NoticeStack)]
pub fn notice_stack(props: &NoticeStackProps) -> Html {
    html! {
        <div class="toasts" aria-live="polite">
            { for props.items.iter().map(|notice| html! {
                <NoticeItem
                    key={notice.id}
                    notice={notice.clone()}
                    dispatcher={props.dispatcher.clone()}
                    fade_ms={props.fade_ms}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NoticeItemProps {
    notice: Notice,
    dispatcher: UseReducerDispatcher<NoticeList>,
    fade_ms: u32,
}

#[function_component(NoticeItem)]
fn notice_item(props: &NoticeItemProps) -> Html {
    let id = props.notice.id;

    // Stage one: start fading after the display duration
    {
        let dispatcher = props.dispatcher.clone();
        use_effect_with_deps(
            move |duration_ms: &u32| {
                let timeout = Timeout::new(*duration_ms, move || {
                    dispatcher.dispatch(NoticeAction::Leave(id));
                });
                move || drop(timeout)
            },
            props.notice.duration_ms,
        );
    }

    // Stage two: remove once the fade has played
    {
        let dispatcher = props.dispatcher.clone();
        let fade_ms = props.fade_ms;
        use_effect_with_deps(
            move |leaving: &bool| {
                let timeout = leaving.then(|| {
                    Timeout::new(fade_ms, move || {
                        dispatcher.dispatch(NoticeAction::Remove(id));
                    })
                });
                move || drop(timeout)
            },
            props.notice.leaving,
        );
    }

    let style = if props.notice.leaving {
        "opacity: 0; transform: translateX(8px);"
    } else {
        ""
    };

    html! {
        <div class="toast" {style}>
            <p class="toast__title">{ props.notice.title.clone() }</p>
            <p class="toast__msg">{ props.notice.message.clone() }</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(list: Rc<NoticeList>, title: &str) -> Rc<NoticeList> {
        list.reduce(NoticeAction::Push {
            title: title.to_string(),
            message: String::new(),
            duration_ms: 3500,
        })
    }

    #[test]
    fn notices_stack_in_order() {
        let list = push(push(Rc::new(NoticeList::default()), "a"), "a");
        assert_eq!(list.items.len(), 2);
        assert_ne!(list.items[0].id, list.items[1].id);
    }

    #[test]
    fn leave_then_remove() {
        let list = push(push(Rc::new(NoticeList::default()), "a"), "b");
        let first = list.items[0].id;

        let list = list.reduce(NoticeAction::Leave(first));
        assert!(list.items[0].leaving);
        assert!(!list.items[1].leaving);

        let list = list.reduce(NoticeAction::Remove(first));
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].title, "b");
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let list = push(Rc::new(NoticeList::default()), "a");
        let list = list.reduce(NoticeAction::Leave(99)).reduce(NoticeAction::Remove(99));
        assert_eq!(list.items.len(), 1);
        assert!(!list.items[0].leaving);
    }
}
