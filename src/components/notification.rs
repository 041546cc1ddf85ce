use crate::agents::notifier::{self, Notifier};
use yew::prelude::*;
use yew_agent::{Bridge, Bridged};

pub struct Notification {
    notifier: Box<dyn Bridge<Notifier>>,
    current: Option<notifier::Notification>,
    pending: usize,
}

pub enum Message {
    NotifierResponse(notifier::Response),
    Dismiss,
}

impl Notification {
    fn view_pending(&self) -> Html {
        match self.pending {
            0 => html! {},
            pending => html! { <span class="tag is-light">{format!("ещё {}", pending)}</span> },
        }
    }
}

impl Component for Notification {
    type Message = Message;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            notifier: Notifier::bridge(ctx.link().callback(Message::NotifierResponse)),
            current: None,
            pending: 0,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::NotifierResponse(notifier::Response::Notification(current, pending)) => {
                self.current = current;
                self.pending = pending;
                true
            }
            Message::Dismiss => {
                self.notifier.send(notifier::Request::Dismiss);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let notification = match &self.current {
            Some(notification) => notification,
            None => return html! {},
        };

        html! {
            <article class={classes!("message", notification.severity.css_class())}>
                <div class="message-header">
                    <p>{notification.severity.heading()}</p>
                    { self.view_pending() }
                    <button class="delete" aria-label="delete" onclick={ctx.link().callback(|_| Message::Dismiss)}></button>
                </div>
                <div class="message-body">{notification.text.clone()}</div>
            </article>
        }
    }
}
