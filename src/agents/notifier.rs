use std::collections::{HashSet, VecDeque};
use yew_agent::{Agent, AgentLink, Context, HandlerId};

use crate::objects::AppError;

/// Queues user-facing messages about loading and displaying tickets.
pub struct Notifier {
    subscribers: HashSet<HandlerId>,
    link: AgentLink<Self>,
    notifications: VecDeque<Notification>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationSeverity {
    Error,
    Info,
}

impl NotificationSeverity {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationSeverity::Error => "is-danger",
            NotificationSeverity::Info => "is-info",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            NotificationSeverity::Error => "Ошибка",
            NotificationSeverity::Info => "Внимание",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub text: String,
    pub severity: NotificationSeverity,
}

impl Notification {
    pub fn load_failed(err: &AppError) -> Self {
        Self {
            text: format!("Не удалось загрузить билеты: {}", err),
            severity: NotificationSeverity::Error,
        }
    }

    pub fn records_skipped(rejected: &[AppError]) -> Option<Self> {
        match rejected.len() {
            0 => None,
            count => Some(Self {
                text: format!("Пропущено некорректных билетов: {}", count),
                severity: NotificationSeverity::Info,
            }),
        }
    }

    pub fn view_failed(err: &AppError) -> Self {
        Self {
            text: format!("Не удалось отобразить билеты: {}", err),
            severity: NotificationSeverity::Error,
        }
    }
}

#[derive(Debug)]
pub enum Request {
    LoadFailed(AppError),
    RecordsSkipped(Vec<AppError>),
    ViewFailed(AppError),
    Dismiss,
}

#[derive(Debug, Clone)]
pub enum Response {
    /// The notification on display and how many wait behind it.
    Notification(Option<Notification>, usize),
}

impl Notifier {
    fn notify_subscribed(&self) {
        let pending = self.notifications.len().saturating_sub(1);

        for subscriber in &self.subscribers {
            if subscriber.is_respondable() {
                self.link.respond(
                    *subscriber,
                    Response::Notification(self.notifications.front().cloned(), pending),
                );
            }
        }
    }

    fn enqueue(&mut self, notification: Notification) {
        if self.notifications.back() != Some(&notification) {
            self.notifications.push_back(notification);
        }
    }
}

impl Agent for Notifier {
    type Reach = Context<Self>;
    type Message = ();
    type Input = Request;
    type Output = Response;

    fn create(link: AgentLink<Self>) -> Self {
        Self {
            link,
            subscribers: HashSet::new(),
            notifications: VecDeque::new(),
        }
    }

    fn update(&mut self, _msg: Self::Message) {}

    fn handle_input(&mut self, msg: Self::Input, _id: HandlerId) {
        match msg {
            Request::LoadFailed(err) => {
                log::error!("could not load tickets: {}", err);
                self.enqueue(Notification::load_failed(&err));
            }
            Request::RecordsSkipped(rejected) => {
                for rejection in &rejected {
                    log::warn!("skipping ticket: {}", rejection);
                }
                if let Some(notification) = Notification::records_skipped(&rejected) {
                    self.enqueue(notification);
                }
            }
            Request::ViewFailed(err) => {
                log::error!("could not derive ticket views: {}", err);
                self.enqueue(Notification::view_failed(&err));
            }
            Request::Dismiss => {
                self.notifications.pop_front();
            }
        }
        self.notify_subscribed();
    }

    fn connected(&mut self, id: HandlerId) {
        self.subscribers.insert(id);
        self.notify_subscribed();
    }

    fn disconnected(&mut self, id: HandlerId) {
        self.subscribers.remove(&id);
    }
}
