use crate::objects::{AppError, TicketFeed};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use yew_agent::{Agent, AgentLink, Context, HandlerId};

#[derive(Debug)]
pub enum Request {
    FetchTickets(String),
}

#[derive(Debug)]
pub enum Response {
    Tickets(Result<TicketFeed, AppError>),
}

#[derive(Debug)]
pub enum Message {
    ReceiveTickets(HandlerId, Result<TicketFeed, AppError>),
}

pub struct Fetcher {
    link: AgentLink<Self>,
}

impl Agent for Fetcher {
    type Reach = Context<Self>;
    type Message = Message;
    type Input = Request;
    type Output = Response;

    fn create(link: AgentLink<Self>) -> Self {
        Self { link }
    }

    fn update(&mut self, msg: Self::Message) {
        match msg {
            Message::ReceiveTickets(handler_id, res) => {
                if handler_id.is_respondable() {
                    self.link.respond(handler_id, Response::Tickets(res));
                }
            }
        }
    }

    fn handle_input(&mut self, msg: Self::Input, id: HandlerId) {
        match msg {
            Request::FetchTickets(url) => {
                log::debug!("fetcher: requesting tickets from {}", url);
                self.link.send_future(async move {
                    Message::ReceiveTickets(id, fetch_ticket_feed(&url).await)
                });
            }
        }
    }
}

async fn fetch(url: &str) -> Result<web_sys::Response, AppError> {
    let mut opts = web_sys::RequestInit::new();
    opts.method("GET");

    let request = web_sys::Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Accept", "application/json")?;

    let window = web_sys::window().ok_or("error getting window")?;
    let resp: web_sys::Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;

    match resp.ok() {
        true => Ok(resp),
        false => {
            Err((&*format!("fetcher error: {}: {}", resp.status(), resp.status_text())).into())
        }
    }
}

async fn fetch_text(url: &str) -> Result<String, AppError> {
    JsFuture::from(fetch(url).await?.text()?)
        .await?
        .as_string()
        .ok_or_else(|| "error casting fetched value to string".into())
}

async fn fetch_ticket_feed(url: &str) -> Result<TicketFeed, AppError> {
    TicketFeed::from_json(&fetch_text(url).await?)
}
