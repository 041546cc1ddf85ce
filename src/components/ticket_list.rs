use super::{CurrencySwitch, StopFilterPanel, TicketCard};
use crate::agents::{
    fetcher::{Fetcher, Request as FetcherRequest, Response as FetcherResponse},
    notifier,
};
use crate::objects::{Currency, StopToggle, ViewConfig};
use crate::view_model::TicketListState;
use yew::prelude::*;
use yew_agent::{Bridge, Bridged, Dispatched, Dispatcher};

pub struct TicketList {
    state: TicketListState,
    _fetcher: Box<dyn Bridge<Fetcher>>,
    notifier: Dispatcher<notifier::Notifier>,
}

pub enum Message {
    FetcherMessage(FetcherResponse),
    ToggleStop(StopToggle),
    SetCurrency(Currency),
}

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub config: ViewConfig,
}

impl TicketList {
    fn refresh_views(&mut self, config: &ViewConfig) {
        if let Some(e) = self.state.refresh(config) {
            self.notifier.send(notifier::Request::ViewFailed(e));
        }
    }

    fn process_fetcher_response(&mut self, response: FetcherResponse) {
        match response {
            FetcherResponse::Tickets(Ok(feed)) => {
                let report = self.state.load(feed);

                log::info!("loaded {} tickets", report.accepted);
                if !report.rejected.is_empty() {
                    self.notifier
                        .send(notifier::Request::RecordsSkipped(report.rejected));
                }
            }
            FetcherResponse::Tickets(Err(e)) => {
                self.state.load_failed();
                self.notifier.send(notifier::Request::LoadFailed(e));
            }
        }
    }

    fn view_controls(&self, ctx: &Context<Self>) -> Html {
        html! {
            <nav class="panel">
                <p class="panel-heading">{"Валюта"}</p>
                <div class="panel-block">
                    <CurrencySwitch selected={self.state.currency()} onchange={ctx.link().callback(Message::SetCurrency)}/>
                </div>
                <StopFilterPanel filter={self.state.filter().clone()} ontoggle={ctx.link().callback(Message::ToggleStop)}/>
            </nav>
        }
    }

    fn view_ticket_list(&self) -> Html {
        match (self.state.is_loading(), self.state.views()) {
            (true, _) => html! { <p>{"Загрузка билетов..."}</p> },
            (false, []) => html! { <p>{"Билеты не найдены"}</p> },
            (false, views) => views
                .iter()
                .map(|ticket| html! { <TicketCard key={ticket.id} ticket={ticket.clone()}/> })
                .collect::<Html>(),
        }
    }
}

impl Component for TicketList {
    type Message = Message;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let cb = ctx.link().callback(Message::FetcherMessage);
        let mut fetcher = Fetcher::bridge(cb);

        fetcher.send(FetcherRequest::FetchTickets(
            ctx.props().config.tickets_url.clone(),
        ));

        Self {
            state: TicketListState::default(),
            _fetcher: fetcher,
            notifier: notifier::Notifier::dispatcher(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::FetcherMessage(response) => self.process_fetcher_response(response),
            Message::ToggleStop(toggle) => {
                log::debug!("toggling stops: {:?}", toggle);
                self.state.toggle_stop(toggle);
            }
            Message::SetCurrency(currency) => {
                if !self.state.set_currency(currency) {
                    return false;
                }
                log::debug!("switching currency to {}", currency);
            }
        }

        self.refresh_views(&ctx.props().config);
        true
    }

    fn changed(&mut self, ctx: &Context<Self>) -> bool {
        self.refresh_views(&ctx.props().config);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section class="section">
                <div class="columns">
                    <div class="column is-one-quarter">
                        { self.view_controls(ctx) }
                    </div>
                    <div class="column">
                        { self.view_ticket_list() }
                    </div>
                </div>
            </section>
        }
    }
}
